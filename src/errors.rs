use thiserror::Error;


/// Failures of the shortest-path solvers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("node `{0}` is not part of the floor graph")]
    InvalidNode(String), // start or end is outside the node universe
    #[error("no walkable path connects the requested nodes")]
    NotReachable, // frontier exhausted before the goal was settled
}

/// Failures returned to the presentation layer by the router
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown destination id `{0}`")]
    InvalidDestinationId(String),
    #[error("node `{0}` is not part of the floor graph")]
    InvalidNode(String),
    #[error("no walkable path connects the requested locations")]
    NotReachable,
}

impl From<SolverError> for RouteError {
    fn from(error: SolverError) -> Self {
        match error {
            SolverError::InvalidNode(id) => RouteError::InvalidNode(id),
            SolverError::NotReachable => RouteError::NotReachable,
        }
    }
}

/// Failures while loading a floor dataset or router configuration
#[derive(Debug, Error)]
pub enum FloorDataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed floor dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed router config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("id `{id}` appears more than once")]
    DuplicateId { id: String },
    #[error("edge {index} references unknown node `{node}`")]
    UnknownEdgeNode { index: usize, node: String },
    #[error("edge {index} ({from} -> {to}) has invalid weight {weight}")]
    InvalidWeight { index: usize, from: String, to: String, weight: f64 },
    #[error("destination `{destination}` has unknown nearest node `{node}`")]
    UnknownNearestNode { destination: String, node: String },
    #[error("`{id}` has a non-finite coordinate")]
    NonFiniteCoordinate { id: String },
}
