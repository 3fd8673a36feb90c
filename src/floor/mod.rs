//! Floor dataset: walkable mesh nodes, weighted edges and named destinations.
//!
//! A [`FloorPlan`] is loaded once, validated, and never mutated afterwards.
//! Node ids keep their document order; the position of a node in that order
//! is its index, which the solvers use for storage and tie-breaking.

pub mod adjacency;
mod de;

use std::{fs, path::Path};
use log::{info, warn};
use serde::{Deserialize, Deserializer, Serialize};

use crate::collections::FxIndexMap;
use crate::errors::FloorDataError;
use crate::geometry::{Meters, Point};

pub use adjacency::Adjacency;


/// Raw floor document as produced by the map tooling
/// Deserializing rejects a node or destination id that appears twice
#[derive(Clone, Debug, Default, Serialize)]
pub struct FloorData {
    pub nodes: FxIndexMap<String, Point>,
    pub edges: Vec<Edge>,
    pub destinations: FxIndexMap<String, Destination>,
}

impl<'de> Deserialize<'de> for FloorData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FloorDocument::deserialize(deserializer)?
            .into_floor_data()
            .map_err(serde::de::Error::custom)
    }
}

/// Floor document with its maps kept as entry lists, duplicates included
#[derive(Deserialize)]
struct FloorDocument {
    #[serde(deserialize_with = "de::entries")]
    nodes: Vec<(String, Point)>,
    edges: Vec<Edge>,
    #[serde(deserialize_with = "de::entries")]
    destinations: Vec<(String, Destination)>,
}

impl FloorDocument {
    fn into_floor_data(self) -> Result<FloorData, FloorDataError> {
        Ok(FloorData {
            nodes: unique_ids(self.nodes)?,
            edges: self.edges,
            destinations: unique_ids(self.destinations)?,
        })
    }
}

fn unique_ids<V>(entries: Vec<(String, V)>) -> Result<FxIndexMap<String, V>, FloorDataError> {
    let mut map = FxIndexMap::default();
    map.reserve(entries.len());
    for (id, value) in entries {
        if map.contains_key(&id) {
            return Err(FloorDataError::DuplicateId { id });
        }
        map.insert(id, value);
    }
    Ok(map)
}

/// Walkable segment as stored in the document
/// Directed on disk, walked in both directions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Edge with both endpoints resolved to node indices
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    pub weight: Meters,
}

/// Named place of interest bound to its entry node on the mesh
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(skip)]
    pub id: String, // filled from the document key on load
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub nearest_node: String,
}

impl Destination {
    /// Room coordinate, independent of any mesh node
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}


/// Immutable, validated floor dataset with read-only lookups
#[derive(Clone, Debug)]
pub struct FloorPlan {
    nodes: FxIndexMap<String, Point>,
    edges: Vec<GraphEdge>,
    destinations: FxIndexMap<String, Destination>,
}

impl FloorPlan {

    /// Parse and validate a floor document
    pub fn from_json_str(json: &str) -> Result<Self, FloorDataError> {
        let document: FloorDocument = serde_json::from_str(json)?;
        Self::from_data(document.into_floor_data()?)
    }

    /// Read, parse and validate a floor document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FloorDataError> {
        let path = path.as_ref();
        info!("Loading floor dataset: {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate an already deserialized document
    ///
    /// # Errors
    ///
    /// Rejects edges that reference unknown nodes or carry a negative or
    /// non-finite weight, destinations whose `nearest_node` does not exist,
    /// and non-finite coordinates.
    pub fn from_data(data: FloorData) -> Result<Self, FloorDataError> {
        let FloorData { nodes, edges, destinations } = data;

        if let Some((id, _)) = nodes.iter().find(|(_, point)| !point.is_finite()) {
            return Err(FloorDataError::NonFiniteCoordinate { id: id.clone() });
        }

        let mut graph_edges = Vec::with_capacity(edges.len());
        let mut self_loops = 0;
        for (index, edge) in edges.into_iter().enumerate() {
            let from = nodes.get_index_of(&edge.from).ok_or_else(|| {
                FloorDataError::UnknownEdgeNode { index, node: edge.from.clone() }
            })?;
            let to = nodes.get_index_of(&edge.to).ok_or_else(|| {
                FloorDataError::UnknownEdgeNode { index, node: edge.to.clone() }
            })?;

            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(FloorDataError::InvalidWeight {
                    index,
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                });
            }

            if from == to {
                self_loops += 1;
            }
            graph_edges.push(GraphEdge { from, to, weight: Meters(edge.weight) });
        }
        if self_loops > 0 {
            warn!("Floor dataset contains {self_loops} self-referencing edges");
        }

        let mut resolved = FxIndexMap::default();
        for (id, mut destination) in destinations {
            if !nodes.contains_key(&destination.nearest_node) {
                return Err(FloorDataError::UnknownNearestNode {
                    destination: id,
                    node: destination.nearest_node,
                });
            }
            if !destination.position().is_finite() {
                return Err(FloorDataError::NonFiniteCoordinate { id });
            }
            destination.id = id.clone();
            resolved.insert(id, destination);
        }

        info!(
            "Loaded floor dataset: {} nodes, {} edges, {} destinations",
            nodes.len(),
            graph_edges.len(),
            resolved.len()
        );

        Ok(Self { nodes, edges: graph_edges, destinations: resolved })
    }

    /// Coordinate of a node by id
    pub fn node(&self, id: &str) -> Option<&Point> {
        self.nodes.get(id)
    }

    /// Solver index of a node by id
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// Id and coordinate of the node at a solver index
    pub fn node_at(&self, index: usize) -> Option<(&str, &Point)> {
        self.nodes.get_index(index).map(|(id, point)| (id.as_str(), point))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edges with resolved endpoints, in document order
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.get(id)
    }

    /// Destinations in document order
    pub fn destinations(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.values()
    }

    /// Destinations sorted A-Z by display name, ties broken by id
    pub fn destinations_by_name(&self) -> Vec<&Destination> {
        let mut sorted: Vec<&Destination> = self.destinations.values().collect();
        sorted.sort_by(|a, b| {
            a.name.to_lowercase().cmp(&b.name.to_lowercase()).then_with(|| a.id.cmp(&b.id))
        });
        sorted
    }
}
