//! Route projection: destination ids in, a renderable polyline out.
//!
//! The router resolves both destinations, solves between their nearest mesh
//! nodes and stitches the room coordinates onto either end of the solved
//! walk. The first and last hops are straight jumps from the room to the
//! mesh and may cut across walls when drawn.

use std::sync::Arc;
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::collections::FxIndexMap;
use crate::config::{DistanceMode, RouterConfig};
use crate::errors::{RouteError, SolverError};
use crate::floor::{Adjacency, Destination, FloorPlan};
use crate::geometry::{polyline_length, Point};
use crate::graph_algos::dijkstra::dijkstra_nodes_full;


/// Renderable route between two destinations
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Origin room, solved mesh nodes in walk order, destination room
    pub coordinates: Vec<Point>,
    /// Ids of the solved mesh nodes
    pub nodes: Vec<String>,
    pub total_distance: f64,
}

impl Route {

    /// Sentinel for "no walkable path", distinct from a zero-length route
    pub fn no_route() -> Self {
        Self { coordinates: Vec::new(), nodes: Vec::new(), total_distance: 0.0 }
    }

    pub fn is_no_route(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Coordinates as an SVG `points` attribute: `"x,y x,y ..."`
    pub fn svg_points(&self) -> String {
        self.coordinates
            .iter()
            .map(Point::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}


/// Solved walk between two mesh nodes
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeRoute {
    pub nodes: Vec<String>,
    pub coordinates: Vec<Point>,
    /// Sum of straight-line lengths between consecutive nodes
    pub distance: f64,
}


/// Shared, read-only routing service over one floor
/// The adjacency list is built once at construction
#[derive(Clone, Debug)]
pub struct Router {
    floor: Arc<FloorPlan>,
    adjacency: Adjacency,
    config: RouterConfig,
}

impl Router {

    pub fn new(floor: Arc<FloorPlan>) -> Self {
        Self::with_config(floor, RouterConfig::default())
    }

    pub fn with_config(floor: Arc<FloorPlan>, config: RouterConfig) -> Self {
        let adjacency = Adjacency::build(floor.node_count(), floor.edges());
        Self { floor, adjacency, config }
    }

    pub fn floor(&self) -> &FloorPlan {
        &self.floor
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Route between two destinations by id
    ///
    /// A disconnected pair is not an error: it yields [`Route::no_route`]
    /// so the caller can render a "no route found" state.
    ///
    /// # Errors
    ///
    /// `InvalidDestinationId` for an unknown origin or destination,
    /// `InvalidNode` if a destination is bound to a node outside the graph.
    pub fn compute_route(
        &self,
        origin_id: &str,
        destination_id: &str,
    ) -> Result<Route, RouteError> {
        let origin = self.destination(origin_id)?;
        let destination = self.destination(destination_id)?;

        let walk = match self.node_route(&origin.nearest_node, &destination.nearest_node) {
            Ok(walk) => walk,
            Err(RouteError::NotReachable) => {
                debug!("No walkable path from `{origin_id}` to `{destination_id}`");
                return Ok(Route::no_route());
            }
            Err(error) => return Err(error),
        };

        let mut coordinates = Vec::with_capacity(walk.coordinates.len() + 2);
        coordinates.push(origin.position());
        coordinates.extend_from_slice(&walk.coordinates);
        coordinates.push(destination.position());

        let total_distance = match self.config.distance {
            DistanceMode::MeshOnly => walk.distance,
            DistanceMode::IncludeRoomLegs => polyline_length(&coordinates),
        };

        debug!(
            "Route `{origin_id}` -> `{destination_id}`: {} nodes, {total_distance:.2} m",
            walk.nodes.len()
        );

        Ok(Route { coordinates, nodes: walk.nodes, total_distance })
    }

    /// Serve many requests in parallel against the shared floor
    pub fn compute_routes(&self, requests: &[(String, String)]) -> Vec<Result<Route, RouteError>> {
        requests
            .par_iter()
            .map(|(origin, destination)| self.compute_route(origin, destination))
            .collect()
    }

    /// Shortest walk between two mesh nodes by id
    ///
    /// # Errors
    ///
    /// `InvalidNode` for an unknown node id, `NotReachable` when the nodes
    /// sit in different components.
    pub fn node_route(&self, start_id: &str, end_id: &str) -> Result<NodeRoute, RouteError> {
        let start = self.node_index(start_id)?;
        let end = self.node_index(end_id)?;

        let path = self.config.solver.solve(&self.adjacency, start, end)?;

        let mut nodes = Vec::with_capacity(path.len());
        let mut coordinates = Vec::with_capacity(path.len());
        for index in path {
            let (id, point) = self
                .floor
                .node_at(index)
                .ok_or_else(|| SolverError::InvalidNode(index.to_string()))?;
            nodes.push(id.to_string());
            coordinates.push(*point);
        }

        let distance = polyline_length(&coordinates);
        Ok(NodeRoute { nodes, coordinates, distance })
    }

    /// Edge-weight distance to every node reachable from `node_id`
    pub fn reachable_from(&self, node_id: &str) -> Result<FxIndexMap<String, f64>, RouteError> {
        let start = self.node_index(node_id)?;
        let node_map = dijkstra_nodes_full(start, |&node: &usize| {
            self.adjacency.neighbors(node).iter().copied()
        });

        Ok(node_map
            .iter()
            .filter_map(|(&index, &(_, cost))| {
                self.floor.node_at(index).map(|(id, _)| (id.to_string(), cost.value()))
            })
            .collect())
    }

    /// Destinations that cannot be reached from `origin_id`, in document order
    pub fn unreachable_destinations(
        &self,
        origin_id: &str,
    ) -> Result<Vec<&Destination>, RouteError> {
        let origin = self.destination(origin_id)?;
        let reachable = self.reachable_from(&origin.nearest_node)?;

        Ok(self
            .floor
            .destinations()
            .filter(|destination| !reachable.contains_key(&destination.nearest_node))
            .collect())
    }

    fn destination(&self, id: &str) -> Result<&Destination, RouteError> {
        self.floor
            .destination(id)
            .ok_or_else(|| RouteError::InvalidDestinationId(id.to_string()))
    }

    fn node_index(&self, id: &str) -> Result<usize, RouteError> {
        self.floor
            .node_index(id)
            .ok_or_else(|| RouteError::InvalidNode(id.to_string()))
    }
}
