use log::{debug, warn};

use super::GraphEdge;
use crate::geometry::Meters;


/// Symmetric adjacency list indexed by node index
/// Every stored edge is inserted in both directions
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    neighbors: Vec<Vec<(usize, Meters)>>,
}

impl Adjacency {

    /// Build the adjacency list for `node_count` nodes from the edge list
    /// Linear in the number of edges; duplicates and self-loops are kept
    pub fn build(node_count: usize, edges: &[GraphEdge]) -> Self {
        let mut neighbors: Vec<Vec<(usize, Meters)>> = vec![Vec::new(); node_count];

        for edge in edges {
            if edge.from >= node_count || edge.to >= node_count {
                warn!("Skipping edge {} -> {} outside of {node_count} nodes", edge.from, edge.to);
                continue;
            }
            neighbors[edge.from].push((edge.to, edge.weight));
            neighbors[edge.to].push((edge.from, edge.weight));
        }

        let isolated = neighbors.iter().filter(|list| list.is_empty()).count();
        if isolated > 0 {
            warn!("{isolated} of {node_count} nodes have no walkable edges");
        }
        debug!("Built adjacency for {node_count} nodes from {} edges", edges.len());

        Self { neighbors }
    }

    /// Neighbors and edge weights of a node, in edge-list order
    /// Unknown indices have no neighbors
    pub fn neighbors(&self, index: usize) -> &[(usize, Meters)] {
        self.neighbors.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Size of the node universe
    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.neighbors.len()
    }
}
