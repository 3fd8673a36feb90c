pub mod dijkstra;
pub mod linear_scan;
mod shortest_path;

use serde::{Deserialize, Serialize};
use shortest_path::{predecessor_path, shortest_path};

use crate::collections::FxIndexMap;
use crate::errors::SolverError;
use crate::floor::Adjacency;
use dijkstra::dijkstra;
use linear_scan::linear_scan;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Node selection strategy for the shortest-path solver
/// Both return identical paths, including on equal-cost ties
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// Binary heap with lazy deletion, O((V + E) log V)
    #[default]
    BinaryHeap,
    /// Rescan of every unsettled node per step, O(V^2)
    LinearScan,
}

impl SolverKind {

    /// Minimum-weight node sequence from `start` to `end`, both included
    ///
    /// # Errors
    ///
    /// `InvalidNode` when either index is outside the adjacency's node
    /// universe, `NotReachable` when no path connects them.
    pub fn solve(
        self,
        adjacency: &Adjacency,
        start: usize,
        end: usize,
    ) -> Result<Vec<usize>, SolverError> {
        for index in [start, end] {
            if !adjacency.contains(index) {
                return Err(SolverError::InvalidNode(index.to_string()));
            }
        }

        match self {
            SolverKind::BinaryHeap => dijkstra(
                start,
                |&node: &usize| adjacency.neighbors(node).iter().copied(),
                |&node: &usize| node == end,
            ),
            SolverKind::LinearScan => linear_scan(
                adjacency.node_count(),
                start,
                end,
                |node| adjacency.neighbors(node).iter().copied(),
            ),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::floor::GraphEdge;
    use crate::geometry::Meters;

    const SOLVERS: [SolverKind; 2] = [SolverKind::BinaryHeap, SolverKind::LinearScan];

    fn adjacency(node_count: usize, edges: &[(usize, usize, f64)]) -> Adjacency {
        let edges: Vec<GraphEdge> = edges
            .iter()
            .map(|&(from, to, weight)| GraphEdge { from, to, weight: Meters(weight) })
            .collect();
        Adjacency::build(node_count, &edges)
    }

    // 5x5 grid with irregular weights and a few equal-cost detours
    fn grid() -> Adjacency {
        let size = 5;
        let mut edges = Vec::new();
        for row in 0..size {
            for col in 0..size {
                let index = row * size + col;
                if col + 1 < size {
                    edges.push((index, index + 1, 1.0 + ((row + col) % 3) as f64));
                }
                if row + 1 < size {
                    edges.push((index, index + size, 1.0 + ((row * col) % 2) as f64));
                }
            }
        }
        adjacency(size * size, &edges)
    }

    fn path_cost(adjacency: &Adjacency, path: &[usize]) -> f64 {
        path.windows(2)
            .map(|pair| {
                adjacency.neighbors(pair[0])
                    .iter()
                    .filter(|(n, _)| *n == pair[1])
                    .map(|(_, w)| w.value())
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }

    #[test]
    fn test_solvers_agree_on_grid() {
        let graph = grid();
        for start in [0, 7, 12] {
            for end in [4, 20, 24, 13] {
                let heap = SolverKind::BinaryHeap.solve(&graph, start, end).unwrap();
                let scan = SolverKind::LinearScan.solve(&graph, start, end).unwrap();
                assert_eq!(heap, scan, "{start} -> {end}");
                assert_eq!(heap.first(), Some(&start));
                assert_eq!(heap.last(), Some(&end));
            }
        }
    }

    #[test]
    fn test_concrete_triangle() {
        let graph = adjacency(3, &[(0, 1, 3.0), (1, 2, 4.0), (0, 2, 10.0)]);
        for solver in SOLVERS {
            let path = solver.solve(&graph, 0, 2).unwrap();
            assert_eq!(path, vec![0, 1, 2]);
            assert_eq!(path_cost(&graph, &path), 7.0);
        }
    }

    #[test]
    fn test_symmetric_cost_and_triangle_inequality() {
        let graph = grid();
        let cost = |solver: SolverKind, a: usize, b: usize| {
            let path = solver.solve(&graph, a, b).unwrap();
            path_cost(&graph, &path)
        };

        for solver in SOLVERS {
            for (a, b, c) in [(0, 12, 24), (3, 17, 21), (6, 6, 18)] {
                assert_eq!(cost(solver, a, b), cost(solver, b, a));
                assert!(cost(solver, a, c) <= cost(solver, a, b) + cost(solver, b, c));
            }
        }
    }

    #[test]
    fn test_invalid_and_unreachable() {
        let graph = adjacency(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
        for solver in SOLVERS {
            assert_eq!(solver.solve(&graph, 0, 3), Err(SolverError::NotReachable));
            assert_eq!(solver.solve(&graph, 9, 0), Err(SolverError::InvalidNode("9".to_string())));
            assert_eq!(solver.solve(&graph, 2, 2), Ok(vec![2]));
        }
    }

    #[test]
    fn test_parallel_edges_use_cheapest() {
        let graph = adjacency(3, &[(0, 1, 9.0), (1, 0, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
        for solver in SOLVERS {
            assert_eq!(solver.solve(&graph, 0, 2).unwrap(), vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_solver_kind_from_config_name() {
        let kind: SolverKind = serde_json::from_str(r#""linear_scan""#).unwrap();
        assert_eq!(kind, SolverKind::LinearScan);
        assert_eq!(SolverKind::default(), SolverKind::BinaryHeap);
    }
}
