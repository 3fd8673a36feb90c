use crate::errors::SolverError;
use super::predecessor_path;

use std::fmt::Debug;
use num_traits::Zero;


/// Dijkstra's algorithm with a linear rescan of the unsettled set, O(V^2)
/// Nodes are the dense indices `0..node_count`
/// Selection picks the smallest distance, then the smallest index, the same
/// tie-break the heap based `dijkstra` uses for `usize` nodes
pub fn linear_scan<C, IT, NN>(
    node_count: usize,
    start: usize,
    goal: usize,
    neighbors: NN,
) -> Result<Vec<usize>, SolverError>
where
    NN: Fn(usize) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (usize, C)>,
    C: Zero + Ord + Copy + Debug,
{
    for index in [start, goal] {
        if index >= node_count {
            return Err(SolverError::InvalidNode(index.to_string()));
        }
    }

    // None is infinity
    let mut distance: Vec<Option<C>> = vec![None; node_count];
    let mut predecessor: Vec<Option<usize>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    distance[start] = Some(Zero::zero());

    loop {
        // cheapest unsettled node with a finite distance
        let mut current: Option<(usize, C)> = None;
        for (index, cost) in distance.iter().enumerate() {
            let Some(cost) = *cost else { continue };
            if settled[index] {
                continue;
            }
            if current.is_none_or(|(_, best)| cost < best) {
                current = Some((index, cost));
            }
        }

        // every remaining node is at infinity
        let Some((current, cost)) = current else {
            return Err(SolverError::NotReachable);
        };

        settled[current] = true;
        if current == goal {
            return Ok(predecessor_path(&predecessor, goal));
        }

        for (neighbor, edge_cost) in neighbors(current) {
            let Some(known) = distance.get_mut(neighbor) else { continue };
            let new_cost = cost + edge_cost;
            if known.is_none_or(|best| new_cost < best) {
                *known = Some(new_cost);
                predecessor[neighbor] = Some(current);
            }
        }
    }
}
