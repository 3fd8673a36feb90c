use crate::errors::SolverError;
use super::GraphNodeMap;

/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(
    node_map: &GraphNodeMap<N, C>,
    goal_index: usize,
) -> Result<Vec<N>, SolverError>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        if let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
            path.push(node.clone());
            current_index = parent_index;
        } else {
            return Err(SolverError::NotReachable);
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(SolverError::NotReachable);
    }

    Ok(path)
}

/// Same walk over a dense predecessor table, `None` marks the start node
pub(crate) fn predecessor_path(predecessors: &[Option<usize>], goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(parent) = predecessors.get(current).copied().flatten() {
        path.push(parent);
        current = parent;
    }

    path.reverse();
    path
}
