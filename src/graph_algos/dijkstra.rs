use crate::errors::SolverError;
use crate::collections::FxIndexMap;
use super::{shortest_path, GraphNodeMap};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Among equally cheap candidates the smallest node (by `Ord`) is settled first
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Vec<N>, SolverError>
where
    N: Eq + Hash + Ord + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal);

    match goal_index {
        Some(goal_index) => shortest_path(&node_map, goal_index),
        None => Err(SolverError::NotReachable),
    }
}


/// Returns a full map of the graph, includes all (reachable) nodes and costs
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Ord + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    {

    let (node_map, _) = build_dijkstra_graph(start, neighbors, |_| false);
    node_map
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(
    start: N,
    neighbors: NN,
    goal_fn: G,
) -> (FxIndexMap<N, (usize, C)>, Option<usize>)
where
    N: Eq + Hash + Ord + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Nodes to visit - binary heap sorts Biggest to Smallest
    // NodeId ordering is reversed so the cheapest node pops first
    // Stale entries stay in the heap and are skipped on pop (lazy deletion)
    let mut nodes_to_visit: BinaryHeap<NodeId<N, C>> = BinaryHeap::new();

    // best known cost for every discovered node
    // The tuple contains (parent_index, cost) where parent_index is the index
    // of the parent node in the map
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut nodes_map: FxIndexMap<N, (usize, C)> = FxIndexMap::default();

    let start_index = nodes_map.insert_full(start.clone(), (usize::MAX, Zero::zero())).0;
    nodes_to_visit.push(NodeId {
        index: start_index,
        node: start,
        cost: Zero::zero(),
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId { cost, index, .. }) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // If cost of new node from BinaryHeap is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if cost > c {
            continue;
        }

        // Check if we've reached the goal
        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        let node = node.clone();
        for (neighbor, edge_cost) in neighbors(&node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = c + edge_cost;

            let neighbor_index = match nodes_map.entry(neighbor.clone()) {
                Vacant(e) => {
                    let neighbor_index = e.index();
                    e.insert((index, new_cost));
                    neighbor_index
                }
                Occupied(mut e) => {
                    // strictly better only, so the first parent found keeps ties
                    if e.get().1 > new_cost {
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                node: neighbor,
                cost: new_cost,
            });
        }
    }

    (nodes_map, None)
}


/// Heap entry
/// - ordered by cost, then by node so equal costs pop in a fixed order
/// - index points into the node map
#[derive(Debug)]
struct NodeId<N, C> {
    index: usize,
    node: N,
    cost: C,
}

impl<N: Ord, C: Ord> Ord for NodeId<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost).then_with(|| other.node.cmp(&self.node))
    }
}
impl<N: Ord, C: Ord> PartialOrd for NodeId<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N: Ord, C: Ord> PartialEq for NodeId<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<N: Ord, C: Ord> Eq for NodeId<N, C> {}
