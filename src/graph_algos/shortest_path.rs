use super::{GraphNodeMap, Path};

use num_traits::Zero;


/// Construct the shortest path by following parent indices from the goal back to the start
/// Returns the ordered path from start to goal with the goal's recorded cost
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Path<N, C>
where
    N: Clone,
    C: Zero + Copy,
{
    let cost = node_map
        .get_index(goal_index)
        .map_or_else(C::zero, |(_, &(_, cost))| cost);

    let mut nodes = Vec::new();
    let mut current_index = goal_index;

    // The start node's parent is usize::MAX, which ends the walk
    while let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
        nodes.push(node.clone());
        current_index = parent_index;
    }

    nodes.reverse();

    Path { nodes, cost }
}
