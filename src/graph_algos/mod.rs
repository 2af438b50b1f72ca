pub mod a_star;
mod heuristic;
mod shortest_path;

pub use a_star::{astar, AStar};
pub use heuristic::heuristic;
use shortest_path::shortest_path;

use crate::graph::FxIndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map, usize::MAX for the start node
/// - cost is the best known cost to reach this node from the start (g score)
/// Nodes absent from the map have an implicit cost of infinity
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Route from start to goal (both inclusive) and its total cost
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path<N, C = f64> {
    pub nodes: Vec<N>,
    pub cost: C,
}

impl<N, C> Path<N, C> {

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn goal(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Convert the cost type, e.g. unwrap an ordered float
    pub fn map_cost<D>(self, f: impl FnOnce(C) -> D) -> Path<N, D> {
        Path {
            nodes: self.nodes,
            cost: f(self.cost),
        }
    }
}
