use crate::errors::PathPlannerError;
use crate::graph::{Graph, Positions};
use super::{shortest_path, heuristic, GraphNodeMap, Path};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
    cmp::Ordering
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use ordered_float::OrderedFloat;
use tracing::{debug, trace, warn};



/// Frontier entry on the A* open list
/// Equal f_cost entries pop in the order they were pushed
#[derive(Debug)]
struct Node<T> {
    index: usize, // index in the closed_list - maps to the Id of the node
    cost: T, // Cost to reach this node when it was pushed
    f_cost: T, // Total cost = cost + h(n) aka estimated cost
    seq: usize, // push order, breaks f_cost ties
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys
        other.f_cost.cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<T: Ord> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}
impl<T: PartialEq> Eq for Node<T> {}


/// Counters for a single search, logged when it finishes
#[derive(Debug, Default)]
struct SearchStats {
    expanded: usize,
    pushed: usize,
    stale: usize,
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Clone, Debug, Default)]
pub struct AStar {
    max_iterations: Option<usize>, // cap on expanded nodes, None = run until the frontier empties
}

impl AStar {

    /// Uncapped search
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with IterationLimit once `limit` nodes have been expanded without reaching the goal
    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    /// Least-cost route through an undirected graph using straight-line distance as heuristic
    /// Ok(None) means the goal is unreachable from start
    pub fn search<N>(&self, graph: &Graph<N>, start: &N, goal: &N, positions: &Positions<N>) -> Result<Option<Path<N>>, PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
    {
        for node in [start, goal] {
            if !graph.contains_node(node) {
                return Err(PathPlannerError::invalid_node(node));
            }
        }
        // fails early if either endpoint has no position
        heuristic(start, goal, positions)?;

        let neighbors = |node: &N| -> Result<Vec<(N, OrderedFloat<f64>)>, PathPlannerError> {
            let edges = graph
                .neighbors(node)
                .ok_or_else(|| PathPlannerError::invalid_node(node))?;
            Ok(edges.map(|(n, w)| (n.clone(), OrderedFloat(w))).collect())
        };
        let heuristic_fn = |node: &N| heuristic(node, goal, positions).map(OrderedFloat);

        let path = self.plan(start.clone(), goal, neighbors, heuristic_fn)?;
        Ok(path.map(|path| path.map_cost(OrderedFloat::into_inner)))
    }

    /// From start Node, traverse through graph until the goal is popped from the open list
    /// The Approach has 2 requirements for an optimal path:
    /// 1. The heuristic function must be admissible (never overestimates the true cost to reach the goal)
    /// 2. Edge costs must be non-negative
    /// Ok(None) is returned when the open list runs dry
    /// Costs are summed with plain `+`: integer cost types must leave headroom for the longest path
    pub fn plan<N, C, IT, NN, H>(&self, start: N, goal: &N, neighbors: NN, heuristic_fn: H) -> Result<Option<Path<N, C>>, PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> Result<IT, PathPlannerError>, // returns iterator of neighbors + costs
        H: Fn(&N) -> Result<C, PathPlannerError>, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        {

        // Nothing to search
        if start == *goal {
            return Ok(Some(Path { nodes: vec![start], cost: Zero::zero() }));
        }

        let (node_map, goal_index) = self.build_graph(start, goal, neighbors, heuristic_fn)?;

        Ok(goal_index.map(|goal_index| shortest_path(&node_map, goal_index)))
    }


    /// Traverses the graph using A* algorithm
    /// Returns a map of nodes with their smallest costs along with the index of the goal node
    fn build_graph<N, C, IT, NN, H>(&self, start: N, goal: &N, neighbors: NN, heuristic_fn: H) -> Result<(GraphNodeMap<N, C>, Option<usize>), PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> Result<IT, PathPlannerError>,
        IT: IntoIterator<Item = (N, C)>,
        C: Zero + Ord + Copy + Debug,
        H: Fn(&N) -> Result<C, PathPlannerError>,
    {
        debug!(start = ?start, goal = ?goal, max_iterations = ?self.max_iterations, "starting A* search");

        let mut stats = SearchStats::default();

        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic), ties by push order
        let mut open_list: BinaryHeap<Node<C>> = BinaryHeap::new();

        // Best known cost and parent per discovered node (g_score + came_from)
        // for the start node, parent_index is set to usize::MAX to indicate it has no parent
        let mut closed_list: GraphNodeMap<N, C> = GraphNodeMap::default();

        let start_index = closed_list.insert_full(start, (usize::MAX, Zero::zero())).0;
        open_list.push(Node {
            index: start_index,
            cost: Zero::zero(),
            f_cost: Zero::zero(),
            seq: stats.pushed,
        });
        stats.pushed += 1;

        while let Some(Node { index, cost, .. }) = open_list.pop() {

            // fetch current best cost for node
            let Some((node, &(_, c))) = closed_list.get_index(index) else {
                continue;
            };

            // A cheaper entry for this node was pushed after this one
            if cost > c {
                stats.stale += 1;
                continue;
            }

            if node == goal {
                debug!(expanded = stats.expanded, pushed = stats.pushed, stale = stats.stale, cost = ?c, "goal reached");
                return Ok((closed_list, Some(index)));
            }

            if let Some(limit) = self.max_iterations {
                if stats.expanded >= limit {
                    warn!(limit, pushed = stats.pushed, "A* iteration limit reached");
                    return Err(PathPlannerError::IterationLimit { limit });
                }
            }
            stats.expanded += 1;
            trace!(node = ?node, cost = ?c, "expanding");

            for (neighbor, edge_cost) in neighbors(node)? {

                // new cost to reach this node = edge cost + node cost
                // This is confirmed cost, not heuristic
                let new_cost = c + edge_cost;

                let neighbor_index = match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        // This is the first time we're seeing this neighbor
                        let i = e.index();
                        e.insert((index, new_cost));
                        i
                    }
                    Occupied(mut e) => {
                        if new_cost < e.get().1 {
                            // We've found a better path to this neighbor
                            e.insert((index, new_cost));
                            e.index()
                        } else {
                            // The existing path is at least as good
                            continue;
                        }
                    }
                };

                let Some((neighbor, _)) = closed_list.get_index(neighbor_index) else {
                    continue;
                };
                let h_cost: C = heuristic_fn(neighbor)?;

                open_list.push(Node {
                    index: neighbor_index,
                    cost: new_cost,
                    f_cost: new_cost + h_cost,
                    seq: stats.pushed,
                });
                stats.pushed += 1;
            }
        }

        debug!(expanded = stats.expanded, pushed = stats.pushed, stale = stats.stale, "open list exhausted, goal unreachable");
        Ok((closed_list, None))
    }
}


/// Least-cost path from start to goal with the default (uncapped) search
/// Ok(None) means no path exists, Err(InvalidNode) means the inputs are malformed
pub fn astar<N>(graph: &Graph<N>, start: &N, goal: &N, positions: &Positions<N>) -> Result<Option<Path<N>>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
{
    AStar::new().search(graph, start, goal, positions)
}
