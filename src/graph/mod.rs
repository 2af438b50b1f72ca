mod positions;

pub use positions::Positions;

use crate::errors::GraphError;

use std::{
    hash::{BuildHasherDefault, Hash},
    fmt::Debug,
};
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and stable iteration order, rustc_hash for fast hashing
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;


/// Undirected weighted graph
/// Every edge is stored in both adjacency lists with the same weight,
/// neighbors are visited in the order their edges were added
#[derive(Clone, Debug)]
pub struct Graph<N> {
    adjacency: FxIndexMap<N, FxIndexMap<N, f64>>,
    edge_count: usize,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            edge_count: 0,
        }
    }
}

impl<N> Graph<N>
where
    N: Eq + Hash + Clone + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without edges, no-op if it already exists
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an undirected edge, missing endpoints are created
    /// Re-adding an existing edge overwrites its weight
    pub fn add_edge(&mut self, a: N, b: N, weight: f64) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(format!("{a:?}")));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: format!("{a:?}"),
                to: format!("{b:?}"),
                weight,
            });
        }

        let previous = self.adjacency.entry(a.clone()).or_default().insert(b.clone(), weight);
        self.adjacency.entry(b).or_default().insert(a, weight);

        if previous.is_none() {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Bulk insert of (a, b, weight) triples, stops at the first invalid edge
    pub fn add_weighted_edges_from<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        for (a, b, weight) in edges {
            self.add_edge(a, b, weight)?;
        }
        Ok(())
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbors of a node with the connecting edge weight
    /// None if the node is not part of the graph
    pub fn neighbors<'a>(&'a self, node: &N) -> Option<impl Iterator<Item = (&'a N, f64)> + use<'a, N>> {
        self.adjacency
            .get(node)
            .map(|edges| edges.iter().map(|(n, &w)| (n, w)))
    }

    pub fn edge_weight(&self, a: &N, b: &N) -> Option<f64> {
        self.adjacency.get(a)?.get(b).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Sum of edge weights along a node sequence
    /// None if the sequence is empty or two consecutive nodes are not adjacent
    pub fn path_cost(&self, nodes: &[N]) -> Option<f64> {
        if nodes.is_empty() {
            return None;
        }
        nodes
            .windows(2)
            .try_fold(0.0, |total, pair| Some(total + self.edge_weight(&pair[0], &pair[1])?))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        let mut graph = Graph::new();
        graph.add_weighted_edges_from([
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("A", "C", 4.0),
        ]).unwrap();
        graph
    }

    #[test]
    fn test_edges_are_symmetric() {
        let graph = triangle();
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(1.0));
        assert_eq!(graph.edge_weight(&"B", &"A"), Some(1.0));
        assert_eq!(graph.edge_weight(&"C", &"A"), Some(4.0));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_neighbors_follow_insertion_order() {
        let graph = triangle();
        let neighbors: Vec<_> = graph.neighbors(&"A").unwrap().collect();
        assert_eq!(neighbors, vec![(&"B", 1.0), (&"C", 4.0)]);
        assert!(graph.neighbors(&"Z").is_none());
    }

    #[test]
    fn test_readding_edge_overwrites_weight() {
        let mut graph = triangle();
        graph.add_edge("B", "A", 7.5).unwrap();
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(7.5));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_rejects_self_loop_and_bad_weights() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_edge("A", "A", 1.0), Err(GraphError::SelfLoop("\"A\"".to_string())));
        assert!(matches!(graph.add_edge("A", "B", -1.0), Err(GraphError::InvalidWeight { .. })));
        assert!(matches!(graph.add_edge("A", "B", f64::NAN), Err(GraphError::InvalidWeight { .. })));
        assert!(matches!(graph.add_edge("A", "B", f64::INFINITY), Err(GraphError::InvalidWeight { .. })));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_isolated_node() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add_node("Solo");
        assert!(graph.contains_node(&"Solo"));
        assert_eq!(graph.neighbors(&"Solo").unwrap().count(), 0);
    }

    #[test]
    fn test_path_cost() {
        let graph = triangle();
        assert_eq!(graph.path_cost(&["A", "B", "C"]), Some(3.0));
        assert_eq!(graph.path_cost(&["A"]), Some(0.0));
        assert_eq!(graph.path_cost(&[]), None);
        // A and Z are not adjacent
        assert_eq!(graph.path_cost(&["A", "Z"]), None);
    }
}
