use crate::errors::PathPlannerError;
use crate::geometry::Point;
use super::FxIndexMap;

use std::{hash::Hash, fmt::Debug};


/// Node -> 2D coordinate lookup
/// A missing node is an error, never a default coordinate
#[derive(Clone, Debug)]
pub struct Positions<N> {
    points: FxIndexMap<N, Point>,
}

impl<N> Default for Positions<N> {
    fn default() -> Self {
        Self { points: FxIndexMap::default() }
    }
}

impl<N> Positions<N>
where
    N: Eq + Hash + Debug,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coordinate of a node, returns the previous one
    pub fn insert(&mut self, node: N, point: impl Into<Point>) -> Option<Point> {
        self.points.insert(node, point.into())
    }

    pub fn get(&self, node: &N) -> Result<&Point, PathPlannerError> {
        self.points
            .get(node)
            .ok_or_else(|| PathPlannerError::invalid_node(node))
    }

    pub fn contains(&self, node: &N) -> bool {
        self.points.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<N, P> FromIterator<(N, P)> for Positions<N>
where
    N: Eq + Hash + Debug,
    P: Into<Point>,
{
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut positions = Positions::new();
        for (node, point) in iter {
            positions.insert(node, point);
        }
        positions
    }
}
