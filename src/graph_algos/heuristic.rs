use crate::errors::PathPlannerError;
use crate::graph::Positions;

use std::{hash::Hash, fmt::Debug};


/// Straight-line distance between two nodes
/// Admissible as long as every edge weight is at least the distance between its endpoints
pub fn heuristic<N>(a: &N, b: &N, positions: &Positions<N>) -> Result<f64, PathPlannerError>
where
    N: Eq + Hash + Debug,
{
    Ok(positions.get(a)?.distance(positions.get(b)?))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn positions() -> Positions<&'static str> {
        [("Rathmalana", (0.0, 0.0)), ("Horana", (3.0, 3.0)), ("Colombo", (-2.0, 1.0))]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_straight_line_distance() {
        let positions = positions();
        let h = heuristic(&"Rathmalana", &"Horana", &positions).unwrap();
        assert!((h - 18f64.sqrt()).abs() < 1e-12);
        assert_eq!(heuristic(&"Horana", &"Horana", &positions).unwrap(), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let positions = positions();
        assert_eq!(
            heuristic(&"Colombo", &"Horana", &positions),
            heuristic(&"Horana", &"Colombo", &positions)
        );
    }

    #[test]
    fn test_missing_position_propagates() {
        let positions = positions();
        assert!(matches!(
            heuristic(&"Rathmalana", &"Galle", &positions),
            Err(PathPlannerError::InvalidNode(_))
        ));
        assert!(matches!(
            heuristic(&"Galle", &"Rathmalana", &positions),
            Err(PathPlannerError::InvalidNode(_))
        ));
    }
}
