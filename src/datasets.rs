use crate::errors::GraphError;
use crate::graph::{Graph, Positions};


/// Towns south of Colombo with approximate map coordinates and road distances
/// Road distances are well above the straight-line distance between coordinates,
/// so the Euclidean heuristic stays admissible
pub fn western_province() -> Result<(Graph<&'static str>, Positions<&'static str>), GraphError> {
    let positions: Positions<&'static str> = [
        ("Rathmalana", (0.0, 0.0)),
        ("Panadura", (2.0, 1.0)),
        ("Kalutara", (4.0, 0.0)),
        ("Homagama", (1.0, 3.0)),
        ("Horana", (3.0, 3.0)),
        ("Colombo", (-2.0, 1.0)),
        ("Kottawa", (0.0, 2.0)),
        ("Moratuwa", (1.0, -1.0)),
        ("Matugama", (6.0, 1.0)),
        ("Bandaragama", (2.0, 2.0)),
        ("Piliyandala", (1.0, 1.0)),
        ("Bulathsinhala", (5.0, 3.0)),
    ]
    .into_iter()
    .collect();

    let mut graph = Graph::new();
    graph.add_weighted_edges_from([
        ("Colombo", "Rathmalana", 12.0),
        ("Colombo", "Kottawa", 15.0),
        ("Rathmalana", "Moratuwa", 5.0),
        ("Rathmalana", "Kottawa", 10.0),
        ("Moratuwa", "Panadura", 10.0),
        ("Panadura", "Kalutara", 15.0),
        ("Panadura", "Bandaragama", 12.0),
        ("Kalutara", "Matugama", 18.0),
        ("Kalutara", "Horana", 28.0),
        ("Kalutara", "Bulathsinhala", 22.0),
        ("Homagama", "Kottawa", 8.0),
        ("Homagama", "Horana", 20.0),
        ("Homagama", "Piliyandala", 14.0),
        ("Horana", "Bandaragama", 10.0),
        ("Horana", "Bulathsinhala", 12.0),
        ("Matugama", "Bulathsinhala", 15.0),
        ("Piliyandala", "Bandaragama", 7.0),
        ("Kottawa", "Piliyandala", 9.0),
    ])?;

    Ok((graph, positions))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_node_has_a_position() {
        let (graph, positions) = western_province().unwrap();
        assert_eq!(graph.node_count(), 12);
        assert_eq!(graph.edge_count(), 18);
        assert_eq!(positions.len(), 12);
        assert!(graph.nodes().all(|node| positions.contains(node)));
    }

    #[test]
    fn test_road_distances_dominate_straight_lines() {
        let (graph, positions) = western_province().unwrap();
        for node in graph.nodes() {
            for (neighbor, weight) in graph.neighbors(node).unwrap() {
                let straight = positions.get(node).unwrap().distance(positions.get(neighbor).unwrap());
                assert!(weight >= straight, "{node} - {neighbor}");
            }
        }
    }
}
