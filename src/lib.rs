//! A* route finding over weighted, undirected graphs embedded in 2D space.
//!
//! ```
//! use route_finder::{astar, datasets::western_province};
//!
//! let (graph, positions) = western_province().unwrap();
//! let path = astar(&graph, &"Rathmalana", &"Horana", &positions).unwrap().unwrap();
//! assert_eq!(path.cost, 36.0);
//! ```

pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod datasets;

pub use errors::{GraphError, PathPlannerError};
pub use geometry::Point;
pub use graph::{Graph, Positions};
pub use graph_algos::{astar, heuristic, AStar, Path};
