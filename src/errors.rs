use thiserror::Error;


#[derive(Debug, Error, PartialEq)]
pub enum PathPlannerError {
    /// Node is missing from the graph or has no position
    #[error("invalid node: {0}")]
    InvalidNode(String),
    /// Search gave up after expanding `limit` frontier entries
    #[error("iteration limit of {limit} reached before the goal")]
    IterationLimit { limit: usize },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("self-loop on node {0}")]
    SelfLoop(String),
    #[error("edge {from} - {to} has invalid weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },
}


impl PathPlannerError {
    pub(crate) fn invalid_node<N: std::fmt::Debug>(node: &N) -> Self {
        PathPlannerError::InvalidNode(format!("{node:?}"))
    }
}
