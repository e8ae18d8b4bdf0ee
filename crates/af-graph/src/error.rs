//! Graph-construction and routing error type.

use thiserror::Error;

/// Errors produced by `af-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("duplicate node name {0:?}")]
    DuplicateNode(String),

    #[error("link references unknown node {0:?}")]
    UnknownNode(String),

    #[error("second start node {0:?}")]
    DuplicateStart(String),

    #[error("second end node {0:?}")]
    DuplicateEnd(String),

    #[error("no start node")]
    MissingStart,

    #[error("no end node")]
    MissingEnd,

    #[error("too many nodes: {0}")]
    TooManyNodes(usize),

    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
