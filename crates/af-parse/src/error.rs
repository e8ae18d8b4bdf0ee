use thiserror::Error;

use af_graph::GraphError;

/// Input errors.  All are fatal: the solver never runs on a rejected input.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,

    #[error("invalid ant count: {0:?}")]
    InvalidAntCount(String),

    #[error("missing start node")]
    MissingStartNode,

    #[error("missing end node")]
    MissingEndNode,

    #[error("invalid node format on line {line}: {reason}")]
    InvalidNodeFormat { line: usize, reason: String },

    #[error("invalid link format on line {line}: {text:?}")]
    InvalidEdgeFormat { line: usize, text: String },

    #[error("duplicate node name {0:?}")]
    DuplicateNodeName(String),

    #[error("link references unknown node {0:?}")]
    UnknownNodeReference(String),

    #[error("invalid colony: {0}")]
    Graph(GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<GraphError> for ParseError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::DuplicateNode(name) => ParseError::DuplicateNodeName(name),
            GraphError::UnknownNode(name) => ParseError::UnknownNodeReference(name),
            GraphError::MissingStart => ParseError::MissingStartNode,
            GraphError::MissingEnd => ParseError::MissingEndNode,
            other => ParseError::Graph(other),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
