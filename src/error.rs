use thiserror::Error;

use crate::graph::Vertex;

/// Errors produced while building graphs or starting algorithms on them.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The graph description is malformed or inconsistent.
    ///
    /// `line` is the 1-based input line for text input, or 0 when the
    /// description was built in memory.
    #[error("format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// A vertex id outside `1..=vertex_count` was used as a start vertex.
    #[error("vertex {vertex} is out of range 1..={vertex_count}")]
    Range { vertex: Vertex, vertex_count: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A path length or tree weight does not fit in the weight type.
    #[error("weight overflow: {0}")]
    Overflow(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        GraphError::Format {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        GraphError::InvalidInput(message.into())
    }

    pub fn overflow(message: impl Into<String>) -> Self {
        GraphError::Overflow(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
