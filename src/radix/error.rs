use crate::path::PathError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RadixError {
    #[error("radix tree is sealed; cannot perform {operation}")]
    TreeSealed {
        operation: &'static str,
        pattern: Option<String>,
    },
    #[error("duplicate route for shape '{shape}'")]
    DuplicateRoute { shape: String },
    #[error("maximum number of trie nodes exceeded: current {current}, limit {limit}")]
    MaxNodesExceeded { current: usize, limit: usize },
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type RadixResult<T> = Result<T, RadixError>;
