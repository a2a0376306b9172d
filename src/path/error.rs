use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("path length {length} exceeds the limit of {limit}")]
    TooLong { length: usize, limit: usize },
    #[error("path contains control or whitespace byte {byte} in '{input}'")]
    ControlOrWhitespace { input: String, byte: u8 },
    #[error("path '{input}' contains a parent traversal segment")]
    InvalidParentTraversal { input: String },
}

pub type PathResult<T> = Result<T, PathError>;
