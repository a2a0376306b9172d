use crate::path::PathError;
use crate::radix::RadixError;
use crate::types::HttpMethod;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{pattern}'")]
    AddWhileSealed { pattern: String },
    #[error("router is sealed; cannot add {count} routes in bulk")]
    BulkAddWhileSealed { count: usize },
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error("router is not sealed; use add or add_bulk instead of extend")]
    ExtendWhileMutable,
    #[error("no route matched for method {method:?} and path '{path}'")]
    RouteNotFound { method: HttpMethod, path: String },
    /// Registration failures: normalization, compilation, duplicates.
    #[error(transparent)]
    Radix(#[from] RadixError),
    /// Lookup-time rejection of a request path.
    #[error(transparent)]
    Path(#[from] PathError),
}

pub type RouterResult<T> = Result<T, RouterError>;
