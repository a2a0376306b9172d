mod errors;
mod filters;
mod options;
mod service;

pub use crate::readonly::RouterReadOnly;
pub use errors::{RouterError, RouterResult};
pub use filters::FilterSet;
pub use options::{
    DEFAULT_MAX_PATH_LENGTH, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
