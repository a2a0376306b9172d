use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;

pub use crate::enums::HttpMethod;

/// Byte range `(start, end)` of a captured value within the matched path.
pub type ParamSpan = (usize, usize);
pub type SpanList = SmallVec<[ParamSpan; 4]>;

pub type RouteParams = HashMap<String, String>;
pub type RouteMatch<T> = (Arc<T>, RouteParams);
