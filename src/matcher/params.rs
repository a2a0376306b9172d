use std::collections::HashMap;

use crate::pattern::Capture;
use crate::types::{ParamSpan, RouteParams, SpanList};

/// Values captured by one match, borrowed from the matched path and paired
/// with the variable names of the route that matched.
#[derive(Debug, Clone)]
pub struct Params<'t, 'p> {
    captures: &'t [Capture],
    path: &'p str,
    spans: SpanList,
}

impl<'t, 'p> Params<'t, 'p> {
    pub(crate) fn new(captures: &'t [Capture], path: &'p str, spans: SpanList) -> Self {
        Self {
            captures,
            path,
            spans,
        }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn spans(&self) -> &[ParamSpan] {
        &self.spans
    }

    /// Value of the variable called `name`.
    pub fn get(&self, name: &str) -> Option<&'p str> {
        let idx = self
            .captures
            .iter()
            .position(|capture| capture.name() == Some(name))?;
        self.get_index(idx)
    }

    /// Value at capture position `idx`, named or not.
    pub fn get_index(&self, idx: usize) -> Option<&'p str> {
        let (start, end) = *self.spans.get(idx)?;
        self.path.get(start..end)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Option<&'t str>, &'p str)> + '_ {
        self.captures
            .iter()
            .zip(self.spans.iter())
            .filter_map(|(capture, &(start, end))| {
                Some((capture.name(), self.path.get(start..end)?))
            })
    }

    /// Owned copy keyed by variable name; unnamed captures are keyed by their
    /// position.
    pub fn to_map(&self) -> RouteParams {
        let mut map = HashMap::with_capacity(self.len());
        for (idx, (name, value)) in self.iter().enumerate() {
            let key = match name {
                Some(name) => name.to_string(),
                None => idx.to_string(),
            };
            map.insert(key, value.to_string());
        }
        map
    }
}

/// A successful lookup: the payload registered for the route and the
/// captured variables.
#[derive(Debug, Clone)]
pub struct Match<'t, 'p, T> {
    pub payload: &'t T,
    pub params: Params<'t, 'p>,
}
