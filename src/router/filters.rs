use smallvec::SmallVec;
use std::sync::Arc;

use crate::path::{NormalizationOptions, normalize_path};
use crate::pattern::CompiledPattern;
use crate::radix::{RadixResult, RadixTree};
use crate::registry::PatternRegistry;
use crate::router::{RouterOptions, RouterResult};

#[derive(Debug)]
struct FilterEntry<F> {
    pattern: Arc<CompiledPattern>,
    tree: RadixTree<()>,
    filter: F,
}

/// Path-scoped filters. Unlike handlers, filters are not mutually
/// exclusive: every filter whose pattern matches a path applies to it, and
/// the same pattern may be registered any number of times.
#[derive(Debug)]
pub struct FilterSet<F> {
    entries: Vec<FilterEntry<F>>,
    patterns: PatternRegistry,
    normalization: NormalizationOptions,
}

impl<F> Default for FilterSet<F> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<F> FilterSet<F> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            entries: Vec::new(),
            patterns: PatternRegistry::new(),
            normalization: options.unwrap_or_default().normalization(),
        }
    }

    pub fn add(&mut self, pattern: &str, filter: F) -> RouterResult<()> {
        let entry = self.build_entry(pattern, filter)?;
        self.entries.push(entry);
        Ok(())
    }

    fn build_entry(&mut self, pattern: &str, filter: F) -> RadixResult<FilterEntry<F>> {
        let normalized = normalize_path(pattern, &self.normalization)?;
        let compiled = self.patterns.get_or_compile(&normalized)?;
        let mut tree = RadixTree::new();
        tree.insert(&compiled, ())?;
        tree.seal();

        Ok(FilterEntry {
            pattern: compiled,
            tree,
            filter,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Patterns in registration order.
    pub fn pattern_sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.pattern.source())
    }

    /// Every filter whose pattern matches `path`, in registration order.
    pub fn matching(&self, path: &str) -> RouterResult<SmallVec<[&F; 8]>> {
        let normalized = normalize_path(path, &self.normalization)?;

        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.tree.match_only(&normalized))
            .map(|entry| &entry.filter)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_matching_filter_in_order() {
        let mut filters = FilterSet::new(None);
        filters.add("/*all", "log").expect("filter should register");
        filters.add("/admin/*rest", "auth").expect("filter should register");
        filters.add("/admin/:page", "audit").expect("filter should register");
        filters.add("/public", "cache").expect("filter should register");

        let hits = filters.matching("/admin/users").expect("path should be valid");
        assert_eq!(hits.as_slice(), &[&"log", &"auth", &"audit"]);

        let hits = filters.matching("/public").expect("path should be valid");
        assert_eq!(hits.as_slice(), &[&"log", &"cache"]);
    }

    #[test]
    fn same_pattern_may_register_twice() {
        let mut filters = FilterSet::new(None);
        filters.add("/x", 1).expect("filter should register");
        filters.add("/x", 2).expect("same pattern should register again");

        assert_eq!(filters.len(), 2);
        let hits = filters.matching("/x").expect("path should be valid");
        assert_eq!(hits.len(), 2);
        assert_eq!(filters.patterns.metrics().pattern_cache_hits, 1);
    }
}
