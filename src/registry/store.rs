use hashbrown::HashSet as FastHashSet;
use std::sync::Arc;

use super::{PatternRegistry, RegistryMetrics};
use crate::enums::HttpMethod;
use crate::path::{NormalizationOptions, normalize_path};
use crate::pattern::CompiledPattern;
use crate::radix::{RadixError, RadixResult, RadixTree};

pub(crate) type MethodTrees<T> = [RadixTree<Arc<T>>; HttpMethod::COUNT];

/// One trie per HTTP method, plus the compiled-pattern cache feeding them.
#[derive(Debug)]
pub struct RouteRegistry<T> {
    trees: MethodTrees<T>,
    patterns: PatternRegistry,
    normalization: NormalizationOptions,
    metrics: RegistryMetrics,
}

impl<T> RouteRegistry<T> {
    pub fn new(normalization: NormalizationOptions) -> Self {
        Self::from_trees(std::array::from_fn(|_| RadixTree::new()), normalization)
    }

    pub(crate) fn from_trees(trees: MethodTrees<T>, normalization: NormalizationOptions) -> Self {
        Self {
            trees,
            patterns: PatternRegistry::new(),
            normalization,
            metrics: RegistryMetrics::default(),
        }
    }

    fn prepare(&mut self, pattern: &str) -> RadixResult<Arc<CompiledPattern>> {
        let normalized = normalize_path(pattern, &self.normalization)?;
        Ok(self.patterns.get_or_compile(&normalized)?)
    }

    pub fn insert(&mut self, method: HttpMethod, pattern: &str, handler: Arc<T>) -> RadixResult<()> {
        let compiled = self.prepare(pattern)?;
        self.trees[method.index()].insert(&compiled, handler)?;
        self.metrics.record_insert();
        Ok(())
    }

    /// Registers every entry or none: all patterns are compiled and checked
    /// for duplicate shapes before the first insert.
    pub fn insert_bulk<I>(&mut self, entries: I) -> RadixResult<usize>
    where
        I: IntoIterator<Item = (HttpMethod, String, Arc<T>)>,
    {
        let mut prepared = Vec::new();
        let mut batch_shapes: FastHashSet<(HttpMethod, String)> = FastHashSet::new();

        for (method, pattern, handler) in entries {
            let compiled = self.prepare(&pattern)?;
            let shape = compiled.shape();
            if self.trees[method.index()].contains(&compiled)
                || !batch_shapes.insert((method, shape.clone()))
            {
                return Err(RadixError::DuplicateRoute { shape });
            }
            prepared.push((method, compiled, handler));
        }

        let count = prepared.len();
        for (method, compiled, handler) in prepared {
            self.trees[method.index()].insert(&compiled, handler)?;
        }
        self.metrics.record_bulk(count);

        tracing::event!(tracing::Level::TRACE, operation="insert_bulk", count=count as u64);
        Ok(count)
    }

    pub fn tree(&self, method: HttpMethod) -> &RadixTree<Arc<T>> {
        &self.trees[method.index()]
    }

    pub fn route_count(&self) -> usize {
        self.trees.iter().map(RadixTree::len).sum()
    }

    pub fn metrics(&self) -> RegistryMetrics {
        let patterns = self.patterns.metrics();
        RegistryMetrics {
            patterns_compiled: patterns.patterns_compiled,
            pattern_cache_hits: patterns.pattern_cache_hits,
            ..self.metrics
        }
    }

    pub fn patterns(&self) -> &PatternRegistry {
        &self.patterns
    }

    /// Seals every tree and hands them over; the pattern cache is dropped.
    pub(crate) fn into_sealed_trees(self) -> MethodTrees<T> {
        let mut trees = self.trees;
        for tree in trees.iter_mut() {
            tree.seal();
        }
        trees
    }
}
