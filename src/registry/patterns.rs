use hashbrown::HashMap as FastHashMap;
use std::sync::Arc;

use super::RegistryMetrics;
use crate::pattern::{CompiledPattern, PatternResult, compile};

/// Compiled patterns keyed by their source text.
///
/// Owned by whichever router registers routes through it, so identical
/// patterns registered from several call sites (or for several methods)
/// are compiled once.
#[derive(Debug, Default, Clone)]
pub struct PatternRegistry {
    compiled: FastHashMap<Box<str>, Arc<CompiledPattern>>,
    metrics: RegistryMetrics,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&mut self, pattern: &str) -> PatternResult<Arc<CompiledPattern>> {
        if let Some(existing) = self.compiled.get(pattern) {
            self.metrics.record_cache_hit();
            return Ok(existing.clone());
        }

        let compiled = Arc::new(compile(pattern)?);
        self.compiled.insert(Box::from(pattern), compiled.clone());
        self.metrics.record_compile();
        Ok(compiled)
    }

    pub fn get(&self, pattern: &str) -> Option<&Arc<CompiledPattern>> {
        self.compiled.get(pattern)
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    pub fn clear(&mut self) {
        self.compiled.clear();
        self.compiled.shrink_to_fit();
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}
