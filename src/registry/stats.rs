#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RegistryMetrics {
    pub total_routes_registered: usize,
    pub patterns_compiled: usize,
    pub pattern_cache_hits: usize,
}

impl RegistryMetrics {
    pub fn record_insert(&mut self) {
        self.total_routes_registered += 1;
    }

    pub fn record_bulk(&mut self, count: usize) {
        self.total_routes_registered += count;
    }

    pub fn record_compile(&mut self) {
        self.patterns_compiled += 1;
    }

    pub fn record_cache_hit(&mut self) {
        self.pattern_cache_hits += 1;
    }
}
