mod patterns;
mod stats;
mod store;

pub use patterns::PatternRegistry;
pub use stats::RegistryMetrics;
pub use store::RouteRegistry;
pub(crate) use store::MethodTrees;
