use std::sync::Arc;

use crate::enums::HttpMethod;
use crate::matcher::Match;
use crate::path::{NormalizationOptions, normalize_path};
use crate::radix::RadixTree;
use crate::registry::{MethodTrees, RouteRegistry};
use crate::router::{RouterError, RouterResult};
use crate::types::RouteMatch;

/// Sealed, immutable routing table built for lock-free concurrent lookups.
///
/// Holds only owned data and no interior mutability, so it is `Send + Sync`
/// whenever the handler type is. Share it behind an `Arc`.
#[derive(Debug)]
pub struct RouterReadOnly<T> {
    trees: MethodTrees<T>,
    normalization: NormalizationOptions,
}

impl<T> RouterReadOnly<T> {
    pub fn from_registry(registry: RouteRegistry<T>, normalization: NormalizationOptions) -> Self {
        Self {
            trees: registry.into_sealed_trees(),
            normalization,
        }
    }

    /// A mutable registry seeded with copies of every route in this snapshot.
    pub fn to_registry(&self) -> RouteRegistry<T> {
        let trees = std::array::from_fn(|i| self.trees[i].to_builder());
        RouteRegistry::from_trees(trees, self.normalization)
    }

    pub fn tree(&self, method: HttpMethod) -> &RadixTree<Arc<T>> {
        &self.trees[method.index()]
    }

    pub fn route_count(&self) -> usize {
        self.trees.iter().map(RadixTree::len).sum()
    }

    /// Matches `path` exactly as given, without normalization, borrowing the
    /// captured values from it.
    pub fn lookup<'s, 'p>(
        &'s self,
        method: HttpMethod,
        path: &'p str,
    ) -> Option<Match<'s, 'p, Arc<T>>> {
        self.trees[method.index()].match_full(path)
    }

    #[tracing::instrument(level = "trace", skip(self, path), fields(method=%method.as_str(), path=%path))]
    pub fn find(&self, method: HttpMethod, path: &str) -> RouterResult<RouteMatch<T>> {
        let normalized = normalize_path(path, &self.normalization)?;

        let found = self.trees[method.index()]
            .match_full(&normalized)
            .map(|found| (found.payload.clone(), found.params.to_map()));

        found.ok_or_else(|| RouterError::RouteNotFound {
            method,
            path: normalized.into_owned(),
        })
    }

    pub fn matches(&self, method: HttpMethod, path: &str) -> RouterResult<bool> {
        let normalized = normalize_path(path, &self.normalization)?;
        Ok(self.trees[method.index()].match_only(&normalized))
    }
}
