use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::Arc;

use crate::readonly::RouterReadOnly;
use crate::registry::{RegistryMetrics, RouteRegistry};
use crate::router::{RouterError, RouterOptions, RouterResult};
use crate::types::{HttpMethod, RouteMatch};

#[derive(Debug)]
enum RouterState<T> {
    Building(RouteRegistry<T>),
    Sealed(Arc<RouterReadOnly<T>>),
}

/// Route table with a registration phase and a lookup phase.
///
/// Routes are added while building; [`Router::seal`] freezes them into an
/// [`RouterReadOnly`] snapshot that every lookup shares. A sealed router can
/// still grow through [`Router::extend`], which builds a new snapshot next to
/// the live one and swaps it in.
#[derive(Debug)]
pub struct Router<T> {
    options: RouterOptions,
    inner: RwLock<RouterState<T>>,
}

impl<T> Router<T> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        let options = options.unwrap_or_default();
        Self {
            inner: RwLock::new(RouterState::Building(RouteRegistry::new(
                options.normalization(),
            ))),
            options,
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn add(&self, method: HttpMethod, pattern: &str, handler: T) -> RouterResult<()> {
        let mut guard = self.inner.write();

        match &mut *guard {
            RouterState::Building(registry) => {
                registry.insert(method, pattern, Arc::new(handler))?;
                Ok(())
            }
            RouterState::Sealed(_) => Err(RouterError::AddWhileSealed {
                pattern: pattern.to_string(),
            }),
        }
    }

    pub fn add_bulk<I, S>(&self, entries: I) -> RouterResult<usize>
    where
        I: IntoIterator<Item = (HttpMethod, S, T)>,
        S: Into<String>,
    {
        let mut guard = self.inner.write();

        match &mut *guard {
            RouterState::Building(registry) => Ok(registry.insert_bulk(wrap_entries(entries))?),
            RouterState::Sealed(_) => Err(RouterError::BulkAddWhileSealed {
                count: entries.into_iter().count(),
            }),
        }
    }

    /// Freezes the registered routes. Sealing twice is a no-op.
    pub fn seal(&self) {
        let mut guard = self.inner.write();

        if let RouterState::Building(registry) = &mut *guard {
            let registry = std::mem::replace(
                registry,
                RouteRegistry::new(self.options.normalization()),
            );
            let metrics = registry.metrics();
            let snapshot = RouterReadOnly::from_registry(registry, self.options.normalization());
            tracing::debug!(
                routes = snapshot.route_count() as u64,
                patterns_compiled = metrics.patterns_compiled as u64,
                "router sealed"
            );
            *guard = RouterState::Sealed(Arc::new(snapshot));
        }
    }

    pub fn is_sealed(&self) -> bool {
        matches!(&*self.inner.read(), RouterState::Sealed(_))
    }

    pub fn find(&self, method: HttpMethod, path: &str) -> RouterResult<RouteMatch<T>> {
        let snapshot = self.snapshot().ok_or(RouterError::FindWhileMutable)?;
        snapshot.find(method, path)
    }

    pub fn matches(&self, method: HttpMethod, path: &str) -> RouterResult<bool> {
        let snapshot = self.snapshot().ok_or(RouterError::FindWhileMutable)?;
        snapshot.matches(method, path)
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouterReadOnly<T>>> {
        self.snapshot().ok_or(RouterError::ReadOnlyUnavailable)
    }

    /// Adds routes to a sealed router by copy-on-write: the current snapshot
    /// is copied, extended and swapped in. Lookups already holding the old
    /// snapshot keep using it; the new routes are visible to lookups that
    /// start after the swap. Fails without publishing anything if any entry
    /// is rejected.
    pub fn extend<I, S>(&self, entries: I) -> RouterResult<usize>
    where
        I: IntoIterator<Item = (HttpMethod, S, T)>,
        S: Into<String>,
    {
        // upgradable: lookups continue, concurrent extends queue up
        let guard = self.inner.upgradable_read();
        let RouterState::Sealed(current) = &*guard else {
            return Err(RouterError::ExtendWhileMutable);
        };

        let mut registry = current.to_registry();
        let count = registry.insert_bulk(wrap_entries(entries))?;
        let next = Arc::new(RouterReadOnly::from_registry(
            registry,
            self.options.normalization(),
        ));

        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        *guard = RouterState::Sealed(next);

        tracing::debug!(added = count as u64, "router snapshot replaced");
        Ok(count)
    }

    /// Registration counters; `None` once sealed.
    pub fn metrics(&self) -> Option<RegistryMetrics> {
        match &*self.inner.read() {
            RouterState::Building(registry) => Some(registry.metrics()),
            RouterState::Sealed(_) => None,
        }
    }

    fn snapshot(&self) -> Option<Arc<RouterReadOnly<T>>> {
        match &*self.inner.read() {
            RouterState::Sealed(snapshot) => Some(snapshot.clone()),
            RouterState::Building(_) => None,
        }
    }
}

fn wrap_entries<T, I, S>(entries: I) -> impl Iterator<Item = (HttpMethod, String, Arc<T>)>
where
    I: IntoIterator<Item = (HttpMethod, S, T)>,
    S: Into<String>,
{
    entries
        .into_iter()
        .map(|(method, pattern, handler)| (method, pattern.into(), Arc::new(handler)))
}
