//! Shared registry with atomic snapshot replacement

use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::debug;

use super::system::AuthzRegistry;
use super::types::Token;

/// Cloneable handle to a registry shared across threads and components.
///
/// Readers load an immutable snapshot of the table; registration builds a
/// new table and swaps it in atomically, so a concurrent query never
/// observes a partially updated action set. Every clone of the handle reads
/// the same table.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<ArcSwap<AuthzRegistry>>,
}

impl SharedRegistry {
    /// Wrap a registry for shared use.
    pub fn new(registry: AuthzRegistry) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(registry)),
        }
    }

    /// Register a role with its allowed actions.
    ///
    /// Read-copy-update: the current snapshot is cloned, the registration
    /// applied, and the result swapped in. Same replacement semantics as
    /// [`AuthzRegistry::register_role`].
    pub fn register_role<R, A, I>(&self, role: R, actions: I)
    where
        R: Into<Token>,
        I: IntoIterator<Item = A>,
        A: Into<Token>,
    {
        let role = role.into();
        let actions: Vec<Token> = actions.into_iter().map(Into::into).collect();

        self.inner.rcu(|current| {
            let mut next = AuthzRegistry::clone(current);
            next.register_role(role.clone(), actions.iter().cloned());
            next
        });
    }

    /// Generic permission query against the current snapshot.
    pub fn is_authorized(&self, role: impl AsRef<str>, action: impl AsRef<str>) -> bool {
        self.inner.load().is_authorized(role, action)
    }

    /// Whether `role` may perform `action`, per the current snapshot.
    pub fn able(&self, role: impl AsRef<str>, action: impl AsRef<str>) -> bool {
        self.inner.load().able(role, action)
    }

    /// Exact logical negation of [`able`].
    ///
    /// [`able`]: SharedRegistry::able
    pub fn unable(&self, role: impl AsRef<str>, action: impl AsRef<str>) -> bool {
        !self.able(role, action)
    }

    /// Pin the current snapshot for a consistent sequence of queries.
    pub fn snapshot(&self) -> Arc<AuthzRegistry> {
        self.inner.load_full()
    }

    /// Swap in a freshly built registry wholesale.
    pub fn replace(&self, registry: AuthzRegistry) {
        debug!("Replacing shared authorization table ({} roles)", registry.len());
        self.inner.store(Arc::new(registry));
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(AuthzRegistry::new())
    }
}

impl From<AuthzRegistry> for SharedRegistry {
    fn from(registry: AuthzRegistry) -> Self {
        Self::new(registry)
    }
}
