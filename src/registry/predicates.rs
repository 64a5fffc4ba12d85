//! Per-role convenience predicates

use super::system::AuthzRegistry;
use super::types::Token;

/// A permission predicate fixed to a single role.
///
/// Obtained from [`AuthzRegistry::predicate`]; answers the same question as
/// the generic query with the role bound up front. An unregistered role
/// yields a predicate that allows nothing.
#[derive(Debug, Clone)]
pub struct RolePredicate<'a> {
    registry: &'a AuthzRegistry,
    role: Token,
}

impl<'a> RolePredicate<'a> {
    pub(super) fn new(registry: &'a AuthzRegistry, role: Token) -> Self {
        Self { registry, role }
    }

    /// The role this predicate answers for.
    pub fn role(&self) -> &Token {
        &self.role
    }

    /// Same contract as [`AuthzRegistry::able`] with the role fixed.
    pub fn allows(&self, action: impl AsRef<str>) -> bool {
        self.registry.is_authorized(&self.role, action)
    }

    /// Exact logical negation of [`allows`].
    ///
    /// [`allows`]: RolePredicate::allows
    pub fn denies(&self, action: impl AsRef<str>) -> bool {
        !self.allows(action)
    }
}
