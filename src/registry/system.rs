//! Registry core functionality

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::config::AuthzConfig;

use super::predicates::RolePredicate;
use super::types::{AuthorizationTable, Token};

/// Registry of role to allowed-action mappings.
///
/// Each role is registered at most once with an explicit allow-list of
/// actions; re-registering a role replaces its action set wholesale. Queries
/// never fail: an unregistered role is simply not permitted anything.
#[derive(Debug, Clone, Default)]
pub struct AuthzRegistry {
    /// Role definitions, each an allow-list of actions
    table: AuthorizationTable,
}

impl AuthzRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Build a registry from declarative configuration.
    pub fn from_config(config: &AuthzConfig) -> Self {
        info!("Building authorization registry from configuration");

        let mut registry = Self::new();
        for (role, actions) in &config.roles {
            registry.register_role(role.as_str(), actions.iter().map(String::as_str));
        }

        debug!("Registered {} roles", registry.len());
        registry
    }

    /// Register a role with its allowed actions.
    ///
    /// Inserts or replaces the role's entry; there is no merge with a prior
    /// registration. An empty action list is valid and leaves the role
    /// registered but authorized for nothing.
    pub fn register_role<R, A, I>(&mut self, role: R, actions: I)
    where
        R: Into<Token>,
        I: IntoIterator<Item = A>,
        A: Into<Token>,
    {
        let role = role.into();
        let actions: HashSet<Token> = actions.into_iter().map(Into::into).collect();

        debug!("Registering role '{}' with {} actions", role, actions.len());
        self.table.insert(role, actions);
    }

    /// Generic permission query.
    ///
    /// `true` iff the role is registered and its action set contains the
    /// action. Absent roles short-circuit to `false`.
    pub fn is_authorized(&self, role: impl AsRef<str>, action: impl AsRef<str>) -> bool {
        self.table
            .get(role.as_ref())
            .is_some_and(|actions| actions.contains(action.as_ref()))
    }

    /// Whether `role` may perform `action`.
    ///
    /// The primary query entry point; same contract as [`is_authorized`].
    ///
    /// [`is_authorized`]: AuthzRegistry::is_authorized
    pub fn able(&self, role: impl AsRef<str>, action: impl AsRef<str>) -> bool {
        self.is_authorized(role, action)
    }

    /// Exact logical negation of [`able`].
    ///
    /// [`able`]: AuthzRegistry::able
    pub fn unable(&self, role: impl AsRef<str>, action: impl AsRef<str>) -> bool {
        !self.able(role, action)
    }

    /// Convenience predicate fixed to one role, looked up by name.
    ///
    /// The handle borrows the live table, so re-registering the role is
    /// reflected by existing and future handles alike.
    pub fn predicate(&self, role: impl Into<Token>) -> RolePredicate<'_> {
        RolePredicate::new(self, role.into())
    }

    /// Whether the role has been registered.
    pub fn is_registered(&self, role: impl AsRef<str>) -> bool {
        self.table.contains_key(role.as_ref())
    }

    /// The action set for a role, if registered.
    pub fn actions_for(&self, role: impl AsRef<str>) -> Option<&HashSet<Token>> {
        self.table.get(role.as_ref())
    }

    /// Iterate over the registered roles.
    pub fn roles(&self) -> impl Iterator<Item = &Token> {
        self.table.keys()
    }

    /// Number of registered roles.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no roles have been registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
