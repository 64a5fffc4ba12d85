//! Role-based access control registry
//!
//! This module provides the authorization registry: a static role to
//! allowed-action table populated at configuration time and queried by
//! request handlers.

mod predicates;
mod shared;
mod system;
mod types;

// Re-export public types and structs
pub use predicates::RolePredicate;
pub use shared::SharedRegistry;
pub use system::AuthzRegistry;
pub use types::{AuthorizationTable, Token};
