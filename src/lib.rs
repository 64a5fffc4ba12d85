//! # able-rs
//!
//! Static, declarative role-based access control (RBAC) for request
//! handlers: register each role once with an explicit allow-list of
//! actions, then ask whether a role may perform an action.
//!
//! ## Features
//!
//! - **Static allow-lists**: roles are defined once at configuration time;
//!   re-registering a role replaces its action set wholesale
//! - **Infallible queries**: asking about an unregistered role is a normal
//!   `false`, never an error or panic
//! - **Declarative configuration**: role definitions load from YAML
//! - **Shared snapshots**: [`SharedRegistry`] swaps immutable tables
//!   atomically so concurrent readers never see a half-updated action set
//!
//! ## Quick Start
//!
//! ```rust
//! use able_rs::AuthzRegistry;
//!
//! let mut registry = AuthzRegistry::new();
//! registry.register_role("admin", ["index", "show", "create", "update", "destroy"]);
//! registry.register_role("user", ["index", "show"]);
//!
//! assert!(registry.able("admin", "create"));
//! assert!(registry.unable("user", "create"));
//! assert!(registry.unable("guest", "index"));
//! ```
//!
//! ## Configuration-driven setup
//!
//! ```rust,no_run
//! use able_rs::{AuthzConfig, AuthzRegistry};
//!
//! # fn main() -> able_rs::Result<()> {
//! let config = AuthzConfig::from_file("config/authz.yaml")?;
//! let registry = AuthzRegistry::from_config(&config);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod registry;
pub mod utils;

// Re-export main types
pub use config::AuthzConfig;
pub use registry::{AuthorizationTable, AuthzRegistry, RolePredicate, SharedRegistry, Token};
pub use utils::error::{AuthzError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
