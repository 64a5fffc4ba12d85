//! Configuration for the authorization registry
//!
//! Role definitions are declarative: a mapping from role name to the list
//! of actions that role is allowed to perform, loaded once at startup.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::utils::error::{AuthzError, Result};

/// Declarative role definitions.
///
/// Each entry is a static allow-list; roles absent from the map are simply
/// not permitted anything. An empty action list is accepted and means the
/// role exists but can do nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Role name to allowed actions
    #[serde(default)]
    pub roles: HashMap<String, Vec<String>>,
}

impl AuthzConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading authorization configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;

        config
            .validate()
            .map_err(|e| AuthzError::Config(format!("Invalid authorization config: {}", e)))?;

        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Blank role names and blank action tokens are rejected. An empty
    /// action list is permitted and only logged, since a role that can do
    /// nothing is a valid (if unusual) registration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        debug!("Validating authorization configuration");

        for (role, actions) in &self.roles {
            if role.trim().is_empty() {
                return Err("Role names must not be blank".to_string());
            }

            for action in actions {
                if action.trim().is_empty() {
                    return Err(format!("Role '{}' has a blank action token", role));
                }
            }

            if actions.is_empty() {
                warn!(
                    "Role '{}' is configured with no actions and will authorize nothing",
                    role
                );
            }
        }

        Ok(())
    }

    /// Merge with another configuration (other takes precedence).
    ///
    /// A role present in both keeps `other`'s action list wholesale,
    /// matching the registry's replacement semantics.
    pub fn merge(mut self, other: Self) -> Self {
        for (role, actions) in other.roles {
            self.roles.insert(role, actions);
        }
        self
    }

    /// Convert to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_from_file() {
        let config_content = r#"
roles:
  admin: [index, show, create, update, destroy]
  user: [index, show]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = AuthzConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.roles.len(), 2);
        assert_eq!(config.roles["admin"].len(), 5);
        assert_eq!(config.roles["user"], vec!["index", "show"]);
    }

    #[test]
    fn test_config_from_missing_file() {
        let result = AuthzConfig::from_file("does/not/exist.yaml");
        assert!(matches!(result, Err(AuthzError::Io(_))));
    }

    #[test]
    fn test_config_from_yaml() {
        let config = AuthzConfig::from_yaml("roles:\n  user: [index]\n").unwrap();
        assert_eq!(config.roles["user"], vec!["index"]);
    }

    #[test]
    fn test_config_rejects_malformed_yaml() {
        let result = AuthzConfig::from_yaml("roles: [not, a, map]");
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config() {
        let config = AuthzConfig::default();
        assert!(config.roles.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_action() {
        let mut config = AuthzConfig::default();
        config
            .roles
            .insert("user".to_string(), vec!["index".to_string(), "  ".to_string()]);

        let err = config.validate().unwrap_err();
        assert!(err.contains("blank action token"));
    }

    #[test]
    fn test_validate_rejects_blank_role() {
        let mut config = AuthzConfig::default();
        config.roles.insert("  ".to_string(), vec!["index".to_string()]);

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_permits_empty_action_list() {
        let mut config = AuthzConfig::default();
        config.roles.insert("intern".to_string(), vec![]);

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_other_takes_precedence() {
        let base = AuthzConfig::from_yaml("roles:\n  user: [index, show]\n  admin: [index]\n").unwrap();
        let overlay = AuthzConfig::from_yaml("roles:\n  user: [index]\n").unwrap();

        let merged = base.merge(overlay);

        assert_eq!(merged.roles["user"], vec!["index"]);
        assert_eq!(merged.roles["admin"], vec!["index"]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AuthzConfig::from_yaml("roles:\n  user: [index]\n").unwrap();

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("user"));

        let json = config.to_json().unwrap();
        assert!(json.contains("index"));
    }
}
