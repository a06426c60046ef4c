//! Configuration for the identity resolvers.
//!
//! Only genuinely host-specific knobs live here: the manifest metadata key
//! names and the attribution provider coordinates. The duplicated
//! Android-ID sentinel, the legacy file path, and the hashing encoding are
//! server-side contracts and deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;

pub use error::ConfigError;

/// Default manifest key naming the application's analytics key.
pub const DEFAULT_APP_KEY_FIELD: &str = "TETHER_APP_KEY";

/// Default manifest key naming the application's rollup key.
pub const DEFAULT_ROLLUP_KEY_FIELD: &str = "TETHER_ROLLUP_KEY";

/// Content URI of the attribution provider queried at install time.
pub const DEFAULT_ATTRIBUTION_URI: &str =
    "content://com.facebook.katana.provider.AttributionIdProvider";

/// Column holding the attribution cookie.
pub const DEFAULT_ATTRIBUTION_COLUMN: &str = "aid";

/// Resolver configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Manifest metadata key read by [`app_key`](crate::app_key).
    pub app_key_field: String,

    /// Manifest metadata key read by [`rollup_key`](crate::rollup_key).
    pub rollup_key_field: String,

    /// Content URI of the third-party attribution provider.
    pub attribution_uri: String,

    /// Column name holding the attribution cookie.
    pub attribution_column: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            app_key_field: DEFAULT_APP_KEY_FIELD.to_string(),
            rollup_key_field: DEFAULT_ROLLUP_KEY_FIELD.to_string(),
            attribution_uri: DEFAULT_ATTRIBUTION_URI.to_string(),
            attribution_column: DEFAULT_ATTRIBUTION_COLUMN.to_string(),
        }
    }
}

impl IdentityConfig {
    /// Parse a configuration from a TOML string. Missing fields take
    /// their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: IdentityConfig =
            toml::from_str(input).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Reject configurations that would make a resolver unanswerable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_key_field.is_empty() {
            return Err(ConfigError::InvalidValue(
                "app_key_field must not be empty".to_string(),
            ));
        }
        if self.rollup_key_field.is_empty() {
            return Err(ConfigError::InvalidValue(
                "rollup_key_field must not be empty".to_string(),
            ));
        }
        if !self.attribution_uri.starts_with("content://") {
            return Err(ConfigError::InvalidValue(format!(
                "attribution_uri must be a content URI, got '{}'",
                self.attribution_uri
            )));
        }
        if self.attribution_column.is_empty() {
            return Err(ConfigError::InvalidValue(
                "attribution_column must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_wire_contract() {
        let config = IdentityConfig::default();
        assert_eq!(config.app_key_field, "TETHER_APP_KEY");
        assert_eq!(config.rollup_key_field, "TETHER_ROLLUP_KEY");
        assert_eq!(
            config.attribution_uri,
            "content://com.facebook.katana.provider.AttributionIdProvider"
        );
        assert_eq!(config.attribution_column, "aid");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = IdentityConfig::from_toml_str(r#"app_key_field = "MY_KEY""#).unwrap();
        assert_eq!(config.app_key_field, "MY_KEY");
        assert_eq!(config.rollup_key_field, DEFAULT_ROLLUP_KEY_FIELD);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = IdentityConfig::default();
        let toml = config.to_toml_string().unwrap();
        let parsed = IdentityConfig::from_toml_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = IdentityConfig::from_toml_str("not toml at all [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_non_content_uri_rejected() {
        let err =
            IdentityConfig::from_toml_str(r#"attribution_uri = "https://example.com""#)
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_empty_key_field_rejected() {
        let err = IdentityConfig::from_toml_str(r#"app_key_field = """#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }
}
