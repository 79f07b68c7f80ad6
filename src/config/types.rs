//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::validation;
use crate::domain::HookError;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Process-wide default configuration
    pub settings: SettingsSection,

    /// Call-initialization hooks, in evaluation order
    pub hooks: Vec<HookSection>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_path: default_log_path(),
            settings: SettingsSection::default(),
            hooks: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    /// Delegates to the comprehensive validation module.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

impl FromStr for Config {
    type Err = HookError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

/// Configuration field values as written in the file.
///
/// Values are kept as strings; they are checked when the settings are
/// built so that one bad value never prevents the others from loading.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsSection {
    /// Two-letter region for numbers without a country code
    pub default_region: Option<String>,

    /// One of E164, INTERNATIONAL, NATIONAL, RFC3966
    pub format: Option<String>,

    /// Five-character locale for descriptions
    pub locale: Option<String>,

    /// Two-letter region out-of-country formatting dials from
    pub calling_from: Option<String>,

    /// Anything else found in the table
    #[serde(flatten)]
    pub unknown: BTreeMap<String, toml::Value>,
}

/// Hook declaration.
///
/// # Examples
///
/// ```toml
/// [[hooks]]
/// context = "public"
/// direction = "inbound"
/// scope = "caller"
/// actions = "format,get_number_type"
/// format = "NATIONAL"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookSection {
    /// Exact call context to match (any context when absent)
    pub context: Option<String>,

    /// `inbound` or `outbound` (any direction otherwise)
    pub direction: Option<String>,

    /// `caller` or `destination` (both legs otherwise)
    pub scope: Option<String>,

    /// Comma separated action names
    pub actions: Option<String>,

    /// Field overrides applied on top of the process defaults
    #[serde(flatten)]
    pub fields: SettingsSection,
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("phonenumber-hooks")
        })
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let config: Config = r#"
debug = true

[settings]
default_region = "GB"
format = "NATIONAL"
colour = "blue"

[[hooks]]
context = "public"
direction = "inbound"
actions = "format"
locale = "fr_FR"

[[hooks]]
scope = "destination"
"#
        .parse()
        .unwrap();

        assert!(config.debug);
        assert_eq!(config.settings.default_region.as_deref(), Some("GB"));
        assert_eq!(config.settings.format.as_deref(), Some("NATIONAL"));
        assert!(config.settings.unknown.contains_key("colour"));
        assert_eq!(config.hooks.len(), 2);
        assert_eq!(config.hooks[0].context.as_deref(), Some("public"));
        assert_eq!(config.hooks[0].fields.locale.as_deref(), Some("fr_FR"));
        assert!(config.hooks[0].fields.unknown.is_empty());
        assert_eq!(config.hooks[1].scope.as_deref(), Some("destination"));
        assert!(config.hooks[1].actions.is_none());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert!(!config.debug);
        assert!(config.hooks.is_empty());
        assert!(config.settings.default_region.is_none());
    }

    #[test]
    fn test_wrong_value_type_is_toml_error() {
        let result = "debug = \"yes\"".parse::<Config>();
        assert!(matches!(result, Err(HookError::Toml(_))));
    }
}
