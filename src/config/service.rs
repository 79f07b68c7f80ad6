//! Configuration service for loading and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::default_log_path_for_config_dir;
use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path.
    /// Always uses ~/.config/phonenumber-hooks/config.toml for cross-platform consistency.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("phonenumber-hooks")
            .join("config.toml")
    }

    /// Load configuration from file.
    ///
    /// If `path` is `None`, uses the default path.
    /// If the file doesn't exist, creates default configuration file.
    /// Field values are not validated here; bad values are reported when
    /// the runtime settings are built, and by `check`.
    /// Log path defaults to the same directory as config file.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);
        let config_dir = path.parent();

        if !path.exists() {
            // Create default config file
            Self::generate_at(&path)?;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = content
            .parse::<Config>()
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // If log_path was not explicitly set in config, use config file directory
        let general_default = default_log_path_for_config_dir(None);
        if config.log_path == general_default {
            config.log_path = default_log_path_for_config_dir(config_dir);
        }

        Ok(config)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = Self::default_config_content();
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> &'static str {
        r#"# phonenumber-hooks configuration file

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as config.toml/logs)
# If --config is specified, logs go to that directory/logs
# log_path = "~/.config/phonenumber-hooks/logs"

# Process-wide defaults, used when a request carries no overrides
[settings]
# Region assumed for numbers written without a country code
default_region = "US"
# Output of the format action: E164, INTERNATIONAL, NATIONAL or RFC3966
format = "E164"
# Locale for number descriptions
locale = "en_US"
# Region that out-of-country formatting dials from
calling_from = "US"

# Call-initialization hooks
# Every matching hook runs, caller leg first, then destination leg.
# Any of the settings fields above can be overridden per hook.
# [[hooks]]
# context = "public"            # exact match, any context when omitted
# direction = "inbound"         # inbound or outbound, any when omitted
# scope = "caller"              # caller or destination, both when omitted
# actions = "format,get_number_type,get_region_code"
# format = "NATIONAL"

# [[hooks]]
# direction = "outbound"
# scope = "destination"
# actions = "is_possible_number_with_reason,format_out_of_country_calling_number"
# calling_from = "GB"
"#
    }
}
