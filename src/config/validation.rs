//! Configuration validation.
//!
//! Loading is fail-soft; this strict pass backs the `check` command and
//! reports the first problem it finds.

use anyhow::{bail, Result};

use super::types::SettingsSection;
use super::Config;
use crate::domain::{
    match_action, prefix_matches, DirectionFilter, Locale, OutputFormat, RegionCode, Scope,
    MAX_ACTIONS,
};

/// Names a hook may use for a direction or scope that matches everything.
const MATCH_ALL_NAMES: [&str; 2] = ["all", "any"];

fn names_match_all(value: &str) -> bool {
    MATCH_ALL_NAMES.iter().any(|name| prefix_matches(value, name))
}

/// Validate configuration.
pub fn validate(config: &Config) -> Result<()> {
    // Validate log path
    if !config.log_path.as_os_str().is_empty() {
        // Path will be created if it doesn't exist, so just check it's valid
        if config.log_path.to_string_lossy().contains('\0') {
            bail!("Invalid log_path: contains null character");
        }
    }

    validate_section(&config.settings, "settings")?;

    for (i, hook) in config.hooks.iter().enumerate() {
        let label = format!("hooks[{}]", i);
        validate_section(&hook.fields, &label)?;

        if let Some(context) = &hook.context {
            if context.is_empty() {
                bail!("{}: context cannot be empty", label);
            }
        }

        if let Some(direction) = &hook.direction {
            if DirectionFilter::from_name(direction) == DirectionFilter::Any
                && !names_match_all(direction)
            {
                bail!(
                    "{}: direction must be 'inbound', 'outbound' or 'all', got '{}'",
                    label,
                    direction
                );
            }
        }

        if let Some(scope) = &hook.scope {
            if Scope::from_name(scope) == Scope::All && !names_match_all(scope) {
                bail!(
                    "{}: scope must be 'caller', 'destination' or 'all', got '{}'",
                    label,
                    scope
                );
            }
        }

        let Some(actions) = &hook.actions else {
            bail!("{}: actions cannot be empty", label);
        };
        if actions.is_empty() {
            bail!("{}: actions cannot be empty", label);
        }
        for name in actions.splitn(MAX_ACTIONS, ',') {
            if match_action(name).is_none() {
                bail!("{}: unknown action '{}'", label, name);
            }
        }
    }

    Ok(())
}

fn validate_section(section: &SettingsSection, label: &str) -> Result<()> {
    if let Some(region) = &section.default_region {
        if let Err(e) = RegionCode::new(region) {
            bail!("{}: {}", label, e);
        }
    }

    if let Some(format) = &section.format {
        if OutputFormat::from_name(format).is_none() {
            bail!(
                "{}: format must be one of E164, INTERNATIONAL, NATIONAL, RFC3966, got '{}'",
                label,
                format
            );
        }
    }

    if let Some(locale) = &section.locale {
        if let Err(e) = Locale::new(locale) {
            bail!("{}: {}", label, e);
        }
    }

    if let Some(region) = &section.calling_from {
        if let Err(e) = RegionCode::new(region) {
            bail!("{}: {}", label, e);
        }
    }

    if let Some(key) = section.unknown.keys().next() {
        bail!("{}: unknown parameter '{}'", label, key);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(toml_src: &str) -> Result<()> {
        let config: Config = toml::from_str(toml_src).unwrap();
        validate(&config)
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_valid_file() {
        let result = check(
            r#"
[settings]
default_region = "GB"
format = "national"
locale = "en_GB"

[[hooks]]
context = "default"
direction = "INBOUND"
scope = "caller"
actions = "format,get_number_type"
calling_from = "DE"
"#,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_bad_region_length() {
        let err = check("[settings]\ndefault_region = \"USA\"\n").unwrap_err();
        assert!(err.to_string().contains("settings"));
    }

    #[test]
    fn test_unknown_format() {
        let err = check("[settings]\nformat = \"PRETTY\"\n").unwrap_err();
        assert!(err.to_string().contains("PRETTY"));
    }

    #[test]
    fn test_bad_locale_in_hook() {
        let err = check("[[hooks]]\nactions = \"format\"\nlocale = \"en\"\n").unwrap_err();
        assert!(err.to_string().contains("hooks[0]"));
    }

    #[test]
    fn test_unknown_action() {
        let err = check("[[hooks]]\nactions = \"format,frobnicate\"\n").unwrap_err();
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn test_hook_without_actions() {
        assert!(check("[[hooks]]\ncontext = \"default\"\n").is_err());
    }

    #[test]
    fn test_unknown_parameter() {
        let err = check("[settings]\ncolour = \"blue\"\n").unwrap_err();
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_match_all_direction_and_scope() {
        for value in ["all", "ALL", "any"] {
            let src = format!(
                "[[hooks]]\nactions = \"format\"\ndirection = \"{0}\"\nscope = \"{0}\"\n",
                value
            );
            assert!(check(&src).is_ok(), "{}", value);
        }
    }

    #[test]
    fn test_bad_scope() {
        let err = check("[[hooks]]\nactions = \"format\"\nscope = \"both\"\n").unwrap_err();
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn test_bad_direction() {
        let err = check("[[hooks]]\nactions = \"format\"\ndirection = \"sideways\"\n").unwrap_err();
        assert!(err.to_string().contains("sideways"));
    }
}
