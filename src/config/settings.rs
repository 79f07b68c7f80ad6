//! Runtime settings built from the configuration file.
//!
//! Building is fail-soft: invalid values are logged and ignored, unknown
//! parameters are logged, and every field falls back to its default.

use tracing::{debug, warn};

use super::types::{Config, HookSection, SettingsSection};
use crate::domain::{
    ActionList, ConfigResolver, Configuration, DirectionFilter, HookRule, HookSet, Param, Scope,
};

/// Process defaults and hook rules, immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Configuration used when a request carries no overrides
    pub defaults: Configuration,

    /// Rules evaluated at call initialization
    pub hooks: HookSet,
}

impl Settings {
    /// Build settings from a loaded configuration file.
    pub fn from_config(config: &Config) -> Self {
        let builtin = Configuration::default();
        let defaults = apply_section(&builtin, &config.settings, "");

        let rules = config
            .hooks
            .iter()
            .map(|section| build_hook(&defaults, section))
            .collect();

        Self {
            defaults,
            hooks: HookSet::new(rules),
        }
    }
}

/// Apply the fields of `section` on top of `baseline`.
fn apply_section(baseline: &Configuration, section: &SettingsSection, label: &str) -> Configuration {
    let mut config = baseline.clone();

    let fields = [
        (Param::DefaultRegion, &section.default_region),
        (Param::Format, &section.format),
        (Param::Locale, &section.locale),
        (Param::CallingFrom, &section.calling_from),
    ];

    for (param, value) in fields {
        let Some(value) = value else { continue };
        if let Err(e) = ConfigResolver::apply(&mut config, baseline, param, value) {
            warn!("{}{}", label, e);
        }
    }

    for key in section.unknown.keys() {
        warn!("Unknown {}configuration parameter {}", label, key);
    }

    config
}

fn build_hook(defaults: &Configuration, section: &HookSection) -> HookRule {
    let config = apply_section(defaults, &section.fields, "hook ");

    let direction = section
        .direction
        .as_deref()
        .map(DirectionFilter::from_name)
        .unwrap_or_default();
    let scope = section
        .scope
        .as_deref()
        .map(Scope::from_name)
        .unwrap_or_default();
    let actions = section
        .actions
        .as_deref()
        .map(ActionList::parse)
        .unwrap_or_default();

    debug!(
        "Configured hook: context={:?}, direction={}, scope={}, actions={}",
        section.context,
        direction.as_str(),
        scope.as_str(),
        actions.len()
    );

    HookRule {
        context: section.context.clone(),
        direction,
        scope,
        config,
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Action, OutputFormat};

    fn load(toml_src: &str) -> Settings {
        let config: Config = toml::from_str(toml_src).unwrap();
        Settings::from_config(&config)
    }

    #[test]
    fn test_builtin_defaults() {
        let settings = load("");
        assert_eq!(settings.defaults.default_region.as_str(), "US");
        assert_eq!(settings.defaults.output_format, OutputFormat::E164);
        assert_eq!(settings.defaults.locale.as_str(), "en_US");
        assert_eq!(settings.defaults.calling_from_region.as_str(), "US");
        assert!(settings.hooks.is_empty());
    }

    #[test]
    fn test_invalid_settings_keep_builtin_values() {
        let settings = load(
            r#"
[settings]
default_region = "GBR"
format = "SHOUTING"
locale = "fr"
calling_from = "DE"
"#,
        );
        assert_eq!(settings.defaults.default_region.as_str(), "US");
        assert_eq!(settings.defaults.output_format, OutputFormat::E164);
        assert_eq!(settings.defaults.locale.as_str(), "en_US");
        assert_eq!(settings.defaults.calling_from_region.as_str(), "DE");
    }

    #[test]
    fn test_hooks_inherit_process_defaults() {
        let settings = load(
            r#"
[settings]
default_region = "GB"
format = "NATIONAL"

[[hooks]]
context = "public"
direction = "outbound"
scope = "caller"
actions = "format,nonsense,get_region_code"
locale = "fr_FR"

[[hooks]]
"#,
        );

        let rules = settings.hooks.rules();
        assert_eq!(rules.len(), 2);

        let first = &rules[0];
        assert_eq!(first.context.as_deref(), Some("public"));
        assert_eq!(first.direction, DirectionFilter::Outbound);
        assert_eq!(first.scope, Scope::Caller);
        assert_eq!(first.actions.as_slice(), &[Action::Format, Action::GetRegionCode]);
        assert_eq!(first.config.default_region.as_str(), "GB");
        assert_eq!(first.config.output_format, OutputFormat::National);
        assert_eq!(first.config.locale.as_str(), "fr_FR");

        let second = &rules[1];
        assert_eq!(second.context, None);
        assert_eq!(second.direction, DirectionFilter::Any);
        assert_eq!(second.scope, Scope::All);
        assert!(second.actions.is_empty());
        assert_eq!(second.config, settings.defaults);
    }

    #[test]
    fn test_hook_format_falls_back_to_process_default() {
        let settings = load(
            r#"
[settings]
format = "RFC3966"

[[hooks]]
format = "unknown"
"#,
        );
        assert_eq!(settings.hooks.rules()[0].config.output_format, OutputFormat::Rfc3966);
    }
}
