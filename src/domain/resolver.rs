//! Layered configuration resolution.
//!
//! A configuration is always derived from a baseline (process defaults or a
//! hook's defaults) by applying `key=value` overrides one at a time. Bad
//! values are logged and leave the field as it was.

use tracing::{debug, warn};

use super::error::HookError;
use super::types::{prefix_matches, Configuration, Locale, OutputFormat, RegionCode};

/// Maximum number of `key=value` tuples read from an override string.
pub const MAX_OVERRIDES: usize = 4;

/// Configuration fields that can be overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    DefaultRegion,
    Format,
    Locale,
    CallingFrom,
}

impl Param {
    const ALL: [Param; 4] = [
        Param::DefaultRegion,
        Param::Format,
        Param::Locale,
        Param::CallingFrom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Param::DefaultRegion => "default_region",
            Param::Format => "format",
            Param::Locale => "locale",
            Param::CallingFrom => "calling_from",
        }
    }

    /// Match an override key with the prefix rule.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|param| param.matches_key(key))
    }

    /// `locale` and `calling_from` are matched case-sensitively.
    fn matches_key(&self, key: &str) -> bool {
        match self {
            Param::Locale | Param::CallingFrom => key.starts_with(self.name()),
            Param::DefaultRegion | Param::Format => prefix_matches(key, self.name()),
        }
    }
}

/// Builds per-request configurations from a baseline and overrides.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve `overrides` (`key=value,key=value`) on top of `baseline`.
    ///
    /// The result is an independent copy; `baseline` is never touched.
    pub fn resolve(baseline: &Configuration, overrides: Option<&str>) -> Configuration {
        let mut config = baseline.clone();

        let Some(overrides) = overrides.filter(|s| !s.is_empty()) else {
            return config;
        };

        for tuple in overrides.splitn(MAX_OVERRIDES, ',') {
            let Some((key, value)) = tuple.split_once('=') else {
                warn!("Unable to parse configuration argument {}", tuple);
                continue;
            };

            match Param::from_key(key) {
                Some(param) => {
                    if let Err(e) = Self::apply(&mut config, baseline, param, value) {
                        warn!("{}", e);
                    }
                }
                None => warn!("Unknown configuration argument {}", key),
            }
        }

        config
    }

    /// Apply a single field to `config`.
    ///
    /// An unrecognised format falls back to the baseline's format rather
    /// than failing. Length violations return an error and leave the field
    /// unchanged.
    pub fn apply(
        config: &mut Configuration,
        baseline: &Configuration,
        param: Param,
        value: &str,
    ) -> Result<(), HookError> {
        match param {
            Param::DefaultRegion => {
                config.default_region =
                    RegionCode::new(value).map_err(|_| invalid("default region", value))?;
            }
            Param::Format => {
                config.output_format =
                    OutputFormat::from_name(value).unwrap_or(baseline.output_format);
            }
            Param::Locale => {
                config.locale = Locale::new(value).map_err(|_| invalid("locale", value))?;
            }
            Param::CallingFrom => {
                config.calling_from_region =
                    RegionCode::new(value).map_err(|_| invalid("calling from region", value))?;
            }
        }
        debug!("Configured {}: {}", param.name(), value);
        Ok(())
    }
}

fn invalid(field: &'static str, value: &str) -> HookError {
    HookError::InvalidField {
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> Configuration {
        Configuration {
            output_format: OutputFormat::National,
            ..Configuration::default()
        }
    }

    #[test]
    fn test_absent_or_empty_overrides_return_baseline() {
        let base = baseline();
        assert_eq!(ConfigResolver::resolve(&base, None), base);
        assert_eq!(ConfigResolver::resolve(&base, Some("")), base);
    }

    #[test]
    fn test_all_fields_override() {
        let config = ConfigResolver::resolve(
            &baseline(),
            Some("default_region=GB,format=RFC3966,locale=fr_FR,calling_from=DE"),
        );
        assert_eq!(config.default_region.as_str(), "GB");
        assert_eq!(config.output_format, OutputFormat::Rfc3966);
        assert_eq!(config.locale.as_str(), "fr_FR");
        assert_eq!(config.calling_from_region.as_str(), "DE");
    }

    #[test]
    fn test_malformed_values_keep_prior_value() {
        let base = baseline();
        let config = ConfigResolver::resolve(
            &base,
            Some("default_region=GBR,locale=fr,calling_from=,format=bogus"),
        );
        assert_eq!(config, base);
    }

    #[test]
    fn test_unknown_format_falls_back_to_baseline_format() {
        let base = baseline();
        let mut config = base.clone();
        config.output_format = OutputFormat::E164;
        ConfigResolver::apply(&mut config, &base, Param::Format, "nonsense").unwrap();
        assert_eq!(config.output_format, OutputFormat::National);
    }

    #[test]
    fn test_unknown_keys_and_tuples_are_skipped() {
        let config = ConfigResolver::resolve(&baseline(), Some("colour=blue,garbage,locale=de_DE"));
        assert_eq!(config.locale.as_str(), "de_DE");
        assert_eq!(config.default_region.as_str(), "US");
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let config = ConfigResolver::resolve(&baseline(), Some("DEFAULT_REGION=IT,Format=e164"));
        assert_eq!(config.default_region.as_str(), "IT");
        assert_eq!(config.output_format, OutputFormat::E164);
    }

    #[test]
    fn test_locale_and_calling_from_keys_are_case_sensitive() {
        let config = ConfigResolver::resolve(&baseline(), Some("LOCALE=fr_FR,Calling_From=DE"));
        assert_eq!(config, baseline());

        assert_eq!(Param::from_key("locale"), Some(Param::Locale));
        assert_eq!(Param::from_key("calling_from_x"), Some(Param::CallingFrom));
        assert_eq!(Param::from_key("Locale"), None);
        assert_eq!(Param::from_key("CALLING_FROM"), None);
        assert_eq!(Param::from_key("FORMAT"), Some(Param::Format));
    }

    #[test]
    fn test_only_four_tuples_are_read() {
        // The fourth piece keeps the rest of the string, so its value is too long.
        let config = ConfigResolver::resolve(
            &baseline(),
            Some("locale=fr_FR,format=E164,default_region=GB,calling_from=DE,locale=es_ES"),
        );
        assert_eq!(config.locale.as_str(), "fr_FR");
        assert_eq!(config.default_region.as_str(), "GB");
        assert_eq!(config.calling_from_region.as_str(), "US");
    }

    #[test]
    fn test_value_may_contain_equals_sign() {
        let config = ConfigResolver::resolve(&baseline(), Some("locale=a=b_c"));
        assert_eq!(config.locale.as_str(), "a=b_c");
    }

    #[test]
    fn test_resolve_does_not_mutate_baseline() {
        let base = baseline();
        let before = base.clone();
        let mut resolved = ConfigResolver::resolve(&base, Some("default_region=GB"));
        resolved.locale = Locale::new("it_IT").unwrap();
        assert_eq!(base, before);
    }
}
