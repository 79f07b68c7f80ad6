//! Core domain types shared by the resolver, the pipeline and the hooks.

use std::fmt;

use serde::Deserialize;

use super::error::HookError;

/// Case-insensitive fixed-length prefix comparison.
///
/// Succeeds when the first `name.len()` bytes of `input` equal `name`,
/// ignoring ASCII case. Anything after that prefix is not looked at, so
/// `"FORMAT_extra"` matches `"format"`.
pub fn prefix_matches(input: &str, name: &str) -> bool {
    input
        .as_bytes()
        .get(..name.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(name.as_bytes()))
}

/// Two-letter region code such as `US` or `GB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    /// Region code used when nothing else applies.
    pub const UNKNOWN: &'static str = "ZZ";

    /// Build a region code, rejecting anything that is not exactly 2 bytes.
    pub fn new(value: &str) -> Result<Self, HookError> {
        if value.len() != 2 {
            return Err(HookError::InvalidField {
                field: "region",
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Five-character locale tag such as `en_US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Build a locale tag, rejecting anything that is not exactly 5 bytes.
    pub fn new(value: &str) -> Result<Self, HookError> {
        if value.len() != 5 {
            return Err(HookError::InvalidField {
                field: "locale",
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language part of the tag (`en` for `en_US`).
    pub fn language(&self) -> &str {
        self.0.split(['_', '-']).next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical output format for the `format` action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `+16172531000`
    #[default]
    E164,
    /// `+1 617-253-1000`
    International,
    /// `(617) 253-1000`
    National,
    /// `tel:+1-617-253-1000`
    Rfc3966,
}

impl OutputFormat {
    const NAMES: [(&'static str, OutputFormat); 4] = [
        ("E164", OutputFormat::E164),
        ("INTERNATIONAL", OutputFormat::International),
        ("NATIONAL", OutputFormat::National),
        ("RFC3966", OutputFormat::Rfc3966),
    ];

    /// Match a format name with the prefix rule, `None` when nothing matches.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(label, _)| prefix_matches(name, label))
            .map(|(_, format)| *format)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::E164 => "E164",
            OutputFormat::International => "INTERNATIONAL",
            OutputFormat::National => "NATIONAL",
            OutputFormat::Rfc3966 => "RFC3966",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully populated configuration consumed by every action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Region used to interpret numbers written without a country code
    pub default_region: RegionCode,

    /// Format used by the `format` action
    pub output_format: OutputFormat,

    /// Locale used by the description lookup
    pub locale: Locale,

    /// Region the out-of-country formatting dials from
    pub calling_from_region: RegionCode,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            default_region: RegionCode("US".to_string()),
            output_format: OutputFormat::E164,
            locale: Locale("en_US".to_string()),
            calling_from_region: RegionCode("US".to_string()),
        }
    }
}

/// Direction of a call leg as reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Inbound,
    Outbound,
}

/// Direction filter carried by a hook rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectionFilter {
    #[default]
    Any,
    Inbound,
    Outbound,
}

impl DirectionFilter {
    /// Parse a configured direction; anything unrecognised means `Any`.
    pub fn from_name(name: &str) -> Self {
        if prefix_matches(name, "inbound") {
            DirectionFilter::Inbound
        } else if prefix_matches(name, "outbound") {
            DirectionFilter::Outbound
        } else {
            DirectionFilter::Any
        }
    }

    pub fn covers(&self, direction: CallDirection) -> bool {
        match self {
            DirectionFilter::Any => true,
            DirectionFilter::Inbound => direction == CallDirection::Inbound,
            DirectionFilter::Outbound => direction == CallDirection::Outbound,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionFilter::Any => "all",
            DirectionFilter::Inbound => "inbound",
            DirectionFilter::Outbound => "outbound",
        }
    }
}

/// Which call legs a hook rule inspects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    Caller,
    Destination,
}

impl Scope {
    /// Parse a configured scope; anything unrecognised means `All`.
    pub fn from_name(name: &str) -> Self {
        if prefix_matches(name, Tag::Caller.as_str()) {
            Scope::Caller
        } else if prefix_matches(name, Tag::Destination.as_str()) {
            Scope::Destination
        } else {
            Scope::All
        }
    }

    pub fn includes_caller(&self) -> bool {
        matches!(self, Scope::All | Scope::Caller)
    }

    pub fn includes_destination(&self) -> bool {
        matches!(self, Scope::All | Scope::Destination)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::Caller => "caller",
            Scope::Destination => "destination",
        }
    }
}

/// Label identifying which number a set of results describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Number,
    Caller,
    Destination,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Number => "number",
            Tag::Caller => "caller",
            Tag::Destination => "destination",
        }
    }

    /// Variable name for a result under this tag.
    pub fn variable(&self, suffix: &str) -> String {
        format!("phonenumber_{}_{}", self.as_str(), suffix)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number categories reported by `get_number_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberType {
    FixedLine,
    FixedLineOrMobile,
    Mobile,
    Pager,
    PersonalNumber,
    PremiumRate,
    SharedCost,
    TollFree,
    Uan,
    Unknown,
    Voicemail,
    Voip,
}

impl NumberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberType::FixedLine => "FIXED_LINE",
            NumberType::FixedLineOrMobile => "FIXED_LINE_OR_MOBILE",
            NumberType::Mobile => "MOBILE",
            NumberType::Pager => "PAGER",
            NumberType::PersonalNumber => "PERSONAL_NUMBER",
            NumberType::PremiumRate => "PREMIUM_RATE",
            NumberType::SharedCost => "SHARED_COST",
            NumberType::TollFree => "TOLL_FREE",
            NumberType::Uan => "UAN",
            NumberType::Unknown => "UNKNOWN",
            NumberType::Voicemail => "VOICEMAIL",
            NumberType::Voip => "VOIP",
        }
    }
}

/// Outcome of a length-based possibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Possibility {
    IsPossible,
    IsPossibleLocalOnly,
    InvalidCountryCode,
    TooShort,
    InvalidLength,
    TooLong,
}

impl Possibility {
    /// Label reported by `is_possible_number_with_reason`.
    ///
    /// Only four reasons have their own label. A length that is possible for
    /// local dialling counts as possible; the rest are reported as `UNKNOWN`.
    pub fn label(&self) -> &'static str {
        match self {
            Possibility::IsPossible | Possibility::IsPossibleLocalOnly => "IS_POSSIBLE",
            Possibility::InvalidCountryCode => "INVALID_COUNTRY_CODE",
            Possibility::TooShort => "TOO_SHORT",
            Possibility::TooLong => "TOO_LONG",
            Possibility::InvalidLength => "UNKNOWN",
        }
    }
}
