//! Error types for phonenumber-hooks.

use thiserror::Error;

/// Main error type for phonenumber-hooks.
#[derive(Debug, Error)]
pub enum HookError {
    /// Trigger input could not be turned into a runnable request
    #[error("Invalid syntax, correct usage: {0}")]
    Usage(&'static str),

    /// A configuration value failed its length or format constraint
    #[error("Invalid {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
