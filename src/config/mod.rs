//! Configuration management module.
//!
//! Handles TOML configuration file loading, validation, default generation,
//! and building the runtime settings.

mod service;
mod settings;
mod types;
mod validation;

pub use types::{Config, HookSection, SettingsSection};

// Re-export for use in other modules
pub use service::ConfigService;
pub use settings::Settings;
pub use validation::validate;
