//! phonenumber-hooks: phone number inspection for call-platform hooks
//!
//! Runs named number inspection actions (formatting, classification,
//! validation, normalization) against a phone number and reports the results
//! either as lines on a response stream or as variables on a call. Actions are
//! triggered by administrative commands, by call instructions, or by hooks
//! declared in the configuration file and fired at call initialization.

pub mod config;
pub mod domain;
pub mod numbering;
pub mod service;

pub use config::{Config, ConfigService, Settings};
pub use domain::{Action, ActionList, Configuration, HookError};
pub use numbering::{CountryNameGeocoder, Geocoder, LibPhonenumber, NullGeocoder, NumberingPlan};
pub use service::{CallEvent, CallProfile, Dispatcher};
