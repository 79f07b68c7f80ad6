//! Domain layer containing core business logic.
//!
//! This module contains:
//! - Configuration, direction, scope and result types
//! - Action registry and action list parsing
//! - Layered configuration resolution
//! - Hook rule matching
//! - The action pipeline and its result sinks
//! - Logger with rotation

mod actions;
mod error;
mod hooks;
pub mod logger;
mod pipeline;
mod resolver;
mod sink;
mod types;

pub use actions::{match_action, Action, ActionList, MAX_ACTIONS};
pub use error::HookError;
pub use hooks::{HookRule, HookRun, HookSet};
pub use pipeline::{ActionPipeline, Request};
pub use resolver::{ConfigResolver, Param, MAX_OVERRIDES};
pub use sink::{ResponseStream, ResultSink, VariableStore};
pub use types::{
    prefix_matches, CallDirection, Configuration, DirectionFilter, Locale, NumberType,
    OutputFormat, Possibility, RegionCode, Scope, Tag,
};
