//! Action registry.

mod action;
mod registry;

pub use action::Action;
pub use registry::{match_action, ActionList, MAX_ACTIONS};
