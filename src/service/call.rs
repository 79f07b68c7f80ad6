//! Call-platform view of an active call.

use serde::Deserialize;

use crate::domain::{CallDirection, HookError};

/// Caller profile of the call a trigger runs for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallProfile {
    /// Dialplan context the call is in
    pub context: String,

    pub direction: CallDirection,

    /// Originating caller id number
    #[serde(default)]
    pub caller_id_number: String,

    /// Dialled number
    #[serde(default)]
    pub destination_number: String,
}

/// Call event as delivered to the `session` command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallEvent {
    #[serde(flatten)]
    pub profile: CallProfile,

    /// Call instruction arguments; absent means call initialization
    #[serde(default)]
    pub data: Option<String>,
}

impl CallEvent {
    pub fn from_json(input: &str) -> Result<Self, HookError> {
        Ok(serde_json::from_str(input)?)
    }
}
