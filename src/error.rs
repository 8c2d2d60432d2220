//! Error taxonomy for the state machine.

use crate::core::{Message, UnitState};
use crate::machine::ActionError;
use thiserror::Error;

/// Errors surfaced by the state machine.
///
/// Every variant is raised synchronously and is a caller or
/// configuration defect, not a transient fault: nothing here is worth
/// retrying. On every error path the machine guarantees the current
/// state is unchanged and no further actions ran after the failure
/// point.
#[derive(Debug, Error)]
pub enum HsmError {
    /// Requested transition target is not in the state registry.
    #[error("Unsupported state '{name}': not in the state registry")]
    UnsupportedState { name: String },

    /// Message name is not in the recognized message set at all.
    #[error("Unsupported message type '{name}'")]
    UnsupportedMessageType { name: String },

    /// Recognized message that is not legal for the current state.
    #[error("Unsupported transition: '{message}' while {state}")]
    UnsupportedTransition { state: UnitState, message: Message },

    /// A shared action failed before the transition was requested.
    #[error(transparent)]
    ActionFailed(#[from] ActionError),
}
