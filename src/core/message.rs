//! Messages accepted by the state machine.
//!
//! The message set is closed. `from_name` is the recognized-set check
//! the context performs before dispatching: a name it cannot resolve is
//! an unsupported message type, which is distinct from a recognized
//! message that happens to be illegal in the current state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Event delivered to the state machine.
///
/// # Example
///
/// ```rust
/// use failover::core::Message;
///
/// assert_eq!(Message::from_name("fault trigger"), Some(Message::FaultTrigger));
/// assert_eq!(Message::FaultTrigger.name(), "fault trigger");
/// assert_eq!(Message::from_name("trigger"), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Message {
    /// Transfer the active role between the unit and its mate.
    Switchover,
    /// A fault was detected on the unit.
    FaultTrigger,
    /// Diagnostics completed without findings.
    DiagnosticsPassed,
    /// Diagnostics confirmed a fault.
    DiagnosticsFailed,
    /// Operator requests the unit back in service.
    OperatorInservice,
}

impl Message {
    /// Wire spelling of the message.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Switchover => "switchover",
            Self::FaultTrigger => "fault trigger",
            Self::DiagnosticsPassed => "diagnostics passed",
            Self::DiagnosticsFailed => "diagnostics failed",
            Self::OperatorInservice => "operator inservice",
        }
    }

    /// Resolve a message by its wire spelling. Returns `None` for names
    /// outside the recognized set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "switchover" => Some(Self::Switchover),
            "fault trigger" => Some(Self::FaultTrigger),
            "diagnostics passed" => Some(Self::DiagnosticsPassed),
            "diagnostics failed" => Some(Self::DiagnosticsFailed),
            "operator inservice" => Some(Self::OperatorInservice),
            _ => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
