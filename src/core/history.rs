//! State transition history tracking.
//!
//! Immutable record of the transitions a unit went through, so callers
//! can audit the path after the fact. `record` returns a new history
//! instead of mutating in place.

use super::message::Message;
use super::state::UnitState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: UnitState,
    /// The state being transitioned to
    pub to: UnitState,
    /// The message that triggered the transition
    pub message: Message,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use failover::core::{Message, TransitionHistory, TransitionRecord, UnitState};
/// use chrono::Utc;
///
/// let history = TransitionHistory::new();
/// let history = history.record(TransitionRecord {
///     from: UnitState::Standby,
///     to: UnitState::Active,
///     message: Message::Switchover,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), [UnitState::Standby, UnitState::Active]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionHistory {
    transitions: Vec<TransitionRecord>,
}

impl TransitionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history. The original is
    /// left unchanged.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed: the initial state, then the
    /// `to` state of each transition.
    pub fn path(&self) -> Vec<UnitState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        for transition in &self.transitions {
            path.push(transition.to);
        }
        path
    }

    /// Total duration from first to last transition. `None` if nothing
    /// was recorded yet.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all recorded transitions in order.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }
}
