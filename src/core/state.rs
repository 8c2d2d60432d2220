//! Unit states and the state registry.
//!
//! The state set is closed: a redundant unit is always in exactly one of
//! the four states below. States are plain values; all behavior attached
//! to them here is pure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Superstate a unit state belongs to.
///
/// The machine is hierarchical: `Standby` and `Active` decompose the
/// in-service superstate, `Suspect` and `Failed` the out-of-service one.
/// Substates of the same superstate share transition protocols (the
/// switchover action sequence is defined once for both in-service
/// states).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Superstate {
    /// Unit is carrying load or backing up its mate.
    Inservice,
    /// Unit is under diagnosis or confirmed faulty.
    OutOfService,
}

/// State of one redundant unit.
///
/// # Example
///
/// ```rust
/// use failover::core::UnitState;
///
/// assert_eq!(UnitState::Standby.name(), "standby");
/// assert_eq!(UnitState::from_name("active"), Some(UnitState::Active));
/// assert_eq!(UnitState::from_name("missing"), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UnitState {
    /// In service, ready to take over from the active mate.
    Standby,
    /// In service and carrying the load.
    Active,
    /// Suspected faulty, diagnostics pending.
    Suspect,
    /// Diagnostics confirmed the fault.
    Failed,
}

impl UnitState {
    /// Registry name used for transition-target lookups.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standby => "standby",
            Self::Active => "active",
            Self::Suspect => "suspect",
            Self::Failed => "failed",
        }
    }

    /// Look a state up in the registry. Returns `None` for names no
    /// state is registered under.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standby" => Some(Self::Standby),
            "active" => Some(Self::Active),
            "suspect" => Some(Self::Suspect),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// The superstate this state decomposes.
    pub fn superstate(&self) -> Superstate {
        match self {
            Self::Standby | Self::Active => Superstate::Inservice,
            Self::Suspect | Self::Failed => Superstate::OutOfService,
        }
    }

    /// Check if the unit is in service.
    pub fn is_inservice(&self) -> bool {
        self.superstate() == Superstate::Inservice
    }
}

impl fmt::Display for UnitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [UnitState; 4] = [
        UnitState::Standby,
        UnitState::Active,
        UnitState::Suspect,
        UnitState::Failed,
    ];

    #[test]
    fn name_round_trips_through_registry() {
        for state in ALL {
            assert_eq!(UnitState::from_name(state.name()), Some(state));
        }
    }

    #[test]
    fn unknown_names_are_not_registered() {
        assert_eq!(UnitState::from_name("missing"), None);
        assert_eq!(UnitState::from_name(""), None);
        assert_eq!(UnitState::from_name("Standby"), None);
    }

    #[test]
    fn superstate_groups_inservice_states() {
        assert_eq!(UnitState::Standby.superstate(), Superstate::Inservice);
        assert_eq!(UnitState::Active.superstate(), Superstate::Inservice);
        assert_eq!(UnitState::Suspect.superstate(), Superstate::OutOfService);
        assert_eq!(UnitState::Failed.superstate(), Superstate::OutOfService);
    }

    #[test]
    fn is_inservice_matches_superstate() {
        assert!(UnitState::Standby.is_inservice());
        assert!(UnitState::Active.is_inservice());
        assert!(!UnitState::Suspect.is_inservice());
        assert!(!UnitState::Failed.is_inservice());
    }

    #[test]
    fn display_uses_registry_name() {
        assert_eq!(UnitState::Suspect.to_string(), "suspect");
    }

    #[test]
    fn state_serializes_correctly() {
        for state in ALL {
            let json = serde_json::to_string(&state).unwrap();
            let deserialized: UnitState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, deserialized);
        }
    }
}
