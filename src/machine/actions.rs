//! Injectable capability for the shared context actions.
//!
//! The actions are the seams where a real system would coordinate with
//! hardware and the mate unit. They are exposed through a trait so the
//! machine can be constructed with the production implementation or,
//! in tests, with a recording or failing double.

use thiserror::Error;

/// Failure reported by a shared action.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("Action '{action}' failed: {reason}")]
pub struct ActionError {
    /// Name of the failing action.
    pub action: &'static str,
    /// Failure detail reported by the hardware or peer layer.
    pub reason: String,
}

impl ActionError {
    /// Create an action failure.
    pub fn new(action: &'static str, reason: impl Into<String>) -> Self {
        Self {
            action,
            reason: reason.into(),
        }
    }
}

/// Shared side-effecting actions invoked by transition protocols.
///
/// Each method performs one action and returns its descriptive result.
/// A failing action aborts the transition protocol that invoked it; the
/// machine stays in its current state.
pub trait UnitActions {
    /// Transfer the active role to the mate unit.
    fn perform_switchover(&mut self) -> Result<&'static str, ActionError>;

    /// Check health and liveness of the mate unit.
    fn check_mate_status(&mut self) -> Result<&'static str, ActionError>;

    /// Acknowledge a completed switchover to the requester.
    fn send_switchover_response(&mut self) -> Result<&'static str, ActionError>;

    /// Ask the diagnostics subsystem to examine the unit.
    fn send_diagnostics_request(&mut self) -> Result<&'static str, ActionError>;

    /// Raise the unit fault alarm.
    fn raise_alarm(&mut self) -> Result<&'static str, ActionError>;

    /// Clear the unit fault alarm.
    fn clear_alarm(&mut self) -> Result<&'static str, ActionError>;

    /// Report that diagnostics completed without findings.
    fn send_diagnostics_pass_report(&mut self) -> Result<&'static str, ActionError>;

    /// Report that diagnostics confirmed a fault.
    fn send_diagnostics_failure_report(&mut self) -> Result<&'static str, ActionError>;

    /// Acknowledge an operator request to return the unit to service.
    fn send_operator_inservice_response(&mut self) -> Result<&'static str, ActionError>;

    /// Cancel diagnostics still in flight.
    fn abort_diagnostics(&mut self) -> Result<&'static str, ActionError>;
}

/// Reference implementation of [`UnitActions`].
///
/// Stands in for the hardware/peer coordination layer: every action
/// succeeds and returns a fixed descriptive result.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DefaultActions;

impl UnitActions for DefaultActions {
    fn perform_switchover(&mut self) -> Result<&'static str, ActionError> {
        Ok("perform switchover")
    }

    fn check_mate_status(&mut self) -> Result<&'static str, ActionError> {
        Ok("check mate status")
    }

    fn send_switchover_response(&mut self) -> Result<&'static str, ActionError> {
        Ok("send switchover response")
    }

    fn send_diagnostics_request(&mut self) -> Result<&'static str, ActionError> {
        Ok("send diagnostic request")
    }

    fn raise_alarm(&mut self) -> Result<&'static str, ActionError> {
        Ok("raise alarm")
    }

    fn clear_alarm(&mut self) -> Result<&'static str, ActionError> {
        Ok("clear alarm")
    }

    fn send_diagnostics_pass_report(&mut self) -> Result<&'static str, ActionError> {
        Ok("send diagnostics pass report")
    }

    fn send_diagnostics_failure_report(&mut self) -> Result<&'static str, ActionError> {
        Ok("send diagnostics failure report")
    }

    fn send_operator_inservice_response(&mut self) -> Result<&'static str, ActionError> {
        Ok("send operator inservice response")
    }

    fn abort_diagnostics(&mut self) -> Result<&'static str, ActionError> {
        Ok("abort diagnostics")
    }
}
