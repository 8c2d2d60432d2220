//! The hierarchical state machine context.

use crate::core::table::{self, Action};
use crate::core::{Message, TransitionHistory, TransitionRecord, UnitState};
use crate::error::HsmError;
use crate::machine::actions::{ActionError, DefaultActions, UnitActions};
use chrono::Utc;

/// Context owning the current state, the shared actions and the
/// transition history.
///
/// The machine is synchronous and single-threaded: a call to
/// [`on_message`](Self::on_message) runs to completion before the next
/// one is accepted, and a failed call leaves the current state and the
/// history exactly as they were. Callers delivering messages from more
/// than one thread must add their own mutual exclusion around the
/// machine.
///
/// # Example
///
/// ```rust
/// use failover::{HierarchicalStateMachine, UnitState};
///
/// let mut hsm = HierarchicalStateMachine::new();
/// assert_eq!(hsm.current_state(), UnitState::Standby);
///
/// hsm.on_message("switchover")?;
/// assert_eq!(hsm.current_state(), UnitState::Active);
/// # Ok::<(), failover::HsmError>(())
/// ```
pub struct HierarchicalStateMachine<A: UnitActions = DefaultActions> {
    current: UnitState,
    actions: A,
    history: TransitionHistory,
}

impl HierarchicalStateMachine<DefaultActions> {
    /// Create a machine in `Standby` with the default actions.
    pub fn new() -> Self {
        Self::with_actions(DefaultActions)
    }
}

impl Default for HierarchicalStateMachine<DefaultActions> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: UnitActions> HierarchicalStateMachine<A> {
    /// Create a machine in `Standby` with a caller-supplied action
    /// capability.
    pub fn with_actions(actions: A) -> Self {
        Self {
            current: UnitState::Standby,
            actions,
            history: TransitionHistory::new(),
        }
    }

    /// The state the machine currently resides in.
    pub fn current_state(&self) -> UnitState {
        self.current
    }

    /// History of the transitions taken so far.
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// The injected action capability.
    pub fn actions(&self) -> &A {
        &self.actions
    }

    /// Mutable access to the injected action capability.
    pub fn actions_mut(&mut self) -> &mut A {
        &mut self.actions
    }

    /// Pure pre-flight check: whether `message` is legal in the current
    /// state.
    pub fn can_handle(&self, message: Message) -> bool {
        table::permits(self.current, message)
    }

    /// Deliver a message by its wire spelling.
    ///
    /// Fails with [`HsmError::UnsupportedMessageType`] when the name is
    /// outside the recognized set, otherwise behaves like
    /// [`dispatch`](Self::dispatch).
    pub fn on_message(&mut self, message: &str) -> Result<(), HsmError> {
        let message =
            Message::from_name(message).ok_or_else(|| HsmError::UnsupportedMessageType {
                name: message.to_string(),
            })?;
        self.dispatch(message)
    }

    /// Deliver an already-resolved message.
    ///
    /// Looks up the transition rule for the current state, runs the
    /// rule's actions in order, then requests the transition. Nothing
    /// is mutated before the whole protocol has succeeded: an illegal
    /// message or a failing action leaves the machine untouched.
    pub fn dispatch(&mut self, message: Message) -> Result<(), HsmError> {
        let from = self.current;
        let rule = table::rule(from, message).ok_or(HsmError::UnsupportedTransition {
            state: from,
            message,
        })?;

        for action in rule.actions {
            self.run_action(*action)?;
        }
        self.next_state(rule.target.name())?;

        if self.current != from {
            self.history = self.history.record(TransitionRecord {
                from,
                to: self.current,
                message,
                timestamp: Utc::now(),
            });
        }
        Ok(())
    }

    /// Replace the current state with the registry entry for `name`.
    ///
    /// Fails with [`HsmError::UnsupportedState`] when no state is
    /// registered under `name`. Used by transition protocols; exposed
    /// so callers can verify the lookup independently.
    pub fn next_state(&mut self, name: &str) -> Result<(), HsmError> {
        let state = UnitState::from_name(name).ok_or_else(|| HsmError::UnsupportedState {
            name: name.to_string(),
        })?;
        self.current = state;
        Ok(())
    }

    fn run_action(&mut self, action: Action) -> Result<&'static str, ActionError> {
        match action {
            Action::PerformSwitchover => self.perform_switchover(),
            Action::CheckMateStatus => self.check_mate_status(),
            Action::SendSwitchoverResponse => self.send_switchover_response(),
            Action::SendDiagnosticsRequest => self.send_diagnostics_request(),
            Action::RaiseAlarm => self.raise_alarm(),
            Action::ClearAlarm => self.clear_alarm(),
            Action::SendDiagnosticsPassReport => self.send_diagnostics_pass_report(),
            Action::SendDiagnosticsFailureReport => self.send_diagnostics_failure_report(),
            Action::SendOperatorInserviceResponse => self.send_operator_inservice_response(),
            Action::AbortDiagnostics => self.abort_diagnostics(),
        }
    }

    // Named action operations, each individually invocable and
    // delegating to the injected capability.

    /// Transfer the active role to the mate unit.
    pub fn perform_switchover(&mut self) -> Result<&'static str, ActionError> {
        self.actions.perform_switchover()
    }

    /// Check health and liveness of the mate unit.
    pub fn check_mate_status(&mut self) -> Result<&'static str, ActionError> {
        self.actions.check_mate_status()
    }

    /// Acknowledge a completed switchover to the requester.
    pub fn send_switchover_response(&mut self) -> Result<&'static str, ActionError> {
        self.actions.send_switchover_response()
    }

    /// Ask the diagnostics subsystem to examine the unit.
    pub fn send_diagnostics_request(&mut self) -> Result<&'static str, ActionError> {
        self.actions.send_diagnostics_request()
    }

    /// Raise the unit fault alarm.
    pub fn raise_alarm(&mut self) -> Result<&'static str, ActionError> {
        self.actions.raise_alarm()
    }

    /// Clear the unit fault alarm.
    pub fn clear_alarm(&mut self) -> Result<&'static str, ActionError> {
        self.actions.clear_alarm()
    }

    /// Report that diagnostics completed without findings.
    pub fn send_diagnostics_pass_report(&mut self) -> Result<&'static str, ActionError> {
        self.actions.send_diagnostics_pass_report()
    }

    /// Report that diagnostics confirmed a fault.
    pub fn send_diagnostics_failure_report(&mut self) -> Result<&'static str, ActionError> {
        self.actions.send_diagnostics_failure_report()
    }

    /// Acknowledge an operator request to return the unit to service.
    pub fn send_operator_inservice_response(&mut self) -> Result<&'static str, ActionError> {
        self.actions.send_operator_inservice_response()
    }

    /// Cancel diagnostics still in flight.
    pub fn abort_diagnostics(&mut self) -> Result<&'static str, ActionError> {
        self.actions.abort_diagnostics()
    }
}
