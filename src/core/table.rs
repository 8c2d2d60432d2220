//! The transition table.
//!
//! Every legal `(state, message)` pair is enumerated here together with
//! the ordered action protocol that must complete before the transition
//! is requested. A pair absent from the table is an unsupported
//! transition, never a silent no-op. The table is the single source of
//! truth for legality, targets and protocols; the match is exhaustive
//! over both closed sets.

use super::message::Message;
use super::state::UnitState;

/// One shared context action invoked while executing a transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    PerformSwitchover,
    CheckMateStatus,
    SendSwitchoverResponse,
    SendDiagnosticsRequest,
    RaiseAlarm,
    ClearAlarm,
    SendDiagnosticsPassReport,
    SendDiagnosticsFailureReport,
    SendOperatorInserviceResponse,
    AbortDiagnostics,
}

/// One row of the transition table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rule {
    /// Actions to run, in order, before the transition is requested.
    pub actions: &'static [Action],
    /// State the machine moves to once every action has succeeded.
    pub target: UnitState,
}

/// Switchover protocol shared by both in-service substates.
const SWITCHOVER_PROTOCOL: &[Action] = &[
    Action::PerformSwitchover,
    Action::CheckMateStatus,
    Action::SendSwitchoverResponse,
];

/// Look up the rule for a `(state, message)` pair.
///
/// A self-targeting rule (Suspect re-triggered while already under
/// diagnosis) runs its actions and leaves the state where it is.
pub fn rule(state: UnitState, message: Message) -> Option<Rule> {
    let rule = match (state, message) {
        (UnitState::Standby, Message::Switchover) => Rule {
            actions: SWITCHOVER_PROTOCOL,
            target: UnitState::Active,
        },
        (UnitState::Standby, Message::FaultTrigger) => Rule {
            actions: &[],
            target: UnitState::Suspect,
        },
        (UnitState::Active, Message::Switchover) => Rule {
            actions: SWITCHOVER_PROTOCOL,
            target: UnitState::Standby,
        },
        (UnitState::Active, Message::FaultTrigger) => Rule {
            actions: &[Action::SendDiagnosticsRequest, Action::RaiseAlarm],
            target: UnitState::Suspect,
        },
        (UnitState::Suspect, Message::DiagnosticsPassed) => Rule {
            actions: &[Action::SendDiagnosticsPassReport, Action::ClearAlarm],
            target: UnitState::Standby,
        },
        (UnitState::Suspect, Message::DiagnosticsFailed) => Rule {
            actions: &[Action::SendDiagnosticsFailureReport],
            target: UnitState::Failed,
        },
        (UnitState::Suspect, Message::FaultTrigger) => Rule {
            actions: &[Action::SendDiagnosticsRequest],
            target: UnitState::Suspect,
        },
        (UnitState::Failed, Message::OperatorInservice) => Rule {
            actions: &[
                Action::AbortDiagnostics,
                Action::SendOperatorInserviceResponse,
            ],
            target: UnitState::Suspect,
        },
        _ => return None,
    };
    Some(rule)
}

/// Pure guard: whether `message` is legal in `state`.
pub fn permits(state: UnitState, message: Message) -> bool {
    rule(state, message).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [UnitState; 4] = [
        UnitState::Standby,
        UnitState::Active,
        UnitState::Suspect,
        UnitState::Failed,
    ];

    const MESSAGES: [Message; 5] = [
        Message::Switchover,
        Message::FaultTrigger,
        Message::DiagnosticsPassed,
        Message::DiagnosticsFailed,
        Message::OperatorInservice,
    ];

    #[test]
    fn standby_accepts_switchover_and_fault_trigger_only() {
        assert!(permits(UnitState::Standby, Message::Switchover));
        assert!(permits(UnitState::Standby, Message::FaultTrigger));
        assert!(!permits(UnitState::Standby, Message::DiagnosticsPassed));
        assert!(!permits(UnitState::Standby, Message::DiagnosticsFailed));
        assert!(!permits(UnitState::Standby, Message::OperatorInservice));
    }

    #[test]
    fn standby_switchover_runs_full_protocol_then_activates() {
        let rule = rule(UnitState::Standby, Message::Switchover).unwrap();
        assert_eq!(
            rule.actions,
            [
                Action::PerformSwitchover,
                Action::CheckMateStatus,
                Action::SendSwitchoverResponse,
            ]
        );
        assert_eq!(rule.target, UnitState::Active);
    }

    #[test]
    fn standby_fault_trigger_is_a_bare_transition() {
        let rule = rule(UnitState::Standby, Message::FaultTrigger).unwrap();
        assert!(rule.actions.is_empty());
        assert_eq!(rule.target, UnitState::Suspect);
    }

    #[test]
    fn inservice_substates_share_the_switchover_protocol() {
        let from_standby = rule(UnitState::Standby, Message::Switchover).unwrap();
        let from_active = rule(UnitState::Active, Message::Switchover).unwrap();
        assert_eq!(from_standby.actions, from_active.actions);
        assert_eq!(from_active.target, UnitState::Standby);
    }

    #[test]
    fn active_fault_trigger_requests_diagnostics_and_raises_alarm() {
        let rule = rule(UnitState::Active, Message::FaultTrigger).unwrap();
        assert_eq!(
            rule.actions,
            [Action::SendDiagnosticsRequest, Action::RaiseAlarm]
        );
        assert_eq!(rule.target, UnitState::Suspect);
    }

    #[test]
    fn suspect_fault_trigger_is_the_only_self_target() {
        for state in STATES {
            for message in MESSAGES {
                if let Some(rule) = rule(state, message) {
                    let self_target = rule.target == state;
                    let expected =
                        state == UnitState::Suspect && message == Message::FaultTrigger;
                    assert_eq!(self_target, expected, "{state} + {message}");
                }
            }
        }
    }

    #[test]
    fn failed_recovers_only_through_operator_inservice() {
        for message in MESSAGES {
            assert_eq!(
                permits(UnitState::Failed, message),
                message == Message::OperatorInservice
            );
        }
        let rule = rule(UnitState::Failed, Message::OperatorInservice).unwrap();
        assert_eq!(rule.target, UnitState::Suspect);
    }

    #[test]
    fn every_target_is_a_registered_state() {
        for state in STATES {
            for message in MESSAGES {
                if let Some(rule) = rule(state, message) {
                    assert_eq!(
                        UnitState::from_name(rule.target.name()),
                        Some(rule.target)
                    );
                }
            }
        }
    }

    #[test]
    fn permits_agrees_with_rule() {
        for state in STATES {
            for message in MESSAGES {
                assert_eq!(permits(state, message), rule(state, message).is_some());
            }
        }
    }
}
