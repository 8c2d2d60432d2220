//! Failover: a hierarchical state machine for redundant-unit control.
//!
//! The crate models the switchover and fault-handling behavior of one
//! unit in a redundant pair. The core is pure: closed state and message
//! sets, a fully-enumerated transition table and immutable history. The
//! imperative shell is a context that owns the current state and runs
//! each transition's action protocol through an injectable capability.
//!
//! # Core Concepts
//!
//! - **States**: `Standby`, `Active`, `Suspect`, `Failed`, grouped into
//!   in-service and out-of-service superstates
//! - **Messages**: a closed set of named events delivered by wire
//!   spelling, e.g. `"switchover"` or `"fault trigger"`
//! - **Actions**: ordered side-effecting protocols that must complete
//!   before a transition is taken, substitutable in tests
//! - **History**: immutable record of the transitions a unit took
//!
//! A small publish-subscribe collaborator lives in [`pubsub`].
//!
//! # Example
//!
//! ```rust
//! use failover::{HierarchicalStateMachine, HsmError, UnitState};
//!
//! let mut hsm = HierarchicalStateMachine::new();
//! assert_eq!(hsm.current_state(), UnitState::Standby);
//!
//! hsm.on_message("switchover")?;
//! assert_eq!(hsm.current_state(), UnitState::Active);
//!
//! // A recognized message that is illegal in the current state leaves
//! // the machine untouched.
//! assert!(matches!(
//!     hsm.on_message("diagnostics passed"),
//!     Err(HsmError::UnsupportedTransition { .. })
//! ));
//! assert_eq!(hsm.current_state(), UnitState::Active);
//! # Ok::<(), failover::HsmError>(())
//! ```

pub mod core;
pub mod error;
pub mod machine;
pub mod pubsub;

// Re-export commonly used types
pub use core::{Message, Superstate, TransitionHistory, TransitionRecord, UnitState};
pub use error::HsmError;
pub use machine::{ActionError, DefaultActions, HierarchicalStateMachine, UnitActions};
