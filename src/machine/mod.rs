//! The imperative shell around the pure core: the machine context and
//! the capability its side-effecting actions run through.
//!
//! The context owns exactly one live state at all times and replaces it
//! wholesale on every legal transition. Side effects are confined to
//! the injected [`UnitActions`] implementation, so tests can swap in a
//! recording or failing double.

mod actions;
mod hsm;

pub use actions::{ActionError, DefaultActions, UnitActions};
pub use hsm::HierarchicalStateMachine;
