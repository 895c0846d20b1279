//! State machine trait for phase enums.
//!
//! Gives every lifecycle enum in the crate the same vocabulary for checking
//! and performing transitions, so controllers never assign a phase directly.

use super::ValidationError;

/// Trait for enums that represent a finite state machine.
///
/// Implementors list their legal edges; validated transitions and terminal
/// detection come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for FlowPhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Gating, Asking) | (Asking, Reviewing))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Gating => vec![Asking],
///             Asking => vec![Reviewing],
///             Reviewing => vec![],
///         }
///     }
/// }
///
/// let next = FlowPhase::Gating.transition_to(FlowPhase::Asking)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is a legal edge.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every state reachable in one step from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the transition, rejecting edges the machine does not define.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if the current state has no outgoing edges.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
