//! State machine trait for lifecycle status enums.

use super::ValidationError;

/// Lifecycle status with an explicit transition table.
///
/// Implementors list their legal transitions; `transition_to` turns an
/// illegal move into a `ValidationError` instead of a silent overwrite.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is legal.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every legal target from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Validates and performs the transition.
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

    /// True when no outgoing transition exists.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
