//! State machine trait for step enums.
//!
//! Provides a consistent interface for validating and performing transitions
//! across enums that model a lifecycle (the wizard step sequence being the
//! main one).

use super::DomainError;

/// Trait for enums that represent state machines.
///
/// Implementors define the valid edges and get a validated `transition_to`
/// for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for WizardStep {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Welcome => vec![Baseline, Welcome],
///             // ... etc
///         }
///     }
/// }
///
/// let next = WizardStep::Welcome.transition_to(WizardStep::Baseline)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning `InvalidTransition` if the
    /// edge does not exist.
    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::invalid_transition(format!(
                "Cannot transition from {:?} to {:?}",
                self, target
            )))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Lamp {
        Off,
        Warming,
        On,
        Broken,
    }

    impl StateMachine for Lamp {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Lamp::*;
            match self {
                Off => vec![Warming],
                Warming => vec![On, Broken],
                On => vec![Off, Broken],
                Broken => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_edge() {
        assert_eq!(Lamp::Off.transition_to(Lamp::Warming), Ok(Lamp::Warming));
    }

    #[test]
    fn transition_to_fails_with_invalid_transition_code() {
        let err = Lamp::Off.transition_to(Lamp::On).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTransition);
        assert!(err.message.contains("Off"));
    }

    #[test]
    fn is_terminal_only_for_states_without_edges() {
        assert!(Lamp::Broken.is_terminal());
        assert!(!Lamp::Off.is_terminal());
        assert!(!Lamp::On.is_terminal());
    }
}
