//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the life balance domain.

mod errors;
mod ids;
mod scenario;
mod score;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AreaId, SessionId};
pub use scenario::Scenario;
pub use score::Score;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
