//! Session store port.
//!
//! Each open session owns exactly one engine. The store never shares an
//! engine between sessions and performs no locking of its own; callers that
//! need concurrent access wrap the whole store.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::wizard::WizardEngine;

/// Port for keeping wizard engines keyed by session.
pub trait WizardSessionStore: Send {
    /// Adds an engine under its own session id.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the store is full or the id is already present
    fn insert(&mut self, engine: WizardEngine) -> Result<(), DomainError>;

    /// Returns the engine of a session.
    fn get(&self, session_id: &SessionId) -> Option<&WizardEngine>;

    /// Returns the engine of a session for mutation.
    fn get_mut(&mut self, session_id: &SessionId) -> Option<&mut WizardEngine>;

    /// Removes and returns the engine of a session.
    fn remove(&mut self, session_id: &SessionId) -> Option<WizardEngine>;

    /// Number of open sessions.
    fn len(&self) -> usize;

    /// Returns true when no session is open.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
