//! In-memory session store.
//!
//! Backed by a `HashMap` with a fixed capacity taken from
//! `WizardConfig::max_sessions`.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::wizard::WizardEngine;
use crate::ports::WizardSessionStore;

/// Capacity-limited map of open wizard sessions.
#[derive(Debug)]
pub struct InMemoryWizardSessionStore {
    sessions: HashMap<SessionId, WizardEngine>,
    capacity: usize,
}

impl InMemoryWizardSessionStore {
    /// Creates an empty store holding at most `capacity` sessions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            capacity,
        }
    }

    /// Returns the maximum number of sessions.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl WizardSessionStore for InMemoryWizardSessionStore {
    fn insert(&mut self, engine: WizardEngine) -> Result<(), DomainError> {
        let session_id = engine.session_id();
        if self.sessions.contains_key(&session_id) {
            return Err(DomainError::invalid_input(
                "session_id",
                "Session already exists",
            )
            .with_detail("session_id", session_id.to_string()));
        }
        if self.sessions.len() >= self.capacity {
            return Err(DomainError::invalid_input(
                "session_id",
                format!("Session store is full ({} sessions)", self.capacity),
            )
            .with_detail("capacity", self.capacity.to_string()));
        }

        self.sessions.insert(session_id, engine);
        debug!(session_id = %session_id, open = self.sessions.len(), "Session stored");
        Ok(())
    }

    fn get(&self, session_id: &SessionId) -> Option<&WizardEngine> {
        self.sessions.get(session_id)
    }

    fn get_mut(&mut self, session_id: &SessionId) -> Option<&mut WizardEngine> {
        self.sessions.get_mut(session_id)
    }

    fn remove(&mut self, session_id: &SessionId) -> Option<WizardEngine> {
        self.sessions.remove(session_id)
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::AreaCatalog;
    use crate::domain::foundation::ErrorCode;
    use std::sync::Arc;

    fn engine() -> WizardEngine {
        WizardEngine::new(Arc::new(AreaCatalog::standard()))
    }

    #[test]
    fn insert_and_get_round_trip() {
        let mut store = InMemoryWizardSessionStore::with_capacity(2);
        let engine = engine();
        let id = engine.session_id();

        store.insert(engine).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().session_id(), id);
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut store = InMemoryWizardSessionStore::with_capacity(1);
        let engine = engine();
        let id = engine.session_id();
        store.insert(engine).unwrap();

        store.get_mut(&id).unwrap().advance_welcome().unwrap();

        assert!(store.get(&id).unwrap().active_scenario().is_some());
    }

    #[test]
    fn full_store_rejects_insert() {
        let mut store = InMemoryWizardSessionStore::with_capacity(1);
        store.insert(engine()).unwrap();

        let err = store.insert(engine()).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.detail("capacity"), Some("1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_session_is_rejected() {
        let mut store = InMemoryWizardSessionStore::with_capacity(4);
        let engine = engine();
        store.insert(engine.clone()).unwrap();

        let err = store.insert(engine).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn remove_frees_capacity() {
        let mut store = InMemoryWizardSessionStore::with_capacity(1);
        let engine = engine();
        let id = engine.session_id();
        store.insert(engine).unwrap();

        assert!(store.remove(&id).is_some());
        assert!(store.is_empty());
        assert!(store.remove(&id).is_none());
        store.insert(self::engine()).unwrap();
    }
}
