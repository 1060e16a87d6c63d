//! WizardService - session registry in front of the wizard engines.
//!
//! Each session owns its own `WizardEngine`; the catalog and recommender are
//! immutable and shared.

use std::sync::Arc;

use tracing::{debug, info};

use super::{WizardCommand, WizardView};
use crate::adapters::content::{BuiltinActionTables, YamlActionTablesFile};
use crate::adapters::memory::InMemoryWizardSessionStore;
use crate::config::AppConfig;
use crate::domain::analysis::{ActionRecommender, PersonalSnapshot, SummaryResult};
use crate::domain::catalog::AreaCatalog;
use crate::domain::foundation::{DomainError, ErrorCode, Score, SessionId};
use crate::domain::wizard::{EngineSettings, WizardEngine, WizardEvent};
use crate::ports::{ActionTablesSource, WizardSessionStore};

/// Opens, drives and closes wizard sessions.
pub struct WizardService {
    store: Box<dyn WizardSessionStore>,
    catalog: Arc<AreaCatalog>,
    recommender: ActionRecommender,
    settings: EngineSettings,
}

impl WizardService {
    pub fn new(
        store: Box<dyn WizardSessionStore>,
        catalog: Arc<AreaCatalog>,
        recommender: ActionRecommender,
        settings: EngineSettings,
    ) -> Self {
        Self {
            store,
            catalog,
            recommender,
            settings,
        }
    }

    /// Wires the service from configuration.
    ///
    /// Uses the standard catalog, an in-memory store sized by
    /// `wizard.max_sessions`, and action tables from `content.action_tables_path`
    /// when set.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `wizard.default_score` is not a valid score
    /// - `InvalidContent` if the action tables cannot be loaded
    pub fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        let default_score = Score::try_new(i64::from(config.wizard.default_score))?;

        let tables = match &config.content.action_tables_path {
            Some(path) => YamlActionTablesFile::new(path).load()?,
            None => BuiltinActionTables.load()?,
        };
        let recommender = ActionRecommender::new(tables)?;

        info!(
            max_sessions = config.wizard.max_sessions,
            default_score = %default_score,
            "Wizard service configured"
        );

        Ok(Self::new(
            Box::new(InMemoryWizardSessionStore::with_capacity(
                config.wizard.max_sessions,
            )),
            Arc::new(AreaCatalog::standard()),
            recommender,
            EngineSettings { default_score },
        ))
    }

    pub fn catalog(&self) -> &AreaCatalog {
        &self.catalog
    }

    pub fn recommender(&self) -> &ActionRecommender {
        &self.recommender
    }

    /// Number of open sessions.
    pub fn session_count(&self) -> usize {
        self.store.len()
    }

    /// Starts a new session at the Welcome step.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the store is full
    pub fn open_session(&mut self) -> Result<SessionId, DomainError> {
        let session_id = SessionId::new();
        let engine = WizardEngine::with_settings(session_id, self.catalog.clone(), self.settings);
        self.store.insert(engine)?;
        debug!(session_id = %session_id, "Session opened");
        Ok(session_id)
    }

    /// Applies a command and returns the resulting view.
    ///
    /// A rejected command leaves the session untouched.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` for an unknown id
    /// - whatever the engine reports for the command
    pub fn execute(
        &mut self,
        session_id: &SessionId,
        command: WizardCommand,
    ) -> Result<WizardView, DomainError> {
        let engine = self
            .store
            .get_mut(session_id)
            .ok_or_else(|| not_found(session_id))?;

        let name = command.name();
        command.apply(engine)?;
        debug!(
            session_id = %session_id,
            command = name,
            step = %engine.current_step(),
            "Command applied"
        );

        Ok(WizardView::from_engine(engine))
    }

    /// Returns the current view of a session.
    pub fn view(&self, session_id: &SessionId) -> Result<WizardView, DomainError> {
        self.engine(session_id).map(WizardView::from_engine)
    }

    /// Returns the summary of a finished session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` for an unknown id
    /// - `NotReady` before the Summary step
    pub fn summary(&self, session_id: &SessionId) -> Result<SummaryResult, DomainError> {
        self.engine(session_id)?.summary()
    }

    /// Returns the shareable snapshot of a finished session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` for an unknown id
    /// - `NotReady` before the Summary step
    pub fn snapshot(&self, session_id: &SessionId) -> Result<PersonalSnapshot, DomainError> {
        self.engine(session_id)?.snapshot(&self.recommender)
    }

    /// Drains the events recorded by a session since the last call.
    pub fn take_events(
        &mut self,
        session_id: &SessionId,
    ) -> Result<Vec<WizardEvent>, DomainError> {
        self.store
            .get_mut(session_id)
            .map(WizardEngine::take_events)
            .ok_or_else(|| not_found(session_id))
    }

    /// Discards a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` for an unknown id
    pub fn close_session(&mut self, session_id: &SessionId) -> Result<(), DomainError> {
        self.store
            .remove(session_id)
            .ok_or_else(|| not_found(session_id))?;
        debug!(session_id = %session_id, "Session closed");
        Ok(())
    }

    fn engine(&self, session_id: &SessionId) -> Result<&WizardEngine, DomainError> {
        self.store
            .get(session_id)
            .ok_or_else(|| not_found(session_id))
    }
}

fn not_found(session_id: &SessionId) -> DomainError {
    DomainError::new(ErrorCode::SessionNotFound, "Wizard session not found")
        .with_detail("session_id", session_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Scenario;
    use crate::domain::wizard::WizardStep;

    fn service(capacity: usize) -> WizardService {
        WizardService::new(
            Box::new(InMemoryWizardSessionStore::with_capacity(capacity)),
            Arc::new(AreaCatalog::standard()),
            ActionRecommender::standard(),
            EngineSettings::default(),
        )
    }

    #[test]
    fn open_session_starts_at_welcome() {
        let mut service = service(4);
        let id = service.open_session().unwrap();

        let view = service.view(&id).unwrap();

        assert_eq!(view.session_id, id);
        assert_eq!(view.step, WizardStep::Welcome);
        assert_eq!(service.session_count(), 1);
    }

    #[test]
    fn execute_returns_updated_view() {
        let mut service = service(4);
        let id = service.open_session().unwrap();

        let view = service.execute(&id, WizardCommand::AdvanceWelcome).unwrap();

        assert_eq!(view.step, WizardStep::Baseline);
        assert_eq!(view.areas.len(), 1);
    }

    #[test]
    fn rejected_command_leaves_session_untouched() {
        let mut service = service(4);
        let id = service.open_session().unwrap();
        service.execute(&id, WizardCommand::AdvanceWelcome).unwrap();
        let before = service.view(&id).unwrap();

        let err = service
            .execute(
                &id,
                WizardCommand::SetScore {
                    scenario: Scenario::Baseline,
                    area_index: 0,
                    value: 42,
                },
            )
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(service.view(&id).unwrap(), before);
    }

    #[test]
    fn unknown_session_is_not_found() {
        let mut service = service(4);
        let ghost = SessionId::new();

        for err in [
            service.view(&ghost).unwrap_err(),
            service.snapshot(&ghost).unwrap_err(),
            service.execute(&ghost, WizardCommand::Reset).unwrap_err(),
            service.close_session(&ghost).unwrap_err(),
        ] {
            assert_eq!(err.code, ErrorCode::SessionNotFound);
        }
    }

    #[test]
    fn sessions_are_isolated() {
        let mut service = service(4);
        let a = service.open_session().unwrap();
        let b = service.open_session().unwrap();

        service.execute(&a, WizardCommand::AdvanceWelcome).unwrap();

        assert_eq!(service.view(&a).unwrap().step, WizardStep::Baseline);
        assert_eq!(service.view(&b).unwrap().step, WizardStep::Welcome);
    }

    #[test]
    fn capacity_limits_open_sessions() {
        let mut service = service(1);
        let id = service.open_session().unwrap();

        let err = service.open_session().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        service.close_session(&id).unwrap();
        assert!(service.open_session().is_ok());
    }

    #[test]
    fn snapshot_before_summary_is_not_ready() {
        let mut service = service(1);
        let id = service.open_session().unwrap();
        let err = service.snapshot(&id).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotReady);
    }

    #[test]
    fn from_default_config_uses_builtin_content() {
        let service = WizardService::from_config(&AppConfig::default()).unwrap();
        assert_eq!(service.catalog().len(), 7);
        assert_eq!(
            service.recommender().tables(),
            &crate::domain::analysis::ActionTables::standard()
        );
    }

    #[test]
    fn from_config_with_missing_tables_file_fails() {
        let mut config = AppConfig::default();
        config.content.action_tables_path = Some("/nonexistent/actions.yaml".into());

        let err = WizardService::from_config(&config).err().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidContent);
    }
}
