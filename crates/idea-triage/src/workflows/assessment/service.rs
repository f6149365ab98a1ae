use std::sync::Arc;

use tracing::debug;

use super::case::{AssessmentCase, CaseView};
use super::domain::{StepForm, ValidationError};
use super::repository::{SessionId, SessionStore, StoreError};
use super::scoring::ScoreSampler;

/// Service composing the session store and the score sampler. One case per
/// session; every operation is synchronous and touches only that session's
/// case.
pub struct AssessmentService<S> {
    store: Arc<S>,
    sampler: Arc<dyn ScoreSampler>,
}

impl<S> AssessmentService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, sampler: Arc<dyn ScoreSampler>) -> Self {
        Self { store, sampler }
    }

    /// View of the session's active step. A session without a case gets a
    /// derived empty view; nothing is persisted until the first advance.
    pub fn current(&self, session: &SessionId) -> Result<CaseView, AssessmentServiceError> {
        let case = self.store.load(session)?.unwrap_or_default();
        Ok(case.view())
    }

    /// Run one forward transition for the session. Validation refusals
    /// leave the stored case untouched and carry the user-facing warning.
    pub fn advance(
        &self,
        session: &SessionId,
        form: StepForm,
    ) -> Result<CaseView, AssessmentServiceError> {
        let mut case = self.store.load(session)?.unwrap_or_default();
        let step = case.advance(form, self.sampler.as_ref())?;
        self.store.save(session, case.clone())?;

        debug!(session = %session.0, step = step.index(), "assessment advanced");
        Ok(case.view())
    }

    /// Replace the session's case with a fresh empty one.
    pub fn restart(&self, session: &SessionId) -> Result<CaseView, AssessmentServiceError> {
        let case = AssessmentCase::new();
        self.store.save(session, case.clone())?;

        debug!(session = %session.0, "assessment restarted");
        Ok(case.view())
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
