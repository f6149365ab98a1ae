use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::case::AssessmentCase;
use crate::workflows::assessment::domain::{EthicsReview, StepForm};
use crate::workflows::assessment::repository::{SessionId, SessionStore, StoreError};
use crate::workflows::assessment::scoring::{ScoreSampler, SubScores};
use crate::workflows::assessment::service::AssessmentService;

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    cases: Arc<Mutex<HashMap<SessionId, AssessmentCase>>>,
}

impl SessionStore for MemoryStore {
    fn load(&self, id: &SessionId) -> Result<Option<AssessmentCase>, StoreError> {
        let guard = self.cases.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn save(&self, id: &SessionId, case: AssessmentCase) -> Result<(), StoreError> {
        let mut guard = self.cases.lock().expect("store mutex poisoned");
        guard.insert(id.clone(), case);
        Ok(())
    }

    fn clear(&self, id: &SessionId) -> Result<(), StoreError> {
        let mut guard = self.cases.lock().expect("store mutex poisoned");
        guard.remove(id);
        Ok(())
    }
}

impl MemoryStore {
    pub(super) fn contains(&self, id: &SessionId) -> bool {
        self.cases
            .lock()
            .expect("store mutex poisoned")
            .contains_key(id)
    }
}

/// Store that refuses every operation, for failure-path assertions.
pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn load(&self, _id: &SessionId) -> Result<Option<AssessmentCase>, StoreError> {
        Err(StoreError::Unavailable("maintenance window".to_string()))
    }

    fn save(&self, _id: &SessionId, _case: AssessmentCase) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("maintenance window".to_string()))
    }

    fn clear(&self, _id: &SessionId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("maintenance window".to_string()))
    }
}

/// Sampler returning the same draw every time so flows are deterministic.
pub(super) struct FixedSampler(pub(super) SubScores);

impl ScoreSampler for FixedSampler {
    fn draw(&self) -> SubScores {
        self.0
    }
}

pub(super) fn fixed(efficiency: u8, quality: u8, customer_value: u8) -> Arc<FixedSampler> {
    Arc::new(FixedSampler(SubScores {
        efficiency,
        quality,
        customer_value,
    }))
}

pub(super) fn session(name: &str) -> SessionId {
    SessionId(name.to_string())
}

pub(super) fn build_service(
    sampler: Arc<dyn ScoreSampler>,
) -> (Arc<AssessmentService<MemoryStore>>, MemoryStore) {
    let store = MemoryStore::default();
    let service = Arc::new(AssessmentService::new(Arc::new(store.clone()), sampler));
    (service, store)
}

pub(super) fn idea_form(description: &str) -> StepForm {
    StepForm::Idea {
        description: description.to_string(),
    }
}

pub(super) fn clarification_form(answers: [&str; 3]) -> StepForm {
    StepForm::Clarifications {
        answers: answers.map(str::to_string),
    }
}

pub(super) fn impact_form(pros: Option<&str>, cons: Option<&str>, ethics: EthicsReview) -> StepForm {
    StepForm::Impact {
        pros: pros.map(str::to_string),
        cons: cons.map(str::to_string),
        ethics,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
