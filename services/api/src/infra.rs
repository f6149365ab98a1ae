use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use idea_triage::config::ScoringConfig;
use idea_triage::workflows::assessment::{
    AssessmentCase, ScoreSampler, SeededSampler, SessionId, SessionStore, StoreError,
    ThreadRngSampler,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Session-scoped case storage backing the HTTP service. Cases live only
/// as long as the process; there is no cross-session durability.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    cases: Arc<Mutex<HashMap<SessionId, AssessmentCase>>>,
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, id: &SessionId) -> Result<Option<AssessmentCase>, StoreError> {
        let guard = self.cases.lock().expect("session store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn save(&self, id: &SessionId, case: AssessmentCase) -> Result<(), StoreError> {
        let mut guard = self.cases.lock().expect("session store mutex poisoned");
        guard.insert(id.clone(), case);
        Ok(())
    }

    fn clear(&self, id: &SessionId) -> Result<(), StoreError> {
        let mut guard = self.cases.lock().expect("session store mutex poisoned");
        guard.remove(id);
        Ok(())
    }
}

pub(crate) fn sampler_from_config(config: &ScoringConfig) -> Arc<dyn ScoreSampler> {
    match config.seed {
        Some(seed) => Arc::new(SeededSampler::new(seed)),
        None => Arc::new(ThreadRngSampler),
    }
}
