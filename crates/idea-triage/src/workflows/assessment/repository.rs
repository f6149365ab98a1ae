use serde::{Deserialize, Serialize};

use super::case::AssessmentCase;

/// Identifier wrapper for one browsing session. The presentation layer
/// owns session scoping; the workflow only keys cases by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Storage abstraction for in-progress cases so the service module can be
/// exercised in isolation. Lifetime of a stored case is one session.
pub trait SessionStore: Send + Sync {
    fn load(&self, id: &SessionId) -> Result<Option<AssessmentCase>, StoreError>;
    fn save(&self, id: &SessionId, case: AssessmentCase) -> Result<(), StoreError>;
    fn clear(&self, id: &SessionId) -> Result<(), StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
