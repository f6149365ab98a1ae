//! Guided automation-idea assessment: a five-step questionnaire with
//! heuristic scoring and a recommendation verdict.
//!
//! The workflow is a linear state machine over one [`AssessmentCase`] per
//! session. Each step exposes exactly one forward transition, gated by
//! validation of the step's pending input; the only way back is a full
//! restart that replaces the case. Scores are drawn once on entry to the
//! scoring step through an injectable [`ScoreSampler`], so re-rendering a
//! step never changes what was already computed.

pub mod case;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use case::{AssessmentCase, CaseView, ClarificationEntry, VerdictView, WorkforceImpactView};
pub use domain::{
    AssessmentStep, EthicsReview, StepForm, ValidationError, WorkforceImpact,
    CLARIFICATION_PROMPTS, DEFAULT_CONS, DEFAULT_PROS,
};
pub use repository::{SessionId, SessionStore, StoreError};
pub use router::assessment_router;
pub use scoring::{
    ScoreCard, ScoreSampler, SeededSampler, SubScores, ThreadRngSampler, SUB_SCORE_MAX,
    SUB_SCORE_MIN,
};
pub use service::{AssessmentService, AssessmentServiceError};
pub use verdict::{Verdict, VerdictTone};
