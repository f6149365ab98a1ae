use serde::{Deserialize, Serialize};

/// Questions every idea has to answer before scoring; shown in order on the
/// clarification step.
pub const CLARIFICATION_PROMPTS: [&str; 3] = [
    "Which process or task should the idea automate?",
    "Who works with this process today, and how often?",
    "What systems or data does the idea depend on?",
];

/// Pre-filled workforce-impact text used when the submitter leaves the
/// fields untouched.
pub const DEFAULT_PROS: &str = "Frees the team from repetitive manual work.";
pub const DEFAULT_CONS: &str = "Affected roles may need retraining or new responsibilities.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStep {
    IdeaCapture,
    Clarify,
    Scoring,
    Impact,
    Verdict,
}

impl AssessmentStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::IdeaCapture,
            Self::Clarify,
            Self::Scoring,
            Self::Impact,
            Self::Verdict,
        ]
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::IdeaCapture => 0,
            Self::Clarify => 1,
            Self::Scoring => 2,
            Self::Impact => 3,
            Self::Verdict => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::IdeaCapture => "Describe the Idea",
            Self::Clarify => "Clarify the Details",
            Self::Scoring => "Heuristic Scores",
            Self::Impact => "Workforce Impact",
            Self::Verdict => "Recommendation",
        }
    }
}

/// Whether the submitter confirmed thinking through the ethical side of the
/// idea. Captured as an explicit answer, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EthicsReview {
    Yes,
    No,
}

impl EthicsReview {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// Workforce-impact notes committed on the impact step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkforceImpact {
    pub pros: String,
    pub cons: String,
    pub ethics: EthicsReview,
}

impl Default for WorkforceImpact {
    fn default() -> Self {
        Self {
            pros: DEFAULT_PROS.to_string(),
            cons: DEFAULT_CONS.to_string(),
            ethics: EthicsReview::No,
        }
    }
}

/// Per-step input submitted by the presentation layer alongside an advance
/// action. The `step` tag keeps the wire format self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepForm {
    Idea {
        description: String,
    },
    Clarifications {
        answers: [String; 3],
    },
    ReviewScores,
    Impact {
        #[serde(default)]
        pros: Option<String>,
        #[serde(default)]
        cons: Option<String>,
        ethics: EthicsReview,
    },
    Restart,
}

impl StepForm {
    /// The step this form belongs to.
    pub const fn step(&self) -> AssessmentStep {
        match self {
            StepForm::Idea { .. } => AssessmentStep::IdeaCapture,
            StepForm::Clarifications { .. } => AssessmentStep::Clarify,
            StepForm::ReviewScores => AssessmentStep::Scoring,
            StepForm::Impact { .. } => AssessmentStep::Impact,
            StepForm::Restart => AssessmentStep::Verdict,
        }
    }
}

/// The only failure the workflow produces: a required field was blank, or
/// the submitted form does not belong to the active step. Never fatal; the
/// case stays exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("please describe the idea before continuing")]
    MissingIdea,
    #[error("please answer clarification question {} before continuing", .index + 1)]
    MissingClarification { index: usize },
    #[error("submitted form does not match the active step '{}'", .active.label())]
    StepMismatch { active: AssessmentStep },
}
