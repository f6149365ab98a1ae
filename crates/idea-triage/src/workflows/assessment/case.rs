use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    AssessmentStep, EthicsReview, StepForm, ValidationError, WorkforceImpact,
    CLARIFICATION_PROMPTS, DEFAULT_CONS, DEFAULT_PROS,
};
use super::scoring::{ScoreCard, ScoreSampler};
use super::verdict::{Verdict, VerdictTone};

/// One complete run of the questionnaire, from idea capture through
/// verdict. Fields populate monotonically as steps advance and are only
/// cleared by a full restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentCase {
    step: AssessmentStep,
    started_at: DateTime<Utc>,
    idea: Option<String>,
    clarifications: Option<[String; 3]>,
    scores: Option<ScoreCard>,
    impact: Option<WorkforceImpact>,
}

impl Default for AssessmentCase {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentCase {
    pub fn new() -> Self {
        Self {
            step: AssessmentStep::IdeaCapture,
            started_at: Utc::now(),
            idea: None,
            clarifications: None,
            scores: None,
            impact: None,
        }
    }

    pub fn step(&self) -> AssessmentStep {
        self.step
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn idea(&self) -> Option<&str> {
        self.idea.as_deref()
    }

    pub fn clarifications(&self) -> Option<&[String; 3]> {
        self.clarifications.as_ref()
    }

    pub fn scores(&self) -> Option<&ScoreCard> {
        self.scores.as_ref()
    }

    pub fn impact(&self) -> Option<&WorkforceImpact> {
        self.impact.as_ref()
    }

    /// Run the single forward transition out of the active step. On
    /// refusal the case is left untouched and the error doubles as the
    /// warning shown to the submitter. Entering the scoring step draws the
    /// scores exactly once; later renders reuse the stored card.
    pub fn advance(
        &mut self,
        form: StepForm,
        sampler: &dyn ScoreSampler,
    ) -> Result<AssessmentStep, ValidationError> {
        match (self.step, form) {
            (AssessmentStep::IdeaCapture, StepForm::Idea { description }) => {
                let trimmed = description.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::MissingIdea);
                }
                self.idea = Some(trimmed.to_string());
                self.step = AssessmentStep::Clarify;
            }
            (AssessmentStep::Clarify, StepForm::Clarifications { answers }) => {
                if let Some(index) = answers.iter().position(|answer| answer.trim().is_empty()) {
                    return Err(ValidationError::MissingClarification { index });
                }
                self.clarifications =
                    Some(answers.map(|answer| answer.trim().to_string()));
                self.scores = Some(ScoreCard::from_draw(sampler.draw()));
                self.step = AssessmentStep::Scoring;
            }
            (AssessmentStep::Scoring, StepForm::ReviewScores) => {
                self.step = AssessmentStep::Impact;
            }
            (AssessmentStep::Impact, StepForm::Impact { pros, cons, ethics }) => {
                self.impact = Some(WorkforceImpact {
                    pros: text_or_default(pros, DEFAULT_PROS),
                    cons: text_or_default(cons, DEFAULT_CONS),
                    ethics,
                });
                self.step = AssessmentStep::Verdict;
            }
            (AssessmentStep::Verdict, StepForm::Restart) => {
                *self = Self::new();
            }
            (active, _) => {
                return Err(ValidationError::StepMismatch { active });
            }
        }

        Ok(self.step)
    }

    /// Replace the case with a fresh empty one.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// The verdict for a completed case; `None` before the verdict step.
    pub fn verdict(&self) -> Option<Verdict> {
        if self.step != AssessmentStep::Verdict {
            return None;
        }
        self.scores
            .map(|card| Verdict::from_weighted(card.weighted))
    }

    /// Everything the presentation layer needs to render the active step.
    pub fn view(&self) -> CaseView {
        let clarifications = self.clarifications.as_ref().map(|answers| {
            CLARIFICATION_PROMPTS
                .iter()
                .zip(answers.iter())
                .map(|(prompt, answer)| ClarificationEntry {
                    prompt,
                    answer: answer.clone(),
                })
                .collect()
        });

        CaseView {
            step: self.step,
            step_index: self.step.index(),
            step_label: self.step.label(),
            started_at: self.started_at,
            prompts: CLARIFICATION_PROMPTS,
            idea: self.idea.clone(),
            clarifications,
            scores: self.scores,
            impact: self.impact.as_ref().map(WorkforceImpactView::from),
            verdict: self.verdict().map(VerdictView::from),
        }
    }
}

fn text_or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => default.to_string(),
    }
}

/// A clarification prompt paired with its committed answer.
#[derive(Debug, Clone, Serialize)]
pub struct ClarificationEntry {
    pub prompt: &'static str,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkforceImpactView {
    pub pros: String,
    pub cons: String,
    pub ethics: EthicsReview,
    pub ethics_label: &'static str,
}

impl From<&WorkforceImpact> for WorkforceImpactView {
    fn from(impact: &WorkforceImpact) -> Self {
        Self {
            pros: impact.pros.clone(),
            cons: impact.cons.clone(),
            ethics: impact.ethics,
            ethics_label: impact.ethics.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerdictView {
    pub verdict: Verdict,
    pub label: &'static str,
    pub tone: VerdictTone,
    pub color: &'static str,
}

impl From<Verdict> for VerdictView {
    fn from(verdict: Verdict) -> Self {
        Self {
            verdict,
            label: verdict.label(),
            tone: verdict.tone(),
            color: verdict.tone().color(),
        }
    }
}

/// Serializable projection of a case for the presentation contract.
#[derive(Debug, Clone, Serialize)]
pub struct CaseView {
    pub step: AssessmentStep,
    pub step_index: u8,
    pub step_label: &'static str,
    pub started_at: DateTime<Utc>,
    pub prompts: [&'static str; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarifications: Option<Vec<ClarificationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<WorkforceImpactView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<VerdictView>,
}
