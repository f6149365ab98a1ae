use serde::{Deserialize, Serialize};

pub const PROCEED_THRESHOLD: f64 = 80.0;
pub const DEVELOP_THRESHOLD: f64 = 50.0;

/// Recommendation tier resolved from the weighted score. A pure total
/// function: every weighted value maps to exactly one verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Proceed,
    NeedsDevelopment,
    NotRecommended,
}

impl Verdict {
    pub fn from_weighted(weighted: f64) -> Self {
        if weighted >= PROCEED_THRESHOLD {
            Self::Proceed
        } else if weighted >= DEVELOP_THRESHOLD {
            Self::NeedsDevelopment
        } else {
            Self::NotRecommended
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Proceed => "Proceed to implementation",
            Self::NeedsDevelopment => "Needs further development",
            Self::NotRecommended => "Not recommended",
        }
    }

    pub const fn tone(self) -> VerdictTone {
        match self {
            Self::Proceed => VerdictTone::Positive,
            Self::NeedsDevelopment => VerdictTone::Neutral,
            Self::NotRecommended => VerdictTone::Negative,
        }
    }
}

/// Display tone for the presentation layer; the color carries no logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTone {
    Positive,
    Neutral,
    Negative,
}

impl VerdictTone {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Positive => "green",
            Self::Neutral => "orange",
            Self::Negative => "red",
        }
    }
}
