use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const SUB_SCORE_MIN: u8 = 40;
pub const SUB_SCORE_MAX: u8 = 100;

// Legacy rubric weights, preserved verbatim; they sum to 0.85, not 1.0.
pub const EFFICIENCY_WEIGHT: f64 = 0.30;
pub const QUALITY_WEIGHT: f64 = 0.30;
pub const CUSTOMER_VALUE_WEIGHT: f64 = 0.25;

/// One draw of the three heuristic sub-scores, each uniform in
/// `[SUB_SCORE_MIN, SUB_SCORE_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub efficiency: u8,
    pub quality: u8,
    pub customer_value: u8,
}

/// Randomness seam for the scoring engine so workflows can be exercised
/// deterministically.
pub trait ScoreSampler: Send + Sync {
    fn draw(&self) -> SubScores;
}

/// Production sampler backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSampler;

impl ScoreSampler for ThreadRngSampler {
    fn draw(&self) -> SubScores {
        let mut rng = rand::thread_rng();
        draw_with(&mut rng)
    }
}

/// Reproducible sampler used when a fixed seed is configured.
#[derive(Debug)]
pub struct SeededSampler {
    rng: Mutex<StdRng>,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ScoreSampler for SeededSampler {
    fn draw(&self) -> SubScores {
        let mut rng = self.rng.lock().expect("sampler mutex poisoned");
        draw_with(&mut *rng)
    }
}

fn draw_with<R: Rng>(rng: &mut R) -> SubScores {
    SubScores {
        efficiency: rng.gen_range(SUB_SCORE_MIN..=SUB_SCORE_MAX),
        quality: rng.gen_range(SUB_SCORE_MIN..=SUB_SCORE_MAX),
        customer_value: rng.gen_range(SUB_SCORE_MIN..=SUB_SCORE_MAX),
    }
}

/// The scores stored on a case: the raw draw plus the weighted composite,
/// rounded to two decimal places. Computed once per case and never redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub efficiency: u8,
    pub quality: u8,
    pub customer_value: u8,
    pub weighted: f64,
}

impl ScoreCard {
    pub fn from_draw(draw: SubScores) -> Self {
        let weighted = round2(
            EFFICIENCY_WEIGHT * f64::from(draw.efficiency)
                + QUALITY_WEIGHT * f64::from(draw.quality)
                + CUSTOMER_VALUE_WEIGHT * f64::from(draw.customer_value),
        );

        Self {
            efficiency: draw.efficiency,
            quality: draw.quality,
            customer_value: draw.customer_value,
            weighted,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
