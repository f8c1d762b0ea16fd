//! Confidence overrides: the user's post-scoring self-assessment.
//!
//! Overrides adjust a finished base score by ±2 per entry and re-clamp. They
//! never feed back into rule evaluation: the base score is written once by the
//! rubric pass and every refinement starts from it again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{clamp_score, ScoreResult};

/// Points added per `know` entry and removed per `practice` entry.
pub const CONFIDENCE_STEP: i64 = 2;

/// Self-assessed confidence for one skill. Unknown labels load as
/// `Unrecognized` and adjust nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Know,
    Practice,
    #[serde(other)]
    Unrecognized,
}

impl Confidence {
    pub fn adjustment(self) -> i64 {
        match self {
            Confidence::Know => CONFIDENCE_STEP,
            Confidence::Practice => -CONFIDENCE_STEP,
            Confidence::Unrecognized => 0,
        }
    }

    /// Flips between `know` and `practice`; unrecognised values become `know`.
    pub fn toggled(self) -> Self {
        match self {
            Confidence::Know => Confidence::Practice,
            Confidence::Practice | Confidence::Unrecognized => Confidence::Know,
        }
    }
}

/// Skill label → confidence, as persisted alongside an analysis.
pub type ConfidenceMap = BTreeMap<String, Confidence>;

/// `clamp(base + Σ adjustment, 0, 100)`.
pub fn refine_score(base_score: u32, overrides: &ConfidenceMap) -> u32 {
    let adjustment: i64 = overrides.values().map(|c| c.adjustment()).sum();
    clamp_score(i64::from(base_score) + adjustment)
}

/// The immutable output of the rubric pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    base_score: u32,
    suggestions: Vec<String>,
}

impl Baseline {
    pub fn base_score(&self) -> u32 {
        self.base_score
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

/// Lifecycle of one scored entity: `Unscored → Scored → Refined`, where
/// `Refined` may be re-entered as often as the override map changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ScoreState {
    #[default]
    Unscored,
    Scored {
        baseline: Baseline,
    },
    Refined {
        baseline: Baseline,
        overrides: ConfidenceMap,
        final_score: u32,
    },
}

impl ScoreState {
    /// Records the result of a rubric pass.
    pub fn scored(result: ScoreResult) -> Self {
        ScoreState::Scored {
            baseline: Baseline {
                base_score: result.score,
                suggestions: result.suggestions,
            },
        }
    }

    /// Applies `overrides` to the original base score. An unscored entity has
    /// nothing to refine and is returned unchanged.
    pub fn refine(self, overrides: ConfidenceMap) -> Self {
        let baseline = match self {
            ScoreState::Unscored => {
                debug!("refinement requested before scoring; ignoring");
                return ScoreState::Unscored;
            }
            ScoreState::Scored { baseline } | ScoreState::Refined { baseline, .. } => baseline,
        };

        let final_score = refine_score(baseline.base_score, &overrides);
        ScoreState::Refined {
            baseline,
            overrides,
            final_score,
        }
    }

    pub fn baseline(&self) -> Option<&Baseline> {
        match self {
            ScoreState::Unscored => None,
            ScoreState::Scored { baseline } | ScoreState::Refined { baseline, .. } => {
                Some(baseline)
            }
        }
    }

    pub fn base_score(&self) -> Option<u32> {
        self.baseline().map(Baseline::base_score)
    }

    /// Score to display: the refined score when present, else the base score.
    pub fn final_score(&self) -> Option<u32> {
        match self {
            ScoreState::Unscored => None,
            ScoreState::Scored { baseline } => Some(baseline.base_score),
            ScoreState::Refined { final_score, .. } => Some(*final_score),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
