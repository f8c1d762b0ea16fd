//! Scoring primitives shared by every scorer.
//!
//! A scorer is an ordered table of [`Rule`]s. Each rule inspects the subject
//! (and, for the match scorer, a preference profile) and returns a [`Verdict`].
//! The score is the clamped sum of awarded points, so rule order never affects
//! it. Order only decides which suggestions survive truncation.
//!
//! Every scorer is a plain value with no interior state, so they are
//! `Send + Sync` and can be shared freely across callers.

pub mod band;
pub mod match_scorer;
pub mod readiness;
pub mod refine;
pub mod rubric;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use band::ScoreBand;
pub use match_scorer::{score_match, MatchScorer};
pub use readiness::{analyze_job_description, extract_skills, ReadinessScorer};
pub use refine::{refine_score, Confidence, ScoreState};
pub use rubric::{score_rubric, RubricScore, RubricScorer};

/// Upper bound of every score this crate produces.
pub const MAX_SCORE: u32 = 100;

/// Number of suggestions surfaced to the user.
pub const MAX_SUGGESTIONS: usize = 4;

pub type RuleId = &'static str;

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of checking one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Full points, no suggestion.
    Met,
    /// Reduced points plus a suggestion that replaces the rule's default text.
    Partial {
        points: u32,
        suggestion: &'static str,
    },
    /// No points; the rule's default suggestion is emitted.
    Unmet,
    /// Rule does not apply to this subject: no points, no suggestion.
    Skipped,
}

/// A single weighted criterion. Rule tables are declared once per scorer as
/// `static` slices and never reordered.
pub struct Rule<S: ?Sized, P: ?Sized = ()> {
    pub id: RuleId,
    pub points: u32,
    pub suggestion: &'static str,
    pub check: fn(&S, &P) -> Verdict,
}

impl<S: ?Sized, P: ?Sized> fmt::Debug for Rule<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("points", &self.points)
            .finish()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Results
// ────────────────────────────────────────────────────────────────────────────

/// Output of a scoring call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32, // 0 – 100
    pub satisfied_rules: BTreeSet<String>,
    pub suggestions: Vec<String>, // ≤ MAX_SUGGESTIONS, rule order
}

/// Common interface of the scorers, so callers can hold any of them behind a
/// reference without caring which rubric backs it.
pub trait Scorer<S: ?Sized>: Send + Sync {
    fn evaluate(&self, subject: &S) -> ScoreResult;
}

/// Running totals collected while walking a rule table.
#[derive(Debug, Default)]
pub struct Tally {
    raw: i64,
    satisfied: BTreeSet<String>,
    suggestions: Vec<&'static str>,
}

impl Tally {
    /// Raw sum of awarded points, before clamping.
    pub fn raw(&self) -> i64 {
        self.raw
    }

    pub fn score(&self) -> u32 {
        clamp_score(self.raw)
    }

    /// Result with no suggestions, for scorers that only rank.
    pub fn into_score_only(self) -> ScoreResult {
        ScoreResult {
            score: clamp_score(self.raw),
            satisfied_rules: self.satisfied,
            suggestions: vec![],
        }
    }

    /// Result carrying the first [`MAX_SUGGESTIONS`] suggestions in rule order.
    pub fn into_ranked(self) -> ScoreResult {
        ScoreResult {
            score: clamp_score(self.raw),
            satisfied_rules: self.satisfied,
            suggestions: rank_suggestions(&self.suggestions, MAX_SUGGESTIONS),
        }
    }
}

/// Walks `rules` in declaration order and tallies the verdicts.
pub fn evaluate_rules<S: ?Sized, P: ?Sized>(
    rules: &[Rule<S, P>],
    subject: &S,
    profile: &P,
) -> Tally {
    let mut tally = Tally::default();

    for rule in rules {
        match (rule.check)(subject, profile) {
            Verdict::Met => {
                tally.raw += i64::from(rule.points);
                tally.satisfied.insert(rule.id.to_string());
            }
            Verdict::Partial { points, suggestion } => {
                tally.raw += i64::from(points.min(rule.points));
                tally.suggestions.push(suggestion);
            }
            Verdict::Unmet => tally.suggestions.push(rule.suggestion),
            Verdict::Skipped => {}
        }
    }

    tally
}

/// Clamps a raw point sum into `[0, MAX_SCORE]`.
pub fn clamp_score(raw: i64) -> u32 {
    raw.clamp(0, i64::from(MAX_SCORE)) as u32
}

/// Keeps the first `limit` suggestions, preserving order.
pub fn rank_suggestions(suggestions: &[&str], limit: usize) -> Vec<String> {
    suggestions
        .iter()
        .take(limit)
        .map(|s| s.to_string())
        .collect()
}

/// Sum of every rule's full points. Rule tables keep this at `MAX_SCORE`.
pub fn max_points<S: ?Sized, P: ?Sized>(rules: &[Rule<S, P>]) -> u32 {
    rules.iter().map(|r| r.points).sum()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
