//! Match scoring: ranks a job posting against the user's preference profile.
//!
//! Eight independent rules whose weights sum to exactly 100. No rule disables
//! another, and absent posting fields simply fail their rule.

use tracing::debug;

use super::{evaluate_rules, Rule, ScoreResult, Scorer, Verdict};
use crate::models::job::{JobPosting, PreferenceProfile};

/// Source that earns the preferred-source bonus.
pub const PREFERRED_SOURCE: &str = "linkedin";

/// Postings at most this many days old earn the recency bonus.
pub const RECENT_DAYS: u32 = 2;

pub static MATCH_RULES: &[Rule<JobPosting, PreferenceProfile>] = &[
    Rule {
        id: "title_keyword",
        points: 25,
        suggestion: "",
        check: title_keyword,
    },
    Rule {
        id: "description_keyword",
        points: 15,
        suggestion: "",
        check: description_keyword,
    },
    Rule {
        id: "location",
        points: 15,
        suggestion: "",
        check: location,
    },
    Rule {
        id: "mode",
        points: 10,
        suggestion: "",
        check: mode,
    },
    Rule {
        id: "experience",
        points: 10,
        suggestion: "",
        check: experience,
    },
    Rule {
        id: "skill_overlap",
        points: 15,
        suggestion: "",
        check: skill_overlap,
    },
    Rule {
        id: "recency",
        points: 5,
        suggestion: "",
        check: recency,
    },
    Rule {
        id: "preferred_source",
        points: 5,
        suggestion: "",
        check: preferred_source,
    },
];

/// Scores postings against one profile. Construct per request; a missing
/// profile scores every posting 0.
#[derive(Debug, Clone, Copy)]
pub struct MatchScorer<'a> {
    profile: Option<&'a PreferenceProfile>,
}

impl<'a> MatchScorer<'a> {
    pub fn new(profile: Option<&'a PreferenceProfile>) -> Self {
        Self { profile }
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }
}

impl Scorer<JobPosting> for MatchScorer<'_> {
    fn evaluate(&self, job: &JobPosting) -> ScoreResult {
        let Some(profile) = self.profile else {
            return ScoreResult::default();
        };

        let result = evaluate_rules(MATCH_RULES, job, profile).into_score_only();
        debug!(job_id = %job.id, score = result.score, "match scored");
        result
    }
}

/// Match score in `[0, 100]` for `job`; 0 when there is no profile.
pub fn score_match(job: &JobPosting, profile: Option<&PreferenceProfile>) -> u32 {
    MatchScorer::new(profile).evaluate(job).score
}

fn verdict(met: bool) -> Verdict {
    if met {
        Verdict::Met
    } else {
        Verdict::Unmet
    }
}

fn any_keyword_in(text: &str, profile: &PreferenceProfile) -> bool {
    let haystack = text.to_lowercase();
    profile
        .keyword_list()
        .iter()
        .any(|kw| haystack.contains(kw.as_str()))
}

fn lowercase_member(value: &str, options: &[String]) -> bool {
    let value = value.to_lowercase();
    options.iter().any(|o| o.to_lowercase() == value)
}

fn title_keyword(job: &JobPosting, profile: &PreferenceProfile) -> Verdict {
    verdict(any_keyword_in(&job.title, profile))
}

fn description_keyword(job: &JobPosting, profile: &PreferenceProfile) -> Verdict {
    verdict(any_keyword_in(&job.description, profile))
}

fn location(job: &JobPosting, profile: &PreferenceProfile) -> Verdict {
    verdict(lowercase_member(&job.location, &profile.preferred_locations))
}

fn mode(job: &JobPosting, profile: &PreferenceProfile) -> Verdict {
    verdict(lowercase_member(&job.mode, &profile.preferred_mode))
}

fn experience(job: &JobPosting, profile: &PreferenceProfile) -> Verdict {
    if profile.experience_level.is_empty() {
        return Verdict::Skipped;
    }
    verdict(job.experience.to_lowercase() == profile.experience_level.to_lowercase())
}

fn skill_overlap(job: &JobPosting, profile: &PreferenceProfile) -> Verdict {
    let job_skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();
    verdict(
        profile
            .skill_list()
            .iter()
            .any(|skill| job_skills.contains(skill)),
    )
}

fn recency(job: &JobPosting, _: &PreferenceProfile) -> Verdict {
    verdict(job.posted_days_ago <= RECENT_DAYS)
}

fn preferred_source(job: &JobPosting, _: &PreferenceProfile) -> Verdict {
    verdict(job.source.to_lowercase() == PREFERRED_SOURCE)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
