use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::status::{JobStatus, StatusBook};
use crate::models::{JobPosting, PreferenceProfile};
use crate::scoring::score_match;

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("FIRST_NUMBER regex is valid"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest postings first.
    #[default]
    Latest,
    Oldest,
    Match,
    Salary,
}

/// Criteria picked on the jobs dashboard. Empty strings and `None` mean
/// "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFilter {
    pub keyword: String,
    pub location: String,
    pub mode: String,
    pub experience: String,
    pub source: String,
    pub status: Option<JobStatus>,
    pub sort: SortOrder,
    pub show_matches_only: bool,
}

/// A posting paired with its match score. Serialized flat, with the score
/// under `_matchScore`, which is how stored digests carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    #[serde(rename = "_matchScore", default)]
    pub match_score: u32,
}

/// Applies `filter` to `jobs` and sorts the survivors. Jobs are scored only
/// when a profile exists; otherwise every score is 0 and the match threshold
/// is ignored.
pub fn filter_and_sort(
    jobs: &[JobPosting],
    filter: &JobFilter,
    profile: Option<&PreferenceProfile>,
    statuses: &StatusBook,
) -> Vec<ScoredJob> {
    let keyword = filter.keyword.trim().to_lowercase();
    let threshold = profile
        .filter(|_| filter.show_matches_only)
        .map(|p| p.min_match_score);

    let mut out: Vec<ScoredJob> = jobs
        .iter()
        .map(|job| ScoredJob {
            match_score: score_match(job, profile),
            job: job.clone(),
        })
        .filter(|scored| {
            let job = &scored.job;
            if let Some(min) = threshold {
                if scored.match_score < min {
                    return false;
                }
            }
            if !keyword.is_empty()
                && !job.title.to_lowercase().contains(&keyword)
                && !job.company.to_lowercase().contains(&keyword)
            {
                return false;
            }
            same_or_any(&filter.location, &job.location)
                && same_or_any(&filter.mode, &job.mode)
                && same_or_any(&filter.experience, &job.experience)
                && same_or_any(&filter.source, &job.source)
                && filter
                    .status
                    .map_or(true, |wanted| statuses.status_of(&job.id) == wanted)
        })
        .collect();

    // `sort_by` is stable, so equal keys keep their input order.
    match filter.sort {
        SortOrder::Latest => out.sort_by_key(|s| s.job.posted_days_ago),
        SortOrder::Oldest => out.sort_by(|a, b| b.job.posted_days_ago.cmp(&a.job.posted_days_ago)),
        SortOrder::Match => out.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
        SortOrder::Salary => out.sort_by(|a, b| {
            salary_floor(&b.job.salary_range).cmp(&salary_floor(&a.job.salary_range))
        }),
    }

    debug!(
        total = jobs.len(),
        kept = out.len(),
        sort = ?filter.sort,
        "Filtered job list"
    );
    out
}

/// First integer in a free-form salary string ("₹12-18 LPA" → 12), or 0.
pub fn salary_floor(range: &str) -> u64 {
    FIRST_NUMBER
        .find(range)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn same_or_any(wanted: &str, actual: &str) -> bool {
    wanted.is_empty() || wanted.to_lowercase() == actual.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::HISTORY_LIMIT;
    use chrono::Utc;

    fn job(id: &str, title: &str, days: u32, salary: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Pune".to_string(),
            mode: "Remote".to_string(),
            experience: "Fresher".to_string(),
            source: "LinkedIn".to_string(),
            posted_days_ago: days,
            salary_range: salary.to_string(),
            ..JobPosting::default()
        }
    }

    fn ids(jobs: &[ScoredJob]) -> Vec<&str> {
        jobs.iter().map(|s| s.job.id.as_str()).collect()
    }

    fn sample() -> Vec<JobPosting> {
        vec![
            job("a", "Backend Developer", 3, "₹6-10 LPA"),
            job("b", "Frontend Intern", 0, "₹15k-25k/month"),
            job("c", "Data Analyst", 7, "Not disclosed"),
            job("d", "Backend Intern", 0, "₹12-18 LPA"),
        ]
    }

    #[test]
    fn test_default_sort_is_latest_and_stable() {
        let out = filter_and_sort(&sample(), &JobFilter::default(), None, &StatusBook::default());
        assert_eq!(ids(&out), vec!["b", "d", "a", "c"]);
        assert!(out.iter().all(|s| s.match_score == 0), "No profile, no scores");
    }

    #[test]
    fn test_oldest_sort() {
        let filter = JobFilter {
            sort: SortOrder::Oldest,
            ..JobFilter::default()
        };
        let out = filter_and_sort(&sample(), &filter, None, &StatusBook::default());
        assert_eq!(ids(&out), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_salary_sort_uses_first_number() {
        let filter = JobFilter {
            sort: SortOrder::Salary,
            ..JobFilter::default()
        };
        let out = filter_and_sort(&sample(), &filter, None, &StatusBook::default());
        assert_eq!(ids(&out), vec!["b", "d", "a", "c"]);
        assert_eq!(salary_floor("₹12-18 LPA"), 12);
        assert_eq!(salary_floor("Not disclosed"), 0);
    }

    #[test]
    fn test_keyword_matches_title_or_company() {
        let mut jobs = sample();
        jobs[2].company = "BackendWorks".to_string();
        let filter = JobFilter {
            keyword: "BACKEND".to_string(),
            ..JobFilter::default()
        };
        let out = filter_and_sort(&jobs, &filter, None, &StatusBook::default());
        assert_eq!(ids(&out), vec!["d", "a", "c"]);
    }

    #[test]
    fn test_keyword_is_trimmed() {
        let filter = JobFilter {
            keyword: "  backend ".to_string(),
            ..JobFilter::default()
        };
        let out = filter_and_sort(&sample(), &filter, None, &StatusBook::default());
        assert_eq!(ids(&out), vec!["d", "a"]);

        let blank = JobFilter {
            keyword: "   ".to_string(),
            ..JobFilter::default()
        };
        let out = filter_and_sort(&sample(), &blank, None, &StatusBook::default());
        assert_eq!(out.len(), 4, "Whitespace-only keyword must not filter");
    }

    #[test]
    fn test_field_filters_are_case_insensitive() {
        let mut jobs = sample();
        jobs[0].mode = "Onsite".to_string();
        let filter = JobFilter {
            mode: "remote".to_string(),
            source: "linkedin".to_string(),
            location: "PUNE".to_string(),
            ..JobFilter::default()
        };
        let out = filter_and_sort(&jobs, &filter, None, &StatusBook::default());
        assert_eq!(ids(&out), vec!["b", "d", "c"]);
    }

    #[test]
    fn test_status_filter() {
        let mut book = StatusBook::new(HISTORY_LIMIT);
        book.set_status("c", JobStatus::Applied, Utc::now());
        let filter = JobFilter {
            status: Some(JobStatus::Applied),
            ..JobFilter::default()
        };
        let out = filter_and_sort(&sample(), &filter, None, &book);
        assert_eq!(ids(&out), vec!["c"]);

        let filter = JobFilter {
            status: Some(JobStatus::NotApplied),
            ..JobFilter::default()
        };
        assert_eq!(filter_and_sort(&sample(), &filter, None, &book).len(), 3);
    }

    #[test]
    fn test_threshold_needs_profile_and_toggle() {
        let profile = PreferenceProfile {
            role_keywords: "intern".to_string(),
            min_match_score: 30,
            ..PreferenceProfile::default()
        };
        let mut filter = JobFilter {
            sort: SortOrder::Match,
            ..JobFilter::default()
        };

        // Toggle off: every job survives, ranked by score.
        let out = filter_and_sort(&sample(), &filter, Some(&profile), &StatusBook::default());
        assert_eq!(out.len(), 4);
        assert_eq!(&ids(&out)[..2], &["b", "d"]);

        filter.show_matches_only = true;
        let out = filter_and_sort(&sample(), &filter, Some(&profile), &StatusBook::default());
        assert_eq!(ids(&out), vec!["b", "d"]);
        assert!(out.iter().all(|s| s.match_score >= 30));

        // Toggle on without a profile: threshold ignored.
        let out = filter_and_sort(&sample(), &filter, None, &StatusBook::default());
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_scored_job_serializes_flat() {
        let scored = ScoredJob {
            job: job("x", "SDE", 1, ""),
            match_score: 42,
        };
        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["_matchScore"], 42);
        assert_eq!(value["title"], "SDE");
        let back: ScoredJob = serde_json::from_value(value).unwrap();
        assert_eq!(back, scored);
    }
}
