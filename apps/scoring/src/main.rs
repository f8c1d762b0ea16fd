use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scoring::config::Config;
use scoring::models::{JobPosting, PreferenceProfile, ResumeDocument};
use scoring::scoring::{ScoreBand, MAX_SCORE};
use scoring::score_rubric;
use scoring::store::{keys, FileStore, KeyValueStore};
use scoring::tracker::{
    latest_readiness_score, load_or_build_digest, AnalysisHistory, JobStatus, SavedJobs, ScoredJob,
    StatusBook,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    date: NaiveDate,
    digest: Option<Vec<DigestEntry>>,
    saved: Vec<ScoredJob>,
    resume: Option<ResumeReport>,
    latest_readiness_score: Option<u32>,
    analyses: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DigestEntry {
    #[serde(flatten)]
    scored: ScoredJob,
    status: JobStatus,
    band: ScoreBand,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResumeReport {
    score: u32,
    max_score: u32,
    band: ScoreBand,
    suggestions: Vec<String>,
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting scoring batch v{}", env!("CARGO_PKG_VERSION"));

    let mut store = FileStore::open(&config.data_dir)
        .with_context(|| format!("Cannot open data directory {}", config.data_dir.display()))?;
    info!("Data directory: {}", store.dir().display());

    let jobs = load_jobs(&config.jobs_path)?;
    let prefs: Option<PreferenceProfile> = store.load_opt(keys::PREFERENCES);
    let statuses = StatusBook::load(&store, config.history_limit);
    let today = Utc::now().date_naive();

    let digest = load_or_build_digest(&mut store, today, &jobs, prefs.as_ref(), config.digest_size)
        .context("Failed to store today's digest")?
        .map(|entries| {
            entries
                .into_iter()
                .map(|scored| DigestEntry {
                    status: statuses.status_of(&scored.job.id),
                    band: ScoreBand::from_score(scored.match_score),
                    scored,
                })
                .collect::<Vec<_>>()
        });
    if digest.is_none() {
        warn!("No preferences stored under '{}', digest skipped", keys::PREFERENCES);
    }

    let resume = store
        .load_opt::<ResumeDocument>(keys::RESUME)
        .map(|document| {
            let scored = score_rubric(&document);
            ResumeReport {
                score: scored.base_score,
                max_score: MAX_SCORE,
                band: ScoreBand::from_score(scored.base_score),
                suggestions: scored.suggestions,
            }
        });

    let history = AnalysisHistory::load(&store, config.history_limit);

    let report = Report {
        date: today,
        digest,
        saved: SavedJobs::load(&store).jobs(&jobs, prefs.as_ref()),
        resume,
        latest_readiness_score: latest_readiness_score(&store),
        analyses: history.len(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Reads the job feed. A missing file is an empty feed; a malformed one is an
/// error.
fn load_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    if !path.exists() {
        warn!("Jobs file {} not found, using an empty feed", path.display());
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read jobs file {}", path.display()))?;
    let jobs: Vec<JobPosting> = serde_json::from_str(&raw)
        .with_context(|| format!("Jobs file {} is not a JSON array of postings", path.display()))?;
    info!("Loaded {} jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}
