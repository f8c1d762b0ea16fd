use chrono::NaiveDate;
use tracing::{debug, info};

use super::filter::ScoredJob;
use crate::errors::StoreError;
use crate::models::{JobPosting, PreferenceProfile};
use crate::scoring::score_match;
use crate::store::{keys, KeyValueStore};

/// Jobs kept in one day's digest.
pub const DIGEST_SIZE: usize = 10;

/// Best `size` matches for `profile`: positive scores only, highest first,
/// fresher postings first on ties.
pub fn build_digest(jobs: &[JobPosting], profile: &PreferenceProfile, size: usize) -> Vec<ScoredJob> {
    let mut matches: Vec<ScoredJob> = jobs
        .iter()
        .filter_map(|job| {
            let match_score = score_match(job, Some(profile));
            (match_score > 0).then(|| ScoredJob {
                job: job.clone(),
                match_score,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then(a.job.posted_days_ago.cmp(&b.job.posted_days_ago))
    });
    matches.truncate(size);
    matches
}

/// The digest for `date`. A digest already stored for that day is returned
/// as-is, even if jobs or preferences changed since; otherwise a fresh one is
/// built and stored. Without a profile there is no digest.
pub fn load_or_build_digest(
    store: &mut impl KeyValueStore,
    date: NaiveDate,
    jobs: &[JobPosting],
    profile: Option<&PreferenceProfile>,
    size: usize,
) -> Result<Option<Vec<ScoredJob>>, StoreError> {
    let Some(profile) = profile else {
        debug!("No preferences saved, skipping digest");
        return Ok(None);
    };

    let key = keys::digest(date);
    if let Some(stored) = store.load_opt::<Vec<ScoredJob>>(&key) {
        debug!(%date, jobs = stored.len(), "Reusing stored digest");
        return Ok(Some(stored));
    }

    let digest = build_digest(jobs, profile, size);
    store.save(&key, &digest)?;
    info!(%date, jobs = digest.len(), "Generated daily digest");
    Ok(Some(digest))
}

/// Drops the stored digest for `date` so the next load rebuilds it.
pub fn reset_digest(store: &mut impl KeyValueStore, date: NaiveDate) -> Result<(), StoreError> {
    store.remove(&keys::digest(date))
}
