use tracing::debug;

use super::filter::ScoredJob;
use crate::errors::StoreError;
use crate::models::{JobPosting, PreferenceProfile};
use crate::scoring::score_match;
use crate::store::{keys, KeyValueStore};

/// Jobs the user starred, in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedJobs {
    ids: Vec<String>,
}

impl SavedJobs {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            ids: store.load(keys::SAVED),
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.save(keys::SAVED, &self.ids)
    }

    /// Saves `job_id` if it is not saved, otherwise unsaves it. Returns whether
    /// the job is saved afterwards.
    pub fn toggle(&mut self, job_id: &str) -> bool {
        match self.ids.iter().position(|id| id == job_id) {
            Some(index) => {
                self.ids.remove(index);
                debug!(job_id, "Job unsaved");
                false
            }
            None => {
                self.ids.push(job_id.to_string());
                debug!(job_id, "Job saved");
                true
            }
        }
    }

    pub fn is_saved(&self, job_id: &str) -> bool {
        self.ids.iter().any(|id| id == job_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Saved postings in feed order, scored when a profile exists. Ids whose
    /// posting left the feed are skipped.
    pub fn jobs(&self, feed: &[JobPosting], profile: Option<&PreferenceProfile>) -> Vec<ScoredJob> {
        feed.iter()
            .filter(|job| self.is_saved(&job.id))
            .map(|job| ScoredJob {
                match_score: score_match(job, profile),
                job: job.clone(),
            })
            .collect()
    }
}
