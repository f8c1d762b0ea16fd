use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::history::HistoryLog;
use crate::errors::StoreError;
use crate::store::{keys, KeyValueStore};

/// Application state of a single job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    #[default]
    NotApplied,
    Applied,
    Rejected,
    Selected,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::NotApplied => "not-applied",
            JobStatus::Applied => "applied",
            JobStatus::Rejected => "rejected",
            JobStatus::Selected => "selected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub job_id: String,
    pub status: JobStatus,
    pub date: DateTime<Utc>,
}

/// Current status per job plus the dated trail of changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusBook {
    statuses: BTreeMap<String, JobStatus>,
    updates: HistoryLog<StatusUpdate>,
}

impl StatusBook {
    pub fn new(limit: usize) -> Self {
        Self {
            statuses: BTreeMap::new(),
            updates: HistoryLog::new(limit),
        }
    }

    pub fn load(store: &impl KeyValueStore, limit: usize) -> Self {
        let statuses = store.load(keys::STATUS);
        let updates: Vec<StatusUpdate> = store.load(keys::STATUS_UPDATES);
        Self {
            statuses,
            updates: HistoryLog::from_entries(updates, limit),
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.save(keys::STATUS, &self.statuses)?;
        store.save(keys::STATUS_UPDATES, &self.updates)
    }

    pub fn status_of(&self, job_id: &str) -> JobStatus {
        self.statuses.get(job_id).copied().unwrap_or_default()
    }

    /// Returns `false` and records nothing when `status` is already current.
    pub fn set_status(&mut self, job_id: &str, status: JobStatus, now: DateTime<Utc>) -> bool {
        if self.status_of(job_id) == status {
            return false;
        }
        debug!(job_id, %status, "Job status changed");
        self.statuses.insert(job_id.to_string(), status);
        self.updates.record(StatusUpdate {
            job_id: job_id.to_string(),
            status,
            date: now,
        });
        true
    }

    pub fn updates(&self) -> &HistoryLog<StatusUpdate> {
        &self.updates
    }
}
