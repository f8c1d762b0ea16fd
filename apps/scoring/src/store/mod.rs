//! Persistence port. Scorers never touch storage; the tracker modules and the
//! driver load inputs and save results through a [`KeyValueStore`].
//!
//! Contract: reads never fail. A missing key, an unreadable file or a value
//! that no longer decodes all read back as "absent" (and `load` falls back to
//! `T::default()`). Only writes report errors.

pub mod file;
pub mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::errors::StoreError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Keys shared with the browser applications' localStorage layout.
pub mod keys {
    use chrono::NaiveDate;

    pub const PREFERENCES: &str = "jobTrackerPreferences";
    pub const STATUS: &str = "jobTrackerStatus";
    pub const STATUS_UPDATES: &str = "jobTrackerStatusUpdates";
    pub const SAVED: &str = "job-notification-tracker-saved";
    pub const RESUME: &str = "resumeBuilderData";
    pub const ANALYSIS_HISTORY: &str = "job_history";
    pub const LATEST_READINESS: &str = "latest_readiness_score";

    /// One digest is kept per calendar day.
    pub fn digest(date: NaiveDate) -> String {
        format!("jobTrackerDigest_{}", date.format("%Y-%m-%d"))
    }
}

/// String key → JSON text store.
pub trait KeyValueStore {
    /// Last value set under `key`, or `None`.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Decoded value, or `None` when missing or undecodable.
    fn load_opt<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Discarding undecodable stored value");
                None
            }
        }
    }

    /// Decoded value, or `T::default()` when missing or undecodable.
    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load_opt(key).unwrap_or_default()
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.set(key, raw)
    }
}
