use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use super::history::HistoryLog;
use crate::errors::StoreError;
use crate::models::AnalysisRecord;
use crate::store::{keys, KeyValueStore};

/// Past readiness analyses, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisHistory {
    log: HistoryLog<AnalysisRecord>,
}

impl AnalysisHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            log: HistoryLog::new(limit),
        }
    }

    /// Loads the stored history, dropping entries that lack an `id` or a
    /// numeric score. Entries written before base/final scores existed carry
    /// only `readinessScore`; it stands in for both.
    pub fn load(store: &impl KeyValueStore, limit: usize) -> Self {
        let raw: Vec<Value> = store.load(keys::ANALYSIS_HISTORY);
        let total = raw.len();
        let entries: Vec<AnalysisRecord> = raw.into_iter().filter_map(decode_entry).collect();
        if entries.len() < total {
            warn!(
                dropped = total - entries.len(),
                "Skipped malformed analysis history entries"
            );
        }
        Self {
            log: HistoryLog::from_entries(entries, limit),
        }
    }

    /// Writes the history and mirrors the newest final score to
    /// `latest_readiness_score`.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        store.save(keys::ANALYSIS_HISTORY, &self.log)?;
        if let Some(latest) = self.log.latest() {
            store.save(keys::LATEST_READINESS, &latest.final_score())?;
        }
        Ok(())
    }

    pub fn record(&mut self, analysis: AnalysisRecord) {
        debug!(id = %analysis.id, score = analysis.final_score(), "Recording analysis");
        self.log.record(analysis);
    }

    /// Replaces the entry with the same id. Returns `false` when none exists.
    pub fn update(&mut self, analysis: AnalysisRecord) -> bool {
        match self
            .log
            .entries_mut()
            .iter_mut()
            .find(|entry| entry.id == analysis.id)
        {
            Some(slot) => {
                *slot = analysis;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&AnalysisRecord> {
        self.log.entries().iter().find(|entry| entry.id == id)
    }

    pub fn latest(&self) -> Option<&AnalysisRecord> {
        self.log.latest()
    }

    pub fn entries(&self) -> &[AnalysisRecord] {
        self.log.entries()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

/// Last readiness score shown on the dashboard, if any analysis was saved.
pub fn latest_readiness_score(store: &impl KeyValueStore) -> Option<u32> {
    store.load_opt(keys::LATEST_READINESS)
}

fn decode_entry(mut item: Value) -> Option<AnalysisRecord> {
    let obj = item.as_object_mut()?;
    let has_id = match obj.get("id") {
        Some(Value::String(s)) => !s.is_empty(),
        _ => false,
    };
    if !has_id {
        return None;
    }

    let legacy = obj.get("readinessScore").filter(|v| v.is_number()).cloned();
    let base = match obj.get("baseScore").filter(|v| v.is_number()).cloned() {
        Some(base) => base,
        None => {
            let legacy = legacy?;
            obj.insert("baseScore".to_string(), legacy.clone());
            legacy
        }
    };
    if !obj.get("finalScore").is_some_and(Value::is_number) {
        obj.insert("finalScore".to_string(), base);
    }

    match serde_json::from_value(item) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(error = %e, "Dropping undecodable analysis entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobDescription, SkillInventory};
    use crate::scoring::refine::{Confidence, ConfidenceMap};
    use crate::store::MemoryStore;
    use crate::tracker::HISTORY_LIMIT;
    use chrono::Utc;

    fn analysis(base: u32) -> AnalysisRecord {
        let jd = JobDescription {
            text: "Java and SQL".to_string(),
            role: "SDE".to_string(),
            company: "Acme".to_string(),
        };
        AnalysisRecord::new(&jd, SkillInventory::new(), base, vec![], Utc::now())
    }

    #[test]
    fn test_record_saves_latest_score() {
        let mut store = MemoryStore::new();
        let mut history = AnalysisHistory::new(HISTORY_LIMIT);
        history.record(analysis(55));
        history.record(analysis(70));
        history.save(&mut store).unwrap();

        assert_eq!(latest_readiness_score(&store), Some(70));
        let reloaded = AnalysisHistory::load(&store, HISTORY_LIMIT);
        assert_eq!(reloaded, history);
    }

    #[test]
    fn test_history_is_capped() {
        let mut history = AnalysisHistory::new(HISTORY_LIMIT);
        for _ in 0..HISTORY_LIMIT + 1 {
            history.record(analysis(40));
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
    }

    #[test]
    fn test_update_of_latest_refreshes_latest_score() {
        let mut store = MemoryStore::new();
        let mut history = AnalysisHistory::new(HISTORY_LIMIT);
        history.record(analysis(60));
        let mut newest = history.latest().unwrap().clone();

        let mut overrides = ConfidenceMap::new();
        overrides.insert("Java".to_string(), Confidence::Know);
        newest.apply_confidence(overrides, Utc::now());
        assert!(history.update(newest));
        history.save(&mut store).unwrap();

        assert_eq!(latest_readiness_score(&store), Some(62));
    }

    #[test]
    fn test_update_of_older_entry_keeps_latest_score() {
        let mut store = MemoryStore::new();
        let mut history = AnalysisHistory::new(HISTORY_LIMIT);
        history.record(analysis(50));
        let older_id = history.latest().unwrap().id;
        history.record(analysis(80));

        let mut older = history.get(older_id).unwrap().clone();
        older.toggle_skill("Java", Utc::now());
        assert!(history.update(older));
        history.save(&mut store).unwrap();

        assert_eq!(latest_readiness_score(&store), Some(80));
        assert_eq!(history.get(older_id).unwrap().final_score(), 52);
    }

    #[test]
    fn test_update_unknown_id_is_rejected() {
        let mut history = AnalysisHistory::new(HISTORY_LIMIT);
        history.record(analysis(50));
        assert!(!history.update(analysis(90)));
        assert_eq!(history.latest().unwrap().base_score(), 50);
    }

    #[test]
    fn test_load_filters_malformed_entries() {
        let mut store = MemoryStore::new();
        let good = serde_json::to_value(analysis(66)).unwrap();
        let raw = serde_json::json!([
            good,
            { "baseScore": 10 },
            { "id": "", "baseScore": 10 },
            { "id": "6f1c7a1e-1d2b-4f3a-9a55-0f4f8a1b2c3d", "baseScore": "high" },
            null,
            7
        ]);
        store.save(keys::ANALYSIS_HISTORY, &raw).unwrap();

        let history = AnalysisHistory::load(&store, HISTORY_LIMIT);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().base_score(), 66);
    }

    #[test]
    fn test_load_upgrades_readiness_only_entries() {
        let mut store = MemoryStore::new();
        let raw = serde_json::json!([{
            "id": "6f1c7a1e-1d2b-4f3a-9a55-0f4f8a1b2c3d",
            "createdAt": "2025-11-02T10:00:00Z",
            "updatedAt": "2025-11-02T10:00:00Z",
            "role": "Analyst",
            "readinessScore": 58
        }]);
        store.save(keys::ANALYSIS_HISTORY, &raw).unwrap();

        let history = AnalysisHistory::load(&store, HISTORY_LIMIT);
        let entry = history.latest().expect("legacy entry should load");
        assert_eq!(entry.base_score(), 58);
        assert_eq!(entry.final_score(), 58);
        assert_eq!(entry.role, "Analyst");
    }

    #[test]
    fn test_load_of_non_array_is_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::ANALYSIS_HISTORY, r#"{"id":1}"#.to_string()).unwrap();
        assert!(AnalysisHistory::load(&store, HISTORY_LIMIT).is_empty());
    }
}
