use serde::Serialize;

/// Entries kept by every history log unless configured otherwise.
pub const HISTORY_LIMIT: usize = 50;

/// Append-only, most-recent-first log with a fixed capacity. Recording past
/// capacity drops the oldest entry. Persisted as a plain JSON array.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog<T> {
    entries: Vec<T>,
    limit: usize,
}

impl<T> HistoryLog<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Wraps already-ordered entries (newest first), trimming to `limit`.
    pub fn from_entries(mut entries: Vec<T>, limit: usize) -> Self {
        entries.truncate(limit);
        Self { entries, limit }
    }

    pub fn record(&mut self, entry: T) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.first()
    }

    /// Up to `n` newest entries.
    pub fn recent(&self, n: usize) -> &[T] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [T] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl<T> Default for HistoryLog<T> {
    fn default() -> Self {
        Self::new(HISTORY_LIMIT)
    }
}

impl<T: Serialize> Serialize for HistoryLog<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
