//! Bounded match history with aggregate statistics
//!
//! Keeps an insertion-ordered record of committed matches, evicting the oldest
//! entry once the capacity is exceeded (strict FIFO, no access-based
//! reordering). This store is the single owner of mutable history state; when
//! shared between concurrent callers, `record`/`clear` must be serialized by
//! the caller (a mutex or single-writer discipline). Snapshot reads need no
//! lock.

use std::collections::VecDeque;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::history;
use crate::lighting::LightingSnapshot;

/// Persistable record of a committed match
///
/// Created at the moment the user commits a match and fully immutable
/// afterward; editing the note means recording a new entry. Plain data,
/// suitable for structured serialization by the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMatchData {
    /// The reference color the user was matching against
    pub reference: Color,
    /// The captured, compensated candidate color
    pub captured: Color,
    /// Match accuracy in [0,1] at commit time
    pub match_accuracy: f32,
    /// 3D position of the capture point, in host-app world coordinates
    pub position: [f32; 3],
    /// 2D image coordinate the color was sampled at
    pub image_coordinate: [f32; 2],
    /// Commit time
    pub timestamp: SystemTime,
    /// Host-app session identifier
    pub session_id: String,
    /// Free-text user note
    pub note: String,
    /// Lighting state at capture time
    pub lighting: LightingSnapshot,
}

/// Aggregate statistics over the current history contents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryStatistics {
    pub count: usize,
    pub mean_accuracy: f32,
}

/// Bounded, insertion-ordered store of match records
#[derive(Debug, Clone)]
pub struct MatchHistory {
    entries: VecDeque<ColorMatchData>,
    capacity: usize,
}

impl Default for MatchHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchHistory {
    /// Create a history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(history::MAX_ENTRIES)
    }

    /// Create a history with a custom capacity (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry, evicting the oldest when over capacity
    ///
    /// Duplicate entries are stored as-is; deduplication is not this store's
    /// job. The capacity invariant holds after every call.
    pub fn record(&mut self, entry: ColorMatchData) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Snapshot of all entries in insertion order
    pub fn history(&self) -> Vec<ColorMatchData> {
        self.entries.iter().cloned().collect()
    }

    /// Iterate entries in insertion order without copying
    pub fn iter(&self) -> impl Iterator<Item = &ColorMatchData> {
        self.entries.iter()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Count and arithmetic mean accuracy over current entries
    ///
    /// An empty history yields count 0 and a zero mean, not an error.
    pub fn statistics(&self) -> HistoryStatistics {
        if self.entries.is_empty() {
            return HistoryStatistics {
                count: 0,
                mean_accuracy: 0.0,
            };
        }
        let sum: f32 = self.entries.iter().map(|e| e.match_accuracy).sum();
        HistoryStatistics {
            count: self.entries.len(),
            mean_accuracy: sum / self.entries.len() as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::LightingCondition;

    fn entry(accuracy: f32, note: &str) -> ColorMatchData {
        ColorMatchData {
            reference: Color::new(1.0, 0.0, 0.0),
            captured: Color::new(0.9, 0.05, 0.05),
            match_accuracy: accuracy,
            position: [0.0, 1.5, -0.5],
            image_coordinate: [320.0, 240.0],
            timestamp: SystemTime::UNIX_EPOCH,
            session_id: "session-1".to_string(),
            note: note.to_string(),
            lighting: LightingSnapshot {
                ambient_level: 0.5,
                condition: LightingCondition::Mixed,
            },
        }
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut store = MatchHistory::new();
        store.record(entry(0.9, "first"));
        store.record(entry(0.8, "second"));
        store.record(entry(0.7, "third"));

        let history = store.history();
        assert_eq!(history[0].note, "first");
        assert_eq!(history[2].note, "third");
    }

    #[test]
    fn test_fifo_eviction_at_capacity() {
        let mut store = MatchHistory::new();
        for i in 0..105 {
            store.record(entry(0.5, &format!("entry-{}", i)));
        }

        assert_eq!(store.len(), 100);
        let history = store.history();
        // The 5 oldest entries are gone, content-verified
        assert_eq!(history[0].note, "entry-5");
        assert_eq!(history[99].note, "entry-104");
        assert!(!history.iter().any(|e| e.note == "entry-0"));
        assert!(!history.iter().any(|e| e.note == "entry-4"));
    }

    #[test]
    fn test_duplicates_stored_verbatim() {
        let mut store = MatchHistory::new();
        let e = entry(0.9, "dup");
        store.record(e.clone());
        store.record(e);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_statistics_mean_accuracy() {
        let mut store = MatchHistory::new();
        store.record(entry(0.8, "a"));
        store.record(entry(0.6, "b"));

        let stats = store.statistics();
        assert_eq!(stats.count, 2);
        assert!((stats.mean_accuracy - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_statistics_empty_history() {
        let store = MatchHistory::new();
        let stats = store.statistics();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean_accuracy, 0.0);
    }

    #[test]
    fn test_clear() {
        let mut store = MatchHistory::new();
        store.record(entry(0.9, "a"));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.statistics().count, 0);
    }

    #[test]
    fn test_custom_capacity() {
        let mut store = MatchHistory::with_capacity(2);
        store.record(entry(0.9, "a"));
        store.record(entry(0.9, "b"));
        store.record(entry(0.9, "c"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.history()[0].note, "b");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let e = entry(0.85, "kitchen wall");
        let json = serde_json::to_string(&e).unwrap();
        let back: ColorMatchData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
