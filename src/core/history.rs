//! Bounded log of completed calculations.
//!
//! The log is immutable: recording returns a new log with the entry at
//! the front, following the same value semantics as the rest of the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of entries kept when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Record of a single completed evaluation.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::HistoryItem;
/// use chrono::Utc;
///
/// let item = HistoryItem {
///     calculation: "5 + 3".to_string(),
///     result: "8".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(item.result, "8");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Human readable `"a op b"`
    pub calculation: String,
    /// Result text exactly as it was shown
    pub result: String,
    /// When the evaluation completed
    pub timestamp: DateTime<Utc>,
}

/// Newest-first log of calculations, capped at a fixed capacity.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{CalculationHistory, HistoryItem};
/// use chrono::Utc;
///
/// let history = CalculationHistory::with_capacity(2);
/// let item = |calc: &str, result: &str| HistoryItem {
///     calculation: calc.to_string(),
///     result: result.to_string(),
///     timestamp: Utc::now(),
/// };
///
/// let history = history
///     .record(item("1 + 1", "2"))
///     .record(item("2 + 2", "4"))
///     .record(item("3 + 3", "6"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().result, "6");
/// assert_eq!(history.get(1).unwrap().result, "4");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    capacity: usize,
    items: Vec<HistoryItem>,
}

impl Default for CalculationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationHistory {
    /// Create an empty log with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty log holding at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one; configuration validation
    /// rejects it before it gets here.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            items: Vec::new(),
        }
    }

    /// Record an entry, returning a new log.
    ///
    /// The entry is inserted at the front. When the log is full the
    /// oldest entry falls off the back. `self` is left untouched.
    ///
    /// A log deserialized with a capacity of zero still keeps the newest
    /// entry, matching [`CalculationHistory::with_capacity`].
    pub fn record(&self, item: HistoryItem) -> Self {
        let keep = self.capacity.max(1);
        let mut items = Vec::with_capacity(keep);
        items.push(item);
        items.extend(self.items.iter().take(keep - 1).cloned());
        Self {
            capacity: self.capacity,
            items,
        }
    }

    /// Entries, newest first.
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn latest(&self) -> Option<&HistoryItem> {
        self.items.first()
    }

    /// Entry at `index`, where `0` is the most recent.
    pub fn get(&self, index: usize) -> Option<&HistoryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
