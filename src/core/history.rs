//! Rolling history of completed calculations.
//!
//! Each successful evaluation produces an immutable [`HistoryEntry`]. The
//! [`History`] keeps the most recent entries, newest first, and drops the
//! oldest once its capacity is exceeded.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use super::number::format_number;

/// Number of entries a history keeps unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Record of a single completed calculation.
///
/// # Example
///
/// ```rust
/// use calcbook::core::HistoryEntry;
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     expression: "3 + 4".to_string(),
///     result: 7.0,
///     timestamp: Utc::now(),
/// };
///
/// assert_eq!(entry.to_string(), "3 + 4 = 7");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The evaluated expression, without the trailing `=`
    pub expression: String,
    /// The computed value
    pub result: f64,
    /// When the calculation was committed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creation time rendered in the local time zone.
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, format_number(self.result))
    }
}

/// Bounded, newest-first sequence of history entries.
///
/// Like the session state, history is treated as a value: [`record`]
/// returns a new history with the entry added and leaves `self` untouched.
///
/// [`record`]: History::record
///
/// # Example
///
/// ```rust
/// use calcbook::core::{History, HistoryEntry};
/// use chrono::Utc;
///
/// let history = History::with_capacity(2);
/// let history = history.record(HistoryEntry {
///     expression: "1 + 1".to_string(),
///     result: 2.0,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(HistoryEntry {
///     expression: "2 * 3".to_string(),
///     result: 6.0,
///     timestamp: Utc::now(),
/// });
/// let history = history.record(HistoryEntry {
///     expression: "6 - 1".to_string(),
///     result: 5.0,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().map(|e| e.result), Some(5.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHistory")]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

/// Wire shape of [`History`]; converting it enforces the capacity bound.
#[derive(Deserialize)]
struct RawHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl From<RawHistory> for History {
    fn from(raw: RawHistory) -> Self {
        let mut entries = raw.entries;
        entries.truncate(raw.capacity);
        Self {
            entries,
            capacity: raw.capacity,
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history holding up to ten entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding up to `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Record an entry at the front, returning a new history.
    ///
    /// When the new length exceeds the capacity the oldest entry is
    /// evicted.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push_front(entry);
        entries.truncate(self.capacity);
        Self {
            entries,
            capacity: self.capacity,
        }
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries as a vector of references, newest first.
    pub fn entries(&self) -> Vec<&HistoryEntry> {
        self.entries.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
