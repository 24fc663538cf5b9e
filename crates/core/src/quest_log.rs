//! Quest log - bounded list of player-facing messages.

use std::collections::VecDeque;
use std::fmt;

/// One log line, stamped with the step count at the time it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub step: u64,
    pub text: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.step, self.text)
    }
}

/// Ring of the most recent entries; the oldest entry is dropped when full.
#[derive(Debug, Clone)]
pub struct QuestLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl QuestLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, step: u64, text: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            step,
            text: text.into(),
        });
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

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The newest `n` entries, oldest first.
    pub fn latest(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }
}
