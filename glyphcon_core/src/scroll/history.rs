//! Bounded history of console lines.
//!
//! Index 0 is the most recently written line. Pushing past capacity evicts
//! from the old end. Capacity follows the grid's row count, but lowering it
//! does not drop anything until the next push, so a shrink-then-grow resize
//! brings old lines back.

use std::collections::VecDeque;

/// Text lines, newest first.
#[derive(Debug, Clone, Default)]
pub struct LineHistory {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a line as the newest entry, evicting the oldest beyond capacity.
    pub(super) fn push(&mut self, line: String) {
        self.lines.push_front(line);
        self.lines.truncate(self.capacity);
    }

    pub(super) fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    pub(super) fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line by recency (0 = newest).
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Newest to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// The `n` most recent lines, oldest of them first.
    pub(super) fn recent_oldest_first(&self, n: usize) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().take(n).rev().map(String::as_str)
    }
}
