use std::collections::VecDeque;

use serde::Serialize;

use crate::models::ScoreEntry;
use crate::scorer::constants::HISTORY_CAPACITY;

/// Superseded results, most recent first, never longer than `HISTORY_CAPACITY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: VecDeque<ScoreEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `entry` at the front. Returns the entry pushed off the back, if any.
    pub fn push(&mut self, entry: ScoreEntry) -> Option<ScoreEntry> {
        self.entries.push_front(entry);
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<ScoreEntry> {
        self.entries.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
