use crate::text::BufferState;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default maximum number of snapshots kept in history
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Linear undo/redo log of buffer snapshots
///
/// Recording a snapshot while positioned before the tail drops the redo
/// branch. Snapshots whose text equals the current entry are ignored, so
/// cursor movement alone never creates history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryManager {
    /// Recorded snapshots, oldest first
    entries: VecDeque<BufferState>,
    /// Position in `entries`; `None` only while the log is empty
    current_index: Option<usize>,
    /// Maximum number of snapshots to keep
    max_size: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl HistoryManager {
    /// Create an empty history holding at most `max_size` snapshots
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            current_index: None,
            max_size: max_size.max(1),
        }
    }

    /// Record a snapshot
    ///
    /// Returns `false` when the text matches the current entry and nothing
    /// was recorded.
    pub fn record(&mut self, state: BufferState) -> bool {
        if self.current().is_some_and(|current| current.text == state.text) {
            return false;
        }

        // Truncate any redo history when a new snapshot is added
        match self.current_index {
            Some(index) => self.entries.truncate(index + 1),
            None => self.entries.clear(),
        }
        self.entries.push_back(state);

        // Enforce max size
        if self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
        self.current_index = Some(self.entries.len() - 1);

        log::debug!(
            "history: recorded snapshot {}/{}",
            self.entries.len(),
            self.max_size
        );
        true
    }

    /// Step back one snapshot
    ///
    /// Returns `None` at the oldest entry; the caller must leave the live
    /// buffer untouched in that case.
    pub fn undo(&mut self) -> Option<&BufferState> {
        let index = self.current_index.filter(|&index| index > 0)? - 1;
        self.current_index = Some(index);
        self.entries.get(index)
    }

    /// Step forward one snapshot
    pub fn redo(&mut self) -> Option<&BufferState> {
        let index = self.current_index? + 1;
        if index >= self.entries.len() {
            return None;
        }
        self.current_index = Some(index);
        self.entries.get(index)
    }

    /// Snapshot at the current position
    pub fn current(&self) -> Option<&BufferState> {
        self.current_index.and_then(|index| self.entries.get(index))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn entries(&self) -> impl Iterator<Item = &BufferState> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.undo_count() > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.redo_count() > 0
    }

    /// Get the number of available undo steps
    pub fn undo_count(&self) -> usize {
        self.current_index.unwrap_or(0)
    }

    /// Get the number of available redo steps
    pub fn redo_count(&self) -> usize {
        self.current_index
            .map_or(0, |index| self.entries.len() - index - 1)
    }
}
