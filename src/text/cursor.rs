//! Selection management for text editing
//!
//! Offsets are byte offsets into the UTF-8 buffer text.

use serde::{Deserialize, Serialize};

/// Selection state (anchor + head)
///
/// A collapsed selection (anchor == head) is a plain insertion point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Selection anchor (where selection started)
    pub anchor: usize,
    /// Selection head (current cursor position)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor only, no selection)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Check if selection is collapsed (anchor == head)
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.head
    }

    /// Get the start of the selection (min of anchor and head)
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Get the end of the selection (max of anchor and head)
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }
}
