//! Text buffer implementation
//!
//! Pure text storage with cursor-aware Markdown edits. No knowledge of
//! rendering or history.

use super::cursor::Selection;
use serde::{Deserialize, Serialize};

/// Immutable (text, cursor) pair stored in the history log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferState {
    pub text: String,
    /// Byte offset into `text`
    pub cursor: usize,
}

impl BufferState {
    pub fn new(text: impl Into<String>, cursor: usize) -> Self {
        Self {
            text: text.into(),
            cursor,
        }
    }
}

/// Live editing buffer: the working text plus the current selection
///
/// All edit operations expect offsets inside `[0, len]` that fall on char
/// boundaries. Callers are responsible for clamping; out-of-range offsets
/// panic on slicing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    selection: Selection,
}

impl TextBuffer {
    /// Create a buffer from a string, cursor at the start
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: Selection::collapsed(0),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The text cursor: start of the selection, like a textarea's
    /// `selectionStart`
    pub fn cursor(&self) -> usize {
        self.selection.start()
    }

    /// Move the selection without touching the text
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Surround the current selection with `before` and `after`
    ///
    /// The cursor lands after the wrapped span, before the `after` marker.
    /// Returns the new cursor.
    pub fn wrap_selection(&mut self, before: &str, after: &str) -> usize {
        let (start, end) = (self.selection.start(), self.selection.end());

        let mut text = String::with_capacity(self.text.len() + before.len() + after.len());
        text.push_str(&self.text[..start]);
        text.push_str(before);
        text.push_str(&self.text[start..end]);
        text.push_str(after);
        text.push_str(&self.text[end..]);

        let cursor = start + before.len() + (end - start);
        self.text = text;
        self.selection = Selection::collapsed(cursor);
        cursor
    }

    /// Insert `prefix` at the start of the line holding the selection start
    ///
    /// Returns the new cursor (just after the prefix).
    pub fn insert_line_prefix(&mut self, prefix: &str) -> usize {
        let line_start = line_start(&self.text, self.selection.start());
        self.text.insert_str(line_start, prefix);

        let cursor = line_start + prefix.len();
        self.selection = Selection::collapsed(cursor);
        cursor
    }

    /// Replace the text wholesale and place the cursor explicitly
    pub fn replace_all(&mut self, text: impl Into<String>, cursor: usize) {
        self.text = text.into();
        self.selection = Selection::collapsed(cursor);
    }

    /// Independent copy of the current (text, cursor)
    pub fn snapshot(&self) -> BufferState {
        BufferState::new(self.text.clone(), self.cursor())
    }

    /// Write a history snapshot back into the live buffer
    pub fn restore(&mut self, state: &BufferState) {
        self.text.clone_from(&state.text);
        self.selection = Selection::collapsed(state.cursor);
    }
}

/// Byte offset of the start of the line containing `offset`
///
/// That is the byte after the nearest preceding `\n`, or 0.
pub fn line_start(text: &str, offset: usize) -> usize {
    text[..offset].rfind('\n').map_or(0, |i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_selection() {
        let mut buffer = TextBuffer::from_text("hello");
        buffer.set_selection(Selection::new(1, 4));

        let cursor = buffer.wrap_selection("**", "**");
        assert_eq!(buffer.text(), "h**ell**o");
        assert_eq!(cursor, 7);
        assert!(buffer.selection().is_collapsed());
    }

    #[test]
    fn test_wrap_insertion_point() {
        let mut buffer = TextBuffer::from_text("ab");
        buffer.set_selection(Selection::collapsed(1));

        let cursor = buffer.wrap_selection("[", "](url)");
        assert_eq!(buffer.text(), "a[](url)b");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn test_wrap_backward_selection() {
        let mut buffer = TextBuffer::from_text("hello");
        buffer.set_selection(Selection::new(4, 1));

        buffer.wrap_selection("`", "`");
        assert_eq!(buffer.text(), "h`ell`o");
        assert_eq!(buffer.cursor(), 5);
    }

    #[test]
    fn test_insert_line_prefix() {
        let mut buffer = TextBuffer::from_text("foo\nbar");
        buffer.set_selection(Selection::collapsed(5));

        let cursor = buffer.insert_line_prefix("- ");
        assert_eq!(buffer.text(), "foo\n- bar");
        assert_eq!(cursor, 6);
    }

    #[test]
    fn test_insert_line_prefix_first_line() {
        let mut buffer = TextBuffer::from_text("title\nbody");
        buffer.set_selection(Selection::collapsed(3));

        buffer.insert_line_prefix("## ");
        assert_eq!(buffer.text(), "## title\nbody");
        assert_eq!(buffer.cursor(), 3);
    }

    #[test]
    fn test_insert_line_prefix_right_after_newline() {
        let mut buffer = TextBuffer::from_text("a\n\nb");
        buffer.set_selection(Selection::collapsed(2));

        buffer.insert_line_prefix("- ");
        assert_eq!(buffer.text(), "a\n- \nb");
        assert_eq!(buffer.cursor(), 4);
    }

    #[test]
    fn test_backward_selection_cursor_is_start() {
        let mut buffer = TextBuffer::from_text("hello");
        buffer.set_selection(Selection::new(4, 1));
        assert_eq!(buffer.cursor(), 1);
        assert_eq!(buffer.snapshot(), BufferState::new("hello", 1));
    }

    #[test]
    fn test_line_start() {
        assert_eq!(line_start("abc", 2), 0);
        assert_eq!(line_start("ab\ncd", 3), 3);
        assert_eq!(line_start("ab\ncd", 2), 0);
        assert_eq!(line_start("", 0), 0);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut buffer = TextBuffer::from_text("abc");
        let snapshot = buffer.snapshot();

        buffer.replace_all("xyz", 3);
        assert_eq!(snapshot, BufferState::new("abc", 0));

        buffer.restore(&snapshot);
        assert_eq!(buffer.text(), "abc");
        assert_eq!(buffer.cursor(), 0);
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut buffer = TextBuffer::from_text("é🚀x");
        // "é" is 2 bytes, "🚀" is 4 bytes
        buffer.set_selection(Selection::new(2, 6));

        buffer.wrap_selection("*", "*");
        assert_eq!(buffer.text(), "é*🚀*x");
        assert_eq!(buffer.cursor(), 7);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_selection_panics() {
        let mut buffer = TextBuffer::from_text("abc");
        buffer.set_selection(Selection::new(1, 10));
        buffer.wrap_selection("*", "*");
    }
}
