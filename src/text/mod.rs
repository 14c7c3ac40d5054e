//! Text Editor Core
//!
//! This module provides pure text editing functionality with no knowledge
//! of rendering or history. It holds the live buffer the rest of the editor
//! is built around.
//!
//! ## Modules
//!
//! - `buffer`: Text storage, snapshots and cursor-aware Markdown edits
//! - `cursor`: Selection management (byte offsets)

pub mod buffer;
pub mod cursor;

// Re-exports for convenience
pub use buffer::{line_start, BufferState, TextBuffer};
pub use cursor::Selection;
