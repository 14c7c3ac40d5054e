//! Markdown Editor WASM API
//!
//! This module provides the JavaScript-facing API for the editor.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serialization and offset conversion
//! - `editor`: The `MarkdownEditor` class bound to the page's textarea and preview

pub mod helpers;
pub mod editor;

pub use editor::MarkdownEditor;
