//! Markdown Editor WASM Module
//!
//! Editing core of the in-browser Markdown editor: the live text buffer,
//! a bounded linear undo/redo history, and the debounced render pipeline
//! that keeps the preview in sync.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod schedule;
pub mod session;
pub mod text;
pub mod undo;
pub mod utils;

// Re-export commonly used types
pub use api::MarkdownEditor;
pub use commands::EditorCommand;
pub use config::EditorConfig;
pub use error::EditorError;
pub use session::{EditSession, Fired, SessionState};
pub use text::{BufferState, Selection, TextBuffer};
pub use undo::HistoryManager;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already initialized: {}", e)));
    }

    log::info!("Markdown Editor WASM module initialized");
}
