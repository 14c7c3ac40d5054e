//! Utility modules for the Markdown Editor
//!
//! Helpers shared by the browser-facing layer.

pub mod offsets;

// Re-export commonly used functions
pub use offsets::*;
