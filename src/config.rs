//! Editor configuration
//!
//! Every field has a default, so hosts only pass what they want to change,
//! either as a JS object or as JSON.

use serde::{Deserialize, Serialize};

use crate::error::EditorError;
use crate::undo::DEFAULT_MAX_HISTORY;

/// Quiet period before the preview re-renders
pub const DEFAULT_RENDER_DELAY_MS: u32 = 150;

/// Quiet period before an edit is snapshotted into history
pub const DEFAULT_HISTORY_DELAY_MS: u32 = 100;

/// Content loaded into a fresh editor
pub const SAMPLE_DOCUMENT: &str = r#"# Welcome to the Markdown Editor

This is a **live Markdown editor** with a rendered preview.

## Features

- Real-time preview
- Syntax highlighted code blocks
- Save/Load .md files
- Keyboard shortcuts (Ctrl+B, Ctrl+I)
- Undo/Redo (Ctrl+Z, Ctrl+Y)

## Code Example

```rust
fn main() {
    println!("Hello from the editor!");
}
```

## Try It Out

Select text and use the toolbar buttons, or just type. The preview follows along.
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub render_delay_ms: u32,
    pub history_delay_ms: u32,
    /// Maximum number of history snapshots
    pub history_limit: usize,
    pub initial_text: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            render_delay_ms: DEFAULT_RENDER_DELAY_MS,
            history_delay_ms: DEFAULT_HISTORY_DELAY_MS,
            history_limit: DEFAULT_MAX_HISTORY,
            initial_text: SAMPLE_DOCUMENT.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EditorError> {
        if self.history_limit == 0 {
            return Err(EditorError::Config("historyLimit must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.render_delay_ms, 150);
        assert_eq!(config.history_delay_ms, 100);
        assert_eq!(config.history_limit, 100);
        assert!(config.initial_text.starts_with("# Welcome"));
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{ "renderDelayMs": 50, "initialText": "" }"#;
        let config = EditorConfig::from_json(json).unwrap();
        assert_eq!(config.render_delay_ms, 50);
        assert_eq!(config.history_delay_ms, DEFAULT_HISTORY_DELAY_MS);
        assert_eq!(config.initial_text, "");
    }

    #[test]
    fn test_invalid_json() {
        let err = EditorConfig::from_json(r#"{ "historyLimit": "lots" }"#).unwrap_err();
        assert!(matches!(err, EditorError::ConfigJson(_)));
    }

    #[test]
    fn test_zero_history_limit_rejected() {
        let err = EditorConfig::from_json(r#"{ "historyLimit": 0 }"#).unwrap_err();
        assert!(matches!(err, EditorError::Config(_)));
    }
}
