//! Toolbar and keyboard command table
//!
//! Maps the editor's buttons and shortcuts onto the buffer operations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorCommand {
    Bold,
    Italic,
    Heading,
    Link,
    Code,
    List,
    Undo,
    Redo,
}

/// What a command does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Wrap {
        before: &'static str,
        after: &'static str,
    },
    LinePrefix(&'static str),
    Undo,
    Redo,
}

impl EditorCommand {
    pub const ALL: [EditorCommand; 8] = [
        EditorCommand::Bold,
        EditorCommand::Italic,
        EditorCommand::Heading,
        EditorCommand::Link,
        EditorCommand::Code,
        EditorCommand::List,
        EditorCommand::Undo,
        EditorCommand::Redo,
    ];

    pub fn action(self) -> CommandAction {
        match self {
            EditorCommand::Bold => CommandAction::Wrap {
                before: "**",
                after: "**",
            },
            EditorCommand::Italic => CommandAction::Wrap {
                before: "*",
                after: "*",
            },
            EditorCommand::Link => CommandAction::Wrap {
                before: "[",
                after: "](url)",
            },
            EditorCommand::Code => CommandAction::Wrap {
                before: "`",
                after: "`",
            },
            EditorCommand::Heading => CommandAction::LinePrefix("## "),
            EditorCommand::List => CommandAction::LinePrefix("- "),
            EditorCommand::Undo => CommandAction::Undo,
            EditorCommand::Redo => CommandAction::Redo,
        }
    }

    /// Toolbar button name
    pub fn name(self) -> &'static str {
        match self {
            EditorCommand::Bold => "bold",
            EditorCommand::Italic => "italic",
            EditorCommand::Heading => "heading",
            EditorCommand::Link => "link",
            EditorCommand::Code => "code",
            EditorCommand::List => "list",
            EditorCommand::Undo => "undo",
            EditorCommand::Redo => "redo",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(name))
    }

    /// Resolve a keydown event
    ///
    /// `key` is the DOM `KeyboardEvent.key` value and `ctrl` means Ctrl or
    /// Meta was held. Clipboard shortcuts are left to the browser.
    pub fn from_shortcut(key: &str, ctrl: bool, shift: bool) -> Option<Self> {
        if !ctrl {
            return None;
        }
        match key {
            "z" => Some(EditorCommand::Undo),
            "y" => Some(EditorCommand::Redo),
            "Z" if shift => Some(EditorCommand::Redo),
            "b" => Some(EditorCommand::Bold),
            "i" => Some(EditorCommand::Italic),
            _ => None,
        }
    }
}
