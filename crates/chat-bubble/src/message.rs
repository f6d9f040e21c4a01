//! Message view types

use serde::{Deserialize, Serialize};

/// Which side of the conversation a message sits on.
///
/// Controls alignment only - classification never looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Left,
    Right,
}

impl Position {
    /// Parse a position flag case-insensitively.
    ///
    /// Anything other than `"right"` (in any case) is `Left`, matching the
    /// lowercase-and-compare check of the host component contract.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("right") {
            Position::Right
        } else {
            Position::Left
        }
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        Position::parse(value)
    }
}

/// One message as seen by a single render pass.
///
/// Transient - rebuilt on every render, nothing is mutated or kept
/// across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageView {
    /// The message body. May be empty, may contain embedded newlines.
    pub text: String,
    /// Sender side; defaults to `Left` when the host omits it.
    #[serde(default)]
    pub position: Position,
}

impl ChatMessageView {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// Build a view from an optional position flag string.
    pub fn from_flag(text: impl Into<String>, position: Option<&str>) -> Self {
        Self {
            text: text.into(),
            position: position.map(Position::parse).unwrap_or_default(),
        }
    }
}
