//! Render directives
//!
//! The output of classification: what to paint, with what content, and
//! whether the content overrides the sender-side alignment.

use serde::{Deserialize, Serialize};

use crate::classify::{classify, Classification};
use crate::markdown::{self, MarkdownConfig};
use crate::message::Position;

/// The mutually exclusive render modes for a message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderKind {
    /// Literal text, whitespace preserved, no markup interpretation.
    PlainText,
    /// The whole message rendered as one anchor, opened in a new
    /// browsing context.
    Link,
    /// Markdown-converted HTML with highlighted code, raw markup.
    CodeBlock,
}

/// What the host UI should paint for one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderDirective {
    pub kind: RenderKind,
    /// Original text for `PlainText` and `Link`; converted HTML for
    /// `CodeBlock`.
    pub content: String,
    /// Set when the content dictates alignment regardless of sender side.
    pub alignment_override: Option<Position>,
}

impl RenderDirective {
    /// Resolve the final alignment for a sender position. The content
    /// override wins; code blocks are always left-aligned.
    pub fn alignment(&self, position: Position) -> Position {
        self.alignment_override.unwrap_or(position)
    }

    /// The anchor target when `kind` is `Link`.
    pub fn href(&self) -> Option<&str> {
        match self.kind {
            RenderKind::Link => Some(&self.content),
            _ => None,
        }
    }
}

/// Classify a message body and build its render directive.
///
/// Pure given the converter configuration: equal inputs always produce
/// equal directives.
pub fn build_directive(text: &str, config: &MarkdownConfig) -> RenderDirective {
    match classify(text) {
        Classification::CodeBlock { .. } => RenderDirective {
            kind: RenderKind::CodeBlock,
            content: markdown::to_html(text, config),
            alignment_override: Some(Position::Left),
        },
        // The entire message becomes both the anchor target and its label.
        // That matches the host component's historical behavior for any
        // message containing a URL-shaped substring, and hosts depend on it.
        Classification::Link => RenderDirective {
            kind: RenderKind::Link,
            content: text.to_string(),
            alignment_override: None,
        },
        Classification::PlainText => RenderDirective {
            kind: RenderKind::PlainText,
            content: text.to_string(),
            alignment_override: None,
        },
    }
}
