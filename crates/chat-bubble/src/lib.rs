//! Chat message bubble formatting
//!
//! Classifies one message body as plain text, an auto-linked URL, or a
//! fenced code block, then renders the matching bubble markup. Sender
//! position picks the side the bubble sits on; code blocks always sit
//! left. Classification is a pure function of the text and never fails.
//!
//! ```
//! use chat_bubble::{render_bubble, ChatMessageView, MarkdownConfig, Position, RenderKind};
//!
//! let config = MarkdownConfig::default();
//! let view = ChatMessageView::new("https://example.com/page", Position::Right);
//! let bubble = render_bubble(&view, &config);
//!
//! assert_eq!(bubble.directive.kind, RenderKind::Link);
//! assert_eq!(bubble.alignment, Position::Right);
//! ```

mod cache;
mod classify;
mod directive;
mod highlight;
mod html;
mod markdown;
mod message;

pub use cache::BubbleCache;
pub use classify::{classify, Classification};
pub use directive::{build_directive, RenderDirective, RenderKind};
pub use highlight::highlight_html;
pub use html::{render_bubble, Bubble};
pub use markdown::{to_html, MarkdownConfig};
pub use message::{ChatMessageView, Position};
