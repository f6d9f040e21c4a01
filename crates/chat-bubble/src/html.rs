//! Bubble markup adapter
//!
//! Wraps a render directive in the host component's bubble structure: a
//! flex row justified by sender side, a max-width box, and the body span.
//! Layout and painting stay the host's job; the class names here are the
//! contract it styles against.

use pulldown_cmark_escape::{escape_href, escape_html};
use serde::{Deserialize, Serialize};

use crate::directive::{build_directive, RenderDirective, RenderKind};
use crate::markdown::MarkdownConfig;
use crate::message::{ChatMessageView, Position};

/// A fully rendered message bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bubble {
    /// Resolved alignment: sender side, unless the directive overrides it.
    pub alignment: Position,
    /// The bubble markup, ready to insert into the host document.
    pub html: String,
    /// The underlying directive, for hosts that paint natively instead.
    pub directive: RenderDirective,
}

/// Render one message into its bubble markup.
pub fn render_bubble(view: &ChatMessageView, config: &MarkdownConfig) -> Bubble {
    let directive = build_directive(&view.text, config);
    let alignment = directive.alignment(view.position);

    let (justify, align) = match alignment {
        Position::Right => ("justify-content-end", "text-right"),
        Position::Left => ("justify-content-start", "text-left"),
    };

    let mut html = String::with_capacity(view.text.len() + 256);
    html.push_str(&format!(r#"<div class="w-100 my-1 d-flex {justify}">"#));
    html.push_str(
        r#"<div class="bg-light rounded border border-gray p-2" style="max-width:70%">"#,
    );
    html.push_str(&format!(
        r#"<span class="d-block text-secondary {align}" style="white-space:pre-wrap">"#
    ));

    // Writing into a String cannot fail
    match directive.kind {
        RenderKind::PlainText => {
            let _ = escape_html(&mut html, &directive.content);
        }
        RenderKind::Link => {
            html.push_str(r#"<a href=""#);
            let _ = escape_href(&mut html, &directive.content);
            html.push_str(r#"" target="_blank" rel="noopener noreferrer">"#);
            let _ = escape_html(&mut html, &directive.content);
            html.push_str("</a>");
        }
        // Already converted HTML - inserted as raw markup.
        RenderKind::CodeBlock => {
            html.push_str(&directive.content);
        }
    }

    html.push_str("</span></div></div>");

    Bubble {
        alignment,
        html,
        directive,
    }
}
