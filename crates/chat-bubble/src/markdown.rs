//! Markdown to HTML conversion using pulldown-cmark
//!
//! Fenced code blocks are intercepted in the event stream and replaced with
//! highlighted HTML; everything else goes through the stock HTML writer.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

use crate::highlight;

/// Converter configuration. Built once at startup and treated as immutable
/// for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// GitHub-flavored extensions (strikethrough, task lists).
    pub gfm: bool,
    /// Pipe table support.
    pub tables: bool,
    /// Render a single newline as a hard line break.
    pub hard_line_breaks: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            tables: true,
            hard_line_breaks: true,
        }
    }
}

impl MarkdownConfig {
    fn options(&self) -> Options {
        let mut options = Options::empty();
        if self.gfm {
            options |= Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
        }
        if self.tables {
            options |= Options::ENABLE_TABLES;
        }
        options
    }
}

/// Convert markdown text to HTML.
///
/// Fenced code blocks come out as syntect-highlighted `<pre>` markup with
/// the language auto-detected from the fence tag.
pub fn to_html(text: &str, config: &MarkdownConfig) -> String {
    let parser = Parser::new_ext(text, config.options());

    let mut events: Vec<Event<'_>> = Vec::new();
    let mut code = String::new();
    let mut lang: Option<String> = None;
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                in_code_block = true;
                lang = match kind {
                    CodeBlockKind::Fenced(tag) if !tag.is_empty() => Some(tag.to_string()),
                    _ => None,
                };
                code.clear();
            }
            Event::Text(text) if in_code_block => {
                code.push_str(&text);
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                let highlighted = highlight::highlight_html(&code, lang.as_deref());
                events.push(Event::Html(highlighted.into()));
            }
            Event::SoftBreak if config.hard_line_breaks => {
                events.push(Event::HardBreak);
            }
            other => {
                events.push(other);
            }
        }
    }

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_render() {
        let html = to_html("hello **world**", &MarkdownConfig::default());
        assert!(html.contains("<p>"));
        assert!(html.contains("<strong>world</strong>"));
    }

    #[test]
    fn single_newline_becomes_hard_break() {
        let html = to_html("line one\nline two", &MarkdownConfig::default());
        assert!(html.contains("<br"));
    }

    #[test]
    fn soft_breaks_survive_when_hard_breaks_are_off() {
        let config = MarkdownConfig {
            hard_line_breaks: false,
            ..MarkdownConfig::default()
        };
        let html = to_html("line one\nline two", &config);
        assert!(!html.contains("<br"));
    }

    #[test]
    fn tables_render_when_enabled() {
        let table = "| a | b |\n| - | - |\n| 1 | 2 |";
        let html = to_html(table, &MarkdownConfig::default());
        assert!(html.contains("<table>"));

        let config = MarkdownConfig {
            tables: false,
            ..MarkdownConfig::default()
        };
        let html = to_html(table, &config);
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn strikethrough_renders_with_gfm() {
        let html = to_html("~~gone~~", &MarkdownConfig::default());
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn fenced_block_comes_out_highlighted() {
        let html = to_html("```js\nconsole.log(1)\n```", &MarkdownConfig::default());
        assert!(html.contains("<pre"));
        assert!(html.contains("console"));
        // The stock writer's unstyled wrapper is replaced entirely.
        assert!(!html.contains("<code class="));
    }

    #[test]
    fn text_around_a_fence_still_renders() {
        let html = to_html(
            "before\n\n```rust\nfn main() {}\n```\n\nafter",
            &MarkdownConfig::default(),
        );
        assert!(html.contains("before"));
        assert!(html.contains("<pre"));
        assert!(html.contains("after"));
    }

    #[test]
    fn empty_input_renders_to_empty_output() {
        assert_eq!(to_html("", &MarkdownConfig::default()), "");
    }
}
