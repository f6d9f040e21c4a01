//! Syntax highlighting using syntect

use once_cell::sync::Lazy;
use pulldown_cmark_escape::escape_html;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Global syntax set - loaded once at startup
static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Global theme set for syntect
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Theme used for highlighted HTML output
const HIGHLIGHT_THEME: &str = "base16-ocean.dark";

/// Highlight a code block as HTML, auto-detecting the syntax from the
/// fence tag. Unknown or missing tags highlight as plain text.
///
/// Total: a highlighter failure logs a warning and degrades to an escaped
/// `<pre><code>` block instead of surfacing an error.
pub fn highlight_html(code: &str, lang: Option<&str>) -> String {
    // Try to find syntax by token or extension
    let syntax = lang
        .and_then(|tag| {
            SYNTAX_SET
                .find_syntax_by_token(tag)
                .or_else(|| SYNTAX_SET.find_syntax_by_extension(tag))
        })
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let theme = &THEME_SET.themes[HIGHLIGHT_THEME];

    match highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme) {
        Ok(html) => html,
        Err(err) => {
            tracing::warn!(%err, "syntax highlighting failed, emitting plain code block");
            plain_code_block(code)
        }
    }
}

/// Escaped, unstyled fallback when the highlighter cannot run.
fn plain_code_block(code: &str) -> String {
    let mut out = String::with_capacity(code.len() + 24);
    out.push_str("<pre><code>");
    // Writing into a String cannot fail
    let _ = escape_html(&mut out, code);
    out.push_str("</code></pre>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_language_produces_styled_pre() {
        let html = highlight_html("fn main() {}", Some("rust"));
        assert!(html.starts_with("<pre"));
        assert!(html.contains("main"));
    }

    #[test]
    fn unknown_language_still_highlights_as_plain_text() {
        let html = highlight_html("whatever content", Some("no-such-lang"));
        assert!(html.starts_with("<pre"));
        assert!(html.contains("whatever content"));
    }

    #[test]
    fn missing_language_uses_plain_text_syntax() {
        let html = highlight_html("a < b", None);
        assert!(html.starts_with("<pre"));
        // The raw angle bracket must not survive into the markup.
        assert!(!html.contains("a < b"));
    }

    #[test]
    fn fallback_block_escapes_markup() {
        let html = plain_code_block("<script>alert(1)</script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
