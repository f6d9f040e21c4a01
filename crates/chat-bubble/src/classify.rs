//! Message content classification
//!
//! Decides how a message body should be rendered: as a highlighted code
//! block, as an auto-linked URL, or as plain text. The checks run in that
//! fixed priority order and the first match wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for fenced code blocks: three backticks, optional language tag,
/// then at least one full line of content before the closing fence.
/// Searched anywhere in the string, content matched non-greedily.
static FENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```([A-Za-z0-9_+.#-]*)\n(.*?)\n```").unwrap());

/// Regex for URL-shaped text: a 2-256 character host-ish run, a dot, a
/// 2-4 letter TLD-like suffix at a word boundary, and an optional path.
/// The character classes and quantifiers are a compatibility contract with
/// the host component and must not be tightened or loosened.
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[-a-zA-Z0-9@:%_+.~#?&/=]{2,256}\.[a-z]{2,4}\b(/[-a-zA-Z0-9@:%_+.~#?&/=]*)?")
        .unwrap()
});

/// How a message body should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Contains a well-formed fenced block; render the whole message as
    /// markdown with the code highlighted. `lang` is the fence tag, if any.
    CodeBlock { lang: Option<String> },
    /// Contains something URL-shaped; render the whole message as a link.
    Link,
    /// Neither of the above; render literally.
    PlainText,
}

/// Classify a message body.
///
/// Pure and total: any string, including the empty one, classifies without
/// error. Malformed input (unbalanced fences, truncated URLs) simply falls
/// through to the next tier.
pub fn classify(text: &str) -> Classification {
    if let Some(caps) = FENCE_REGEX.captures(text) {
        let lang = caps
            .get(1)
            .map(|m| m.as_str())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string);
        return Classification::CodeBlock { lang };
    }

    if URL_REGEX.is_match(text) {
        return Classification::Link;
    }

    Classification::PlainText
}
