//! Tag catalogs driving the document builder.
//!
//! Arrays are kept for iteration and documentation; the `HashSet`s back the
//! `is_*` lookups used on every element.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists ===

/// Elements dropped with everything below them.
pub static SKIP_TAGS: [&str; 22] = [
    "script", "style", "noscript", "template", "svg", "iframe", "head", "title", "meta",
    "link", "object", "embed", "canvas", "audio", "video", "select", "textarea", "option",
    "button", "dialog", "map", "base",
];

/// Heading tags: h1-h6.
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Elements that start a new block. Inline walks pad them with spaces so
/// words from neighbouring blocks do not run together.
pub static BLOCK_TAGS: [&str; 37] = [
    "address", "article", "aside", "blockquote", "details", "div", "dl", "dd", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr",
];

/// Phrasing elements that may join free text in one implicit paragraph.
pub static PHRASING_TAGS: [&str; 33] = [
    "a", "abbr", "b", "bdi", "br", "cite", "code", "del", "dfn", "em", "font", "i", "img",
    "ins", "kbd", "label", "mark", "math", "nobr", "q", "s", "samp", "small", "span",
    "strike", "strong", "sub", "sup", "time", "tt", "u", "var", "wbr",
];

/// Block descendants that turn a link into a card.
pub static CARD_BLOCK_TAGS: [&str; 14] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "div", "section", "article", "ul", "ol", "table",
    "figure",
];

/// Descendants marking a form or table cell as holding page content.
pub static CONTENT_BLOCK_TAGS: [&str; 15] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "table", "ul", "ol", "dl", "article", "form",
    "blockquote", "pre",
];

/// Monospace inline tags.
pub static CODE_TAGS: [&str; 4] = ["code", "kbd", "samp", "tt"];

/// `<input type>` values kept in the output.
pub static RETAINED_INPUT_TYPES: [&str; 3] = ["text", "search", "submit"];

// === Tag Sets ===

/// `SKIP_TAGS` as a `HashSet`
pub static SKIP_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SKIP_TAGS.into_iter().collect());

/// `BLOCK_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_TAGS.into_iter().collect());

/// `PHRASING_TAGS` as a `HashSet`
pub static PHRASING_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PHRASING_TAGS.into_iter().collect());

// === Helper Functions ===

/// Check if the element is dropped entirely
#[inline]
#[must_use]
pub fn is_skip_tag(tag: &str) -> bool {
    SKIP_TAG_SET.contains(tag)
}

/// Check if tag starts a block
#[inline]
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(tag)
}

/// Check if tag is phrasing content
#[inline]
#[must_use]
pub fn is_phrasing_tag(tag: &str) -> bool {
    PHRASING_TAG_SET.contains(tag)
}

/// Check if tag is a code-like inline
#[inline]
#[must_use]
pub fn is_code_tag(tag: &str) -> bool {
    CODE_TAGS.contains(&tag)
}

/// Check if an `<input type>` survives extraction
#[inline]
#[must_use]
pub fn is_retained_input(input_type: &str) -> bool {
    RETAINED_INPUT_TYPES.contains(&input_type)
}
