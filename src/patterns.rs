//! Compiled regex patterns and marker lists shared by the extractors.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Content Identification
// =============================================================================

/// Class substrings marking the element that holds an article body.
pub const CONTENT_INDICATORS: &[&str] = &[
    "markdown-body",
    "article-body",
    "article__body",
    "article-content",
    "story-body",
    "story-content",
    "post-content",
    "post-body",
    "entry-content",
    "content-body",
];

/// `id` values tried, in order, for the main content container.
pub const CONTENT_IDS: &[&str] = &["content", "main-content", "main"];

/// Tags that may carry a content `id`. Headings sharing the id never match.
pub const CONTAINER_TAGS: &[&str] = &["div", "section", "article", "main", "aside"];

/// Page chrome extracted as navigation sections.
pub const NAVIGATION_TAGS: &[&str] = &["nav", "header", "footer", "aside", "menu"];

/// Class substrings marking advertising or sponsored blocks.
pub const AD_MARKERS: &[&str] = &["sponsored", "ad-", "promo", "advertisement"];

/// Class substrings marking bylines.
pub const AUTHOR_MARKERS: &[&str] = &["author", "byline"];

// =============================================================================
// Text Patterns
// =============================================================================

/// Search-result numbering such as `"12. Title"` or `"3) Title"`.
///
/// Capped at three digits so a leading year ("2025 Budget ...") never
/// matches.
pub static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d{1,3}[.)]\s+\S").expect("NUMBERED_ITEM regex"));

/// ISO calendar date prefix `YYYY-MM-DD`.
pub static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("ISO_DATE regex"));

/// Leading "By " of a byline.
pub static BYLINE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*by\s+").expect("BYLINE_PREFIX regex"));

/// Comment counts in forum metadata rows ("12 comments", "discuss").
pub static COMMENT_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+\s*comments?|discuss)").expect("COMMENT_COUNT regex")
});

/// Score text in forum metadata rows ("143 points").
pub static SCORE_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d+\s+points?$").expect("SCORE_TEXT regex"));

/// Whether `text` looks like search-result numbering rather than a headline.
#[must_use]
pub fn is_numbered_item(text: &str) -> bool {
    NUMBERED_ITEM.is_match(text)
}

/// Whether a lowercased class string carries an advertising marker.
#[must_use]
pub fn is_ad_class(class: &str) -> bool {
    AD_MARKERS.iter().any(|m| class.contains(m))
}

/// Whether a lowercased class string names a content body.
#[must_use]
pub fn is_content_class(class: &str) -> bool {
    CONTENT_INDICATORS.iter().any(|m| class.contains(m))
}
