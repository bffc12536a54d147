//! Metadata extraction module.
//!
//! Page-level fields (title, URL, language, theme color) and the shared
//! helpers used to describe story entries (byline, date, description,
//! truncation).

pub mod dom_extraction;
pub mod format;
pub mod meta_tags;
pub mod story;
pub mod theme_color;

use dom_query::Document;

use crate::Options;

pub use format::{format_date, truncate};
pub use story::{find_author, find_date, story_from_element, StoryCard};
pub use theme_color::{choose_theme_color, extract_theme_color, Rgb};

/// Page-level metadata. Missing fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub url: Option<String>,
    pub lang: Option<String>,
    pub theme_color: Option<String>,
}

/// Extract all page metadata from a document.
///
/// Each pass only fills fields the previous passes left empty:
/// 1. `Options::url`
/// 2. DOM: `<title>`, `<html lang>`, canonical link
/// 3. Meta tags: `og:title`, `og:url`, content-language
/// 4. DOM fallback: first `<h1>`
/// 5. Theme color priority chain
#[must_use]
pub fn extract_metadata(doc: &Document, opts: &Options) -> PageMetadata {
    let mut metadata = PageMetadata {
        url: opts.url.clone(),
        ..PageMetadata::default()
    };

    metadata = dom_extraction::extract_title_element(doc, metadata);
    metadata = dom_extraction::extract_html_lang(doc, metadata);
    metadata = dom_extraction::extract_canonical_url(doc, metadata);
    metadata = meta_tags::examine_meta(doc, metadata);
    metadata = dom_extraction::extract_h1_title(doc, metadata);
    metadata.theme_color = theme_color::extract_theme_color(doc);

    metadata
}
