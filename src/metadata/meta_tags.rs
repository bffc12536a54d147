//! HTML Meta Tag Extraction
//!
//! Fills page metadata from `<meta>` tags (Open Graph, http-equiv) for
//! fields the DOM pass left empty.

use dom_query::Document;

use super::PageMetadata;
use crate::dom;

/// Examine HTML meta tags for title, URL and language fallbacks.
#[must_use]
pub fn examine_meta(doc: &Document, original: PageMetadata) -> PageMetadata {
    let mut result = original;

    for node in doc.select("meta").nodes() {
        let name = dom::attr(node, "name")
            .or_else(|| dom::attr(node, "property"))
            .or_else(|| dom::attr(node, "http-equiv"))
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        let Some(content) = dom::attr_nonempty(node, "content") else {
            continue;
        };

        match name.as_str() {
            "og:title" | "twitter:title" => {
                if result.title.is_none() {
                    result.title = Some(dom::collapse_whitespace(&content));
                }
            }
            "og:url" => {
                if result.url.is_none() {
                    result.url = Some(content);
                }
            }
            "content-language" | "og:locale" => {
                if result.lang.is_none() {
                    result.lang = Some(normalize_lang(&content));
                }
            }
            _ => {}
        }
    }

    result
}

/// `en_US` / `en-US, fr` → `en-US`.
fn normalize_lang(value: &str) -> String {
    value
        .split(',')
        .next()
        .unwrap_or(value)
        .trim()
        .replace('_', "-")
}
