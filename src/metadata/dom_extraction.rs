//! Page metadata read directly from the DOM.

use dom_query::Document;

use super::PageMetadata;
use crate::dom;

/// Title from the `<title>` element.
#[must_use]
pub fn extract_title_element(doc: &Document, original: PageMetadata) -> PageMetadata {
    let mut result = original;
    if result.title.is_some() {
        return result;
    }
    result.title = dom::select_first(doc, "title")
        .map(|t| dom::collapse_whitespace(&dom::text_content(&t)))
        .filter(|t| !t.is_empty());
    result
}

/// Title from the first non-empty `<h1>`, used when nothing else named the page.
#[must_use]
pub fn extract_h1_title(doc: &Document, original: PageMetadata) -> PageMetadata {
    let mut result = original;
    if result.title.is_some() {
        return result;
    }
    result.title = doc
        .select("h1")
        .nodes()
        .iter()
        .map(dom::visible_text)
        .find(|t| !t.is_empty());
    result
}

/// Language from `<html lang>`.
#[must_use]
pub fn extract_html_lang(doc: &Document, original: PageMetadata) -> PageMetadata {
    let mut result = original;
    if result.lang.is_some() {
        return result;
    }
    result.lang = dom::select_first(doc, "html").and_then(|html| dom::attr_nonempty(&html, "lang"));
    result
}

/// URL from `<link rel="canonical">`.
#[must_use]
pub fn extract_canonical_url(doc: &Document, original: PageMetadata) -> PageMetadata {
    let mut result = original;
    if result.url.is_some() {
        return result;
    }
    result.url = doc
        .select("link[href]")
        .nodes()
        .iter()
        .find(|link| {
            dom::attr(link, "rel").is_some_and(|rel| {
                rel.split_whitespace().any(|r| r.eq_ignore_ascii_case("canonical"))
            })
        })
        .and_then(|link| dom::attr_nonempty(link, "href"));
    result
}
