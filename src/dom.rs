//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query`'s arena tree. Every `NodeRef` is an index
//! into the parsed document and can walk up through `parent()`, so ancestor
//! checks never need back-pointers in the output tree.
//!
//! All helpers are read-only: extraction never mutates the parse tree.

use std::sync::LazyLock;

use regex::Regex;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef};
pub use tendril::StrTendril;

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Elements whose text never reaches the reader.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

// === Parsing ===

/// Parse HTML string into document.
///
/// Parsing is tolerant: malformed markup is repaired the way browsers do.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// First `<body>` element of the document.
#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body").nodes().first().copied()
}

/// First element matching `selector` anywhere in the document.
#[must_use]
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Option<NodeRef<'a>> {
    doc.select(selector).nodes().first().copied()
}

// === Tag/Node Information ===

/// Lowercase tag name, or an empty string for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> String {
    if !node.is_element() {
        return String::new();
    }
    node.node_name()
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Check the tag name against one of several candidates.
#[must_use]
pub fn is_one_of(node: &NodeRef, tags: &[&str]) -> bool {
    let tag = tag_name(node);
    !tag.is_empty() && tags.contains(&tag.as_str())
}

/// `h1`..`h6`.
#[must_use]
pub fn is_heading(node: &NodeRef) -> bool {
    is_one_of(node, &["h1", "h2", "h3", "h4", "h5", "h6"])
}

// === Attribute Operations ===

/// Get any attribute value.
#[inline]
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// Get an attribute value trimmed, treating blank values as missing.
#[must_use]
pub fn attr_nonempty(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Element `id`, if present and non-blank.
#[inline]
#[must_use]
pub fn id(node: &NodeRef) -> Option<String> {
    attr_nonempty(node, "id")
}

/// Lowercased `class` attribute (empty when absent).
#[must_use]
pub fn class_name(node: &NodeRef) -> String {
    node.attr("class")
        .map(|c| c.to_lowercase())
        .unwrap_or_default()
}

/// Case-insensitive substring match on the `class` attribute.
#[must_use]
pub fn class_contains(node: &NodeRef, needle: &str) -> bool {
    class_name(node).contains(needle)
}

/// Lowercased `role` attribute.
#[must_use]
pub fn role(node: &NodeRef) -> String {
    node.attr("role")
        .map(|r| r.trim().to_lowercase())
        .unwrap_or_default()
}

// === Tree Navigation ===

/// Direct element children (text and comment nodes skipped).
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// Next sibling that is an element.
#[must_use]
pub fn next_element_sibling<'a>(node: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            return Some(s);
        }
        sibling = s.next_sibling();
    }
    None
}

/// Whether any ancestor of `node` (exclusive) satisfies `pred`.
///
/// The walk stops at `stop` without testing it, so callers can restrict
/// the check to a sub-tree.
#[must_use]
pub fn has_ancestor(node: &NodeRef, stop: Option<NodeId>, pred: &dyn Fn(&NodeRef) -> bool) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if Some(parent.id) == stop || !parent.is_element() {
            return false;
        }
        if pred(&parent) {
            return true;
        }
        current = parent.parent();
    }
    false
}

// === Querying ===

/// Collect matching descendants in document order.
///
/// `max_depth` bounds the walk (1 = direct children only). A matched node
/// is still descended into. The walk keeps its own stack, so arbitrarily
/// deep markup is safe.
#[must_use]
pub fn find_descendants<'a>(
    node: &NodeRef<'a>,
    max_depth: Option<usize>,
    pred: &dyn Fn(&NodeRef<'a>) -> bool,
) -> Vec<NodeRef<'a>> {
    let mut found = Vec::new();
    let mut stack: Vec<(NodeRef<'a>, usize)> =
        element_children(node).into_iter().rev().map(|c| (c, 1)).collect();

    while let Some((current, depth)) = stack.pop() {
        if pred(&current) {
            found.push(current);
        }
        if max_depth.is_none_or(|max| depth < max) {
            stack.extend(element_children(&current).into_iter().rev().map(|c| (c, depth + 1)));
        }
    }
    found
}

/// First matching descendant in document order.
#[must_use]
pub fn find_first<'a>(node: &NodeRef<'a>, pred: &dyn Fn(&NodeRef<'a>) -> bool) -> Option<NodeRef<'a>> {
    let mut stack: Vec<NodeRef<'a>> = element_children(node).into_iter().rev().collect();
    while let Some(current) = stack.pop() {
        if pred(&current) {
            return Some(current);
        }
        stack.extend(element_children(&current).into_iter().rev());
    }
    None
}

/// Descendants with one of the given tags.
#[must_use]
pub fn descendants_by_tag<'a>(node: &NodeRef<'a>, tags: &[&str]) -> Vec<NodeRef<'a>> {
    find_descendants(node, None, &|n| is_one_of(n, tags))
}

/// Whether any descendant has one of the given tags.
#[must_use]
pub fn has_descendant_tag(node: &NodeRef, tags: &[&str]) -> bool {
    find_first(node, &|n| is_one_of(n, tags)).is_some()
}

// === Text Content ===

/// All text of node and descendants, as stored by the parser.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}

/// Text a reader would see: script/style content dropped, whitespace
/// runs collapsed, trimmed.
#[must_use]
pub fn visible_text(node: &NodeRef) -> String {
    collapse_whitespace(&raw_text(node))
}

/// Visible text restricted to elements accepted by `keep`; a rejected
/// element drops its whole sub-tree.
#[must_use]
pub fn visible_text_where(node: &NodeRef, keep: &dyn Fn(&NodeRef) -> bool) -> String {
    collapse_whitespace(&raw_text_where(node, keep))
}

/// Visible text with whitespace left untouched.
#[must_use]
pub fn raw_text(node: &NodeRef) -> String {
    raw_text_where(node, &|_| true)
}

/// [`raw_text`] restricted to elements accepted by `keep`.
#[must_use]
pub fn raw_text_where(node: &NodeRef, keep: &dyn Fn(&NodeRef) -> bool) -> String {
    let mut out = String::new();
    if node.is_text() {
        out.push_str(&node.text());
        return out;
    }

    let mut stack: Vec<NodeRef> = node.children().into_iter().rev().collect();
    while let Some(current) = stack.pop() {
        if current.is_text() {
            out.push_str(&current.text());
        } else if current.is_element() {
            if is_one_of(&current, INVISIBLE_TAGS) || !keep(&current) {
                continue;
            }
            if is_one_of(&current, &["br"]) {
                out.push('\n');
                continue;
            }
            stack.extend(current.children().into_iter().rev());
        }
    }
    out
}

/// Collapse every whitespace run to one space and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Collapse every whitespace run to one space, keeping boundary spaces so
/// adjacent inline fragments stay separated.
#[must_use]
pub fn collapse_inline(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Visible text length in characters.
#[must_use]
pub fn text_len(node: &NodeRef) -> usize {
    visible_text(node).chars().count()
}
