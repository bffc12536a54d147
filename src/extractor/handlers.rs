//! Element handlers for headings, images, links, forms and code blocks.

use dom_query::NodeRef;

use super::inline::{self, link_text};
use super::state::ExtractionState;
use super::tags::{self, CARD_BLOCK_TAGS};
use crate::dom;
use crate::metadata::story::{find_description, first_href};
use crate::metadata::{format_date, truncate};
use crate::result::{Node, NodeType};
use crate::url_utils::filename_stem;

/// Longest text taken as a card metadata item ("5 min read", a date).
const MAX_META_ITEM_LEN: usize = 40;

/// Minimum text length for a non-heading card title.
const MIN_CARD_TITLE_LEN: usize = 20;

// === Headings ===

/// `h1`-`h6` to `Heading1`/`Heading2`/`Heading3`.
///
/// The heading's `id`, else the first `id` inside it
/// (`<h2><span class="mw-headline" id="History">`). An empty heading
/// still leaves that id behind as an `Anchor`.
pub fn heading(node: &NodeRef, state: &ExtractionState) -> Option<Node> {
    let id = heading_id(node);
    let text = heading_text(node, state);
    if text.is_empty() {
        return id.map(Node::anchor);
    }

    let node_type = match dom::tag_name(node).as_str() {
        "h1" => NodeType::Heading1,
        "h2" => NodeType::Heading2,
        _ => NodeType::Heading3,
    };
    let mut heading = Node::with_text(node_type, text).with_id(id.unwrap_or_default());
    if let Some(href) = first_href(node) {
        heading.href = state.resolve(&href);
    }
    Some(heading)
}

fn heading_id(node: &NodeRef) -> Option<String> {
    dom::id(node).or_else(|| dom::find_first(node, &|n| dom::id(n).is_some()).and_then(|n| dom::id(&n)))
}

/// Heading text collected per direct child with immediate repeats
/// dropped, so `<h1><div>News</div><div>News</div></h1>` reads "News".
#[must_use]
pub fn heading_text(node: &NodeRef, state: &ExtractionState) -> String {
    let mut joined = String::new();
    let mut last: Option<String> = None;

    for child in node.children() {
        let piece = if child.is_text() {
            dom::collapse_inline(&child.text())
        } else if child.is_element() && !tags::is_skip_tag(&dom::tag_name(&child)) {
            let text = dom::collapse_inline(&dom::raw_text(&child));
            if tags::is_block_tag(&dom::tag_name(&child)) {
                format!(" {text} ")
            } else {
                text
            }
        } else {
            continue;
        };

        let trimmed = piece.trim();
        if trimmed.is_empty() {
            joined.push(' ');
            continue;
        }
        if last.as_deref() == Some(trimmed) {
            continue;
        }
        last = Some(trimmed.to_string());
        joined.push_str(&piece);
    }

    state.convert_text(&dom::collapse_whitespace(&joined))
}

// === Images ===

/// `<img>` as an `Image` node wrapping a `Link` labeled
/// `"[Image: <alt-or-filename>]"`. Tracking pixels are dropped.
pub fn image_node(node: &NodeRef, state: &ExtractionState) -> Option<Node> {
    let is_pixel = |name: &str| dom::attr(node, name).is_some_and(|v| v.trim() == "1");
    if is_pixel("width") && is_pixel("height") {
        return None;
    }

    let src = dom::attr_nonempty(node, "src")
        .or_else(|| dom::attr_nonempty(node, "data-src"))
        .unwrap_or_default();
    let href = if src.is_empty() { String::new() } else { state.resolve(&src) };

    let mut image = Node::new(NodeType::Image);
    image.children.push(Node::link(format!("[Image: {}]", image_label(node, &src)), href.clone()));
    image.href = href;
    Some(image)
}

/// Alt text, else the filename without extension, else `"image"`.
#[must_use]
pub fn image_label(node: &NodeRef, src: &str) -> String {
    dom::attr_nonempty(node, "alt")
        .map(|alt| dom::collapse_whitespace(&alt))
        .or_else(|| Some(filename_stem(src)).filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "image".to_string())
}

// === Links ===

/// Whether a link wraps block content and should be split as a card.
#[must_use]
pub fn is_card_link(node: &NodeRef) -> bool {
    dom::has_descendant_tag(node, &CARD_BLOCK_TAGS)
}

/// Standalone `<a href>` at block level.
///
/// Card links are split into a title link, a description paragraph and a
/// metadata line; anything else becomes a paragraph holding one link.
pub fn link_block(node: &NodeRef, href: &str, state: &ExtractionState) -> Vec<Node> {
    let href = state.resolve(href);
    if is_card_link(node) {
        if let Some(card) = link_card(node, &href, state) {
            return card;
        }
    }
    let text = link_text(node, state).unwrap_or_else(|| href.clone());
    vec![Node::with_children(NodeType::Paragraph, vec![Node::link(text, href)])]
}

fn link_card(node: &NodeRef, href: &str, state: &ExtractionState) -> Option<Vec<Node>> {
    let title_node = dom::find_first(node, &dom::is_heading).or_else(|| {
        dom::find_first(node, &|n| {
            dom::is_one_of(n, &["p", "div", "span", "strong", "b"])
                && !dom::has_descendant_tag(n, &CARD_BLOCK_TAGS)
                && dom::text_len(n) > MIN_CARD_TITLE_LEN
        })
    })?;
    let title = dom::visible_text(&title_node);
    if title.is_empty() {
        return None;
    }

    let mut out = vec![Node::with_children(
        NodeType::Paragraph,
        vec![Node::link(state.convert_text(&title), href)],
    )];

    let description = find_description(node, Some(title_node.id), &title);
    if let Some(description) = &description {
        out.push(Node::paragraph(truncate(description, state.options.description_max_len)));
    }

    let meta = card_metadata(node, &title, description.as_deref(), state.options.max_metadata_items);
    if !meta.is_empty() {
        out.push(Node::paragraph(meta.join(" · ")));
    }
    Some(out)
}

/// Short `span`/`time`/`small` texts of a card, deduplicated, in order.
fn card_metadata(node: &NodeRef, title: &str, description: Option<&str>, max_items: usize) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    let candidates = dom::find_descendants(node, None, &|n| {
        dom::is_one_of(n, &["span", "time", "small"]) && !dom::has_descendant_tag(n, &["span", "time"])
    });

    for candidate in candidates {
        if items.len() >= max_items {
            break;
        }
        let mut text = dom::visible_text(&candidate);
        if text.is_empty() {
            text = dom::attr_nonempty(&candidate, "datetime")
                .map(|dt| format_date(&dt))
                .unwrap_or_default();
        }
        if text.is_empty()
            || text.chars().count() > MAX_META_ITEM_LEN
            || title.contains(text.as_str())
            || description.is_some_and(|d| d.contains(text.as_str()))
            || items.contains(&text)
        {
            continue;
        }
        items.push(text);
    }
    items
}

// === Forms ===

/// `<form>` with its retained inputs, or `None` when it has none.
///
/// Every input and button below the form is marked processed.
pub fn form_node(node: &NodeRef, state: &mut ExtractionState) -> Option<Node> {
    let mut form = Node::new(NodeType::Form);
    form.form_action = dom::attr_nonempty(node, "action")
        .map(|a| state.resolve(&a))
        .unwrap_or_default();
    form.form_method = dom::attr_nonempty(node, "method")
        .map_or_else(|| "GET".to_string(), |m| m.to_uppercase());

    for field in dom::descendants_by_tag(node, &["input", "button"]) {
        state.mark_done(field.id);
        form.children.extend(input_node(&field));
    }

    if form.children.is_empty() {
        None
    } else {
        Some(form)
    }
}

/// `<input>` of a retained type, or a submit `<button>`.
#[must_use]
pub fn input_node(node: &NodeRef) -> Option<Node> {
    let mut input = Node::new(NodeType::Input);
    input.input_name = dom::attr_nonempty(node, "name").unwrap_or_default();

    if dom::is_one_of(node, &["button"]) {
        let kind = dom::attr_nonempty(node, "type").map_or_else(|| "submit".to_string(), |t| t.to_lowercase());
        if kind != "submit" {
            return None;
        }
        input.input_type = kind;
        input.input_value = dom::visible_text(node);
        return Some(input);
    }

    let kind = dom::attr_nonempty(node, "type").map_or_else(|| "text".to_string(), |t| t.to_lowercase());
    if !tags::is_retained_input(&kind) {
        return None;
    }
    input.input_type = kind;
    input.input_value = dom::attr_nonempty(node, "value").unwrap_or_default();
    Some(input)
}

// === Preformatted ===

/// `<pre>` to `CodeBlock`, inner whitespace preserved.
///
/// Only blank lines around the block and trailing whitespace are trimmed,
/// so the first line keeps its indentation.
#[must_use]
pub fn code_block(node: &NodeRef) -> Option<Node> {
    let raw = dom::raw_text(node);
    let text = raw.trim_start_matches(['\n', '\r']).trim_end();
    if text.trim().is_empty() {
        return None;
    }
    let mut block = Node::with_text(NodeType::CodeBlock, text);
    block.id = dom::id(node).unwrap_or_default();
    Some(block)
}

// === Definition lists ===

/// `dt` to a paragraph with a `Strong` term, `dd` to a paragraph.
pub fn definition_list(node: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    let mut out = Vec::new();
    for child in dom::element_children(node) {
        match dom::tag_name(&child).as_str() {
            "dt" => {
                let term = inline::inline_nodes(&child, state);
                if !term.is_empty() {
                    let strong = Node::with_children(NodeType::Strong, term);
                    out.push(Node::with_children(NodeType::Paragraph, vec![strong]));
                }
            }
            "dd" => {
                let definition = inline::inline_nodes(&child, state);
                if !definition.is_empty() {
                    out.push(Node::with_children(NodeType::Paragraph, definition));
                }
            }
            // <dl><div><dt/><dd/></div></dl>
            "div" => out.extend(state.nested(|state| definition_list(&child, state)).unwrap_or_default()),
            _ => {}
        }
    }
    out
}
