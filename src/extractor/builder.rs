//! Document builder: the recursive tag-to-node walk over the content root.

use dom_query::NodeRef;

use super::state::ExtractionState;
use super::tags::{self, BLOCK_TAGS, CONTENT_BLOCK_TAGS};
use super::{articles, handlers, inline, lists, tables};
use crate::dom;
use crate::result::{Node, NodeType};

/// Text of the paragraph placed between consecutive articles.
pub const ARTICLE_SEPARATOR: &str = "---";

/// Content nodes for the chosen root.
///
/// The root itself may be an article list.
pub fn build_content(root: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    if let Some(list) = article_list(root, state) {
        return vec![list];
    }
    walk_children(root, state)
}

/// Walk the children of `node`, grouping runs of free text and phrasing
/// elements into implicit paragraphs.
pub fn walk_children(node: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    let children = node.children();
    let mut out = Vec::new();
    let mut i = 0;

    while i < children.len() {
        if is_run_member(&children[i], state) {
            let start = i;
            while i < children.len() && is_run_member(&children[i], state) {
                i += 1;
            }
            out.extend(run_nodes(&children[start..i], state));
        } else {
            out.extend(walk_node(&children[i], state));
            i += 1;
        }
    }
    out
}

/// Text, comments, and phrasing elements without block content.
fn is_run_member(node: &NodeRef, state: &ExtractionState) -> bool {
    if !node.is_element() {
        return true;
    }
    tags::is_phrasing_tag(&dom::tag_name(node))
        && !state.is_done(node.id)
        && !dom::has_descendant_tag(node, &BLOCK_TAGS)
}

fn run_nodes(run: &[NodeRef], state: &mut ExtractionState) -> Vec<Node> {
    let has_text = run.iter().any(|n| {
        if n.is_text() {
            !n.text().trim().is_empty()
        } else {
            n.is_element() && !dom::visible_text(n).is_empty()
        }
    });

    if has_text {
        return paragraph_or_anchors(inline::inline_run(run, state));
    }

    let mut out = Vec::new();
    for node in run.iter().filter(|n| n.is_element()) {
        out.extend(walk_node(node, state));
    }
    out
}

/// A paragraph of inline nodes; bare anchors are returned as they are.
fn paragraph_or_anchors(children: Vec<Node>) -> Vec<Node> {
    if children.iter().all(|c| c.node_type == NodeType::Anchor) {
        return children;
    }
    vec![Node::with_children(NodeType::Paragraph, children)]
}

/// Convert one element.
///
/// Past [`MAX_NESTING`](super::state::MAX_NESTING) levels the element is
/// flattened into a single paragraph of its text.
pub fn walk_node(node: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    if !node.is_element() || state.is_done(node.id) {
        return Vec::new();
    }
    state
        .nested(|state| convert_node(node, state))
        .unwrap_or_else(|| flattened(node, state))
}

fn flattened(node: &NodeRef, state: &ExtractionState) -> Vec<Node> {
    tracing::trace!(tag = %dom::tag_name(node), "nesting limit reached, flattening");
    let text = state.convert_text(&state.live_text(node));
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Node::paragraph(text)]
    }
}

fn convert_node(node: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    let tag = dom::tag_name(node);
    if tags::is_skip_tag(&tag) {
        return Vec::new();
    }
    if dom::role(node) == "navigation" {
        tracing::trace!(tag = %tag, "role=navigation skipped");
        return Vec::new();
    }
    if inline::is_math(node, &tag) {
        let text = inline::math_text(node, state);
        return if text.is_empty() { Vec::new() } else { vec![Node::paragraph(text)] };
    }

    match tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => handlers::heading(node, state).into_iter().collect(),
        "p" | "figcaption" => paragraph(node, state),
        "blockquote" => {
            let children = walk_children(node, state);
            if children.is_empty() {
                Vec::new()
            } else {
                vec![Node::with_children(NodeType::Blockquote, children)]
            }
        }
        "ul" | "ol" => lists::build_list(node, state).into_iter().collect(),
        "dl" => handlers::definition_list(node, state),
        "pre" => handlers::code_block(node).into_iter().collect(),
        "table" => tables::build_table(node, state),
        "hr" => vec![Node::new(NodeType::Hr)],
        "br" => Vec::new(),
        "img" => handlers::image_node(node, state).into_iter().collect(),
        "a" => match dom::attr_nonempty(node, "href") {
            Some(href) => handlers::link_block(node, &href, state),
            None => container(node, state),
        },
        "form" => form(node, state),
        "input" => handlers::input_node(node).into_iter().collect(),
        "article" => article(node, state),
        _ => container(node, state),
    }
}

fn paragraph(node: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    let children = inline::inline_nodes(node, state);
    let id = dom::id(node);
    if children.is_empty() {
        return id.map(Node::anchor).into_iter().collect();
    }
    let mut out = paragraph_or_anchors(children);
    if let Some((id, first)) = id.zip(out.first_mut()) {
        if first.node_type == NodeType::Paragraph {
            first.id = id;
        }
    }
    out
}

/// Passthrough element: an anchor for its `id`, then its children, unless
/// it is an article list.
fn container(node: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    let mut out = Vec::new();
    if let Some(target) = inline::fragment_target(node) {
        out.push(Node::anchor(target));
    }
    if let Some(list) = article_list(node, state) {
        out.push(list);
        return out;
    }
    out.extend(walk_children(node, state));
    out
}

fn article_list(node: &NodeRef, state: &ExtractionState) -> Option<Node> {
    if !articles::should_extract_as_article_list(node, state) {
        return None;
    }
    tracing::debug!(tag = %dom::tag_name(node), id = dom::id(node).unwrap_or_default(), "article list container");
    articles::extract_article_list(node, state)
}

/// Separator before every article after the first, then its content.
fn article(node: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    let mut out = Vec::new();
    if state.enter_article() {
        out.push(Node::paragraph(ARTICLE_SEPARATOR));
    }
    if let Some(id) = dom::id(node) {
        out.push(Node::anchor(id));
    }
    out.extend(walk_children(node, state));
    out
}

/// The form's inputs, then its content when it wraps page content.
fn form(node: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    let mut out: Vec<Node> = handlers::form_node(node, state).into_iter().collect();
    if dom::has_descendant_tag(node, &CONTENT_BLOCK_TAGS) {
        out.extend(container(node, state));
    }
    out
}
