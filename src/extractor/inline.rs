//! Inline walker.
//!
//! Turns phrasing content into a flat run of inline nodes: text, links,
//! emphasis, code, images and math. Nested lists are kept as `List`
//! nodes. Block elements met on the way are flattened with a space on
//! either side.

use std::sync::LazyLock;

use dom_query::NodeRef;
use regex::Regex;

use super::state::ExtractionState;
use super::{handlers, lists, tags};
use crate::dom;
use crate::result::{Node, NodeType};

#[allow(clippy::expect_used)]
static SPACE_AROUND_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\n[ \t]*").expect("SPACE_AROUND_NEWLINE regex"));

#[allow(clippy::expect_used)]
static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("SPACE_RUN regex"));

/// Inline nodes for all children of `parent`.
pub fn inline_nodes(parent: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    inline_run(&parent.children(), state)
}

/// Inline nodes for a run of sibling nodes.
pub fn inline_run(nodes: &[NodeRef], state: &mut ExtractionState) -> Vec<Node> {
    let mut out = Vec::new();
    for node in nodes {
        push_inline(node, state, &mut out);
    }
    finish(out, true)
}

fn push_inline(node: &NodeRef, state: &mut ExtractionState, out: &mut Vec<Node>) {
    if node.is_text() {
        let text = dom::collapse_inline(&node.text());
        if !text.is_empty() {
            out.push(Node::text_node(state.convert_text(&text)));
        }
        return;
    }
    if !node.is_element() || state.is_done(node.id) {
        return;
    }

    let tag = dom::tag_name(node);
    if tags::is_skip_tag(&tag) {
        return;
    }
    if is_math(node, &tag) {
        let text = math_text(node, state);
        if !text.is_empty() {
            out.push(Node::text_node(text));
        }
        return;
    }

    let converted = state.nested(|state| push_element(node, &tag, state, out));
    if converted.is_none() {
        let text = state.live_text(node);
        if !text.is_empty() {
            out.push(Node::text_node(state.convert_text(&text)));
        }
    }
}

fn push_element(node: &NodeRef, tag: &str, state: &mut ExtractionState, out: &mut Vec<Node>) {
    match tag {
        "br" => out.push(Node::text_node("\n")),
        "a" => push_link(node, state, out),
        "strong" | "b" => push_styled(NodeType::Strong, node, state, out),
        "em" | "i" => push_styled(NodeType::Emphasis, node, state, out),
        "mark" => push_styled(NodeType::Mark, node, state, out),
        "ins" => push_styled(NodeType::MarkInsert, node, state, out),
        "img" => out.extend(handlers::image_node(node, state)),
        "ul" | "ol" => out.extend(lists::build_list(node, state)),
        t if tags::is_code_tag(t) => {
            let text = dom::collapse_whitespace(&dom::raw_text(node));
            if !text.is_empty() {
                out.push(Node::with_text(NodeType::Code, text));
            }
        }
        t if tags::is_block_tag(t) => {
            out.push(Node::text_node(" "));
            out.extend(fragment_target(node).map(Node::anchor));
            for child in node.children() {
                push_inline(&child, state, out);
            }
            out.push(Node::text_node(" "));
        }
        _ => {
            out.extend(fragment_target(node).map(Node::anchor));
            for child in node.children() {
                push_inline(&child, state, out);
            }
        }
    }
}

fn push_link(node: &NodeRef, state: &mut ExtractionState, out: &mut Vec<Node>) {
    let Some(href) = dom::attr_nonempty(node, "href") else {
        if let Some(target) = fragment_target(node) {
            out.push(Node::anchor(target));
        }
        for child in node.children() {
            push_inline(&child, state, out);
        }
        return;
    };

    let href = state.resolve(&href);
    let text = link_text(node, state).unwrap_or_else(|| href.clone());
    out.push(Node::link(text, href));
}

/// Display text of a link: its visible text, else the alt text of an
/// image inside it.
#[must_use]
pub fn link_text(node: &NodeRef, state: &ExtractionState) -> Option<String> {
    let text = dom::visible_text(node);
    if !text.is_empty() {
        return Some(state.convert_text(&text));
    }
    dom::find_first(node, &|n| dom::is_one_of(n, &["img"]))
        .and_then(|img| dom::attr_nonempty(&img, "alt"))
}

/// `id` or legacy `name` of an element that serves as a fragment target.
#[must_use]
pub fn fragment_target(node: &NodeRef) -> Option<String> {
    dom::id(node).or_else(|| {
        dom::is_one_of(node, &["a"])
            .then(|| dom::attr_nonempty(node, "name"))
            .flatten()
    })
}

fn push_styled(node_type: NodeType, node: &NodeRef, state: &mut ExtractionState, out: &mut Vec<Node>) {
    let mut inner = Vec::new();
    for child in node.children() {
        push_inline(&child, state, &mut inner);
    }
    let children = finish(inner, false);
    if children.iter().all(|c| c.node_type == NodeType::Text && c.text.trim().is_empty()) {
        // keep the separation the element provided
        if !children.is_empty() {
            out.push(Node::text_node(" "));
        }
        return;
    }
    out.push(styled(node_type, children));
}

/// Single-text styling collapses into the node's own `text`.
fn styled(node_type: NodeType, mut children: Vec<Node>) -> Node {
    if children.len() == 1 && children[0].node_type == NodeType::Text {
        let only = children.remove(0);
        return Node::with_text(node_type, only.text);
    }
    Node::with_children(node_type, children)
}

/// `<math>` or a KaTeX wrapper.
#[must_use]
pub fn is_math(node: &NodeRef, tag: &str) -> bool {
    tag == "math" || dom::class_name(node).split_whitespace().any(|c| c.starts_with("katex"))
}

/// Unicode text of a MathML/KaTeX element.
///
/// The TeX annotation is preferred and converted; otherwise the rendered
/// text is used as is.
pub fn math_text(node: &NodeRef, state: &ExtractionState) -> String {
    let annotation = dom::find_first(node, &|n| {
        dom::is_one_of(n, &["annotation"])
            && dom::attr(n, "encoding").is_some_and(|e| e.contains("tex"))
    });
    if let Some(annotation) = annotation {
        let tex = annotation.text();
        let tex = tex.trim();
        return if state.options.convert_latex {
            state.latex.to_unicode(tex)
        } else {
            tex.to_string()
        };
    }
    let rendered = dom::find_first(node, &|n| dom::class_contains(n, "katex-html"));
    dom::visible_text(&rendered.unwrap_or(*node))
}

/// Merge adjacent text, normalize spaces and (optionally) trim the run.
fn finish(nodes: Vec<Node>, trim_edges: bool) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.node_type == NodeType::Text {
            if let Some(last) = out.last_mut().filter(|l| l.node_type == NodeType::Text) {
                last.text.push_str(&node.text);
                continue;
            }
        }
        out.push(node);
    }

    for node in &mut out {
        if node.node_type == NodeType::Text {
            let text = SPACE_AROUND_NEWLINE.replace_all(&node.text, "\n");
            node.text = SPACE_RUN.replace_all(&text, " ").into_owned();
        }
    }

    if trim_edges {
        if let Some(first) = out.first_mut().filter(|n| n.node_type == NodeType::Text) {
            first.text = first.text.trim_start().to_string();
        }
        if let Some(last) = out.last_mut().filter(|n| n.node_type == NodeType::Text) {
            last.text = last.text.trim_end().to_string();
        }
    }

    out.retain(|n| n.node_type != NodeType::Text || !n.text.is_empty());
    out
}
