//! News-index normalization.
//!
//! Front pages of some news sites come out as many short link lists
//! interleaved with fragment anchors and image captions. When the finished
//! content tree has that shape, the lists are merged into one deduplicated
//! list and the rest is reduced to headings and real paragraphs.

use std::collections::HashSet;

use crate::result::{Node, NodeType};

/// Top-level lists (and link-first lists) needed to consider a page an index.
pub const MIN_INDEX_LISTS: usize = 3;

/// Anchors needed anywhere in the tree.
pub const MIN_INDEX_ANCHORS: usize = 5;

/// Paragraphs at or under this length are dropped from an index.
const MIN_INDEX_PARAGRAPH_LEN: usize = 20;

/// Whether at least half of the list's items start with a link.
#[must_use]
pub fn is_link_first(list: &Node) -> bool {
    let items = &list.children;
    let leading = items.iter().filter(|i| i.starts_with_link()).count();
    !items.is_empty() && leading * 2 >= items.len()
}

/// Three or more top-level lists, three of them link-first, and at least
/// five anchors.
#[must_use]
pub fn looks_like_news_index(content: &Node) -> bool {
    let lists: Vec<&Node> = content
        .children
        .iter()
        .filter(|n| n.node_type == NodeType::List)
        .collect();
    let link_first = lists.iter().filter(|l| is_link_first(l)).count();

    lists.len() >= MIN_INDEX_LISTS
        && link_first >= MIN_INDEX_LISTS
        && content.count(NodeType::Anchor) >= MIN_INDEX_ANCHORS
}

/// Rebuild `content`'s children as a news index. Returns whether the page
/// was re-classified.
pub fn normalize_news_index(content: &mut Node) -> bool {
    if !looks_like_news_index(content) {
        return false;
    }

    let before = content.children.len();
    let mut merged_at: Option<usize> = None;
    let mut seen: HashSet<String> = HashSet::new();
    let mut items: Vec<Node> = Vec::new();
    let mut children: Vec<Node> = Vec::new();

    for node in std::mem::take(&mut content.children) {
        match node.node_type {
            NodeType::List if is_link_first(&node) => {
                if merged_at.is_none() {
                    merged_at = Some(children.len());
                    children.push(Node::new(NodeType::List));
                }
                for item in node.children {
                    let href = item
                        .children
                        .iter()
                        .find(|c| c.node_type == NodeType::Link)
                        .map(|l| l.href.clone())
                        .unwrap_or_default();
                    if href.is_empty() || seen.insert(href) {
                        items.push(item);
                    }
                }
            }
            t if t.is_heading() => children.push(node),
            NodeType::Paragraph => {
                let text = node.plain_text();
                let text = text.trim();
                if !text.starts_with('[') && text.chars().count() > MIN_INDEX_PARAGRAPH_LEN {
                    children.push(node);
                }
            }
            _ => {}
        }
    }

    if let Some(list) = merged_at.and_then(|i| children.get_mut(i)) {
        list.children = items;
    }
    tracing::debug!(before, after = children.len(), "normalized as news index");
    content.children = children;
    true
}
