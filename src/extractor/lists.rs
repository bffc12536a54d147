//! `ul`/`ol` to `List`.
//!
//! Plain items go through the inline walk. Items that hold an `<article>`
//! or look like a news card become structured story entries instead.

use dom_query::NodeRef;

use super::inline;
use super::state::ExtractionState;
use crate::dom;
use crate::metadata::story::{is_description_text, story_from_element};
use crate::result::{Node, NodeType};

/// Minimum link text for the prominent link of a news card.
const MIN_CARD_LINK_LEN: usize = 20;

/// Build a `List`, or `None` when no item has content.
pub fn build_list(list: &NodeRef, state: &mut ExtractionState) -> Option<Node> {
    let mut items = Vec::new();

    for child in dom::element_children(list) {
        if state.is_done(child.id) {
            continue;
        }
        if !dom::is_one_of(&child, &["li"]) {
            // stray wrappers between <ul> and <li>
            if dom::is_one_of(&child, &["div", "span"]) {
                if let Some(wrapped) = state.nested(|state| build_list(&child, state)).flatten() {
                    items.extend(wrapped.children);
                }
            }
            continue;
        }
        items.extend(list_item(&child, state));
    }

    if items.is_empty() {
        None
    } else {
        Some(Node::with_children(NodeType::List, items))
    }
}

fn list_item(li: &NodeRef, state: &mut ExtractionState) -> Option<Node> {
    if dom::has_descendant_tag(li, &["article"]) || is_news_card(li) {
        if let Some(card) = story_from_element(li, state.base_url.as_ref()) {
            return Some(card.into_list_item(state.options.description_max_len));
        }
    }

    let children = inline::inline_nodes(li, state);
    if children.is_empty() {
        return None;
    }
    let mut item = Node::with_children(NodeType::ListItem, children);
    item.id = dom::id(li).unwrap_or_default();
    Some(item)
}

/// A prominent link (more than 20 characters) together with a paragraph
/// that reads like a description.
#[must_use]
pub fn is_news_card(li: &NodeRef) -> bool {
    let has_link = dom::find_first(li, &|n| {
        dom::is_one_of(n, &["a"])
            && dom::attr_nonempty(n, "href").is_some()
            && dom::text_len(n) > MIN_CARD_LINK_LEN
    })
    .is_some();

    has_link
        && dom::descendants_by_tag(li, &["p"])
            .iter()
            .any(|p| is_description_text(&dom::visible_text(p)))
}
