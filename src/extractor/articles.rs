//! Article-list detector and extractor.
//!
//! A container is an article list when it holds at least three real
//! `<article>` children, or at least three `h2`/`h3` headlines carrying a
//! substantial link ("story cards"). Such containers become one `List` of
//! story entries instead of being walked element by element.

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};

use super::state::ExtractionState;
use crate::dom;
use crate::metadata::story::{
    find_author, find_date, find_description, sibling_description, story_from_element, StoryCard,
};
use crate::patterns::{is_ad_class, is_numbered_item};
use crate::result::{Node, NodeType};
use crate::url_utils::extract_domain;

/// Entries needed before a container counts as a list.
pub const MIN_ARTICLE_LIST_ITEMS: usize = 3;

/// Depth searched for headlines when detecting a list.
const DETECTION_DEPTH: usize = 5;

/// Depth searched for story cards when extracting.
const CARD_DEPTH: usize = 6;

/// Headline links must be longer than this.
const MIN_HEADLINE_LEN: usize = 10;

/// Whether `node` should be rendered as a story list.
#[must_use]
pub fn should_extract_as_article_list(node: &NodeRef, state: &ExtractionState) -> bool {
    if article_children(node).len() >= MIN_ARTICLE_LIST_ITEMS {
        return true;
    }
    let mut headlines = Vec::new();
    collect_headlines(node, 1, DETECTION_DEPTH, state, &mut headlines);
    headlines.len() >= MIN_ARTICLE_LIST_ITEMS
}

/// Story cards first; with fewer than three, the direct articles.
pub fn extract_article_list(node: &NodeRef, state: &ExtractionState) -> Option<Node> {
    let max_len = state.options.description_max_len;

    let cards = story_cards(node, state);
    let (source, cards) = if cards.len() >= MIN_ARTICLE_LIST_ITEMS {
        ("story cards", cards)
    } else {
        let articles = article_children(node)
            .iter()
            .filter_map(|a| story_from_element(a, state.base_url.as_ref()))
            .collect();
        ("articles", articles)
    };

    if cards.is_empty() {
        return None;
    }
    tracing::debug!(source, items = cards.len(), "article list extracted");

    let items = cards.into_iter().map(|c| c.into_list_item(max_len)).collect();
    Some(Node::with_children(NodeType::List, items))
}

/// Direct `<article>` children not marked as advertising.
fn article_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    dom::element_children(node)
        .into_iter()
        .filter(|c| dom::is_one_of(c, &["article"]) && !is_ad(c))
        .collect()
}

fn is_ad(node: &NodeRef) -> bool {
    is_ad_class(&dom::class_name(node))
}

/// `h2`/`h3` headlines below `node`, not entering ad or processed subtrees.
fn collect_headlines<'a>(
    node: &NodeRef<'a>,
    depth: usize,
    max_depth: usize,
    state: &ExtractionState,
    out: &mut Vec<NodeRef<'a>>,
) {
    if depth > max_depth {
        return;
    }
    for child in dom::element_children(node) {
        if state.is_done(child.id) || is_ad(&child) {
            continue;
        }
        if dom::is_one_of(&child, &["h2", "h3"]) && headline_link(&child).is_some() {
            out.push(child);
            continue;
        }
        collect_headlines(&child, depth + 1, max_depth, state, out);
    }
}

/// The link that makes `heading` a headline: inside it or wrapping it,
/// with a real target and a title that is not result numbering.
#[must_use]
pub fn headline_link<'a>(heading: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let (link, text) = match dom::find_first(heading, &|n| dom::is_one_of(n, &["a"])) {
        Some(link) => (link, dom::visible_text(&link)),
        None => {
            let parent = heading.parent().filter(|p| dom::is_one_of(p, &["a"]))?;
            (parent, dom::visible_text(heading))
        }
    };

    let href = dom::attr_nonempty(&link, "href")?;
    let valid = !href.starts_with('#')
        && text.chars().count() > MIN_HEADLINE_LEN
        && !is_numbered_item(&text);
    valid.then_some(link)
}

fn story_cards(node: &NodeRef, state: &ExtractionState) -> Vec<StoryCard> {
    let mut headlines = Vec::new();
    collect_headlines(node, 1, CARD_DEPTH, state, &mut headlines);

    let mut seen = HashSet::new();
    headlines
        .iter()
        .filter_map(|h| card_from_headline(h, node.id, state))
        .filter(|card| seen.insert(card.href.clone()))
        .collect()
}

fn card_from_headline(heading: &NodeRef, container: NodeId, state: &ExtractionState) -> Option<StoryCard> {
    let link = headline_link(heading)?;
    let href = state.resolve(&dom::attr_nonempty(&link, "href")?);
    let title = state.convert_text(&dom::visible_text(heading));

    // <a><h2/></a>: the description follows the link, not the heading
    let outer = if link.id == heading.id || dom::find_first(&link, &|n| n.id == heading.id).is_some() {
        link
    } else {
        *heading
    };
    let scope = card_scope(&outer, container);

    let description = sibling_description(&outer, &title).or_else(|| {
        scope
            .as_ref()
            .and_then(|s| find_description(s, Some(outer.id), &title))
    });

    Some(StoryCard {
        domain: extract_domain(&href),
        description,
        author: scope.as_ref().and_then(find_author),
        date: scope.as_ref().and_then(find_date),
        title,
        href,
    })
}

/// Widest ancestor below `container` that holds only this headline.
fn card_scope<'a>(start: &NodeRef<'a>, container: NodeId) -> Option<NodeRef<'a>> {
    let mut scope = None;
    let mut current = start.parent();
    while let Some(parent) = current {
        if parent.id == container || dom::descendants_by_tag(&parent, &["h2", "h3"]).len() > 1 {
            break;
        }
        scope = Some(parent);
        current = parent.parent();
    }
    scope
}
