//! Content root locator.
//!
//! Picks the sub-tree holding the page's real content. Strategies run in
//! priority order and the first one that settles on a node wins; the
//! `<body>` is the last resort, so a root is always returned.

use dom_query::NodeRef;

use super::{first_match, query, query_all, Strategy};
use crate::dom;
use crate::patterns::{is_content_class, CONTAINER_TAGS, CONTENT_IDS};

/// Scoring walks stop this many levels below the candidate.
pub const MAX_SCORE_DEPTH: usize = 10;

/// Scored containers below this are not trusted over the body.
pub const MIN_CONTAINER_SCORE: i32 = 3;

/// Content root strategies in priority order.
pub static CONTENT_ROOT_STRATEGIES: &[(&str, Strategy)] = &[
    ("main", main_element),
    ("article", standalone_article),
    ("role-main", role_main),
    ("content-id", content_id),
    ("scored", highest_scoring_container),
];

/// Return the node most likely to hold the content, or `body` itself.
#[must_use]
pub fn find_content_root<'a>(body: &NodeRef<'a>) -> NodeRef<'a> {
    match first_match(body, CONTENT_ROOT_STRATEGIES) {
        Some((strategy, node)) => {
            tracing::debug!(
                strategy,
                tag = %dom::tag_name(&node),
                id = dom::id(&node).unwrap_or_default(),
                "content root located"
            );
            node
        }
        None => {
            tracing::debug!("content root falls back to <body>");
            *body
        }
    }
}

/// `<main>` handling.
///
/// 1. an `<article>` inside carrying a content class (README in a generic main)
/// 2. two or more `<article>`s: the main itself (multi-story index); checked
///    before content divs since each story may carry its own story-body div
/// 3. a content-class `<div>`/`<section>` inside
/// 4. the single `<article>` inside
/// 5. the main itself
fn main_element<'a>(body: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let main = dom::find_first(body, &|n| dom::is_one_of(n, &["main"]))?;
    let articles = dom::descendants_by_tag(&main, &["article"]);

    if let Some(article) = articles
        .iter()
        .find(|a| is_content_class(&dom::class_name(a)))
    {
        return Some(*article);
    }

    if articles.len() >= 2 {
        return Some(main);
    }

    if let Some(content_div) = dom::find_first(&main, &|n| {
        dom::is_one_of(n, &["div", "section"]) && is_content_class(&dom::class_name(n))
    }) {
        return Some(content_div);
    }

    Some(articles.first().copied().unwrap_or(main))
}

/// A lone top-level `<article>`.
///
/// Several sibling articles are a story index: their shared parent is
/// returned so none of them is lost. Articles nested in other articles
/// (comments) are not counted.
fn standalone_article<'a>(body: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let articles: Vec<NodeRef<'a>> = dom::descendants_by_tag(body, &["article"])
        .into_iter()
        .filter(|a| !dom::has_ancestor(a, Some(body.id), &|p| dom::is_one_of(p, &["article"])))
        .collect();

    match articles.as_slice() {
        [] => None,
        [single] => Some(*single),
        [first, rest @ ..] => {
            let parent = first.parent()?;
            rest.iter()
                .all(|a| a.parent().is_some_and(|p| p.id == parent.id))
                .then_some(parent)
        }
    }
}

/// `role="main"` on any element.
fn role_main<'a>(body: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    query(body, |n| dom::role(n) == "main")
}

/// Container elements with a well-known content id, tried id by id.
fn content_id<'a>(body: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    CONTENT_IDS.iter().find_map(|wanted| {
        dom::find_first(body, &|n| {
            dom::is_one_of(n, CONTAINER_TAGS) && dom::id(n).as_deref() == Some(*wanted)
        })
    })
}

/// Highest-scoring `<div>`/`<section>`, if it clears [`MIN_CONTAINER_SCORE`].
///
/// Ties keep the first candidate in document order.
fn highest_scoring_container<'a>(body: &NodeRef<'a>) -> Option<NodeRef<'a>> {
    let mut best: Option<(NodeRef<'a>, i32)> = None;

    for candidate in query_all(body, |n| dom::is_one_of(n, &["div", "section"])) {
        let score = score_content(&candidate);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    let (node, score) = best?;
    tracing::trace!(score, tag = %dom::tag_name(&node), "best scored container");
    (score >= MIN_CONTAINER_SCORE).then_some(node)
}

/// Content-richness score of everything below `node` (depth-bounded).
///
/// `+2` per `<p>`, `+3` per `h1`-`h3`, `+5` per `<article>`, `-5` per
/// `nav`/`header`/`footer`/`aside`.
#[must_use]
pub fn score_content(node: &NodeRef) -> i32 {
    score_below(node, 1)
}

fn score_below(node: &NodeRef, depth: usize) -> i32 {
    if depth > MAX_SCORE_DEPTH {
        return 0;
    }
    dom::element_children(node)
        .iter()
        .map(|child| {
            let own = match dom::tag_name(child).as_str() {
                "p" => 2,
                "h1" | "h2" | "h3" => 3,
                "article" => 5,
                "nav" | "header" | "footer" | "aside" => -5,
                _ => 0,
            };
            own + score_below(child, depth + 1)
        })
        .sum()
}
