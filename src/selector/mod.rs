//! Selector Infrastructure
//!
//! Rules are plain predicates over parse-tree nodes; strategies are
//! ordered "try, else fall through" steps returning the node they picked.

use dom_query::NodeRef;

use crate::dom;

pub mod content;

pub use content::{find_content_root, score_content};

/// A selector rule that tests if a node matches certain criteria.
pub type Rule = fn(&NodeRef) -> bool;

/// A locator step: the node it settles on, or `None` to fall through.
pub type Strategy = for<'a> fn(&NodeRef<'a>) -> Option<NodeRef<'a>>;

/// First descendant (document order) matching the rule.
#[must_use]
pub fn query<'a>(root: &NodeRef<'a>, rule: Rule) -> Option<NodeRef<'a>> {
    dom::find_first(root, &|n| rule(n))
}

/// All descendants (document order) matching the rule.
#[must_use]
pub fn query_all<'a>(root: &NodeRef<'a>, rule: Rule) -> Vec<NodeRef<'a>> {
    dom::find_descendants(root, None, &|n| rule(n))
}

/// Run strategies in order; the first one that picks a node wins.
///
/// Returns the winning strategy's name alongside the node.
#[must_use]
pub fn first_match<'a>(
    root: &NodeRef<'a>,
    strategies: &[(&'static str, Strategy)],
) -> Option<(&'static str, NodeRef<'a>)> {
    strategies
        .iter()
        .find_map(|(name, strategy)| strategy(root).map(|node| (*name, node)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_target(node: &NodeRef) -> bool {
        dom::class_contains(node, "target")
    }

    #[test]
    fn query_finds_first_match() {
        let doc = dom::parse(r#"<div id="r"><p class="target">First</p><p class="target">Second</p></div>"#);
        let root = dom::select_first(&doc, "#r");
        let found = root.and_then(|r| query(&r, is_target));
        assert_eq!(found.map(|n| dom::visible_text(&n)), Some("First".to_string()));
    }

    #[test]
    fn query_all_keeps_document_order() {
        let doc = dom::parse(r#"<div id="r"><p class="target">1</p><div><p class="target">2</p></div></div>"#);
        let root = dom::select_first(&doc, "#r");
        let found = root.map(|r| query_all(&r, is_target)).unwrap_or_default();
        let texts: Vec<String> = found.iter().map(dom::visible_text).collect();
        assert_eq!(texts, vec!["1", "2"]);
    }
}
