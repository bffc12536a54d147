//! Shared metadata extractor for story entries.
//!
//! Story cards, `<article>` teasers and news-style `<li>` entries all end
//! up as a [`StoryCard`]: a title link plus whatever description, byline
//! and date can be found nearby.

use dom_query::{NodeId, NodeRef};
use url::Url;

use super::format::{format_date, truncate};
use crate::dom;
use crate::patterns::{AUTHOR_MARKERS, BYLINE_PREFIX};
use crate::result::{Node, NodeType};
use crate::url_utils::{extract_domain, resolve};

/// Minimum length of a description paragraph.
pub const MIN_DESCRIPTION_LEN: usize = 30;

/// Longest text accepted as a byline.
const MAX_AUTHOR_LEN: usize = 100;

/// How far below the scope author/date markers are searched.
const META_SEARCH_DEPTH: usize = 6;

/// One entry of a story list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryCard {
    pub title: String,
    pub href: String,
    /// Host of `href` without `www.`; empty for relative links.
    pub domain: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl StoryCard {
    /// Byline items in display order.
    #[must_use]
    pub fn meta_items(&self) -> Vec<&str> {
        [self.author.as_deref(), self.date.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Render as a `ListItem`: title link, source domain, description,
    /// then `author · date`.
    #[must_use]
    pub fn into_list_item(self, description_max_len: usize) -> Node {
        let mut item = Node::new(NodeType::ListItem);
        let meta = self.meta_items().join(" · ");

        if self.href.is_empty() {
            item.children.push(Node::text_node(self.title));
        } else {
            item.children.push(Node::link(self.title, self.href));
        }
        if !self.domain.is_empty() {
            item.children.push(Node::text_node(format!(" ({})", self.domain)));
        }
        if let Some(description) = self.description {
            item.children
                .push(Node::paragraph(truncate(&description, description_max_len)));
        }
        if !meta.is_empty() {
            item.children.push(Node::paragraph(meta));
        }
        item
    }
}

/// Text long enough to describe a story and not a byline.
#[must_use]
pub fn is_description_text(text: &str) -> bool {
    text.chars().count() > MIN_DESCRIPTION_LEN && !text.starts_with("By ")
}

/// Strip a leading "By " and collapse whitespace.
#[must_use]
pub fn clean_author(text: &str) -> String {
    dom::collapse_whitespace(&BYLINE_PREFIX.replace(text.trim(), ""))
}

/// First byline below `scope` (class contains "author"/"byline", or `rel=author`).
#[must_use]
pub fn find_author(scope: &NodeRef) -> Option<String> {
    dom::find_descendants(scope, Some(META_SEARCH_DEPTH), &|n| {
        let class = dom::class_name(n);
        AUTHOR_MARKERS.iter().any(|m| class.contains(m))
            || dom::attr(n, "rel").is_some_and(|r| r.eq_ignore_ascii_case("author"))
    })
    .iter()
    .map(|n| clean_author(&dom::visible_text(n)))
    .find(|a| !a.is_empty() && a.chars().count() <= MAX_AUTHOR_LEN)
}

/// Publication date below `scope`.
///
/// A `<time datetime>` attribute is preferred and formatted as
/// `"Mon D, YYYY"`; otherwise the text of the first `<time>` is used.
#[must_use]
pub fn find_date(scope: &NodeRef) -> Option<String> {
    let times = dom::find_descendants(scope, Some(META_SEARCH_DEPTH), &|n| dom::is_one_of(n, &["time"]));
    times
        .iter()
        .find_map(|t| dom::attr_nonempty(t, "datetime"))
        .map(|dt| format_date(&dt))
        .or_else(|| {
            times
                .iter()
                .map(dom::visible_text)
                .find(|t| !t.is_empty())
        })
}

/// First `<p>`, `<div>` or `<span>` below `scope` whose text reads like a
/// description. Elements containing `exclude` (the title) and wrapper
/// divs holding further blocks are passed over.
#[must_use]
pub fn find_description(scope: &NodeRef, exclude: Option<NodeId>, title: &str) -> Option<String> {
    let candidates = dom::find_descendants(scope, Some(META_SEARCH_DEPTH), &|n| {
        dom::is_one_of(n, &["p", "div", "span"])
    });
    candidates
        .iter()
        .filter(|n| Some(n.id) != exclude)
        .filter(|n| {
            exclude.is_none_or(|ex| {
                dom::find_first(n, &|d| d.id == ex).is_none()
            })
        })
        .filter(|n| {
            !(dom::is_one_of(n, &["div"]) && dom::has_descendant_tag(n, &["p", "div", "h1", "h2", "h3"]))
        })
        .map(dom::visible_text)
        .find(|text| is_description_text(text) && text != title)
}

/// Description among the element siblings that follow `node`.
#[must_use]
pub fn sibling_description(node: &NodeRef, title: &str) -> Option<String> {
    let mut sibling = dom::next_element_sibling(node);
    while let Some(s) = sibling {
        if dom::is_one_of(&s, &["p", "div", "span"]) {
            let text = dom::visible_text(&s);
            if is_description_text(&text) && text != title {
                return Some(text);
            }
        }
        sibling = dom::next_element_sibling(&s);
    }
    None
}

/// Build a card from a container such as an `<article>` or `<li>`.
///
/// The title comes from the first heading (its first link supplying the
/// href), else from the first link with more than 20 characters of text.
/// Returns `None` when no title can be found.
#[must_use]
pub fn story_from_element(el: &NodeRef, base: Option<&Url>) -> Option<StoryCard> {
    let (title, href, title_node) = if let Some(heading) = dom::find_first(el, &dom::is_heading) {
        let title = dom::visible_text(&heading);
        let href = first_href(&heading)
            .or_else(|| {
                // <a><h2>Title</h2></a>
                heading
                    .parent()
                    .filter(|p| dom::is_one_of(p, &["a"]))
                    .and_then(|p| dom::attr_nonempty(&p, "href"))
            })
            .unwrap_or_default();
        (title, href, heading)
    } else {
        let link = dom::find_first(el, &|n| {
            dom::is_one_of(n, &["a"])
                && dom::attr_nonempty(n, "href").is_some()
                && dom::text_len(n) > 20
        })?;
        let href = dom::attr_nonempty(&link, "href").unwrap_or_default();
        (dom::visible_text(&link), href, link)
    };

    if title.is_empty() {
        return None;
    }

    let href = resolve(&href, base);
    Some(StoryCard {
        domain: extract_domain(&href),
        description: sibling_description(&title_node, &title)
            .or_else(|| find_description(el, Some(title_node.id), &title)),
        author: find_author(el),
        date: find_date(el),
        title,
        href,
    })
}

/// `href` of the first link below (or at) `node`.
#[must_use]
pub fn first_href(node: &NodeRef) -> Option<String> {
    if dom::is_one_of(node, &["a"]) {
        if let Some(href) = dom::attr_nonempty(node, "href") {
            return Some(href);
        }
    }
    dom::find_first(node, &|n| dom::is_one_of(n, &["a"]) && dom::attr_nonempty(n, "href").is_some())
        .and_then(|a| dom::attr_nonempty(&a, "href"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a dom_query::Document, sel: &str) -> NodeRef<'a> {
        dom::select_first(doc, sel).unwrap_or_else(|| panic!("missing {sel}"))
    }

    #[test]
    fn article_card_collects_metadata() {
        let doc = dom::parse(
            r#"<article id="a">
                <h2><a href="https://www.example.com/story">Council approves new park plan</a></h2>
                <span class="byline">By Jane Doe</span>
                <time datetime="2024-03-05T10:00:00Z">yesterday</time>
                <p>The city council voted on Tuesday to approve the long-debated plan.</p>
            </article>"#,
        );
        let card = story_from_element(&first(&doc, "#a"), None);
        let card = card.unwrap_or_default();
        assert_eq!(card.title, "Council approves new park plan");
        assert_eq!(card.href, "https://www.example.com/story");
        assert_eq!(card.domain, "example.com");
        assert_eq!(card.author.as_deref(), Some("Jane Doe"));
        assert_eq!(card.date.as_deref(), Some("Mar 5, 2024"));
        assert_eq!(
            card.description.as_deref(),
            Some("The city council voted on Tuesday to approve the long-debated plan.")
        );
    }

    #[test]
    fn byline_is_not_a_description() {
        assert!(!is_description_text("By Someone Who Writes Very Long Bylines Always"));
        assert!(!is_description_text("Too short"));
        assert!(is_description_text("A description that is clearly long enough to count."));
    }

    #[test]
    fn untitled_element_yields_none() {
        let doc = dom::parse(r#"<article id="a"><p>Only a short text</p></article>"#);
        assert!(story_from_element(&first(&doc, "#a"), None).is_none());
    }

    #[test]
    fn list_item_layout() {
        let card = StoryCard {
            title: "Title".into(),
            href: "https://example.com/x".into(),
            domain: "example.com".into(),
            description: Some("Desc".into()),
            author: Some("Ann".into()),
            date: Some("Jan 1, 2024".into()),
        };
        let item = card.into_list_item(200);
        assert_eq!(item.node_type, NodeType::ListItem);
        assert!(item.starts_with_link());
        assert_eq!(item.children.len(), 4);
        assert_eq!(item.children[1].text, " (example.com)");
        assert_eq!(item.children[3].plain_text(), "Ann · Jan 1, 2024");
    }

    #[test]
    fn date_falls_back_to_time_text() {
        let doc = dom::parse(r#"<div id="d"><time>2 hours ago</time></div>"#);
        assert_eq!(find_date(&first(&doc, "#d")).as_deref(), Some("2 hours ago"));
    }
}
