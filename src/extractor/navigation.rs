//! Navigation extractor.
//!
//! Page chrome (`nav`, `header`, `footer`, `aside`, `menu`) is pulled out
//! of the whole `<body>` into labeled `NavSection`s. A matched element is
//! taken whole: the walk does not look for further sections inside it,
//! but every link below it is collected. Extracted elements are marked as
//! processed so the document builder skips them. A chrome element without
//! links (an article byline header) is left to the builder.

use dom_query::NodeRef;

use super::state::ExtractionState;
use crate::dom;
use crate::patterns::NAVIGATION_TAGS;
use crate::result::{Node, NodeType};

/// Extract every navigation section below `body`, in document order.
pub fn extract_navigation(body: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    let mut sections = Vec::new();
    let mut stack: Vec<NodeRef> = dom::element_children(body).into_iter().rev().collect();

    while let Some(node) = stack.pop() {
        if is_navigation_element(&node) {
            if let Some(section) = nav_section(&node, state) {
                state.mark_done(node.id);
                sections.push(section);
                continue;
            }
        }
        stack.extend(dom::element_children(&node).into_iter().rev());
    }

    tracing::debug!(
        sections = sections.len(),
        links = sections.iter().map(|s| s.children.len()).sum::<usize>(),
        "navigation extracted"
    );
    sections
}

/// `nav`, `header`, `footer`, `aside` or `menu`, wherever it sits.
#[must_use]
pub fn is_navigation_element(node: &NodeRef) -> bool {
    NAVIGATION_TAGS.contains(&dom::tag_name(node).as_str())
}

/// Section label: `aria-label`, else a default per tag.
#[must_use]
pub fn section_label(node: &NodeRef) -> String {
    dom::attr_nonempty(node, "aria-label")
        .unwrap_or_else(|| default_label(&dom::tag_name(node)).to_string())
}

fn default_label(tag: &str) -> &'static str {
    match tag {
        "nav" => "Navigation",
        "header" => "Header",
        "footer" => "Footer",
        "aside" => "Sidebar",
        "menu" => "Menu",
        _ => "Links",
    }
}

/// Build the section, or `None` when it holds no links.
fn nav_section(node: &NodeRef, state: &ExtractionState) -> Option<Node> {
    let links: Vec<Node> = dom::find_descendants(node, None, &|n| {
        dom::is_one_of(n, &["a"]) && dom::attr_nonempty(n, "href").is_some()
    })
    .iter()
    .filter_map(|a| {
        let href = state.resolve(&dom::attr_nonempty(a, "href")?);
        let text = dom::visible_text(a);
        let text = if text.is_empty() { href.clone() } else { text };
        Some(Node::link(text, href))
    })
    .collect();

    if links.is_empty() {
        return None;
    }

    let mut section = Node::with_children(NodeType::NavSection, links);
    section.text = section_label(node);
    Some(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex::UnicodeLatex;
    use crate::Options;

    fn sections(html: &str) -> Vec<Node> {
        let doc = dom::parse(html);
        let body = dom::body(&doc).unwrap_or_else(|| panic!("no body"));
        let opts = Options::default();
        let mut state = ExtractionState::new(&opts, &UnicodeLatex);
        extract_navigation(&body, &mut state)
    }

    #[test]
    fn labels_follow_aria_then_tag() {
        let navs = sections(
            r#"<nav aria-label="Primary"><a href="/a">A</a></nav>
               <aside><a href="/b">B</a></aside>
               <menu><li><a href="/c">C</a></li></menu>"#,
        );
        let labels: Vec<&str> = navs.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(labels, ["Primary", "Sidebar", "Menu"]);
    }

    #[test]
    fn nested_sections_are_not_split() {
        let navs = sections(
            r#"<header><a href="/">Home</a><nav><a href="/x">X</a><a href="/y">Y</a></nav></header>"#,
        );
        assert_eq!(navs.len(), 1);
        assert_eq!(navs[0].text, "Header");
        assert_eq!(navs[0].children.len(), 3);
    }

    #[test]
    fn empty_text_falls_back_to_href() {
        let navs = sections(r#"<nav><a href="/feed.xml"><img src="rss.png"></a></nav>"#);
        assert_eq!(navs[0].children[0].text, "/feed.xml");
    }

    #[test]
    fn linkless_sections_are_dropped() {
        let navs = sections(r#"<footer><p>No links here</p></footer><nav><a href="">x</a></nav>"#);
        assert!(navs.is_empty());
    }

    #[test]
    fn linkless_article_header_is_content() {
        let navs = sections(
            r#"<article><header><h1>Title</h1><p>By Ann</p></header><p>Body</p></article>"#,
        );
        assert!(navs.is_empty());
    }

    #[test]
    fn header_inside_main_is_a_section() {
        let navs = sections(
            r#"<main><header><a href="/a">Section A</a><a href="/b">Section B</a></header><p>Body</p></main>"#,
        );
        assert_eq!(navs.len(), 1);
        assert_eq!(navs[0].text, "Header");
        assert_eq!(navs[0].children.len(), 2);
    }
}
