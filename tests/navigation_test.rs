use page_tree::{parse, parse_with_options, Document, NodeType, Options};

fn page(html: &str) -> Document {
    match parse(html) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

const CHROME_PAGE: &str = r#"
<html><body>
    <header><a href="/">Home</a><a href="/about">About</a></header>
    <nav aria-label="Main navigation"><a href="/news">News</a><a href="/sport">Sport</a></nav>
    <article><h1>Story headline</h1><p>Story body text.</p></article>
    <footer><a href="/privacy">Privacy</a></footer>
</body></html>
"#;

#[test]
fn chrome_is_split_into_labeled_sections() {
    let result = page(CHROME_PAGE);
    assert_eq!(result.navigation.len(), 3);

    let labels: Vec<&str> = result.navigation.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(labels, ["Header", "Main navigation", "Footer"]);

    let main_nav = &result.navigation[1];
    assert_eq!(main_nav.node_type, NodeType::NavSection);
    assert_eq!(main_nav.children.len(), 2);
    assert!(main_nav.children.iter().all(|c| c.node_type == NodeType::Link));
}

#[test]
fn navigation_links_do_not_leak_into_content() {
    let result = page(CHROME_PAGE);
    let kinds: Vec<NodeType> = result.blocks().iter().map(|n| n.node_type).collect();
    assert_eq!(kinds, [NodeType::Heading1, NodeType::Paragraph]);
    assert_eq!(result.content.count(NodeType::Link), 0);
    assert_eq!(result.plain_text(), "Story headline\nStory body text.");
}

#[test]
fn navigation_links_are_resolved_against_page_url() {
    let options = Options {
        url: Some("https://example.com/section/page.html".to_string()),
        ..Options::default()
    };
    let result = match parse_with_options(CHROME_PAGE, &options) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    let hrefs: Vec<&str> = result.navigation[0]
        .children
        .iter()
        .map(|l| l.href.as_str())
        .collect();
    assert_eq!(hrefs, ["https://example.com/", "https://example.com/about"]);
}

#[test]
fn sections_are_found_anywhere_in_the_body() {
    let result = page(
        r#"<div class="layout">
            <div class="sidebar"><aside><a href="/tags">Tags</a></aside></div>
            <div class="menu-wrap"><menu><li><a href="/settings">Settings</a></li></menu></div>
            <p>Body text.</p>
        </div>"#,
    );
    let labels: Vec<&str> = result.navigation.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(labels, ["Sidebar", "Menu"]);
    assert_eq!(result.plain_text(), "Body text.");
}

#[test]
fn nested_chrome_is_one_section() {
    let result = page(
        r#"<header><a href="/">Logo</a><nav><a href="/a">A</a><a href="/b">B</a></nav></header><p>Body.</p>"#,
    );
    assert_eq!(result.navigation.len(), 1);
    assert_eq!(result.navigation[0].children.len(), 3);
}

#[test]
fn byline_header_stays_in_content() {
    let result = page(
        r#"<article><header><h1>Title</h1><p class="byline">By Ann Writer</p></header><p>Body text.</p></article>"#,
    );
    assert!(result.navigation.is_empty());
    assert_eq!(result.plain_text(), "Title\nBy Ann Writer\nBody text.");
}

#[test]
fn linked_header_inside_main_is_navigation() {
    let result = page(
        r#"<main><header><a href="/a">Section A</a><a href="/b">Section B</a></header><p>Body</p></main>"#,
    );
    assert_eq!(result.navigation.len(), 1);
    assert_eq!(result.navigation[0].text, "Header");
    assert_eq!(result.navigation[0].children.len(), 2);
    assert_eq!(result.content.count(NodeType::Link), 0);
    assert_eq!(result.plain_text(), "Body");
}

#[test]
fn footer_without_links_is_not_navigation() {
    let result = page("<body><p>Body paragraph.</p><footer><p>Copyright 2024</p></footer></body>");
    assert!(result.navigation.is_empty());
    assert_eq!(result.plain_text(), "Body paragraph.\nCopyright 2024");
}

#[test]
fn link_without_text_uses_href() {
    let result = page(r#"<nav><a href="/feed.xml"></a><a href="/">Home</a></nav>"#);
    let texts: Vec<&str> = result.navigation[0]
        .children
        .iter()
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(texts, ["/feed.xml", "Home"]);
}
