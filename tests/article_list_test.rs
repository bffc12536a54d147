use page_tree::patterns::is_numbered_item;
use page_tree::{parse, Document, NodeType};

fn page(html: &str) -> Document {
    match parse(html) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

fn article(href: &str, title: &str) -> String {
    format!(
        r#"<article><h2><a href="{href}">{title}</a></h2><p>{title} is described here in more than thirty characters.</p></article>"#
    )
}

fn stories(extra: &str) -> String {
    format!(
        "<html><body><div class=\"stories\">{}{}{}{}</div></body></html>",
        article("/one", "First real headline here"),
        article("/two", "Second real headline here"),
        extra,
        article("/three", "Third real headline here"),
    )
}

#[test]
fn three_articles_become_one_list() {
    let result = page(&stories(""));
    assert_eq!(result.blocks().len(), 1);

    let list = &result.content.children[0];
    assert_eq!(list.node_type, NodeType::List);
    assert_eq!(list.children.len(), 3);
    assert!(list.children.iter().all(|i| i.node_type == NodeType::ListItem));
    assert!(list.children.iter().all(|i| i.starts_with_link()));
    assert_eq!(list.children[0].children[0].text, "First real headline here");
    assert_eq!(list.children[0].children[0].href, "/one");
}

#[test]
fn sponsored_article_is_excluded() {
    let sponsored =
        r#"<article class="sponsored"><h2><a href="/ad">Buy our sponsored product now</a></h2></article>"#;
    let result = page(&stories(sponsored));

    let list = &result.content.children[0];
    assert_eq!(list.node_type, NodeType::List);
    assert_eq!(list.children.len(), 3);
    assert!(list
        .children
        .iter()
        .all(|i| i.children[0].href != "/ad"));
}

#[test]
fn single_article_is_not_a_list() {
    let result = page(&format!(
        "<html><body>{}</body></html>",
        article("/only", "Only headline on this page")
    ));
    assert_eq!(result.content.count(NodeType::List), 0);
    assert_eq!(result.blocks()[0].node_type, NodeType::Heading2);
}

#[test]
fn story_cards_carry_domain_byline_and_date() {
    let card = |n: u32| {
        format!(
            r#"<div class="card">
                <h3><a href="https://www.example.com/story/{n}">Story number {n} about the council</a></h3>
                <p>Councillors met again on Tuesday to discuss item {n} at length.</p>
                <span class="author">By Reporter {n}</span>
                <time datetime="2024-03-0{n}T08:00:00Z">March</time>
            </div>"#
        )
    };
    let html = format!("<main>{}{}{}</main>", card(1), card(2), card(3));
    let result = page(&html);

    let list = &result.content.children[0];
    assert_eq!(list.node_type, NodeType::List);
    assert_eq!(list.children.len(), 3);

    let first = &list.children[0];
    assert_eq!(first.children[0].href, "https://www.example.com/story/1");
    assert_eq!(first.children[1].text, " (example.com)");
    assert_eq!(
        first.children[2].plain_text(),
        "Councillors met again on Tuesday to discuss item 1 at length."
    );
    assert_eq!(first.children[3].plain_text(), "Reporter 1 · Mar 1, 2024");
}

#[test]
fn duplicate_story_links_are_listed_once() {
    let card = |href: &str, title: &str| {
        format!(r#"<div class="teaser"><h3><a href="{href}">{title}</a></h3></div>"#)
    };
    let html = format!(
        "<main>{}{}{}{}</main>",
        card("/a", "Harbour expansion approved"),
        card("/b", "Rail strike ends after talks"),
        card("/a", "Harbour expansion approved"),
        card("/c", "Museum reopens its east wing"),
    );
    let result = page(&html);
    let list = &result.content.children[0];
    assert_eq!(list.node_type, NodeType::List);
    let hrefs: Vec<&str> = list.children.iter().map(|i| i.children[0].href.as_str()).collect();
    assert_eq!(hrefs, ["/a", "/b", "/c"]);
}

#[test]
fn numbered_results_are_not_story_cards() {
    let result_item = |n: u32| {
        format!(r#"<div class="result"><h3><a href="/r/{n}">{n}. Search result title number {n}</a></h3></div>"#)
    };
    let html = format!("<main>{}{}{}</main>", result_item(1), result_item(2), result_item(3));
    let result = page(&html);
    assert_eq!(result.content.count(NodeType::List), 0);
    assert_eq!(result.content.count(NodeType::Heading3), 3);
}

#[test]
fn year_prefixed_headlines_are_story_cards() {
    let card = |href: &str, title: &str| {
        format!(r#"<div class="teaser"><h3><a href="{href}">{title}</a></h3></div>"#)
    };
    let html = format!(
        "<main>{}{}{}</main>",
        card("/budget", "2025 Budget Proposal Released"),
        card("/vote", "2024 Election results are final"),
        card("/archive", "1999 Archive story revisited"),
    );
    let result = page(&html);
    assert_eq!(result.content.children[0].node_type, NodeType::List);
    assert_eq!(result.content.children[0].children.len(), 3);
}

#[test]
fn numbered_item_pattern() {
    assert!(is_numbered_item("1. First Result Title"));
    assert!(is_numbered_item("12) Another result"));
    assert!(!is_numbered_item("2025 Budget Proposal Released"));
    assert!(!is_numbered_item("Budget 2. draft"));
}

#[test]
fn news_index_lists_are_merged() {
    let html = r#"<body>
        <h2>Top stories</h2>
        <div id="s1"></div><div id="s2"></div><div id="s3"></div><div id="s4"></div><div id="s5"></div>
        <ul><li><a href="/one">First story</a></li><li><a href="/two">Second story</a></li></ul>
        <p>[Image: front page photo]</p>
        <ul><li><a href="/two">Second story</a></li><li><a href="/three">Third story</a></li></ul>
        <p>Short text</p>
        <ul><li><a href="/four">Fourth story</a></li></ul>
        <p>A paragraph that is clearly long enough to be kept.</p>
    </body>"#;
    let result = page(html);

    let kinds: Vec<NodeType> = result.blocks().iter().map(|n| n.node_type).collect();
    assert_eq!(kinds, [NodeType::Heading2, NodeType::List, NodeType::Paragraph]);

    let hrefs: Vec<&str> = result.content.children[1]
        .children
        .iter()
        .map(|i| i.children[0].href.as_str())
        .collect();
    assert_eq!(hrefs, ["/one", "/two", "/three", "/four"]);
    assert_eq!(result.content.count(NodeType::Anchor), 0);
}

#[test]
fn list_items_holding_articles_become_story_entries() {
    let result = page(
        r#"<ul>
            <li><article>
                <h2><a href="https://news.example.com/harbour">Harbour expansion approved</a></h2>
                <p>The council voted to extend the eastern quay by two hundred metres.</p>
            </article></li>
            <li><article><h2><a href="/rail">Rail strike ends after talks</a></h2></article></li>
            <li>Plain entry</li>
        </ul>"#,
    );
    let list = &result.content.children[0];
    assert_eq!(list.node_type, NodeType::List);
    assert_eq!(list.children.len(), 3);

    let first = &list.children[0];
    assert_eq!(first.children[0].node_type, NodeType::Link);
    assert_eq!(first.children[0].text, "Harbour expansion approved");
    assert_eq!(first.children[1].text, " (news.example.com)");
    assert_eq!(
        first.children[2].plain_text(),
        "The council voted to extend the eastern quay by two hundred metres."
    );

    let second = &list.children[1];
    assert_eq!(second.children.len(), 1);
    assert_eq!(second.children[0].href, "/rail");

    assert_eq!(list.children[2].plain_text(), "Plain entry");
}
