use page_tree::{parse, parse_with_options, Document, NodeType, Options};

fn page(html: &str) -> Document {
    match parse(html) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn header_cells_make_a_data_table() {
    let result = page(
        r#"<article>
            <p>Intro</p>
            <table>
                <tr><th>H1</th><th>H2</th></tr>
                <tr><td>A</td><td>B</td></tr>
            </table>
        </article>"#,
    );
    let table = result
        .blocks()
        .iter()
        .find(|n| n.node_type == NodeType::Table)
        .unwrap_or_else(|| panic!("no table in {:?}", result.content));
    assert_eq!(table.children.len(), 2);
    assert!(table.children.iter().all(|r| r.node_type == NodeType::TableRow));
    assert!(table.children[0].children.iter().all(|c| c.is_header));
    assert!(!table.children[1].children.iter().any(|c| c.is_header));
    assert_eq!(result.plain_text(), "Intro\nH1 | H2\nA | B");
}

#[test]
fn consistent_grid_without_headers_is_a_data_table() {
    let result = page(
        r#"<table>
            <tr><td>Oslo</td><td>Norway</td></tr>
            <tr><td>Lima</td><td>Peru</td></tr>
            <tr><td>Quito</td><td>Ecuador</td></tr>
        </table>"#,
    );
    let table = &result.content.children[0];
    assert_eq!(table.node_type, NodeType::Table);
    assert_eq!(table.children.len(), 3);
    assert_eq!(table.count(NodeType::TableCell), 6);
}

#[test]
fn irregular_table_is_flattened_to_rows() {
    let result = page(
        r#"<table>
            <tr><td>Site title</td></tr>
            <tr><td>Left</td><td>Middle</td><td>Right</td></tr>
            <tr><td>   </td></tr>
        </table>"#,
    );
    assert_eq!(result.content.count(NodeType::Table), 0);
    let kinds: Vec<NodeType> = result.blocks().iter().map(|n| n.node_type).collect();
    assert_eq!(kinds, [NodeType::Paragraph, NodeType::Paragraph]);
    assert_eq!(result.plain_text(), "Site title\nLeft · Middle · Right");
}

#[test]
fn navigation_tables_are_dropped() {
    let result = page(
        r#"<table role="navigation"><tr><th>Menu</th></tr><tr><td><a href="/a">A</a></td></tr></table><p>Body.</p>"#,
    );
    assert_eq!(result.plain_text(), "Body.");
}

#[test]
fn disabled_tables_are_flattened() {
    let options = Options {
        include_tables: false,
        ..Options::default()
    };
    let html = r#"<table><tr><th>Year</th><th>Total</th></tr><tr><td>2024</td><td>17</td></tr></table>"#;
    let result = match parse_with_options(html, &options) {
        Ok(page) => page,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(result.content.count(NodeType::Table), 0);
    assert_eq!(result.plain_text(), "Year · Total\n2024 · 17");
}

#[test]
fn dominant_link_makes_a_link_cell() {
    let result = page(
        r#"<table>
            <tr><th>File</th><th>Notes</th></tr>
            <tr><td><a href="/dl/app.zip">Download</a> (2 MB)</td><td>Read the <a href="/docs">docs</a> before installing anything</td></tr>
        </table>"#,
    );
    let row = &result.content.children[0].children[1];
    assert_eq!(row.children[0].children[0].node_type, NodeType::Link);
    assert_eq!(row.children[0].children[0].href, "/dl/app.zip");
    assert!(row.children[1].children.is_empty());
    assert_eq!(row.children[1].text, "Read the docs before installing anything");
}

#[test]
fn forum_listing_becomes_story_paragraphs() {
    let result = page(
        r#"<table id="hnmain"><tr><td><table>
            <tr class="athing submission"><td class="title"><span class="rank">1.</span></td>
              <td class="title"><span class="titleline"><a href="https://example.com/a">A new database engine</a></span></td></tr>
            <tr><td class="subtext"><span class="score">88 points</span> by <a href="user?id=x">x</a> | <a href="item?id=1">12 comments</a></td></tr>
            <tr class="spacer"></tr>
            <tr class="athing submission"><td class="title"><span class="titleline"><a href="https://example.com/b">Notes on parsing</a></span></td></tr>
            <tr><td class="subtext"><span class="score">5 points</span> | <a href="item?id=2">discuss</a></td></tr>
        </table></td></tr></table>"#,
    );
    assert_eq!(
        result.plain_text(),
        "A new database engine (88 points · 12 comments)\nNotes on parsing (5 points · discuss)"
    );
    assert!(result.blocks()[0].starts_with_link());
}

#[test]
fn navigation_inside_layout_cells_is_not_repeated() {
    let result = page(
        r#"<table>
            <tr><td><nav><a href="/home">Home</a><a href="/news">News</a></nav></td><td>Welcome</td></tr>
            <tr><td>Body one</td></tr>
        </table>"#,
    );
    assert_eq!(result.navigation.len(), 1);
    assert_eq!(result.navigation[0].children.len(), 2);
    assert_eq!(result.content.count(NodeType::Link), 0);
    assert_eq!(result.plain_text(), "Welcome\nBody one");
}

#[test]
fn navigation_inside_data_cells_is_not_repeated() {
    let result = page(
        r#"<table>
            <tr><th>Menu</th><th>Item</th></tr>
            <tr><td><nav><a href="/home">Home</a></nav></td><td>x</td></tr>
        </table>"#,
    );
    assert_eq!(result.navigation.len(), 1);
    assert_eq!(result.content.count(NodeType::Table), 1);
    assert_eq!(result.content.count(NodeType::Link), 0);
    assert!(!result.plain_text().contains("Home"));
}

#[test]
fn image_only_link_cell_is_a_link() {
    let result = page(
        r#"<table>
            <tr><th>Logo</th><th>Name</th></tr>
            <tr><td><a href="/acme"><img src="/logos/acme.png"></a></td><td>Acme Corp</td></tr>
        </table>"#,
    );
    let cell = &result.content.children[0].children[1].children[0];
    assert_eq!(cell.node_type, NodeType::TableCell);
    assert_eq!(cell.children.len(), 1);
    assert_eq!(cell.children[0].node_type, NodeType::Link);
    assert_eq!(cell.children[0].href, "/acme");
    assert_eq!(cell.children[0].text, "/acme");
}
