//! Table classifier.
//!
//! Every `<table>` ends up as one of:
//! - nothing (`role="navigation"`)
//! - forum listing (`athing` rows): one paragraph per story, comments
//!   indented through `prefix`
//! - data table: `Table`/`TableRow`/`TableCell`
//! - layout table: one paragraph per row, or the row's cells walked as
//!   content when they hold blocks

use dom_query::NodeRef;

use super::state::ExtractionState;
use super::tags::CONTENT_BLOCK_TAGS;
use super::{builder, inline};
use crate::dom;
use crate::patterns::{COMMENT_COUNT, SCORE_TEXT};
use crate::result::{Node, NodeType};

/// Indent width, in pixels, of one nesting level in image-indented threads.
const INDENT_IMG_WIDTH: usize = 40;

/// Classify and convert a table.
pub fn build_table(table: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    if dom::role(table) == "navigation" {
        tracing::trace!("navigation table dropped");
        return Vec::new();
    }

    if is_forum_table(table) {
        tracing::debug!("forum table");
        return forum_table(table, state);
    }

    let rows = own_rows(table);
    if state.options.include_tables && is_data_table(&rows) {
        tracing::trace!(rows = rows.len(), "data table");
        data_table(table, &rows, state)
    } else {
        tracing::trace!(rows = rows.len(), "layout table");
        layout_table(&rows, state)
    }
}

/// Rows of this table only: direct `tr`s and those of its row groups.
#[must_use]
pub fn own_rows<'a>(table: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut rows = Vec::new();
    for child in dom::element_children(table) {
        match dom::tag_name(&child).as_str() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                dom::element_children(&child)
                    .into_iter()
                    .filter(|r| dom::is_one_of(r, &["tr"])),
            ),
            _ => {}
        }
    }
    rows
}

fn cells<'a>(row: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    dom::element_children(row)
        .into_iter()
        .filter(|c| dom::is_one_of(c, &["td", "th"]))
        .collect()
}

// === Classification ===

/// Any row below carries an `athing` class.
#[must_use]
pub fn is_forum_table(table: &NodeRef) -> bool {
    dom::find_first(table, &|n| dom::is_one_of(n, &["tr"]) && dom::class_contains(n, "athing")).is_some()
}

/// A `<th>` anywhere in the grid, or two rows sharing a cell count of two
/// or more.
#[must_use]
pub fn is_data_table(rows: &[NodeRef]) -> bool {
    let row_cells: Vec<Vec<NodeRef>> = rows.iter().map(cells).collect();

    if row_cells
        .iter()
        .flatten()
        .any(|c| dom::is_one_of(c, &["th"]))
    {
        return true;
    }

    let counts: Vec<usize> = row_cells.iter().map(Vec::len).filter(|&n| n >= 2).collect();
    counts
        .iter()
        .enumerate()
        .any(|(i, n)| counts[i + 1..].contains(n))
}

// === Data tables ===

fn data_table(table: &NodeRef, rows: &[NodeRef], state: &ExtractionState) -> Vec<Node> {
    let mut out = Vec::new();

    let caption = dom::element_children(table)
        .into_iter()
        .find(|c| dom::is_one_of(c, &["caption"]))
        .map(|c| dom::visible_text(&c))
        .filter(|t| !t.is_empty());
    if let Some(caption) = caption {
        out.push(Node::with_children(
            NodeType::Paragraph,
            vec![Node::with_text(NodeType::Strong, caption)],
        ));
    }

    let table_rows: Vec<Node> = rows
        .iter()
        .map(cells)
        .filter(|c| !c.is_empty())
        .map(|c| {
            Node::with_children(
                NodeType::TableRow,
                c.iter().map(|cell| table_cell(cell, state)).collect(),
            )
        })
        .collect();

    if !table_rows.is_empty() {
        out.push(Node::with_children(NodeType::Table, table_rows));
    }
    out
}

/// Links below `node` that navigation extraction has not taken.
fn live_links<'a>(node: &NodeRef<'a>, state: &ExtractionState) -> Vec<NodeRef<'a>> {
    dom::find_descendants(node, None, &|n| {
        dom::is_one_of(n, &["a"]) && dom::attr_nonempty(n, "href").is_some() && !state.is_consumed(n)
    })
}

/// A cell is a single `Link` when it holds exactly one link covering at
/// least half its text (or the cell has no text), else plain text.
fn table_cell(cell: &NodeRef, state: &ExtractionState) -> Node {
    let text = state.convert_text(&state.live_text(cell));
    let links = live_links(cell, state);

    let mut node = match links.as_slice() {
        [link] => {
            let link_text = dom::visible_text(link);
            let cell_len = text.chars().count();
            if cell_len == 0 || link_text.chars().count() * 2 >= cell_len {
                let href = state.resolve(&dom::attr_nonempty(link, "href").unwrap_or_default());
                let label = if link_text.is_empty() { href.clone() } else { link_text };
                Node::with_children(NodeType::TableCell, vec![Node::link(label, href)])
            } else {
                Node::with_text(NodeType::TableCell, text)
            }
        }
        _ => Node::with_text(NodeType::TableCell, text),
    };
    node.is_header = dom::is_one_of(cell, &["th"]);
    node
}

// === Layout tables ===

fn layout_table(rows: &[NodeRef], state: &mut ExtractionState) -> Vec<Node> {
    let mut out = Vec::new();

    for row in rows {
        let row_cells = cells(row);
        if row_cells.iter().any(|c| dom::has_descendant_tag(c, &CONTENT_BLOCK_TAGS)) {
            for cell in &row_cells {
                out.extend(builder::walk_children(cell, state));
            }
            continue;
        }
        out.extend(layout_row(row, &row_cells, state));
    }
    out
}

/// The row's links separated by spaces, else its cell texts joined with
/// `" · "`.
fn layout_row(row: &NodeRef, row_cells: &[NodeRef], state: &ExtractionState) -> Option<Node> {
    let links: Vec<Node> = live_links(row, state)
        .iter()
        .filter_map(|a| {
            let href = state.resolve(&dom::attr_nonempty(a, "href")?);
            let text = inline::link_text(a, state)?;
            Some(Node::link(text, href))
        })
        .collect();

    if !links.is_empty() {
        let mut children = Vec::with_capacity(links.len() * 2);
        for link in links {
            if !children.is_empty() {
                children.push(Node::text_node(" "));
            }
            children.push(link);
        }
        return Some(Node::with_children(NodeType::Paragraph, children));
    }

    let text = row_cells
        .iter()
        .map(|c| state.convert_text(&state.live_text(c)))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    (!text.is_empty()).then(|| Node::paragraph(text))
}

// === Forum tables ===

fn forum_table(table: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    let rows = forum_rows(table);

    let mut out = Vec::new();
    let mut i = 0;
    while i < rows.len() {
        let row = rows[i];
        i += 1;
        if !dom::class_contains(&row, "athing") {
            continue;
        }

        if let Some(text) = dom::find_first(&row, &|n| dom::class_contains(n, "commtext")) {
            out.extend(comment_nodes(&row, &text, state));
            continue;
        }

        let Some(title) = story_link(&row, state) else {
            continue;
        };
        let mut paragraph = Node::with_children(NodeType::Paragraph, vec![title]);

        if let Some(next) = rows.get(i).filter(|r| !is_title_or_spacer(r)) {
            let meta = story_metadata(next, state);
            if !meta.is_empty() {
                paragraph.children.push(Node::text_node(format!(" ({meta})")));
            }
            i += 1;
        }
        out.push(paragraph);
    }
    out
}

/// Rows in document order, descending through nested tables and cells.
fn forum_rows<'a>(table: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut rows = Vec::new();
    let mut stack: Vec<NodeRef<'a>> = dom::element_children(table).into_iter().rev().collect();

    while let Some(node) = stack.pop() {
        match dom::tag_name(&node).as_str() {
            "tr" => rows.push(node),
            "table" | "tbody" | "thead" | "tfoot" | "td" | "th" => {}
            _ => continue,
        }
        stack.extend(dom::element_children(&node).into_iter().rev());
    }
    rows
}

fn is_title_or_spacer(row: &NodeRef) -> bool {
    let class = dom::class_name(row);
    class.contains("athing") || class.contains("spacer")
}

/// Title link: first link of the `titleline` element, else the first link
/// inside any element with a `title` class.
fn story_link(row: &NodeRef, state: &ExtractionState) -> Option<Node> {
    let has_href = |n: &NodeRef| dom::is_one_of(n, &["a"]) && dom::attr_nonempty(n, "href").is_some();

    let link = dom::find_first(row, &|n| dom::class_contains(n, "titleline"))
        .and_then(|line| dom::find_first(&line, &has_href))
        .or_else(|| {
            dom::find_descendants(row, None, &|n| dom::class_contains(n, "title"))
                .iter()
                .find_map(|t| dom::find_first(t, &has_href))
        })?;

    let text = dom::visible_text(&link);
    if text.is_empty() {
        return None;
    }
    let href = state.resolve(&dom::attr_nonempty(&link, "href")?);
    Some(Node::link(state.convert_text(&text), href))
}

/// `"<score> · <comments>"` from a story's metadata row.
fn story_metadata(row: &NodeRef, state: &ExtractionState) -> String {
    let live = |n: &NodeRef| !state.is_consumed(n);
    let score = dom::find_first(row, &|n| dom::class_contains(n, "score") && live(n))
        .map(|n| state.live_text(&n))
        .or_else(|| {
            dom::find_descendants(row, None, &|n| dom::is_one_of(n, &["span"]) && live(n))
                .iter()
                .map(|n| state.live_text(n))
                .find(|t| SCORE_TEXT.is_match(t))
        });

    let comments = live_links(row, state)
        .iter()
        .rev()
        .map(|n| state.live_text(n))
        .find(|t| COMMENT_COUNT.is_match(t));

    [score, comments]
        .into_iter()
        .flatten()
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Header (`author · age`) and body paragraphs of a thread comment,
/// indented two spaces per nesting level.
fn comment_nodes(row: &NodeRef, body: &NodeRef, state: &mut ExtractionState) -> Vec<Node> {
    let prefix = "  ".repeat(comment_indent(row));
    let mut out = Vec::new();

    let header = ["hnuser", "age"]
        .iter()
        .filter_map(|class| dom::find_first(row, &|n| dom::class_contains(n, class)))
        .map(|n| dom::visible_text(&n))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    if !header.is_empty() {
        out.push(Node::paragraph(header).with_prefix(prefix.clone()));
    }

    let text = inline::inline_nodes(body, state);
    if !text.is_empty() {
        out.push(Node::with_children(NodeType::Paragraph, text).with_prefix(prefix));
    }
    state.mark_done(body.id);
    out
}

/// Nesting level from the `indent` attribute of the `ind` cell, else from
/// the width of its spacer image.
fn comment_indent(row: &NodeRef) -> usize {
    let Some(cell) = dom::find_first(row, &|n| dom::class_name(n).split_whitespace().any(|c| c == "ind")) else {
        return 0;
    };
    if let Some(level) = dom::attr_nonempty(&cell, "indent").and_then(|v| v.parse().ok()) {
        return level;
    }
    dom::find_first(&cell, &|n| dom::is_one_of(n, &["img"]))
        .and_then(|img| dom::attr_nonempty(&img, "width"))
        .and_then(|w| w.parse::<usize>().ok())
        .map_or(0, |w| w / INDENT_IMG_WIDTH)
}
