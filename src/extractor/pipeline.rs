//! Extraction pipeline.
//!
//! Orchestrates one parse call:
//! 1. page metadata
//! 2. navigation sections (whole body, marks them processed)
//! 3. content root
//! 4. document builder over the root
//! 5. news-index normalization

use dom_query::Document as HtmlDocument;

use super::state::ExtractionState;
use super::{builder, navigation, normalize};
use crate::dom;
use crate::latex::LatexConverter;
use crate::metadata::extract_metadata;
use crate::result::{Document, Node, NodeType};
use crate::selector::find_content_root;
use crate::{Error, Options, Result};

/// Run the whole pipeline over a parsed page.
///
/// # Errors
///
/// Returns `Error::ParseError` when the tree has no `<body>`.
pub fn extract_document(
    doc: &HtmlDocument,
    options: &Options,
    latex: &dyn LatexConverter,
) -> Result<Document> {
    let body = dom::body(doc).ok_or_else(|| Error::ParseError("document has no <body>".to_string()))?;
    let metadata = extract_metadata(doc, options);

    let mut state = ExtractionState::new(options, latex);
    let navigation = navigation::extract_navigation(&body, &mut state);

    let root = find_content_root(&body);
    let mut content = Node::new(NodeType::Document);
    content.children = builder::build_content(&root, &mut state);
    normalize::normalize_news_index(&mut content);

    tracing::debug!(
        blocks = content.children.len(),
        navigation = navigation.len(),
        processed = state.processed_count(),
        "document built"
    );

    Ok(Document {
        title: metadata.title.unwrap_or_default(),
        url: metadata.url.unwrap_or_default(),
        lang: metadata.lang.unwrap_or_default(),
        theme_color: metadata.theme_color.unwrap_or_default(),
        content,
        navigation,
    })
}
