//! # page-tree
//!
//! Turns real-world HTML pages into one normalized document tree for
//! monospace reading.
//!
//! Genuine content (headings, paragraphs, lists, tables, forms, images,
//! story lists) is separated from page chrome, which is returned as
//! labeled navigation sections.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_tree::{parse, NodeType};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><nav><a href="/">Home</a></nav>
//! <article><h1>Hello</h1><p>Main content here.</p></article></body></html>"#;
//!
//! let page = parse(html)?;
//! assert_eq!(page.title, "My Article");
//! assert_eq!(page.content.node_type, NodeType::Document);
//! assert_eq!(page.navigation.len(), 1);
//! assert_eq!(page.plain_text(), "Hello\nMain content here.");
//! # Ok::<(), page_tree::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Navigation**: `nav`/`header`/`footer`/`aside`/`menu` become `NavSection`s
//! - **Content root**: `<main>`, `<article>`, `role=main`, content ids,
//!   scored containers, then `<body>`
//! - **Builder**: recursive tag-to-node walk with table classification and
//!   article-list detection
//! - **Normalization**: news-index pages are consolidated into one list

mod error;
mod options;
mod result;

/// DOM operations adapter over the `dom_query` arena tree.
pub mod dom;

/// Content root locator and selector helpers.
pub mod selector;

/// Shared marker lists and text patterns.
pub mod patterns;

/// Document builder (navigation, tables, lists, article lists).
pub mod extractor;

/// Page metadata and story-entry helpers.
pub mod metadata;

/// URL utilities for validation, resolution, and display.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// LaTeX to Unicode conversion interface.
pub mod latex;

// Public API - re-exports
pub use error::{Error, Result};
pub use latex::{LatexConverter, UnicodeLatex};
pub use options::Options;
pub use result::{Document, Node, NodeType};

/// Parses an HTML page using default options.
///
/// # Example
///
/// ```rust
/// use page_tree::parse;
///
/// let page = parse("<html><body><p>Content</p></body></html>")?;
/// assert_eq!(page.plain_text(), "Content");
/// # Ok::<(), page_tree::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse(html: &str) -> Result<Document> {
    parse_with_options(html, &Options::default())
}

/// Parses an HTML page with custom options and the built-in LaTeX converter.
///
/// # Example
///
/// ```rust
/// use page_tree::{parse_with_options, Options};
///
/// let options = Options {
///     url: Some("https://example.com/news/".to_string()),
///     ..Options::default()
/// };
/// let page = parse_with_options(r#"<p><a href="today">Today</a></p>"#, &options)?;
/// assert_eq!(page.url, "https://example.com/news/");
/// assert_eq!(page.content.children[0].children[0].href, "https://example.com/news/today");
/// # Ok::<(), page_tree::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse_with_options(html: &str, options: &Options) -> Result<Document> {
    parse_with_converter(html, options, &UnicodeLatex)
}

/// Parses an HTML page with a caller-supplied LaTeX converter.
///
/// # Errors
///
/// - `Error::InvalidUrl` when `options.url` is set but not an absolute
///   http(s) URL
/// - `Error::ParseError` when the parsed tree has no body
pub fn parse_with_converter(
    html: &str,
    options: &Options,
    latex: &dyn LatexConverter,
) -> Result<Document> {
    validate_options(options)?;
    let doc = dom::parse(html);
    extractor::extract_document(&doc, options, latex)
}

/// Parses HTML bytes with automatic encoding detection.
///
/// The charset comes from a byte-order mark, `<meta charset>` or an
/// `http-equiv` Content-Type declaration, defaulting to UTF-8. Invalid
/// sequences are replaced rather than rejected.
///
/// # Example
///
/// ```rust
/// use page_tree::parse_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let page = parse_bytes(html)?;
/// assert_eq!(page.plain_text(), "Café");
/// # Ok::<(), page_tree::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse_bytes(html: &[u8]) -> Result<Document> {
    parse_bytes_with_options(html, &Options::default())
}

/// Parses HTML bytes with custom options and automatic encoding detection.
#[allow(clippy::missing_errors_doc)]
pub fn parse_bytes_with_options(html: &[u8], options: &Options) -> Result<Document> {
    let html_str = encoding::decode_html(html);
    parse_with_options(&html_str, options)
}

fn validate_options(options: &Options) -> Result<()> {
    match options.url.as_deref() {
        Some(url) if !url_utils::is_absolute_url(url).0 => Err(Error::InvalidUrl(url.to_string())),
        _ => Ok(()),
    }
}
