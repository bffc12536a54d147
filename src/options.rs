//! Configuration options for page extraction.
//!
//! `Options` is an immutable value passed by reference into every entry
//! point. Nothing is stored process-wide, so parses with different options
//! can run side by side.

/// Configuration options for page extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use page_tree::Options;
///
/// let options = Options {
///     include_tables: false,
///     url: Some("https://example.com/news/".to_string()),
///     ..Options::default()
/// };
/// assert!(options.convert_latex);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Convert LaTeX and MathML spans to Unicode text.
    ///
    /// Default: `true`
    pub convert_latex: bool,

    /// Keep data tables as Table/TableRow/TableCell trees.
    ///
    /// When disabled every table other than forum listings is flattened to
    /// one paragraph per row.
    ///
    /// Default: `true`
    pub include_tables: bool,

    /// URL the page was fetched from.
    ///
    /// Becomes `Document::url` and the base for resolving relative links
    /// and image sources. Must be an absolute http(s) URL.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Maximum length (characters) of story-card descriptions.
    ///
    /// Default: `200`
    pub description_max_len: usize,

    /// Maximum number of metadata items (author, date, ...) shown for a
    /// card-style link.
    ///
    /// Default: `3`
    pub max_metadata_items: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            convert_latex: true,
            include_tables: true,
            url: None,
            description_max_len: 200,
            max_metadata_items: 3,
        }
    }
}
