//! Extraction state tracking.
//!
//! One `ExtractionState` lives for a single parse call. It carries the
//! caller's options and LaTeX converter down the recursion and records
//! which source nodes have already been turned into output, so nothing is
//! emitted twice (navigation sections, form inputs, consumed rows).

use std::collections::HashSet;

use dom_query::{NodeId, NodeRef};
use url::Url;

use crate::dom;
use crate::latex::LatexConverter;
use crate::url_utils;
use crate::Options;

/// Element levels the builder descends before flattening a sub-tree to
/// its text.
pub const MAX_NESTING: usize = 128;

/// Per-parse extraction context.
pub struct ExtractionState<'a> {
    /// Source nodes already represented in the output.
    processed_nodes: HashSet<NodeId>,

    /// `<article>` elements walked so far (separator placement).
    articles_seen: usize,

    /// Current builder nesting, bounded by [`MAX_NESTING`].
    depth: usize,

    pub options: &'a Options,

    pub latex: &'a dyn LatexConverter,

    /// Parsed `Options::url`, the base for relative references.
    pub base_url: Option<Url>,
}

impl<'a> ExtractionState<'a> {
    #[must_use]
    pub fn new(options: &'a Options, latex: &'a dyn LatexConverter) -> Self {
        let base_url = options.url.as_deref().and_then(|u| Url::parse(u).ok());
        Self {
            processed_nodes: HashSet::new(),
            articles_seen: 0,
            depth: 0,
            options,
            latex,
            base_url,
        }
    }

    /// Mark a node as processed
    pub fn mark_done(&mut self, node_id: NodeId) {
        self.processed_nodes.insert(node_id);
    }

    /// Check if a node has been processed
    #[must_use]
    pub fn is_done(&self, node_id: NodeId) -> bool {
        self.processed_nodes.contains(&node_id)
    }

    /// Whether `node` or one of its ancestors was already emitted.
    #[must_use]
    pub fn is_consumed(&self, node: &NodeRef) -> bool {
        self.is_done(node.id) || dom::has_ancestor(node, None, &|a| self.is_done(a.id))
    }

    /// Visible text of `node` without the sub-trees already emitted.
    #[must_use]
    pub fn live_text(&self, node: &NodeRef) -> String {
        dom::visible_text_where(node, &|n| !self.is_done(n.id))
    }

    /// Run `f` one nesting level deeper, or return `None` once
    /// [`MAX_NESTING`] is reached.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.depth >= MAX_NESTING {
            return None;
        }
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        Some(out)
    }

    /// Number of nodes marked so far.
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.processed_nodes.len()
    }

    /// Count an `<article>` and report whether one was seen before it.
    pub fn enter_article(&mut self) -> bool {
        self.articles_seen += 1;
        self.articles_seen > 1
    }

    /// Resolve an `href`/`src` against the page URL.
    #[must_use]
    pub fn resolve(&self, href: &str) -> String {
        url_utils::resolve(href, self.base_url.as_ref())
    }

    /// Run running text through the LaTeX converter when enabled.
    #[must_use]
    pub fn convert_text(&self, text: &str) -> String {
        if self.options.convert_latex && self.latex.contains_latex(text) {
            self.latex.process_text(text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latex::UnicodeLatex;

    #[test]
    fn test_extraction_state_done_tracking() {
        use dom_query::Document;

        let opts = Options::default();
        let mut state = ExtractionState::new(&opts, &UnicodeLatex);

        let doc = Document::from("<div><p>one</p><p>two</p><p>three</p></div>");
        let nodes: Vec<_> = doc.select("p").nodes().iter().map(|n| n.id).collect();

        state.mark_done(nodes[0]);
        state.mark_done(nodes[2]);

        assert!(state.is_done(nodes[0]));
        assert!(!state.is_done(nodes[1]));
        assert!(state.is_done(nodes[2]));
        assert_eq!(state.processed_count(), 2);
    }

    #[test]
    fn test_article_counter() {
        let opts = Options::default();
        let mut state = ExtractionState::new(&opts, &UnicodeLatex);
        assert!(!state.enter_article());
        assert!(state.enter_article());
        assert!(state.enter_article());
    }

    #[test]
    fn test_nesting_is_bounded() {
        fn descend(state: &mut ExtractionState, levels: usize) -> usize {
            state.nested(|s| descend(s, levels + 1)).unwrap_or(levels)
        }
        let opts = Options::default();
        let mut state = ExtractionState::new(&opts, &UnicodeLatex);
        assert_eq!(descend(&mut state, 0), MAX_NESTING);
        assert_eq!(state.nested(|_| 1), Some(1));
    }

    #[test]
    fn test_consumed_covers_descendants() {
        let opts = Options::default();
        let mut state = ExtractionState::new(&opts, &UnicodeLatex);
        let doc = dom_query::Document::from("<td><nav id='n'><a id='a' href='/'>Home</a></nav>Welcome</td>");
        let nav = doc.select("#n").nodes()[0];
        let link = doc.select("#a").nodes()[0];
        let cell = doc.select("td").nodes()[0];

        state.mark_done(nav.id);
        assert!(state.is_consumed(&link));
        assert!(!state.is_consumed(&cell));
        assert_eq!(state.live_text(&cell), "Welcome");
    }

    #[test]
    fn test_resolve_uses_options_url() {
        let opts = Options {
            url: Some("https://example.com/news/".to_string()),
            ..Options::default()
        };
        let state = ExtractionState::new(&opts, &UnicodeLatex);
        assert_eq!(state.resolve("story/1"), "https://example.com/news/story/1");
        assert_eq!(state.resolve("#top"), "#top");
    }

    #[test]
    fn test_convert_text_respects_toggle() {
        let on = Options::default();
        let off = Options {
            convert_latex: false,
            ..Options::default()
        };
        assert_eq!(ExtractionState::new(&on, &UnicodeLatex).convert_text(r"$\alpha$"), "α");
        assert_eq!(ExtractionState::new(&off, &UnicodeLatex).convert_text(r"$\alpha$"), r"$\alpha$");
    }
}
