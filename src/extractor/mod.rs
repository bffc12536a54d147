//! Document builder and its helpers.
//!
//! # Module Structure
//!
//! - `tags`: tag catalogs and lookup helpers
//! - `state`: per-parse state (processed nodes, options, converter)
//! - `navigation`: nav/header/footer/aside/menu to `NavSection`
//! - `builder`: recursive tag-to-node walk
//! - `inline`: phrasing content, links, math
//! - `handlers`: headings, images, link cards, forms, code blocks
//! - `lists`: `ul`/`ol`, news-card items
//! - `tables`: table classifier
//! - `articles`: article-list detection and story cards
//! - `normalize`: news-index post-pass
//! - `pipeline`: orchestration
//!
//! # Usage
//!
//! ```rust
//! use page_tree::extractor::extract_document;
//! use page_tree::latex::UnicodeLatex;
//! use page_tree::{dom, Options};
//!
//! let doc = dom::parse("<main><h1>Hello</h1><p>World</p></main>");
//! let page = extract_document(&doc, &Options::default(), &UnicodeLatex)?;
//! assert_eq!(page.plain_text(), "Hello\nWorld");
//! # Ok::<(), page_tree::Error>(())
//! ```

pub mod articles;
pub mod builder;
pub mod handlers;
pub mod inline;
pub mod lists;
pub mod navigation;
pub mod normalize;
pub mod pipeline;
pub mod state;
pub mod tables;
pub mod tags;

pub use articles::{extract_article_list, should_extract_as_article_list};
pub use navigation::extract_navigation;
pub use normalize::{looks_like_news_index, normalize_news_index};
pub use pipeline::extract_document;
pub use state::ExtractionState;
