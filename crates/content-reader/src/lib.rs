//! # content-reader
//!
//! Read markdown into a structured editor document.
//!
//! A markdown lexer turns the source into a token tree, and the reader maps
//! every token kind onto document nodes: paragraphs, headings, lists, tables,
//! code blocks and text runs carrying formatting marks. The output follows the
//! node and mark names of the block editor schema and serializes to its JSON
//! form with `serde_json`.
//!
//! ## Conventions
//!
//! - Images are lifted out of paragraphs. An image target of the form
//!   `role:path` sets the image role, e.g. `![](icon:logo.svg)`.
//! - Links whose target starts with `button:` become button marks.
//! - A code block info string `lang:filename` fills both attributes.
//! - Empty paragraphs and HTML comments never reach the document.
//!
//! ## Example
//!
//! ```rust
//! use content_reader::{markdown_to_document, Mark, Node};
//!
//! let doc = markdown_to_document("Some **bold** text").unwrap();
//!
//! assert_eq!(
//!     doc,
//!     Node::doc(vec![Node::paragraph(vec![
//!         Node::text("Some "),
//!         Node::marked_text("bold", Mark::Bold),
//!         Node::text(" text"),
//!     ])])
//! );
//! ```
//!
//! ## Custom lexers
//!
//! The reader works on [`Token`]s and can be driven by any [`Lexer`]. The
//! bundled [`CmarkLexer`] is backed by `pulldown-cmark`.

mod convert;
mod detect;
mod lexer;
mod rules;
mod service;
mod utilities;

pub use content_reader_core::*;
pub use convert::convert;
pub use detect::is_valid_markdown;
pub use lexer::CmarkLexer;
pub use rules::TokenPath;
pub use service::ContentReader;
pub use utilities::*;

/// Error type for document conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReaderError {
    /// A token is missing data its kind requires
    #[error("Malformed {kind} token at {position}: {reason}")]
    Structural {
        kind: String,
        position: TokenPath,
        reason: &'static str,
    },

    /// Tokens are nested deeper than the configured ceiling
    #[error("Nesting too deep: limit of {limit} levels exceeded at {position}")]
    DepthExceeded { limit: usize, position: TokenPath },
}

pub type Result<T> = std::result::Result<T, ReaderError>;

/// Convert markdown source into a document with the default reader
pub fn markdown_to_document(source: &str) -> Result<Node> {
    ContentReader::new().read(source)
}
