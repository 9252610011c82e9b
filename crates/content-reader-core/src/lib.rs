//! content-reader-core - token and document models
//!
//! This crate provides the data structures shared by the markdown reader and
//! anything that feeds it or consumes its output: the lexer token tree, the
//! editor document tree, conversion options and the lexer capabilities.
//!
//! # Architecture
//!
//! ```text
//!                  ┌───────┐  Vec<Token>  ┌────────┐
//! Markdown String ─▶ Lexer ├─────────────▶│ reader │──▶ Node::Doc ──▶ JSON
//!                  └───┬───┘              └───┬────┘
//!                      └──── lex_inline ◀─────┘ (table cells)
//! ```
//!
//! # Example
//!
//! ```rust
//! use content_reader_core::{Mark, Node};
//!
//! let doc = Node::doc(vec![Node::paragraph(vec![
//!     Node::text("Some "),
//!     Node::marked_text("bold", Mark::Bold),
//! ])]);
//!
//! assert_eq!(doc.content()[0].content().len(), 2);
//! ```

mod lexer;
mod node;
mod options;
mod token;

pub use lexer::{InlineLexer, Lexer};
pub use node::{
    is_empty_content, Alignment, ButtonAttrs, CodeBlockAttrs, DividerAttrs, HeadingAttrs,
    ImageAttrs, LinkAttrs, Mark, Node, OrderedListAttrs, TableCellAttrs,
};
pub use options::{ItemParagraph, Options, DEFAULT_IMAGE_ROLE, DEFAULT_MAX_DEPTH};
pub use token::{plain_text, Token};
