//! Lexer capabilities the reader depends on
//!
//! The reader never tokenizes markdown itself. Block tokens come from a
//! [`Lexer`], and table cells, which a block lexer leaves as raw source, are
//! re-lexed through an [`InlineLexer`]. Any `Fn(&str) -> Vec<Token>` is an
//! inline lexer, so rules can be exercised with a stub.

use crate::token::Token;

/// Tokenizes a markdown snippet as inline content
pub trait InlineLexer {
    fn lex_inline(&self, source: &str) -> Vec<Token>;
}

impl<F> InlineLexer for F
where
    F: Fn(&str) -> Vec<Token>,
{
    fn lex_inline(&self, source: &str) -> Vec<Token> {
        self(source)
    }
}

/// Tokenizes a whole markdown document into block tokens
pub trait Lexer: InlineLexer {
    fn lex(&self, source: &str) -> Vec<Token>;
}
