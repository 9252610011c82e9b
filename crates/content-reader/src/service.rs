//! ContentReader - the main entry point for markdown to document conversion.

use content_reader_core::{Lexer, Node, Options, Token};
use log::debug;

use crate::convert::convert;
use crate::lexer::CmarkLexer;
use crate::Result;

/// Reads markdown into editor documents.
///
/// The reader holds no state between calls; one instance can convert any
/// number of documents.
#[derive(Debug, Clone, Default)]
pub struct ContentReader<L: Lexer = CmarkLexer> {
    options: Options,
    lexer: L,
}

impl ContentReader {
    /// Create a reader with the default lexer and options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with the default lexer and custom options
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            lexer: CmarkLexer::new(),
        }
    }
}

impl<L: Lexer> ContentReader<L> {
    /// Create a reader around another lexer
    pub fn with_lexer(lexer: L, options: Options) -> Self {
        Self { options, lexer }
    }

    /// Convert markdown source to a document
    pub fn read(&self, source: &str) -> Result<Node> {
        let tokens = self.lexer.lex(source);
        debug!("lexed {} top-level tokens", tokens.len());
        self.read_tokens(&tokens)
    }

    /// Convert an already lexed token stream to a document
    pub fn read_tokens(&self, tokens: &[Token]) -> Result<Node> {
        convert(tokens, &self.options, &self.lexer)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
