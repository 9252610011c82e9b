//! Rule set mapping lexer tokens to document nodes.
//!
//! Each token kind has one rule. The rules are split by the level they work
//! at: [`inline`] rules produce text and image nodes, [`block`] rules produce
//! structural nodes, and [`list`] and [`table`] handle the recursive
//! containers. All rules share a [`Transformer`] holding the options and the
//! inline lexer, and walk the token tree with a [`Context`] that knows where
//! in the tree they are.

mod block;
mod inline;
mod list;
mod table;

use std::fmt;

use content_reader_core::{InlineLexer, Options, Token};

use crate::{ReaderError, Result};

/// Index path of a token from the document root, e.g. `2.0.1`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPath(Vec<usize>);

impl TokenPath {
    /// Indices from the root down to the token
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Nesting depth of the token (top-level tokens are at depth 1)
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", index)?;
        }
        Ok(())
    }
}

/// Position of the rule currently running in the token tree
#[derive(Debug, Clone)]
pub(crate) struct Context {
    path: TokenPath,
    max_depth: usize,
}

impl Context {
    /// Context above the top-level tokens
    pub(crate) fn root(max_depth: usize) -> Self {
        Self {
            path: TokenPath::default(),
            max_depth,
        }
    }

    /// Descend into the child token at `index`
    pub(crate) fn enter(&self, index: usize) -> Result<Self> {
        let mut path = self.path.clone();
        path.0.push(index);

        if path.depth() > self.max_depth {
            return Err(ReaderError::DepthExceeded {
                limit: self.max_depth,
                position: path,
            });
        }

        Ok(Self {
            path,
            max_depth: self.max_depth,
        })
    }

    pub(crate) fn path(&self) -> &TokenPath {
        &self.path
    }

    /// Structural error for the token at this position
    pub(crate) fn malformed(&self, token: &Token, reason: &'static str) -> ReaderError {
        ReaderError::Structural {
            kind: token.kind().to_string(),
            position: self.path.clone(),
            reason,
        }
    }
}

/// Applies the rules with one set of options and one inline lexer
pub(crate) struct Transformer<'a> {
    options: &'a Options,
    lexer: &'a dyn InlineLexer,
}

impl<'a> Transformer<'a> {
    pub(crate) fn new(options: &'a Options, lexer: &'a dyn InlineLexer) -> Self {
        Self { options, lexer }
    }

    pub(crate) fn options(&self) -> &Options {
        self.options
    }
}

/// Child tokens of a container, or a structural error if the lexer left them out
pub(crate) fn children<'t>(
    token: &Token,
    tokens: &'t Option<Vec<Token>>,
    ctx: &Context,
) -> Result<&'t [Token]> {
    tokens
        .as_deref()
        .ok_or_else(|| ctx.malformed(token, "is missing its child tokens"))
}
