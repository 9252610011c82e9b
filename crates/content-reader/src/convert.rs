//! Assemble a token stream into a document
//!
//! Drives the block rules over the top-level tokens, splices their results
//! into one sequence and wraps it in the document root.

use content_reader_core::{InlineLexer, Node, Options, Token};
use log::{debug, trace};

use crate::rules::{children, Context, Transformer};
use crate::Result;

/// Convert top-level tokens into a document node
pub fn convert(tokens: &[Token], options: &Options, lexer: &dyn InlineLexer) -> Result<Node> {
    let transformer = Transformer::new(options, lexer);
    let root = Context::root(options.max_depth);

    let mut content = Vec::with_capacity(tokens.len());
    for unit in units(tokens, options.eyebrow_headings) {
        match unit {
            Unit::Single(index, token) => {
                content.extend(transformer.block(token, &root.enter(index)?)?);
            }
            Unit::Eyebrow {
                index,
                eyebrow,
                tokens,
                title,
            } => {
                let ctx = root.enter(index)?;
                debug!("collapsing eyebrow heading at {}", ctx.path());
                let inline = children(eyebrow, tokens, &ctx)?;
                content.push(Node::EyebrowHeading {
                    content: transformer.inlines(inline, &ctx)?,
                });
                content.extend(transformer.block(title, &root.enter(index + 1)?)?);
            }
        }
    }

    // Containers can surface paragraphs the block rules never checked
    let before = content.len();
    content.retain(|node| !node.is_empty_paragraph());
    if content.len() < before {
        debug!("dropped {} empty paragraphs", before - content.len());
    }

    trace!(
        "assembled {} top-level nodes from {} tokens",
        content.len(),
        tokens.len()
    );
    Ok(Node::doc(content))
}

/// Top-level tokens as the assembler consumes them
#[derive(Debug)]
enum Unit<'t> {
    Single(usize, &'t Token),
    /// A level-3 heading directly followed by a level-1 heading
    Eyebrow {
        index: usize,
        eyebrow: &'t Token,
        tokens: &'t Option<Vec<Token>>,
        title: &'t Token,
    },
}

fn units(tokens: &[Token], eyebrow_headings: bool) -> Vec<Unit<'_>> {
    let mut units = Vec::with_capacity(tokens.len());
    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        match (token, tokens.get(index + 1)) {
            (
                Token::Heading {
                    depth: 3,
                    tokens: inline,
                    ..
                },
                Some(title @ Token::Heading { depth: 1, .. }),
            ) if eyebrow_headings => {
                units.push(Unit::Eyebrow {
                    index,
                    eyebrow: token,
                    tokens: inline,
                    title,
                });
                index += 2;
            }
            _ => {
                units.push(Unit::Single(index, token));
                index += 1;
            }
        }
    }
    units
}
