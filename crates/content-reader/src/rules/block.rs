//! Block rules: paragraphs, headings, dividers, code blocks and blockquotes.

use content_reader_core::{is_empty_content, CodeBlockAttrs, Node, Token};
use log::debug;

use super::{children, Context, Transformer};
use crate::utilities::{clean_code_text, parse_code_info};
use crate::Result;

impl Transformer<'_> {
    /// Transform one block token.
    ///
    /// Returns the nodes the token expands to, in order; an empty vector
    /// means the token produces nothing.
    pub(crate) fn block(&self, token: &Token, ctx: &Context) -> Result<Vec<Node>> {
        match token {
            Token::Html { raw, .. } if raw.trim_start().starts_with("<!--") => {
                debug!("dropping HTML comment at {}", ctx.path());
                Ok(Vec::new())
            }

            Token::Paragraph { tokens, .. } => {
                let content = self.inlines(children(token, tokens, ctx)?, ctx)?;
                if is_empty_content(&content) {
                    return Ok(Vec::new());
                }
                Ok(split_at_images(content))
            }

            Token::Heading { depth, tokens, .. } => {
                let content = self.inlines(children(token, tokens, ctx)?, ctx)?;
                Ok(vec![Node::heading(*depth, content)])
            }

            Token::HorizontalRule { .. } => Ok(vec![Node::divider()]),

            Token::CodeBlock { text, lang, .. } => Ok(vec![code_block(text, lang.as_deref())]),

            Token::Blockquote { tokens, .. } => {
                let mut content = Vec::new();
                for (index, child) in children(token, tokens, ctx)?.iter().enumerate() {
                    content.extend(self.block(child, &ctx.enter(index)?)?);
                }
                Ok(vec![Node::Blockquote { content }])
            }

            Token::List {
                ordered,
                start,
                items,
                ..
            } => {
                let items = items
                    .as_deref()
                    .ok_or_else(|| ctx.malformed(token, "is missing its items"))?;
                Ok(vec![self.list(token, *ordered, *start, items, ctx)?])
            }

            Token::Table {
                header, rows, align, ..
            } => Ok(vec![self.table(token, header, rows, align, ctx)?]),

            _ => {
                debug!("dropping {} token at {}", token.kind(), ctx.path());
                Ok(Vec::new())
            }
        }
    }
}

/// Promote images out of a paragraph's inline content.
///
/// Every image becomes a standalone node; each run of other nodes between
/// images becomes its own paragraph.
fn split_at_images(content: Vec<Node>) -> Vec<Node> {
    content.into_iter().fold(Vec::new(), |mut blocks, node| {
        if node.is_image() {
            blocks.push(node);
        } else if let Some(Node::Paragraph { content }) = blocks.last_mut() {
            content.push(node);
        } else {
            blocks.push(Node::paragraph(vec![node]));
        }
        blocks
    })
}

fn code_block(text: &str, info: Option<&str>) -> Node {
    let (language, filename) = parse_code_info(info);
    let code = clean_code_text(text);

    // Code blocks only hold text, and an empty text node is not valid
    let content = if code.is_empty() {
        Vec::new()
    } else {
        vec![Node::text(code)]
    };

    Node::CodeBlock {
        attrs: CodeBlockAttrs { language, filename },
        content,
    }
}
