//! Inline rules: text runs, emphasis, code spans, links, images and HTML.

use content_reader_core::{ButtonAttrs, ImageAttrs, LinkAttrs, Mark, Node, Token};

use super::{children, Context, Transformer};
use crate::utilities::{decode_entities, non_empty, split_image_href, BUTTON_PREFIX};
use crate::Result;

impl Transformer<'_> {
    /// Transform a sequence of inline tokens, concatenating their nodes
    pub(crate) fn inlines(&self, tokens: &[Token], ctx: &Context) -> Result<Vec<Node>> {
        let mut nodes = Vec::with_capacity(tokens.len());
        for (index, token) in tokens.iter().enumerate() {
            nodes.extend(self.inline(token, &ctx.enter(index)?)?);
        }
        Ok(nodes)
    }

    /// Transform one inline token into text and image nodes
    pub(crate) fn inline(&self, token: &Token, ctx: &Context) -> Result<Vec<Node>> {
        match token {
            // Raw keeps characters the lexer may have entity-encoded in `text`
            Token::Text { raw, .. } => Ok(text_node(raw)),

            Token::Strong { tokens, .. } => {
                self.stack_mark(children(token, tokens, ctx)?, Mark::Bold, ctx)
            }

            Token::Emphasis { tokens, .. } => {
                self.stack_mark(children(token, tokens, ctx)?, Mark::Italic, ctx)
            }

            Token::CodeSpan { text, .. } => {
                let text = decode_entities(text);
                if text.is_empty() {
                    return Ok(Vec::new());
                }
                Ok(vec![Node::marked_text(text, Mark::Code)])
            }

            Token::Link {
                text, href, title, ..
            } => {
                let text = decode_entities(text);
                if text.is_empty() {
                    return Ok(Vec::new());
                }
                Ok(vec![Node::marked_text(text, link_mark(href, title))])
            }

            Token::Image {
                text, href, title, ..
            } => {
                let (role, src) = split_image_href(href, &self.options().default_image_role);
                Ok(vec![Node::Image {
                    attrs: ImageAttrs {
                        src,
                        alt: non_empty(&decode_entities(text)),
                        title: title.clone(),
                        role,
                    },
                }])
            }

            Token::Html { raw, .. } => Ok(text_node(raw)),

            // Anything else degrades to its source text
            _ => Ok(text_node(token.raw())),
        }
    }

    /// Transform children and push `mark` onto every resulting text node.
    ///
    /// Inner marks are applied during the recursion, so the outermost
    /// formatting ends up last: `**_x_**` yields `[italic, bold]`.
    fn stack_mark(&self, tokens: &[Token], mark: Mark, ctx: &Context) -> Result<Vec<Node>> {
        let mut nodes = self.inlines(tokens, ctx)?;
        for node in &mut nodes {
            node.add_mark(mark.clone());
        }
        Ok(nodes)
    }
}

/// Text node for a non-empty string
fn text_node(text: &str) -> Vec<Node> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Node::text(text)]
    }
}

/// Link or button mark for a link target
fn link_mark(href: &str, title: &Option<String>) -> Mark {
    match href.strip_prefix(BUTTON_PREFIX) {
        Some(href) => Mark::Button {
            attrs: ButtonAttrs {
                href: href.to_string(),
                title: title.clone(),
                variant: "primary".to_string(),
            },
        },
        None => Mark::Link {
            attrs: LinkAttrs {
                href: href.to_string(),
                title: title.clone(),
            },
        },
    }
}
