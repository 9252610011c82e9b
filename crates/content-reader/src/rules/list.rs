//! List rule: ordered and bullet lists with nested sub-lists.

use content_reader_core::{ItemParagraph, Node, OrderedListAttrs, Token};

use super::{children, Context, Transformer};
use crate::Result;

impl Transformer<'_> {
    /// Transform a list token and its items.
    ///
    /// Every item becomes a list item whose first child is a paragraph with
    /// the item's direct content, followed by its nested lists in source
    /// order. Items holding only nested lists get an empty paragraph or none,
    /// depending on [`ItemParagraph`].
    pub(crate) fn list(
        &self,
        token: &Token,
        ordered: bool,
        start: Option<u64>,
        items: &[Token],
        ctx: &Context,
    ) -> Result<Node> {
        if items.is_empty() {
            return Err(ctx.malformed(token, "has no items"));
        }

        let mut content = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            content.push(self.list_item(item, &ctx.enter(index)?)?);
        }

        Ok(if ordered {
            Node::OrderedList {
                attrs: OrderedListAttrs {
                    start: start.filter(|&start| start != 0).unwrap_or(1),
                },
                content,
            }
        } else {
            Node::BulletList { content }
        })
    }

    fn list_item(&self, item: &Token, ctx: &Context) -> Result<Node> {
        let Token::ListItem { tokens, .. } = item else {
            return Err(ctx.malformed(item, "is not a list item"));
        };

        let (nested, direct): (Vec<_>, Vec<_>) = children(item, tokens, ctx)?
            .iter()
            .enumerate()
            .partition(|(_, child)| child.is_list());

        let mut content = Vec::with_capacity(nested.len() + 1);
        if !direct.is_empty() {
            content.push(Node::paragraph(self.item_inlines(&direct, ctx)?));
        } else if self.options().item_paragraph == ItemParagraph::Synthesize {
            content.push(Node::paragraph(Vec::new()));
        }

        for (index, child) in nested {
            let child_ctx = ctx.enter(index)?;
            content.extend(self.block(child, &child_ctx)?);
        }

        Ok(Node::ListItem { content })
    }

    /// Inline content of an item's non-list children.
    ///
    /// Text blocks contribute their inline children; separate blocks are
    /// joined by a line break. Anything else is handled as an inline token.
    fn item_inlines(&self, direct: &[(usize, &Token)], ctx: &Context) -> Result<Vec<Node>> {
        let mut nodes = Vec::new();
        for (n, (index, child)) in direct.iter().enumerate() {
            let child_ctx = ctx.enter(*index)?;
            if n > 0 {
                nodes.push(Node::text("\n"));
            }
            match child {
                Token::Paragraph { tokens, .. } | Token::Heading { tokens, .. } => {
                    let inline = children(child, tokens, &child_ctx)?;
                    nodes.extend(self.inlines(inline, &child_ctx)?);
                }
                _ => nodes.extend(self.inline(child, &child_ctx)?),
            }
        }
        Ok(nodes)
    }
}
