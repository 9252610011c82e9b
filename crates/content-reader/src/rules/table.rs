//! Table rule: header and body rows of inline-lexed cells.

use content_reader_core::{Alignment, Node, TableCellAttrs, Token};

use super::{Context, Transformer};
use crate::Result;

impl Transformer<'_> {
    /// Transform a table token.
    ///
    /// The header row comes first, followed by the body rows. Cells are lexed
    /// again with the inline lexer since the block lexer leaves them as source
    /// text. Ragged rows are passed through as they are.
    pub(crate) fn table(
        &self,
        token: &Token,
        header: &[String],
        rows: &[Vec<String>],
        align: &[Option<Alignment>],
        ctx: &Context,
    ) -> Result<Node> {
        if header.is_empty() {
            return Err(ctx.malformed(token, "has no header cells"));
        }

        let mut content = Vec::with_capacity(rows.len() + 1);
        content.push(self.table_row(header, align, true, &ctx.enter(0)?)?);
        for (index, row) in rows.iter().enumerate() {
            content.push(self.table_row(row, align, false, &ctx.enter(index + 1)?)?);
        }

        Ok(Node::Table { content })
    }

    fn table_row(
        &self,
        cells: &[String],
        align: &[Option<Alignment>],
        header: bool,
        ctx: &Context,
    ) -> Result<Node> {
        let content = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let cell_ctx = ctx.enter(index)?;
                let tokens = self.lexer.lex_inline(cell);
                Ok(Node::TableCell {
                    attrs: TableCellAttrs {
                        align: align.get(index).copied().flatten(),
                        header,
                        ..Default::default()
                    },
                    content: vec![Node::paragraph(self.inlines(&tokens, &cell_ctx)?)],
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Node::TableRow { content })
    }
}
