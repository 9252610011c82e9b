//! Markdown lexer backed by pulldown-cmark
//!
//! pulldown-cmark reports a flat stream of start/end events. The lexer folds
//! that stream into the nested token tree the rules consume, keeping one frame
//! per open container.

use std::ops::Range;

use content_reader_core::{plain_text, Alignment, InlineLexer, Lexer, Token};
use log::trace;
use pulldown_cmark::{
    Alignment as CmarkAlignment, CodeBlockKind, Event, HeadingLevel, Options as CmarkOptions,
    Parser, Tag,
};

use crate::utilities::{escape_entities, non_empty};

/// CommonMark lexer with GitHub tables and strikethrough
#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkLexer;

impl CmarkLexer {
    pub fn new() -> Self {
        Self
    }

    fn parser_options() -> CmarkOptions {
        let mut options = CmarkOptions::empty();
        options.insert(CmarkOptions::ENABLE_TABLES);
        options.insert(CmarkOptions::ENABLE_STRIKETHROUGH);
        options
    }
}

impl Lexer for CmarkLexer {
    fn lex(&self, source: &str) -> Vec<Token> {
        let mut fold = Fold::new(source);
        for (event, range) in Parser::new_ext(source, Self::parser_options()).into_offset_iter() {
            fold.event(event, range);
        }
        let tokens = fold.finish();
        trace!("lexed {} bytes into {} tokens", source.len(), tokens.len());
        tokens
    }
}

impl InlineLexer for CmarkLexer {
    /// Lex a snippet and keep only inline tokens.
    ///
    /// Paragraphs and headings are unwrapped; any other block the snippet
    /// happens to form is kept as its literal source.
    fn lex_inline(&self, source: &str) -> Vec<Token> {
        self.lex(source)
            .into_iter()
            .flat_map(|token| match token {
                Token::Paragraph {
                    tokens: Some(tokens),
                    ..
                }
                | Token::Heading {
                    tokens: Some(tokens),
                    ..
                } => tokens,
                other => match other.raw().trim_end() {
                    "" => Vec::new(),
                    raw => vec![Token::text(raw)],
                },
            })
            .collect()
    }
}

/// Open container while folding events
struct Frame {
    container: Container,
    range: Range<usize>,
    children: Vec<Token>,
    /// Source offset where the trailing text token of `children` starts
    text_start: Option<usize>,
}

enum Container {
    Root,
    Paragraph,
    Heading(u8),
    BlockQuote,
    CodeBlock {
        lang: Option<String>,
        code: String,
    },
    HtmlBlock(String),
    List(Option<u64>),
    Item,
    Table {
        align: Vec<Option<Alignment>>,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    TableRow {
        head: bool,
        cells: Vec<String>,
    },
    TableCell,
    Emphasis,
    Strong,
    Link {
        href: String,
        title: Option<String>,
    },
    Image {
        href: String,
        title: Option<String>,
    },
    Other(&'static str),
}

struct Fold<'s> {
    source: &'s str,
    stack: Vec<Frame>,
}

impl<'s> Fold<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            stack: vec![Frame {
                container: Container::Root,
                range: 0..source.len(),
                children: Vec::new(),
                text_start: None,
            }],
        }
    }

    fn slice(&self, range: &Range<usize>) -> &'s str {
        slice(self.source, range)
    }

    fn push(&mut self, token: Token) {
        if let Some(frame) = self.stack.last_mut() {
            frame.children.push(token);
            frame.text_start = None;
        }
    }

    fn event(&mut self, event: Event<'_>, range: Range<usize>) {
        match event {
            Event::Start(tag) => self.open(tag, range),
            Event::End(_) => self.close(),
            Event::Text(text) | Event::Html(text) => self.text(&text, range),
            Event::SoftBreak => self.text("\n", range),
            Event::Code(code) => self.push(Token::CodeSpan {
                raw: self.slice(&range).to_string(),
                text: escape_entities(&code),
            }),
            Event::InlineHtml(html) => self.push(Token::Html {
                raw: html.to_string(),
                text: html.to_string(),
            }),
            Event::HardBreak => self.push(Token::Other {
                kind: "br".to_string(),
                raw: "\n".to_string(),
                text: "\n".to_string(),
            }),
            Event::Rule => self.push(Token::HorizontalRule {
                raw: self.slice(&range).to_string(),
            }),
            _ => {
                let raw = self.slice(&range).to_string();
                self.push(Token::Other {
                    kind: "other".to_string(),
                    text: escape_entities(&raw),
                    raw,
                });
            }
        }
    }

    /// Append decoded text, merging adjacent runs into one text token.
    ///
    /// The merged token's raw text is the source span of the whole run, so
    /// entity references and backslash escapes stay as written.
    fn text(&mut self, content: &str, range: Range<usize>) {
        let source = self.source;
        let Some(frame) = self.stack.last_mut() else {
            return;
        };
        match &mut frame.container {
            Container::CodeBlock { code, .. } => code.push_str(content),
            Container::HtmlBlock(html) => html.push_str(content),
            _ => match (frame.children.last_mut(), frame.text_start) {
                (Some(Token::Text { raw, text }), Some(start)) => {
                    *raw = slice(source, &(start..range.end)).to_string();
                    text.push_str(&escape_entities(content));
                }
                _ => {
                    frame.children.push(Token::Text {
                        raw: slice(source, &range).to_string(),
                        text: escape_entities(content),
                    });
                    frame.text_start = Some(range.start);
                }
            },
        }
    }

    fn open(&mut self, tag: Tag<'_>, range: Range<usize>) {
        let container = match tag {
            Tag::Paragraph => Container::Paragraph,
            Tag::Heading { level, .. } => Container::Heading(heading_level_to_u8(level)),
            Tag::BlockQuote(_) => Container::BlockQuote,
            Tag::CodeBlock(kind) => Container::CodeBlock {
                lang: match kind {
                    CodeBlockKind::Fenced(info) => non_empty(info.trim()),
                    CodeBlockKind::Indented => None,
                },
                code: String::new(),
            },
            Tag::HtmlBlock => Container::HtmlBlock(String::new()),
            Tag::List(start) => Container::List(start),
            Tag::Item => Container::Item,
            Tag::Table(align) => Container::Table {
                align: align.into_iter().map(alignment).collect(),
                header: Vec::new(),
                rows: Vec::new(),
            },
            Tag::TableHead => Container::TableRow {
                head: true,
                cells: Vec::new(),
            },
            Tag::TableRow => Container::TableRow {
                head: false,
                cells: Vec::new(),
            },
            Tag::TableCell => Container::TableCell,
            Tag::Emphasis => Container::Emphasis,
            Tag::Strong => Container::Strong,
            Tag::Strikethrough => Container::Other("del"),
            Tag::Link {
                dest_url, title, ..
            } => Container::Link {
                href: dest_url.to_string(),
                title: non_empty(&title),
            },
            Tag::Image {
                dest_url, title, ..
            } => Container::Image {
                href: dest_url.to_string(),
                title: non_empty(&title),
            },
            _ => Container::Other("other"),
        };

        self.stack.push(Frame {
            container,
            range,
            children: Vec::new(),
            text_start: None,
        });
    }

    fn close(&mut self) {
        // The root frame stays until `finish`
        if self.stack.len() < 2 {
            return;
        }
        let Some(Frame {
            container,
            range,
            children,
            ..
        }) = self.stack.pop()
        else {
            return;
        };

        let raw = self.slice(&range).to_string();
        let text = plain_text(&children);
        let token = match container {
            Container::Root => return,
            Container::Paragraph => Token::Paragraph {
                raw,
                text,
                tokens: Some(children),
            },
            Container::Heading(depth) => Token::Heading {
                raw,
                text,
                depth,
                tokens: Some(children),
            },
            Container::BlockQuote => Token::Blockquote {
                raw,
                text,
                tokens: Some(children),
            },
            Container::CodeBlock { lang, code } => Token::CodeBlock {
                raw,
                text: code,
                lang,
            },
            Container::HtmlBlock(html) => Token::Html {
                raw: html.clone(),
                text: html,
            },
            Container::List(start) => Token::List {
                raw,
                ordered: start.is_some(),
                start,
                items: Some(children),
            },
            Container::Item => Token::ListItem {
                raw,
                text,
                tokens: Some(wrap_inline_runs(children)),
            },
            Container::Table {
                align,
                header,
                rows,
            } => Token::Table {
                raw,
                header,
                rows,
                align,
            },
            Container::TableRow { head, cells } => {
                if let Some(Frame {
                    container: Container::Table { header, rows, .. },
                    ..
                }) = self.stack.last_mut()
                {
                    if head {
                        *header = cells;
                    } else {
                        rows.push(cells);
                    }
                }
                return;
            }
            Container::TableCell => {
                if let Some(Frame {
                    container: Container::TableRow { cells, .. },
                    ..
                }) = self.stack.last_mut()
                {
                    cells.push(cell_source(&raw));
                }
                return;
            }
            Container::Emphasis => Token::Emphasis {
                raw,
                text,
                tokens: Some(children),
            },
            Container::Strong => Token::Strong {
                raw,
                text,
                tokens: Some(children),
            },
            Container::Link { href, title } => Token::Link {
                raw,
                text,
                href,
                title,
                tokens: Some(children),
            },
            Container::Image { href, title } => Token::Image {
                raw,
                text,
                href,
                title,
            },
            Container::Other(kind) => Token::Other {
                kind: kind.to_string(),
                raw,
                text,
            },
        };
        self.push(token);
    }

    fn finish(mut self) -> Vec<Token> {
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack
            .pop()
            .map(|frame| frame.children)
            .unwrap_or_default()
    }
}

fn slice<'s>(source: &'s str, range: &Range<usize>) -> &'s str {
    source.get(range.clone()).unwrap_or("")
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn alignment(align: CmarkAlignment) -> Option<Alignment> {
    match align {
        CmarkAlignment::None => None,
        CmarkAlignment::Left => Some(Alignment::Left),
        CmarkAlignment::Center => Some(Alignment::Center),
        CmarkAlignment::Right => Some(Alignment::Right),
    }
}

/// Cell source without surrounding pipes, whitespace or escaped pipes
fn cell_source(raw: &str) -> String {
    let cell = raw.trim();
    let cell = cell.strip_prefix('|').unwrap_or(cell);
    let cell = match cell.strip_suffix('|') {
        Some(rest) if !rest.ends_with('\\') => rest,
        _ => cell,
    };
    cell.trim().replace("\\|", "|")
}

fn is_inline(token: &Token) -> bool {
    matches!(
        token,
        Token::Text { .. }
            | Token::Strong { .. }
            | Token::Emphasis { .. }
            | Token::CodeSpan { .. }
            | Token::Link { .. }
            | Token::Image { .. }
            | Token::Html { .. }
            | Token::Other { .. }
    )
}

/// Wrap the bare inline content of tight list items in paragraphs
fn wrap_inline_runs(children: Vec<Token>) -> Vec<Token> {
    let mut blocks = Vec::with_capacity(children.len());
    let mut run = Vec::new();
    for token in children {
        if is_inline(&token) {
            run.push(token);
            continue;
        }
        flush_run(&mut blocks, &mut run);
        blocks.push(token);
    }
    flush_run(&mut blocks, &mut run);
    blocks
}

fn flush_run(blocks: &mut Vec<Token>, run: &mut Vec<Token>) {
    if run.is_empty() {
        return;
    }
    let tokens = std::mem::take(run);
    blocks.push(Token::Paragraph {
        raw: tokens.iter().map(Token::raw).collect(),
        text: plain_text(&tokens),
        tokens: Some(tokens),
    });
}
