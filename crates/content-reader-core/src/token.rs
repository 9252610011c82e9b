//! Markdown lexer tokens
//!
//! This module defines the token tree a markdown lexer hands to the reader.
//! Every token keeps its raw source text next to its decoded text, and
//! container tokens own their children. Children are optional because the
//! lexer is an external collaborator: a token that claims to be a container
//! but carries no child sequence is reported as a structural error by the
//! reader instead of being silently accepted.

use crate::node::Alignment;

/// A lexical token produced by a markdown lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Plain text run
    Text { raw: String, text: String },

    /// Strong emphasis (`**x**`)
    Strong {
        raw: String,
        text: String,
        tokens: Option<Vec<Token>>,
    },

    /// Emphasis (`*x*`)
    Emphasis {
        raw: String,
        text: String,
        tokens: Option<Vec<Token>>,
    },

    /// Inline code; `text` may be HTML-escaped by the lexer
    CodeSpan { raw: String, text: String },

    /// Inline link with label text, target and optional title
    Link {
        raw: String,
        text: String,
        href: String,
        title: Option<String>,
        tokens: Option<Vec<Token>>,
    },

    /// Inline image with alt text, target and optional title
    Image {
        raw: String,
        text: String,
        href: String,
        title: Option<String>,
    },

    /// Inline or block-level raw HTML
    Html { raw: String, text: String },

    /// Paragraph of inline tokens
    Paragraph {
        raw: String,
        text: String,
        tokens: Option<Vec<Token>>,
    },

    /// ATX or setext heading, depth 1-6
    Heading {
        raw: String,
        text: String,
        depth: u8,
        tokens: Option<Vec<Token>>,
    },

    /// Thematic break
    HorizontalRule { raw: String },

    /// Fenced or indented code block with its info string
    CodeBlock {
        raw: String,
        text: String,
        lang: Option<String>,
    },

    /// Ordered or bullet list; `items` holds [`Token::ListItem`] tokens
    List {
        raw: String,
        ordered: bool,
        start: Option<u64>,
        items: Option<Vec<Token>>,
    },

    /// One list item, possibly containing nested lists
    ListItem {
        raw: String,
        text: String,
        tokens: Option<Vec<Token>>,
    },

    /// Table with cell source strings, not yet inline-lexed
    Table {
        raw: String,
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        align: Vec<Option<Alignment>>,
    },

    /// Block quote containing block tokens
    Blockquote {
        raw: String,
        text: String,
        tokens: Option<Vec<Token>>,
    },

    /// Any token kind the reader has no dedicated rule for
    Other {
        kind: String,
        raw: String,
        text: String,
    },
}

impl Token {
    /// Create a text token whose raw and decoded text are the same
    pub fn text(content: &str) -> Self {
        Token::Text {
            raw: content.to_string(),
            text: content.to_string(),
        }
    }

    /// Create a strong token around children
    pub fn strong(tokens: Vec<Token>) -> Self {
        let text = plain_text(&tokens);
        Token::Strong {
            raw: format!("**{}**", text),
            text,
            tokens: Some(tokens),
        }
    }

    /// Create an emphasis token around children
    pub fn emphasis(tokens: Vec<Token>) -> Self {
        let text = plain_text(&tokens);
        Token::Emphasis {
            raw: format!("*{}*", text),
            text,
            tokens: Some(tokens),
        }
    }

    /// Create a paragraph token around inline children
    pub fn paragraph(tokens: Vec<Token>) -> Self {
        let text = plain_text(&tokens);
        Token::Paragraph {
            raw: text.clone(),
            text,
            tokens: Some(tokens),
        }
    }

    /// Create a heading token around inline children
    pub fn heading(depth: u8, tokens: Vec<Token>) -> Self {
        let text = plain_text(&tokens);
        Token::Heading {
            raw: format!("{} {}", "#".repeat(depth as usize), text),
            text,
            depth,
            tokens: Some(tokens),
        }
    }

    /// Create a list item token around children
    pub fn list_item(tokens: Vec<Token>) -> Self {
        let text = plain_text(&tokens);
        Token::ListItem {
            raw: text.clone(),
            text,
            tokens: Some(tokens),
        }
    }

    /// The lexer's name for this token kind
    pub fn kind(&self) -> &str {
        match self {
            Token::Text { .. } => "text",
            Token::Strong { .. } => "strong",
            Token::Emphasis { .. } => "em",
            Token::CodeSpan { .. } => "codespan",
            Token::Link { .. } => "link",
            Token::Image { .. } => "image",
            Token::Html { .. } => "html",
            Token::Paragraph { .. } => "paragraph",
            Token::Heading { .. } => "heading",
            Token::HorizontalRule { .. } => "hr",
            Token::CodeBlock { .. } => "code",
            Token::List { .. } => "list",
            Token::ListItem { .. } => "list_item",
            Token::Table { .. } => "table",
            Token::Blockquote { .. } => "blockquote",
            Token::Other { kind, .. } => kind.as_str(),
        }
    }

    /// Raw source text of this token
    pub fn raw(&self) -> &str {
        match self {
            Token::Text { raw, .. }
            | Token::Strong { raw, .. }
            | Token::Emphasis { raw, .. }
            | Token::CodeSpan { raw, .. }
            | Token::Link { raw, .. }
            | Token::Image { raw, .. }
            | Token::Html { raw, .. }
            | Token::Paragraph { raw, .. }
            | Token::Heading { raw, .. }
            | Token::HorizontalRule { raw }
            | Token::CodeBlock { raw, .. }
            | Token::List { raw, .. }
            | Token::ListItem { raw, .. }
            | Token::Table { raw, .. }
            | Token::Blockquote { raw, .. }
            | Token::Other { raw, .. } => raw.as_str(),
        }
    }

    /// Decoded text of this token (raw text for kinds without a decoded form)
    pub fn text_content(&self) -> &str {
        match self {
            Token::Text { text, .. }
            | Token::Strong { text, .. }
            | Token::Emphasis { text, .. }
            | Token::CodeSpan { text, .. }
            | Token::Link { text, .. }
            | Token::Image { text, .. }
            | Token::Html { text, .. }
            | Token::Paragraph { text, .. }
            | Token::Heading { text, .. }
            | Token::CodeBlock { text, .. }
            | Token::ListItem { text, .. }
            | Token::Blockquote { text, .. }
            | Token::Other { text, .. } => text.as_str(),
            Token::HorizontalRule { raw }
            | Token::List { raw, .. }
            | Token::Table { raw, .. } => raw.as_str(),
        }
    }

    /// Check if this is a list token
    pub fn is_list(&self) -> bool {
        matches!(self, Token::List { .. })
    }
}

/// Concatenate the decoded text of a token sequence
pub fn plain_text(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text_content()).collect()
}
