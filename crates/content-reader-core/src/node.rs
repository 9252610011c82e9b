//! Editor document tree
//!
//! This module defines the nodes and marks of the block/inline editor
//! document the reader produces. Nodes serialize to the editor's JSON shape:
//! `{"type": "...", "attrs": {...}, "content": [...]}`, with text nodes
//! carrying `text` and an optional `marks` list.

use serde::{Deserialize, Serialize};

/// A node of the editor document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Root document container
    Doc { content: Vec<Node> },

    /// Paragraph containing inline nodes
    Paragraph { content: Vec<Node> },

    /// Heading with level and anchor id
    Heading {
        attrs: HeadingAttrs,
        content: Vec<Node>,
    },

    /// Small heading shown above a main title
    EyebrowHeading { content: Vec<Node> },

    /// Text run with formatting marks, outermost mark last
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },

    /// Image with a role classifying its presentation
    Image { attrs: ImageAttrs },

    /// Horizontal divider
    Divider { attrs: DividerAttrs },

    /// Unordered list of list items
    BulletList { content: Vec<Node> },

    /// Ordered list of list items
    OrderedList {
        attrs: OrderedListAttrs,
        content: Vec<Node>,
    },

    /// List item: one paragraph followed by nested lists
    ListItem { content: Vec<Node> },

    /// Code block holding unmarked text
    CodeBlock {
        attrs: CodeBlockAttrs,
        content: Vec<Node>,
    },

    /// Block quote
    Blockquote { content: Vec<Node> },

    /// Table of rows
    Table { content: Vec<Node> },

    /// Table row of cells
    TableRow { content: Vec<Node> },

    /// Table cell holding paragraphs
    TableCell {
        attrs: TableCellAttrs,
        content: Vec<Node>,
    },
}

/// A formatting mark attached to a text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Code,
    Link { attrs: LinkAttrs },
    Button { attrs: ButtonAttrs },
}

/// Column alignment of a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: u8,
    pub id: Option<String>,
}

impl Default for HeadingAttrs {
    fn default() -> Self {
        Self { level: 1, id: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttrs {
    pub src: String,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividerAttrs {
    pub style: String,
    pub size: String,
}

impl Default for DividerAttrs {
    fn default() -> Self {
        Self {
            style: "line".to_string(),
            size: "normal".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedListAttrs {
    pub start: u64,
}

impl Default for OrderedListAttrs {
    fn default() -> Self {
        Self { start: 1 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlockAttrs {
    pub language: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCellAttrs {
    pub colspan: u32,
    pub rowspan: u32,
    pub align: Option<Alignment>,
    pub header: bool,
}

impl Default for TableCellAttrs {
    fn default() -> Self {
        Self {
            colspan: 1,
            rowspan: 1,
            align: None,
            header: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkAttrs {
    pub href: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonAttrs {
    pub href: String,
    pub title: Option<String>,
    pub variant: String,
}

impl Node {
    /// Create a document root
    pub fn doc(content: Vec<Node>) -> Self {
        Node::Doc { content }
    }

    /// Create a paragraph
    pub fn paragraph(content: Vec<Node>) -> Self {
        Node::Paragraph { content }
    }

    /// Create a heading with no anchor id
    pub fn heading(level: u8, content: Vec<Node>) -> Self {
        Node::Heading {
            attrs: HeadingAttrs { level, id: None },
            content,
        }
    }

    /// Create an unmarked text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// Create a text node carrying one mark
    pub fn marked_text(text: impl Into<String>, mark: Mark) -> Self {
        Node::Text {
            text: text.into(),
            marks: vec![mark],
        }
    }

    /// Create a divider with default style
    pub fn divider() -> Self {
        Node::Divider {
            attrs: DividerAttrs::default(),
        }
    }

    /// The editor type name of this node
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Doc { .. } => "doc",
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::EyebrowHeading { .. } => "eyebrowHeading",
            Node::Text { .. } => "text",
            Node::Image { .. } => "image",
            Node::Divider { .. } => "divider",
            Node::BulletList { .. } => "bulletList",
            Node::OrderedList { .. } => "orderedList",
            Node::ListItem { .. } => "listItem",
            Node::CodeBlock { .. } => "codeBlock",
            Node::Blockquote { .. } => "blockquote",
            Node::Table { .. } => "table",
            Node::TableRow { .. } => "tableRow",
            Node::TableCell { .. } => "tableCell",
        }
    }

    /// Child nodes (empty for leaves)
    pub fn content(&self) -> &[Node] {
        match self {
            Node::Doc { content }
            | Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::EyebrowHeading { content }
            | Node::BulletList { content }
            | Node::OrderedList { content, .. }
            | Node::ListItem { content }
            | Node::CodeBlock { content, .. }
            | Node::Blockquote { content }
            | Node::Table { content }
            | Node::TableRow { content }
            | Node::TableCell { content, .. } => content.as_slice(),
            Node::Text { .. } | Node::Image { .. } | Node::Divider { .. } => &[],
        }
    }

    /// Marks of a text node (empty for every other node)
    pub fn marks(&self) -> &[Mark] {
        match self {
            Node::Text { marks, .. } => marks.as_slice(),
            _ => &[],
        }
    }

    /// Append a mark to a text node; other nodes are left untouched
    pub fn add_mark(&mut self, mark: Mark) {
        if let Node::Text { marks, .. } = self {
            marks.push(mark);
        }
    }

    /// Check if this is an image node
    pub fn is_image(&self) -> bool {
        matches!(self, Node::Image { .. })
    }

    /// Check if this is a paragraph without meaningful content
    pub fn is_empty_paragraph(&self) -> bool {
        match self {
            Node::Paragraph { content } => is_empty_content(content),
            _ => false,
        }
    }
}

/// Check if inline content is empty or a single whitespace-only text node
pub fn is_empty_content(content: &[Node]) -> bool {
    match content {
        [] => true,
        [Node::Text { text, .. }] => text.trim().is_empty(),
        _ => false,
    }
}
