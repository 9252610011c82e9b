//! Configuration options for markdown to document conversion

/// Role given to images whose target carries no `role:` prefix
pub const DEFAULT_IMAGE_ROLE: &str = "content";

/// Maximum token nesting depth accepted before conversion fails
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// How list items without direct text content are represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemParagraph {
    /// Start every list item with a paragraph, empty if need be.
    /// Keeps items valid for schemas declaring `paragraph block*`.
    #[default]
    Synthesize,
    /// Leave the paragraph out when the item only holds nested lists
    Omit,
}

/// Options for document conversion
#[derive(Debug, Clone)]
pub struct Options {
    /// Image role used when the image target has no role prefix
    pub default_image_role: String,

    /// Paragraph policy for list items holding only nested lists
    pub item_paragraph: ItemParagraph,

    /// Collapse a level-3 heading followed by a level-1 heading into an
    /// eyebrow heading and its title
    pub eyebrow_headings: bool,

    /// Token nesting ceiling
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_image_role: DEFAULT_IMAGE_ROLE.to_string(),
            item_paragraph: ItemParagraph::Synthesize,
            eyebrow_headings: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
