//! Heuristic check whether plain text is written in markdown

use once_cell::sync::Lazy;
use regex::Regex;

/// Texts shorter than this are never treated as markdown
const MIN_LENGTH: usize = 8;

static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Images and links
        r"!\[.*?\]\(.*?\)",
        r"\[.*?\]\(.*?\)",
        // Headings
        r"(?m)^#{1,6}\s+.+$",
        r"(?m)^.+\n={2,}$",
        r"(?m)^.+\n-{2,}$",
        // Quotes and lists
        r"(?m)^\s{0,3}>\s.+",
        r"(?m)^\s{0,3}[*+-]\s+.+",
        r"(?m)^\s{0,3}\d+\.\s+.+",
        // Code
        r"(?m)^\s{0,3}`{3}[\s\S]*?`{3}",
        r"(?m)^\s{4}.+",
        r"`[^`\n]+`",
        // Emphasis
        r"(\*\*|__)[^*\n_]+(\*\*|__)",
        r"[*_][^*\n_]+[*_]",
        // Horizontal rules and tables
        r"(?m)^\s{0,3}[-*_]{3,}\s*$",
        r"(?m)^\s{0,3}\|.+\|.+\|",
        r"(?m)^\s{0,3}\|[-:| ]+\|",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid markdown pattern"))
    .collect()
});

/// Check whether `text` looks like markdown rather than plain prose.
///
/// Any single recognizable construct is enough: a link, an image, a heading,
/// a list item, a quote, code, emphasis, a rule or a table row. Very short
/// texts are rejected outright.
pub fn is_valid_markdown(text: &str) -> bool {
    if text.chars().count() < MIN_LENGTH {
        return false;
    }
    PATTERNS.iter().any(|pattern| pattern.is_match(text))
}
