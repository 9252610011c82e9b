//! Utility functions for token text handling.

/// Prefix marking a link as a call-to-action button
pub const BUTTON_PREFIX: &str = "button:";

/// Undo the HTML escaping a lexer may apply to inline text.
///
/// Only `&#39;`, `&quot;` and `&amp;` are decoded, each in a single pass, so
/// `&amp;amp;` decodes to `&amp;` and never further. Unknown entities pass
/// through unchanged.
pub fn decode_entities(text: &str) -> String {
    text.replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Inverse of [`decode_entities`]
pub fn escape_entities(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Split an image target into `(role, src)`.
///
/// A target containing a colon is split at the first colon unless it starts
/// with `http`, so scheme-qualified URLs keep their colon.
pub fn split_image_href(href: &str, default_role: &str) -> (String, String) {
    if !href.starts_with("http") {
        if let Some((role, src)) = href.split_once(':') {
            return (role.to_string(), src.to_string());
        }
    }
    (default_role.to_string(), href.to_string())
}

/// Split a code block info string (`lang:filename`) into its parts
pub fn parse_code_info(info: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(info) = info.filter(|i| !i.is_empty()) else {
        return (None, None);
    };

    let (language, filename) = match info.split_once(':') {
        Some((language, filename)) => (language, Some(filename)),
        None => (info, None),
    };

    (
        non_empty(language),
        filename.and_then(non_empty),
    )
}

/// Strip the first line's indentation from every line and trim the block
pub fn clean_code_text(text: &str) -> String {
    let first = text.lines().next().unwrap_or("");
    let indent = &first[..first.len() - first.trim_start().len()];

    text.split('\n')
        .map(|line| line.strip_prefix(indent).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Owned copy of a string unless it is empty
pub fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
