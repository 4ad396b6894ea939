//! Text reconstruction for section subtrees.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Node;

use crate::config::LINE_BREAK_TAG;
use crate::xml::has_tag;

/// Any run of whitespace inside a text node.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A run of one or more space characters (U+0020 only).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("valid regex"));

/// Replace every whitespace run (spaces, tabs, newlines) with a single space.
///
/// # Examples
/// ```
/// use spl_json::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("Do   not\nuse."), "Do not use.");
/// ```
pub fn normalize_whitespace(text: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(text, " ")
}

/// Trim the text and collapse runs of spaces into one.
///
/// Only the space character is collapsed; tabs and newlines inside the
/// text are kept.
pub fn collapse_spaces(text: &str) -> String {
    SPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Concatenate the text below `node`, in document order.
///
/// Each text node that is not whitespace-only contributes its content
/// followed by one space. A line-break element contributes one space.
/// Comments and processing instructions are skipped. The result is not
/// trimmed; see [`section_text`].
///
/// # Arguments
/// * `node` - Root of the subtree; its own text children are included
/// * `normalize` - Collapse whitespace runs inside each text node first
pub fn extract_text(node: Node<'_, '_>, normalize: bool) -> String {
    let mut out = String::new();
    push_text(node, normalize, &mut out);
    out
}

fn push_text(node: Node<'_, '_>, normalize: bool, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            let text = child.text().unwrap_or_default();
            if text.trim().is_empty() {
                continue;
            }
            if normalize {
                out.push_str(&normalize_whitespace(text));
            } else {
                out.push_str(text);
            }
            out.push(' ');
        } else if has_tag(child, LINE_BREAK_TAG) {
            out.push(' ');
        } else if child.is_element() && child.has_children() {
            push_text(child, normalize, out);
        }
    }
}

/// Extract the normalized text of a whole section subtree.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use spl_json::text::section_text;
///
/// let xml = "<section><title>WARNINGS</title><text><paragraph>Do   not\nuse.</paragraph></text></section>";
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(section_text(doc.root_element(), true), "WARNINGS Do not use.");
/// ```
pub fn section_text(node: Node<'_, '_>, normalize: bool) -> String {
    collapse_spaces(&extract_text(node, normalize))
}
