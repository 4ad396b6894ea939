//! Serialization of a subtree back to markup.

use roxmltree::{Node, NodeType};

use super::utils::{get_tag_name, has_tag};
use crate::config::LINE_BREAK_TAG;
use crate::text::normalize_whitespace;

/// Render a node and all its descendants as a markup string.
///
/// Elements are written with their local tag name and attributes in
/// document order; empty elements are self-closed. Text is re-escaped,
/// comments are kept, processing instructions are dropped. A line-break
/// element renders as a single space.
///
/// # Arguments
/// * `node` - Root of the subtree to render
/// * `normalize` - Collapse whitespace runs inside text nodes to one space
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use spl_json::xml::render_markup;
///
/// let xml = r#"<table border="1"><tr><td>a<br/>b</td><td/></tr></table>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(
///     render_markup(doc.root_element(), true),
///     r#"<table border="1"><tr><td>a b</td><td/></tr></table>"#
/// );
/// ```
pub fn render_markup(node: Node<'_, '_>, normalize: bool) -> String {
    let mut out = String::new();
    write_node(node, normalize, &mut out);
    out
}

fn write_node(node: Node<'_, '_>, normalize: bool, out: &mut String) {
    match node.node_type() {
        NodeType::Root => {
            for child in node.children() {
                write_node(child, normalize, out);
            }
        }
        NodeType::Element => write_element(node, normalize, out),
        NodeType::Text => {
            let text = node.text().unwrap_or_default();
            if normalize {
                escape_text(&normalize_whitespace(text), out);
            } else {
                escape_text(text, out);
            }
        }
        NodeType::Comment => {
            out.push_str("<!--");
            out.push_str(node.text().unwrap_or_default());
            out.push_str("-->");
        }
        NodeType::PI => {}
    }
}

fn write_element(node: Node<'_, '_>, normalize: bool, out: &mut String) {
    if has_tag(node, LINE_BREAK_TAG) {
        out.push(' ');
        return;
    }

    let name = get_tag_name(node);
    out.push('<');
    out.push_str(name);

    for attribute in node.attributes() {
        out.push(' ');
        if let Some(prefix) = attribute
            .namespace()
            .and_then(|uri| node.lookup_prefix(uri))
        {
            out.push_str(prefix);
            out.push(':');
        }
        out.push_str(attribute.name());
        out.push_str("=\"");
        escape_attribute(attribute.value(), out);
        out.push('"');
    }

    if !node.has_children() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in node.children() {
        write_node(child, normalize, out);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
