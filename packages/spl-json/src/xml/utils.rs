//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::{Document, Node};

/// Get the tag name without namespace prefix.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// Tag name without namespace (e.g., "section" not "{urn:hl7-org:v3}section")
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use spl_json::xml::get_tag_name;
///
/// let xml = r#"<document xmlns="urn:hl7-org:v3"><section/></document>"#;
/// let doc = Document::parse(xml).unwrap();
/// let section = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(section), "section");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
///
/// # Arguments
/// * `node` - Node to check
/// * `tag` - Expected tag name
///
/// # Returns
/// `true` if the node is an element with the specified tag name
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Iterate over all elements with the given tag name below `node`,
/// depth-first in document order.
///
/// The starting node itself is never yielded.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use spl_json::xml::descendants_by_tag;
///
/// let xml = r#"<section><section><section/></section><section/></section>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let nested: Vec<_> = descendants_by_tag(doc.root_element(), "section").collect();
/// assert_eq!(nested.len(), 3);
/// ```
pub fn descendants_by_tag<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |child| has_tag(*child, tag))
}

/// Iterate over every element with the given tag name in the document,
/// depth-first in document order.
pub fn elements_by_tag<'a, 'input>(
    doc: &'a Document<'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    descendants_by_tag(doc.root(), tag)
}

/// Find the first element with the given tag name below `node`.
///
/// # Returns
/// Nearest matching descendant in document order, or `None`
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> Option<Node<'a, 'input>> {
    descendants_by_tag(node, tag).next()
}

/// Read an attribute from the first element with the given tag name in
/// the document.
///
/// Only the first matching element is consulted: when it lacks the
/// attribute the result is `None`, even if a later element carries it.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use spl_json::xml::first_element_attribute;
///
/// let xml = r#"<document><id root="a"/><id root="b"/></document>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert_eq!(first_element_attribute(&doc, "id", "root"), Some("a"));
/// assert_eq!(first_element_attribute(&doc, "setId", "root"), None);
/// ```
pub fn first_element_attribute<'a>(
    doc: &'a Document<'_>,
    tag: &'a str,
    attribute: &str,
) -> Option<&'a str> {
    elements_by_tag(doc, tag)
        .next()
        .and_then(|node| node.attribute(attribute))
}

/// Count the element ancestors of `node` that lie strictly below its
/// nearest `tag` ancestor.
///
/// When no ancestor carries `tag`, every element ancestor up to and
/// including the root element is counted.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use spl_json::xml::{count_ancestors_until, find_descendant};
///
/// let xml = r#"<section><component><section/></component></section>"#;
/// let doc = Document::parse(xml).unwrap();
/// let inner = find_descendant(doc.root_element(), "section").unwrap();
///
/// assert_eq!(count_ancestors_until(inner, "section"), 1);
/// ```
pub fn count_ancestors_until(node: Node<'_, '_>, tag: &str) -> usize {
    node.ancestors()
        .skip(1)
        .filter(|ancestor| ancestor.is_element())
        .take_while(|ancestor| get_tag_name(*ancestor) != tag)
        .count()
}
