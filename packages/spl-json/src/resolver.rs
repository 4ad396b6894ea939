//! Category resolution for section elements.

use roxmltree::Node;

use crate::config::CODE_TAG;
use crate::sections::SectionCatalog;
use crate::xml::find_descendant;

/// Read the classification code of a section.
///
/// The code comes from the first `code` element below the section in
/// document order. That element may belong to a nested section when the
/// section has no code of its own.
pub fn section_code<'a>(section: Node<'a, '_>) -> Option<&'a str> {
    find_descendant(section, CODE_TAG).and_then(|code| code.attribute("code"))
}

/// Resolve the category name of a section.
///
/// Returns the unclassified category when the section has no code, the
/// code attribute is empty, or the code is not in the catalog.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use spl_json::resolver::resolve_category;
/// use spl_json::sections::SectionCatalog;
///
/// let catalog = SectionCatalog::from_csv_str("34071-1,WARNINGS\n");
/// let doc = Document::parse(r#"<section><code code="34071-1"/></section>"#).unwrap();
///
/// assert_eq!(resolve_category(doc.root_element(), &catalog), "warnings");
/// ```
pub fn resolve_category<'c>(section: Node<'_, '_>, catalog: &'c SectionCatalog) -> &'c str {
    catalog.category_for(section_code(section))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNCLASSIFIED_SECTION;
    use roxmltree::Document;

    fn catalog() -> SectionCatalog {
        SectionCatalog::from_csv_str("34071-1,WARNINGS\n34084-4,ADVERSE REACTIONS\n")
    }

    #[test]
    fn test_resolve_mapped_code() {
        let xml = r#"<section><id root="x"/><code code="34084-4" codeSystem="2.16.840.1.113883.6.1"/></section>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(resolve_category(doc.root_element(), &catalog()), "adverse_reactions");
    }

    #[test]
    fn test_resolve_unmapped_code() {
        let xml = r#"<section><code code="12345-6"/></section>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(resolve_category(doc.root_element(), &catalog()), UNCLASSIFIED_SECTION);
    }

    #[test]
    fn test_resolve_missing_code_element() {
        let xml = r#"<section><title>Untitled</title></section>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(section_code(doc.root_element()), None);
        assert_eq!(resolve_category(doc.root_element(), &catalog()), UNCLASSIFIED_SECTION);
    }

    #[test]
    fn test_resolve_first_code_without_attribute() {
        // Only the first code element counts, even if a later one is mapped.
        let xml = r#"<section><code/><component><section><code code="34071-1"/></section></component></section>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(resolve_category(doc.root_element(), &catalog()), UNCLASSIFIED_SECTION);
    }

    #[test]
    fn test_resolve_ignores_ancestor_code() {
        let xml = r#"<section><code code="34071-1"/><component><section><title>Inner</title></section></component></section>"#;
        let doc = Document::parse(xml).unwrap();
        let inner = doc
            .descendants()
            .filter(|n| n.has_tag_name("section"))
            .nth(1)
            .unwrap();
        assert_eq!(resolve_category(inner, &catalog()), UNCLASSIFIED_SECTION);
    }
}
