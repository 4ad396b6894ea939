//! Document-level metadata extraction.
//!
//! SPL documents carry four identification fields at fixed places:
//! - `setId/@root` — the set identifier
//! - `id/@root` — the document identifier
//! - `effectiveTime/@value` — the effective time
//! - `versionNumber/@value` — the version

use roxmltree::Document;

use crate::types::SplMetadata;
use crate::xml::first_element_attribute;

/// Extract metadata from a parsed SPL document.
///
/// Each field is read from the first element with the relevant tag in
/// document order. Missing elements or attributes leave the field empty.
///
/// # Arguments
/// * `doc` - Parsed SPL XML document
///
/// # Returns
/// `SplMetadata` with extracted fields
pub fn extract_metadata(doc: &Document<'_>) -> SplMetadata {
    let read = |tag: &'static str, attribute: &str| {
        first_element_attribute(doc, tag, attribute).map(str::to_string)
    };

    SplMetadata {
        set_id: read("setId", "root"),
        id: read("id", "root"),
        effective_time: read("effectiveTime", "value"),
        version: read("versionNumber", "value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<document xmlns="urn:hl7-org:v3">
  <id root="9b8b1e0c-5a1f-4bd1-8c57-3d8d1b6c6b3e"/>
  <code code="34391-3" codeSystem="2.16.840.1.113883.6.1"/>
  <effectiveTime value="20231115"/>
  <setId root="2c5a5d1e-8f36-4a0b-9f11-6a3c3b0e4f21"/>
  <versionNumber value="7"/>
  <author><assignedEntity><representedOrganization><id root="ignored"/></representedOrganization></assignedEntity></author>
</document>"#;

    #[test]
    fn test_extract_metadata_basic() {
        let doc = Document::parse(SAMPLE_HEADER).unwrap();
        let metadata = extract_metadata(&doc);

        assert_eq!(
            metadata,
            SplMetadata {
                set_id: Some("2c5a5d1e-8f36-4a0b-9f11-6a3c3b0e4f21".to_string()),
                id: Some("9b8b1e0c-5a1f-4bd1-8c57-3d8d1b6c6b3e".to_string()),
                effective_time: Some("20231115".to_string()),
                version: Some("7".to_string()),
            }
        );
    }

    #[test]
    fn test_extract_metadata_missing_fields() {
        let xml = r#"<document><setId root="abc"/><versionNumber/></document>"#;
        let doc = Document::parse(xml).unwrap();
        let metadata = extract_metadata(&doc);

        assert_eq!(metadata.set_id.as_deref(), Some("abc"));
        assert_eq!(metadata.id, None);
        assert_eq!(metadata.effective_time, None);
        assert_eq!(metadata.version, None);
    }

    #[test]
    fn test_extract_metadata_uses_first_id_anywhere() {
        let xml = r#"<document><author><id root="author-id"/></author><id root="doc-id"/></document>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(extract_metadata(&doc).id.as_deref(), Some("author-id"));
    }
}
