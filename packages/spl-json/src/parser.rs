//! Document parser that ties all components together.

use std::path::Path;

use roxmltree::{Document, ParsingOptions};

use crate::config::ParseOptions;
use crate::error::Result;
use crate::metadata::extract_metadata;
use crate::sections::SectionCatalog;
use crate::types::SplRecord;
use crate::walker::walk_sections;

/// Parse SPL XML into a `roxmltree` document.
///
/// DTDs are accepted; some published labels still declare one.
pub fn parse_document(xml: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(xml, options)?)
}

/// Convert an SPL document into a flat record using default options.
///
/// # Arguments
/// * `xml` - The complete SPL XML document
/// * `catalog` - Section code to category mapping
///
/// # Returns
/// An `SplRecord` with one entry per category and table category, plus metadata
///
/// # Examples
/// ```
/// use spl_json::{parse, SectionCatalog};
///
/// let catalog = SectionCatalog::from_csv_str("34071-1,WARNINGS\n");
/// let xml = r#"<document xmlns="urn:hl7-org:v3">
///   <setId root="abc"/>
///   <component><section><code code="34071-1"/><text>Do   not
/// use.</text></section></component>
/// </document>"#;
///
/// let record = parse(xml, &catalog).unwrap();
/// assert_eq!(record.sections("warnings"), ["Do not use."]);
/// assert_eq!(record.metadata.set_id.as_deref(), Some("abc"));
/// ```
pub fn parse(xml: &str, catalog: &SectionCatalog) -> Result<SplRecord> {
    parse_with_options(xml, catalog, &ParseOptions::default())
}

/// Convert an SPL document into a flat record.
pub fn parse_with_options(
    xml: &str,
    catalog: &SectionCatalog,
    options: &ParseOptions,
) -> Result<SplRecord> {
    let doc = parse_document(xml)?;

    let mut record = walk_sections(&doc, catalog, options);
    record.metadata = extract_metadata(&doc);

    for (name, _) in record.metadata.fields() {
        if record.contains_key(name) {
            tracing::warn!(key = name, "Metadata field replaces category of the same name");
        }
    }

    tracing::debug!(
        keys = record.len(),
        set_id = record.metadata.set_id.as_deref().unwrap_or_default(),
        "Converted SPL document"
    );

    Ok(record)
}

/// Load the sections mapping from `sections_path` and convert the document.
///
/// The mapping is read again on every call; load a [`SectionCatalog`]
/// once and use [`parse`] to convert many documents.
pub fn parse_with_sections_file(xml: &str, sections_path: impl AsRef<Path>) -> Result<SplRecord> {
    let catalog = SectionCatalog::load(sections_path)?;
    parse(xml, &catalog)
}
