//! Section walker: classifies every section and collects its text and tables.

use roxmltree::{Document, Node};

use crate::config::{ParseOptions, TablePolicy, SECTION_TAG, TABLE_TAG, UNCLASSIFIED_SECTION};
use crate::resolver::resolve_category;
use crate::sections::SectionCatalog;
use crate::text::section_text;
use crate::types::SplRecord;
use crate::xml::{count_ancestors_until, descendants_by_tag, elements_by_tag, render_markup};

/// Check whether a section sits one level inside another section.
///
/// True when exactly one element separates the section from its nearest
/// enclosing section, as in SPL's `section > component > section`.
pub fn is_subsection(section: Node<'_, '_>) -> bool {
    count_ancestors_until(section, SECTION_TAG) == 1
}

/// Walk all sections of a document and build the category-keyed entries.
///
/// Sections are visited depth-first in document order. An unclassified
/// subsection's text is skipped, since its enclosing section's text
/// already contains it. Tables are rendered per visited section and,
/// under [`TablePolicy::Always`], are captured even for skipped
/// subsections.
///
/// The returned record has no metadata set.
pub fn walk_sections(
    doc: &Document<'_>,
    catalog: &SectionCatalog,
    options: &ParseOptions,
) -> SplRecord {
    let mut record = SplRecord::new();

    for (index, section) in elements_by_tag(doc, SECTION_TAG).enumerate() {
        let category = resolve_category(section, catalog);
        let redundant = category == UNCLASSIFIED_SECTION && is_subsection(section);

        if redundant {
            tracing::debug!(index, "Skipping text of unclassified subsection");
        } else {
            tracing::debug!(index, category, "Recording section");
            record.push_section(category, section_text(section, options.normalize_whitespace));
        }

        if redundant && options.table_policy == TablePolicy::WithText {
            continue;
        }

        for table in descendants_by_tag(section, TABLE_TAG) {
            record.push_table(category, render_markup(table, options.normalize_whitespace));
        }
    }

    record
}
