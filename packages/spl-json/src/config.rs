//! Configuration constants and parse options.

/// Category assigned to sections whose code is missing or unmapped.
pub const UNCLASSIFIED_SECTION: &str = "spl_unclassified_section";

/// Suffix appended to a category name for its captured tables.
pub const TABLE_SUFFIX: &str = "_table";

/// Default location of the sections mapping, relative to the working directory.
pub const DEFAULT_SECTIONS_PATH: &str = "sections.csv";

/// Tag of a labeling section.
pub const SECTION_TAG: &str = "section";

/// Tag of the element carrying a section's classification code.
pub const CODE_TAG: &str = "code";

/// Tag of an embedded table.
pub const TABLE_TAG: &str = "table";

/// Tag of a line-break marker.
pub const LINE_BREAK_TAG: &str = "br";

/// Build the record key under which a category's tables are stored.
///
/// # Examples
/// ```
/// use spl_json::config::table_key;
///
/// assert_eq!(table_key("warnings"), "warnings_table");
/// ```
#[must_use]
pub fn table_key(category: &str) -> String {
    format!("{category}{TABLE_SUFFIX}")
}

/// Decides whether tables of a deduplicated subsection are still captured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TablePolicy {
    /// Capture tables for every section, including unclassified
    /// subsections whose text was skipped.
    #[default]
    Always,

    /// Capture tables only for sections whose text was recorded.
    WithText,
}

/// Options controlling a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Collapse every whitespace run inside text nodes to one space
    /// before extraction and rendering.
    pub normalize_whitespace: bool,

    /// Table capture behavior for skipped subsections.
    pub table_policy: TablePolicy,
}

impl ParseOptions {
    /// Set the table policy.
    #[must_use]
    pub fn with_table_policy(mut self, table_policy: TablePolicy) -> Self {
        self.table_policy = table_policy;
        self
    }

    /// Enable or disable whitespace normalization of text nodes.
    #[must_use]
    pub fn with_normalize_whitespace(mut self, normalize_whitespace: bool) -> Self {
        self.normalize_whitespace = normalize_whitespace;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_whitespace: true,
            table_policy: TablePolicy::Always,
        }
    }
}
