//! Section code to category name mapping.
//!
//! The mapping is read from a CSV resource with one `code,displayName`
//! row per line. Display names are normalized once, at load time, into
//! the lowercase underscore keys used throughout the output record.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::config::UNCLASSIFIED_SECTION;
use crate::error::{Result, SplError};

/// Normalized name the mapping uses for the SPL unclassified section code.
const UNCLASSIFIED_NAME: &str = "spl_unclassified";

/// Normalize a display name from the sections mapping into a category key.
///
/// Applies, in order: strip quotes, drop a trailing colon, `" & "` to
/// `" and "`, the first `/` to `" or "`, spaces to underscores,
/// lowercase, and finally maps `spl_unclassified` onto
/// [`UNCLASSIFIED_SECTION`]. Applying it to its own output is a no-op.
///
/// # Examples
/// ```
/// use spl_json::sections::normalize_category_name;
///
/// assert_eq!(normalize_category_name("\"INDICATIONS & USAGE\""), "indications_and_usage");
/// assert_eq!(normalize_category_name("SPL Unclassified"), "spl_unclassified_section");
/// assert_eq!(normalize_category_name("Dosage Forms/Strengths:"), "dosage_forms_or_strengths");
/// ```
pub fn normalize_category_name(raw: &str) -> String {
    let unquoted = raw.replace('"', "");
    let trimmed = unquoted.trim();
    let without_colon = trimmed.strip_suffix(':').unwrap_or(trimmed);

    let name = without_colon
        .replace(" & ", " and ")
        .replacen('/', " or ", 1)
        .replace(' ', "_")
        .to_lowercase();

    if name == UNCLASSIFIED_NAME {
        UNCLASSIFIED_SECTION.to_string()
    } else {
        name
    }
}

/// Split one CSV line into fields.
///
/// Commas inside double quotes do not split; the quotes themselves are
/// dropped and `""` inside a quoted field yields a literal quote.
fn split_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}

/// Immutable mapping from section code to category name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionCatalog {
    categories: IndexMap<String, String>,
}

impl SectionCatalog {
    /// Create an empty catalog. Every code resolves to the unclassified category.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from CSV content.
    ///
    /// Blank lines are ignored. Rows without a second column or with an
    /// empty code are skipped with a warning; columns after the second
    /// are ignored. When a code repeats, the later row wins.
    ///
    /// # Examples
    /// ```
    /// use spl_json::sections::SectionCatalog;
    ///
    /// let catalog = SectionCatalog::from_csv_str("34071-1,WARNINGS\n42229-5,\"SPL Unclassified\"\n");
    /// assert_eq!(catalog.get("34071-1"), Some("warnings"));
    /// assert_eq!(catalog.get("42229-5"), Some("spl_unclassified_section"));
    /// assert_eq!(catalog.get("00000-0"), None);
    /// ```
    #[must_use]
    pub fn from_csv_str(csv: &str) -> Self {
        let mut categories = IndexMap::new();
        let csv = csv.strip_prefix('\u{feff}').unwrap_or(csv);

        for (index, line) in csv.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let row = split_csv_row(line);
            let (Some(code), Some(raw_name)) = (row.first(), row.get(1)) else {
                tracing::warn!(line = index + 1, "Skipping sections row without a display name");
                continue;
            };

            let code = code.trim();
            if code.is_empty() {
                tracing::warn!(line = index + 1, "Skipping sections row with an empty code");
                continue;
            }

            let name = normalize_category_name(raw_name);
            if let Some(previous) = categories.insert(code.to_string(), name) {
                tracing::debug!(
                    code,
                    previous = %previous,
                    "Duplicate section code, later row wins"
                );
            }
        }

        Self { categories }
    }

    /// Load a catalog from a CSV file.
    ///
    /// # Errors
    /// Returns [`SplError::SectionsRead`] when the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let csv = fs::read_to_string(path).map_err(|source| SplError::SectionsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_csv_str(&csv);
        tracing::debug!(path = %path.display(), codes = catalog.len(), "Loaded sections mapping");
        Ok(catalog)
    }

    /// Look up the category name for a code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.categories.get(code).map(String::as_str)
    }

    /// Category for an optional code, falling back to [`UNCLASSIFIED_SECTION`].
    ///
    /// An empty code is treated like a missing one.
    #[must_use]
    pub fn category_for(&self, code: Option<&str>) -> &str {
        code.filter(|c| !c.is_empty())
            .and_then(|c| self.get(c))
            .unwrap_or(UNCLASSIFIED_SECTION)
    }

    /// Number of mapped codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog maps no codes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over `(code, category)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

impl<C: Into<String>, N: AsRef<str>> FromIterator<(C, N)> for SectionCatalog {
    /// Build a catalog from `(code, display name)` pairs, normalizing each name.
    fn from_iter<I: IntoIterator<Item = (C, N)>>(iter: I) -> Self {
        Self {
            categories: iter
                .into_iter()
                .map(|(code, name)| (code.into(), normalize_category_name(name.as_ref())))
                .collect(),
        }
    }
}
