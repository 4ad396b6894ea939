//! Core data types for the converted record.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::config::table_key;

/// Top-level document identification fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplMetadata {
    /// Set identifier shared by all versions of a label (`setId/@root`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_id: Option<String>,

    /// Identifier of this document version (`id/@root`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Effective time as written in the label (`effectiveTime/@value`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_time: Option<String>,

    /// Version number (`versionNumber/@value`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl SplMetadata {
    /// Present fields as `(key, value)` pairs in serialization order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("set_id", &self.set_id),
            ("id", &self.id),
            ("effective_time", &self.effective_time),
            ("version", &self.version),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
        .collect()
    }

    /// Parse the calendar date from the leading `YYYYMMDD` of the effective time.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use spl_json::types::SplMetadata;
    ///
    /// let metadata = SplMetadata {
    ///     effective_time: Some("20200101".to_string()),
    ///     ..SplMetadata::default()
    /// };
    /// assert_eq!(metadata.effective_date(), NaiveDate::from_ymd_opt(2020, 1, 1));
    /// ```
    #[must_use]
    pub fn effective_date(&self) -> Option<NaiveDate> {
        let value = self.effective_time.as_deref()?;
        let date = value.get(..8)?;
        NaiveDate::parse_from_str(date, "%Y%m%d").ok()
    }
}

/// Flat record produced from one SPL document.
///
/// Category keys hold section texts, `<category>_table` keys hold table
/// markup. Keys keep first-insertion order and values keep document
/// order. Serializes as a single map with the metadata fields last; a
/// present metadata field replaces an entry with the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplRecord {
    entries: IndexMap<String, Vec<String>>,

    /// Document identification fields.
    pub metadata: SplMetadata,
}

impl Serialize for SplRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.metadata.fields();
        let mut map = serializer.serialize_map(None)?;
        for (key, values) in &self.entries {
            if fields.iter().any(|(name, _)| *name == key.as_str()) {
                continue;
            }
            map.serialize_entry(key, values)?;
        }
        for (name, value) in fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl SplRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section text under its category.
    pub fn push_section(&mut self, category: &str, text: String) {
        self.push(category.to_string(), text);
    }

    /// Append table markup under `<category>_table`.
    pub fn push_table(&mut self, category: &str, markup: String) {
        self.push(table_key(category), markup);
    }

    fn push(&mut self, key: String, value: String) {
        self.entries.entry(key).or_default().push(value);
    }

    /// Values stored under a key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Section texts recorded for a category.
    #[must_use]
    pub fn sections(&self, category: &str) -> &[String] {
        self.get(category).unwrap_or_default()
    }

    /// Table markup recorded for a category.
    #[must_use]
    pub fn tables(&self, category: &str) -> &[String] {
        self.get(&table_key(category)).unwrap_or_default()
    }

    /// Whether a key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, values)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of category and table keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no section or table was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_push_preserves_order() {
        let mut record = SplRecord::new();
        record.push_section("warnings", "first".to_string());
        record.push_section("boxed_warning", "box".to_string());
        record.push_table("warnings", "<table/>".to_string());
        record.push_section("warnings", "second".to_string());

        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["warnings", "boxed_warning", "warnings_table"]);
        assert_eq!(record.sections("warnings"), ["first", "second"]);
        assert_eq!(record.tables("warnings"), ["<table/>"]);
        assert!(record.tables("boxed_warning").is_empty());
    }

    #[test]
    fn test_serialize_flat_with_metadata_last() {
        let mut record = SplRecord::new();
        record.push_section("warnings", "Do not use.".to_string());
        record.metadata = SplMetadata {
            set_id: Some("abc".to_string()),
            id: Some("def".to_string()),
            effective_time: None,
            version: Some("3".to_string()),
        };

        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(
            text,
            r#"{"warnings":["Do not use."],"set_id":"abc","id":"def","version":"3"}"#
        );
    }

    #[test]
    fn test_metadata_replaces_entry_with_same_key() {
        let mut record = SplRecord::new();
        record.push_section("id", "hi a".to_string());
        record.push_table("id", "<table/>".to_string());
        record.push_section("version", "kept".to_string());
        record.metadata.id = Some("doc".to_string());

        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(
            text,
            r#"{"id_table":["<table/>"],"version":["kept"],"id":"doc"}"#
        );

        let yaml = serde_yaml_ng::to_string(&record).unwrap();
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(value["id"].as_str(), Some("doc"));
    }

    #[test]
    fn test_metadata_fields_in_order() {
        let metadata = SplMetadata {
            set_id: Some("abc".to_string()),
            id: None,
            effective_time: Some("20200101".to_string()),
            version: Some("2".to_string()),
        };
        assert_eq!(
            metadata.fields(),
            vec![("set_id", "abc"), ("effective_time", "20200101"), ("version", "2")]
        );
    }

    #[test]
    fn test_serialize_empty_record() {
        let value = serde_json::to_value(SplRecord::new()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_effective_date_with_time_component() {
        let metadata = SplMetadata {
            effective_time: Some("20231115093000".to_string()),
            ..SplMetadata::default()
        };
        assert_eq!(metadata.effective_date(), NaiveDate::from_ymd_opt(2023, 11, 15));
    }

    #[test]
    fn test_effective_date_invalid() {
        let short = SplMetadata {
            effective_time: Some("2023".to_string()),
            ..SplMetadata::default()
        };
        assert_eq!(short.effective_date(), None);

        let garbage = SplMetadata {
            effective_time: Some("2023-13-01".to_string()),
            ..SplMetadata::default()
        };
        assert_eq!(garbage.effective_date(), None);
        assert_eq!(SplMetadata::default().effective_date(), None);
    }
}
