//! Error types for SPL conversion.
//!
//! Unknown section codes and missing metadata are expected in real
//! labels and never surface here; only I/O, XML and output
//! serialization failures do.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the spl-json library.
#[derive(Debug, Error)]
pub enum SplError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// The sections mapping file could not be read.
    #[error("Failed to read sections mapping {}: {source}", .path.display())]
    SectionsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for spl-json operations.
pub type Result<T> = std::result::Result<T, SplError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_read_display() {
        let err = SplError::SectionsRead {
            path: PathBuf::from("config/sections.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read sections mapping config/sections.csv: no such file"
        );
    }

    #[test]
    fn test_xml_parse_from() {
        let parse_err = roxmltree::Document::parse("<document>").unwrap_err();
        let err: SplError = parse_err.into();
        assert!(err.to_string().starts_with("XML parsing failed:"));
    }
}
