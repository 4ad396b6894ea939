//! Serialization of converted records to JSON or YAML.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::types::SplRecord;

/// Output format for a converted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON object.
    #[default]
    Json,

    /// YAML mapping.
    Yaml,
}

impl OutputFormat {
    /// Conventional file extension for the format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Serialize a record.
///
/// # Arguments
/// * `record` - Record to serialize
/// * `format` - Target format
/// * `pretty` - Indent JSON output (YAML is always block style)
pub fn render_record(record: &SplRecord, format: OutputFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(record)?,
        OutputFormat::Json => serde_json::to_string(record)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(record)?,
    };
    Ok(rendered)
}

/// Serialize a record and write it to `path`, with a trailing newline.
pub fn save_record(
    record: &SplRecord,
    path: &Path,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    let mut content = render_record(record, format, pretty)?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "Wrote record");
    Ok(())
}
