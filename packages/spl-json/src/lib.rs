//! spl-json - Convert Structured Product Labeling (SPL) documents into flat records.
//!
//! Every `<section>` of an SPL drug label is classified through a
//! code-to-category mapping, its text is extracted and normalized, and
//! embedded tables are captured as markup. The result is a single flat
//! record keyed by category name.
//!
//! # Example
//!
//! ```
//! use spl_json::{parse, SectionCatalog};
//!
//! let catalog = SectionCatalog::from_csv_str("34067-9,\"INDICATIONS & USAGE\"\n");
//! let xml = r#"<document>
//!   <component><section>
//!     <code code="34067-9"/>
//!     <text>For relief of <content>minor</content> pain.</text>
//!   </section></component>
//! </document>"#;
//!
//! let record = parse(xml, &catalog).unwrap();
//! assert_eq!(record.sections("indications_and_usage"), ["For relief of minor pain."]);
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`]: Constants and parse options
//! - [`error`]: Error types and Result alias
//! - [`sections`]: Code to category mapping and name normalization
//! - [`resolver`]: Category resolution for section elements
//! - [`walker`]: Section traversal and deduplication
//! - [`text`]: Text reconstruction and whitespace handling
//! - [`xml`]: XML traversal and markup rendering
//! - [`metadata`]: Document-level metadata extraction
//! - [`types`]: Output record types
//! - [`parser`]: Document parsing entry points
//! - [`output`]: JSON and YAML serialization
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod metadata;
pub mod output;
pub mod parser;
pub mod resolver;
pub mod sections;
pub mod text;
pub mod types;
pub mod walker;
pub mod xml;

// Re-export main functions
pub use parser::{parse, parse_with_options, parse_with_sections_file};

// Re-export commonly used items
pub use config::{ParseOptions, TablePolicy};
pub use error::{Result, SplError};
pub use sections::SectionCatalog;
pub use types::{SplMetadata, SplRecord};
