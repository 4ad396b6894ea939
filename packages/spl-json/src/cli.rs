//! Command-line interface for the converter.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{ParseOptions, TablePolicy, DEFAULT_SECTIONS_PATH, TABLE_SUFFIX};
use crate::error::{Result, SplError};
use crate::output::{render_record, save_record, OutputFormat};
use crate::parser::parse_with_options;
use crate::sections::SectionCatalog;

/// spl-json - Convert SPL drug labels into flat, category-keyed records.
#[derive(Parser)]
#[command(name = "spl-json")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an SPL XML document.
    Parse {
        /// SPL XML file, or `-` for stdin
        file: PathBuf,

        /// Sections mapping CSV (code,displayName per line)
        #[arg(short, long, default_value = DEFAULT_SECTIONS_PATH)]
        sections: PathBuf,

        /// Output file or directory (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write JSON on a single line
        #[arg(long)]
        compact: bool,

        /// Whether tables of skipped unclassified subsections are captured
        #[arg(long, value_enum, default_value_t = TablePolicy::Always)]
        table_policy: TablePolicy,

        /// Keep tabs and newlines inside text nodes
        #[arg(long)]
        raw_whitespace: bool,
    },

    /// Print the normalized code to category mapping.
    Sections {
        /// Sections mapping CSV
        #[arg(default_value = DEFAULT_SECTIONS_PATH)]
        path: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            sections,
            output,
            format,
            compact,
            table_policy,
            raw_whitespace,
        } => {
            let options = ParseOptions::default()
                .with_table_policy(table_policy)
                .with_normalize_whitespace(!raw_whitespace);
            parse_command(
                &file,
                &sections,
                output.as_deref(),
                format,
                !compact,
                &options,
            )
        }
        Commands::Sections { path } => sections_command(&path),
    }
}

/// Read the input document from a file or stdin.
fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut xml = String::new();
        std::io::stdin().read_to_string(&mut xml)?;
        return Ok(xml);
    }
    Ok(std::fs::read_to_string(file)?)
}

/// Resolve the output file, placing `<input stem>.<ext>` inside directories.
fn output_path(output: &Path, input: &Path, format: OutputFormat) -> PathBuf {
    if !output.is_dir() {
        return output.to_path_buf();
    }
    let stem = input
        .file_stem()
        .filter(|_| input != Path::new("-"))
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string());
    output.join(format!("{stem}.{}", format.extension()))
}

/// Execute the parse command.
fn parse_command(
    file: &Path,
    sections: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    pretty: bool,
    options: &ParseOptions,
) -> Result<()> {
    let catalog = SectionCatalog::load(sections)?;
    let xml = read_input(file)?;
    let record = parse_with_options(&xml, &catalog, options)?;

    let Some(output) = output else {
        println!("{}", render_record(&record, format, pretty)?);
        return Ok(());
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(SplError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", parent.display()),
            )));
        }
    }

    let path = output_path(output, file, format);
    save_record(&record, &path, format, pretty)?;

    let (mut categories, mut tables) = (0, 0);
    for (key, values) in record.entries() {
        if key.ends_with(TABLE_SUFFIX) {
            tables += values.len();
        } else {
            categories += 1;
        }
    }
    eprintln!(
        "{} {}",
        style("Converted").bold(),
        style(file.display()).cyan()
    );
    if let Some(set_id) = &record.metadata.set_id {
        eprintln!("  Set ID: {}", style(set_id).green());
    }
    if let Some(date) = record.metadata.effective_date() {
        eprintln!("  Effective: {}", date.format("%Y-%m-%d"));
    }
    eprintln!("  Categories: {categories}");
    eprintln!("  Tables: {tables}");
    eprintln!(
        "{} {}",
        style("Saved to:").green().bold(),
        path.display()
    );

    Ok(())
}

/// Execute the sections command.
fn sections_command(path: &Path) -> Result<()> {
    let catalog = SectionCatalog::load(path)?;
    for (code, category) in catalog.iter() {
        println!("{code}\t{category}");
    }
    if catalog.is_empty() {
        eprintln!("{}", style("No section codes mapped").yellow());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["spl-json", "parse", "label.xml"]);

        let Commands::Parse {
            file,
            sections,
            output,
            format,
            compact,
            table_policy,
            raw_whitespace,
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(file, PathBuf::from("label.xml"));
        assert_eq!(sections, PathBuf::from(DEFAULT_SECTIONS_PATH));
        assert!(output.is_none());
        assert_eq!(format, OutputFormat::Json);
        assert!(!compact);
        assert_eq!(table_policy, TablePolicy::Always);
        assert!(!raw_whitespace);
    }

    #[test]
    fn test_cli_parse_options() {
        let cli = Cli::parse_from([
            "spl-json",
            "parse",
            "-",
            "--sections",
            "config/sections.csv",
            "--format",
            "yaml",
            "--table-policy",
            "with-text",
        ]);

        let Commands::Parse {
            file,
            sections,
            format,
            table_policy,
            ..
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(file, PathBuf::from("-"));
        assert_eq!(sections, PathBuf::from("config/sections.csv"));
        assert_eq!(format, OutputFormat::Yaml);
        assert_eq!(table_policy, TablePolicy::WithText);
    }

    #[test]
    fn test_output_path_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(
            dir.path(),
            Path::new("labels/aspirin.xml"),
            OutputFormat::Yaml,
        );
        assert_eq!(path, dir.path().join("aspirin.yaml"));

        let from_stdin = output_path(dir.path(), Path::new("-"), OutputFormat::Json);
        assert_eq!(from_stdin, dir.path().join("stdin.json"));
    }

    #[test]
    fn test_output_path_plain_file() {
        let path = output_path(
            Path::new("out/record.json"),
            Path::new("a.xml"),
            OutputFormat::Json,
        );
        assert_eq!(path, PathBuf::from("out/record.json"));
    }
}
