//! sifter-extract: Flatten a nested filter document into catalog lookup tables
//!
//! Usage:
//!   # Read from file, print the combined catalog to stdout
//!   sifter-extract filters.json
//!
//!   # Read from stdin
//!   cat filters.json | sifter-extract
//!
//!   # Write groups.json and sizes.json into a directory
//!   sifter-extract filters.json --output-dir ./catalog

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use sifter::extract::{CatalogWriter, CombinedWriter, ExtractConfig, FilterExtractor};
use std::fs::File;
use std::io::{BufReader, Read};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sifter-extract")]
#[command(about = "Flatten a nested filter document into catalog lookup tables", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output directory for the group-map and size-map documents
    /// If omitted, writes one combined document to stdout
    #[arg(long, short = 'o')]
    output_dir: Option<String>,

    /// File name for the group-map document
    #[arg(long, default_value = "groups.json")]
    groups_file: String,

    /// File name for the size-map document
    #[arg(long, default_value = "sizes.json")]
    sizes_file: String,

    /// Top-level field holding the filter entries (default: "filters")
    #[arg(long)]
    filters_field: Option<String>,

    /// Type tag marking group entries (default: "group")
    #[arg(long)]
    group_tag: Option<String>,

    /// Type tag marking size-option entries (default: "default")
    #[arg(long)]
    option_tag: Option<String>,
}

fn main() -> Result<()> {
    setup_logging();
    let args = Args::parse();

    // Build config
    let mut config = ExtractConfig::default();
    if let Some(field) = args.filters_field {
        config.filters_field = field;
    }
    if let Some(tag) = args.group_tag {
        config.group_tag = tag;
    }
    if let Some(tag) = args.option_tag {
        config.option_tag = tag;
    }

    let doc = read_document(args.input.as_deref())?;

    let extractor = FilterExtractor::new(config);
    let catalog = extractor.extract_document(&doc)?;
    tracing::info!(
        "Extracted {} groups and {} size options",
        catalog.group_count(),
        catalog.size_count()
    );

    if let Some(output_dir) = args.output_dir {
        let writer = CatalogWriter::new(&output_dir)?
            .with_file_names(args.groups_file, args.sizes_file);
        writer.write_catalog(&catalog)?;
    } else {
        let stdout = std::io::stdout();
        let mut writer = CombinedWriter::new(stdout.lock());
        writer.write_catalog(&catalog)?;
        writer.flush()?;
    }

    Ok(())
}

/// Parse the whole input document using SIMD-accelerated JSON parsing
/// when possible, falling back to serde_json
fn read_document(input_file: Option<&str>) -> Result<Value> {
    let reader: Box<dyn Read> = if let Some(file_path) = input_file {
        let file =
            File::open(file_path).with_context(|| format!("Failed to open {}", file_path))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(std::io::stdin())
    };

    let mut content = Vec::new();
    let mut buf_reader = BufReader::new(reader);
    buf_reader
        .read_to_end(&mut content)
        .context("Failed to read input")?;

    // Try SIMD parsing first (faster) - use OwnedValue to avoid borrow issues
    match simd_json::to_owned_value(&mut content.clone()) {
        Ok(owned) => {
            let json_str = simd_json::to_string(&owned)?;
            let value: Value = serde_json::from_str(&json_str)?;
            Ok(value)
        }
        Err(_) => {
            // Fallback to serde_json for a precise parse error
            let value: Value =
                serde_json::from_slice(&content).context("Failed to parse JSON")?;
            Ok(value)
        }
    }
}

/// Sets up the logging framework using tracing_subscriber.
/// Reads log level filters from the `RUST_LOG` environment variable,
/// defaulting to "info". Logs go to stderr so stdout stays a clean
/// document stream.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
