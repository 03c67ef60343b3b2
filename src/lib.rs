//! # Sifter - Filter Catalog Extraction
//!
//! A library for flattening nested filter-definition documents into two
//! flat lookup tables: a group catalog (title -> id) and a size catalog
//! (group id -> size title -> size id).
//!
//! ## Quick Start
//!
//! ```rust
//! use sifter::extract::{ExtractConfig, FilterExtractor};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let doc = json!({
//!     "filters": [{
//!         "type": "group",
//!         "id": "g1",
//!         "title": "Shoes",
//!         "options": [
//!             {"type": "default", "id": "s1", "title": "Small"},
//!             {"type": "default", "id": "s2", "title": "Large"}
//!         ]
//!     }]
//! });
//!
//! let extractor = FilterExtractor::new(ExtractConfig::default());
//! let catalog = extractor.extract_document(&doc)?;
//!
//! assert_eq!(catalog.groups["Shoes"], json!("g1"));
//! assert_eq!(catalog.sizes["g1"]["Small"], json!("s1"));
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::BufRead;

pub mod extract;

// Re-export commonly used types for convenience
pub use extract::{
    Catalog, CatalogWriter, CombinedWriter, ExtractConfig, ExtractError, FilterExtractor,
    GroupMap, SizeMap,
};

/// Main entry point: parse a filter document from a reader and extract
/// its catalog
pub fn extract_catalog<R: BufRead>(reader: R, config: ExtractConfig) -> Result<Catalog> {
    let doc: Value = serde_json::from_reader(reader).context("Failed to parse JSON")?;

    let extractor = FilterExtractor::new(config);
    let catalog = extractor
        .extract_document(&doc)
        .context("Failed to extract catalog")?;

    Ok(catalog)
}
