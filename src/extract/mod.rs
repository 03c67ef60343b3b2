//! Catalog extraction - flatten nested filter trees into lookup tables
//!
//! This module walks a parsed filter-definition document and accumulates
//! two flat lookup tables: group title -> group id, and group id ->
//! (size title -> size id). The walk is a pre-order depth-first pass
//! over each entry's `options` children, driven by an explicit worklist.

pub mod error;
pub mod extractor;
pub mod types;
pub mod writer;

pub use error::ExtractError;
pub use extractor::FilterExtractor;
pub use types::{Catalog, ExtractConfig, GroupMap, SizeMap};
pub use writer::{CatalogWriter, CombinedWriter};
