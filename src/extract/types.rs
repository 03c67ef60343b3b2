use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lookup table from group title to group id
pub type GroupMap = Map<String, Value>;

/// Lookup table from group id (as an object key) to an inner
/// size title -> size id object
pub type SizeMap = Map<String, Value>;

/// The two lookup tables produced by one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Group title -> group id
    pub groups: GroupMap,

    /// Group id -> (size title -> size id)
    pub sizes: SizeMap,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Number of groups discovered
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of size options across all groups
    pub fn size_count(&self) -> usize {
        self.sizes
            .values()
            .filter_map(Value::as_object)
            .map(Map::len)
            .sum()
    }
}

/// Configuration for the extraction walk
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Field holding an entry's type tag
    pub type_field: String,

    /// Field holding an entry's child entries
    pub options_field: String,

    /// Type tag marking a group (category) entry
    pub group_tag: String,

    /// Type tag marking a selectable size option
    pub option_tag: String,

    /// Top-level document field holding the entry array
    pub filters_field: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            type_field: String::from("type"),
            options_field: String::from("options"),
            group_tag: String::from("group"),
            option_tag: String::from("default"),
            filters_field: String::from("filters"),
        }
    }
}
