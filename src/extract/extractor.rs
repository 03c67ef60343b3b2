use crate::extract::error::ExtractError;
use crate::extract::types::{Catalog, ExtractConfig};
use serde_json::{Map, Value};

/// The core extractor that walks a filter tree and accumulates the catalog
pub struct FilterExtractor {
    config: ExtractConfig,
}

impl FilterExtractor {
    pub fn new(config: ExtractConfig) -> Self {
        FilterExtractor { config }
    }

    /// Extract a catalog from a whole document, locating the configured
    /// filter-entry field first
    pub fn extract_document(&self, doc: &Value) -> Result<Catalog, ExtractError> {
        let root = doc.as_object().ok_or_else(|| {
            ExtractError::MalformedInput(format!(
                "document root must be an object, got {}",
                json_type_name(doc)
            ))
        })?;

        let entries = root
            .get(&self.config.filters_field)
            .ok_or_else(|| ExtractError::missing(&self.config.filters_field, "document root"))?;

        self.extract_value(entries)
    }

    /// Extract a catalog from the entry-sequence value itself
    pub fn extract_value(&self, entries: &Value) -> Result<Catalog, ExtractError> {
        match entries {
            Value::Array(arr) => self.extract(arr),
            other => Err(ExtractError::MalformedInput(format!(
                "filter entries must be an array, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// Walk an ordered entry sequence depth-first and build the catalog
    ///
    /// Visit order is pre-order: each entry in input order, then its
    /// `options` children in array order. Group entries record themselves
    /// in both maps at visit time; all other entries are only walked for
    /// descendants.
    pub fn extract(&self, entries: &[Value]) -> Result<Catalog, ExtractError> {
        let mut catalog = Catalog::new();

        // Explicit worklist instead of native recursion, so input depth is
        // bounded by heap rather than call stack. Children are pushed in
        // reverse: pop order equals array order.
        let mut stack: Vec<&Value> = entries.iter().rev().collect();

        while let Some(node) = stack.pop() {
            let entry = node.as_object().ok_or_else(|| {
                ExtractError::MalformedInput(format!(
                    "filter entry must be an object, got {}",
                    json_type_name(node)
                ))
            })?;

            if self.tag_of(entry) == Some(self.config.group_tag.as_str()) {
                self.collect_group(entry, &mut catalog)?;
            }

            if let Some(options) = entry.get(&self.config.options_field) {
                let children = options.as_array().ok_or_else(|| {
                    ExtractError::MalformedInput(format!(
                        "`{}` must be an array, got {}",
                        self.config.options_field,
                        json_type_name(options)
                    ))
                })?;
                for child in children.iter().rev() {
                    stack.push(child);
                }
            }
        }

        Ok(catalog)
    }

    /// Record a group entry and scan its direct children for size options
    ///
    /// A later group with the same id replaces the earlier inner map
    /// wholesale; sizes never merge across group entries.
    fn collect_group(
        &self,
        entry: &Map<String, Value>,
        catalog: &mut Catalog,
    ) -> Result<(), ExtractError> {
        let title = require_title(entry, "group entry")?;
        let id = require_field(entry, "id", "group entry")?;
        let id_key = scalar_key(id, "group entry")?;

        catalog.groups.insert(title.to_string(), id.clone());

        let mut size_options = Map::new();
        if let Some(options) = entry.get(&self.config.options_field) {
            let children = options.as_array().ok_or_else(|| {
                ExtractError::MalformedInput(format!(
                    "`{}` must be an array, got {}",
                    self.config.options_field,
                    json_type_name(options)
                ))
            })?;

            // Direct children only; a size option nested deeper belongs to
            // no group and is skipped by the walk's collection entirely.
            for child in children {
                let child = child.as_object().ok_or_else(|| {
                    ExtractError::MalformedInput(format!(
                        "filter entry must be an object, got {}",
                        json_type_name(child)
                    ))
                })?;

                if self.tag_of(child) != Some(self.config.option_tag.as_str()) {
                    continue;
                }

                let size_title = require_title(child, "size option")?;
                let size_id = require_field(child, "id", "size option")?;
                size_options.insert(size_title.to_string(), size_id.clone());
            }
        }

        catalog.sizes.insert(id_key, Value::Object(size_options));
        Ok(())
    }

    fn tag_of<'a>(&self, entry: &'a Map<String, Value>) -> Option<&'a str> {
        entry.get(&self.config.type_field).and_then(Value::as_str)
    }
}

fn require_field<'a>(
    entry: &'a Map<String, Value>,
    field: &str,
    kind: &str,
) -> Result<&'a Value, ExtractError> {
    entry
        .get(field)
        .ok_or_else(|| ExtractError::missing(field, kind))
}

fn require_title<'a>(entry: &'a Map<String, Value>, kind: &str) -> Result<&'a str, ExtractError> {
    let title = require_field(entry, "title", kind)?;
    title.as_str().ok_or_else(|| {
        ExtractError::MalformedInput(format!(
            "{kind} title must be a string, got {}",
            json_type_name(title)
        ))
    })
}

/// Coerce a scalar id to a JSON object key, the way serializers render
/// scalar keys
fn scalar_key(id: &Value, kind: &str) -> Result<String, ExtractError> {
    match id {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::from("null")),
        other => Err(ExtractError::MalformedInput(format!(
            "{kind} id must be a JSON scalar, got {}",
            json_type_name(other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
