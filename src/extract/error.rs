use thiserror::Error;

/// Errors surfaced by the extraction walk
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A group or collected size option lacked a field the catalog needs,
    /// or the document lacked its filter-entry field
    #[error("missing required field `{field}` on {entry}")]
    MissingField { field: String, entry: String },

    /// The input tree did not have the shape the walk expects
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl ExtractError {
    pub(crate) fn missing(field: impl Into<String>, entry: impl Into<String>) -> Self {
        ExtractError::MissingField {
            field: field.into(),
            entry: entry.into(),
        }
    }
}
