use thiserror::Error;

/// Failure taxonomy of the pipeline.
///
/// Loading either produces a fully typed [`Dataset`](super::model::Dataset)
/// or fails; there are no partial loads and no silent defaults. Aggregation
/// itself cannot fail on a well-typed subset.
#[derive(Debug, Error)]
pub enum DataError {
    /// The source is unreadable or structurally unusable: missing file,
    /// unsupported extension, malformed container, or a required column
    /// absent from the header.
    #[error("load error: {0}")]
    Load(String),

    /// A cell value could not be coerced to its expected semantic type.
    #[error("schema error: row {row}, column '{column}': {message}")]
    Schema {
        /// Zero-based data row (header excluded).
        row: usize,
        column: &'static str,
        message: String,
    },

    /// A filter referenced an unknown attribute or an unusable value.
    #[error("config error: {0}")]
    Config(String),
}

impl DataError {
    pub(crate) fn schema(row: usize, column: &'static str, message: impl Into<String>) -> Self {
        DataError::Schema {
            row,
            column,
            message: message.into(),
        }
    }
}
