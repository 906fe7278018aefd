use thiserror::Error;

/// Format-level problems found while reading a dinosaur data file.
///
/// Loaders wrap these in `anyhow` with the file and row as context.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("{format} data is missing the '{column}' column")]
    MissingColumn {
        format: &'static str,
        column: &'static str,
    },

    #[error("row {row}, {column}: '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}, {column}: unexpected null")]
    NullValue { row: usize, column: &'static str },

    #[error("column '{column}' has unsupported type {data_type}")]
    UnsupportedColumnType { column: String, data_type: String },
}
