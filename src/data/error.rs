//! Error types for game data loading.

use thiserror::Error;

/// Errors that can occur when loading settings, brick, powerup or level data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// Rows or columns is zero.
    #[error("Level '{level}' has invalid grid size {rows}x{columns}; rows and columns must be > 0")]
    InvalidDimensions {
        level: String,
        rows: usize,
        columns: usize,
    },

    /// Layout rows don't match the declared grid dimensions.
    #[error("Grid mismatch: expected {expected_rows}x{expected_columns}, got {actual_rows}x{actual_columns}")]
    GridMismatch {
        expected_rows: usize,
        expected_columns: usize,
        actual_rows: usize,
        actual_columns: usize,
    },

    /// Invalid palette reference.
    #[error("Unknown palette entry '{character}' at row {row}, column {column}")]
    UnknownPaletteEntry {
        character: char,
        row: usize,
        column: usize,
    },

    /// A generated pattern needs at least one brick type.
    #[error("Level '{0}' uses a generated pattern but lists no available brick types")]
    EmptyPalette(String),
}
