//! Data error types.

use std::path::PathBuf;

use thiserror::Error;

/// Data operation result type.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised while loading, querying or writing tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required input file does not exist.
    #[error("input file not found: {}", path.display())]
    MissingFile {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// A row's field count differs from the header, or a typed field did not parse.
    #[error("malformed row at line {line}: {message}")]
    MalformedRow {
        /// 1-based source line, counting the header as line 1.
        line: u64,
        /// What was wrong with the row.
        message: String,
    },

    /// The header line is absent or lists a column more than once.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// A column that the schema requires, or that a query names, is absent.
    #[error("column not found: {column}")]
    MissingColumn {
        /// The column name that was looked up.
        column: String,
    },

    /// A column used as a coordinate holds text.
    #[error("column '{column}' is not numeric (row {row})")]
    NotNumeric {
        /// The column being projected.
        column: String,
        /// 0-based row index within the table.
        row: usize,
    },

    /// Delimited reader or writer failure.
    #[error("delimited text error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Creates a malformed-row error.
    pub fn malformed_row(line: u64, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            message: message.into(),
        }
    }

    /// Creates a missing-column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}
