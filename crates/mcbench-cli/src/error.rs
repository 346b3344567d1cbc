//! CLI error types.

use std::fmt;

use thiserror::Error;

/// A single failed configuration check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `panels[1].series[0].label`.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configuration parsed but failed one or more checks.
    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ValidationError>),

    /// The delimiter cannot be used as a single-byte field separator.
    #[error("Invalid delimiter {0:?}: must be a single ASCII character other than a quote or line break")]
    InvalidDelimiter(char),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
