//! Column declarations for delimited sources.
//!
//! A [`Schema`] fixes the kind of the columns it knows about and lists the ones a
//! source must provide. Columns it does not declare are typed from their data.

use crate::value::ColumnType;

/// Category column shared by both benchmark result files.
pub const OPTION_TYPE: &str = "Option Type";
/// Time-step count column.
pub const TIME_STEPS: &str = "Time Steps";
/// Monte Carlo sample count column.
pub const SAMPLES: &str = "Samples";
/// Pricing error column written alongside the timings.
pub const ERROR: &str = "Error";
/// Timing difference between the non-constant and constant process, in seconds.
pub const TIME_DIFF: &str = "Time(non constant) - Time(Constant) in (s)";

/// A declared column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header name, matched exactly.
    pub name: String,
    /// Kind every field of the column must parse as.
    pub kind: ColumnType,
    /// Whether the source must contain this column.
    pub required: bool,
}

/// Expected layout of a delimited source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

impl Schema {
    /// Creates an empty schema: every column is inferred, none is required.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required column.
    pub fn require(mut self, name: impl Into<String>, kind: ColumnType) -> Self {
        self.declare(name.into(), kind, true);
        self
    }

    /// Declares an optional column. When present, its fields must parse as `kind`.
    pub fn optional(mut self, name: impl Into<String>, kind: ColumnType) -> Self {
        self.declare(name.into(), kind, false);
        self
    }

    fn declare(&mut self, name: String, kind: ColumnType, required: bool) {
        let spec = ColumnSpec {
            name,
            kind,
            required,
        };
        match self.columns.iter_mut().find(|c| c.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.columns.push(spec),
        }
    }

    /// Looks up a declared column.
    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Declared columns, in declaration order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Names of the columns a source must provide.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|c| c.required)
            .map(|c| c.name.as_str())
    }

    /// Columns shared by both benchmark files. Nothing is required.
    pub fn benchmark() -> Self {
        Self::new()
            .optional(OPTION_TYPE, ColumnType::Text)
            .optional(TIME_STEPS, ColumnType::Integer)
            .optional(SAMPLES, ColumnType::Integer)
            .optional(ERROR, ColumnType::Float)
            .optional(TIME_DIFF, ColumnType::Float)
    }

    /// Layout of `results_time.txt`.
    pub fn time_steps() -> Self {
        Self::benchmark()
            .require(OPTION_TYPE, ColumnType::Text)
            .require(TIME_STEPS, ColumnType::Integer)
            .require(TIME_DIFF, ColumnType::Float)
    }

    /// Layout of `results_samples.txt`.
    pub fn samples() -> Self {
        Self::benchmark()
            .require(OPTION_TYPE, ColumnType::Text)
            .require(SAMPLES, ColumnType::Integer)
            .require(TIME_DIFF, ColumnType::Float)
    }
}
