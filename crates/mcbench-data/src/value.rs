//! Typed cell values.

use std::fmt;

/// The kind of values a column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Signed 64-bit integers.
    Integer,
    /// 64-bit floating point.
    Float,
    /// Free text, kept verbatim.
    Text,
}

impl ColumnType {
    /// Parses a raw field into a value of this kind.
    ///
    /// Returns `None` when the field is not a valid integer or float. Text always
    /// succeeds.
    pub fn parse(self, raw: &str) -> Option<Value> {
        match self {
            ColumnType::Integer => raw.parse::<i64>().ok().map(Value::Integer),
            ColumnType::Float => raw.parse::<f64>().ok().map(Value::Float),
            ColumnType::Text => Some(Value::Text(raw.to_string())),
        }
    }

    /// Infers the narrowest kind that accepts every field.
    ///
    /// An empty column is text.
    pub fn infer(fields: &[&str]) -> Self {
        if fields.is_empty() {
            return ColumnType::Text;
        }
        if fields.iter().all(|f| f.parse::<i64>().is_ok()) {
            ColumnType::Integer
        } else if fields.iter().all(|f| f.parse::<f64>().is_ok()) {
            ColumnType::Float
        } else {
            ColumnType::Text
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
        };
        f.write_str(name)
    }
}

/// A single cell of a table.
///
/// Floats compare by bit pattern, so a `NaN` cell equals a `NaN` cell parsed from
/// the same text and tables loaded from identical sources compare equal.
#[derive(Debug, Clone)]
pub enum Value {
    /// Integer cell.
    Integer(i64),
    /// Floating point cell.
    Float(f64),
    /// Text cell.
    Text(String),
}

impl Value {
    /// Returns the kind of this value.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Integer(_) => ColumnType::Integer,
            Value::Float(_) => ColumnType::Float,
            Value::Text(_) => ColumnType::Text,
        }
    }

    /// Numeric view of the cell. Text has none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    /// Integer view of the cell.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view of the cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the cell the way it is written back to a delimited file.
    ///
    /// Floats keep a decimal point or exponent so that re-inference yields a float
    /// again, and the shortest representation parses back to the same bits.
    pub fn to_field(&self) -> String {
        match self {
            Value::Integer(v) => v.to_string(),
            Value::Float(v) => format!("{:?}", v),
            Value::Text(s) => s.clone(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}
