//! In-memory tables.

use std::io::Write;

use crate::error::{DataError, DataResult};
use crate::value::{ColumnType, Value};

/// A named, typed column of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header name.
    pub name: String,
    /// Kind of every value in the column.
    pub kind: ColumnType,
}

impl Column {
    /// Creates a column.
    pub fn new(name: impl Into<String>, kind: ColumnType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// One record: a value per column, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Creates a row from its values.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Value at a column index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// All values, in column order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

/// An ordered sequence of rows sharing one set of columns.
///
/// Rows keep their source order. A table is never modified after it has been
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table, checking that every row matches the columns.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> DataResult<Self> {
        for (i, name) in columns.iter().map(|c| &c.name).enumerate() {
            if columns[..i].iter().any(|c| &c.name == name) {
                return Err(DataError::MalformedHeader(format!(
                    "duplicate column '{}'",
                    name
                )));
            }
        }

        for (index, row) in rows.iter().enumerate() {
            // header is line 1
            let line = index as u64 + 2;
            if row.values.len() != columns.len() {
                return Err(DataError::malformed_row(
                    line,
                    format!(
                        "expected {} fields, found {}",
                        columns.len(),
                        row.values.len()
                    ),
                ));
            }
            for (value, column) in row.values.iter().zip(&columns) {
                if value.column_type() != column.kind {
                    return Err(DataError::malformed_row(
                        line,
                        format!(
                            "column '{}' expects {}, found {}",
                            column.name,
                            column.kind,
                            value.column_type()
                        ),
                    ));
                }
            }
        }

        Ok(Self { columns, rows })
    }

    /// Columns, in header order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header names, in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Like [`Table::column_index`], failing with `MissingColumn`.
    pub fn require_column(&self, name: &str) -> DataResult<usize> {
        self.column_index(name)
            .ok_or_else(|| DataError::missing_column(name))
    }

    /// All rows, in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at an index.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Cell lookup by row index and column name.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Writes the table as delimited text: a header line, then one line per row.
    ///
    /// Reloading the output with the same delimiter and schema yields an equal
    /// table.
    pub fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> DataResult<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(writer);

        wtr.write_record(self.column_names())?;
        for row in &self.rows {
            wtr.write_record(row.values.iter().map(Value::to_field))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Renders the table to a delimited string.
    pub fn to_delimited_string(&self, delimiter: u8) -> DataResult<String> {
        let mut buf = Vec::new();
        self.write_delimited(&mut buf, delimiter)?;
        String::from_utf8(buf)
            .map_err(|e| DataError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(
            vec![
                Column::new("Option Type", ColumnType::Text),
                Column::new("Time Steps", ColumnType::Integer),
                Column::new("Diff", ColumnType::Float),
            ],
            vec![
                Row::new(vec![
                    Value::from("European Option"),
                    Value::Integer(10),
                    Value::Float(0.5),
                ]),
                Row::new(vec![
                    Value::from("Barrier Option"),
                    Value::Integer(10),
                    Value::Float(-0.8),
                ]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let table = sample_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_index("Time Steps"), Some(1));
        assert_eq!(table.column_index("time steps"), None);
        assert_eq!(table.value(1, "Diff"), Some(&Value::Float(-0.8)));
        assert!(matches!(
            table.require_column("Samples"),
            Err(DataError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_rejects_mistyped_row() {
        let err = Table::new(
            vec![Column::new("n", ColumnType::Integer)],
            vec![Row::new(vec![Value::Float(1.5)])],
        )
        .unwrap_err();
        assert!(matches!(err, DataError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_rejects_duplicate_column() {
        let err = Table::new(
            vec![
                Column::new("a", ColumnType::Text),
                Column::new("a", ColumnType::Text),
            ],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, DataError::MalformedHeader(_)));
    }

    #[test]
    fn test_write_delimited() {
        let text = sample_table().to_delimited_string(b';').unwrap();
        assert_eq!(
            text,
            "Option Type;Time Steps;Diff\nEuropean Option;10;0.5\nBarrier Option;10;-0.8\n"
        );
    }
}
