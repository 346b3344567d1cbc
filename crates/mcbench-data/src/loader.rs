//! Delimited text loading.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::error::{DataError, DataResult};
use crate::schema::Schema;
use crate::table::{Column, Row, Table};
use crate::value::ColumnType;

/// Field delimiter of the benchmark result files.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Reads delimited sources into [`Table`]s.
///
/// The first line names the columns. Every later line must have the same number of
/// fields. Declared columns are parsed with the kind the [`Schema`] gives them and
/// the others are typed from their data. Fields are never trimmed.
#[derive(Debug, Clone)]
pub struct TableLoader {
    delimiter: u8,
    schema: Schema,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl TableLoader {
    /// Creates a loader with an empty schema.
    pub fn new(delimiter: u8) -> Self {
        Self {
            delimiter,
            schema: Schema::new(),
        }
    }

    /// Sets the schema used to type and require columns.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Loads a table from a file.
    pub fn load(&self, path: impl AsRef<Path>) -> DataResult<Table> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::MissingFile {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DataError::MissingFile {
                path: path.to_path_buf(),
            },
            _ => DataError::Io(e),
        })?;

        let table = self.read(file)?;
        debug!(
            path = %path.display(),
            columns = table.columns().len(),
            rows = table.len(),
            "Loaded table"
        );
        Ok(table)
    }

    /// Parses a table from any reader.
    pub fn read<R: Read>(&self, reader: R) -> DataResult<Table> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut records = rdr.records();
        let header = match records.next() {
            Some(record) => record?,
            None => return Err(DataError::MalformedHeader("source is empty".into())),
        };
        let names: Vec<String> = header.iter().map(str::to_string).collect();
        self.check_header(&names)?;

        let mut raw: Vec<(u64, StringRecord)> = Vec::new();
        for result in records {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            if record.len() != names.len() {
                return Err(DataError::malformed_row(
                    line,
                    format!("expected {} fields, found {}", names.len(), record.len()),
                ));
            }
            raw.push((line, record));
        }

        let columns: Vec<Column> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let kind = match self.schema.get(name) {
                    Some(spec) => spec.kind,
                    None => {
                        let fields: Vec<&str> = raw.iter().map(|(_, r)| &r[i]).collect();
                        ColumnType::infer(&fields)
                    }
                };
                Column::new(name.clone(), kind)
            })
            .collect();

        let mut rows = Vec::with_capacity(raw.len());
        for (line, record) in &raw {
            let mut values = Vec::with_capacity(columns.len());
            for (field, column) in record.iter().zip(&columns) {
                let value = column.kind.parse(field).ok_or_else(|| {
                    DataError::malformed_row(
                        *line,
                        format!(
                            "column '{}' expects {}, got '{}'",
                            column.name, column.kind, field
                        ),
                    )
                })?;
                values.push(value);
            }
            rows.push(Row::new(values));
        }

        Table::new(columns, rows)
    }

    fn check_header(&self, names: &[String]) -> DataResult<()> {
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(DataError::MalformedHeader(format!(
                    "column '{}' listed more than once",
                    name
                )));
            }
        }

        for required in self.schema.required() {
            if !names.iter().any(|n| n == required) {
                return Err(DataError::missing_column(required));
            }
        }

        Ok(())
    }
}
