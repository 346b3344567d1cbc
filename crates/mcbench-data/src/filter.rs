//! Category filtering.
//!
//! A [`Subset`] borrows its table and remembers which rows matched. It never copies
//! row data.

use crate::error::{DataError, DataResult};
use crate::table::{Row, Table};
use crate::value::Value;

/// An ordered, non-owning view of some rows of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Subset<'t> {
    table: &'t Table,
    indices: &'t [usize],
}

/// Owned index list backing a [`Subset`].
///
/// Kept separate so a subset can be `Copy` and cheap to pass around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    /// Row indices, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Views the selection over its table.
    pub fn view<'t>(&'t self, table: &'t Table) -> Subset<'t> {
        Subset {
            table,
            indices: &self.indices,
        }
    }
}

impl<'t> Subset<'t> {
    /// The table this subset reads from.
    pub fn table(&self) -> &'t Table {
        self.table
    }

    /// Indices of the selected rows in the source table, ascending.
    pub fn indices(&self) -> &'t [usize] {
        self.indices
    }

    /// Number of rows in the subset.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when no row matched.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected rows in source order.
    pub fn rows(&self) -> impl Iterator<Item = &'t Row> + 't {
        let table = self.table;
        let indices = self.indices;
        indices.iter().filter_map(move |&i| table.row(i))
    }

    /// Projects two numeric columns to `(x, y)` pairs, in subset order.
    ///
    /// Integer cells are widened to `f64`. A text cell in either column fails.
    pub fn points(&self, x_column: &str, y_column: &str) -> DataResult<Vec<(f64, f64)>> {
        let x_idx = self.table.require_column(x_column)?;
        let y_idx = self.table.require_column(y_column)?;

        self.indices
            .iter()
            .map(|&i| {
                let coord = |col: usize, name: &str| {
                    self.table
                        .row(i)
                        .and_then(|r| r.get(col))
                        .and_then(Value::as_f64)
                        .ok_or_else(|| DataError::NotNumeric {
                            column: name.to_string(),
                            row: i,
                        })
                };
                Ok((coord(x_idx, x_column)?, coord(y_idx, y_column)?))
            })
            .collect()
    }
}

fn is_category(row: &Row, col: usize, category: &str) -> bool {
    matches!(row.get(col), Some(Value::Text(s)) if s == category)
}

/// Selects the rows whose `column` equals `category` exactly.
///
/// The comparison is case-sensitive and untrimmed. Only text cells can match. No
/// match yields an empty selection.
pub fn select_category(table: &Table, column: &str, category: &str) -> DataResult<Selection> {
    let col = table.require_column(column)?;
    let indices = table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| is_category(row, col, category))
        .map(|(i, _)| i)
        .collect();
    Ok(Selection { indices })
}

/// Splits a table into the rows equal to `category` and all the others.
///
/// The two selections are disjoint, cover every row, and each keeps source order.
pub fn partition(
    table: &Table,
    column: &str,
    category: &str,
) -> DataResult<(Selection, Selection)> {
    let col = table.require_column(column)?;
    let (hits, misses): (Vec<usize>, Vec<usize>) = (0..table.len())
        .partition(|&i| table.row(i).is_some_and(|r| is_category(r, col, category)));
    Ok((Selection { indices: hits }, Selection { indices: misses }))
}

/// Distinct values of a text column, in order of first appearance.
pub fn categories(table: &Table, column: &str) -> DataResult<Vec<String>> {
    let col = table.require_column(column)?;
    let mut seen: Vec<String> = Vec::new();
    for row in table.rows() {
        if let Some(Value::Text(s)) = row.get(col) {
            if !seen.iter().any(|c| c == s) {
                seen.push(s.clone());
            }
        }
    }
    Ok(seen)
}
