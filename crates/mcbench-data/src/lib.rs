//! # mcbench Data
//!
//! Tables of benchmark results for the constant / non-constant Black-Scholes process
//! comparison.
//!
//! - **Loading**: [`TableLoader`] reads delimited text (`;` by default) into a typed
//!   [`Table`], typing columns from a [`Schema`] or from their data
//! - **Filtering**: [`select_category`] and [`partition`] give ordered, borrowed
//!   [`Subset`]s of rows for one `Option Type`
//! - **Writing**: [`Table::write_delimited`] writes a table back out
//!
//! ## Example
//!
//! ```rust
//! use mcbench_data::prelude::*;
//!
//! let src = "Option Type;Time Steps;Time(non constant) - Time(Constant) in (s)\n\
//!            European Option;10;0.5\n\
//!            Barrier Option;10;0.8\n";
//!
//! let table = TableLoader::default()
//!     .with_schema(Schema::time_steps())
//!     .read(src.as_bytes())
//!     .unwrap();
//!
//! let european = select_category(&table, OPTION_TYPE, "European Option").unwrap();
//! let points = european.view(&table).points(TIME_STEPS, TIME_DIFF).unwrap();
//! assert_eq!(points, vec![(10.0, 0.5)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod filter;
mod loader;
mod schema;
mod table;
mod value;

pub use error::{DataError, DataResult};
pub use filter::{categories, partition, select_category, Selection, Subset};
pub use loader::{TableLoader, DEFAULT_DELIMITER};
pub use schema::{ColumnSpec, Schema, ERROR, OPTION_TYPE, SAMPLES, TIME_DIFF, TIME_STEPS};
pub use table::{Column, Row, Table};
pub use value::{ColumnType, Value};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{DataError, DataResult};
    pub use crate::filter::{partition, select_category, Selection, Subset};
    pub use crate::loader::TableLoader;
    pub use crate::schema::{Schema, OPTION_TYPE, SAMPLES, TIME_DIFF, TIME_STEPS};
    pub use crate::table::Table;
    pub use crate::value::{ColumnType, Value};
}
