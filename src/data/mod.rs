//! Tabular data model.
//!
//! - typed, immutable in-memory table (`table`)
//! - the rating categorical transform (`categorical`)

pub mod categorical;
pub mod table;

pub use categorical::with_rating_categories;
pub use table::{Column, ColumnData, ColumnType, Table};
