//! Ordered categorical annotation of the rating column.

use tracing::debug;

use crate::data::table::{Column, ColumnData, Table};
use crate::domain::{COL_RATING, EnergyRating};
use crate::error::AppError;

/// Return a copy of `table` whose rating column is the ordered A..G categorical.
///
/// Values that are not exactly one of the seven category letters become
/// missing. Every other column is carried over unchanged.
pub fn with_rating_categories(table: &Table) -> Result<Table, AppError> {
    let source = table.require(COL_RATING)?;

    let ratings: Vec<Option<EnergyRating>> = source
        .iter_text()
        .map(|cell| cell.and_then(|code| EnergyRating::from_code(&code)))
        .collect();

    let dropped = source
        .iter_text()
        .zip(&ratings)
        .filter(|(raw, rating)| raw.is_some() && rating.is_none())
        .count();
    if dropped > 0 {
        debug!(dropped, "rating values outside A..G treated as missing");
    }

    table.with_column(Column::new(COL_RATING, ColumnData::Rating(ratings)))
}
