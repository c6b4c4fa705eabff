//! In-memory columnar table.
//!
//! A `Table` is a list of equally long named columns. Each column carries one
//! inferred type; missing cells are `None` in every representation.

use std::borrow::Cow;

use crate::domain::EnergyRating;
use crate::error::AppError;

/// Storage for a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
    /// Ordered A..G categorical; out-of-domain values are stored as `None`.
    Rating(Vec<Option<EnergyRating>>),
}

/// Lightweight type tag for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int,
    Float,
    Text,
    Rating,
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Rating(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Int(_) => ColumnType::Int,
            ColumnData::Float(_) => ColumnType::Float,
            ColumnData::Text(_) => ColumnType::Text,
            ColumnData::Rating(_) => ColumnType::Rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Build a column from raw cells, inferring the narrowest type that fits
    /// every non-missing cell: integer, then float, then text.
    ///
    /// A number only counts when it renders back to the exact source text, so
    /// codes like `007` or `1.50` stay text and `text_at` never rewrites a cell.
    pub fn infer(name: impl Into<String>, cells: Vec<Option<String>>) -> Self {
        let present = || cells.iter().flatten();

        let data = if present().all(|s| lossless::<i64>(s).is_some()) {
            ColumnData::Int(cells.iter().map(|c| c.as_deref().and_then(lossless)).collect())
        } else if present().all(|s| lossless::<f64>(s).is_some()) {
            ColumnData::Float(cells.iter().map(|c| c.as_deref().and_then(lossless)).collect())
        } else {
            ColumnData::Text(cells)
        };

        Self::new(name, data)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    /// Cell rendered as text, whatever the column type.
    pub fn text_at(&self, row: usize) -> Option<Cow<'_, str>> {
        match &self.data {
            ColumnData::Int(v) => v.get(row).copied().flatten().map(|x| Cow::Owned(x.to_string())),
            ColumnData::Float(v) => v.get(row).copied().flatten().map(|x| Cow::Owned(x.to_string())),
            ColumnData::Text(v) => v.get(row).and_then(|c| c.as_deref()).map(Cow::Borrowed),
            ColumnData::Rating(v) => v.get(row).copied().flatten().map(|r| Cow::Borrowed(r.code())),
        }
    }

    /// Iterate every cell as optional text.
    pub fn iter_text(&self) -> impl Iterator<Item = Option<Cow<'_, str>>> + '_ {
        (0..self.len()).map(move |row| self.text_at(row))
    }
}

fn lossless<T: std::str::FromStr + ToString>(s: &str) -> Option<T> {
    s.parse::<T>().ok().filter(|v| v.to_string() == s)
}

/// Immutable table of equally long columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, AppError> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(AppError::read(format!(
                "Column `{}` has {} rows, expected {n_rows}.",
                bad.name(),
                bad.len()
            )));
        }
        Ok(Self { columns, n_rows })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Look up a column the pipeline cannot run without.
    pub fn require(&self, name: &str) -> Result<&Column, AppError> {
        self.column(name)
            .ok_or_else(|| AppError::read(format!("Missing required column: `{name}`")))
    }

    /// A copy of this table with `column` replacing the column of the same name.
    pub fn with_column(&self, column: Column) -> Result<Table, AppError> {
        if column.len() != self.n_rows {
            return Err(AppError::read(format!(
                "Column `{}` has {} rows, expected {}.",
                column.name(),
                column.len(),
                self.n_rows
            )));
        }
        let mut columns = self.columns.clone();
        match columns.iter_mut().find(|c| c.name() == column.name()) {
            Some(slot) => *slot = column,
            None => columns.push(column),
        }
        Ok(Table {
            columns,
            n_rows: self.n_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn infers_int_float_text() {
        let ints = Column::infer("n", cells(&[Some("1"), None, Some("-3")]));
        assert_eq!(ints.data(), &ColumnData::Int(vec![Some(1), None, Some(-3)]));

        let floats = Column::infer("x", cells(&[Some("1"), Some("2.5")]));
        assert_eq!(floats.data(), &ColumnData::Float(vec![Some(1.0), Some(2.5)]));

        let mixed = Column::infer("m", cells(&[Some("12"), Some("flat")]));
        assert_eq!(mixed.column_type(), ColumnType::Text);
    }

    #[test]
    fn non_canonical_numbers_stay_text() {
        let padded = Column::infer("LOCAL_AUTHORITY", cells(&[Some("007"), Some("7")]));
        assert_eq!(padded.column_type(), ColumnType::Text);
        assert_eq!(padded.text_at(0).as_deref(), Some("007"));

        let trailing = Column::infer("x", cells(&[Some("1.50"), Some("1.5")]));
        assert_eq!(trailing.column_type(), ColumnType::Text);

        let exponent = Column::infer("x", cells(&[Some("1e3")]));
        assert_eq!(exponent.column_type(), ColumnType::Text);
    }

    #[test]
    fn numeric_cells_render_as_written() {
        let col = Column::infer("TOTAL_FLOOR_AREA", cells(&[Some("72.5"), Some("101"), None]));
        assert_eq!(col.column_type(), ColumnType::Float);
        let rendered: Vec<Option<String>> = col.iter_text().map(|c| c.map(|s| s.into_owned())).collect();
        assert_eq!(rendered, cells(&[Some("72.5"), Some("101"), None]));
    }

    #[test]
    fn all_missing_column_is_int_of_nones() {
        let col = Column::infer("empty", cells(&[None, None]));
        assert_eq!(col.len(), 2);
        assert!(col.iter_text().all(|c| c.is_none()));
    }

    #[test]
    fn from_columns_rejects_ragged() {
        let a = Column::infer("a", cells(&[Some("1"), Some("2")]));
        let b = Column::infer("b", cells(&[Some("1")]));
        assert!(Table::from_columns(vec![a, b]).is_err());
    }

    #[test]
    fn with_column_replaces_by_name_only() {
        let a = Column::infer("a", cells(&[Some("x"), Some("y")]));
        let b = Column::infer("b", cells(&[Some("1"), Some("2")]));
        let table = Table::from_columns(vec![a, b]).unwrap();

        let replaced = table
            .with_column(Column::new("a", ColumnData::Rating(vec![Some(EnergyRating::A), None])))
            .unwrap();

        assert_eq!(replaced.n_cols(), 2);
        assert_eq!(replaced.column("a").unwrap().column_type(), ColumnType::Rating);
        assert_eq!(replaced.column("b"), table.column("b"));
        // Source table untouched.
        assert_eq!(table.column("a").unwrap().column_type(), ColumnType::Text);
    }

    #[test]
    fn text_at_renders_every_type() {
        let col = Column::new("r", ColumnData::Rating(vec![Some(EnergyRating::D), None]));
        assert_eq!(col.text_at(0).as_deref(), Some("D"));
        assert_eq!(col.text_at(1), None);
        assert_eq!(col.text_at(7), None);

        let col = Column::new("n", ColumnData::Int(vec![Some(42)]));
        assert_eq!(col.text_at(0).as_deref(), Some("42"));
    }
}
