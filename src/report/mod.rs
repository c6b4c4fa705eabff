//! Aggregation over a loaded certificates table.
//!
//! - rating distribution in fixed A..G order
//! - value counts per local authority code / label
//! - property type counts for charting
//!
//! Formatting for the terminal and the fact sentence live in `format`.

use std::collections::HashMap;

use serde::Serialize;

use crate::data::{Column, ColumnData, Table};
use crate::domain::{COL_AUTHORITY, COL_AUTHORITY_LABEL, COL_PROPERTY_TYPE, COL_RATING, EnergyRating};
use crate::error::{AppError, ErrorKind};

pub mod format;

pub use format::{fact_sentence, format_run_summary};

/// Number of certificates per rating, always all seven categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingDistribution {
    counts: [usize; 7],
    /// Rows whose rating is missing or outside A..G.
    pub unrated: usize,
    pub total_rows: usize,
}

impl RatingDistribution {
    pub fn count(&self, rating: EnergyRating) -> usize {
        self.counts[rating.index()]
    }

    /// `(rating, count)` pairs in A..G order.
    pub fn iter(&self) -> impl Iterator<Item = (EnergyRating, usize)> + '_ {
        EnergyRating::ALL.iter().map(|&r| (r, self.counts[r.index()]))
    }

    pub fn rated(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// One distinct value and how often it occurs. `None` is the missing bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: Option<String>,
    pub count: usize,
}

/// Local authority counts and the headline figures drawn from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoritySummary {
    /// Counts per authority code, missing codes included.
    pub by_code: Vec<ValueCount>,
    /// Counts per authority label, missing labels included.
    pub by_label: Vec<ValueCount>,
    /// Sum of the per-code counts.
    pub total: usize,
    pub top_label: String,
}

/// Count ratings of a table that went through `with_rating_categories`.
pub fn rating_distribution(table: &Table) -> Result<RatingDistribution, AppError> {
    let column = table.require(COL_RATING)?;
    let ColumnData::Rating(ratings) = column.data() else {
        return Err(AppError::read(format!(
            "Column `{COL_RATING}` has not been converted to rating categories."
        )));
    };

    let mut counts = [0usize; 7];
    for rating in ratings.iter().flatten() {
        counts[rating.index()] += 1;
    }
    let rated: usize = counts.iter().sum();

    Ok(RatingDistribution {
        counts,
        unrated: table.n_rows() - rated,
        total_rows: table.n_rows(),
    })
}

/// Count certificates per local authority and pick the busiest label.
///
/// Ties on the top label go to the lexicographically smallest label.
pub fn authority_summary(table: &Table) -> Result<AuthoritySummary, AppError> {
    let by_code = value_counts(table.require(COL_AUTHORITY)?);
    let by_label = value_counts(table.require(COL_AUTHORITY_LABEL)?);

    let total = by_code.iter().map(|vc| vc.count).sum();

    // `value_counts` already orders by count desc, then value asc.
    let top_label = by_label
        .iter()
        .find_map(|vc| vc.value.clone())
        .ok_or_else(|| {
            AppError::new(
                ErrorKind::EmptyData,
                format!("No `{COL_AUTHORITY_LABEL}` values to summarise."),
            )
        })?;

    Ok(AuthoritySummary {
        by_code,
        by_label,
        total,
        top_label,
    })
}

/// Property type counts in order of first appearance, missing values skipped.
pub fn property_type_counts(table: &Table) -> Result<Vec<(String, usize)>, AppError> {
    let column = table.require(COL_PROPERTY_TYPE)?;

    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for cell in column.iter_text().flatten() {
        match index.get(&*cell) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(cell.to_string(), order.len());
                order.push((cell.into_owned(), 1));
            }
        }
    }

    Ok(order)
}

/// Occurrences of every distinct value, sorted by count descending, then by
/// value ascending with the missing bucket last.
pub fn value_counts(column: &Column) -> Vec<ValueCount> {
    let mut counts: HashMap<Option<String>, usize> = HashMap::new();
    for cell in column.iter_text() {
        *counts.entry(cell.map(|c| c.into_owned())).or_insert(0) += 1;
    }

    let mut out: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();

    out.sort_by(|a, b| {
        b.count.cmp(&a.count).then_with(|| match (&a.value, &b.value) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        })
    });
    out
}
