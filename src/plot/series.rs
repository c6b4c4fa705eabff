//! Chart descriptions computed from the aggregates.
//!
//! Everything here is plain data so the charts can be checked without
//! rasterising anything; `png` turns a `BarChart` into pixels.

use crate::report::RatingDistribution;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Bars grow to the right; categories run top to bottom.
    Horizontal,
    /// Bars grow upwards; categories run left to right.
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: u32,
}

/// A single-series bar chart, bars in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub title: String,
    pub category_desc: String,
    pub value_desc: String,
    pub orientation: Orientation,
    pub bars: Vec<Bar>,
    pub rotate_category_labels: bool,
    /// Pixel size `(width, height)`.
    pub size: (u32, u32),
}

impl BarChart {
    /// Upper bound of the value axis: 10% headroom over the tallest bar.
    pub fn value_axis_max(&self) -> u32 {
        let max = self.bars.iter().map(|b| b.value).max().unwrap_or(0);
        let headroom = (max / 10).max(1);
        max.saturating_add(headroom)
    }
}

/// Horizontal bars of certificates per rating, A on top.
pub fn rating_chart(distribution: &RatingDistribution) -> BarChart {
    BarChart {
        title: "Distribution of Energy Ratings".to_string(),
        category_desc: "Current Energy Rating".to_string(),
        value_desc: "Number of Records".to_string(),
        orientation: Orientation::Horizontal,
        bars: distribution
            .iter()
            .map(|(rating, count)| Bar {
                label: rating.code().to_string(),
                value: to_bar_value(count),
            })
            .collect(),
        rotate_category_labels: false,
        size: (1000, 600),
    }
}

/// Vertical bars of certificates per property type, in the given order.
pub fn property_type_chart(counts: &[(String, usize)]) -> BarChart {
    BarChart {
        title: "Count of Properties by Property Type".to_string(),
        category_desc: "Property Type".to_string(),
        value_desc: "Count".to_string(),
        orientation: Orientation::Vertical,
        bars: counts
            .iter()
            .map(|(label, count)| Bar {
                label: label.clone(),
                value: to_bar_value(*count),
            })
            .collect(),
        rotate_category_labels: true,
        size: (1200, 600),
    }
}

fn to_bar_value(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
