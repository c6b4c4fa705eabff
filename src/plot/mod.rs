//! Chart production.
//!
//! - chart data prepared from aggregates (`series`)
//! - PNG rasterisation through Plotters (`png`)
//! - shared viridis palette (`palette`) and font registration (`font`)

pub mod font;
pub mod palette;
pub mod png;
pub mod series;

pub use png::render_bar_chart;
pub use series::{Bar, BarChart, Orientation, property_type_chart, rating_chart};
