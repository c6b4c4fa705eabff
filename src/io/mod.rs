//! Input/output helpers.
//!
//! - locating a location's certificates file (`locate`)
//! - CSV ingest into a `Table` (`ingest`)
//! - facts file and directory writes (`output`)
//! - report JSON export (`export`)

pub mod export;
pub mod ingest;
pub mod locate;
pub mod output;

pub use export::*;
pub use ingest::*;
pub use locate::*;
pub use output::*;
