//! Model definitions for Data Hub datasets and pivoted monthly tables.
//!
//! This module provides the data structures flowing through the pipeline:
//! dataset kinds with their category vocabularies, raw and filtered record
//! shapes, and the wide-format table handed to the CSV exporter.

pub mod dataset;
pub mod record;
pub mod table;

// Re-export commonly used items at the module level
pub use dataset::Dataset;
pub use record::{MonthlyRecord, RawRecord};
pub use table::MonthlyTable;
