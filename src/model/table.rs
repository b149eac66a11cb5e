//! Pivoted monthly statistics, one row per (year, month).

use std::collections::{BTreeMap, HashMap};

use super::dataset::Dataset;
use super::record::MonthlyRecord;

/// Wide-format table built from filtered records.
///
/// Row keys are unique and iterate in ascending (year, month) order. Cells
/// hold only the categories actually observed for a month; the fixed column
/// set is applied at export time.
#[derive(Debug)]
pub struct MonthlyTable {
    dataset: Dataset,
    rows: BTreeMap<(i32, u32), HashMap<String, f64>>,
}

impl MonthlyTable {
    /// Pivots a flat record sequence. When two records share the same
    /// (year, month, category), the later one wins.
    pub fn from_records(dataset: Dataset, records: Vec<MonthlyRecord>) -> Self {
        let mut rows: BTreeMap<(i32, u32), HashMap<String, f64>> = BTreeMap::new();
        for record in records {
            rows.entry((record.year, record.month))
                .or_default()
                .insert(record.category, record.value);
        }
        Self { dataset, rows }
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    /// Number of (year, month) rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in ascending (year, month) order.
    pub fn rows(&self) -> impl Iterator<Item = (&(i32, u32), &HashMap<String, f64>)> + '_ {
        self.rows.iter()
    }
}
