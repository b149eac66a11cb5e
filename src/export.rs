//! CSV export of pivoted monthly tables.

use std::path::Path;

use crate::error::ExportError;
use crate::model::MonthlyTable;

/// Writes a pivoted table as CSV: `ano` and `mes` first, then the dataset's
/// fixed category columns. Categories never observed for a month are written
/// as empty fields, not zeroes. An empty table still gets its header row.
pub fn write_csv(table: &MonthlyTable, path: &Path) -> Result<(), ExportError> {
    let dataset = table.dataset();
    let mut writer = csv::Writer::from_path(path)?;

    let mut header: Vec<&str> = vec!["ano", "mes"];
    header.extend_from_slice(dataset.column_order());
    writer.write_record(&header)?;

    for (&(year, month), cells) in table.rows() {
        let mut record = Vec::with_capacity(header.len());
        record.push(year.to_string());
        record.push(month.to_string());
        for category in dataset.column_order() {
            record.push(
                cells
                    .get(*category)
                    .map_or(String::new(), |value| value.to_string()),
            );
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    tracing::info!("Wrote {} rows to {}", table.row_count(), path.display());
    Ok(())
}
