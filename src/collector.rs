//! Sequential collection of one dataset across a range of years.

use std::time::Duration;

use tokio::time::sleep;

use crate::config::CollectorConfig;
use crate::error::FetchError;
use crate::model::{Dataset, MonthlyTable};
use crate::ren;

/// Fetches, filters, and pivots one dataset over the configured inclusive
/// year range.
///
/// Months are visited strictly in sequence, year-major, January through
/// December. A month whose fetch was skipped contributes no records and the
/// walk keeps going; only a malformed payload aborts it.
pub async fn collect_dataset(
    client: &ren::Client,
    dataset: Dataset,
    config: &CollectorConfig,
) -> Result<MonthlyTable, FetchError> {
    let request_delay = Duration::from_millis(config.request_delay_ms);
    let mut records = Vec::new();

    for year in config.start_year..=config.end_year {
        for month in 1..=12 {
            let raw = client.fetch_month(dataset, year, month).await?;
            records.extend(ren::filter_records(raw, dataset, year, month));
            if !request_delay.is_zero() {
                sleep(request_delay).await;
            }
        }
    }

    let table = MonthlyTable::from_records(dataset, records);
    tracing::info!("{:?} data collected and pivoted successfully.", dataset);
    Ok(table)
}
