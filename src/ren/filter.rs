use crate::model::{Dataset, MonthlyRecord, RawRecord};

/// Keeps the records whose category is on the dataset's allow-list and tags
/// them with the month they were fetched for. Input order is preserved;
/// off-list records are dropped silently.
pub fn filter_records(
    raw: Vec<RawRecord>,
    dataset: Dataset,
    year: i32,
    month: u32,
) -> Vec<MonthlyRecord> {
    raw.into_iter()
        .filter(|record| dataset.is_allowed(&record.category))
        .map(|record| MonthlyRecord {
            year,
            month,
            category: record.category,
            value: record.monthly_accumulation,
        })
        .collect()
}
