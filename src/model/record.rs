//! Record shapes on both sides of the category filter.

use serde_derive::Deserialize;

/// One element of the JSON array a monthly endpoint returns.
///
/// The API sends more fields than these; unknown keys are ignored. A record
/// missing either key, or carrying a non-numeric accumulation, fails
/// deserialization of the whole payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "type")]
    pub category: String,
    #[serde(rename = "monthly_Accumulation")]
    pub monthly_accumulation: f64,
}

/// A record that passed the allow-list, tagged with the month it was
/// requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRecord {
    pub year: i32,
    pub month: u32,
    pub category: String,
    pub value: f64,
}
