//! JSON payloads shaped like the monthly endpoint responses.

use serde_json::json;

/// Builds a JSON array of (category, value) entries in the upstream shape.
pub fn monthly_payload(entries: &[(&str, f64)]) -> String {
    let items: Vec<serde_json::Value> = entries
        .iter()
        .map(|&(category, value)| {
            json!({
                "type": category,
                "monthly_Accumulation": value,
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

/// Same shape, plus the bookkeeping fields the real API sends along. The
/// exporter must ignore them.
pub fn monthly_payload_with_extras(entries: &[(&str, f64)]) -> String {
    let items: Vec<serde_json::Value> = entries
        .iter()
        .map(|&(category, value)| {
            json!({
                "type": category,
                "monthly_Accumulation": value,
                "year": 2022,
                "month": "11",
                "culture": "pt-PT",
                "daily_Value": value / 30.0,
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_payload_shape() {
        let payload = monthly_payload(&[("UAG", 20.0)]);
        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();

        assert_eq!(parsed[0]["type"], "UAG");
        assert_eq!(parsed[0]["monthly_Accumulation"], 20.0);
    }

    #[test]
    fn test_empty_payload_is_empty_array() {
        assert_eq!(monthly_payload(&[]), "[]");
    }
}
