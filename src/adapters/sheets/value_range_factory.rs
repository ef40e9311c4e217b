use google_sheets4::api::ValueRange;
use serde_json::Value;

pub trait ValueRangeFactory {
    fn from_rows(rows: Vec<Vec<Value>>) -> Self;
}

impl ValueRangeFactory for ValueRange {
    fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(rows),
        }
    }
}
