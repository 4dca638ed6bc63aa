use serde_json::Value;

/// The Sheets API hands ranges back as rows of JSON cells. The donation
/// range is a single column, so each row carries at most one cell.
pub trait FlattenValues {
    fn flatten_values(self) -> Vec<String>;
}

impl FlattenValues for Vec<Vec<Value>> {
    fn flatten_values(self) -> Vec<String> {
        self.into_iter()
            .flatten()
            .map(|cell| match cell {
                Value::String(text) => text,
                other => other.to_string(),
            })
            .collect()
    }
}
