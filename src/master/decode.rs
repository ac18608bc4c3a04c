// src/master/decode.rs
use log::debug;
use serde_json::Value;

use crate::models::server::{FieldValue, MasterSummary, ServerRecord};
use crate::utils::BrowserError;

/// Splits the master response into its summary and the server records,
/// trimming each record's `name`.
pub fn decode(raw: &str) -> Result<(MasterSummary, Vec<ServerRecord>), BrowserError> {
    if raw.trim().is_empty() {
        return Err(BrowserError::Decode("empty response".to_string()));
    }

    let entries = match serde_json::from_str::<Value>(raw)? {
        Value::Array(entries) => entries,
        other => {
            return Err(BrowserError::Decode(format!(
                "expected a JSON array, found {}",
                json_kind(&other)
            )))
        }
    };

    let mut entries = entries.into_iter();
    let summary = match entries.next() {
        Some(first) => MasterSummary(ServerRecord::try_from(first)?),
        None => return Err(BrowserError::Decode("response array is empty".to_string())),
    };

    let records = entries
        .map(|entry| -> Result<ServerRecord, BrowserError> {
            let mut record = ServerRecord::try_from(entry)?;
            let trimmed = record.name()?.trim().to_string();
            record.insert("name", FieldValue::Text(trimmed));
            Ok(record)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Decoded {} server records", records.len());
    Ok((summary, records))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
