// src/master/classify.rs
use crate::master::resolve::resolve;
use crate::models::server::{FieldValue, ServerRecord, Tag, HUMAN_PLAYERS_PATH};
use crate::utils::BrowserError;

/// Row styling tags in parity, fullness, occupancy order.
pub fn classify(index: usize, record: &ServerRecord) -> Result<Vec<Tag>, BrowserError> {
    let mut tags = Vec::with_capacity(3);

    tags.push(if index % 2 == 0 { Tag::Even } else { Tag::Odd });

    // Raw equality: "8" and 8 are different values here
    if resolve(record, "numplayers")? == resolve(record, "maxplayers")? {
        tags.push(Tag::Full);
    }

    tags.push(if is_zero(resolve(record, HUMAN_PLAYERS_PATH)?) {
        Tag::Empty
    } else {
        Tag::NotEmpty
    });

    Ok(tags)
}

fn is_zero(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(s) => s == "0",
        FieldValue::Integer(n) => *n == 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ServerRecord {
        ServerRecord::try_from(value).unwrap()
    }

    #[test]
    fn full_empty_server_on_even_row() {
        let rec = record(json!({"numplayers": 3, "maxplayers": 3, "rules": {"g_humanplayers": "0"}}));
        assert_eq!(classify(0, &rec).unwrap(), [Tag::Even, Tag::Full, Tag::Empty]);
    }

    #[test]
    fn open_populated_server_on_odd_row() {
        let rec = record(json!({"numplayers": 2, "maxplayers": 4, "rules": {"g_humanplayers": "1"}}));
        assert_eq!(classify(1, &rec).unwrap(), [Tag::Odd, Tag::NotEmpty]);
    }

    #[test]
    fn integer_zero_counts_as_empty() {
        let rec = record(json!({"numplayers": 0, "maxplayers": 8, "rules": {"g_humanplayers": 0}}));
        assert!(classify(4, &rec).unwrap().contains(&Tag::Empty));
    }

    #[test]
    fn padded_zero_is_not_the_zero_literal() {
        let rec = record(json!({"numplayers": 1, "maxplayers": 8, "rules": {"g_humanplayers": "00"}}));
        assert!(classify(0, &rec).unwrap().contains(&Tag::NotEmpty));
    }

    #[test]
    fn mixed_representations_are_not_full() {
        let rec = record(json!({"numplayers": "8", "maxplayers": 8, "rules": {"g_humanplayers": "2"}}));
        assert!(!classify(0, &rec).unwrap().contains(&Tag::Full));
    }

    #[test]
    fn missing_player_limit_fails() {
        let rec = record(json!({"numplayers": 2, "rules": {"g_humanplayers": "1"}}));
        assert!(matches!(
            classify(0, &rec),
            Err(BrowserError::KeyNotFound(path)) if path == "maxplayers"
        ));
    }
}
