// src/master/rank.rs
use log::debug;
use std::cmp::Ordering;

use crate::master::resolve::resolve;
use crate::models::server::{FieldValue, ServerRecord, HUMAN_PLAYERS_PATH};
use crate::utils::BrowserError;

/// Orders records by human player count, most first. Equal counts keep master order.
pub fn rank(records: Vec<ServerRecord>) -> Result<Vec<ServerRecord>, BrowserError> {
    let mut keyed = records
        .into_iter()
        .map(|record| -> Result<(FieldValue, ServerRecord), BrowserError> {
            let key = resolve(&record, HUMAN_PLAYERS_PATH)?.clone();
            Ok((key, record))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // sort_by is stable, so comparing b to a keeps ties in input order
    keyed.sort_by(|(a, _), (b, _)| compare_counts(b, a));

    debug!("Ranked {} servers by human players", keyed.len());
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// Total order over count values: anything that reads as a whole number compares
/// numerically and sorts above values that don't. The rest order by kind, then value.
pub fn compare_counts(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (as_count(a), as_count(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => kind_rank(a)
            .cmp(&kind_rank(b))
            .then_with(|| compare_same_kind(a, b)),
    }
}

fn as_count(value: &FieldValue) -> Option<i64> {
    match value {
        FieldValue::Integer(n) => Some(*n),
        FieldValue::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn kind_rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Null => 0,
        FieldValue::Bool(_) => 1,
        FieldValue::List(_) => 2,
        FieldValue::Map(_) => 3,
        FieldValue::Float(_) => 4,
        FieldValue::Text(_) => 5,
        FieldValue::Integer(_) => 6,
    }
}

fn compare_same_kind(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        (FieldValue::Float(x), FieldValue::Float(y)) => x.total_cmp(y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn server(name: &str, humans: serde_json::Value) -> ServerRecord {
        ServerRecord::try_from(json!({"name": name, "rules": {"g_humanplayers": humans}}))
            .unwrap()
    }

    fn names(records: &[ServerRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name().unwrap()).collect()
    }

    #[test]
    fn most_humans_first() {
        let ranked = rank(vec![
            server("a", json!("0")),
            server("b", json!("3")),
            server("c", json!("1")),
        ])
        .unwrap();
        assert_eq!(names(&ranked), ["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_master_order() {
        let ranked = rank(vec![
            server("a", json!("1")),
            server("b", json!("2")),
            server("c", json!("1")),
            server("d", json!("2")),
            server("e", json!("1")),
        ])
        .unwrap();
        assert_eq!(names(&ranked), ["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn multi_digit_counts_compare_numerically() {
        let ranked = rank(vec![
            server("nine", json!("9")),
            server("twelve", json!("12")),
            server("int", json!(10)),
        ])
        .unwrap();
        assert_eq!(names(&ranked), ["twelve", "int", "nine"]);
    }

    #[test]
    fn non_numeric_counts_sink_below_numbers() {
        let ranked = rank(vec![
            server("unknown", json!("?")),
            server("zero", json!("0")),
        ])
        .unwrap();
        assert_eq!(names(&ranked), ["zero", "unknown"]);
    }

    #[test]
    fn missing_count_fails_the_ranking() {
        let bare = ServerRecord::try_from(json!({"name": "bare", "rules": {}})).unwrap();
        let result = rank(vec![server("a", json!("1")), bare]);
        assert!(matches!(
            result,
            Err(BrowserError::KeyNotFound(path)) if path == "rules/g_humanplayers"
        ));
    }

    #[test]
    fn empty_input_ranks_to_empty() {
        assert!(rank(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn comparison_is_antisymmetric_across_kinds() {
        let values = [
            FieldValue::Null,
            FieldValue::Bool(true),
            FieldValue::Float(0.5),
            FieldValue::Text("x".to_string()),
            FieldValue::Text("4".to_string()),
            FieldValue::Integer(4),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(compare_counts(a, b), compare_counts(b, a).reverse());
            }
        }
    }
}
