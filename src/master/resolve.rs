// src/master/resolve.rs
use crate::models::server::{FieldValue, ServerRecord};
use crate::utils::{join_path, BrowserError};

/// Walks a slash-delimited key path (`rules/g_humanplayers`) down from the record root.
pub fn resolve<'a>(record: &'a ServerRecord, path: &str) -> Result<&'a FieldValue, BrowserError> {
    let segments: Vec<&str> = path.split('/').collect();
    let missing = |depth: usize| BrowserError::KeyNotFound(join_path(&segments[..=depth]));

    let mut current = record.get(segments[0]).ok_or_else(|| missing(0))?;
    for (depth, segment) in segments.iter().enumerate().skip(1) {
        current = current
            .as_map()
            .and_then(|map| map.get(*segment))
            .ok_or_else(|| missing(depth))?;
    }
    Ok(current)
}
