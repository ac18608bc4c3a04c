// src/handlers/refresh.rs
use log::{debug, error};
use std::io::Write;

use crate::master::fetch::{MasterSource, SortKey};
use crate::master::{refresh, Stage};
use crate::render::{render_table, status_line};
use crate::storage::memory::ListingStore;
use crate::utils::BrowserError;

/// Runs a refresh and, only if it fully succeeds, shows it and stores it.
/// On failure the stored listing is left as it was.
pub async fn handle_refresh<S: MasterSource, W: Write>(
    source: &S,
    store: &ListingStore,
    game: &str,
    sort: SortKey,
    color: bool,
    out: &mut W,
) -> Result<(), BrowserError> {
    let mut progress = Ok(());
    let outcome = refresh(source, game, sort, |stage: Stage| {
        debug!("{}", stage.status_text());
        if progress.is_ok() {
            progress = writeln!(out, "{}", stage.status_text()).and_then(|_| out.flush());
        }
    })
    .await;
    progress?;

    let checked = outcome.and_then(|result| {
        let status = status_line(&result)?;
        Ok((result, status))
    });
    let (result, status) = match checked {
        Ok(done) => done,
        Err(e) => {
            error!("Refresh failed: {}", e);
            return Err(e);
        }
    };

    render_table(out, &result, color)?;
    writeln!(out, "{}", status)?;
    store.replace(result);
    Ok(())
}

/// One-shot listing as JSON, for scripting.
pub async fn handle_refresh_json<S: MasterSource, W: Write>(
    source: &S,
    game: &str,
    sort: SortKey,
    out: &mut W,
) -> Result<(), BrowserError> {
    let result = refresh(source, game, sort, |stage| debug!("{}", stage.status_text())).await?;
    let json = serde_json::to_string_pretty(&result).map_err(|e| BrowserError::Io(e.to_string()))?;
    writeln!(out, "{}", json)?;
    Ok(())
}
