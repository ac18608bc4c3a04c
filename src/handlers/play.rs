// src/handlers/play.rs
use log::{debug, error};
use std::io::Write;

use crate::launcher::Launcher;
use crate::storage::memory::ListingStore;
use crate::utils::BrowserError;

/// Connects to the server shown at `row` of the stored listing.
pub fn handle_play<L: Launcher, W: Write>(
    store: &ListingStore,
    launcher: &L,
    row: usize,
    out: &mut W,
) -> Result<(), BrowserError> {
    let address = match store.address_of(row) {
        Ok(address) => address,
        Err(e) => {
            error!("Cannot play row {}: {}", row, e);
            return Err(e);
        }
    };
    handle_connect(launcher, &address, out)
}

pub fn handle_connect<L: Launcher, W: Write>(
    launcher: &L,
    address: &str,
    out: &mut W,
) -> Result<(), BrowserError> {
    debug!("Connecting to {}", address);
    launcher.launch_connect(address)?;
    writeln!(out, "Connecting to {}", address)?;
    Ok(())
}

pub fn handle_offline<L: Launcher, W: Write>(launcher: &L, out: &mut W) -> Result<(), BrowserError> {
    launcher.launch_offline()?;
    writeln!(out, "Starting the game offline")?;
    Ok(())
}
