// src/storage/memory.rs
use parking_lot::RwLock;

use crate::models::server::{FieldValue, ServerListResult};
use crate::utils::BrowserError;

/// Holds the listing currently on screen. Only a finished refresh replaces it.
pub struct ListingStore {
    current: RwLock<Option<ServerListResult>>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    pub fn replace(&self, result: ServerListResult) {
        *self.current.write() = Some(result);
    }

    /// Address column of the given row, as the play action needs it.
    pub fn address_of(&self, row: usize) -> Result<String, BrowserError> {
        let guard = self.current.read();
        let listing = guard
            .as_ref()
            .ok_or_else(|| BrowserError::NoSelection("server list has not been loaded".to_string()))?;

        let server = listing
            .servers
            .get(row)
            .ok_or_else(|| BrowserError::NoSelection(format!("no server at row {}", row)))?;

        match server.display_value("address") {
            Some(FieldValue::Null) | None => Err(BrowserError::NoSelection(format!(
                "server at row {} has no address",
                row
            ))),
            Some(address) => Ok(address.to_string()),
        }
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new()
    }
}
