// src/master/fetch.rs
use log::{debug, warn};
use std::str::FromStr;

use crate::utils::BrowserError;

/// Sort tokens the master listing understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    No,
    Ping,
    Address,
    Players,
    Pass,
    Map,
    GameType,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        Self::No,
        Self::Ping,
        Self::Address,
        Self::Players,
        Self::Pass,
        Self::Map,
        Self::GameType,
        Self::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::No => "no",
            Self::Ping => "ping",
            Self::Address => "address",
            Self::Players => "players",
            Self::Pass => "pass",
            Self::Map => "map",
            Self::GameType => "gametype",
            Self::Name => "name",
        }
    }
}

impl FromStr for SortKey {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| BrowserError::InvalidSortKey(s.to_string()))
    }
}

/// Anything that can answer a listing query with the raw response text.
pub trait MasterSource {
    async fn fetch(&self, game: &str, sort: SortKey) -> Result<String, BrowserError>;
}

pub struct HttpMaster {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMaster {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn query(game: &str, sort: SortKey) -> [(&'static str, String); 5] {
        [
            ("game", game.to_string()),
            ("json", "1".to_string()),
            ("nocolors", "1".to_string()),
            ("showping", "1".to_string()),
            ("sort", sort.as_str().to_string()),
        ]
    }
}

impl MasterSource for HttpMaster {
    async fn fetch(&self, game: &str, sort: SortKey) -> Result<String, BrowserError> {
        let request = self
            .client
            .get(&self.base_url)
            .query(&Self::query(game, sort))
            .build()?;
        debug!("Querying master server: {}", request.url());

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            // The body is handed on as-is; the decoder decides whether it is usable
            warn!("Master server answered with HTTP {}", status);
        }

        let text = response.text().await?;
        debug!("Received {} bytes from master server", text.len());
        Ok(text.trim().to_string())
    }
}
