// src/utils.rs
use std::fmt;

#[derive(Debug)]
pub enum BrowserError {
    Transport(String),
    Decode(String),
    KeyNotFound(String),
    InvalidSortKey(String),
    Launch(String),
    NoSelection(String),
    Io(String),
    Usage(String),
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Failed to query master server: {}", msg),
            Self::Decode(msg) => write!(f, "Invalid master server response: {}", msg),
            Self::KeyNotFound(path) => write!(f, "Server record is missing key: {}", path),
            Self::InvalidSortKey(token) => write!(f, "Invalid sort key: {}", token),
            Self::Launch(msg) => write!(f, "Failed to launch game: {}", msg),
            Self::NoSelection(msg) => write!(f, "No server selected: {}", msg),
            Self::Io(msg) => write!(f, "Output error: {}", msg),
            Self::Usage(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BrowserError {}

impl From<reqwest::Error> for BrowserError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<std::io::Error> for BrowserError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for BrowserError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Joins a key path back together for error messages, `rules/g_humanplayers` style.
pub fn join_path(segments: &[&str]) -> String {
    segments.join("/")
}
