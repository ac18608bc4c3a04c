// src/models/server.rs
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::utils::BrowserError;

/// A loosely-typed value as it appears in a master server record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    pub fn as_map(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Text(s) => write!(f, "{}", s),
            // Nested values are never display columns, print them compactly
            other => match serde_json::to_string(other) {
                Ok(json) => write!(f, "{}", json),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

/// One server entry from the master listing: field name to value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ServerRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl ServerRecord {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    /// The trimmed server name. Records leave the decoder with `name` already normalised.
    pub fn name(&self) -> Result<&str, BrowserError> {
        self.get("name")
            .and_then(FieldValue::as_text)
            .ok_or_else(|| BrowserError::KeyNotFound("name".to_string()))
    }
}

impl TryFrom<Value> for ServerRecord {
    type Error = BrowserError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match FieldValue::from(value) {
            FieldValue::Map(fields) => Ok(Self { fields }),
            other => Err(BrowserError::Decode(format!(
                "expected a JSON object, found {}",
                other
            ))),
        }
    }
}

/// First element of the master response: totals known to the master.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MasterSummary(pub ServerRecord);

impl MasterSummary {
    /// Total server count the master knows of, responsive or not.
    pub fn total_servers(&self) -> Result<&FieldValue, BrowserError> {
        self.0
            .get("servers")
            .ok_or_else(|| BrowserError::KeyNotFound("servers".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Even,
    Odd,
    Full,
    Empty,
    NotEmpty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedServer {
    pub position: usize,
    pub name: String,
    /// Values for `DISPLAY_FIELDS`, same order.
    pub display: Vec<FieldValue>,
    pub tags: Vec<Tag>,
    pub record: ServerRecord,
}

impl RankedServer {
    /// The display value for one of the `DISPLAY_FIELDS` paths.
    pub fn display_value(&self, path: &str) -> Option<&FieldValue> {
        DISPLAY_FIELDS
            .iter()
            .position(|field| field.path == path)
            .and_then(|index| self.display.get(index))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerListResult {
    pub summary: MasterSummary,
    pub servers: Vec<RankedServer>,
}

impl ServerListResult {
    pub fn responsive(&self) -> usize {
        self.servers.len()
    }
}

pub struct DisplayField {
    pub heading: &'static str,
    pub path: &'static str,
}

pub const HUMAN_PLAYERS_PATH: &str = "rules/g_humanplayers";

/// Table columns after the server name.
pub static DISPLAY_FIELDS: [DisplayField; 7] = [
    DisplayField { heading: "Ping", path: "ping" },
    DisplayField { heading: "Game Type", path: "gametype" },
    DisplayField { heading: "Map", path: "map" },
    DisplayField { heading: "Human Players", path: HUMAN_PLAYERS_PATH },
    DisplayField { heading: "All Players", path: "numplayers" },
    DisplayField { heading: "Player Limit", path: "maxplayers" },
    DisplayField { heading: "Address", path: "address" },
];
