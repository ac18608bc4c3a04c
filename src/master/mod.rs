// src/master/mod.rs
pub mod classify;
pub mod decode;
pub mod fetch;
pub mod rank;
pub mod resolve;

use log::info;

use crate::models::server::{RankedServer, ServerListResult, DISPLAY_FIELDS};
use crate::utils::BrowserError;
use classify::classify;
use decode::decode;
use fetch::{MasterSource, SortKey};
use rank::rank;
use resolve::resolve;

/// Progress steps reported while a refresh runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Querying,
    Parsing,
    Displaying,
}

impl Stage {
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Querying => "Querying...",
            Self::Parsing => "Parsing response...",
            Self::Displaying => "Displaying...",
        }
    }
}

/// Fetch, decode, rank and classify one listing. Any failure aborts the whole
/// refresh; nothing partial is returned.
pub async fn refresh<S: MasterSource>(
    source: &S,
    game: &str,
    sort: SortKey,
    mut on_stage: impl FnMut(Stage),
) -> Result<ServerListResult, BrowserError> {
    on_stage(Stage::Querying);
    let raw = source.fetch(game, sort).await?;

    on_stage(Stage::Parsing);
    let (summary, records) = decode(&raw)?;
    let ranked = rank(records)?;

    on_stage(Stage::Displaying);
    let servers = ranked
        .into_iter()
        .enumerate()
        .map(|(position, record)| -> Result<RankedServer, BrowserError> {
            let display = DISPLAY_FIELDS
                .iter()
                .map(|field| resolve(&record, field.path).cloned())
                .collect::<Result<Vec<_>, _>>()?;
            let tags = classify(position, &record)?;
            Ok(RankedServer {
                position,
                name: record.name()?.to_string(),
                display,
                tags,
                record,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!("Listed {} responsive {} servers", servers.len(), game);
    Ok(ServerListResult { summary, servers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::server::{FieldValue, Tag};
    use std::cell::RefCell;

    struct CannedMaster {
        body: String,
        requests: RefCell<Vec<(String, SortKey)>>,
    }

    impl CannedMaster {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl MasterSource for CannedMaster {
        async fn fetch(&self, game: &str, sort: SortKey) -> Result<String, BrowserError> {
            self.requests.borrow_mut().push((game.to_string(), sort));
            Ok(self.body.clone())
        }
    }

    struct DownMaster;

    impl MasterSource for DownMaster {
        async fn fetch(&self, _game: &str, _sort: SortKey) -> Result<String, BrowserError> {
            Err(BrowserError::Transport("connection refused".to_string()))
        }
    }

    const LISTING: &str = r#"[{"servers": 50},
        {"name": " A ", "ping": 30, "gametype": "dm", "map": "oa_dm1", "numplayers": 1, "maxplayers": 8, "address": "1.2.3.4:27960", "rules": {"g_humanplayers": "1"}},
        {"name": "B", "ping": 90, "gametype": "ctf", "map": "oa_ctf2", "numplayers": 8, "maxplayers": 8, "address": "5.6.7.8:27960", "rules": {"g_humanplayers": "0"}}]"#;

    #[tokio::test]
    async fn ranks_and_tags_a_listing() {
        let master = CannedMaster::new(LISTING);
        let mut stages = Vec::new();
        let result = refresh(&master, "openarena", SortKey::No, |stage| stages.push(stage))
            .await
            .unwrap();

        assert_eq!(result.summary.total_servers().unwrap(), &FieldValue::Integer(50));
        assert_eq!(result.responsive(), 2);

        let a = &result.servers[0];
        assert_eq!(a.name, "A");
        assert_eq!(a.position, 0);
        assert_eq!(a.tags, [Tag::Even, Tag::NotEmpty]);

        let b = &result.servers[1];
        assert_eq!(b.name, "B");
        assert_eq!(b.position, 1);
        assert_eq!(b.tags, [Tag::Odd, Tag::Full, Tag::Empty]);

        assert_eq!(stages, [Stage::Querying, Stage::Parsing, Stage::Displaying]);
        assert_eq!(
            master.requests.borrow().as_slice(),
            [("openarena".to_string(), SortKey::No)]
        );
    }

    #[tokio::test]
    async fn display_values_follow_column_order() {
        let result = refresh(&CannedMaster::new(LISTING), "openarena", SortKey::Ping, |_| {})
            .await
            .unwrap();

        let a = &result.servers[0];
        assert_eq!(a.display.len(), DISPLAY_FIELDS.len());
        assert_eq!(a.display[0], FieldValue::Integer(30));
        assert_eq!(a.display[3], FieldValue::Text("1".to_string()));
        assert_eq!(
            a.display_value("address"),
            Some(&FieldValue::Text("1.2.3.4:27960".to_string()))
        );
    }

    #[tokio::test]
    async fn truncated_response_aborts() {
        let master = CannedMaster::new(r#"[{"servers": 50}, {"name": "#);
        let result = refresh(&master, "openarena", SortKey::No, |_| {}).await;
        assert!(matches!(result, Err(BrowserError::Decode(_))));
    }

    #[tokio::test]
    async fn record_missing_display_field_aborts() {
        let master = CannedMaster::new(
            r#"[{"servers": 1}, {"name": "X", "numplayers": 0, "maxplayers": 4, "rules": {"g_humanplayers": "0"}}]"#,
        );
        let result = refresh(&master, "openarena", SortKey::No, |_| {}).await;
        assert!(matches!(
            result,
            Err(BrowserError::KeyNotFound(path)) if path == "ping"
        ));
    }

    #[tokio::test]
    async fn transport_failure_aborts_before_parsing() {
        let mut stages = Vec::new();
        let result = refresh(&DownMaster, "openarena", SortKey::No, |stage| stages.push(stage)).await;
        assert!(matches!(result, Err(BrowserError::Transport(_))));
        assert_eq!(stages, [Stage::Querying]);
    }
}
