use std::env;
use std::str::FromStr;

use crate::master::fetch::SortKey;
use crate::utils::BrowserError;

#[derive(Clone, Debug)]
pub struct Config {
    // Master server query
    pub master_url: String,
    pub game: String,
    pub sort: SortKey,

    // Game client
    pub game_exe_path: String,

    // Rendering
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            master_url: "https://dpmaster.deathmask.net/".to_string(),
            game: "openarena".to_string(),
            sort: SortKey::No,
            game_exe_path: "openarena".to_string(),
            use_color: true,
        }
    }
}

impl Config {
    /// Reads every field from the environment, falling back to the defaults.
    /// A malformed `SORT` token is rejected here so no request is ever built with it.
    pub fn from_env() -> Result<Self, BrowserError> {
        let defaults = Self::default();

        let sort = match env::var("SORT") {
            Ok(token) => SortKey::from_str(token.trim())?,
            Err(_) => defaults.sort,
        };

        Ok(Self {
            master_url: env::var("MASTER_URL").unwrap_or(defaults.master_url),

            game: env::var("GAME").unwrap_or(defaults.game),

            sort,

            game_exe_path: env::var("GAME_EXE_PATH").unwrap_or(defaults.game_exe_path),

            use_color: env::var("USE_COLOR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.use_color),
        })
    }
}
