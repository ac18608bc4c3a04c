// src/main.rs
mod config;
mod handlers;
mod launcher;
mod master;
mod models;
mod render;
mod storage;
mod utils;

use env_logger::Env;
use log::{error, info};
use std::io::{self, Write};
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::handlers::index::handle_help;
use crate::handlers::play::{handle_connect, handle_offline, handle_play};
use crate::handlers::refresh::{handle_refresh, handle_refresh_json};
use crate::handlers::Command;
use crate::launcher::GameLauncher;
use crate::master::fetch::{HttpMaster, SortKey};
use crate::storage::memory::ListingStore;
use crate::utils::BrowserError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let outcome = if args.is_empty() {
        run_interactive(&config).await
    } else {
        run_once(&config, &args).await
    };

    outcome.map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

async fn run_once(config: &Config, args: &[String]) -> Result<(), BrowserError> {
    let source = HttpMaster::new(&config.master_url);
    let launcher = GameLauncher::new(&config.game_exe_path);
    let mut out = io::stdout();

    match args[0].as_str() {
        "list" => {
            let json = args.iter().any(|arg| arg == "--json");
            let sort = match args.iter().skip(1).find(|arg| !arg.starts_with("--")) {
                Some(token) => SortKey::from_str(token)?,
                None => config.sort,
            };
            if json {
                handle_refresh_json(&source, &config.game, sort, &mut out).await
            } else {
                let store = ListingStore::new();
                handle_refresh(&source, &store, &config.game, sort, config.use_color, &mut out).await
            }
        }
        "play" => match args.get(1) {
            Some(address) => handle_connect(&launcher, address, &mut out),
            None => Err(BrowserError::Usage("usage: dpbrowse play <address>".to_string())),
        },
        "offline" => handle_offline(&launcher, &mut out),
        other => Err(BrowserError::Usage(format!(
            "unknown command '{}', expected list, play or offline",
            other
        ))),
    }
}

async fn run_interactive(config: &Config) -> Result<(), BrowserError> {
    let source = HttpMaster::new(&config.master_url);
    let launcher = GameLauncher::new(&config.game_exe_path);
    let store = ListingStore::new();
    let mut out = io::stdout();

    info!("Browsing {} servers via {}", config.game, config.master_url);

    // The window used to load the list as soon as it opened
    if let Err(e) =
        handle_refresh(&source, &store, &config.game, config.sort, config.use_color, &mut out).await
    {
        writeln!(out, "{}", e)?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let result = match line.parse::<Command>() {
            Ok(Command::Refresh(sort)) => {
                handle_refresh(
                    &source,
                    &store,
                    &config.game,
                    sort.unwrap_or(config.sort),
                    config.use_color,
                    &mut out,
                )
                .await
            }
            Ok(Command::Play(row)) => handle_play(&store, &launcher, row, &mut out),
            Ok(Command::Offline) => handle_offline(&launcher, &mut out),
            Ok(Command::Help) => handle_help(&mut out),
            Ok(Command::Quit) => break,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            writeln!(out, "{}", e)?;
        }
    }

    Ok(())
}
