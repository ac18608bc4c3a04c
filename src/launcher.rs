// src/launcher.rs
use log::{debug, error, info};
use std::process::Command;
use std::thread;

use crate::utils::BrowserError;

/// Starts the game client. Launches are fire-and-forget: the exit status is only logged.
pub trait Launcher {
    fn launch_connect(&self, address: &str) -> Result<(), BrowserError>;
    fn launch_offline(&self) -> Result<(), BrowserError>;
}

pub struct GameLauncher {
    exe_path: String,
}

impl GameLauncher {
    pub fn new(exe_path: impl Into<String>) -> Self {
        Self {
            exe_path: exe_path.into(),
        }
    }

    pub fn connect_args(address: &str) -> [&str; 2] {
        ["+connect", address]
    }

    fn spawn(&self, args: &[&str]) -> Result<(), BrowserError> {
        match Command::new(&self.exe_path).args(args).spawn() {
            Ok(mut child) => {
                info!("Started {} (pid {}) with {:?}", self.exe_path, child.id(), args);
                // Reap the client when it exits; nothing else watches it
                thread::spawn(move || {
                    if let Ok(status) = child.wait() {
                        debug!("Game client exited with {}", status);
                    }
                });
                Ok(())
            }
            Err(e) => {
                error!("Failed to start {}: {}", self.exe_path, e);
                Err(BrowserError::Launch(format!("{}: {}", self.exe_path, e)))
            }
        }
    }
}

impl Launcher for GameLauncher {
    fn launch_connect(&self, address: &str) -> Result<(), BrowserError> {
        self.spawn(&Self::connect_args(address))
    }

    fn launch_offline(&self) -> Result<(), BrowserError> {
        self.spawn(&[])
    }
}
