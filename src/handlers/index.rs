// src/handlers/index.rs
use std::io::Write;

use crate::utils::BrowserError;

pub const REFRESH_HINT: &str = "Refresh server list.";
pub const PLAY_HINT: &str = "Play on the selected server.";
pub const OFFLINE_HINT: &str = "Start the game without connecting to a server.";

pub fn handle_help<W: Write>(out: &mut W) -> Result<(), BrowserError> {
    writeln!(out, "  r, refresh [sort]   {}", REFRESH_HINT)?;
    writeln!(out, "  p, play <row>       {}", PLAY_HINT)?;
    writeln!(out, "  o, offline          {}", OFFLINE_HINT)?;
    writeln!(out, "  h, help             Show this help.")?;
    writeln!(out, "  q, quit             Exit.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_action() {
        let mut out = Vec::new();
        handle_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for hint in [REFRESH_HINT, PLAY_HINT, OFFLINE_HINT] {
            assert!(text.contains(hint));
        }
    }
}
