pub mod index;
pub mod play;
pub mod refresh;

use std::str::FromStr;

use crate::master::fetch::SortKey;
use crate::utils::BrowserError;

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh(Option<SortKey>),
    Play(usize),
    Offline,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = BrowserError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or("");
        let arg = words.next();

        match verb {
            "r" | "refresh" => Ok(Self::Refresh(arg.map(SortKey::from_str).transpose()?)),
            "p" | "play" => arg
                .and_then(|row| row.parse().ok())
                .map(Self::Play)
                .ok_or_else(|| BrowserError::Usage("usage: play <row>".to_string())),
            "o" | "offline" => Ok(Self::Offline),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(BrowserError::Usage(format!("unknown command '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!("r".parse::<Command>().unwrap(), Command::Refresh(None));
        assert_eq!(
            "refresh ping".parse::<Command>().unwrap(),
            Command::Refresh(Some(SortKey::Ping))
        );
        assert_eq!("p 3".parse::<Command>().unwrap(), Command::Play(3));
        assert_eq!("  offline ".parse::<Command>().unwrap(), Command::Offline);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn bad_sort_token_is_rejected_before_any_request() {
        assert!(matches!(
            "r humans".parse::<Command>(),
            Err(BrowserError::InvalidSortKey(_))
        ));
    }

    #[test]
    fn play_needs_a_row_number() {
        assert!("play".parse::<Command>().is_err());
        assert!("play first".parse::<Command>().is_err());
    }
}
