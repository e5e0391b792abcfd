use anyhow::{Result, anyhow};
use chrono::NaiveDate;

const BOXSCORE_BASE_URL: &str = "https://www.pro-football-reference.com/boxscores/";

/// Compact per-game identifier: 8-digit date, one sequence digit (0 for the
/// sole game of the day, 1+ for doubleheaders) and a 2-4 letter lowercase
/// home-team code, e.g. `202411030buf`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId {
    token: String,
    date: NaiveDate,
    sequence: u8,
    home_team: String,
}

impl GameId {
    /// Parses a raw token. Malformed input (wrong length, bad date, non-digit
    /// sequence, non-alphabetic or out-of-range team code) yields `None`.
    pub fn parse(token: &str) -> Option<GameId> {
        if !(11..=13).contains(&token.len()) || !token.is_ascii() {
            return None;
        }
        let date = NaiveDate::parse_from_str(&token[..8], "%Y%m%d").ok()?;
        let sequence = token[8..9].parse::<u8>().ok()?;
        let team = &token[9..];
        if !team.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(GameId {
            token: token.to_string(),
            date,
            sequence,
            home_team: team.to_ascii_lowercase(),
        })
    }

    /// Builds an identifier from parts. The team code is lowercased; an empty,
    /// non-alphabetic or out-of-range code is an error.
    pub fn from_parts(date: NaiveDate, home_team: &str, sequence: u8) -> Result<GameId> {
        let team = home_team.trim().to_ascii_lowercase();
        if !(2..=4).contains(&team.len()) || !team.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(anyhow!("invalid home team code: {home_team:?}"));
        }
        if sequence > 9 {
            return Err(anyhow!("game sequence must be a single digit: {sequence}"));
        }
        let token = format!("{}{}{}", date.format("%Y%m%d"), sequence, team);
        Ok(GameId {
            token,
            date,
            sequence,
            home_team: team,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn sequence(&self) -> u8 {
        self.sequence
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn is_doubleheader(&self) -> bool {
        self.sequence > 0
    }

    /// Season the game belongs to. Regular seasons run September through
    /// February, so January/February dates count toward the prior year.
    pub fn season(&self) -> i32 {
        use chrono::Datelike;
        if self.date.month() >= 8 {
            self.date.year()
        } else {
            self.date.year() - 1
        }
    }

    /// Canonical source URL for this game's boxscore page. Pure, no network.
    pub fn url(&self) -> String {
        format!("{BOXSCORE_BASE_URL}{}.htm", self.token)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.token)
    }
}
