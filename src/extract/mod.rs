//! Category extractors, one per stat table.
//!
//! Shared shape: locate the category's table (missing table means an empty
//! result, never an error), resolve columns by header where the markup is
//! reliable or by the category's fixed column map where it is not, filter out
//! rows that are not real player/team lines, and coerce every cell with the
//! category's defaults.

pub mod advanced_passing;
pub mod advanced_rushing;
pub mod defense;
pub mod kicking;
pub mod offense;
pub mod officials;
pub mod returns;
pub mod scoring;
pub mod team_totals;

use crate::document::BoxscoreDocument;
use crate::game_id::GameId;
use crate::records::ExtractedGame;

/// Header labels that reappear mid-table as embedded repeat rows.
const HEADER_LABELS: &[&str] = &[
    "Player",
    "Tm",
    "Team",
    "TD",
    "Int",
    "Passing",
    "Rushing",
    "Receiving",
    "Fumbles",
    "Tackles",
    "Def Interceptions",
    "Kick Returns",
    "Punt Returns",
];

/// Row-validity thresholds. These are empirically tuned against the source
/// site's markup and may misclassify unusually short names or non-standard
/// team codes, so they are tunable rather than hard invariants.
#[derive(Debug, Clone)]
pub struct RowFilter {
    /// Exact length of a plausible team code.
    pub team_code_len: usize,
    /// Player names at or below this length are treated as noise.
    pub min_player_name_len: usize,
    /// Officials position/name cells at or below this length are noise.
    pub min_official_field_len: usize,
}

impl Default for RowFilter {
    fn default() -> RowFilter {
        RowFilter {
            team_code_len: 3,
            min_player_name_len: 3,
            min_official_field_len: 2,
        }
    }
}

impl RowFilter {
    pub fn from_env() -> RowFilter {
        let defaults = RowFilter::default();
        RowFilter {
            team_code_len: env_usize("BOXSTATS_TEAM_CODE_LEN", defaults.team_code_len, 2, 4),
            min_player_name_len: env_usize(
                "BOXSTATS_MIN_PLAYER_NAME_LEN",
                defaults.min_player_name_len,
                0,
                10,
            ),
            min_official_field_len: env_usize(
                "BOXSTATS_MIN_OFFICIAL_FIELD_LEN",
                defaults.min_official_field_len,
                0,
                10,
            ),
        }
    }

    pub fn is_team_code(&self, team: &str) -> bool {
        team.len() == self.team_code_len && team.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// Rejects header repeats, team-total/summary rows and blank or
    /// implausibly short identifiers.
    pub fn is_player_row(&self, player: &str, team: &str) -> bool {
        if player.is_empty() || player.len() <= self.min_player_name_len {
            return false;
        }
        if HEADER_LABELS.contains(&player) {
            return false;
        }
        let lowered = player.to_ascii_lowercase();
        if lowered == "total" || lowered.contains("team total") {
            return false;
        }
        self.is_team_code(team)
    }
}

fn env_usize(key: &str, default: usize, min: usize, max: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Runs all nine extractors over one document. Categories whose table is
/// missing come back empty; the rest proceed unaffected.
pub fn extract_all(doc: &BoxscoreDocument, game_id: &GameId, filter: &RowFilter) -> ExtractedGame {
    ExtractedGame {
        game_id: game_id.clone(),
        offense: offense::extract(doc, filter),
        defense: defense::extract(doc, filter),
        returns: returns::extract(doc, filter),
        kicking: kicking::extract(doc, filter),
        advanced_passing: advanced_passing::extract(doc, filter),
        advanced_rushing: advanced_rushing::extract(doc, filter),
        team_totals: team_totals::extract(doc, filter),
        scoring: scoring::extract(doc),
        officials: officials::extract(doc, filter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_rejects_header_and_summary_rows() {
        let filter = RowFilter::default();
        assert!(filter.is_player_row("Josh Allen", "BUF"));
        assert!(!filter.is_player_row("Player", "BUF"));
        assert!(!filter.is_player_row("Team Totals", "BUF"));
        assert!(!filter.is_player_row("", "BUF"));
        assert!(!filter.is_player_row("Jim", "BUF"));
        assert!(!filter.is_player_row("Josh Allen", "Tm"));
        assert!(!filter.is_player_row("Josh Allen", "BUFFALO"));
        assert!(!filter.is_player_row("Josh Allen", "B2F"));
    }
}
