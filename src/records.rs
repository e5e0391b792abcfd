//! Typed records produced by the category extractors.
//!
//! One record type per statistical category, with named numeric fields in
//! place of the source site's loosely keyed cells. Player records share the
//! `(game, player, team)` natural key and are merged field-group-wise at
//! persistence time, so every struct here carries only the columns its
//! category owns.

use crate::game_id::GameId;

/// Combined passing/rushing/receiving line for one player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffenseRow {
    pub player: String,
    pub team: String,
    pub pass_cmp: i64,
    pub pass_att: i64,
    pub pass_yds: i64,
    pub pass_td: i64,
    pub pass_int: i64,
    pub pass_sacked: i64,
    pub pass_sacked_yds: i64,
    pub pass_long: i64,
    pub pass_rating: f64,
    pub rush_att: i64,
    pub rush_yds: i64,
    pub rush_td: i64,
    pub rush_long: i64,
    pub targets: i64,
    pub receptions: i64,
    pub rec_yds: i64,
    pub rec_td: i64,
    pub rec_long: i64,
    pub fumbles: i64,
    pub fumbles_lost: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefenseRow {
    pub player: String,
    pub team: String,
    pub def_int: i64,
    pub def_int_yds: i64,
    pub def_int_td: i64,
    pub def_int_long: i64,
    pub passes_defended: i64,
    // Half-sacks are credited, so sacks are fractional.
    pub sacks: f64,
    pub tackles_combined: i64,
    pub tackles_solo: i64,
    pub tackles_assists: i64,
    pub tackles_loss: i64,
    pub qb_hits: i64,
    pub fumbles_recovered: i64,
    pub fumble_return_yds: i64,
    pub fumble_return_td: i64,
    pub fumbles_forced: i64,
}

/// Kick-return and punt-return subsections of the same row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnsRow {
    pub player: String,
    pub team: String,
    pub kick_returns: i64,
    pub kick_return_yds: i64,
    pub kick_return_avg: f64,
    pub kick_return_td: i64,
    pub kick_return_long: i64,
    pub punt_returns: i64,
    pub punt_return_yds: i64,
    pub punt_return_avg: f64,
    pub punt_return_td: i64,
    pub punt_return_long: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KickingRow {
    pub player: String,
    pub team: String,
    pub xp_made: i64,
    pub xp_att: i64,
    pub xp_pct: f64,
    pub fg_made: i64,
    pub fg_att: i64,
    pub fg_pct: f64,
    pub punts: i64,
    pub punt_yds: i64,
    pub punt_avg: f64,
    pub punt_long: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedPassingRow {
    pub player: String,
    pub team: String,
    pub cmp: i64,
    pub att: i64,
    pub yds: i64,
    pub first_downs: i64,
    pub first_down_pct: f64,
    pub intended_air_yds: i64,
    pub intended_air_yds_per_att: f64,
    pub completed_air_yds: i64,
    pub completed_air_yds_per_cmp: f64,
    pub completed_air_yds_per_att: f64,
    pub yards_after_catch: i64,
    pub yards_after_catch_per_cmp: f64,
    pub drops: i64,
    pub drop_pct: f64,
    pub bad_throws: i64,
    pub bad_throw_pct: f64,
    pub sacks: i64,
    pub blitzes: i64,
    pub hurries: i64,
    pub hits: i64,
    pub pressures: i64,
    pub pressure_pct: f64,
    pub scrambles: i64,
    pub yds_per_scramble: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedRushingRow {
    pub player: String,
    pub team: String,
    pub att: i64,
    pub yds: i64,
    pub td: i64,
    pub first_downs: i64,
    pub yds_before_contact: i64,
    pub yds_before_contact_per_att: f64,
    pub yds_after_contact: i64,
    pub yds_after_contact_per_att: f64,
    pub broken_tackles: i64,
    pub att_per_broken_tackle: f64,
}

/// One of exactly two per game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamTotalsRow {
    pub team: String,
    pub first_downs: i64,
    pub rush_att: i64,
    pub rush_yds: i64,
    pub rush_td: i64,
    pub pass_cmp: i64,
    pub pass_att: i64,
    pub pass_yds: i64,
    pub pass_td: i64,
    pub pass_int: i64,
    pub total_yds: i64,
    pub turnovers: i64,
    pub penalties: i64,
    pub penalty_yds: i64,
    pub third_down_made: i64,
    pub third_down_att: i64,
    pub fourth_down_made: i64,
    pub fourth_down_att: i64,
    pub time_of_possession: String,
}

/// Append-only scoring timeline entry; kept even when the quarter cell is
/// unparseable (it falls back to 1) since partial information is still useful.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringEvent {
    pub quarter: i64,
    pub clock: String,
    pub team: String,
    pub description: String,
    pub home_score: i64,
    pub away_score: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfficialAssignment {
    pub position: String,
    pub name: String,
}

/// Everything extracted from one boxscore page. A missing table leaves its
/// category empty; the other categories are unaffected.
#[derive(Debug, Clone)]
pub struct ExtractedGame {
    pub game_id: GameId,
    pub offense: Vec<OffenseRow>,
    pub defense: Vec<DefenseRow>,
    pub returns: Vec<ReturnsRow>,
    pub kicking: Vec<KickingRow>,
    pub advanced_passing: Vec<AdvancedPassingRow>,
    pub advanced_rushing: Vec<AdvancedRushingRow>,
    pub team_totals: Vec<TeamTotalsRow>,
    pub scoring: Vec<ScoringEvent>,
    pub officials: Vec<OfficialAssignment>,
}

impl ExtractedGame {
    pub fn empty(game_id: GameId) -> ExtractedGame {
        ExtractedGame {
            game_id,
            offense: Vec::new(),
            defense: Vec::new(),
            returns: Vec::new(),
            kicking: Vec::new(),
            advanced_passing: Vec::new(),
            advanced_rushing: Vec::new(),
            team_totals: Vec::new(),
            scoring: Vec::new(),
            officials: Vec::new(),
        }
    }

    /// Player rows across all player-keyed categories.
    pub fn player_row_count(&self) -> usize {
        self.offense.len()
            + self.defense.len()
            + self.returns.len()
            + self.kicking.len()
            + self.advanced_passing.len()
            + self.advanced_rushing.len()
    }
}
