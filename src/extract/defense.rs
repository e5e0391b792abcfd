//! Player defense table (`player_defense`).
//!
//! The defense markup does not expose usable structured attributes, so the
//! column map below is a versioned positional contract: re-validate it
//! whenever extraction starts yielding zero or implausible rows.

use crate::coerce::{to_f64, to_i64};
use crate::document::{BoxscoreDocument, Table};
use crate::records::DefenseRow;

use super::RowFilter;

const TABLE_ID: &str = "player_defense";
const MIN_CELLS: usize = 8;

struct DefenseColumns {
    player: usize,
    team: usize,
    def_int: usize,
    def_int_yds: usize,
    def_int_td: usize,
    def_int_long: usize,
    passes_defended: usize,
    sacks: usize,
    tackles_combined: usize,
    tackles_solo: usize,
    tackles_assists: usize,
    tackles_loss: usize,
    qb_hits: usize,
    fumbles_recovered: usize,
    fumble_return_yds: usize,
    fumble_return_td: usize,
    fumbles_forced: usize,
}

const COLUMNS: DefenseColumns = DefenseColumns {
    player: 0,
    team: 1,
    def_int: 2,
    def_int_yds: 3,
    def_int_td: 4,
    def_int_long: 5,
    passes_defended: 6,
    sacks: 7,
    tackles_combined: 8,
    tackles_solo: 9,
    tackles_assists: 10,
    tackles_loss: 11,
    qb_hits: 12,
    fumbles_recovered: 13,
    fumble_return_yds: 14,
    fumble_return_td: 15,
    fumbles_forced: 16,
};

pub fn extract(doc: &BoxscoreDocument, filter: &RowFilter) -> Vec<DefenseRow> {
    let Some(table) = doc.find_table(TABLE_ID) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for row in &table.rows {
        if row.len() < MIN_CELLS {
            continue;
        }
        let player = Table::cell(row, COLUMNS.player);
        let team = Table::cell(row, COLUMNS.team);
        if !filter.is_player_row(player, team) {
            continue;
        }
        out.push(DefenseRow {
            player: player.to_string(),
            team: team.to_string(),
            def_int: to_i64(Table::cell(row, COLUMNS.def_int), 0),
            def_int_yds: to_i64(Table::cell(row, COLUMNS.def_int_yds), 0),
            def_int_td: to_i64(Table::cell(row, COLUMNS.def_int_td), 0),
            def_int_long: to_i64(Table::cell(row, COLUMNS.def_int_long), 0),
            passes_defended: to_i64(Table::cell(row, COLUMNS.passes_defended), 0),
            sacks: to_f64(Table::cell(row, COLUMNS.sacks), 0.0),
            tackles_combined: to_i64(Table::cell(row, COLUMNS.tackles_combined), 0),
            tackles_solo: to_i64(Table::cell(row, COLUMNS.tackles_solo), 0),
            tackles_assists: to_i64(Table::cell(row, COLUMNS.tackles_assists), 0),
            tackles_loss: to_i64(Table::cell(row, COLUMNS.tackles_loss), 0),
            qb_hits: to_i64(Table::cell(row, COLUMNS.qb_hits), 0),
            fumbles_recovered: to_i64(Table::cell(row, COLUMNS.fumbles_recovered), 0),
            fumble_return_yds: to_i64(Table::cell(row, COLUMNS.fumble_return_yds), 0),
            fumble_return_td: to_i64(Table::cell(row, COLUMNS.fumble_return_td), 0),
            fumbles_forced: to_i64(Table::cell(row, COLUMNS.fumbles_forced), 0),
        });
    }
    out
}
