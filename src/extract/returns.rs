//! Kick and punt return table (`returns`). Both subsections live in the same
//! row: kick returns in columns 2-6, punt returns in 7-11. Rows shorter than
//! the full layout are header or spacer lines and are skipped.

use crate::coerce::{to_f64, to_i64};
use crate::document::{BoxscoreDocument, Table};
use crate::records::ReturnsRow;

use super::RowFilter;

const TABLE_ID: &str = "returns";
const MIN_CELLS: usize = 12;

struct ReturnsColumns {
    player: usize,
    team: usize,
    kick_returns: usize,
    kick_return_yds: usize,
    kick_return_avg: usize,
    kick_return_td: usize,
    kick_return_long: usize,
    punt_returns: usize,
    punt_return_yds: usize,
    punt_return_avg: usize,
    punt_return_td: usize,
    punt_return_long: usize,
}

const COLUMNS: ReturnsColumns = ReturnsColumns {
    player: 0,
    team: 1,
    kick_returns: 2,
    kick_return_yds: 3,
    kick_return_avg: 4,
    kick_return_td: 5,
    kick_return_long: 6,
    punt_returns: 7,
    punt_return_yds: 8,
    punt_return_avg: 9,
    punt_return_td: 10,
    punt_return_long: 11,
};

pub fn extract(doc: &BoxscoreDocument, filter: &RowFilter) -> Vec<ReturnsRow> {
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
        out.push(ReturnsRow {
            player: player.to_string(),
            team: team.to_string(),
            kick_returns: to_i64(Table::cell(row, COLUMNS.kick_returns), 0),
            kick_return_yds: to_i64(Table::cell(row, COLUMNS.kick_return_yds), 0),
            kick_return_avg: to_f64(Table::cell(row, COLUMNS.kick_return_avg), 0.0),
            kick_return_td: to_i64(Table::cell(row, COLUMNS.kick_return_td), 0),
            kick_return_long: to_i64(Table::cell(row, COLUMNS.kick_return_long), 0),
            punt_returns: to_i64(Table::cell(row, COLUMNS.punt_returns), 0),
            punt_return_yds: to_i64(Table::cell(row, COLUMNS.punt_return_yds), 0),
            punt_return_avg: to_f64(Table::cell(row, COLUMNS.punt_return_avg), 0.0),
            punt_return_td: to_i64(Table::cell(row, COLUMNS.punt_return_td), 0),
            punt_return_long: to_i64(Table::cell(row, COLUMNS.punt_return_long), 0),
        });
    }
    out
}
