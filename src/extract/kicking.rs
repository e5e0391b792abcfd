//! Kicking and punting table. The table id is not stable, so it is located
//! through its `div_kicking` container. Field-goal and extra-point rates are
//! derived here from made/attempted, never stored as a division by zero.

use crate::coerce::{ratio_pct, to_f64, to_i64};
use crate::document::{BoxscoreDocument, Table};
use crate::records::KickingRow;

use super::RowFilter;

const CONTAINER_ID: &str = "div_kicking";
const MIN_CELLS: usize = 6;

struct KickingColumns {
    player: usize,
    team: usize,
    xp_made: usize,
    xp_att: usize,
    fg_made: usize,
    fg_att: usize,
    punts: usize,
    punt_yds: usize,
    punt_avg: usize,
    punt_long: usize,
}

const COLUMNS: KickingColumns = KickingColumns {
    player: 0,
    team: 1,
    xp_made: 2,
    xp_att: 3,
    fg_made: 4,
    fg_att: 5,
    punts: 6,
    punt_yds: 7,
    punt_avg: 8,
    punt_long: 9,
};

pub fn extract(doc: &BoxscoreDocument, filter: &RowFilter) -> Vec<KickingRow> {
    let Some(table) = doc.find_table_in_container(CONTAINER_ID) else {
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
        let xp_made = to_i64(Table::cell(row, COLUMNS.xp_made), 0);
        let xp_att = to_i64(Table::cell(row, COLUMNS.xp_att), 0);
        let fg_made = to_i64(Table::cell(row, COLUMNS.fg_made), 0);
        let fg_att = to_i64(Table::cell(row, COLUMNS.fg_att), 0);
        out.push(KickingRow {
            player: player.to_string(),
            team: team.to_string(),
            xp_made,
            xp_att,
            xp_pct: ratio_pct(xp_made, xp_att),
            fg_made,
            fg_att,
            fg_pct: ratio_pct(fg_made, fg_att),
            punts: to_i64(Table::cell(row, COLUMNS.punts), 0),
            punt_yds: to_i64(Table::cell(row, COLUMNS.punt_yds), 0),
            punt_avg: to_f64(Table::cell(row, COLUMNS.punt_avg), 0.0),
            punt_long: to_i64(Table::cell(row, COLUMNS.punt_long), 0),
        });
    }
    out
}
