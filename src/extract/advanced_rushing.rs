//! Advanced rushing table (`div_rushing_advanced` container): yards before
//! and after contact, broken tackles. Only rows with at least one rushing
//! attempt are retained.

use crate::coerce::{to_f64, to_i64};
use crate::document::{BoxscoreDocument, Table};
use crate::records::AdvancedRushingRow;

use super::RowFilter;

const CONTAINER_ID: &str = "div_rushing_advanced";
const MIN_CELLS: usize = 3;

struct AdvancedRushingColumns {
    player: usize,
    team: usize,
    att: usize,
    yds: usize,
    td: usize,
    first_downs: usize,
    yds_before_contact: usize,
    yds_before_contact_per_att: usize,
    yds_after_contact: usize,
    yds_after_contact_per_att: usize,
    broken_tackles: usize,
    att_per_broken_tackle: usize,
}

const COLUMNS: AdvancedRushingColumns = AdvancedRushingColumns {
    player: 0,
    team: 1,
    att: 2,
    yds: 3,
    td: 4,
    first_downs: 5,
    yds_before_contact: 6,
    yds_before_contact_per_att: 7,
    yds_after_contact: 8,
    yds_after_contact_per_att: 9,
    broken_tackles: 10,
    att_per_broken_tackle: 11,
};

pub fn extract(doc: &BoxscoreDocument, filter: &RowFilter) -> Vec<AdvancedRushingRow> {
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
        let att = to_i64(Table::cell(row, COLUMNS.att), 0);
        if att <= 0 {
            continue;
        }
        out.push(AdvancedRushingRow {
            player: player.to_string(),
            team: team.to_string(),
            att,
            yds: to_i64(Table::cell(row, COLUMNS.yds), 0),
            td: to_i64(Table::cell(row, COLUMNS.td), 0),
            first_downs: to_i64(Table::cell(row, COLUMNS.first_downs), 0),
            yds_before_contact: to_i64(Table::cell(row, COLUMNS.yds_before_contact), 0),
            yds_before_contact_per_att: to_f64(
                Table::cell(row, COLUMNS.yds_before_contact_per_att),
                0.0,
            ),
            yds_after_contact: to_i64(Table::cell(row, COLUMNS.yds_after_contact), 0),
            yds_after_contact_per_att: to_f64(
                Table::cell(row, COLUMNS.yds_after_contact_per_att),
                0.0,
            ),
            broken_tackles: to_i64(Table::cell(row, COLUMNS.broken_tackles), 0),
            att_per_broken_tackle: to_f64(Table::cell(row, COLUMNS.att_per_broken_tackle), 0.0),
        });
    }
    out
}
