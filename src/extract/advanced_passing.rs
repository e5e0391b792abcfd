//! Advanced passing table (`div_passing_advanced` container): air yards,
//! accuracy and pressure metrics that only exist for players with a passing
//! line. A record is kept for every row present in the source table.

use crate::coerce::{to_f64, to_i64};
use crate::document::{BoxscoreDocument, Table};
use crate::records::AdvancedPassingRow;

use super::RowFilter;

const CONTAINER_ID: &str = "div_passing_advanced";
const MIN_CELLS: usize = 10;

struct AdvancedPassingColumns {
    player: usize,
    team: usize,
    cmp: usize,
    att: usize,
    yds: usize,
    first_downs: usize,
    first_down_pct: usize,
    intended_air_yds: usize,
    intended_air_yds_per_att: usize,
    completed_air_yds: usize,
    completed_air_yds_per_cmp: usize,
    completed_air_yds_per_att: usize,
    yards_after_catch: usize,
    yards_after_catch_per_cmp: usize,
    drops: usize,
    drop_pct: usize,
    bad_throws: usize,
    bad_throw_pct: usize,
    sacks: usize,
    blitzes: usize,
    hurries: usize,
    hits: usize,
    pressures: usize,
    pressure_pct: usize,
    scrambles: usize,
    yds_per_scramble: usize,
}

const COLUMNS: AdvancedPassingColumns = AdvancedPassingColumns {
    player: 0,
    team: 1,
    cmp: 2,
    att: 3,
    yds: 4,
    first_downs: 5,
    first_down_pct: 6,
    intended_air_yds: 7,
    intended_air_yds_per_att: 8,
    completed_air_yds: 9,
    completed_air_yds_per_cmp: 10,
    completed_air_yds_per_att: 11,
    yards_after_catch: 12,
    yards_after_catch_per_cmp: 13,
    drops: 14,
    drop_pct: 15,
    bad_throws: 16,
    bad_throw_pct: 17,
    sacks: 18,
    blitzes: 19,
    hurries: 20,
    hits: 21,
    pressures: 22,
    pressure_pct: 23,
    scrambles: 24,
    yds_per_scramble: 25,
};

pub fn extract(doc: &BoxscoreDocument, filter: &RowFilter) -> Vec<AdvancedPassingRow> {
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
        out.push(AdvancedPassingRow {
            player: player.to_string(),
            team: team.to_string(),
            cmp: to_i64(Table::cell(row, COLUMNS.cmp), 0),
            att: to_i64(Table::cell(row, COLUMNS.att), 0),
            yds: to_i64(Table::cell(row, COLUMNS.yds), 0),
            first_downs: to_i64(Table::cell(row, COLUMNS.first_downs), 0),
            first_down_pct: to_f64(Table::cell(row, COLUMNS.first_down_pct), 0.0),
            intended_air_yds: to_i64(Table::cell(row, COLUMNS.intended_air_yds), 0),
            intended_air_yds_per_att: to_f64(Table::cell(row, COLUMNS.intended_air_yds_per_att), 0.0),
            completed_air_yds: to_i64(Table::cell(row, COLUMNS.completed_air_yds), 0),
            completed_air_yds_per_cmp: to_f64(
                Table::cell(row, COLUMNS.completed_air_yds_per_cmp),
                0.0,
            ),
            completed_air_yds_per_att: to_f64(
                Table::cell(row, COLUMNS.completed_air_yds_per_att),
                0.0,
            ),
            yards_after_catch: to_i64(Table::cell(row, COLUMNS.yards_after_catch), 0),
            yards_after_catch_per_cmp: to_f64(
                Table::cell(row, COLUMNS.yards_after_catch_per_cmp),
                0.0,
            ),
            drops: to_i64(Table::cell(row, COLUMNS.drops), 0),
            drop_pct: to_f64(Table::cell(row, COLUMNS.drop_pct), 0.0),
            bad_throws: to_i64(Table::cell(row, COLUMNS.bad_throws), 0),
            bad_throw_pct: to_f64(Table::cell(row, COLUMNS.bad_throw_pct), 0.0),
            sacks: to_i64(Table::cell(row, COLUMNS.sacks), 0),
            blitzes: to_i64(Table::cell(row, COLUMNS.blitzes), 0),
            hurries: to_i64(Table::cell(row, COLUMNS.hurries), 0),
            hits: to_i64(Table::cell(row, COLUMNS.hits), 0),
            pressures: to_i64(Table::cell(row, COLUMNS.pressures), 0),
            pressure_pct: to_f64(Table::cell(row, COLUMNS.pressure_pct), 0.0),
            scrambles: to_i64(Table::cell(row, COLUMNS.scrambles), 0),
            yds_per_scramble: to_f64(Table::cell(row, COLUMNS.yds_per_scramble), 0.0),
        });
    }
    out
}
