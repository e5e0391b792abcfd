//! Combined passing/rushing/receiving table (`player_offense`).
//!
//! This table carries reliable `data-stat` attributes, so columns are looked
//! up by resolved header name with the fixed positional map as fallback for
//! pages where the header region is stripped.

use crate::coerce::{to_f64, to_i64};
use crate::document::{BoxscoreDocument, Table};
use crate::headers::{column_index, resolve_headers};
use crate::records::OffenseRow;

use super::RowFilter;

const TABLE_ID: &str = "player_offense";

/// Positional fallback layout. A markup change on the source site only
/// requires editing this one descriptor.
struct OffenseColumns {
    player: usize,
    team: usize,
    pass_cmp: usize,
    pass_att: usize,
    pass_yds: usize,
    pass_td: usize,
    pass_int: usize,
    pass_sacked: usize,
    pass_sacked_yds: usize,
    pass_long: usize,
    pass_rating: usize,
    rush_att: usize,
    rush_yds: usize,
    rush_td: usize,
    rush_long: usize,
    targets: usize,
    rec: usize,
    rec_yds: usize,
    rec_td: usize,
    rec_long: usize,
    fumbles: usize,
    fumbles_lost: usize,
}

const FALLBACK: OffenseColumns = OffenseColumns {
    player: 0,
    team: 1,
    pass_cmp: 2,
    pass_att: 3,
    pass_yds: 4,
    pass_td: 5,
    pass_int: 6,
    pass_sacked: 7,
    pass_sacked_yds: 8,
    pass_long: 9,
    pass_rating: 10,
    rush_att: 11,
    rush_yds: 12,
    rush_td: 13,
    rush_long: 14,
    targets: 15,
    rec: 16,
    rec_yds: 17,
    rec_td: 18,
    rec_long: 19,
    fumbles: 20,
    fumbles_lost: 21,
};

impl OffenseColumns {
    fn resolve(headers: &[String]) -> OffenseColumns {
        let col = |name: &str, fallback: usize| column_index(headers, name).unwrap_or(fallback);
        OffenseColumns {
            player: col("player", FALLBACK.player),
            team: col("team", FALLBACK.team),
            pass_cmp: col("pass_cmp", FALLBACK.pass_cmp),
            pass_att: col("pass_att", FALLBACK.pass_att),
            pass_yds: col("pass_yds", FALLBACK.pass_yds),
            pass_td: col("pass_td", FALLBACK.pass_td),
            pass_int: col("pass_int", FALLBACK.pass_int),
            pass_sacked: col("pass_sacked", FALLBACK.pass_sacked),
            pass_sacked_yds: col("pass_sacked_yds", FALLBACK.pass_sacked_yds),
            pass_long: col("pass_long", FALLBACK.pass_long),
            pass_rating: col("pass_rating", FALLBACK.pass_rating),
            rush_att: col("rush_att", FALLBACK.rush_att),
            rush_yds: col("rush_yds", FALLBACK.rush_yds),
            rush_td: col("rush_td", FALLBACK.rush_td),
            rush_long: col("rush_long", FALLBACK.rush_long),
            targets: col("targets", FALLBACK.targets),
            rec: col("rec", FALLBACK.rec),
            rec_yds: col("rec_yds", FALLBACK.rec_yds),
            rec_td: col("rec_td", FALLBACK.rec_td),
            rec_long: col("rec_long", FALLBACK.rec_long),
            fumbles: col("fumbles", FALLBACK.fumbles),
            fumbles_lost: col("fumbles_lost", FALLBACK.fumbles_lost),
        }
    }
}

pub fn extract(doc: &BoxscoreDocument, filter: &RowFilter) -> Vec<OffenseRow> {
    let Some(table) = doc.find_table(TABLE_ID) else {
        return Vec::new();
    };
    let headers = resolve_headers(&table);
    let c = OffenseColumns::resolve(&headers);

    let mut out = Vec::new();
    for row in &table.rows {
        let player = Table::cell(row, c.player);
        let team = Table::cell(row, c.team);
        if !filter.is_player_row(player, team) {
            continue;
        }
        out.push(OffenseRow {
            player: player.to_string(),
            team: team.to_string(),
            pass_cmp: to_i64(Table::cell(row, c.pass_cmp), 0),
            pass_att: to_i64(Table::cell(row, c.pass_att), 0),
            pass_yds: to_i64(Table::cell(row, c.pass_yds), 0),
            pass_td: to_i64(Table::cell(row, c.pass_td), 0),
            pass_int: to_i64(Table::cell(row, c.pass_int), 0),
            pass_sacked: to_i64(Table::cell(row, c.pass_sacked), 0),
            pass_sacked_yds: to_i64(Table::cell(row, c.pass_sacked_yds), 0),
            pass_long: to_i64(Table::cell(row, c.pass_long), 0),
            pass_rating: to_f64(Table::cell(row, c.pass_rating), 0.0),
            rush_att: to_i64(Table::cell(row, c.rush_att), 0),
            rush_yds: to_i64(Table::cell(row, c.rush_yds), 0),
            rush_td: to_i64(Table::cell(row, c.rush_td), 0),
            rush_long: to_i64(Table::cell(row, c.rush_long), 0),
            targets: to_i64(Table::cell(row, c.targets), 0),
            receptions: to_i64(Table::cell(row, c.rec), 0),
            rec_yds: to_i64(Table::cell(row, c.rec_yds), 0),
            rec_td: to_i64(Table::cell(row, c.rec_td), 0),
            rec_long: to_i64(Table::cell(row, c.rec_long), 0),
            fumbles: to_i64(Table::cell(row, c.fumbles), 0),
            fumbles_lost: to_i64(Table::cell(row, c.fumbles_lost), 0),
        });
    }
    out
}
