//! Team totals table (`team_stats`): stat-name keyed rows with one value
//! column per team, several of them compound `A-B` cells that are split and
//! coerced part by part. Exactly two teams are expected; anything else means
//! the header region changed and the category comes back empty.

use crate::coerce::{compound_i64, to_i64};
use crate::document::{BoxscoreDocument, Table};
use crate::records::TeamTotalsRow;

use super::RowFilter;

const TABLE_ID: &str = "team_stats";

const STAT_FIRST_DOWNS: &str = "First Downs";
const STAT_RUSHING: &str = "Rush-Yds-TDs";
const STAT_PASSING: &str = "Cmp-Att-Yd-TD-INT";
const STAT_TOTAL_YARDS: &str = "Total Yards";
const STAT_TURNOVERS: &str = "Turnovers";
const STAT_PENALTIES: &str = "Penalties-Yards";
const STAT_THIRD_DOWN: &str = "Third Down Conv.";
const STAT_FOURTH_DOWN: &str = "Fourth Down Conv.";
const STAT_POSSESSION: &str = "Time of Possession";

pub fn extract(doc: &BoxscoreDocument, filter: &RowFilter) -> Vec<TeamTotalsRow> {
    let Some(table) = doc.find_table(TABLE_ID) else {
        return Vec::new();
    };

    let teams = team_codes(&table, filter);
    if teams.len() != 2 {
        return Vec::new();
    }

    // (stat name, [first team value, second team value])
    let mut stats: Vec<(String, [String; 2])> = Vec::new();
    for row in &table.rows {
        if row.len() < 3 {
            continue;
        }
        let name = Table::cell(row, 0);
        if name.is_empty() {
            continue;
        }
        stats.push((
            name.to_string(),
            [
                Table::cell(row, 1).to_string(),
                Table::cell(row, 2).to_string(),
            ],
        ));
    }

    teams
        .into_iter()
        .enumerate()
        .map(|(idx, team)| build_row(team, idx, &stats))
        .collect()
}

/// Team codes from the header row; the leading stat-name column is blank.
fn team_codes(table: &Table, filter: &RowFilter) -> Vec<String> {
    let Some(header) = table.header_rows.last() else {
        return Vec::new();
    };
    header
        .iter()
        .map(|cell| cell.text.trim().to_string())
        .filter(|text| filter.is_team_code(text))
        .collect()
}

fn build_row(team: String, idx: usize, stats: &[(String, [String; 2])]) -> TeamTotalsRow {
    let value = |name: &str| -> &str {
        stats
            .iter()
            .find(|(stat, _)| stat == name)
            .map(|(_, values)| values[idx].as_str())
            .unwrap_or("")
    };

    let rushing = value(STAT_RUSHING);
    let passing = value(STAT_PASSING);
    let penalties = value(STAT_PENALTIES);
    let third_down = value(STAT_THIRD_DOWN);
    let fourth_down = value(STAT_FOURTH_DOWN);

    TeamTotalsRow {
        team,
        first_downs: to_i64(value(STAT_FIRST_DOWNS), 0),
        rush_att: compound_i64(rushing, 0),
        rush_yds: compound_i64(rushing, 1),
        rush_td: compound_i64(rushing, 2),
        pass_cmp: compound_i64(passing, 0),
        pass_att: compound_i64(passing, 1),
        pass_yds: compound_i64(passing, 2),
        pass_td: compound_i64(passing, 3),
        pass_int: compound_i64(passing, 4),
        total_yds: to_i64(value(STAT_TOTAL_YARDS), 0),
        turnovers: to_i64(value(STAT_TURNOVERS), 0),
        penalties: compound_i64(penalties, 0),
        penalty_yds: compound_i64(penalties, 1),
        third_down_made: compound_i64(third_down, 0),
        third_down_att: compound_i64(third_down, 1),
        fourth_down_made: compound_i64(fourth_down, 0),
        fourth_down_att: compound_i64(fourth_down, 1),
        time_of_possession: value(STAT_POSSESSION).to_string(),
    }
}
