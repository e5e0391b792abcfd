//! Scoring timeline table (`scoring`). Append-only, source order preserved.
//! The quarter cell is only printed on the first event of each quarter, so a
//! blank or unparseable quarter defaults to 1 instead of dropping the event;
//! missing running scores default to 0.

use crate::coerce::to_i64;
use crate::document::{BoxscoreDocument, Table};
use crate::records::ScoringEvent;

const TABLE_ID: &str = "scoring";
const MIN_CELLS: usize = 6;

struct ScoringColumns {
    quarter: usize,
    clock: usize,
    team: usize,
    description: usize,
    home_score: usize,
    away_score: usize,
}

const COLUMNS: ScoringColumns = ScoringColumns {
    quarter: 0,
    clock: 1,
    team: 2,
    description: 3,
    home_score: 4,
    away_score: 5,
};

pub fn extract(doc: &BoxscoreDocument) -> Vec<ScoringEvent> {
    let Some(table) = doc.find_table(TABLE_ID) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for row in &table.rows {
        if row.len() < MIN_CELLS {
            continue;
        }
        let clock = Table::cell(row, COLUMNS.clock);
        let team = Table::cell(row, COLUMNS.team);
        let description = Table::cell(row, COLUMNS.description);
        if clock.is_empty() || team.is_empty() || description.is_empty() {
            continue;
        }
        out.push(ScoringEvent {
            quarter: to_i64(Table::cell(row, COLUMNS.quarter), 1).max(1),
            clock: clock.to_string(),
            team: team.to_string(),
            description: description.to_string(),
            home_score: to_i64(Table::cell(row, COLUMNS.home_score), 0),
            away_score: to_i64(Table::cell(row, COLUMNS.away_score), 0),
        });
    }
    out
}
