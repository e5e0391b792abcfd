//! Game officials table (`officials`): position/name pairs with no tbody and
//! no usable header attributes. Header rows and implausibly short values are
//! filtered out.

use crate::document::{BoxscoreDocument, Table};
use crate::records::OfficialAssignment;

use super::RowFilter;

const TABLE_ID: &str = "officials";
const TITLE_ROW_LABEL: &str = "Officials";

pub fn extract(doc: &BoxscoreDocument, filter: &RowFilter) -> Vec<OfficialAssignment> {
    let Some(table) = doc.find_table(TABLE_ID) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for row in &table.rows {
        if row.len() < 2 {
            continue;
        }
        let position = Table::cell(row, 0);
        let name = Table::cell(row, 1);
        if position == TITLE_ROW_LABEL
            || position.len() <= filter.min_official_field_len
            || name.len() <= filter.min_official_field_len
        {
            continue;
        }
        out.push(OfficialAssignment {
            position: position.to_string(),
            name: name.to_string(),
        });
    }
    out
}
