//! Canonical column names for a stat table.
//!
//! Resolution per header cell, in priority order: the machine-readable
//! `data-stat` attribute, the human-readable `aria-label`, visible text, and
//! finally a positional `col{n}` fallback. Tables with a stacked group row
//! (spanning several columns via `colspan`) get each detail name prefixed
//! with its covering group, so the passing `Yds` and rushing `Yds` columns
//! stay distinguishable when only visible text is available.

use crate::document::{HeaderCell, Table};

/// Dedicated name for the unlabeled home/away column.
pub const LOCATION_COLUMN: &str = "game_location";

/// Home/away indicated by the value of the location column: an empty cell is
/// a home game, the `@` marker an away game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLocation {
    Home,
    Away,
}

impl GameLocation {
    pub fn parse(cell: &str) -> GameLocation {
        if cell.trim() == "@" {
            GameLocation::Away
        } else {
            GameLocation::Home
        }
    }
}

/// Resolves one canonical name per detail column. For two-row headers the
/// last header row is the detail row and the one above it the group row.
pub fn resolve_headers(table: &Table) -> Vec<String> {
    let Some(detail) = table.header_rows.last() else {
        return Vec::new();
    };
    let groups = if table.header_rows.len() >= 2 {
        expand_groups(&table.header_rows[table.header_rows.len() - 2])
    } else {
        Vec::new()
    };

    detail
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let name = resolve_cell(cell, idx);
            match groups.get(idx) {
                Some(group) if cell.data_stat.is_none() && !group.is_empty() => {
                    format!("{group} {name}")
                }
                _ => name,
            }
        })
        .collect()
}

/// Position of a canonical name within resolved headers.
pub fn column_index(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn resolve_cell(cell: &HeaderCell, idx: usize) -> String {
    if let Some(stat) = non_placeholder(cell.data_stat.as_deref()) {
        return stat.to_string();
    }
    if let Some(label) = non_placeholder(cell.aria_label.as_deref()) {
        return label.to_string();
    }
    if let Some(text) = non_placeholder(Some(&cell.text)) {
        return text.to_string();
    }
    // Fully unlabeled columns carry the home/away marker on the source site.
    if cell.data_stat.is_none() && cell.aria_label.is_none() {
        return LOCATION_COLUMN.to_string();
    }
    format!("col{idx}")
}

/// Expands a group header row into one entry per covered column. Placeholder
/// group names expand to empty strings so they never prefix anything.
fn expand_groups(group_row: &[HeaderCell]) -> Vec<String> {
    let mut out = Vec::new();
    for cell in group_row {
        let name = non_placeholder(Some(&cell.text))
            .map(str::to_string)
            .unwrap_or_default();
        for _ in 0..cell.colspan {
            out.push(name.clone());
        }
    }
    out
}

fn non_placeholder(value: Option<&str>) -> Option<&str> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed == "\u{a0}" || trimmed.starts_with("Unnamed") {
        return None;
    }
    Some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::HeaderCell;

    fn text_cell(text: &str, colspan: usize) -> HeaderCell {
        HeaderCell {
            data_stat: None,
            aria_label: None,
            text: text.to_string(),
            colspan,
        }
    }

    #[test]
    fn data_stat_wins_over_text() {
        let table = Table {
            header_rows: vec![vec![HeaderCell {
                data_stat: Some("pass_yds".to_string()),
                aria_label: Some("Passing Yards".to_string()),
                text: "Yds".to_string(),
                colspan: 1,
            }]],
            rows: Vec::new(),
        };
        assert_eq!(resolve_headers(&table), vec!["pass_yds".to_string()]);
    }

    #[test]
    fn group_row_prefixes_repeated_detail_names() {
        let table = Table {
            header_rows: vec![
                vec![
                    text_cell("", 2),
                    text_cell("Passing", 2),
                    text_cell("Rushing", 2),
                ],
                vec![
                    text_cell("Player", 1),
                    text_cell("Tm", 1),
                    text_cell("Att", 1),
                    text_cell("Yds", 1),
                    text_cell("Att", 1),
                    text_cell("Yds", 1),
                ],
            ],
            rows: Vec::new(),
        };
        let headers = resolve_headers(&table);
        assert_eq!(
            headers,
            vec![
                "Player",
                "Tm",
                "Passing Att",
                "Passing Yds",
                "Rushing Att",
                "Rushing Yds"
            ]
        );
    }

    #[test]
    fn unlabeled_column_resolves_to_game_location() {
        let table = Table {
            header_rows: vec![vec![
                text_cell("Week", 1),
                text_cell("", 1),
                text_cell("Opp", 1),
            ]],
            rows: Vec::new(),
        };
        let headers = resolve_headers(&table);
        assert_eq!(headers[1], LOCATION_COLUMN);
        assert_eq!(GameLocation::parse(""), GameLocation::Home);
        assert_eq!(GameLocation::parse("@"), GameLocation::Away);
    }
}
