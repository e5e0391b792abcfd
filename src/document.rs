//! Queryable boxscore document.
//!
//! The source site hides most stat tables inside HTML comment nodes. Parsing
//! promotes every comment payload that looks like markup into a fragment tree
//! kept alongside the main document, so table lookup works the same either
//! way. Located tables are materialized into owned cell text up front; the
//! extractors never touch the raw DOM.

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

pub struct BoxscoreDocument {
    main: Html,
    fragments: Vec<Html>,
}

/// A located stat table, reduced to trimmed text and the per-cell attributes
/// the header resolver cares about.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub header_rows: Vec<Vec<HeaderCell>>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct HeaderCell {
    pub data_stat: Option<String>,
    pub aria_label: Option<String>,
    pub text: String,
    pub colspan: usize,
}

impl BoxscoreDocument {
    pub fn from_html(raw: &str) -> BoxscoreDocument {
        let main = Html::parse_document(raw);
        let mut fragments = Vec::new();
        for node in main.tree.nodes() {
            if let Node::Comment(comment) = node.value() {
                let payload: &str = comment;
                if payload.contains("<table") {
                    fragments.push(Html::parse_fragment(payload));
                }
            }
        }
        BoxscoreDocument { main, fragments }
    }

    /// First table with the given element id, searching the main tree before
    /// any comment-promoted fragment.
    pub fn find_table(&self, table_id: &str) -> Option<Table> {
        let selector = Selector::parse(&format!("table#{table_id}")).ok()?;
        self.select_first(&selector).map(materialize_table)
    }

    /// First table nested under `div#{container_id}`. Several categories have
    /// no stable table id and are located by parent container instead.
    pub fn find_table_in_container(&self, container_id: &str) -> Option<Table> {
        let selector = Selector::parse(&format!("div#{container_id} table")).ok()?;
        self.select_first(&selector).map(materialize_table)
    }

    fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        if let Some(el) = self.main.select(selector).next() {
            return Some(el);
        }
        for fragment in &self.fragments {
            if let Some(el) = fragment.select(selector).next() {
                return Some(el);
            }
        }
        None
    }
}

impl Table {
    /// Cell text at `idx`, or `""` for short rows.
    pub fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
        row.get(idx).map(String::as_str).unwrap_or("")
    }
}

fn materialize_table(table: ElementRef<'_>) -> Table {
    let tr_sel = Selector::parse("tr").expect("static selector");
    let cell_sel = Selector::parse("th, td").expect("static selector");

    let mut header_rows = Vec::new();
    let mut rows = Vec::new();

    for tr in table.select(&tr_sel) {
        let in_header = tr
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| el.value().name() == "thead");
        if in_header {
            let cells = tr
                .select(&cell_sel)
                .map(|cell| HeaderCell {
                    data_stat: cell.value().attr("data-stat").map(str::to_string),
                    aria_label: cell.value().attr("aria-label").map(str::to_string),
                    text: cell_text(cell),
                    colspan: cell
                        .value()
                        .attr("colspan")
                        .and_then(|v| v.parse::<usize>().ok())
                        .unwrap_or(1)
                        .max(1),
                })
                .collect::<Vec<_>>();
            if !cells.is_empty() {
                header_rows.push(cells);
            }
        } else {
            let cells = tr.select(&cell_sel).map(cell_text).collect::<Vec<_>>();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
    }

    Table { header_rows, rows }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <table id="scoring"><tbody><tr><td>1</td><td>9:04</td></tr></tbody></table>
        <div id="all_hidden">
        <!--
        <div id="div_hidden"><table id="hidden_stats">
        <thead><tr><th data-stat="player" colspan="2">Player</th></tr></thead>
        <tbody><tr><th>A. Name</th><td>5</td></tr></tbody>
        </table></div>
        -->
        </div>
        </body></html>
    "#;

    #[test]
    fn finds_table_in_main_tree() {
        let doc = BoxscoreDocument::from_html(PAGE);
        let table = doc.find_table("scoring").expect("scoring table");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(Table::cell(&table.rows[0], 1), "9:04");
    }

    #[test]
    fn finds_comment_promoted_table() {
        let doc = BoxscoreDocument::from_html(PAGE);
        let table = doc.find_table("hidden_stats").expect("promoted table");
        assert_eq!(table.header_rows.len(), 1);
        assert_eq!(table.header_rows[0][0].data_stat.as_deref(), Some("player"));
        assert_eq!(table.header_rows[0][0].colspan, 2);
        assert_eq!(Table::cell(&table.rows[0], 0), "A. Name");
    }

    #[test]
    fn finds_table_by_container() {
        let doc = BoxscoreDocument::from_html(PAGE);
        assert!(doc.find_table_in_container("div_hidden").is_some());
        assert!(doc.find_table_in_container("div_missing").is_none());
        assert!(doc.find_table("missing").is_none());
    }
}
