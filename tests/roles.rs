use std::fs;
use std::path::PathBuf;

use boxstats::document::BoxscoreDocument;
use boxstats::extract::{RowFilter, extract_all};
use boxstats::game_id::GameId;
use boxstats::records::ReturnsRow;
use boxstats::roles::classify_roles;
use boxstats::store::{open_in_memory, save_game};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn classifies_every_persisted_player() {
    let mut conn = open_in_memory().expect("in-memory db");
    let raw = read_fixture("boxscore.html");
    let doc = BoxscoreDocument::from_html(&raw);
    let game_id = GameId::parse("202411030buf").expect("fixture game id");
    let mut game = extract_all(&doc, &game_id, &RowFilter::default());

    // Give one offensive player a return line so the batch sees a mixed role.
    game.returns.push(ReturnsRow {
        player: "Tyreek Hill".to_string(),
        team: "MIA".to_string(),
        punt_returns: 1,
        punt_return_yds: 9,
        punt_return_avg: 9.0,
        ..ReturnsRow::default()
    });
    save_game(&mut conn, &game).expect("save");

    let counts = classify_roles(&conn).expect("classify");
    // Allen, Cook, Tua offense; Bernard, Ramsey defense; Bass, Bailey,
    // Codrington, Berrios special teams; Hill mixed.
    assert_eq!(counts.offense, 3);
    assert_eq!(counts.defense, 2);
    assert_eq!(counts.special_teams, 4);
    assert_eq!(counts.mixed, 1);
    assert_eq!(counts.unknown, 0);
    assert_eq!(counts.total(), 10);

    let hill_role: String = conn
        .query_row(
            "SELECT role FROM player_game_stats WHERE player = 'Tyreek Hill'",
            [],
            |row| row.get(0),
        )
        .expect("hill role");
    assert_eq!(hill_role, "mixed");

    // Re-running over unchanged stats yields the same assignment.
    let again = classify_roles(&conn).expect("reclassify");
    assert_eq!(again.mixed, counts.mixed);
    assert_eq!(again.total(), counts.total());
}
