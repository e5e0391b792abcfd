use std::fs;
use std::path::PathBuf;

use rusqlite::Connection;

use boxstats::document::BoxscoreDocument;
use boxstats::extract::{RowFilter, extract_all};
use boxstats::game_id::GameId;
use boxstats::records::{DefenseRow, ExtractedGame, OfficialAssignment};
use boxstats::store::{open_in_memory, pending_game_ids, save_game, seed_games};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn fixture_game() -> ExtractedGame {
    let raw = read_fixture("boxscore.html");
    let doc = BoxscoreDocument::from_html(&raw);
    let game_id = GameId::parse("202411030buf").expect("fixture game id");
    extract_all(&doc, &game_id, &RowFilter::default())
}

fn count(conn: &Connection, sql: &str) -> i64 {
    conn.query_row(sql, [], |row| row.get(0))
        .expect("count query")
}

#[test]
fn saving_twice_is_idempotent() {
    let mut conn = open_in_memory().expect("in-memory db");
    let game = fixture_game();

    save_game(&mut conn, &game).expect("first save");
    let players = count(&conn, "SELECT COUNT(*) FROM player_game_stats");
    let teams = count(&conn, "SELECT COUNT(*) FROM team_game_stats");
    let scoring = count(&conn, "SELECT COUNT(*) FROM scoring_events");
    let officials = count(&conn, "SELECT COUNT(*) FROM game_officials");

    save_game(&mut conn, &game).expect("second save");
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM player_game_stats"), players);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM team_game_stats"), teams);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM scoring_events"), scoring);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM game_officials"), officials);
}

#[test]
fn categories_merge_into_one_player_row() {
    let mut conn = open_in_memory().expect("in-memory db");
    save_game(&mut conn, &fixture_game()).expect("save");

    // Josh Allen appears in offense, advanced passing and advanced rushing;
    // the stats land in a single row.
    let (rows, pass_cmp, adv_pass_cmp, adv_rush_att): (i64, i64, i64, i64) = conn
        .query_row(
            "SELECT COUNT(*), MAX(pass_cmp), MAX(adv_pass_cmp), MAX(adv_rush_att)
             FROM player_game_stats WHERE player = 'Josh Allen'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .expect("allen row");
    assert_eq!(rows, 1);
    assert_eq!(pass_cmp, 18);
    assert_eq!(adv_pass_cmp, 18);
    assert_eq!(adv_rush_att, 6);

    // A defense-only player has null offense columns, not zeros.
    let pass_att: Option<i64> = conn
        .query_row(
            "SELECT pass_att FROM player_game_stats WHERE player = 'Terrel Bernard'",
            [],
            |row| row.get(0),
        )
        .expect("bernard row");
    assert_eq!(pass_att, None);
}

#[test]
fn defense_resave_leaves_offense_columns_intact() {
    let mut conn = open_in_memory().expect("in-memory db");
    let game = fixture_game();
    save_game(&mut conn, &game).expect("full save");

    // Re-save only a corrected defense line for a player who already has an
    // offense line in the same game.
    let mut partial = ExtractedGame::empty(game.game_id.clone());
    partial.defense.push(DefenseRow {
        player: "Josh Allen".to_string(),
        team: "BUF".to_string(),
        tackles_combined: 1,
        tackles_solo: 1,
        ..DefenseRow::default()
    });
    save_game(&mut conn, &partial).expect("partial save");

    let (rows, pass_yds, tackles): (i64, i64, i64) = conn
        .query_row(
            "SELECT COUNT(*), MAX(pass_yds), MAX(tackles_combined)
             FROM player_game_stats WHERE player = 'Josh Allen'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .expect("allen row");
    assert_eq!(rows, 1);
    assert_eq!(pass_yds, 219);
    assert_eq!(tackles, 1);
}

#[test]
fn officials_overwrite_per_game_and_position() {
    let mut conn = open_in_memory().expect("in-memory db");
    let game = fixture_game();
    save_game(&mut conn, &game).expect("save");

    let mut corrected = ExtractedGame::empty(game.game_id.clone());
    corrected.officials.push(OfficialAssignment {
        position: "Referee".to_string(),
        name: "Brad Allen".to_string(),
    });
    save_game(&mut conn, &corrected).expect("corrected save");

    assert_eq!(count(&conn, "SELECT COUNT(*) FROM game_officials"), 3);
    let referee: String = conn
        .query_row(
            "SELECT name FROM game_officials WHERE position = 'Referee'",
            [],
            |row| row.get(0),
        )
        .expect("referee row");
    assert_eq!(referee, "Brad Allen");
}

#[test]
fn scoring_timeline_is_replaced_not_duplicated() {
    let mut conn = open_in_memory().expect("in-memory db");
    let game = fixture_game();

    save_game(&mut conn, &game).expect("first save");
    save_game(&mut conn, &game).expect("second save");
    assert_eq!(
        count(&conn, "SELECT COUNT(*) FROM scoring_events"),
        game.scoring.len() as i64
    );

    let quarters: Vec<i64> = conn
        .prepare("SELECT quarter FROM scoring_events ORDER BY rowid")
        .expect("prepare")
        .query_map([], |row| row.get(0))
        .expect("query")
        .collect::<Result<_, _>>()
        .expect("decode");
    assert_eq!(quarters, vec![1, 1, 2, 4]);
}

#[test]
fn seeded_games_leave_pending_once_collected() {
    let mut conn = open_in_memory().expect("in-memory db");
    let ids = vec![
        GameId::parse("202411030buf").expect("id"),
        GameId::parse("202411100det").expect("id"),
        GameId::parse("202501120kc").expect("id"),
    ];
    assert_eq!(seed_games(&conn, &ids).expect("seed"), 3);
    // Seeding again inserts nothing.
    assert_eq!(seed_games(&conn, &ids).expect("reseed"), 0);

    let pending = pending_game_ids(&conn, None, None).expect("pending");
    assert_eq!(pending.len(), 3);
    assert_eq!(pending[0].token(), "202411030buf");

    let season_2024 = pending_game_ids(&conn, Some(2024), None).expect("pending by season");
    assert_eq!(season_2024.len(), 3);
    let season_2023 = pending_game_ids(&conn, Some(2023), None).expect("pending by season");
    assert!(season_2023.is_empty());

    let capped = pending_game_ids(&conn, None, Some(1)).expect("pending capped");
    assert_eq!(capped.len(), 1);

    save_game(&mut conn, &fixture_game()).expect("save");
    let pending = pending_game_ids(&conn, None, None).expect("pending after save");
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|id| id.token() != "202411030buf"));
}
