use std::fs;
use std::path::PathBuf;

use boxstats::document::BoxscoreDocument;
use boxstats::extract::{RowFilter, extract_all};
use boxstats::game_id::GameId;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn fixture_game() -> boxstats::records::ExtractedGame {
    let raw = read_fixture("boxscore.html");
    let doc = BoxscoreDocument::from_html(&raw);
    let game_id = GameId::parse("202411030buf").expect("fixture game id");
    extract_all(&doc, &game_id, &RowFilter::default())
}

#[test]
fn extracts_offense_rows_and_filters_noise() {
    let game = fixture_game();
    // Header repeat and Team Totals rows are dropped.
    assert_eq!(game.offense.len(), 4);

    let allen = game
        .offense
        .iter()
        .find(|row| row.player == "Josh Allen")
        .expect("Josh Allen offense row");
    assert_eq!(allen.team, "BUF");
    assert_eq!(allen.pass_cmp, 18);
    assert_eq!(allen.pass_att, 23);
    assert_eq!(allen.pass_yds, 219);
    assert_eq!(allen.pass_td, 1);
    assert_eq!(allen.pass_sacked, 1);
    assert_eq!(allen.pass_rating, 112.0);
    assert_eq!(allen.rush_att, 6);
    assert_eq!(allen.rush_yds, 44);
    assert_eq!(allen.rush_td, 1);

    let cook = game
        .offense
        .iter()
        .find(|row| row.player == "James Cook")
        .expect("James Cook offense row");
    assert_eq!(cook.rush_att, 14);
    assert_eq!(cook.targets, 3);
    assert_eq!(cook.receptions, 2);
    // Blank rating cell falls back to the category default.
    assert_eq!(cook.pass_rating, 0.0);
}

#[test]
fn extracts_comment_hidden_defense_table() {
    let game = fixture_game();
    assert_eq!(game.defense.len(), 2);

    let bernard = game
        .defense
        .iter()
        .find(|row| row.player == "Terrel Bernard")
        .expect("Terrel Bernard defense row");
    assert_eq!(bernard.def_int, 1);
    assert_eq!(bernard.def_int_yds, 23);
    assert_eq!(bernard.passes_defended, 2);
    assert_eq!(bernard.sacks, 0.5);
    assert_eq!(bernard.tackles_combined, 11);
    assert_eq!(bernard.tackles_solo, 7);
    assert_eq!(bernard.fumbles_forced, 1);

    let ramsey = game
        .defense
        .iter()
        .find(|row| row.player == "Jalen Ramsey")
        .expect("Jalen Ramsey defense row");
    assert_eq!(ramsey.sacks, 0.0);
    assert_eq!(ramsey.fumbles_recovered, 1);
}

#[test]
fn extracts_returns_rows() {
    let game = fixture_game();
    assert_eq!(game.returns.len(), 2);

    let codrington = &game.returns[0];
    assert_eq!(codrington.player, "Brandon Codrington");
    assert_eq!(codrington.kick_returns, 3);
    assert_eq!(codrington.kick_return_yds, 74);
    assert_eq!(codrington.kick_return_avg, 24.7);
    assert_eq!(codrington.punt_returns, 2);
    assert_eq!(codrington.punt_return_long, 12);
}

#[test]
fn kicking_percentages_are_derived_from_attempts() {
    let game = fixture_game();
    assert_eq!(game.kicking.len(), 2);

    let bass = game
        .kicking
        .iter()
        .find(|row| row.player == "Tyler Bass")
        .expect("Tyler Bass kicking row");
    assert_eq!(bass.xp_made, 3);
    assert_eq!(bass.xp_att, 4);
    assert_eq!(bass.xp_pct, 75.0);
    assert_eq!(bass.fg_made, 2);
    assert_eq!(bass.fg_att, 3);
    assert_eq!(bass.fg_pct, 66.7);

    let bailey = game
        .kicking
        .iter()
        .find(|row| row.player == "Jake Bailey")
        .expect("Jake Bailey kicking row");
    // 0/0 attempts is a valid state, not a division by zero.
    assert_eq!(bailey.xp_pct, 0.0);
    assert_eq!(bailey.fg_pct, 0.0);
    assert_eq!(bailey.punts, 4);
    assert_eq!(bailey.punt_avg, 47.0);
}

#[test]
fn advanced_passing_strips_percent_signs() {
    let game = fixture_game();
    assert_eq!(game.advanced_passing.len(), 2);

    let allen = game
        .advanced_passing
        .iter()
        .find(|row| row.player == "Josh Allen")
        .expect("Josh Allen advanced passing row");
    assert_eq!(allen.cmp, 18);
    assert_eq!(allen.first_downs, 12);
    assert_eq!(allen.first_down_pct, 52.2);
    assert_eq!(allen.intended_air_yds, 180);
    assert_eq!(allen.drop_pct, 4.3);
    assert_eq!(allen.pressures, 8);
    assert_eq!(allen.pressure_pct, 26.1);
    assert_eq!(allen.scrambles, 2);
    assert_eq!(allen.yds_per_scramble, 9.5);
}

#[test]
fn advanced_rushing_skips_zero_attempt_rows() {
    let game = fixture_game();
    assert_eq!(game.advanced_rushing.len(), 2);
    assert!(
        game.advanced_rushing
            .iter()
            .all(|row| row.player != "Tua Tagovailoa")
    );

    let cook = game
        .advanced_rushing
        .iter()
        .find(|row| row.player == "James Cook")
        .expect("James Cook advanced rushing row");
    assert_eq!(cook.att, 14);
    assert_eq!(cook.yds_before_contact, 40);
    assert_eq!(cook.yds_after_contact_per_att, 3.4);
    assert_eq!(cook.broken_tackles, 3);
}

#[test]
fn team_totals_split_compound_cells() {
    let game = fixture_game();
    assert_eq!(game.team_totals.len(), 2);

    let mia = &game.team_totals[0];
    assert_eq!(mia.team, "MIA");
    assert_eq!(mia.first_downs, 18);
    assert_eq!(mia.rush_att, 22);
    assert_eq!(mia.rush_yds, 92);
    assert_eq!(mia.rush_td, 1);
    assert_eq!(mia.pass_cmp, 24);
    assert_eq!(mia.pass_att, 35);
    assert_eq!(mia.pass_yds, 231);
    assert_eq!(mia.pass_int, 1);
    assert_eq!(mia.penalties, 7);
    assert_eq!(mia.penalty_yds, 55);
    assert_eq!(mia.third_down_made, 5);
    assert_eq!(mia.third_down_att, 12);
    assert_eq!(mia.time_of_possession, "28:44");

    let buf = &game.team_totals[1];
    assert_eq!(buf.team, "BUF");
    assert_eq!(buf.total_yds, 367);
    assert_eq!(buf.turnovers, 0);
    assert_eq!(buf.fourth_down_made, 0);
    assert_eq!(buf.fourth_down_att, 1);
}

#[test]
fn scoring_preserves_order_and_defaults_blank_quarters() {
    let game = fixture_game();
    assert_eq!(game.scoring.len(), 4);

    assert_eq!(game.scoring[0].quarter, 1);
    assert_eq!(game.scoring[0].clock, "9:04");
    assert_eq!(game.scoring[0].team, "MIA");

    // Quarter cell printed only on the first event of each quarter; the
    // blank continuation row keeps the default.
    assert_eq!(game.scoring[1].quarter, 1);
    assert_eq!(game.scoring[1].team, "BUF");

    assert_eq!(game.scoring[2].quarter, 2);
    assert_eq!(game.scoring[3].quarter, 4);
    assert_eq!(game.scoring[3].home_score, 27);
    assert_eq!(game.scoring[3].away_score, 30);
}

#[test]
fn officials_filter_title_and_short_rows() {
    let game = fixture_game();
    assert_eq!(game.officials.len(), 3);
    assert_eq!(game.officials[0].position, "Referee");
    assert_eq!(game.officials[0].name, "Shawn Hochuli");
    assert!(game.officials.iter().all(|o| o.position != "Officials"));
    assert!(game.officials.iter().all(|o| o.position != "--"));
}

#[test]
fn missing_tables_yield_empty_categories() {
    let doc = BoxscoreDocument::from_html("<html><body><p>postponed</p></body></html>");
    let game_id = GameId::parse("202411030buf").expect("game id");
    let game = extract_all(&doc, &game_id, &RowFilter::default());
    assert_eq!(game.player_row_count(), 0);
    assert!(game.team_totals.is_empty());
    assert!(game.scoring.is_empty());
    assert!(game.officials.is_empty());
}
