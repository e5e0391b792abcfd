use chrono::NaiveDate;

use boxstats::game_id::GameId;

#[test]
fn parses_canonical_token() {
    let id = GameId::parse("202411030buf").expect("valid token");
    assert_eq!(id.date(), NaiveDate::from_ymd_opt(2024, 11, 3).expect("date"));
    assert_eq!(id.sequence(), 0);
    assert_eq!(id.home_team(), "buf");
    assert!(!id.is_doubleheader());
    assert_eq!(id.season(), 2024);
    assert_eq!(
        id.url(),
        "https://www.pro-football-reference.com/boxscores/202411030buf.htm"
    );
}

#[test]
fn from_parts_round_trips_through_parse() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 12).expect("date");
    let id = GameId::from_parts(date, "KC", 1).expect("valid parts");
    assert_eq!(id.token(), "202501121kc");
    assert!(id.is_doubleheader());
    // January games belong to the prior season year.
    assert_eq!(id.season(), 2024);

    let reparsed = GameId::parse(id.token()).expect("reparse");
    assert_eq!(reparsed, id);
}

#[test]
fn team_code_is_lowercased() {
    let id = GameId::parse("202411030BUF").expect("valid token");
    assert_eq!(id.home_team(), "buf");
}

#[test]
fn malformed_tokens_are_rejected() {
    // Too short / too long.
    assert!(GameId::parse("20241103buf").is_none());
    assert!(GameId::parse("202411030buffs").is_none());
    // Impossible calendar date.
    assert!(GameId::parse("202413450buf").is_none());
    // Non-digit sequence slot.
    assert!(GameId::parse("20241103xbuf").is_none());
    // Non-alphabetic team code.
    assert!(GameId::parse("2024110300b2f").is_none());
    assert!(GameId::parse("").is_none());
}

#[test]
fn from_parts_rejects_bad_inputs() {
    let date = NaiveDate::from_ymd_opt(2024, 11, 3).expect("date");
    assert!(GameId::from_parts(date, "b", 0).is_err());
    assert!(GameId::from_parts(date, "buffalo", 0).is_err());
    assert!(GameId::from_parts(date, "b2f", 0).is_err());
    assert!(GameId::from_parts(date, "buf", 12).is_err());
}
