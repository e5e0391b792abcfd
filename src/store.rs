//! SQLite persistence for extracted boxscores.
//!
//! Player stats live in one wide sparse table keyed by `(game_id, player,
//! team)`. Each category writer only touches the columns it owns, so a
//! defensive line landing after an offensive line merges into the same row
//! instead of clobbering it. Re-saving the same game is a no-op beyond
//! refreshed `updated_at` stamps.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, Transaction, params};

use crate::game_id::GameId;
use crate::records::{
    AdvancedPassingRow, AdvancedRushingRow, DefenseRow, ExtractedGame, KickingRow,
    OfficialAssignment, ReturnsRow, TeamTotalsRow,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SaveCounts {
    pub player_rows: usize,
    pub team_rows: usize,
    pub scoring_events: usize,
    pub officials: usize,
}

pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let conn =
        Connection::open(path).with_context(|| format!("open sqlite db {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("open in-memory sqlite db")?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        CREATE TABLE IF NOT EXISTS games (
            game_id TEXT PRIMARY KEY,
            game_date TEXT NOT NULL,
            season INTEGER NOT NULL,
            sequence INTEGER NOT NULL,
            home_team TEXT NOT NULL,
            collected_at TEXT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_games_season ON games(season);

        CREATE TABLE IF NOT EXISTS player_game_stats (
            game_id TEXT NOT NULL,
            player TEXT NOT NULL,
            team TEXT NOT NULL,
            pass_cmp INTEGER NULL,
            pass_att INTEGER NULL,
            pass_yds INTEGER NULL,
            pass_td INTEGER NULL,
            pass_int INTEGER NULL,
            pass_sacked INTEGER NULL,
            pass_sacked_yds INTEGER NULL,
            pass_long INTEGER NULL,
            pass_rating REAL NULL,
            rush_att INTEGER NULL,
            rush_yds INTEGER NULL,
            rush_td INTEGER NULL,
            rush_long INTEGER NULL,
            targets INTEGER NULL,
            receptions INTEGER NULL,
            rec_yds INTEGER NULL,
            rec_td INTEGER NULL,
            rec_long INTEGER NULL,
            fumbles INTEGER NULL,
            fumbles_lost INTEGER NULL,
            def_int INTEGER NULL,
            def_int_yds INTEGER NULL,
            def_int_td INTEGER NULL,
            def_int_long INTEGER NULL,
            passes_defended INTEGER NULL,
            sacks REAL NULL,
            tackles_combined INTEGER NULL,
            tackles_solo INTEGER NULL,
            tackles_assists INTEGER NULL,
            tackles_loss INTEGER NULL,
            qb_hits INTEGER NULL,
            fumbles_recovered INTEGER NULL,
            fumble_return_yds INTEGER NULL,
            fumble_return_td INTEGER NULL,
            fumbles_forced INTEGER NULL,
            kick_returns INTEGER NULL,
            kick_return_yds INTEGER NULL,
            kick_return_avg REAL NULL,
            kick_return_td INTEGER NULL,
            kick_return_long INTEGER NULL,
            punt_returns INTEGER NULL,
            punt_return_yds INTEGER NULL,
            punt_return_avg REAL NULL,
            punt_return_td INTEGER NULL,
            punt_return_long INTEGER NULL,
            xp_made INTEGER NULL,
            xp_att INTEGER NULL,
            xp_pct REAL NULL,
            fg_made INTEGER NULL,
            fg_att INTEGER NULL,
            fg_pct REAL NULL,
            punts INTEGER NULL,
            punt_yds INTEGER NULL,
            punt_avg REAL NULL,
            punt_long INTEGER NULL,
            adv_pass_cmp INTEGER NULL,
            adv_pass_att INTEGER NULL,
            adv_pass_yds INTEGER NULL,
            adv_pass_first_downs INTEGER NULL,
            adv_pass_first_down_pct REAL NULL,
            intended_air_yds INTEGER NULL,
            intended_air_yds_per_att REAL NULL,
            completed_air_yds INTEGER NULL,
            completed_air_yds_per_cmp REAL NULL,
            completed_air_yds_per_att REAL NULL,
            yards_after_catch INTEGER NULL,
            yards_after_catch_per_cmp REAL NULL,
            drops INTEGER NULL,
            drop_pct REAL NULL,
            bad_throws INTEGER NULL,
            bad_throw_pct REAL NULL,
            adv_pass_sacks INTEGER NULL,
            blitzes INTEGER NULL,
            hurries INTEGER NULL,
            qb_hits_taken INTEGER NULL,
            pressures INTEGER NULL,
            pressure_pct REAL NULL,
            scrambles INTEGER NULL,
            yds_per_scramble REAL NULL,
            adv_rush_att INTEGER NULL,
            adv_rush_yds INTEGER NULL,
            adv_rush_td INTEGER NULL,
            adv_rush_first_downs INTEGER NULL,
            yds_before_contact INTEGER NULL,
            yds_before_contact_per_att REAL NULL,
            yds_after_contact INTEGER NULL,
            yds_after_contact_per_att REAL NULL,
            broken_tackles INTEGER NULL,
            att_per_broken_tackle REAL NULL,
            role TEXT NOT NULL DEFAULT 'unknown',
            updated_at TEXT NOT NULL,
            UNIQUE(game_id, player, team)
        );
        CREATE INDEX IF NOT EXISTS idx_player_stats_game ON player_game_stats(game_id);
        CREATE INDEX IF NOT EXISTS idx_player_stats_player ON player_game_stats(player);

        CREATE TABLE IF NOT EXISTS team_game_stats (
            game_id TEXT NOT NULL,
            team TEXT NOT NULL,
            first_downs INTEGER NOT NULL,
            rush_att INTEGER NOT NULL,
            rush_yds INTEGER NOT NULL,
            rush_td INTEGER NOT NULL,
            pass_cmp INTEGER NOT NULL,
            pass_att INTEGER NOT NULL,
            pass_yds INTEGER NOT NULL,
            pass_td INTEGER NOT NULL,
            pass_int INTEGER NOT NULL,
            total_yds INTEGER NOT NULL,
            turnovers INTEGER NOT NULL,
            penalties INTEGER NOT NULL,
            penalty_yds INTEGER NOT NULL,
            third_down_made INTEGER NOT NULL,
            third_down_att INTEGER NOT NULL,
            fourth_down_made INTEGER NOT NULL,
            fourth_down_att INTEGER NOT NULL,
            time_of_possession TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(game_id, team)
        );

        CREATE TABLE IF NOT EXISTS scoring_events (
            game_id TEXT NOT NULL,
            quarter INTEGER NOT NULL,
            clock TEXT NOT NULL,
            team TEXT NOT NULL,
            description TEXT NOT NULL,
            home_score INTEGER NOT NULL,
            away_score INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_scoring_game ON scoring_events(game_id);

        CREATE TABLE IF NOT EXISTS game_officials (
            game_id TEXT NOT NULL,
            position TEXT NOT NULL,
            name TEXT NOT NULL,
            UNIQUE(game_id, position)
        );

        CREATE TABLE IF NOT EXISTS collection_runs (
            run_id INTEGER PRIMARY KEY AUTOINCREMENT,
            started_at TEXT NOT NULL,
            finished_at TEXT NULL,
            games_total INTEGER NOT NULL,
            games_succeeded INTEGER NOT NULL,
            player_rows INTEGER NOT NULL,
            errors_json TEXT NOT NULL
        );
        "#,
    )
    .context("create sqlite schema")?;
    Ok(())
}

/// Registers game identifiers without stats, so a later collection pass can
/// pick them up. Already-known games are left untouched.
pub fn seed_games(conn: &Connection, ids: &[GameId]) -> Result<usize> {
    let mut inserted = 0usize;
    for id in ids {
        inserted += conn
            .execute(
                "INSERT INTO games (game_id, game_date, season, sequence, home_team, collected_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, NULL)
                 ON CONFLICT(game_id) DO NOTHING",
                params![
                    id.token(),
                    id.date().to_string(),
                    id.season(),
                    id.sequence() as i64,
                    id.home_team(),
                ],
            )
            .context("seed game")?;
    }
    Ok(inserted)
}

/// Seeded games that have never had a boxscore saved, oldest first.
pub fn pending_game_ids(
    conn: &Connection,
    season: Option<i32>,
    limit: Option<usize>,
) -> Result<Vec<GameId>> {
    let mut sql = String::from(
        "SELECT game_id FROM games WHERE collected_at IS NULL",
    );
    if season.is_some() {
        sql.push_str(" AND season = ?1");
    }
    sql.push_str(" ORDER BY game_date ASC, game_id ASC");
    if let Some(limit) = limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }

    let mut stmt = conn.prepare(&sql).context("prepare pending games query")?;
    let mut out = Vec::new();
    let mut push_token = |token: String| {
        if let Some(id) = GameId::parse(&token) {
            out.push(id);
        }
    };
    if let Some(season) = season {
        let rows = stmt
            .query_map(params![season], |row| row.get::<_, String>(0))
            .context("query pending games")?;
        for row in rows {
            push_token(row.context("decode pending game id")?);
        }
    } else {
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .context("query pending games")?;
        for row in rows {
            push_token(row.context("decode pending game id")?);
        }
    }
    Ok(out)
}

/// Writes everything extracted from one boxscore inside a single transaction.
/// A failure in any category rolls back the whole game.
pub fn save_game(conn: &mut Connection, game: &ExtractedGame) -> Result<SaveCounts> {
    let now = Utc::now().to_rfc3339();
    let tx = conn.transaction().context("begin save transaction")?;
    let game_id = game.game_id.token().to_string();

    tx.execute(
        "INSERT INTO games (game_id, game_date, season, sequence, home_team, collected_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(game_id) DO UPDATE SET collected_at = excluded.collected_at",
        params![
            game_id,
            game.game_id.date().to_string(),
            game.game_id.season(),
            game.game_id.sequence() as i64,
            game.game_id.home_team(),
            now,
        ],
    )
    .context("upsert game row")?;

    let mut counts = SaveCounts::default();

    for row in &game.offense {
        tx.execute(
            "INSERT INTO player_game_stats (
                game_id, player, team,
                pass_cmp, pass_att, pass_yds, pass_td, pass_int,
                pass_sacked, pass_sacked_yds, pass_long, pass_rating,
                rush_att, rush_yds, rush_td, rush_long,
                targets, receptions, rec_yds, rec_td, rec_long,
                fumbles, fumbles_lost, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                      ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24)
            ON CONFLICT(game_id, player, team) DO UPDATE SET
                pass_cmp = excluded.pass_cmp,
                pass_att = excluded.pass_att,
                pass_yds = excluded.pass_yds,
                pass_td = excluded.pass_td,
                pass_int = excluded.pass_int,
                pass_sacked = excluded.pass_sacked,
                pass_sacked_yds = excluded.pass_sacked_yds,
                pass_long = excluded.pass_long,
                pass_rating = excluded.pass_rating,
                rush_att = excluded.rush_att,
                rush_yds = excluded.rush_yds,
                rush_td = excluded.rush_td,
                rush_long = excluded.rush_long,
                targets = excluded.targets,
                receptions = excluded.receptions,
                rec_yds = excluded.rec_yds,
                rec_td = excluded.rec_td,
                rec_long = excluded.rec_long,
                fumbles = excluded.fumbles,
                fumbles_lost = excluded.fumbles_lost,
                updated_at = excluded.updated_at",
            params![
                game_id,
                row.player,
                row.team,
                row.pass_cmp,
                row.pass_att,
                row.pass_yds,
                row.pass_td,
                row.pass_int,
                row.pass_sacked,
                row.pass_sacked_yds,
                row.pass_long,
                row.pass_rating,
                row.rush_att,
                row.rush_yds,
                row.rush_td,
                row.rush_long,
                row.targets,
                row.receptions,
                row.rec_yds,
                row.rec_td,
                row.rec_long,
                row.fumbles,
                row.fumbles_lost,
                now,
            ],
        )
        .context("upsert offense row")?;
        counts.player_rows += 1;
    }

    for row in &game.defense {
        merge_defense(&tx, &game_id, row, &now)?;
        counts.player_rows += 1;
    }
    for row in &game.returns {
        merge_returns(&tx, &game_id, row, &now)?;
        counts.player_rows += 1;
    }
    for row in &game.kicking {
        merge_kicking(&tx, &game_id, row, &now)?;
        counts.player_rows += 1;
    }
    for row in &game.advanced_passing {
        upsert_advanced_passing(&tx, &game_id, row, &now)?;
        counts.player_rows += 1;
    }
    for row in &game.advanced_rushing {
        upsert_advanced_rushing(&tx, &game_id, row, &now)?;
        counts.player_rows += 1;
    }
    for row in &game.team_totals {
        upsert_team_totals(&tx, &game_id, row, &now)?;
        counts.team_rows += 1;
    }

    // The scoring timeline has no natural unique key, so idempotence comes
    // from replacing the whole game's timeline.
    tx.execute(
        "DELETE FROM scoring_events WHERE game_id = ?1",
        params![game_id],
    )
    .context("clear scoring events")?;
    for event in &game.scoring {
        tx.execute(
            "INSERT INTO scoring_events (game_id, quarter, clock, team, description, home_score, away_score)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                game_id,
                event.quarter,
                event.clock,
                event.team,
                event.description,
                event.home_score,
                event.away_score,
            ],
        )
        .context("insert scoring event")?;
        counts.scoring_events += 1;
    }

    for official in &game.officials {
        upsert_official(&tx, &game_id, official)?;
        counts.officials += 1;
    }

    tx.commit().context("commit save transaction")?;
    Ok(counts)
}

fn merge_defense(tx: &Transaction<'_>, game_id: &str, row: &DefenseRow, now: &str) -> Result<()> {
    let changed = tx
        .execute(
            "UPDATE player_game_stats SET
                def_int = ?4, def_int_yds = ?5, def_int_td = ?6, def_int_long = ?7,
                passes_defended = ?8, sacks = ?9,
                tackles_combined = ?10, tackles_solo = ?11, tackles_assists = ?12,
                tackles_loss = ?13, qb_hits = ?14,
                fumbles_recovered = ?15, fumble_return_yds = ?16, fumble_return_td = ?17,
                fumbles_forced = ?18, updated_at = ?19
             WHERE game_id = ?1 AND player = ?2 AND team = ?3",
            params![
                game_id,
                row.player,
                row.team,
                row.def_int,
                row.def_int_yds,
                row.def_int_td,
                row.def_int_long,
                row.passes_defended,
                row.sacks,
                row.tackles_combined,
                row.tackles_solo,
                row.tackles_assists,
                row.tackles_loss,
                row.qb_hits,
                row.fumbles_recovered,
                row.fumble_return_yds,
                row.fumble_return_td,
                row.fumbles_forced,
                now,
            ],
        )
        .context("update defense columns")?;
    if changed == 0 {
        tx.execute(
            "INSERT INTO player_game_stats (
                game_id, player, team,
                def_int, def_int_yds, def_int_td, def_int_long,
                passes_defended, sacks,
                tackles_combined, tackles_solo, tackles_assists, tackles_loss, qb_hits,
                fumbles_recovered, fumble_return_yds, fumble_return_td, fumbles_forced,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                      ?15, ?16, ?17, ?18, ?19)",
            params![
                game_id,
                row.player,
                row.team,
                row.def_int,
                row.def_int_yds,
                row.def_int_td,
                row.def_int_long,
                row.passes_defended,
                row.sacks,
                row.tackles_combined,
                row.tackles_solo,
                row.tackles_assists,
                row.tackles_loss,
                row.qb_hits,
                row.fumbles_recovered,
                row.fumble_return_yds,
                row.fumble_return_td,
                row.fumbles_forced,
                now,
            ],
        )
        .context("insert defense row")?;
    }
    Ok(())
}

fn merge_returns(tx: &Transaction<'_>, game_id: &str, row: &ReturnsRow, now: &str) -> Result<()> {
    let changed = tx
        .execute(
            "UPDATE player_game_stats SET
                kick_returns = ?4, kick_return_yds = ?5, kick_return_avg = ?6,
                kick_return_td = ?7, kick_return_long = ?8,
                punt_returns = ?9, punt_return_yds = ?10, punt_return_avg = ?11,
                punt_return_td = ?12, punt_return_long = ?13, updated_at = ?14
             WHERE game_id = ?1 AND player = ?2 AND team = ?3",
            params![
                game_id,
                row.player,
                row.team,
                row.kick_returns,
                row.kick_return_yds,
                row.kick_return_avg,
                row.kick_return_td,
                row.kick_return_long,
                row.punt_returns,
                row.punt_return_yds,
                row.punt_return_avg,
                row.punt_return_td,
                row.punt_return_long,
                now,
            ],
        )
        .context("update returns columns")?;
    if changed == 0 {
        tx.execute(
            "INSERT INTO player_game_stats (
                game_id, player, team,
                kick_returns, kick_return_yds, kick_return_avg, kick_return_td, kick_return_long,
                punt_returns, punt_return_yds, punt_return_avg, punt_return_td, punt_return_long,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                game_id,
                row.player,
                row.team,
                row.kick_returns,
                row.kick_return_yds,
                row.kick_return_avg,
                row.kick_return_td,
                row.kick_return_long,
                row.punt_returns,
                row.punt_return_yds,
                row.punt_return_avg,
                row.punt_return_td,
                row.punt_return_long,
                now,
            ],
        )
        .context("insert returns row")?;
    }
    Ok(())
}

fn merge_kicking(tx: &Transaction<'_>, game_id: &str, row: &KickingRow, now: &str) -> Result<()> {
    let changed = tx
        .execute(
            "UPDATE player_game_stats SET
                xp_made = ?4, xp_att = ?5, xp_pct = ?6,
                fg_made = ?7, fg_att = ?8, fg_pct = ?9,
                punts = ?10, punt_yds = ?11, punt_avg = ?12, punt_long = ?13,
                updated_at = ?14
             WHERE game_id = ?1 AND player = ?2 AND team = ?3",
            params![
                game_id,
                row.player,
                row.team,
                row.xp_made,
                row.xp_att,
                row.xp_pct,
                row.fg_made,
                row.fg_att,
                row.fg_pct,
                row.punts,
                row.punt_yds,
                row.punt_avg,
                row.punt_long,
                now,
            ],
        )
        .context("update kicking columns")?;
    if changed == 0 {
        tx.execute(
            "INSERT INTO player_game_stats (
                game_id, player, team,
                xp_made, xp_att, xp_pct, fg_made, fg_att, fg_pct,
                punts, punt_yds, punt_avg, punt_long, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                game_id,
                row.player,
                row.team,
                row.xp_made,
                row.xp_att,
                row.xp_pct,
                row.fg_made,
                row.fg_att,
                row.fg_pct,
                row.punts,
                row.punt_yds,
                row.punt_avg,
                row.punt_long,
                now,
            ],
        )
        .context("insert kicking row")?;
    }
    Ok(())
}

fn upsert_advanced_passing(
    tx: &Transaction<'_>,
    game_id: &str,
    row: &AdvancedPassingRow,
    now: &str,
) -> Result<()> {
    tx.execute(
        "INSERT INTO player_game_stats (
            game_id, player, team,
            adv_pass_cmp, adv_pass_att, adv_pass_yds,
            adv_pass_first_downs, adv_pass_first_down_pct,
            intended_air_yds, intended_air_yds_per_att,
            completed_air_yds, completed_air_yds_per_cmp, completed_air_yds_per_att,
            yards_after_catch, yards_after_catch_per_cmp,
            drops, drop_pct, bad_throws, bad_throw_pct,
            adv_pass_sacks, blitzes, hurries, qb_hits_taken,
            pressures, pressure_pct, scrambles, yds_per_scramble,
            updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                  ?15, ?16, ?17, ?18, ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28)
        ON CONFLICT(game_id, player, team) DO UPDATE SET
            adv_pass_cmp = excluded.adv_pass_cmp,
            adv_pass_att = excluded.adv_pass_att,
            adv_pass_yds = excluded.adv_pass_yds,
            adv_pass_first_downs = excluded.adv_pass_first_downs,
            adv_pass_first_down_pct = excluded.adv_pass_first_down_pct,
            intended_air_yds = excluded.intended_air_yds,
            intended_air_yds_per_att = excluded.intended_air_yds_per_att,
            completed_air_yds = excluded.completed_air_yds,
            completed_air_yds_per_cmp = excluded.completed_air_yds_per_cmp,
            completed_air_yds_per_att = excluded.completed_air_yds_per_att,
            yards_after_catch = excluded.yards_after_catch,
            yards_after_catch_per_cmp = excluded.yards_after_catch_per_cmp,
            drops = excluded.drops,
            drop_pct = excluded.drop_pct,
            bad_throws = excluded.bad_throws,
            bad_throw_pct = excluded.bad_throw_pct,
            adv_pass_sacks = excluded.adv_pass_sacks,
            blitzes = excluded.blitzes,
            hurries = excluded.hurries,
            qb_hits_taken = excluded.qb_hits_taken,
            pressures = excluded.pressures,
            pressure_pct = excluded.pressure_pct,
            scrambles = excluded.scrambles,
            yds_per_scramble = excluded.yds_per_scramble,
            updated_at = excluded.updated_at",
        params![
            game_id,
            row.player,
            row.team,
            row.cmp,
            row.att,
            row.yds,
            row.first_downs,
            row.first_down_pct,
            row.intended_air_yds,
            row.intended_air_yds_per_att,
            row.completed_air_yds,
            row.completed_air_yds_per_cmp,
            row.completed_air_yds_per_att,
            row.yards_after_catch,
            row.yards_after_catch_per_cmp,
            row.drops,
            row.drop_pct,
            row.bad_throws,
            row.bad_throw_pct,
            row.sacks,
            row.blitzes,
            row.hurries,
            row.hits,
            row.pressures,
            row.pressure_pct,
            row.scrambles,
            row.yds_per_scramble,
            now,
        ],
    )
    .context("upsert advanced passing row")?;
    Ok(())
}

fn upsert_advanced_rushing(
    tx: &Transaction<'_>,
    game_id: &str,
    row: &AdvancedRushingRow,
    now: &str,
) -> Result<()> {
    tx.execute(
        "INSERT INTO player_game_stats (
            game_id, player, team,
            adv_rush_att, adv_rush_yds, adv_rush_td, adv_rush_first_downs,
            yds_before_contact, yds_before_contact_per_att,
            yds_after_contact, yds_after_contact_per_att,
            broken_tackles, att_per_broken_tackle, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
        ON CONFLICT(game_id, player, team) DO UPDATE SET
            adv_rush_att = excluded.adv_rush_att,
            adv_rush_yds = excluded.adv_rush_yds,
            adv_rush_td = excluded.adv_rush_td,
            adv_rush_first_downs = excluded.adv_rush_first_downs,
            yds_before_contact = excluded.yds_before_contact,
            yds_before_contact_per_att = excluded.yds_before_contact_per_att,
            yds_after_contact = excluded.yds_after_contact,
            yds_after_contact_per_att = excluded.yds_after_contact_per_att,
            broken_tackles = excluded.broken_tackles,
            att_per_broken_tackle = excluded.att_per_broken_tackle,
            updated_at = excluded.updated_at",
        params![
            game_id,
            row.player,
            row.team,
            row.att,
            row.yds,
            row.td,
            row.first_downs,
            row.yds_before_contact,
            row.yds_before_contact_per_att,
            row.yds_after_contact,
            row.yds_after_contact_per_att,
            row.broken_tackles,
            row.att_per_broken_tackle,
            now,
        ],
    )
    .context("upsert advanced rushing row")?;
    Ok(())
}

fn upsert_team_totals(
    tx: &Transaction<'_>,
    game_id: &str,
    row: &TeamTotalsRow,
    now: &str,
) -> Result<()> {
    tx.execute(
        "INSERT INTO team_game_stats (
            game_id, team, first_downs,
            rush_att, rush_yds, rush_td,
            pass_cmp, pass_att, pass_yds, pass_td, pass_int,
            total_yds, turnovers, penalties, penalty_yds,
            third_down_made, third_down_att, fourth_down_made, fourth_down_att,
            time_of_possession, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                  ?15, ?16, ?17, ?18, ?19, ?20, ?21)
        ON CONFLICT(game_id, team) DO UPDATE SET
            first_downs = excluded.first_downs,
            rush_att = excluded.rush_att,
            rush_yds = excluded.rush_yds,
            rush_td = excluded.rush_td,
            pass_cmp = excluded.pass_cmp,
            pass_att = excluded.pass_att,
            pass_yds = excluded.pass_yds,
            pass_td = excluded.pass_td,
            pass_int = excluded.pass_int,
            total_yds = excluded.total_yds,
            turnovers = excluded.turnovers,
            penalties = excluded.penalties,
            penalty_yds = excluded.penalty_yds,
            third_down_made = excluded.third_down_made,
            third_down_att = excluded.third_down_att,
            fourth_down_made = excluded.fourth_down_made,
            fourth_down_att = excluded.fourth_down_att,
            time_of_possession = excluded.time_of_possession,
            updated_at = excluded.updated_at",
        params![
            game_id,
            row.team,
            row.first_downs,
            row.rush_att,
            row.rush_yds,
            row.rush_td,
            row.pass_cmp,
            row.pass_att,
            row.pass_yds,
            row.pass_td,
            row.pass_int,
            row.total_yds,
            row.turnovers,
            row.penalties,
            row.penalty_yds,
            row.third_down_made,
            row.third_down_att,
            row.fourth_down_made,
            row.fourth_down_att,
            row.time_of_possession,
            now,
        ],
    )
    .context("upsert team totals row")?;
    Ok(())
}

fn upsert_official(
    tx: &Transaction<'_>,
    game_id: &str,
    official: &OfficialAssignment,
) -> Result<()> {
    tx.execute(
        "INSERT INTO game_officials (game_id, position, name)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(game_id, position) DO UPDATE SET name = excluded.name",
        params![game_id, official.position, official.name],
    )
    .context("upsert official")?;
    Ok(())
}
