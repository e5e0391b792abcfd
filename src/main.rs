use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use boxstats::extract::RowFilter;
use boxstats::fetch::FetchPolicy;
use boxstats::game_id::GameId;
use boxstats::pipeline::{CollectOptions, collect_games};
use boxstats::store;

const DEFAULT_DB_FILE: &str = "boxstats.sqlite";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let db_path = parse_db_path_arg().unwrap_or_else(default_db_path);
    let mut conn = store::open_db(&db_path)?;

    let ids = resolve_game_ids(&conn)?;
    if ids.is_empty() {
        println!("No games to collect (pass --ids or seed the games table)");
        return Ok(());
    }

    let bulk = has_flag("--bulk");
    let options = CollectOptions {
        policy: if bulk {
            FetchPolicy::bulk()
        } else {
            FetchPolicy::standard()
        },
        filter: RowFilter::from_env(),
        jobs: parse_usize_arg("--jobs").unwrap_or(1).clamp(1, 8),
    };

    let summary = collect_games(&mut conn, &ids, &options)?;

    println!("Collection complete");
    println!("DB: {}", db_path.display());
    println!(
        "Games: {}/{}",
        summary.games_succeeded, summary.games_total
    );
    println!("Player rows: {}", summary.player_rows);
    println!("Team rows: {}", summary.team_rows);
    println!("Scoring events: {}", summary.scoring_events);
    println!("Officials: {}", summary.officials);
    if !summary.errors.is_empty() {
        println!("Errors: {}", summary.errors.len());
        for err in summary.errors.iter().take(6) {
            println!("  - {}: {}", err.game_id, err.error);
        }
    }

    Ok(())
}

/// Explicit `--ids` win; otherwise fall back to the seeded pending backlog,
/// optionally narrowed by `--season` and capped by `--limit`.
fn resolve_game_ids(conn: &rusqlite::Connection) -> Result<Vec<GameId>> {
    if let Some(raw) = parse_string_arg("--ids") {
        let mut out = Vec::new();
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let id = GameId::parse(token)
                .ok_or_else(|| anyhow!("malformed game id: {token:?}"))?;
            out.push(id);
        }
        return Ok(out);
    }

    let season = parse_string_arg("--season")
        .map(|raw| {
            raw.parse::<i32>()
                .with_context(|| format!("invalid --season value: {raw:?}"))
        })
        .transpose()?;
    let limit = parse_usize_arg("--limit");
    store::pending_game_ids(conn, season, limit)
}

fn default_db_path() -> PathBuf {
    std::env::var("BOXSTATS_DB")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

fn parse_db_path_arg() -> Option<PathBuf> {
    parse_string_arg("--db").map(PathBuf::from)
}

fn parse_usize_arg(flag: &str) -> Option<usize> {
    parse_string_arg(flag).and_then(|v| v.parse::<usize>().ok())
}

fn parse_string_arg(flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
        {
            let trimmed = next.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

fn has_flag(flag: &str) -> bool {
    std::env::args().skip(1).any(|arg| arg == flag)
}
