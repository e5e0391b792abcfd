use std::path::PathBuf;

use anyhow::Result;

use boxstats::roles::classify_roles;
use boxstats::store;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let db_path = parse_db_path_arg().unwrap_or_else(default_db_path);
    let conn = store::open_db(&db_path)?;
    let counts = classify_roles(&conn)?;

    println!("Role classification complete");
    println!("DB: {}", db_path.display());
    println!("Players: {}", counts.total());
    println!("  offense: {}", counts.offense);
    println!("  defense: {}", counts.defense);
    println!("  special_teams: {}", counts.special_teams);
    println!("  mixed: {}", counts.mixed);
    println!("  unknown: {}", counts.unknown);

    Ok(())
}

fn default_db_path() -> PathBuf {
    std::env::var("BOXSTATS_DB")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("boxstats.sqlite"))
}

fn parse_db_path_arg() -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix("--db=") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == "--db"
            && let Some(next) = args.get(idx + 1)
        {
            let trimmed = next.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
    }
    None
}
