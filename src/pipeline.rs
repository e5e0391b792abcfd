//! Batch collection: fetch, extract and persist a list of games.
//!
//! Fetch and extract can fan out across a bounded worker pool; persistence is
//! always a single writer. A per-game failure is recorded and skipped, never
//! fatal to the batch, and every run is logged to `collection_runs`.

use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use rusqlite::{Connection, params};
use serde::Serialize;

use crate::extract::{RowFilter, extract_all};
use crate::fetch::{FetchPolicy, fetch_document};
use crate::game_id::GameId;
use crate::records::ExtractedGame;
use crate::store::{SaveCounts, save_game};

#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub policy: FetchPolicy,
    pub filter: RowFilter,
    /// Concurrent fetch workers; 1 means strictly sequential.
    pub jobs: usize,
}

impl Default for CollectOptions {
    fn default() -> CollectOptions {
        CollectOptions {
            policy: FetchPolicy::standard(),
            filter: RowFilter::default(),
            jobs: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameError {
    pub game_id: String,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct CollectionSummary {
    pub games_total: usize,
    pub games_succeeded: usize,
    pub player_rows: usize,
    pub team_rows: usize,
    pub scoring_events: usize,
    pub officials: usize,
    pub errors: Vec<GameError>,
}

/// Serializes politeness delays across worker threads, so the global request
/// rate matches the policy regardless of how many fetchers run.
pub struct RateGate {
    policy: FetchPolicy,
    next_slot: Mutex<Instant>,
}

impl RateGate {
    pub fn new(policy: FetchPolicy) -> RateGate {
        RateGate {
            policy,
            next_slot: Mutex::new(Instant::now()),
        }
    }

    /// Blocks until this caller's request slot arrives.
    pub fn wait(&self) {
        let delay = self.policy.pick_delay();
        let slot = {
            let mut next = match self.next_slot.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let slot = (*next).max(Instant::now()) + delay;
            *next = slot;
            slot
        };
        let now = Instant::now();
        if slot > now {
            std::thread::sleep(slot - now);
        }
    }
}

/// Fetches and extracts one game. No persistence, no delay beyond the policy.
pub fn collect_game(game_id: &GameId, options: &CollectOptions) -> Result<ExtractedGame> {
    let doc = fetch_document(&game_id.url(), options.policy)
        .with_context(|| format!("fetch boxscore {game_id}"))?;
    Ok(extract_all(&doc, game_id, &options.filter))
}

/// Runs the full pipeline over a batch, recording the run in
/// `collection_runs`. Failed games land in the summary's error list.
pub fn collect_games(
    conn: &mut Connection,
    ids: &[GameId],
    options: &CollectOptions,
) -> Result<CollectionSummary> {
    let started_at = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO collection_runs (started_at, finished_at, games_total, games_succeeded, player_rows, errors_json)
         VALUES (?1, NULL, ?2, 0, 0, '[]')",
        params![started_at, ids.len() as i64],
    )
    .context("insert collection run")?;
    let run_id = conn.last_insert_rowid();

    let mut summary = CollectionSummary {
        games_total: ids.len(),
        ..CollectionSummary::default()
    };

    let extracted = if options.jobs > 1 {
        collect_parallel(ids, options)?
    } else {
        ids.iter()
            .map(|id| (id.clone(), collect_game(id, options)))
            .collect()
    };

    for (id, result) in extracted {
        let game = match result {
            Ok(game) => game,
            Err(err) => {
                eprintln!("[WARN] skipping game {id}: {err}");
                summary.errors.push(GameError {
                    game_id: id.token().to_string(),
                    error: format!("{err:#}"),
                });
                continue;
            }
        };
        match save_game(conn, &game) {
            Ok(counts) => {
                summary.games_succeeded += 1;
                merge_counts(&mut summary, counts);
            }
            Err(err) => {
                eprintln!("[WARN] save failed for game {id}: {err}");
                summary.errors.push(GameError {
                    game_id: id.token().to_string(),
                    error: format!("save failed: {err:#}"),
                });
            }
        }
    }

    let finished_at = chrono::Utc::now().to_rfc3339();
    let errors_json = serde_json::to_string(&summary.errors).unwrap_or_else(|_| "[]".to_string());
    conn.execute(
        "UPDATE collection_runs
         SET finished_at = ?1, games_succeeded = ?2, player_rows = ?3, errors_json = ?4
         WHERE run_id = ?5",
        params![
            finished_at,
            summary.games_succeeded as i64,
            summary.player_rows as i64,
            errors_json,
            run_id,
        ],
    )
    .context("update collection run")?;

    Ok(summary)
}

fn collect_parallel(
    ids: &[GameId],
    options: &CollectOptions,
) -> Result<Vec<(GameId, Result<ExtractedGame>)>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs)
        .build()
        .context("build fetch worker pool")?;
    let gate = RateGate::new(options.policy);
    // Workers only fetch and extract; the rate gate keeps the wire rate at
    // policy levels, and the caller persists serially afterwards.
    let no_delay = CollectOptions {
        policy: FetchPolicy::immediate(),
        filter: options.filter.clone(),
        jobs: options.jobs,
    };
    Ok(pool.install(|| {
        ids.par_iter()
            .map(|id| {
                gate.wait();
                (id.clone(), collect_game(id, &no_delay))
            })
            .collect()
    }))
}

fn merge_counts(summary: &mut CollectionSummary, counts: SaveCounts) {
    summary.player_rows += counts.player_rows;
    summary.team_rows += counts.team_rows;
    summary.scoring_events += counts.scoring_events;
    summary.officials += counts.officials;
}
