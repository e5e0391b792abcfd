//! Functional role classification.
//!
//! A pure decision over which stat categories a player has non-zero values
//! in, plus the batch pass that applies it to every persisted player row.
//! Running it again over unchanged stats always yields the same role.

use anyhow::{Context, Result};
use rusqlite::{Connection, params};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Offense,
    Defense,
    SpecialTeams,
    Mixed,
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Offense => "offense",
            Role::Defense => "defense",
            Role::SpecialTeams => "special_teams",
            Role::Mixed => "mixed",
            Role::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stat totals feeding the predicates. Absent/null columns read as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleInputs {
    pub pass_att: i64,
    pub rush_att: i64,
    pub receptions: i64,
    pub tackles_combined: i64,
    pub sacks: f64,
    pub def_int: i64,
    pub passes_defended: i64,
    pub fumbles_forced: i64,
    pub fumbles_recovered: i64,
    pub kick_returns: i64,
    pub punt_returns: i64,
    pub fg_att: i64,
    pub xp_att: i64,
    pub punts: i64,
}

/// In order: more than one category present is `mixed`, then offense,
/// defense, special teams, and finally `unknown` for empty stat lines.
pub fn classify(stats: &RoleInputs) -> Role {
    let has_offense = stats.pass_att > 0 || stats.rush_att > 0 || stats.receptions > 0;
    let has_defense = stats.tackles_combined > 0
        || stats.sacks > 0.0
        || stats.def_int > 0
        || stats.passes_defended > 0
        || stats.fumbles_forced > 0
        || stats.fumbles_recovered > 0;
    let has_returns = stats.kick_returns > 0 || stats.punt_returns > 0;
    let has_kicking = stats.fg_att > 0 || stats.xp_att > 0 || stats.punts > 0;

    let categories = [has_offense, has_defense, has_returns, has_kicking]
        .iter()
        .filter(|flag| **flag)
        .count();
    if categories > 1 {
        Role::Mixed
    } else if has_offense {
        Role::Offense
    } else if has_defense {
        Role::Defense
    } else if has_returns || has_kicking {
        Role::SpecialTeams
    } else {
        Role::Unknown
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoleCounts {
    pub offense: usize,
    pub defense: usize,
    pub special_teams: usize,
    pub mixed: usize,
    pub unknown: usize,
}

impl RoleCounts {
    pub fn total(&self) -> usize {
        self.offense + self.defense + self.special_teams + self.mixed + self.unknown
    }

    fn bump(&mut self, role: Role) {
        match role {
            Role::Offense => self.offense += 1,
            Role::Defense => self.defense += 1,
            Role::SpecialTeams => self.special_teams += 1,
            Role::Mixed => self.mixed += 1,
            Role::Unknown => self.unknown += 1,
        }
    }
}

/// Batch pass over every persisted player row, updating the `role` column.
pub fn classify_roles(conn: &Connection) -> Result<RoleCounts> {
    let mut stmt = conn
        .prepare(
            "SELECT rowid,
                    COALESCE(pass_att, 0),
                    COALESCE(rush_att, 0),
                    COALESCE(receptions, 0),
                    COALESCE(tackles_combined, 0),
                    COALESCE(sacks, 0.0),
                    COALESCE(def_int, 0),
                    COALESCE(passes_defended, 0),
                    COALESCE(fumbles_forced, 0),
                    COALESCE(fumbles_recovered, 0),
                    COALESCE(kick_returns, 0),
                    COALESCE(punt_returns, 0),
                    COALESCE(fg_att, 0),
                    COALESCE(xp_att, 0),
                    COALESCE(punts, 0)
             FROM player_game_stats",
        )
        .context("prepare role classification query")?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                RoleInputs {
                    pass_att: row.get(1)?,
                    rush_att: row.get(2)?,
                    receptions: row.get(3)?,
                    tackles_combined: row.get(4)?,
                    sacks: row.get(5)?,
                    def_int: row.get(6)?,
                    passes_defended: row.get(7)?,
                    fumbles_forced: row.get(8)?,
                    fumbles_recovered: row.get(9)?,
                    kick_returns: row.get(10)?,
                    punt_returns: row.get(11)?,
                    fg_att: row.get(12)?,
                    xp_att: row.get(13)?,
                    punts: row.get(14)?,
                },
            ))
        })
        .context("query player stats for classification")?;

    let mut counts = RoleCounts::default();
    let mut updates = Vec::new();
    for row in rows {
        let (rowid, inputs) = row.context("decode player stat row")?;
        let role = classify(&inputs);
        counts.bump(role);
        updates.push((rowid, role));
    }

    for (rowid, role) in updates {
        conn.execute(
            "UPDATE player_game_stats SET role = ?1 WHERE rowid = ?2",
            params![role.as_str(), rowid],
        )
        .context("update player role")?;
    }

    Ok(counts)
}
