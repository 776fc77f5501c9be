// Player records and the season player pool.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::scoring::{hitter_points, pitcher_points, HitterStats, PitcherStats};
use crate::draft::pick::Position;

/// One player's identity, eligibility, raw stats, and fantasy points.
///
/// `fantasy_points` is fixed at construction from the stat lines (or taken
/// as-is when the input already carried points). Draft actions never touch
/// a `Player`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub positions: Vec<Position>,
    pub hitting: Option<HitterStats>,
    pub pitching: Option<PitcherStats>,
    pub fantasy_points: f64,
}

impl Player {
    /// A player whose points were computed upstream.
    pub fn with_points(name: impl Into<String>, positions: Vec<Position>, points: f64) -> Self {
        Player {
            name: name.into(),
            positions,
            hitting: None,
            pitching: None,
            fantasy_points: points,
        }
    }

    pub fn hitter(name: impl Into<String>, positions: Vec<Position>, stats: HitterStats) -> Self {
        Player {
            name: name.into(),
            positions,
            fantasy_points: hitter_points(&stats),
            hitting: Some(stats),
            pitching: None,
        }
    }

    pub fn pitcher(name: impl Into<String>, positions: Vec<Position>, stats: PitcherStats) -> Self {
        Player {
            name: name.into(),
            positions,
            fantasy_points: pitcher_points(&stats),
            hitting: None,
            pitching: Some(stats),
        }
    }

    /// Fold a pitching line into a hitter (two-way players). Positions are
    /// unioned with the hitter's first, and both formulas' points add up.
    pub fn merge_two_way(mut self, pitcher: Player) -> Self {
        for pos in pitcher.positions {
            if !self.positions.contains(&pos) {
                self.positions.push(pos);
            }
        }
        self.fantasy_points += pitcher.fantasy_points;
        if self.pitching.is_none() {
            self.pitching = pitcher.pitching;
        }
        self
    }

    /// Whether the player can fill a `slot` roster spot (see [`Position::fills`]).
    pub fn is_eligible_at(&self, slot: Position) -> bool {
        self.positions.iter().any(|p| p.fills(slot))
    }
}

/// Pool construction failed because a name appeared twice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate player name '{0}' in pool")]
pub struct DuplicatePlayer(pub String);

/// All players known for the season, in load order.
///
/// Immutable after construction. Load order is the stable tie-break for
/// every ranking downstream.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<Player>,
    index: HashMap<String, usize>,
}

impl PlayerPool {
    pub fn new(players: Vec<Player>) -> Result<Self, DuplicatePlayer> {
        let mut index = HashMap::with_capacity(players.len());
        for (i, p) in players.iter().enumerate() {
            if index.insert(p.name.clone(), i).is_some() {
                return Err(DuplicatePlayer(p.name.clone()));
            }
        }
        Ok(PlayerPool { players, index })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by exact name.
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.index.get(name).map(|&i| &self.players[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Undrafted players, in load order. Rebuilt on every call.
    pub fn available<'a>(&'a self, drafted: &HashSet<String>) -> Vec<&'a Player> {
        self.players
            .iter()
            .filter(|p| !drafted.contains(&p.name))
            .collect()
    }
}
