// Roster slot configuration, team rosters, and positional needs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::pick::Position;

/// The ordered slot layout shared by every team in the league.
///
/// Built from league.toml `roster = ["C", "1B", ..., "BENCH"]`. Repeated
/// labels mean repeated slots (three "OF" entries = three outfield starters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    slots: Vec<Position>,
}

impl RosterConfig {
    pub fn new(slots: Vec<Position>) -> Self {
        RosterConfig { slots }
    }

    /// Parse slot labels (e.g. from league.toml). Returns the first label
    /// that is not a known position as the error.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self, String> {
        let slots = labels
            .iter()
            .map(|l| Position::from_str_pos(l.as_ref()).ok_or_else(|| l.as_ref().to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RosterConfig { slots })
    }

    /// All slots in configured order, including catch-alls.
    pub fn slots(&self) -> &[Position] {
        &self.slots
    }

    /// Roster size per team.
    pub fn roster_size(&self) -> usize {
        self.slots.len()
    }

    /// Number of configured slots for a position on one team.
    pub fn slot_count(&self, pos: Position) -> usize {
        self.slots.iter().filter(|&&s| s == pos).count()
    }

    /// Distinct starting positions (catch-alls excluded), in the order they
    /// first appear in the slot list.
    pub fn starting_positions(&self) -> Vec<Position> {
        let mut out: Vec<Position> = Vec::new();
        for &slot in &self.slots {
            if !slot.is_meta_slot() && !out.contains(&slot) {
                out.push(slot);
            }
        }
        out
    }

    /// League-wide starter demand at a position.
    pub fn required_starters(&self, pos: Position, num_teams: usize) -> usize {
        self.slot_count(pos) * num_teams
    }
}

/// A team's claimed positions so far.
///
/// Only eligibility lists are kept, not full player records: positional
/// needs are all that is derived from a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub team_id: String,
    /// One eligibility list per drafted player, in draft order.
    pub claimed: Vec<Vec<Position>>,
}

impl TeamRoster {
    pub fn new(team_id: impl Into<String>) -> Self {
        TeamRoster {
            team_id: team_id.into(),
            claimed: Vec::new(),
        }
    }

    /// Append a drafted player's eligibility list.
    pub fn claim(&mut self, positions: &[Position]) {
        self.claimed.push(positions.to_vec());
    }

    /// Number of players drafted onto this roster.
    pub fn filled_count(&self) -> usize {
        self.claimed.len()
    }

    /// How many claimed players can fill a `pos` slot.
    pub fn claimed_count(&self, pos: Position) -> usize {
        self.claimed
            .iter()
            .filter(|list| list.iter().any(|p| p.fills(pos)))
            .count()
    }

    /// Claimed counts for every position appearing on the roster.
    pub fn position_counts(&self) -> BTreeMap<Position, usize> {
        let mut counts = BTreeMap::new();
        for list in &self.claimed {
            for &pos in list {
                *counts.entry(pos).or_insert(0) += 1;
            }
        }
        counts
    }
}

/// Unfilled starting slots per position for one team.
pub type PositionalNeeds = BTreeMap<Position, usize>;

/// Compute `needs[pos] = max(0, required - claimed)` for every starting
/// position in the roster config.
///
/// A multi-position player counts toward every position it is eligible at.
/// `None` is treated as an empty roster, so every starting slot is open.
pub fn positional_needs(config: &RosterConfig, roster: Option<&TeamRoster>) -> PositionalNeeds {
    config
        .starting_positions()
        .into_iter()
        .map(|pos| {
            let required = config.slot_count(pos);
            let current = roster.map_or(0, |r| r.claimed_count(pos));
            (pos, required.saturating_sub(current))
        })
        .collect()
}

/// Positions with a nonzero need, in position order.
pub fn needed_positions(needs: &PositionalNeeds) -> Vec<Position> {
    needs
        .iter()
        .filter(|(_, &n)| n > 0)
        .map(|(&pos, _)| pos)
        .collect()
}
