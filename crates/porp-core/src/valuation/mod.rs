// Valuation engine: scoring, replacement levels, PORP, suggestions.

pub mod contingency;
pub mod pool;
pub mod porp;
pub mod projections;
pub mod scoring;
pub mod suggest;

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::draft::pick::Position;
use crate::draft::roster::RosterConfig;
use pool::PlayerPool;
use porp::{determine_replacement_levels, rank_by_porp, PlayerValuation, ReplacementLevels};

/// Replacement levels and the PORP ranking for one pool state.
///
/// Recomputed from scratch on every call; nothing is cached between picks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationSnapshot {
    pub replacement_levels: ReplacementLevels,
    /// Every available player, descending by PORP.
    pub ranked: Vec<PlayerValuation>,
}

impl ValuationSnapshot {
    /// Value the available pool (`pool` minus `drafted`).
    pub fn compute(
        pool: &PlayerPool,
        drafted: &HashSet<String>,
        roster: &RosterConfig,
        num_teams: usize,
    ) -> Self {
        let available = pool.available(drafted);
        let replacement_levels = determine_replacement_levels(&available, roster, num_teams);
        let ranked = rank_by_porp(&available, &replacement_levels);
        debug!(
            "valued {} available players ({} drafted)",
            ranked.len(),
            drafted.len()
        );
        ValuationSnapshot {
            replacement_levels,
            ranked,
        }
    }

    /// Top `n` available players eligible at `pos`.
    pub fn top_at(&self, pos: Position, n: usize) -> Vec<PlayerValuation> {
        self.ranked
            .iter()
            .filter(|v| v.is_eligible_at(pos))
            .take(n)
            .cloned()
            .collect()
    }
}
