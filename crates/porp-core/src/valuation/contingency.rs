// Contingency plans: "if my target goes, who's next?"

use serde::Serialize;
use tracing::debug;

use super::pool::PlayerPool;
use super::porp::PlayerValuation;
use super::ValuationSnapshot;
use crate::config::LeagueConfig;
use crate::draft::state::DraftSession;

/// Fallbacks for one still-available target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contingency {
    pub target: String,
    /// Best available players other than the target, descending by PORP.
    pub alternatives: Vec<PlayerValuation>,
}

/// Build a contingency entry for every target still in the available pool.
///
/// Replacement levels come from the current available pool with the target
/// still in it; the target is then excluded from its own alternatives.
/// Targets that are already drafted or not in the pool are skipped.
/// Repeated targets produce one entry.
pub fn contingency_tree<S: AsRef<str>>(
    pool: &PlayerPool,
    session: &DraftSession,
    league: &LeagueConfig,
    targets: &[S],
    depth: usize,
) -> Vec<Contingency> {
    let snapshot =
        ValuationSnapshot::compute(pool, session.drafted(), &league.roster, league.num_teams);

    let mut out: Vec<Contingency> = Vec::new();
    for target in targets {
        let target = target.as_ref();
        if !pool.contains(target) {
            debug!("contingency target '{}' is not in the pool; skipping", target);
            continue;
        }
        if session.is_drafted(target) {
            debug!("contingency target '{}' already drafted; skipping", target);
            continue;
        }
        if out.iter().any(|c| c.target == target) {
            continue;
        }

        let alternatives = snapshot
            .ranked
            .iter()
            .filter(|v| v.name != target)
            .take(depth)
            .cloned()
            .collect();
        out.push(Contingency {
            target: target.to_string(),
            alternatives,
        });
    }
    out
}
