// Snake draft order.

use super::roster::TeamRoster;
use super::state::DraftSession;

/// Team index (into the configured team list) for a 0-indexed overall pick.
///
/// Even rounds run first-to-last, odd rounds last-to-first. Returns `None`
/// for a league with no teams.
pub fn snake_team_index(pick_index: usize, num_teams: usize) -> Option<usize> {
    if num_teams == 0 {
        return None;
    }
    let round = pick_index / num_teams;
    let slot = pick_index % num_teams;
    if round % 2 == 0 {
        Some(slot)
    } else {
        Some(num_teams - 1 - slot)
    }
}

/// 1-indexed round of a 0-indexed overall pick.
pub fn round_of(pick_index: usize, num_teams: usize) -> usize {
    if num_teams == 0 {
        return 0;
    }
    pick_index / num_teams + 1
}

/// The team whose turn it is, counting every pick recorded so far
/// (untracked ones included).
pub fn on_the_clock(session: &DraftSession) -> Option<&TeamRoster> {
    let teams = session.teams();
    snake_team_index(session.drafted_count(), teams.len()).map(|idx| &teams[idx])
}
