// Draft session: drafted players, team rosters, and pick history.

use std::collections::{BTreeMap, HashSet};

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use super::pick::{DraftPick, Position};
use super::roster::TeamRoster;
use crate::valuation::pool::PlayerPool;

/// Rejections from [`DraftSession::record_pick`]. The session is unchanged
/// whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("player '{0}' has already been drafted")]
    AlreadyDrafted(String),

    #[error("player '{0}' is not in the player pool")]
    UnknownPlayer(String),

    #[error("team '{0}' is not part of this draft")]
    UnknownTeam(String),
}

/// The complete state of one in-memory draft.
///
/// Owned by the caller and passed explicitly into every engine call; the
/// only mutation is [`DraftSession::record_pick`], which validates before
/// touching anything so a rejected pick never leaves a partial update.
#[derive(Debug, Clone, Serialize)]
pub struct DraftSession {
    /// Every drafted player, tracked team or not.
    drafted: HashSet<String>,
    /// Teams participating in the draft, in configured order.
    teams: Vec<TeamRoster>,
    /// Picks made by tracked teams, in order.
    picks: Vec<DraftPick>,
}

impl DraftSession {
    /// Create an empty session for the given team ids.
    pub fn new<I, S>(team_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut teams: Vec<TeamRoster> = Vec::new();
        for id in team_ids {
            let id = id.into();
            if teams.iter().any(|t| t.team_id == id) {
                warn!("ignoring duplicate team id '{}'", id);
                continue;
            }
            teams.push(TeamRoster::new(id));
        }
        DraftSession {
            drafted: HashSet::new(),
            teams,
            picks: Vec::new(),
        }
    }

    /// Record a pick.
    ///
    /// With a team, the player's eligibility list is claimed on that team's
    /// roster and the pick is appended to the history. Without one, the
    /// player is only removed from consideration (an untracked opponent's
    /// pick, or a manual strike-through).
    pub fn record_pick(
        &mut self,
        pool: &PlayerPool,
        player_name: &str,
        team_id: Option<&str>,
    ) -> Result<Option<&DraftPick>, DraftError> {
        let Some(player) = pool.get(player_name) else {
            warn!("rejected pick: unknown player '{}'", player_name);
            return Err(DraftError::UnknownPlayer(player_name.to_string()));
        };
        if self.drafted.contains(&player.name) {
            warn!("rejected pick: '{}' already drafted", player.name);
            return Err(DraftError::AlreadyDrafted(player.name.clone()));
        }
        let team_idx = match team_id {
            Some(id) => match self.teams.iter().position(|t| t.team_id == id) {
                Some(idx) => Some(idx),
                None => {
                    warn!("rejected pick of '{}': unknown team '{}'", player.name, id);
                    return Err(DraftError::UnknownTeam(id.to_string()));
                }
            },
            None => None,
        };

        self.drafted.insert(player.name.clone());
        let pick_number = self.drafted.len();

        let Some(idx) = team_idx else {
            info!("pick #{}: {} (untracked)", pick_number, player.name);
            return Ok(None);
        };

        let team = &mut self.teams[idx];
        team.claim(&player.positions);
        info!(
            "pick #{}: {} -> {} ({} on roster)",
            pick_number,
            player.name,
            team.team_id,
            team.filled_count()
        );

        self.picks.push(DraftPick {
            pick_number,
            team_id: team.team_id.clone(),
            player_name: player.name.clone(),
            positions: player.positions.clone(),
            picked_at: Utc::now(),
        });
        Ok(self.picks.last())
    }

    /// Whether a player has been drafted by anyone.
    pub fn is_drafted(&self, player_name: &str) -> bool {
        self.drafted.contains(player_name)
    }

    /// The drafted-player set.
    pub fn drafted(&self) -> &HashSet<String> {
        &self.drafted
    }

    /// Number of players drafted so far, tracked or not.
    pub fn drafted_count(&self) -> usize {
        self.drafted.len()
    }

    /// All teams in configured order.
    pub fn teams(&self) -> &[TeamRoster] {
        &self.teams
    }

    /// Look up a team by ID.
    pub fn team(&self, team_id: &str) -> Option<&TeamRoster> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }

    /// Picks made by tracked teams, oldest first.
    pub fn picks(&self) -> &[DraftPick] {
        &self.picks
    }

    /// Per-position claimed counts for one team (the opponent build summary).
    pub fn position_counts(&self, team_id: &str) -> Option<BTreeMap<Position, usize>> {
        self.team(team_id).map(TeamRoster::position_counts)
    }
}
