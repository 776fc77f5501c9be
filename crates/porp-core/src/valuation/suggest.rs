// Live suggestions: best available overall, per needed position, and the
// league-wide team needs board.
//
// Every call values the current available pool from scratch. Nothing here
// mutates the session, so repeated calls without a pick in between return
// identical output.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::pool::PlayerPool;
use super::porp::{PlayerValuation, ReplacementLevels};
use super::ValuationSnapshot;
use crate::config::{LeagueConfig, SuggestionConfig};
use crate::draft::pick::Position;
use crate::draft::roster::{needed_positions, positional_needs, PositionalNeeds};
use crate::draft::state::{DraftError, DraftSession};

/// Top available players at one needed position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSuggestions {
    pub position: Position,
    /// Open starting slots at this position for the team.
    pub need: usize,
    pub players: Vec<PlayerValuation>,
}

/// Everything the dashboard shows for one team at one moment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Suggestions {
    pub team_id: Option<String>,
    pub replacement_levels: ReplacementLevels,
    pub needs: PositionalNeeds,
    /// Global top-N by PORP, regardless of need.
    pub best_overall: Vec<PlayerValuation>,
    /// One entry per position with a nonzero need, in position order.
    pub by_position: Vec<PositionSuggestions>,
}

/// One row of the league-wide needs board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamNeedsSummary {
    pub team_id: String,
    pub needs: PositionalNeeds,
    /// Claimed players per position so far.
    pub position_counts: BTreeMap<Position, usize>,
    pub filled: usize,
    /// Top available players eligible at any of the team's needed positions.
    pub suggestions: Vec<PlayerValuation>,
}

/// Compute suggestions for `team_id`, or for an empty roster when `None`.
///
/// Fails only if `team_id` names a team that is not in the session.
pub fn live_suggestions(
    pool: &PlayerPool,
    session: &DraftSession,
    league: &LeagueConfig,
    team_id: Option<&str>,
    limits: &SuggestionConfig,
) -> Result<Suggestions, DraftError> {
    let roster = match team_id {
        Some(id) => Some(
            session
                .team(id)
                .ok_or_else(|| DraftError::UnknownTeam(id.to_string()))?,
        ),
        None => None,
    };

    let snapshot =
        ValuationSnapshot::compute(pool, session.drafted(), &league.roster, league.num_teams);
    let needs = positional_needs(&league.roster, roster);

    let best_overall: Vec<PlayerValuation> = snapshot
        .ranked
        .iter()
        .take(limits.top_overall)
        .cloned()
        .collect();

    let by_position: Vec<PositionSuggestions> = needed_positions(&needs)
        .into_iter()
        .map(|pos| PositionSuggestions {
            position: pos,
            need: needs.get(&pos).copied().unwrap_or(0),
            players: snapshot.top_at(pos, limits.per_position),
        })
        .collect();

    debug!(
        "suggestions for {}: {} overall, {} needed positions",
        team_id.unwrap_or("<empty roster>"),
        best_overall.len(),
        by_position.len()
    );

    Ok(Suggestions {
        team_id: team_id.map(str::to_string),
        replacement_levels: snapshot.replacement_levels,
        needs,
        best_overall,
        by_position,
    })
}

/// Needs and top-M targets for every team in the session, in team order.
///
/// One valuation pass is shared by all teams.
pub fn team_needs_board(
    pool: &PlayerPool,
    session: &DraftSession,
    league: &LeagueConfig,
    per_team: usize,
) -> Vec<TeamNeedsSummary> {
    let snapshot =
        ValuationSnapshot::compute(pool, session.drafted(), &league.roster, league.num_teams);

    session
        .teams()
        .iter()
        .map(|team| {
            let needs = positional_needs(&league.roster, Some(team));
            let open = needed_positions(&needs);
            let suggestions = snapshot
                .ranked
                .iter()
                .filter(|v| open.iter().any(|&pos| v.is_eligible_at(pos)))
                .take(per_team)
                .cloned()
                .collect();
            TeamNeedsSummary {
                team_id: team.team_id.clone(),
                needs,
                position_counts: team.position_counts(),
                filled: team.filled_count(),
                suggestions,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::roster::RosterConfig;
    use crate::valuation::pool::Player;

    fn league() -> LeagueConfig {
        LeagueConfig::new(
            "Test League",
            2,
            RosterConfig::new(vec![
                Position::Catcher,
                Position::ShortStop,
                Position::Outfield,
                Position::Bench,
            ]),
        )
    }

    fn limits() -> SuggestionConfig {
        SuggestionConfig {
            top_overall: 3,
            per_position: 2,
            per_team: 2,
            contingency_depth: 3,
        }
    }

    fn pool() -> PlayerPool {
        PlayerPool::new(vec![
            Player::with_points("Cat A", vec![Position::Catcher], 300.0),
            Player::with_points("Cat B", vec![Position::Catcher], 200.0),
            Player::with_points("Cat C", vec![Position::Catcher], 100.0),
            Player::with_points("Short A", vec![Position::ShortStop], 500.0),
            Player::with_points("Short B", vec![Position::ShortStop], 450.0),
            Player::with_points("Short C", vec![Position::ShortStop], 400.0),
            Player::with_points("Out A", vec![Position::Outfield], 420.0),
            Player::with_points("Out B", vec![Position::Outfield], 410.0),
            Player::with_points("Out C", vec![Position::Outfield], 120.0),
        ])
        .unwrap()
    }

    #[test]
    fn best_overall_ranks_by_porp_not_points() {
        let pool = pool();
        let session = DraftSession::new(league().teams);
        let s = live_suggestions(&pool, &session, &league(), None, &limits()).unwrap();

        // Levels: C 200, SS 450, OF 410.
        assert_eq!(s.replacement_levels[&Position::Catcher], 200.0);
        assert_eq!(s.replacement_levels[&Position::ShortStop], 450.0);
        assert_eq!(s.replacement_levels[&Position::Outfield], 410.0);

        let names: Vec<&str> = s.best_overall.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Cat A", "Short A", "Out A"]);
        assert_eq!(s.best_overall[0].porp, 100.0);
    }

    #[test]
    fn no_team_means_every_position_needed() {
        let pool = pool();
        let session = DraftSession::new(league().teams);
        let s = live_suggestions(&pool, &session, &league(), None, &limits()).unwrap();

        assert!(s.team_id.is_none());
        let positions: Vec<Position> = s.by_position.iter().map(|p| p.position).collect();
        assert_eq!(
            positions,
            vec![Position::Catcher, Position::ShortStop, Position::Outfield]
        );
        assert!(s.by_position.iter().all(|p| p.players.len() == 2 && p.need == 1));
    }

    #[test]
    fn filled_positions_are_not_suggested() {
        let pool = pool();
        let mut session = DraftSession::new(league().teams);
        session.record_pick(&pool, "Cat A", Some("Team_1")).unwrap();

        let s = live_suggestions(&pool, &session, &league(), Some("Team_1"), &limits()).unwrap();
        assert_eq!(s.needs[&Position::Catcher], 0);
        assert!(s.by_position.iter().all(|p| p.position != Position::Catcher));
        assert!(s.best_overall.iter().all(|v| v.name != "Cat A"));
    }

    #[test]
    fn drafted_players_leave_every_table() {
        let pool = pool();
        let mut session = DraftSession::new(league().teams);
        session.record_pick(&pool, "Short A", None).unwrap();

        let s = live_suggestions(&pool, &session, &league(), None, &limits()).unwrap();
        let ss = s
            .by_position
            .iter()
            .find(|p| p.position == Position::ShortStop)
            .unwrap();
        assert_eq!(ss.players[0].name, "Short B");
        // Level moves down with the pool: SS now 400.
        assert_eq!(s.replacement_levels[&Position::ShortStop], 400.0);
    }

    #[test]
    fn unknown_team_is_an_error() {
        let pool = pool();
        let session = DraftSession::new(league().teams);
        let err = live_suggestions(&pool, &session, &league(), Some("Team_9"), &limits())
            .unwrap_err();
        assert_eq!(err, DraftError::UnknownTeam("Team_9".into()));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let pool = pool();
        let mut session = DraftSession::new(league().teams);
        session.record_pick(&pool, "Out A", Some("Team_2")).unwrap();

        let first = live_suggestions(&pool, &session, &league(), Some("Team_2"), &limits()).unwrap();
        let second = live_suggestions(&pool, &session, &league(), Some("Team_2"), &limits()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            team_needs_board(&pool, &session, &league(), 2),
            team_needs_board(&pool, &session, &league(), 2)
        );
    }

    #[test]
    fn needs_board_covers_every_team() {
        let pool = pool();
        let mut session = DraftSession::new(league().teams);
        session.record_pick(&pool, "Cat A", Some("Team_1")).unwrap();
        session.record_pick(&pool, "Short A", Some("Team_1")).unwrap();

        let board = team_needs_board(&pool, &session, &league(), 2);
        assert_eq!(board.len(), 2);

        let t1 = &board[0];
        assert_eq!(t1.team_id, "Team_1");
        assert_eq!(t1.filled, 2);
        assert_eq!(t1.position_counts[&Position::Catcher], 1);
        // Team_1 only needs OF now.
        assert!(t1
            .suggestions
            .iter()
            .all(|v| v.is_eligible_at(Position::Outfield)));

        let t2 = &board[1];
        assert_eq!(t2.filled, 0);
        assert!(t2.position_counts.is_empty());
        assert_eq!(t2.suggestions.len(), 2);
    }

    #[test]
    fn full_roster_gets_no_board_suggestions() {
        let pool = pool();
        let mut session = DraftSession::new(league().teams);
        for name in ["Cat A", "Short A", "Out A"] {
            session.record_pick(&pool, name, Some("Team_1")).unwrap();
        }
        let board = team_needs_board(&pool, &session, &league(), 3);
        assert!(board[0].suggestions.is_empty());
        assert!(board[0].needs.values().all(|&n| n == 0));
    }
}
