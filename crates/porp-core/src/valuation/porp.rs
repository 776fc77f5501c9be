// Points Over Replacement Player (PORP).
//
// Replacement levels come from the current available pool: for each
// starting position, the fantasy points of the last player who would start
// league-wide. PORP subtracts a player's easiest-to-replace level from their
// fantasy points so values compare across positions.

use std::collections::BTreeMap;

use serde::Serialize;

use super::pool::Player;
use crate::draft::pick::Position;
use crate::draft::roster::RosterConfig;

/// Position -> replacement-level fantasy points, valid only for the pool
/// snapshot it was computed from.
pub type ReplacementLevels = BTreeMap<Position, f64>;

/// A player's valuation against one pool snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerValuation {
    pub name: String,
    pub positions: Vec<Position>,
    pub fantasy_points: f64,
    /// The level this player is measured against (see [`compute_porp`]).
    pub replacement_level: f64,
    /// The slot that produced `replacement_level`, if any did.
    pub replacement_position: Option<Position>,
    pub porp: f64,
}

impl PlayerValuation {
    /// Whether the player can fill a `slot` roster spot (see [`Position::fills`]).
    pub fn is_eligible_at(&self, slot: Position) -> bool {
        self.positions.iter().any(|p| p.fills(slot))
    }
}

// ---------------------------------------------------------------------------
// Replacement level computation
// ---------------------------------------------------------------------------

/// Determine the replacement level for every starting position.
///
/// For each position with N = slots * num_teams starters:
/// 1. Collect every player eligible there (multi-position players count at
///    each of their positions).
/// 2. Sort descending by fantasy points, stable on input order.
/// 3. With at least N eligible, the level is the Nth player's points (the
///    last starter, not the first bench player).
/// 4. Otherwise the position is starved: the level is the lowest eligible
///    value, or 0.0 when nobody is left.
pub fn determine_replacement_levels(
    players: &[&Player],
    roster: &RosterConfig,
    num_teams: usize,
) -> ReplacementLevels {
    let mut levels = ReplacementLevels::new();

    for pos in roster.starting_positions() {
        let required = roster.required_starters(pos, num_teams);

        let mut eligible: Vec<f64> = players
            .iter()
            .filter(|p| p.is_eligible_at(pos))
            .map(|p| p.fantasy_points)
            .collect();
        eligible.sort_by(|a, b| b.total_cmp(a));

        let level = if required > 0 && eligible.len() >= required {
            eligible[required - 1]
        } else {
            eligible.last().copied().unwrap_or(0.0)
        };

        levels.insert(pos, level);
    }

    levels
}

// ---------------------------------------------------------------------------
// Per-player PORP
// ---------------------------------------------------------------------------

/// Value a single player against a replacement table.
///
/// The level is the lowest one among the slots the player can fill. A player
/// who fills none of the scored slots (a DH-only bat in a league without a DH
/// slot, say) is valued against the lowest starting level on their side of
/// the ball, the same bar a UTIL or generic P starter has to clear. Only a
/// player with no positions at all is valued against 0.
pub fn compute_porp(player: &Player, levels: &ReplacementLevels) -> PlayerValuation {
    let best = lowest_level(levels, |slot| player.is_eligible_at(slot)).or_else(|| {
        let hits = player.positions.iter().any(Position::is_hitter);
        let pitches = player.positions.iter().any(Position::is_pitcher);
        lowest_level(levels, |slot| {
            (hits && slot.is_hitter()) || (pitches && slot.is_pitcher())
        })
    });

    let replacement_level = best.map_or(0.0, |(_, level)| level);
    PlayerValuation {
        name: player.name.clone(),
        positions: player.positions.clone(),
        fantasy_points: player.fantasy_points,
        replacement_level,
        replacement_position: best.map(|(pos, _)| pos),
        porp: player.fantasy_points - replacement_level,
    }
}

/// Lowest level among the slots accepted by `accept`; ties keep position order.
fn lowest_level(
    levels: &ReplacementLevels,
    accept: impl Fn(Position) -> bool,
) -> Option<(Position, f64)> {
    let mut best: Option<(Position, f64)> = None;
    for (&slot, &level) in levels {
        if accept(slot) && best.map_or(true, |(_, current)| level < current) {
            best = Some((slot, level));
        }
    }
    best
}

/// Value every player and sort descending by PORP. The sort is stable, so
/// equal PORP keeps input order.
pub fn rank_by_porp(players: &[&Player], levels: &ReplacementLevels) -> Vec<PlayerValuation> {
    let mut ranked: Vec<PlayerValuation> =
        players.iter().map(|p| compute_porp(p, levels)).collect();
    ranked.sort_by(|a, b| b.porp.total_cmp(&a.porp));
    ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn catcher(name: &str, points: f64) -> Player {
        Player::with_points(name, vec![Position::Catcher], points)
    }

    fn catcher_only_roster() -> RosterConfig {
        RosterConfig::new(vec![Position::Catcher, Position::Bench])
    }

    fn twelve_catchers() -> Vec<Player> {
        [100.0, 95.0, 90.0, 85.0, 80.0, 75.0, 70.0, 65.0, 60.0, 55.0, 50.0, 45.0]
            .iter()
            .enumerate()
            .map(|(i, &pts)| catcher(&format!("Catcher {}", i + 1), pts))
            .collect()
    }

    #[test]
    fn replacement_is_last_starter_not_first_bench() {
        let players = twelve_catchers();
        let refs: Vec<&Player> = players.iter().collect();

        let levels = determine_replacement_levels(&refs, &catcher_only_roster(), 10);
        assert!(approx_eq(levels[&Position::Catcher], 55.0));
    }

    #[test]
    fn porp_against_catcher_replacement() {
        let players = twelve_catchers();
        let refs: Vec<&Player> = players.iter().collect();
        let levels = determine_replacement_levels(&refs, &catcher_only_roster(), 10);

        let ranked = rank_by_porp(&refs, &levels);
        assert_eq!(ranked[0].name, "Catcher 1");
        assert!(approx_eq(ranked[0].porp, 45.0));
        let tenth = ranked.iter().find(|v| v.name == "Catcher 10").unwrap();
        assert!(approx_eq(tenth.porp, 0.0));
        assert_eq!(tenth.replacement_position, Some(Position::Catcher));
    }

    #[test]
    fn input_order_does_not_change_level() {
        let mut players = twelve_catchers();
        players.reverse();
        let refs: Vec<&Player> = players.iter().collect();
        let levels = determine_replacement_levels(&refs, &catcher_only_roster(), 10);
        assert!(approx_eq(levels[&Position::Catcher], 55.0));
    }

    #[test]
    fn exact_depth_uses_last_player() {
        let players: Vec<Player> = (0..4).map(|i| catcher(&format!("C{i}"), 40.0 - i as f64)).collect();
        let refs: Vec<&Player> = players.iter().collect();
        let levels = determine_replacement_levels(&refs, &catcher_only_roster(), 4);
        assert!(approx_eq(levels[&Position::Catcher], 37.0));
    }

    #[test]
    fn starved_position_falls_back_to_minimum() {
        let players = vec![catcher("A", 80.0), catcher("B", 20.0), catcher("C", 50.0)];
        let refs: Vec<&Player> = players.iter().collect();
        let levels = determine_replacement_levels(&refs, &catcher_only_roster(), 10);
        assert!(approx_eq(levels[&Position::Catcher], 20.0));
    }

    #[test]
    fn empty_position_falls_back_to_zero() {
        let players = vec![Player::with_points("SS", vec![Position::ShortStop], 90.0)];
        let refs: Vec<&Player> = players.iter().collect();
        let levels = determine_replacement_levels(&refs, &catcher_only_roster(), 10);
        assert!(approx_eq(levels[&Position::Catcher], 0.0));
        assert!(!levels.contains_key(&Position::ShortStop));
    }

    #[test]
    fn catch_all_slots_get_no_level() {
        let roster = RosterConfig::new(vec![Position::Catcher, Position::Utility, Position::Bench]);
        let players = twelve_catchers();
        let refs: Vec<&Player> = players.iter().collect();
        let levels = determine_replacement_levels(&refs, &roster, 2);
        assert_eq!(levels.len(), 1);
        assert!(levels.contains_key(&Position::Catcher));
    }

    #[test]
    fn multi_position_player_counts_at_every_position() {
        let roster = RosterConfig::new(vec![Position::SecondBase, Position::ShortStop]);
        let players = vec![
            Player::with_points("Both", vec![Position::SecondBase, Position::ShortStop], 100.0),
            Player::with_points("Only2B", vec![Position::SecondBase], 60.0),
            Player::with_points("OnlySS", vec![Position::ShortStop], 30.0),
        ];
        let refs: Vec<&Player> = players.iter().collect();
        let levels = determine_replacement_levels(&refs, &roster, 2);
        assert!(approx_eq(levels[&Position::SecondBase], 60.0));
        assert!(approx_eq(levels[&Position::ShortStop], 30.0));
    }

    #[test]
    fn multi_position_player_uses_lowest_level() {
        let mut levels = ReplacementLevels::new();
        levels.insert(Position::SecondBase, 60.0);
        levels.insert(Position::ShortStop, 30.0);

        let player =
            Player::with_points("Both", vec![Position::SecondBase, Position::ShortStop], 100.0);
        let valuation = compute_porp(&player, &levels);
        assert!(approx_eq(valuation.replacement_level, 30.0));
        assert!(approx_eq(valuation.porp, 70.0));
        assert_eq!(valuation.replacement_position, Some(Position::ShortStop));
    }

    #[test]
    fn no_positions_means_zero_replacement() {
        let levels: ReplacementLevels = [(Position::Catcher, 50.0)].into_iter().collect();
        let player = Player::with_points("Nobody", vec![], 42.0);
        let valuation = compute_porp(&player, &levels);
        assert!(approx_eq(valuation.replacement_level, 0.0));
        assert!(approx_eq(valuation.porp, 42.0));
        assert_eq!(valuation.replacement_position, None);
    }

    #[test]
    fn dh_only_hitter_measured_against_lowest_hitter_level() {
        let roster = RosterConfig::from_labels(&["C", "1B", "OF", "UTIL", "SP", "BENCH"]).unwrap();
        let players = vec![
            Player::with_points("Backstop", vec![Position::Catcher], 300.0),
            Player::with_points("Corner", vec![Position::FirstBase], 450.0),
            Player::with_points("Fly", vec![Position::Outfield], 500.0),
            Player::with_points("Arm", vec![Position::StartingPitcher], 200.0),
            Player::with_points("Bat Only", vec![Position::DesignatedHitter], 360.0),
        ];
        let refs: Vec<&Player> = players.iter().collect();
        let levels = determine_replacement_levels(&refs, &roster, 1);
        assert!(!levels.contains_key(&Position::DesignatedHitter));

        let ranked = rank_by_porp(&refs, &levels);
        let dh = ranked.iter().find(|v| v.name == "Bat Only").unwrap();
        // Lowest hitter level is C at 300; the SP level of 200 is not a hitter bar.
        assert!(approx_eq(dh.replacement_level, 300.0));
        assert_eq!(dh.replacement_position, Some(Position::Catcher));
        assert!(approx_eq(dh.porp, 60.0));
        assert!(dh.porp < dh.fantasy_points);
    }

    #[test]
    fn pitcher_without_own_slot_uses_pitcher_level() {
        let levels: ReplacementLevels = [
            (Position::Catcher, 100.0),
            (Position::StartingPitcher, 400.0),
        ]
        .into_iter()
        .collect();
        let closer = Player::with_points("Closer", vec![Position::ReliefPitcher], 450.0);
        let valuation = compute_porp(&closer, &levels);
        assert!(approx_eq(valuation.porp, 50.0));
        assert_eq!(valuation.replacement_position, Some(Position::StartingPitcher));
    }

    #[test]
    fn generic_pitcher_slot_levels_pool_sp_and_rp() {
        let roster = RosterConfig::from_labels(&["P", "P"]).unwrap();
        let players = vec![
            Player::with_points("Starter", vec![Position::StartingPitcher], 500.0),
            Player::with_points("Reliever", vec![Position::ReliefPitcher], 300.0),
            Player::with_points("Swingman", vec![Position::ReliefPitcher], 250.0),
        ];
        let refs: Vec<&Player> = players.iter().collect();
        let levels = determine_replacement_levels(&refs, &roster, 1);
        assert!(approx_eq(levels[&Position::Pitcher], 300.0));

        let ranked = rank_by_porp(&refs, &levels);
        assert_eq!(ranked[0].name, "Starter");
        assert!(approx_eq(ranked[0].porp, 200.0));
        assert_eq!(ranked[0].replacement_position, Some(Position::Pitcher));
    }

    #[test]
    fn unscored_positions_are_skipped() {
        let levels: ReplacementLevels = [(Position::FirstBase, 70.0)].into_iter().collect();
        let player = Player::with_points(
            "DH type",
            vec![Position::DesignatedHitter, Position::FirstBase],
            90.0,
        );
        let valuation = compute_porp(&player, &levels);
        assert!(approx_eq(valuation.porp, 20.0));
        assert_eq!(valuation.replacement_position, Some(Position::FirstBase));
    }

    #[test]
    fn ranking_ties_keep_input_order() {
        let levels: ReplacementLevels = [(Position::Catcher, 10.0)].into_iter().collect();
        let players = vec![catcher("First", 50.0), catcher("Second", 50.0), catcher("Top", 60.0)];
        let refs: Vec<&Player> = players.iter().collect();
        let ranked = rank_by_porp(&refs, &levels);
        let names: Vec<&str> = ranked.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Top", "First", "Second"]);
    }

    #[test]
    fn porp_identity_holds_for_every_player() {
        let roster = RosterConfig::new(vec![
            Position::Catcher,
            Position::FirstBase,
            Position::Outfield,
            Position::Outfield,
        ]);
        let players = vec![
            Player::with_points("A", vec![Position::Catcher, Position::FirstBase], 88.0),
            Player::with_points("B", vec![Position::Outfield], 77.0),
            Player::with_points("C", vec![Position::FirstBase, Position::Outfield], 66.0),
            Player::with_points("D", vec![Position::Catcher], 55.0),
            Player::with_points("E", vec![Position::Outfield], 44.0),
        ];
        let refs: Vec<&Player> = players.iter().collect();
        let levels = determine_replacement_levels(&refs, &roster, 2);

        for v in rank_by_porp(&refs, &levels) {
            let min_level = v
                .positions
                .iter()
                .filter_map(|p| levels.get(p))
                .fold(f64::INFINITY, |acc, &l| acc.min(l));
            assert!(approx_eq(v.porp, v.fantasy_points - min_level), "{}", v.name);
        }
    }
}
