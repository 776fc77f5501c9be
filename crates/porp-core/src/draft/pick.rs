// Position labels and individual pick records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Baseball positions used for eligibility and roster slots.
///
/// Variant order is display order; the derived `Ord` relies on it so that
/// position-keyed maps iterate C, 1B, 2B, ... naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    ShortStop,
    Outfield,
    DesignatedHitter,
    StartingPitcher,
    ReliefPitcher,
    Pitcher,
    Utility,
    Bench,
    InjuredList,
}

impl Position {
    /// Parse a position label into a Position.
    ///
    /// Handles the usual abbreviations:
    /// - "1B" -> FirstBase, "2B" -> SecondBase, "3B" -> ThirdBase
    /// - "LF"/"CF"/"RF"/"OF" -> Outfield (leagues draft generic outfielders)
    /// - "UTIL"/"UT" -> Utility, "BENCH"/"BE"/"BN" -> Bench, "IL"/"DL" -> InjuredList
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "C" => Some(Position::Catcher),
            "1B" => Some(Position::FirstBase),
            "2B" => Some(Position::SecondBase),
            "3B" => Some(Position::ThirdBase),
            "SS" => Some(Position::ShortStop),
            "OF" | "LF" | "CF" | "RF" => Some(Position::Outfield),
            "DH" => Some(Position::DesignatedHitter),
            "SP" => Some(Position::StartingPitcher),
            "RP" => Some(Position::ReliefPitcher),
            "P" => Some(Position::Pitcher),
            "UTIL" | "UT" => Some(Position::Utility),
            "BENCH" | "BE" | "BN" => Some(Position::Bench),
            "IL" | "DL" => Some(Position::InjuredList),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::ShortStop => "SS",
            Position::Outfield => "OF",
            Position::DesignatedHitter => "DH",
            Position::StartingPitcher => "SP",
            Position::ReliefPitcher => "RP",
            Position::Pitcher => "P",
            Position::Utility => "UTIL",
            Position::Bench => "BENCH",
            Position::InjuredList => "IL",
        }
    }

    /// Whether this position is a hitting position (not a pitcher).
    pub fn is_hitter(&self) -> bool {
        matches!(
            self,
            Position::Catcher
                | Position::FirstBase
                | Position::SecondBase
                | Position::ThirdBase
                | Position::ShortStop
                | Position::Outfield
                | Position::DesignatedHitter
        )
    }

    /// Whether this is a pitching position (SP, RP, or generic P).
    pub fn is_pitcher(&self) -> bool {
        matches!(
            self,
            Position::StartingPitcher | Position::ReliefPitcher | Position::Pitcher
        )
    }

    /// Whether a player eligible at `self` can fill a `slot` roster spot.
    ///
    /// A generic P slot takes any pitcher; every other slot needs an exact
    /// match.
    pub fn fills(&self, slot: Position) -> bool {
        *self == slot || (slot == Position::Pitcher && self.is_pitcher())
    }

    /// Whether this is a catch-all slot rather than a concrete playing position.
    /// Catch-all slots carry no position-specific demand.
    pub fn is_meta_slot(&self) -> bool {
        matches!(self, Position::Utility | Position::Bench | Position::InjuredList)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Error returned when an eligibility field cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized position label '{label}' in eligibility '{raw}'")]
pub struct EligibilityError {
    pub label: String,
    pub raw: String,
}

/// Parse a textual eligibility list into concrete playing positions.
///
/// Accepts list-literal text (`['SS', '2B']`) as well as `/`, `,`, `|` or
/// whitespace separated labels. Blank text and `[]` are an empty list.
/// Catch-all labels (UTIL, BENCH, IL) are dropped; duplicates collapse while
/// keeping first-seen order (so "LF/CF" becomes a single OF).
pub fn parse_eligibility(raw: &str) -> Result<Vec<Position>, EligibilityError> {
    let inner = raw.trim().trim_start_matches('[').trim_end_matches(']');

    let mut positions: Vec<Position> = Vec::new();
    for token in inner.split(|c: char| matches!(c, '/' | ',' | '|') || c.is_whitespace()) {
        let label = token.trim().trim_matches(|c| c == '\'' || c == '"');
        if label.is_empty() {
            continue;
        }
        let pos = Position::from_str_pos(label).ok_or_else(|| EligibilityError {
            label: label.to_string(),
            raw: raw.to_string(),
        })?;
        if pos.is_meta_slot() || positions.contains(&pos) {
            continue;
        }
        positions.push(pos);
    }
    Ok(positions)
}

/// A single recorded draft pick for a tracked team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPick {
    /// Overall pick number (1-indexed), counting untracked picks too.
    pub pick_number: usize,
    /// ID of the team that drafted the player.
    pub team_id: String,
    /// Name of the drafted player.
    pub player_name: String,
    /// The eligibility list the pick claims on the team's roster.
    pub positions: Vec<Position>,
    /// When the pick was recorded.
    pub picked_at: DateTime<Utc>,
}
