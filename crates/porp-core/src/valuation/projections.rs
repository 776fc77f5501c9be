// Player data loading.
//
// Two CSV shapes are supported: a single file that already carries fantasy
// points, or separate hitter and pitcher stat files scored on load. Loading
// fails fast: the first bad row aborts with the file and row in the error.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::pool::{Player, PlayerPool};
use super::scoring::{HitterStats, PitcherStats};
use crate::config::{Config, DataSource};
use crate::draft::pick::{parse_eligibility, Position};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path}, row {row}: {message}")]
    InvalidRow {
        path: String,
        row: usize,
        message: String,
    },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

/// Row of a player file with pre-computed points. Extra columns are
/// absorbed via `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawPointsRow {
    #[serde(alias = "Name")]
    Player: String,
    #[serde(alias = "POS", alias = "Pos", alias = "Eligible")]
    Positions: String,
    #[serde(alias = "Points", alias = "FPTS")]
    FantasyPoints: f64,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Hitter stat line.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawHitterRow {
    #[serde(alias = "Name")]
    Player: String,
    #[serde(alias = "POS", alias = "Pos", alias = "Eligible")]
    Positions: String,
    H: f64,
    #[serde(rename = "1B")]
    Singles: f64,
    #[serde(rename = "2B")]
    Doubles: f64,
    #[serde(rename = "3B")]
    Triples: f64,
    HR: f64,
    RBI: f64,
    SB: f64,
    CS: f64,
    #[serde(alias = "SO")]
    K: f64,
    SAC: f64,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Pitcher stat line.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawPitcherRow {
    #[serde(alias = "Name")]
    Player: String,
    #[serde(alias = "POS", alias = "Pos", alias = "Eligible")]
    Positions: String,
    GS: f64,
    /// Decimal innings: 154.67, not the box-score 154.2.
    IP: f64,
    BB: f64,
    ER: f64,
    PO: f64,
    QS: f64,
    W: f64,
    L: f64,
    SV: f64,
    BS: f64,
    CG: f64,
    NH: f64,
    PG: f64,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

impl RawHitterRow {
    fn stats(&self) -> HitterStats {
        HitterStats {
            h: self.H,
            singles: self.Singles,
            doubles: self.Doubles,
            triples: self.Triples,
            hr: self.HR,
            rbi: self.RBI,
            sb: self.SB,
            cs: self.CS,
            k: self.K,
            sac: self.SAC,
        }
    }
}

impl RawPitcherRow {
    fn stats(&self) -> PitcherStats {
        PitcherStats {
            gs: self.GS,
            ip: self.IP,
            bb: self.BB,
            er: self.ER,
            po: self.PO,
            qs: self.QS,
            w: self.W,
            l: self.L,
            sv: self.SV,
            bs: self.BS,
            cg: self.CG,
            nh: self.NH,
            pg: self.PG,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Returns true if all given f64 values are finite (not NaN or Infinity).
fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Tracks row numbers and duplicate names while reading one file.
struct RowChecker<'a> {
    source: &'a str,
    seen: HashSet<String>,
}

impl<'a> RowChecker<'a> {
    fn new(source: &'a str) -> Self {
        RowChecker {
            source,
            seen: HashSet::new(),
        }
    }

    fn invalid(&self, row: usize, message: impl Into<String>) -> ProjectionError {
        ProjectionError::InvalidRow {
            path: self.source.to_string(),
            row,
            message: message.into(),
        }
    }

    fn csv(&self, source: csv::Error) -> ProjectionError {
        ProjectionError::Csv {
            path: self.source.to_string(),
            source,
        }
    }

    /// Validate the identity columns shared by every shape and build the
    /// eligibility list. `row` is 1-indexed over data rows.
    fn identity(
        &mut self,
        row: usize,
        raw_name: &str,
        raw_positions: &str,
        numbers: &[f64],
    ) -> Result<(String, Vec<Position>), ProjectionError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(self.invalid(row, "empty player name"));
        }
        if !all_finite(numbers) {
            return Err(self.invalid(row, format!("non-finite stat value for '{name}'")));
        }
        let positions =
            parse_eligibility(raw_positions).map_err(|e| self.invalid(row, e.to_string()))?;
        if !self.seen.insert(name.to_string()) {
            return Err(self.invalid(row, format!("duplicate player name '{name}'")));
        }
        Ok((name.to_string(), positions))
    }

    fn finish(&self, players: &[Player]) -> Result<(), ProjectionError> {
        if players.is_empty() {
            return Err(ProjectionError::Validation(format!(
                "{} produced zero player rows",
                self.source
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

fn load_points_from_reader<R: Read>(rdr: R, source: &str) -> Result<Vec<Player>, ProjectionError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut checker = RowChecker::new(source);
    let mut players = Vec::new();
    for (i, result) in reader.deserialize::<RawPointsRow>().enumerate() {
        let raw = result.map_err(|e| checker.csv(e))?;
        let (name, positions) =
            checker.identity(i + 1, &raw.Player, &raw.Positions, &[raw.FantasyPoints])?;
        players.push(Player::with_points(name, positions, raw.FantasyPoints));
    }
    checker.finish(&players)?;
    Ok(players)
}

fn load_hitters_from_reader<R: Read>(rdr: R, source: &str) -> Result<Vec<Player>, ProjectionError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut checker = RowChecker::new(source);
    let mut players = Vec::new();
    for (i, result) in reader.deserialize::<RawHitterRow>().enumerate() {
        let raw = result.map_err(|e| checker.csv(e))?;
        let numbers = [
            raw.H, raw.Singles, raw.Doubles, raw.Triples, raw.HR, raw.RBI, raw.SB, raw.CS, raw.K,
            raw.SAC,
        ];
        let (name, positions) = checker.identity(i + 1, &raw.Player, &raw.Positions, &numbers)?;
        players.push(Player::hitter(name, positions, raw.stats()));
    }
    checker.finish(&players)?;
    Ok(players)
}

fn load_pitchers_from_reader<R: Read>(rdr: R, source: &str) -> Result<Vec<Player>, ProjectionError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut checker = RowChecker::new(source);
    let mut players = Vec::new();
    for (i, result) in reader.deserialize::<RawPitcherRow>().enumerate() {
        let raw = result.map_err(|e| checker.csv(e))?;
        let numbers = [
            raw.GS, raw.IP, raw.BB, raw.ER, raw.PO, raw.QS, raw.W, raw.L, raw.SV, raw.BS, raw.CG,
            raw.NH, raw.PG,
        ];
        let (name, positions) = checker.identity(i + 1, &raw.Player, &raw.Positions, &numbers)?;
        players.push(Player::pitcher(name, positions, raw.stats()));
    }
    checker.finish(&players)?;
    Ok(players)
}

/// Concatenate hitters and pitchers into one list, hitters first.
///
/// A name present in both files is a two-way player: the pitching line is
/// folded into the hitter entry (positions unioned, points summed) and keeps
/// the hitter's place in load order.
fn combine(hitters: Vec<Player>, pitchers: Vec<Player>) -> Vec<Player> {
    let mut players = hitters;
    let index: HashMap<String, usize> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (p.name.clone(), i))
        .collect();

    for pitcher in pitchers {
        match index.get(&pitcher.name) {
            Some(&i) => {
                info!("merging two-way player '{}'", pitcher.name);
                let hitter = players[i].clone();
                players[i] = hitter.merge_two_way(pitcher);
            }
            None => players.push(pitcher),
        }
    }
    players
}

fn open(path: &Path) -> Result<std::fs::File, ProjectionError> {
    std::fs::File::open(path).map_err(|e| ProjectionError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

/// Load a player file that already carries fantasy points.
pub fn load_points_file(path: &Path) -> Result<Vec<Player>, ProjectionError> {
    load_points_from_reader(open(path)?, &path.display().to_string())
}

/// Load and score a hitter stats file.
pub fn load_hitter_stats(path: &Path) -> Result<Vec<Player>, ProjectionError> {
    load_hitters_from_reader(open(path)?, &path.display().to_string())
}

/// Load and score a pitcher stats file.
///
/// IP is read as decimal innings, so two-thirds of an inning is `.67`. The
/// box-score notation (`154.2` for 154 and two-thirds) would be scored as
/// 154.2 innings.
pub fn load_pitcher_stats(path: &Path) -> Result<Vec<Player>, ProjectionError> {
    load_pitchers_from_reader(open(path)?, &path.display().to_string())
}

/// Load the player pool using the data source from the config.
pub fn load_pool(config: &Config) -> Result<PlayerPool, ProjectionError> {
    load_pool_from_source(&config.data)
}

/// Load the player pool from an explicit data source. Exposed for testing.
pub fn load_pool_from_source(source: &DataSource) -> Result<PlayerPool, ProjectionError> {
    let players = match source {
        DataSource::Points { players } => load_points_file(players)?,
        DataSource::RawStats { hitters, pitchers } => {
            let hitters = load_hitter_stats(hitters)?;
            let pitchers = load_pitcher_stats(pitchers)?;
            info!(
                "loaded {} hitters and {} pitchers",
                hitters.len(),
                pitchers.len()
            );
            combine(hitters, pitchers)
        }
    };

    let pool = PlayerPool::new(players).map_err(|e| ProjectionError::Validation(e.to_string()))?;
    info!("player pool ready: {} players", pool.len());
    Ok(pool)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const HITTER_HEADER: &str = "Player,Positions,H,1B,2B,3B,HR,RBI,SB,CS,K,SAC";
    const PITCHER_HEADER: &str = "Player,Positions,GS,IP,BB,ER,PO,QS,W,L,SV,BS,CG,NH,PG";

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // -- Points shape --

    #[test]
    fn points_csv_loads_in_order() {
        let csv_data = "\
Player,Positions,FantasyPoints
Bobby Witt Jr.,['SS'],612.5
Mookie Betts,\"['2B', 'SS', 'OF']\",580";

        let players = load_points_from_reader(csv_data.as_bytes(), "players.csv").unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "Bobby Witt Jr.");
        assert_eq!(players[0].positions, vec![Position::ShortStop]);
        assert!(approx_eq(players[0].fantasy_points, 612.5));
        assert_eq!(
            players[1].positions,
            vec![Position::SecondBase, Position::ShortStop, Position::Outfield]
        );
        assert!(approx_eq(players[1].fantasy_points, 580.0));
    }

    #[test]
    fn points_csv_accepts_aliases_and_extra_columns() {
        let csv_data = "\
Name,Team,POS,FPTS,ADP
Cal Raleigh,SEA,C,401.0,55.2";

        let players = load_points_from_reader(csv_data.as_bytes(), "players.csv").unwrap();
        assert_eq!(players[0].name, "Cal Raleigh");
        assert_eq!(players[0].positions, vec![Position::Catcher]);
    }

    #[test]
    fn blank_eligibility_is_empty_list() {
        let csv_data = "\
Player,Positions,FantasyPoints
Prospect,,12";

        let players = load_points_from_reader(csv_data.as_bytes(), "players.csv").unwrap();
        assert!(players[0].positions.is_empty());
    }

    #[test]
    fn missing_points_column_fails() {
        let csv_data = "\
Player,Positions
Someone,C";

        let err = load_points_from_reader(csv_data.as_bytes(), "players.csv").unwrap_err();
        assert!(matches!(err, ProjectionError::Csv { .. }), "got {err}");
    }

    #[test]
    fn non_numeric_points_fail() {
        let csv_data = "\
Player,Positions,FantasyPoints
Someone,C,lots";

        let err = load_points_from_reader(csv_data.as_bytes(), "players.csv").unwrap_err();
        assert!(matches!(err, ProjectionError::Csv { .. }), "got {err}");
    }

    #[test]
    fn non_finite_points_fail_with_row() {
        let csv_data = "\
Player,Positions,FantasyPoints
Fine,C,100
Broken,C,NaN";

        match load_points_from_reader(csv_data.as_bytes(), "players.csv").unwrap_err() {
            ProjectionError::InvalidRow { path, row, .. } => {
                assert_eq!(path, "players.csv");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidRow, got {other}"),
        }
    }

    #[test]
    fn unknown_position_fails() {
        let csv_data = "\
Player,Positions,FantasyPoints
Quarterback,QB,300";

        match load_points_from_reader(csv_data.as_bytes(), "players.csv").unwrap_err() {
            ProjectionError::InvalidRow { row, message, .. } => {
                assert_eq!(row, 1);
                assert!(message.contains("QB"));
            }
            other => panic!("expected InvalidRow, got {other}"),
        }
    }

    #[test]
    fn empty_name_fails() {
        let csv_data = "\
Player,Positions,FantasyPoints
  ,C,300";

        let err = load_points_from_reader(csv_data.as_bytes(), "players.csv").unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidRow { row: 1, .. }), "got {err}");
    }

    #[test]
    fn duplicate_name_in_one_file_fails() {
        let csv_data = "\
Player,Positions,FantasyPoints
Will Smith,C,300
Will Smith,C,250";

        match load_points_from_reader(csv_data.as_bytes(), "players.csv").unwrap_err() {
            ProjectionError::InvalidRow { row, message, .. } => {
                assert_eq!(row, 2);
                assert!(message.contains("duplicate"));
            }
            other => panic!("expected InvalidRow, got {other}"),
        }
    }

    #[test]
    fn header_only_file_fails() {
        let csv_data = "Player,Positions,FantasyPoints\n";
        let err = load_points_from_reader(csv_data.as_bytes(), "players.csv").unwrap_err();
        assert!(matches!(err, ProjectionError::Validation(_)), "got {err}");
    }

    // -- Raw stat shape --

    #[test]
    fn hitter_csv_scores_rows() {
        let csv_data = format!(
            "{HITTER_HEADER}\nSlugger,1B/OF,150,90,30,3,27,95,12,4,120,2"
        );
        let players = load_hitters_from_reader(csv_data.as_bytes(), "hitters.csv").unwrap();
        assert_eq!(players[0].positions, vec![Position::FirstBase, Position::Outfield]);
        assert!(approx_eq(players[0].fantasy_points, 401.0));
        assert!(players[0].hitting.is_some());
    }

    #[test]
    fn hitter_csv_accepts_so_alias() {
        let csv_data = "\
Player,Positions,H,1B,2B,3B,HR,RBI,SB,CS,SO,SAC
Whiffer,DH,0,0,0,0,0,0,0,0,100,0";
        let players = load_hitters_from_reader(csv_data.as_bytes(), "hitters.csv").unwrap();
        assert!(approx_eq(players[0].fantasy_points, -100.0));
    }

    #[test]
    fn pitcher_csv_scores_rows() {
        let csv_data = format!(
            "{PITCHER_HEADER}\nWorkhorse,SP,30,180,50,70,540,18,12,8,0,0,1,0,0"
        );
        let players = load_pitchers_from_reader(csv_data.as_bytes(), "pitchers.csv").unwrap();
        assert_eq!(players[0].positions, vec![Position::StartingPitcher]);
        assert!(approx_eq(players[0].fantasy_points, 899.0));
        assert!(players[0].pitching.is_some());
    }

    #[test]
    fn pitcher_csv_missing_column_fails() {
        let csv_data = "\
Player,Positions,GS,IP
Short,SP,30,180";
        let err = load_pitchers_from_reader(csv_data.as_bytes(), "pitchers.csv").unwrap_err();
        assert!(matches!(err, ProjectionError::Csv { .. }), "got {err}");
    }

    #[test]
    fn combine_concatenates_and_merges_two_way() {
        let hitters = vec![
            Player::with_points("Two Way", vec![Position::DesignatedHitter], 500.0),
            Player::with_points("Bat Only", vec![Position::Catcher], 300.0),
        ];
        let pitchers = vec![
            Player::with_points("Arm Only", vec![Position::ReliefPitcher], 200.0),
            Player::with_points("Two Way", vec![Position::StartingPitcher], 400.0),
        ];

        let players = combine(hitters, pitchers);
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Two Way", "Bat Only", "Arm Only"]);
        assert_eq!(
            players[0].positions,
            vec![Position::DesignatedHitter, Position::StartingPitcher]
        );
        assert!(approx_eq(players[0].fantasy_points, 900.0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = DataSource::Points {
            players: std::path::PathBuf::from("/nonexistent/porp/players.csv"),
        };
        let err = load_pool_from_source(&source).unwrap_err();
        assert!(matches!(err, ProjectionError::Io { .. }), "got {err}");
    }
}
