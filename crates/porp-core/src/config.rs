// Configuration loading and parsing (league.toml, draft.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draft::roster::RosterConfig;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub league: LeagueConfig,
    pub suggestions: SuggestionConfig,
    pub data: DataSource,
}

impl Config {
    pub fn num_teams(&self) -> usize {
        self.league.num_teams
    }

    /// Team ids in draft order.
    pub fn team_ids(&self) -> &[String] {
        &self.league.teams
    }
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

/// Wrapper for the top-level `[league]` table in league.toml.
#[derive(Debug, Clone, Deserialize)]
struct LeagueFile {
    league: RawLeague,
}

#[derive(Debug, Clone, Deserialize)]
struct RawLeague {
    name: String,
    num_teams: usize,
    roster: Vec<String>,
    #[serde(default)]
    teams: Vec<String>,
    #[serde(default)]
    my_team: Option<String>,
}

/// Validated league settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueConfig {
    pub name: String,
    pub num_teams: usize,
    /// Slot layout shared by every team.
    pub roster: RosterConfig,
    /// Team identifiers in draft order; `teams.len() == num_teams`.
    pub teams: Vec<String>,
    /// The user's team, when configured.
    pub my_team: Option<String>,
}

impl LeagueConfig {
    /// League with generated `Team_1..Team_N` ids and no team of its own.
    pub fn new(name: impl Into<String>, num_teams: usize, roster: RosterConfig) -> Self {
        LeagueConfig {
            name: name.into(),
            num_teams,
            roster,
            teams: default_team_ids(num_teams),
            my_team: None,
        }
    }
}

/// `Team_1`, `Team_2`, ... used when league.toml lists no teams.
pub fn default_team_ids(num_teams: usize) -> Vec<String> {
    (1..=num_teams).map(|i| format!("Team_{i}")).collect()
}

// ---------------------------------------------------------------------------
// draft.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire draft.toml file.
#[derive(Debug, Clone, Deserialize)]
struct DraftFile {
    suggestions: SuggestionConfig,
    data_paths: DataPaths,
}

/// How many rows each ranked view produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SuggestionConfig {
    /// Global top-N by PORP.
    pub top_overall: usize,
    /// Top-M per needed position.
    pub per_position: usize,
    /// Top-M per team on the league-wide needs board.
    pub per_team: usize,
    /// Fallbacks listed per contingency target.
    #[serde(default = "default_contingency_depth")]
    pub contingency_depth: usize,
}

fn default_contingency_depth() -> usize {
    3
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataPaths {
    /// Single file with pre-computed fantasy points.
    #[serde(default)]
    pub players: Option<String>,
    /// Raw hitter stats; requires `pitchers` as well.
    #[serde(default)]
    pub hitters: Option<String>,
    /// Raw pitcher stats; requires `hitters` as well.
    #[serde(default)]
    pub pitchers: Option<String>,
}

/// Where player data comes from, with paths resolved against the config base
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// One CSV carrying fantasy points already.
    Points { players: PathBuf },
    /// Separate hitter and pitcher CSVs scored on load.
    RawStats { hitters: PathBuf, pitchers: PathBuf },
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/league.toml` and
/// `config/draft.toml`, relative to the given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_dir = base_dir.join("config");

    // --- league.toml (required) ---
    let league_path = config_dir.join("league.toml");
    let league_text = read_file(&league_path)?;
    let league_file: LeagueFile =
        toml::from_str(&league_text).map_err(|e| ConfigError::ParseError {
            path: league_path.clone(),
            source: e,
        })?;

    // --- draft.toml (required) ---
    let draft_path = config_dir.join("draft.toml");
    let draft_text = read_file(&draft_path)?;
    let draft_file: DraftFile =
        toml::from_str(&draft_text).map_err(|e| ConfigError::ParseError {
            path: draft_path.clone(),
            source: e,
        })?;

    let league = validate_league(league_file.league)?;
    validate_suggestions(&draft_file.suggestions)?;
    let data = resolve_data_source(&draft_file.data_paths, base_dir)?;

    Ok(Config {
        league,
        suggestions: draft_file.suggestions,
        data,
    })
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn validation(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_league(raw: RawLeague) -> Result<LeagueConfig, ConfigError> {
    if raw.num_teams == 0 {
        return Err(validation("league.num_teams", "must be greater than 0"));
    }

    let roster = RosterConfig::from_labels(&raw.roster)
        .map_err(|label| validation("league.roster", format!("unknown slot label '{label}'")))?;
    if roster.starting_positions().is_empty() {
        return Err(validation(
            "league.roster",
            "must contain at least one starting position",
        ));
    }

    let teams = if raw.teams.is_empty() {
        default_team_ids(raw.num_teams)
    } else {
        raw.teams
    };
    if teams.len() != raw.num_teams {
        return Err(validation(
            "league.teams",
            format!("lists {} teams but num_teams is {}", teams.len(), raw.num_teams),
        ));
    }
    for (i, id) in teams.iter().enumerate() {
        if id.trim().is_empty() {
            return Err(validation("league.teams", "team ids must not be empty"));
        }
        if teams[..i].contains(id) {
            return Err(validation("league.teams", format!("duplicate team id '{id}'")));
        }
    }

    if let Some(mine) = &raw.my_team {
        if !teams.contains(mine) {
            return Err(validation(
                "league.my_team",
                format!("'{mine}' is not one of the league's teams"),
            ));
        }
    }

    Ok(LeagueConfig {
        name: raw.name,
        num_teams: raw.num_teams,
        roster,
        teams,
        my_team: raw.my_team,
    })
}

fn validate_suggestions(s: &SuggestionConfig) -> Result<(), ConfigError> {
    let fields: &[(&str, usize)] = &[
        ("suggestions.top_overall", s.top_overall),
        ("suggestions.per_position", s.per_position),
        ("suggestions.per_team", s.per_team),
        ("suggestions.contingency_depth", s.contingency_depth),
    ];
    for (name, val) in fields {
        if *val == 0 {
            return Err(validation(name, "must be > 0"));
        }
    }
    Ok(())
}

fn resolve_data_source(paths: &DataPaths, base_dir: &Path) -> Result<DataSource, ConfigError> {
    let resolve = |p: &str| {
        let path = PathBuf::from(p);
        if path.is_absolute() {
            path
        } else {
            base_dir.join(path)
        }
    };

    match (&paths.players, &paths.hitters, &paths.pitchers) {
        (Some(players), None, None) => Ok(DataSource::Points {
            players: resolve(players),
        }),
        (None, Some(hitters), Some(pitchers)) => Ok(DataSource::RawStats {
            hitters: resolve(hitters),
            pitchers: resolve(pitchers),
        }),
        (Some(_), _, _) => Err(validation(
            "data_paths",
            "set either `players` or `hitters` + `pitchers`, not both",
        )),
        _ => Err(validation(
            "data_paths",
            "set `players`, or both `hitters` and `pitchers`",
        )),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
