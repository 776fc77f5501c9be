// Application orchestrator: owns the config, pool, and draft session, turns
// user commands into session mutations, and keeps the derived views current.
//
// Every view is recomputed from scratch after each accepted command. The
// engine is cheap enough that no incremental bookkeeping is needed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use porp_core::config::Config;
use porp_core::draft::order::{on_the_clock, round_of};
use porp_core::draft::pick::DraftPick;
use porp_core::draft::state::{DraftError, DraftSession};
use porp_core::valuation::contingency::{contingency_tree, Contingency};
use porp_core::valuation::pool::PlayerPool;
use porp_core::valuation::suggest::{
    live_suggestions, team_needs_board, Suggestions, TeamNeedsSummary,
};

use crate::protocol::{TeamChoice, UserCommand};

/// One line of feedback for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: true,
        }
    }
}

/// What the event loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Message(StatusMessage),
    Quit,
}

/// Snapshot written by the export command.
#[derive(Debug, Serialize)]
struct DraftReport<'a> {
    league: &'a str,
    generated_at: DateTime<Utc>,
    picks_made: usize,
    picks: &'a [DraftPick],
    suggestions: &'a Suggestions,
    team_needs: &'a [TeamNeedsSummary],
    contingencies: &'a [Contingency],
}

pub struct App {
    pub config: Config,
    pub pool: PlayerPool,
    pub session: DraftSession,
    /// Contingency targets in the order they were added.
    pub targets: Vec<String>,
    pub suggestions: Suggestions,
    pub board: Vec<TeamNeedsSummary>,
    pub contingencies: Vec<Contingency>,
}

impl App {
    /// Start a fresh draft with the configured teams.
    pub fn new(config: Config, pool: PlayerPool) -> anyhow::Result<Self> {
        let session = DraftSession::new(config.team_ids().to_vec());
        let mut app = App {
            config,
            pool,
            session,
            targets: Vec::new(),
            suggestions: Suggestions::default(),
            board: Vec::new(),
            contingencies: Vec::new(),
        };
        app.refresh().context("failed to compute initial suggestions")?;
        Ok(app)
    }

    /// Recompute every derived view from the current session.
    pub fn refresh(&mut self) -> Result<(), DraftError> {
        let league = &self.config.league;
        self.suggestions = live_suggestions(
            &self.pool,
            &self.session,
            league,
            league.my_team.as_deref(),
            &self.config.suggestions,
        )?;
        self.board = team_needs_board(
            &self.pool,
            &self.session,
            league,
            self.config.suggestions.per_team,
        );
        self.contingencies = contingency_tree(
            &self.pool,
            &self.session,
            league,
            &self.targets,
            self.config.suggestions.contingency_depth,
        );
        Ok(())
    }

    /// The team the snake order puts on the clock.
    pub fn team_on_clock(&self) -> Option<&str> {
        on_the_clock(&self.session).map(|t| t.team_id.as_str())
    }

    /// Current 1-indexed round.
    pub fn current_round(&self) -> usize {
        round_of(self.session.drafted_count(), self.config.num_teams())
    }

    /// Resolve typed text to a pool name: exact match first, then a unique
    /// case-insensitive match.
    pub fn resolve_player(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if let Some(p) = self.pool.get(input) {
            return Some(p.name.as_str());
        }
        let lower = input.to_lowercase();
        let mut matches = self
            .pool
            .players()
            .iter()
            .filter(|p| p.name.to_lowercase() == lower);
        match (matches.next(), matches.next()) {
            (Some(p), None) => Some(p.name.as_str()),
            _ => None,
        }
    }

    /// Resolve typed text to a team id, case-insensitively.
    fn resolve_team(&self, input: &str) -> String {
        let input = input.trim();
        self.config
            .team_ids()
            .iter()
            .find(|id| id.eq_ignore_ascii_case(input))
            .cloned()
            .unwrap_or_else(|| input.to_string())
    }

    /// Execute a user command and report what happened.
    pub fn handle_command(&mut self, cmd: UserCommand) -> CommandOutcome {
        match cmd {
            UserCommand::Quit => CommandOutcome::Quit,
            UserCommand::DraftPlayer { player, team } => {
                CommandOutcome::Message(self.draft_player(&player, team))
            }
            UserCommand::AddTarget(name) => CommandOutcome::Message(self.add_target(&name)),
            UserCommand::ClearTargets => {
                self.targets.clear();
                self.contingencies.clear();
                CommandOutcome::Message(StatusMessage::info("Targets cleared"))
            }
            UserCommand::Export => {
                let dir = PathBuf::from("exports");
                CommandOutcome::Message(match self.export_report(&dir) {
                    Ok(path) => StatusMessage::info(format!("Exported {}", path.display())),
                    Err(e) => {
                        warn!("export failed: {:#}", e);
                        StatusMessage::error(format!("Export failed: {e:#}"))
                    }
                })
            }
        }
    }

    fn draft_player(&mut self, input: &str, team: TeamChoice) -> StatusMessage {
        let Some(name) = self.resolve_player(input).map(str::to_string) else {
            return StatusMessage::error(format!("No player named '{}'", input.trim()));
        };
        let team_id = match team {
            TeamChoice::Untracked => None,
            TeamChoice::OnTheClock => match self.team_on_clock() {
                Some(id) => Some(id.to_string()),
                None => return StatusMessage::error("No team is on the clock"),
            },
            TeamChoice::Named(id) => Some(self.resolve_team(&id)),
        };

        let recorded = match self
            .session
            .record_pick(&self.pool, &name, team_id.as_deref())
        {
            Ok(pick) => pick.map(|p| (p.pick_number, p.team_id.clone())),
            Err(e) => return StatusMessage::error(e.to_string()),
        };

        if let Err(e) = self.refresh() {
            warn!("refresh after pick failed: {}", e);
            return StatusMessage::error(e.to_string());
        }

        match recorded {
            Some((number, team)) => StatusMessage::info(format!("#{number} {name} -> {team}")),
            None => StatusMessage::info(format!(
                "#{} {} marked drafted",
                self.session.drafted_count(),
                name
            )),
        }
    }

    fn add_target(&mut self, input: &str) -> StatusMessage {
        let Some(name) = self.resolve_player(input).map(str::to_string) else {
            return StatusMessage::error(format!("No player named '{}'", input.trim()));
        };
        if self.session.is_drafted(&name) {
            return StatusMessage::error(format!("{name} is already drafted"));
        }
        if self.targets.contains(&name) {
            return StatusMessage::info(format!("{name} is already a target"));
        }
        self.targets.push(name.clone());
        if let Err(e) = self.refresh() {
            return StatusMessage::error(e.to_string());
        }
        StatusMessage::info(format!("Target added: {name}"))
    }

    /// Write the dashboard state as pretty JSON under `dir` and return the
    /// file path.
    pub fn export_report(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        let now = Utc::now();
        let report = DraftReport {
            league: &self.config.league.name,
            generated_at: now,
            picks_made: self.session.drafted_count(),
            picks: self.session.picks(),
            suggestions: &self.suggestions,
            team_needs: &self.board,
            contingencies: &self.contingencies,
        };
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;

        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let path = dir.join(format!("draft-report-{}.json", now.format("%Y%m%d-%H%M%S")));
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        info!("exported draft report to {}", path.display());
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------
