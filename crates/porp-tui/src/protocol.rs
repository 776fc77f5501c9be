// Messages between the input layer and the app orchestrator.

/// Main panel tabs, in key order (1-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Overall,
    ByPosition,
    TeamNeeds,
    Contingency,
    DraftLog,
}

impl TabId {
    pub const ALL: [TabId; 5] = [
        TabId::Overall,
        TabId::ByPosition,
        TabId::TeamNeeds,
        TabId::Contingency,
        TabId::DraftLog,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TabId::Overall => "Overall",
            TabId::ByPosition => "By Position",
            TabId::TeamNeeds => "Team Needs",
            TabId::Contingency => "Contingency",
            TabId::DraftLog => "Draft Log",
        }
    }

    /// Key under which this tab's scroll offset is stored.
    pub fn scroll_key(&self) -> &'static str {
        match self {
            TabId::Overall => "overall",
            TabId::ByPosition => "by_position",
            TabId::TeamNeeds => "team_needs",
            TabId::Contingency => "contingency",
            TabId::DraftLog => "draft_log",
        }
    }
}

/// Which team a typed pick goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamChoice {
    /// No team: the player is only struck from the pool.
    Untracked,
    /// Whoever the snake order says is picking now.
    OnTheClock,
    Named(String),
}

/// Commands produced by key handling and executed by the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    DraftPlayer { player: String, team: TeamChoice },
    AddTarget(String),
    ClearTargets,
    /// Write the current dashboard state to a JSON report.
    Export,
    Quit,
}
