// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI keeps only presentation state in `ViewState` (active tab, scroll
// offsets, open prompt, last status message). Draft data lives in `App`,
// which the loop mutates through `App::handle_command` before redrawing.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashMap;

use crossterm::event::{self, Event};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::info;

use crate::app::{App, CommandOutcome, StatusMessage};
use crate::protocol::TabId;
use layout::{build_layout, AppLayout};

/// What the open text prompt will do on Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Record a pick: `Name`, `Name @`, or `Name @ Team`.
    Draft,
    /// Add a contingency target.
    Target,
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Draft => "Draft (Name [@ Team])",
            PromptKind::Target => "Add target",
        }
    }
}

/// A one-line text prompt in the help bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Prompt {
            kind,
            buffer: String::new(),
        }
    }
}

/// Presentation state owned by the TUI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_tab: TabId,
    /// Per-tab scroll offsets keyed by `TabId::scroll_key`.
    pub scroll_offset: HashMap<String, usize>,
    pub prompt: Option<Prompt>,
    /// Feedback from the last command, shown in the status bar.
    pub message: Option<StatusMessage>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            active_tab: TabId::Overall,
            scroll_offset: HashMap::new(),
            prompt: None,
            message: None,
        }
    }
}

impl ViewState {
    /// Scroll offset for a tab, 0 if it was never scrolled.
    pub fn scroll_for(&self, tab: TabId) -> usize {
        self.scroll_offset
            .get(tab.scroll_key())
            .copied()
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the full dashboard.
pub fn render_frame(frame: &mut Frame, app: &App, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, app, state);
    render_main_panel(frame, &layout, app, state);
    widgets::sidebar::render_my_needs(frame, layout.my_needs, app);
    widgets::sidebar::render_levels(frame, layout.levels, app);
    render_help_bar(frame, &layout, state);
}

fn render_main_panel(frame: &mut Frame, layout: &AppLayout, app: &App, state: &ViewState) {
    let area = layout.main_panel;
    let scroll = state.scroll_for(state.active_tab);
    match state.active_tab {
        TabId::Overall => widgets::rankings::render_overall(frame, area, app, scroll),
        TabId::ByPosition => widgets::rankings::render_by_position(frame, area, app, scroll),
        TabId::TeamNeeds => widgets::team_needs::render(frame, area, app, scroll),
        TabId::Contingency => widgets::contingency::render(frame, area, app, scroll),
        TabId::DraftLog => widgets::draft_log::render(frame, area, app, scroll),
    }
}

/// Key hints, or the open prompt with its buffer and a cursor.
fn render_help_bar(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let line = match &state.prompt {
        Some(prompt) => Line::from(vec![
            Span::styled(
                format!(" {}: ", prompt.kind.label()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(prompt.buffer.clone(), Style::default().fg(Color::White)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ]),
        None => Line::from(Span::styled(
            HELP_TEXT,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::DIM),
        )),
    };
    let paragraph = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

const HELP_TEXT: &str =
    " q:Quit | 1-5:Tabs | j/k:Scroll | d:Draft | t:Target | x:Clear targets | e:Export";

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Blocks on keyboard events, applies commands to `app`, redraws.
/// 4. Restores the terminal on exit.
pub fn run(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let result = event_loop(&mut terminal, app, &mut view_state);

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    view_state: &mut ViewState,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| render_frame(frame, app, view_state))?;

        // Resize and mouse events only trigger a redraw.
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        let Some(cmd) = input::handle_key(key_event, view_state) else {
            continue;
        };
        match app.handle_command(cmd) {
            CommandOutcome::Quit => {
                info!("quit requested");
                return Ok(());
            }
            CommandOutcome::Message(message) => view_state.message = Some(message),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
