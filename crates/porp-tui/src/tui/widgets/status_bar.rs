// Status bar widget: league, draft progress, team on the clock, tabs, and
// the last command's feedback.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, StatusMessage};
use crate::protocol::TabId;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [league] [pick/round] [on the clock] [tab bar] [message]
pub fn render(frame: &mut Frame, area: Rect, app: &App, state: &ViewState) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.config.league.name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            progress_text(app.session.drafted_count(), app.current_round()),
            Style::default().fg(Color::White),
        ),
        separator(),
        Span::styled(
            clock_text(app.team_on_clock(), app.config.league.my_team.as_deref()),
            clock_style(app.team_on_clock(), app.config.league.my_team.as_deref()),
        ),
        separator(),
    ];

    spans.extend(tab_spans(state.active_tab));

    if let Some(message) = &state.message {
        spans.push(separator());
        spans.push(message_span(message));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

fn separator() -> Span<'static> {
    Span::styled(" | ", Style::default().fg(Color::Gray))
}

/// "Pick 13 (Rd 2)": the pick about to be made, not the last one.
pub fn progress_text(drafted: usize, round: usize) -> String {
    format!("Pick {} (Rd {})", drafted + 1, round)
}

pub fn clock_text(on_clock: Option<&str>, my_team: Option<&str>) -> String {
    match on_clock {
        Some(team) if Some(team) == my_team => format!("On the clock: {team} (you)"),
        Some(team) => format!("On the clock: {team}"),
        None => "On the clock: --".to_string(),
    }
}

fn clock_style(on_clock: Option<&str>, my_team: Option<&str>) -> Style {
    if on_clock.is_some() && on_clock == my_team {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn message_span(message: &StatusMessage) -> Span<'static> {
    let color = if message.is_error {
        Color::Red
    } else {
        Color::Green
    };
    Span::styled(message.text.clone(), Style::default().fg(color))
}

/// Build tab indicator spans with the active tab highlighted.
/// E.g. "[1:Overall] [2:By Position] [3:Team Needs] ..."
pub fn tab_spans(active: TabId) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, tab_id) in TabId::ALL.into_iter().enumerate() {
        let style = if tab_id == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}:{}]", i + 1, tab_id.label()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
