// Team needs widget: league-wide board of open slots and best fits.
//
// One row per team in draft order: Team, Filled, Needs, Claimed, Best fits.
// The team on the clock is highlighted; my team is bold.

use std::collections::BTreeMap;

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use porp_core::draft::pick::Position;

use super::{clamp_scroll, empty_panel};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let title = format!("Team Needs ({} teams)", app.board.len());
    if app.board.is_empty() {
        frame.render_widget(empty_panel(title, "  No teams configured."), area);
        return;
    }

    let visible = (area.height as usize).saturating_sub(3);
    let offset = clamp_scroll(scroll, app.board.len(), visible);
    let roster_size = app.config.league.roster.roster_size();
    let on_clock = app.team_on_clock();
    let my_team = app.config.league.my_team.as_deref();

    let header = Row::new(vec![
        Cell::from("Team"),
        Cell::from("Filled"),
        Cell::from("Needs"),
        Cell::from("Claimed"),
        Cell::from("Best fits"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .board
        .iter()
        .skip(offset)
        .map(|summary| {
            let mut style = Style::default();
            if Some(summary.team_id.as_str()) == on_clock {
                style = style.fg(Color::Black).bg(Color::Yellow);
            }
            if Some(summary.team_id.as_str()) == my_team {
                style = style.add_modifier(Modifier::BOLD);
            }
            let fits = summary
                .suggestions
                .iter()
                .map(|v| v.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Row::new(vec![
                Cell::from(summary.team_id.clone()),
                Cell::from(format!("{}/{}", summary.filled, roster_size)),
                Cell::from(format_needs(&summary.needs)),
                Cell::from(format_counts(&summary.position_counts)),
                Cell::from(fits),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(22),
        Constraint::Length(22),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

/// Open starting slots, e.g. "C:1 SS:1". "full" when nothing is open.
pub fn format_needs(needs: &BTreeMap<Position, usize>) -> String {
    let parts: Vec<String> = needs
        .iter()
        .filter(|(_, &n)| n > 0)
        .map(|(pos, n)| format!("{}:{}", pos.display_str(), n))
        .collect();
    if parts.is_empty() {
        "full".to_string()
    } else {
        parts.join(" ")
    }
}

/// Claimed players per position, e.g. "C:1 OF:2". "--" before any pick.
pub fn format_counts(counts: &BTreeMap<Position, usize>) -> String {
    if counts.is_empty() {
        return "--".to_string();
    }
    counts
        .iter()
        .map(|(pos, n)| format!("{}:{}", pos.display_str(), n))
        .collect::<Vec<_>>()
        .join(" ")
}
