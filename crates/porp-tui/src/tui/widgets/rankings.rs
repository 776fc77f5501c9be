// Rankings widgets: the global best-available table and the per-position
// lists for my team's open starting slots.
//
// Columns: #, Name, Pos, Pts, Repl, PORP. Negative PORP is dimmed red.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Row, Table};
use ratatui::Frame;

use porp_core::valuation::porp::PlayerValuation;

use super::{clamp_scroll, empty_panel, format_positions};
use crate::app::App;

/// Render the top-N available players by PORP.
pub fn render_overall(frame: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let players = &app.suggestions.best_overall;
    let title = format!("Overall (top {})", players.len());
    if players.is_empty() {
        frame.render_widget(empty_panel(title, "  No players available."), area);
        return;
    }

    // Borders and header row.
    let visible = (area.height as usize).saturating_sub(3);
    let offset = clamp_scroll(scroll, players.len(), visible);

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Name"),
        Cell::from("Pos"),
        Cell::from("Pts"),
        Cell::from("Repl"),
        Cell::from("PORP"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = players
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(i, v)| {
            let style = if app.targets.contains(&v.name) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(v.name.clone()),
                Cell::from(format_positions(&v.positions)),
                Cell::from(format!("{:.1}", v.fantasy_points)),
                Cell::from(replacement_text(v)),
                Cell::from(Span::styled(format!("{:.1}", v.porp), porp_style(v.porp))),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(18),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Length(11),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

/// Render one section per needed position: a header with the open slot
/// count and replacement level, then the best available players there.
pub fn render_by_position(frame: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let title = match &app.suggestions.team_id {
        Some(team) => format!("By Position ({team})"),
        None => "By Position".to_string(),
    };
    if app.suggestions.by_position.is_empty() {
        frame.render_widget(empty_panel(title, "  No open starting slots."), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for section in &app.suggestions.by_position {
        let level = app
            .suggestions
            .replacement_levels
            .get(&section.position)
            .map_or_else(|| "--".to_string(), |l| format!("{l:.1}"));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<5}", section.position.display_str()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" need {}  repl {}", section.need, level),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        if section.players.is_empty() {
            lines.push(Line::from(Span::styled(
                "    (none available)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for v in &section.players {
            lines.push(player_line(v));
        }
    }

    let visible = (area.height as usize).saturating_sub(2);
    let offset = clamp_scroll(scroll, lines.len(), visible);
    let items: Vec<ListItem> = lines
        .into_iter()
        .skip(offset)
        .take(visible.max(1))
        .map(ListItem::new)
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

/// "    Juan Soto            OF       620.0  PORP 60.0"
pub(crate) fn player_line(v: &PlayerValuation) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("    {:<22}", v.name)),
        Span::styled(
            format!("{:<9}", format_positions(&v.positions)),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(format!("{:>7.1}", v.fantasy_points)),
        Span::styled(format!("  PORP {:.1}", v.porp), porp_style(v.porp)),
    ])
}

/// "380.0 (C)", or "--" when no position of the player is scored.
fn replacement_text(v: &PlayerValuation) -> String {
    match v.replacement_position {
        Some(pos) => format!("{:.1} ({})", v.replacement_level, pos.display_str()),
        None => "--".to_string(),
    }
}

fn porp_style(porp: f64) -> Style {
    if porp < 0.0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Green)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
