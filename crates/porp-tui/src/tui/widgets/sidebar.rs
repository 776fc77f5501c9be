// Sidebar widgets: my open starting slots and the live replacement levels.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::empty_panel;
use crate::app::App;

/// One line per starting position: "C    0/1" with filled slots dimmed.
pub fn render_my_needs(frame: &mut Frame, area: Rect, app: &App) {
    let Some(team) = app.suggestions.team_id.as_deref() else {
        frame.render_widget(
            empty_panel("My Needs".to_string(), "  Set my_team in league.toml."),
            area,
        );
        return;
    };

    let roster = &app.config.league.roster;
    let lines: Vec<Line> = app
        .suggestions
        .needs
        .iter()
        .map(|(&pos, &need)| {
            let slots = roster.slot_count(pos);
            let filled = slots.saturating_sub(need);
            let style = if need == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(
                format!(" {:<5}{}/{}", pos.display_str(), filled, slots),
                style,
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("My Needs ({team})")),
    );
    frame.render_widget(paragraph, area);
}

/// Replacement level per starting position for the current pool.
pub fn render_levels(frame: &mut Frame, area: Rect, app: &App) {
    let levels = &app.suggestions.replacement_levels;
    if levels.is_empty() {
        frame.render_widget(
            empty_panel("Replacement".to_string(), "  No levels."),
            area,
        );
        return;
    }

    let lines: Vec<Line> = levels
        .iter()
        .map(|(pos, level)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<5}", pos.display_str()),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{level:>8.1}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Replacement"));
    frame.render_widget(paragraph, area);
}
