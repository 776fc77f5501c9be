// Contingency widget: for each target, who to take if the target is gone.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use super::rankings::player_line;
use super::{clamp_scroll, empty_panel};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let title = format!("Contingency ({} targets)", app.contingencies.len());
    if app.contingencies.is_empty() {
        frame.render_widget(
            empty_panel(title, "  No targets. Press t to add one."),
            area,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for entry in &app.contingencies {
        lines.push(Line::from(vec![
            Span::styled(
                entry.target.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  if gone, take:", Style::default().fg(Color::DarkGray)),
        ]));
        for v in &entry.alternatives {
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
