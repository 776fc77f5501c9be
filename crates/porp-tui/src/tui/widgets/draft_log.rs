// Draft log widget: recorded picks, newest first.
//
// Each: "#{pick} {HH:MM:SS} {team}: {player} ({pos})"
// My team's picks are green. Untracked picks have no entry but still advance
// the pick numbers, so gaps in the sequence are expected.

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use porp_core::draft::pick::DraftPick;

use super::{clamp_scroll, empty_panel, format_positions};
use crate::app::App;

/// Render the draft log into the given area.
pub fn render(frame: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let picks = app.session.picks();
    let title = format!(
        "Draft Log ({} tracked, {} drafted)",
        picks.len(),
        app.session.drafted_count()
    );

    if picks.is_empty() {
        frame.render_widget(empty_panel(title, "  No picks yet."), area);
        return;
    }

    let my_team = app.config.league.my_team.as_deref();

    // Visible row count: subtract 2 for borders
    let visible_rows = (area.height as usize).saturating_sub(2);
    let total = picks.len();
    let scroll_offset = clamp_scroll(scroll, total, visible_rows);

    let items: Vec<ListItem> = picks
        .iter()
        .rev()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .map(|pick| {
            let color = if Some(pick.team_id.as_str()) == my_team {
                Color::Green
            } else {
                Color::White
            };
            ListItem::new(Line::from(Span::styled(
                format_pick(pick),
                Style::default().fg(color),
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);

    if total > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible_rows)).position(scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Format a single draft pick for display.
pub fn format_pick(pick: &DraftPick) -> String {
    format!(
        "#{} {} {}: {} ({})",
        pick.pick_number,
        pick.picked_at.format("%H:%M:%S"),
        pick.team_id,
        pick.player_name,
        format_positions(&pick.positions)
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
