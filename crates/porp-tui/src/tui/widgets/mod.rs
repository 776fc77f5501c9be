// TUI widget modules for each dashboard panel.

pub mod contingency;
pub mod draft_log;
pub mod rankings;
pub mod sidebar;
pub mod status_bar;
pub mod team_needs;

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use porp_core::draft::pick::Position;

/// Format position list as a compact string (e.g., "1B/OF").
pub fn format_positions(positions: &[Position]) -> String {
    if positions.is_empty() {
        return "--".to_string();
    }
    positions
        .iter()
        .map(|p| p.display_str())
        .collect::<Vec<_>>()
        .join("/")
}

/// Clamp a scroll offset so the last page stays full.
pub fn clamp_scroll(offset: usize, total: usize, visible: usize) -> usize {
    offset.min(total.saturating_sub(visible))
}

/// Bordered, dimmed placeholder for a panel with nothing to show.
pub(crate) fn empty_panel<'a>(title: String, text: &'a str) -> Paragraph<'a> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(title))
}
