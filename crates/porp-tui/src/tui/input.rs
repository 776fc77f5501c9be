// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand values for the app, or
// into local ViewState changes (tab switching, scrolling, prompt editing).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Prompt, PromptKind, ViewState};
use crate::protocol::{TabId, TeamChoice, UserCommand};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the app has work to do. Returns `None`
/// when the key was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // crossterm reports releases on some platforms; act on presses only.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.prompt.is_some() {
        return handle_prompt(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            view_state.active_tab = TabId::ALL[idx];
            None
        }

        KeyCode::Up | KeyCode::Char('k') => {
            scroll_up(view_state, 1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            scroll_down(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            scroll_up(view_state, PAGE_SIZE);
            None
        }
        KeyCode::PageDown => {
            scroll_down(view_state, PAGE_SIZE);
            None
        }

        KeyCode::Char('d') => {
            view_state.prompt = Some(Prompt::new(PromptKind::Draft));
            None
        }
        KeyCode::Char('t') => {
            view_state.prompt = Some(Prompt::new(PromptKind::Target));
            None
        }
        KeyCode::Char('x') => Some(UserCommand::ClearTargets),
        KeyCode::Char('e') => Some(UserCommand::Export),

        KeyCode::Esc => {
            view_state.message = None;
            None
        }

        KeyCode::Char('q') => Some(UserCommand::Quit),

        _ => None,
    }
}

/// Handle key events while a text prompt is open.
///
/// - Printable characters are appended to the buffer
/// - Backspace removes the last character
/// - Enter submits; Esc cancels
fn handle_prompt(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let prompt = view_state.prompt.as_mut()?;
    match key_event.code {
        KeyCode::Esc => {
            view_state.prompt = None;
            None
        }
        KeyCode::Enter => {
            let kind = prompt.kind;
            let text = std::mem::take(&mut prompt.buffer);
            view_state.prompt = None;
            match kind {
                PromptKind::Draft => {
                    parse_draft_input(&text).map(|(player, team)| UserCommand::DraftPlayer {
                        player,
                        team,
                    })
                }
                PromptKind::Target => {
                    let name = text.trim();
                    if name.is_empty() {
                        None
                    } else {
                        Some(UserCommand::AddTarget(name.to_string()))
                    }
                }
            }
        }
        KeyCode::Backspace => {
            prompt.buffer.pop();
            None
        }
        KeyCode::Char(c) => {
            prompt.buffer.push(c);
            None
        }
        _ => None,
    }
}

/// Parse draft prompt text.
///
/// - `Name` records an untracked pick
/// - `Name @` gives the player to the team on the clock
/// - `Name @ Team_3` gives the player to that team
///
/// Returns `None` when no player name was typed.
pub fn parse_draft_input(text: &str) -> Option<(String, TeamChoice)> {
    let (name, team) = match text.split_once('@') {
        Some((name, team)) => {
            let team = team.trim();
            let choice = if team.is_empty() {
                TeamChoice::OnTheClock
            } else {
                TeamChoice::Named(team.to_string())
            };
            (name.trim(), choice)
        }
        None => (text.trim(), TeamChoice::Untracked),
    };
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), team))
}

const PAGE_SIZE: usize = 20;

fn scroll_up(view_state: &mut ViewState, lines: usize) {
    let key = view_state.active_tab.scroll_key();
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_sub(lines);
}

fn scroll_down(view_state: &mut ViewState, lines: usize) {
    let key = view_state.active_tab.scroll_key();
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_add(lines);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
