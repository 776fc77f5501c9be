// Library root: the draft engine. The TUI crate and integration tests use
// this public API; nothing here touches the terminal.

pub mod config;
pub mod draft;
pub mod valuation;
