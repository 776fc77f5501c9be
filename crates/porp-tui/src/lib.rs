// Library root: exposes the dashboard modules so the binary and tests share
// one API.

pub mod app;
pub mod protocol;
pub mod tui;
