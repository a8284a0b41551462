//! Terminal UI module with ratatui
//!
//! This module provides the status display for rcpad: the held-key pad, the
//! last transmitted command, and a status line with the link address. It
//! follows a trait-based architecture so the application loop can run
//! against a mock renderer in tests.

pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

// Re-export public API
pub use ratatui::style::{Color, Style};
pub use renderer::StatusRenderer;
pub use state::{StatusLine, ViewState};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;
