//! UI state management structures
//!
//! This module contains the view state for rendering. Key tracking and
//! command encoding are handled by the control subsystem, not ViewState;
//! this is a display-only mirror of what the loop last did.

use crate::control::{Command, HeldKeys};

/// View state for rendering - focused only on what's currently displayed
#[derive(Debug)]
pub struct ViewState {
    /// Receiver address shown in the status line, as `host:port`
    pub link_label: String,

    /// Held-key snapshot as of the last processed notification
    pub keys: HeldKeys,

    /// Most recently transmitted command
    pub last_command: Command,

    /// Number of commands transmitted so far
    pub sent_count: u64,

    /// Status line content
    pub status_line: StatusLine,

    /// Terminal dimensions
    pub width: u16,
    pub height: u16,
}

impl ViewState {
    /// Create a new view state
    pub fn new(link_label: impl Into<String>, width: u16, height: u16) -> Self {
        Self {
            link_label: link_label.into(),
            keys: HeldKeys::new(),
            last_command: Command::None,
            sent_count: 0,
            status_line: StatusLine::new(),
            width,
            height,
        }
    }

    /// Mirror the tracker's current snapshot
    pub fn update_keys(&mut self, keys: HeldKeys) {
        self.keys = keys;
    }

    /// Record a transmitted command
    pub fn record_transmission(&mut self, command: Command) {
        self.last_command = command;
        self.sent_count += 1;
    }

    /// Update terminal dimensions
    /// Returns true if dimensions actually changed
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.width != width || self.height != height;

        if changed {
            self.width = width;
            self.height = height;
        }

        changed
    }

    /// Format the complete status line for this view state
    pub fn format_status_line(&self) -> String {
        self.status_line
            .format_status_line(&self.link_label, self.sent_count)
    }
}

/// Status line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
}

impl StatusLine {
    /// Create a new status line
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a temporary message
    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    /// Clear any temporary message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Format the status line for display
    pub fn format_status_line(&self, link_label: &str, sent_count: u64) -> String {
        if let Some(ref message) = self.message {
            format!("{} | sent {} | {}", link_label, sent_count, message)
        } else {
            format!("{} | sent {}", link_label, sent_count)
        }
    }
}
