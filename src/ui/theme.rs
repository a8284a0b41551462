//! Color theme and styling definitions using ratatui colors
//!
//! This module provides color themes for the pad display using ratatui's
//! color system directly to avoid unnecessary abstractions.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Direction glyphs while held
    pub held_key: Style,

    /// Direction glyphs while idle
    pub idle_key: Style,

    /// Last transmitted command
    pub command: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            held_key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            idle_key: Style::default().fg(Color::DarkGray),
            command: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            status_bg: Color::Blue,
            status_fg: Color::White,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            held_key: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            idle_key: Style::default().fg(Color::Gray),
            command: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            status_bg: Color::Black,
            status_fg: Color::White,
        }
    }
}
