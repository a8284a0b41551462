//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of StatusRenderer using
//! ratatui for a cross-platform terminal interface. Raw mode doubles as the
//! key event source for the input subsystem, and key-release reporting is
//! enabled through the keyboard enhancement protocol where the terminal
//! supports it.

use crate::error::Result;
use crate::ui::{ColorTheme, StatusRenderer, ViewState};
use ratatui::crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
///
/// This implementation focuses purely on rendering. Key events are consumed
/// by the input subsystem from the same raw-mode terminal.
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
    release_reporting: bool,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme: ColorTheme::default(),
            release_reporting: false,
        })
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
            release_reporting: false,
        })
    }

    /// Whether the terminal reports key releases
    pub fn release_reporting(&self) -> bool {
        self.release_reporting
    }

    /// Render the pad area: held keys and the last transmitted command
    fn render_pad(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let style_for = |held: bool| -> Style {
            if held {
                theme.held_key
            } else {
                theme.idle_key
            }
        };

        let keys = view_state.keys;
        let pad_lines = vec![
            Line::from("rcpad - hold arrow keys to drive, q to quit"),
            Line::default(),
            Line::from(vec![
                Span::raw("      "),
                Span::styled("▲", style_for(keys.up)),
            ]),
            Line::from(vec![
                Span::raw("    "),
                Span::styled("◀", style_for(keys.left)),
                Span::raw("   "),
                Span::styled("▶", style_for(keys.right)),
            ]),
            Line::from(vec![
                Span::raw("      "),
                Span::styled("▼", style_for(keys.down)),
            ]),
            Line::default(),
            Line::from(vec![
                Span::raw("  command: "),
                Span::styled(view_state.last_command.as_str(), theme.command),
            ]),
        ];

        let paragraph = Paragraph::new(pad_lines);
        frame.render_widget(paragraph, area);
    }

    /// Render the status line using theme colors
    fn render_status(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        let status = Paragraph::new(view_state.format_status_line()).style(status_style);
        frame.render_widget(status, area);
    }
}

impl StatusRenderer for TerminalUI {
    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        // Key releases need the keyboard enhancement protocol; without it the
        // terminal only ever reports presses.
        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            self.release_reporting = true;
        } else {
            log::warn!(
                "terminal does not report key releases; held keys will stay set until quit"
            );
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;

            terminal.draw(move |frame| {
                let size = frame.size();

                // Split screen: pad area and status line
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
                    .split(size);

                Self::render_pad(frame, chunks[0], view_state, theme);
                Self::render_status(frame, chunks[1], view_state, theme);
            })?;
        }
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            if self.release_reporting {
                execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
                self.release_reporting = false;
            }
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
