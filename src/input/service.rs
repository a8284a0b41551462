//! High-level input service.
//!
//! Consumes raw events and yields domain-level `InputEvent`s that the
//! application loop consumes. Arrow keys map to direction press/release
//! notifications; `q`, `Esc`, and `Ctrl-C` request quit; everything else is
//! dropped silently.

use crate::control::Direction;
use crate::error::Result;
use crate::input::raw::{RawInputCollector, RawInputEvent};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Domain-level input notifications emitted by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A direction key changed state. `pressed` is true for press and key
    /// repeat, false for release.
    Key { direction: Direction, pressed: bool },
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
    /// The user asked to leave.
    Quit,
}

/// Anything that can feed input notifications to the application loop.
///
/// The terminal-backed `InputService` is the production implementation;
/// tests substitute scripted sources.
pub trait EventSource {
    /// Return the next notification, or `None` if nothing arrived within
    /// `timeout`.
    fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<InputEvent>>;
}

/// Service responsible for producing `InputEvent`s from terminal events.
#[derive(Debug, Default)]
pub struct InputService {
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            raw_input: RawInputCollector::new(),
        }
    }

    /// Poll the terminal for up to `timeout` and translate the next raw
    /// event, if any. Events that do not concern us translate to `None`.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<InputEvent>> {
        match self.raw_input.poll_event(timeout)? {
            Some(raw_event) => Ok(Self::translate(raw_event)),
            None => Ok(None),
        }
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) -> Option<InputEvent> {
        self.raw_input.process_event(event);
        self.raw_input.pop_pending().and_then(Self::translate)
    }

    fn translate(event: RawInputEvent) -> Option<InputEvent> {
        match event {
            RawInputEvent::Key(key_event) => Self::translate_key(key_event),
            RawInputEvent::Resize { width, height } => {
                Some(InputEvent::Resize { width, height })
            }
        }
    }

    fn translate_key(key_event: KeyEvent) -> Option<InputEvent> {
        // Repeat counts as a press; the tracker is idempotent so redundant
        // presses are harmless, and repeat suppression is out of scope.
        let pressed = !matches!(key_event.kind, KeyEventKind::Release);

        match key_event.code {
            KeyCode::Up => Some(InputEvent::Key {
                direction: Direction::Up,
                pressed,
            }),
            KeyCode::Down => Some(InputEvent::Key {
                direction: Direction::Down,
                pressed,
            }),
            KeyCode::Left => Some(InputEvent::Key {
                direction: Direction::Left,
                pressed,
            }),
            KeyCode::Right => Some(InputEvent::Key {
                direction: Direction::Right,
                pressed,
            }),
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                pressed.then_some(InputEvent::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => pressed.then_some(InputEvent::Quit),
            other => {
                log::trace!("ignoring key {:?}", other);
                None
            }
        }
    }
}

impl EventSource for InputService {
    fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<InputEvent>> {
        self.poll_event(timeout)
    }
}
