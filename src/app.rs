//! Application orchestration layer
//!
//! This module provides minimal coordination between input, key tracking,
//! command encoding, transport, and the status display. The tracker is
//! constructed here and owned by the loop; nothing else mutates it.

use crate::control::{encode, HeldKeys};
use crate::error::Result;
use crate::input::{EventSource, InputEvent};
use crate::transport::CommandSink;
use crate::ui::{StatusRenderer, ViewState};
use std::time::Duration;

/// How long a single poll waits for input before the loop re-renders.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Application orchestrator - coordinates components without duplicating their state
pub struct Application {
    source: Box<dyn EventSource>,
    keys: HeldKeys,
    sink: Box<dyn CommandSink>,
    renderer: Box<dyn StatusRenderer>,
    link_label: String,
}

impl Application {
    /// Create application by wiring components together
    pub fn new(
        link_label: impl Into<String>,
        source: Box<dyn EventSource>,
        sink: Box<dyn CommandSink>,
        renderer: Box<dyn StatusRenderer>,
    ) -> Self {
        Self {
            source,
            keys: HeldKeys::new(),
            sink,
            renderer,
            link_label: link_label.into(),
        }
    }

    /// Run the application - simple poll loop that delegates to components
    pub async fn run(&mut self) -> Result<()> {
        self.renderer.initialize()?;

        // Create view state owned by this loop
        let (width, height) = self.renderer.terminal_size()?;
        let mut view_state = ViewState::new(self.link_label.clone(), width, height);
        self.renderer.render(&view_state)?;

        // Each iteration is independent: poll, apply, encode, send, render
        let mut running = true;
        while running {
            if let Some(event) = self.source.next_event(Some(POLL_TIMEOUT))? {
                running = self.process_event(event, &mut view_state).await?;
            }

            self.renderer.render(&view_state)?;
        }

        if let Err(err) = self.sink.shutdown().await {
            log::warn!("sink shutdown failed: {err}");
        }
        self.renderer.cleanup()?;
        Ok(())
    }

    /// Process one notification - returns false if the loop should stop
    async fn process_event(
        &mut self,
        event: InputEvent,
        view_state: &mut ViewState,
    ) -> Result<bool> {
        match event {
            InputEvent::Key { direction, pressed } => {
                log::debug!(
                    "{} {}",
                    direction,
                    if pressed { "pressed" } else { "released" }
                );
                self.keys.apply(direction, pressed);

                // Every processed key notification produces a fresh command,
                // even when the encoding did not change.
                let command = encode(self.keys.snapshot());
                self.sink.send(command).await?;

                view_state.update_keys(self.keys.snapshot());
                view_state.record_transmission(command);
                Ok(true)
            }
            InputEvent::Resize { width, height } => {
                view_state.update_terminal_size(width, height);
                Ok(true)
            }
            InputEvent::Quit => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Command, Direction};
    use crate::ui::renderer::tests::MockStatusRenderer;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct ScriptedSource {
        events: VecDeque<InputEvent>,
    }

    impl ScriptedSource {
        fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
            Self {
                events: events.into_iter().collect(),
            }
        }
    }

    impl EventSource for ScriptedSource {
        fn next_event(&mut self, _timeout: Option<Duration>) -> Result<Option<InputEvent>> {
            Ok(self.events.pop_front())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        sent: Arc<Mutex<Vec<Command>>>,
        shutdown_count: Arc<Mutex<usize>>,
    }

    #[async_trait]
    impl CommandSink for RecordingSink {
        async fn send(&mut self, command: Command) -> Result<()> {
            self.sent.lock().unwrap().push(command);
            Ok(())
        }

        async fn shutdown(&mut self) -> Result<()> {
            *self.shutdown_count.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn press(direction: Direction) -> InputEvent {
        InputEvent::Key {
            direction,
            pressed: true,
        }
    }

    fn release(direction: Direction) -> InputEvent {
        InputEvent::Key {
            direction,
            pressed: false,
        }
    }

    #[tokio::test]
    async fn run_transmits_one_command_per_key_notification() {
        let sink = RecordingSink::default();
        let sent = Arc::clone(&sink.sent);

        let source = ScriptedSource::new([
            press(Direction::Up),
            press(Direction::Right),
            release(Direction::Right),
            release(Direction::Up),
            InputEvent::Quit,
        ]);

        let mut app = Application::new(
            "10.0.0.2:3000",
            Box::new(source),
            Box::new(sink),
            Box::new(MockStatusRenderer::new()),
        );
        app.run().await.unwrap();

        assert_eq!(
            *sent.lock().unwrap(),
            vec![Command::Up, Command::UpRight, Command::Up, Command::None]
        );
    }

    #[tokio::test]
    async fn run_shuts_down_sink_on_quit() {
        let sink = RecordingSink::default();
        let shutdowns = Arc::clone(&sink.shutdown_count);

        let source = ScriptedSource::new([InputEvent::Quit]);
        let mut app = Application::new(
            "10.0.0.2:3000",
            Box::new(source),
            Box::new(sink),
            Box::new(MockStatusRenderer::new()),
        );
        app.run().await.unwrap();

        assert_eq!(*shutdowns.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn resize_does_not_transmit() {
        let sink = RecordingSink::default();
        let sent = Arc::clone(&sink.sent);

        let source = ScriptedSource::new([
            InputEvent::Resize {
                width: 100,
                height: 30,
            },
            InputEvent::Quit,
        ]);
        let mut app = Application::new(
            "10.0.0.2:3000",
            Box::new(source),
            Box::new(sink),
            Box::new(MockStatusRenderer::new()),
        );
        app.run().await.unwrap();

        assert!(sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn redundant_presses_retransmit_unchanged_command() {
        let sink = RecordingSink::default();
        let sent = Arc::clone(&sink.sent);

        let source = ScriptedSource::new([
            press(Direction::Down),
            press(Direction::Down),
            InputEvent::Quit,
        ]);
        let mut app = Application::new(
            "10.0.0.2:3000",
            Box::new(source),
            Box::new(sink),
            Box::new(MockStatusRenderer::new()),
        );
        app.run().await.unwrap();

        assert_eq!(
            *sent.lock().unwrap(),
            vec![Command::Down, Command::Down]
        );
    }
}
