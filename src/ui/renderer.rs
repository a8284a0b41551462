//! Status renderer trait.
//!
//! This module defines the StatusRenderer trait for drawing the pad display.
//! Input handling lives in `crate::input`; renderers only draw.

use crate::error::Result;
use crate::ui::ViewState;

/// Core trait for rendering the pad status display.
pub trait StatusRenderer {
    /// Initialize the terminal (raw mode, alternate screen, key-release
    /// reporting where the terminal supports it).
    fn initialize(&mut self) -> Result<()>;

    /// Render the current view state.
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Restore the terminal state.
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions as (width, height).
    fn terminal_size(&self) -> Result<(u16, u16)>;
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock renderer for testing the application loop without a terminal.
    pub struct MockStatusRenderer {
        pub render_count: usize,
        pub terminal_size: (u16, u16),
        pub is_initialized: bool,
    }

    impl Default for MockStatusRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockStatusRenderer {
        pub fn new() -> Self {
            Self {
                render_count: 0,
                terminal_size: (80, 24),
                is_initialized: false,
            }
        }
    }

    impl StatusRenderer for MockStatusRenderer {
        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn render(&mut self, _view_state: &ViewState) -> Result<()> {
            self.render_count += 1;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    #[test]
    fn mock_renderer_tracks_lifecycle() {
        let mut renderer = MockStatusRenderer::new();
        let view_state = ViewState::new("10.0.0.2:3000", 80, 24);

        assert!(!renderer.is_initialized);
        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        assert_eq!(renderer.render_count, 0);
        renderer.render(&view_state).unwrap();
        assert_eq!(renderer.render_count, 1);

        assert_eq!(renderer.terminal_size().unwrap(), (80, 24));

        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }
}
