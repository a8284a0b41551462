//! # rcpad - Terminal Remote-Control Pad
//!
//! A terminal client that turns held arrow keys into discrete direction
//! commands and streams them over TCP to a remote receiver (for example a
//! WiFi-attached microcontroller driving motors).
//!
//! ## Features
//!
//! - **Held-key tracking**: press/release notifications maintained as four
//!   independent flags, one per direction key
//! - **Fixed-priority encoding**: the held set collapses to a single command
//!   word (`UP`, `UPLEFT`, `DOWN`, ...) with a stable priority order
//! - **Raw TCP transport**: each command is written as plain text, matching
//!   receivers that treat every read as one command string
//! - **Status display**: a small ratatui pad showing held keys, the last
//!   transmitted command, and the link address
//!
//! ## Architecture
//!
//! The library is organized into focused modules following modern Rust patterns:
//!
//! - [`error`] - Centralized error types and handling
//! - [`control`] - Held-key state and command encoding (pure, no I/O)
//! - [`input`] - Terminal event polling and translation
//! - [`transport`] - Command transmission over TCP
//! - [`ui`] - Terminal status display
//! - [`app`] - Application core and component coordination

// Core modules
pub mod control;
pub mod error;

// I/O subsystems
pub mod input;
pub mod transport;
pub mod ui;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{RcpadError, Result};

// Public API surface for external usage
pub use app::Application;
pub use control::{encode, Command, Direction, HeldKeys};
pub use input::{EventSource, InputEvent, InputService};
pub use transport::{CommandSink, TcpCommandSink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
