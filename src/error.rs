//! Error types and handling infrastructure for rcpad.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! ## Design Principles
//!
//! - **User-friendly messages**: Errors should provide actionable feedback
//! - **Context preservation**: Include relevant information for debugging
//! - **Consistency**: Standardized Result type across all modules

use thiserror::Error;

/// The main error type for rcpad operations.
///
/// This enum covers all possible error conditions that can occur while
/// polling the terminal, driving the status display, and transmitting
/// commands to the remote receiver.
#[derive(Error, Debug)]
pub enum RcpadError {
    /// Terminal I/O errors (raw mode, event polling, rendering)
    #[error("Terminal operation failed: {message}")]
    Terminal {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Transport errors (connect, send, shutdown)
    #[error("Transport failed: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Invalid user-supplied parameters (host, port, timeouts)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for rcpad operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the rcpad codebase.
pub type Result<T> = std::result::Result<T, RcpadError>;

impl RcpadError {
    /// Create a Transport error with a descriptive message and no I/O source
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Transport error from an io::Error with additional context
    pub fn transport_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Terminal polling and rendering surface plain io::Errors; attach the
// terminal context here so call sites can keep using `?`.
impl From<std::io::Error> for RcpadError {
    fn from(err: std::io::Error) -> Self {
        Self::Terminal {
            message: "terminal I/O failed".to_string(),
            source: err,
        }
    }
}
