//! Command transmission.
//!
//! The application loop hands every freshly encoded command to a
//! `CommandSink`. The production sink speaks raw TCP to the receiver;
//! tests substitute recording sinks.

pub mod tcp;

use crate::control::Command;
use crate::error::Result;
use async_trait::async_trait;

/// Destination for encoded commands.
#[async_trait]
pub trait CommandSink: Send {
    /// Transmit one command. Called after every processed key notification,
    /// even when the command did not change.
    async fn send(&mut self, command: Command) -> Result<()>;

    /// Gracefully close the sink. Called once on the way out.
    async fn shutdown(&mut self) -> Result<()>;
}

// Public re-exports for convenience.
pub use tcp::TcpCommandSink;
