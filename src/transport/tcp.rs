//! TCP command sink.
//!
//! The receiver treats every chunk it reads as one command string, so the
//! wire format is simply the command text with no delimiter or framing.

use crate::control::Command;
use crate::error::{RcpadError, Result};
use crate::transport::CommandSink;
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Command sink backed by a single TCP connection to the receiver.
pub struct TcpCommandSink {
    stream: TcpStream,
    peer: String,
}

impl TcpCommandSink {
    /// Connect to `host:port`, giving up after `connect_timeout`.
    pub async fn connect(host: &str, port: u16, connect_timeout: Duration) -> Result<Self> {
        if host.is_empty() {
            return Err(RcpadError::invalid_argument("host must not be empty"));
        }

        let peer = format!("{host}:{port}");
        let stream = tokio::time::timeout(connect_timeout, TcpStream::connect((host, port)))
            .await
            .map_err(|_| RcpadError::transport(format!("connection to {peer} timed out")))?
            .map_err(|err| {
                RcpadError::transport_io(format!("failed to connect to {peer}"), err)
            })?;

        // Commands are a handful of bytes each; waiting to fill a segment
        // would delay the receiver's reaction to key changes.
        stream.set_nodelay(true).map_err(|err| {
            RcpadError::transport_io(format!("failed to configure connection to {peer}"), err)
        })?;

        log::info!("connected to {peer}");
        Ok(Self { stream, peer })
    }

    /// Address of the connected receiver, as `host:port`.
    pub fn peer(&self) -> &str {
        &self.peer
    }
}

#[async_trait]
impl CommandSink for TcpCommandSink {
    async fn send(&mut self, command: Command) -> Result<()> {
        self.stream
            .write_all(command.as_str().as_bytes())
            .await
            .map_err(|err| {
                RcpadError::transport_io(format!("send to {} failed", self.peer), err)
            })?;

        log::debug!("sent {command} to {}", self.peer);
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.stream.shutdown().await.map_err(|err| {
            RcpadError::transport_io(format!("shutdown of {} failed", self.peer), err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_empty_host() {
        let result = TcpCommandSink::connect("", 3000, Duration::from_millis(100)).await;
        assert!(matches!(result, Err(RcpadError::InvalidArgument { .. })));
    }

    #[tokio::test]
    async fn reports_unreachable_peer() {
        // Port 1 on localhost is essentially never listening.
        let result = TcpCommandSink::connect("127.0.0.1", 1, Duration::from_secs(2)).await;
        assert!(matches!(result, Err(RcpadError::Transport { .. })));
    }
}
