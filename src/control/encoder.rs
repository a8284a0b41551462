//! Encoding of a held-key snapshot into a single command word.
//!
//! The decision table gives `up` strict priority over the other three keys:
//! only `up` has diagonal variants, and `down` is reported alone even when
//! `left` or `right` are also held. Holding both diagonals collapses to
//! plain `UP`. This matches the receiver's expectations exactly; the
//! priority order must not be rearranged.

use crate::control::state::HeldKeys;

/// The discrete command transmitted to the receiver after every key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
}

impl Command {
    /// Wire text for this command, exactly as the receiver parses it.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::None => "NONE",
            Command::Up => "UP",
            Command::Down => "DOWN",
            Command::Left => "LEFT",
            Command::Right => "RIGHT",
            Command::UpLeft => "UPLEFT",
            Command::UpRight => "UPRIGHT",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a held-key snapshot to its command.
///
/// Pure and total over all 16 flag combinations. Each call is independent;
/// no history affects the result.
pub fn encode(keys: HeldKeys) -> Command {
    if keys.up {
        if keys.right && !keys.left {
            Command::UpRight
        } else if keys.left && !keys.right {
            Command::UpLeft
        } else {
            // Both diagonals held, or neither: plain UP.
            Command::Up
        }
    } else if keys.down {
        Command::Down
    } else if keys.left {
        Command::Left
    } else if keys.right {
        Command::Right
    } else {
        Command::None
    }
}
