//! Current held state of the four direction keys.
//!
//! `HeldKeys` is the only mutable state in the control pipeline. It has one
//! writer and one reader, both the application loop; nothing here is shared
//! across threads.

/// One of the four monitored direction keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in encoder priority order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Uppercase name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks which direction keys are currently held.
///
/// Each flag reflects only the most recent press (true) or release (false)
/// notification for its key; there is no memory of history beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Create a tracker with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press (`pressed == true`) or release for one direction.
    ///
    /// Idempotent: applying the same notification twice is a no-op, and
    /// distinct directions commute. All four directions are always valid,
    /// so there is no error path.
    pub fn apply(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    /// Read the current flags by value.
    pub fn snapshot(&self) -> HeldKeys {
        *self
    }

    /// True when at least one direction key is held.
    pub fn any_held(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// True when the given direction key is held.
    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_held() {
        let keys = HeldKeys::new();
        assert!(!keys.any_held());
        for direction in Direction::ALL {
            assert!(!keys.is_held(direction));
        }
    }

    #[test]
    fn apply_sets_and_clears_single_flags() {
        let mut keys = HeldKeys::new();

        keys.apply(Direction::Right, true);
        assert!(keys.right);
        assert!(keys.any_held());
        assert!(!keys.up && !keys.down && !keys.left);

        keys.apply(Direction::Right, false);
        assert_eq!(keys, HeldKeys::new());
    }

    #[test]
    fn apply_is_idempotent() {
        let mut keys = HeldKeys::new();
        keys.apply(Direction::Up, true);
        let first = keys.snapshot();
        keys.apply(Direction::Up, true);
        assert_eq!(keys.snapshot(), first);

        keys.apply(Direction::Up, false);
        let released = keys.snapshot();
        keys.apply(Direction::Up, false);
        assert_eq!(keys.snapshot(), released);
    }

    #[test]
    fn distinct_directions_commute() {
        let mut forward = HeldKeys::new();
        forward.apply(Direction::Up, true);
        forward.apply(Direction::Left, true);

        let mut reverse = HeldKeys::new();
        reverse.apply(Direction::Left, true);
        reverse.apply(Direction::Up, true);

        assert_eq!(forward.snapshot(), reverse.snapshot());
    }

    #[test]
    fn snapshot_is_a_value_copy() {
        let mut keys = HeldKeys::new();
        keys.apply(Direction::Down, true);

        let snap = keys.snapshot();
        keys.apply(Direction::Down, false);

        assert!(snap.down);
        assert!(!keys.down);
    }
}
