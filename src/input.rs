//! Latched directional input
//!
//! Key events overwrite a single heading; the tick loop reads it once per tick.
//! Nothing is queued, so only the last key between two ticks takes effect.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::sim::Direction;

/// Most recently pressed heading, safe to write from any thread
#[derive(Debug)]
pub struct InputLatch {
    direction: AtomicU8,
}

impl Default for InputLatch {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

impl InputLatch {
    pub fn new(initial: Direction) -> Self {
        Self {
            direction: AtomicU8::new(initial.index()),
        }
    }

    /// Handle a key code; returns whether it was a recognized direction key
    pub fn on_key(&self, code: &str) -> bool {
        match Direction::from_key_code(code) {
            Some(direction) => {
                self.set(direction);
                true
            }
            None => false,
        }
    }

    pub fn set(&self, direction: Direction) {
        self.direction.store(direction.index(), Ordering::Relaxed);
    }

    /// Currently latched heading
    pub fn current(&self) -> Direction {
        Direction::from_index(self.direction.load(Ordering::Relaxed)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_defaults_to_right() {
        assert_eq!(InputLatch::default().current(), Direction::Right);
    }

    #[test]
    fn test_last_key_wins() {
        let latch = InputLatch::default();
        assert!(latch.on_key("ArrowUp"));
        assert!(latch.on_key("ArrowLeft"));
        assert!(latch.on_key("ArrowDown"));
        assert_eq!(latch.current(), Direction::Down);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let latch = InputLatch::new(Direction::Up);
        assert!(!latch.on_key("Space"));
        assert!(!latch.on_key("KeyA"));
        assert!(!latch.on_key("arrowleft"));
        assert_eq!(latch.current(), Direction::Up);
    }

    #[test]
    fn test_reversal_allowed() {
        let latch = InputLatch::new(Direction::Right);
        latch.on_key("ArrowLeft");
        assert_eq!(latch.current(), Direction::Left);
    }

    #[test]
    fn test_write_from_other_thread() {
        let latch = Arc::new(InputLatch::default());
        let writer = Arc::clone(&latch);
        std::thread::spawn(move || {
            writer.on_key("ArrowDown");
        })
        .join()
        .unwrap();
        assert_eq!(latch.current(), Direction::Down);
    }
}
