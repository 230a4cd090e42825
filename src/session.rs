//! Game session: owns the state and drives the tick engine
//!
//! The host feeds frame deltas into `update`; whole ticks are run from a
//! fixed-timestep accumulator with the latched heading folded in first.

use std::sync::Arc;

use crate::config::{ConfigError, GameConfig};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::input::InputLatch;
use crate::sim::{Bounds, GameState, step};

pub struct Session {
    state: GameState,
    latch: Arc<InputLatch>,
    bounds: Bounds,
    tick_dt: f32,
    accumulator: f32,
    ticks: u64,
}

impl Session {
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let state = GameState::from_config(config, seed)?;
        let bounds = config.bounds();
        log::info!(
            "New game (seed {}, field {}x{})",
            seed,
            bounds.width,
            bounds.height
        );

        Ok(Self {
            latch: Arc::new(InputLatch::new(state.direction)),
            state,
            bounds,
            tick_dt: config.tick_dt(),
            accumulator: 0.0,
            ticks: 0,
        })
    }

    /// Handle to the input latch for the host's key listener
    pub fn latch(&self) -> Arc<InputLatch> {
        Arc::clone(&self.latch)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Track the drawing surface's current pixel size
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run a single tick
    pub fn tick(&mut self) {
        if self.state.game_over {
            return;
        }

        let mut current = self.state.clone();
        current.direction = self.latch.current();
        let mut next = step(&current, self.bounds);
        self.ticks += 1;

        if next.score > current.score {
            log::debug!("Score {} (speed {})", next.score, next.speed);
        }
        if next.game_over {
            // Sprite stays on the heading held before the crash
            next.direction = self.state.direction;
            log::info!(
                "Game over after {} ticks - score {}, speed {}",
                self.ticks,
                next.score,
                next.speed
            );
        }

        self.state = next;
    }

    /// Feed a frame delta (seconds); returns the number of ticks run
    pub fn update(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            self.tick();
            self.accumulator -= self.tick_dt;
            substeps += 1;
        }

        // Drop backlog we refused to simulate
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.tick_dt);
        }

        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;
    use glam::Vec2;

    fn session() -> Session {
        Session::new(&GameConfig::default(), 12345).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GameConfig {
            food_size: 0,
            ..Default::default()
        };
        assert!(Session::new(&config, 1).is_err());
    }

    #[test]
    fn test_tick_folds_latched_direction() {
        let mut s = session();
        s.state.avatar_pos = Vec2::new(200.0, 200.0);
        s.latch().on_key("ArrowDown");
        s.tick();
        assert_eq!(s.state().direction, Direction::Down);
        assert_eq!(s.state().avatar_pos, Vec2::new(200.0, 201.0));
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn test_only_last_key_between_ticks() {
        let mut s = session();
        s.state.avatar_pos = Vec2::new(200.0, 200.0);
        let latch = s.latch();
        latch.on_key("ArrowUp");
        latch.on_key("ArrowLeft");
        s.tick();
        assert_eq!(s.state().avatar_pos, Vec2::new(199.0, 200.0));
    }

    #[test]
    fn test_update_runs_whole_ticks() {
        let mut s = session();
        assert_eq!(s.update(1.0 / 120.0), 0);
        assert_eq!(s.update(1.0 / 120.0 + 0.0001), 1);
        assert_eq!(s.state().avatar_pos, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_update_caps_substeps() {
        let config = GameConfig {
            tick_rate: 120,
            ..Default::default()
        };
        let mut s = Session::new(&config, 7).unwrap();
        s.state.avatar_pos = Vec2::new(200.0, 200.0);
        // A long stall is clamped to 0.1s (12 ticks at 120 Hz) and capped
        let ran = s.update(5.0);
        assert_eq!(ran, MAX_SUBSTEPS);
        assert_eq!(s.ticks(), MAX_SUBSTEPS as u64);
        // Backlog is not replayed on the next frame
        assert!(s.update(0.0) <= 1);
    }

    #[test]
    fn test_game_over_freezes_session() {
        let mut s = session();
        s.latch().on_key("ArrowUp");
        s.tick();
        assert!(s.state().game_over);
        let frozen = s.state().clone();

        s.latch().on_key("ArrowDown");
        s.update(0.1);
        assert_eq!(s.state(), &frozen);
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn test_crash_tick_keeps_previous_heading() {
        let mut s = session();
        s.state.avatar_pos = Vec2::new(0.0, 200.0);
        s.state.direction = Direction::Down;
        // Turning into the left wall
        s.latch().on_key("ArrowLeft");
        s.tick();
        assert!(s.state().game_over);
        assert_eq!(s.state().direction, Direction::Down);
        assert_eq!(s.state().avatar_pos, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn test_set_bounds_used_by_next_tick() {
        let mut s = session();
        s.state.avatar_pos = Vec2::new(100.0, 0.0);
        s.set_bounds(Bounds::new(150.0, 480.0));
        s.tick();
        assert!(s.state().game_over);
        assert_eq!(s.bounds(), Bounds::new(150.0, 480.0));
    }
}
