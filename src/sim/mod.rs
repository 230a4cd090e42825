//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `step` per tick, no wall-clock awareness
//! - Seeded RNG only (carried inside the state)
//! - State is replaced wholesale, never mutated from outside a tick
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{out_of_bounds, squares_overlap};
pub use state::{Bounds, Direction, GamePhase, GameState, Position};
pub use tick::{FoodSampler, FromFn, displace, sample_food_position, step, step_with};
