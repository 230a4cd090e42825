//! Blake the Snake - a canvas arcade snake game
//!
//! Core modules:
//! - `sim`: Pure, deterministic tick engine (movement, collisions, food, scoring)
//! - `input`: Latched directional input shared with the host event source
//! - `session`: Owned game state driven by a fixed-timestep accumulator
//! - `render`: Render sink (sprite lookup, draw command list, canvas backend)
//! - `config`: Data-driven game configuration

pub mod config;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use input::InputLatch;
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Reference tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Field dimensions (height is 3/5 of width)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = FIELD_WIDTH * 3.0 / 5.0;

    /// Avatar defaults
    pub const AVATAR_SIZE: u32 = 50;
    pub const INITIAL_SPEED: f32 = 1.0;

    /// Food defaults
    pub const FOOD_SIZE: u32 = 24;
    pub const INITIAL_FOOD_X: f32 = 100.0;
    pub const INITIAL_FOOD_Y: f32 = 100.0;
}
