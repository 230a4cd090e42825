//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`, including the food
//! RNG, so a state plus the field bounds fully determines its successor.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::tick::sample_food_position;
use crate::config::{ConfigError, GameConfig};

/// Field-relative position (origin top-left, y grows downward)
pub type Position = Vec2;

/// Heading of the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    #[default]
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Map a DOM `KeyboardEvent.code` to a heading
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowUp" => Some(Direction::Up),
            "ArrowRight" => Some(Direction::Right),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Unit step in field coordinates
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
        }
    }

    pub(crate) fn index(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Pixel dimensions of the playing field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Avatar is moving
    Running,
    /// Boundary was hit; absorbing
    Over,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Edge length of the avatar square
    pub avatar_size: u32,
    /// Top-left corner of the avatar
    pub avatar_pos: Position,
    /// Current heading
    pub direction: Direction,
    /// Pixels advanced per tick
    pub speed: f32,
    /// Top-left corner of the food item
    pub food_pos: Position,
    /// Edge length of the food square
    pub food_size: u32,
    /// Set once the avatar leaves the field; never cleared
    pub game_over: bool,
    /// Food eaten so far
    pub score: u64,
    /// Food placement RNG
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with reference defaults and the given seed
    pub fn new(seed: u64) -> Self {
        Self::build(&GameConfig::default(), seed)
    }

    /// Create a new game state from a configuration, validating it first
    pub fn from_config(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: &GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let food_pos = if config.randomize_initial_food {
            sample_food_position(&mut rng, config.bounds(), config.food_size)
        } else {
            Vec2::from(config.initial_food)
        };

        Self {
            avatar_size: config.avatar_size,
            avatar_pos: Vec2::ZERO,
            direction: Direction::Right,
            speed: config.initial_speed,
            food_pos,
            food_size: config.food_size,
            game_over: false,
            score: 0,
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::Over
        } else {
            GamePhase::Running
        }
    }
}
