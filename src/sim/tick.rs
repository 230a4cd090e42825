//! Fixed timestep simulation tick
//!
//! Core transition that advances the game by exactly one tick. Takes the
//! previous state by reference and returns its successor.

use glam::Vec2;
use rand::Rng;

use super::collision::{out_of_bounds, squares_overlap};
use super::state::{Bounds, Direction, GameState, Position};

/// Source of food placement draws
pub trait FoodSampler {
    /// Uniform draw in `[0, span)`; only called with `span > 0`
    fn draw(&mut self, span: f32) -> f32;
}

impl<R: Rng> FoodSampler for R {
    fn draw(&mut self, span: f32) -> f32 {
        self.random_range(0.0..span)
    }
}

/// Adapts a closure `span -> draw` into a `FoodSampler`
pub struct FromFn<F>(pub F);

impl<F: FnMut(f32) -> f32> FoodSampler for FromFn<F> {
    fn draw(&mut self, span: f32) -> f32 {
        (self.0)(span)
    }
}

/// Pick a random top-left corner for a food item of `food_size`
///
/// An axis whose sampling range is empty (field narrower than the food) or
/// not finite pins the item to 0 on that axis.
pub fn sample_food_position<S: FoodSampler + ?Sized>(
    sampler: &mut S,
    bounds: Bounds,
    food_size: u32,
) -> Position {
    let span_x = bounds.width - food_size as f32;
    let span_y = bounds.height - food_size as f32;
    let mut axis = |span: f32| {
        if span.is_finite() && span > 0.0 {
            sampler.draw(span)
        } else {
            0.0
        }
    };
    let x = axis(span_x);
    let y = axis(span_y);
    Vec2::new(x, y)
}

/// Move `speed` pixels along `direction`
pub fn displace(pos: Position, direction: Direction, speed: f32) -> Position {
    pos + direction.unit() * speed
}

/// Advance the game state by one tick using the state's own RNG
pub fn step(state: &GameState, bounds: Bounds) -> GameState {
    let mut rng = state.rng.clone();
    let mut next = step_with(state, bounds, &mut rng);
    next.rng = rng;
    next
}

/// Advance the game state by one tick, drawing food positions from `sampler`
///
/// The state's own RNG is carried over untouched.
pub fn step_with<S: FoodSampler + ?Sized>(
    state: &GameState,
    bounds: Bounds,
    sampler: &mut S,
) -> GameState {
    // Game over is absorbing
    if state.game_over {
        return state.clone();
    }

    let candidate = displace(state.avatar_pos, state.direction, state.speed);

    // Bounds are checked after the move; the pre-move state is frozen
    if out_of_bounds(candidate, state.avatar_size as f32, bounds) {
        return GameState {
            game_over: true,
            ..state.clone()
        };
    }

    // Overlap uses the pre-move avatar position
    let food_eaten = squares_overlap(
        state.avatar_pos,
        state.avatar_size as f32,
        state.food_pos,
        state.food_size as f32,
    );

    let (food_pos, score, speed) = if food_eaten {
        let food_pos = sample_food_position(sampler, bounds, state.food_size);
        log::debug!(
            "Food eaten at ({:.1}, {:.1}), respawned at ({:.1}, {:.1})",
            state.food_pos.x,
            state.food_pos.y,
            food_pos.x,
            food_pos.y
        );
        (food_pos, state.score + 1, state.speed + 1.0)
    } else {
        (state.food_pos, state.score, state.speed)
    };

    GameState {
        avatar_pos: candidate,
        food_pos,
        score,
        speed,
        game_over: false,
        ..state.clone()
    }
}
