//! Collision tests for axis-aligned squares
//!
//! Squares are described by their top-left corner and edge length. Edges are
//! inclusive: squares that merely touch count as overlapping.

use super::state::{Bounds, Position};

/// Check whether two axis-aligned squares overlap
///
/// Two squares overlap unless one lies strictly to the left, right, above or
/// below the other.
pub fn squares_overlap(a: Position, a_size: f32, b: Position, b_size: f32) -> bool {
    let a_left_of_b = a.x + a_size < b.x;
    let a_right_of_b = a.x > b.x + b_size;
    let a_above_b = a.y + a_size < b.y;
    let a_below_b = a.y > b.y + b_size;

    !(a_left_of_b || a_right_of_b || a_above_b || a_below_b)
}

/// Check whether a square at `pos` sticks out of the field
pub fn out_of_bounds(pos: Position, size: f32, bounds: Bounds) -> bool {
    pos.x < 0.0 || pos.x > bounds.width - size || pos.y < 0.0 || pos.y > bounds.height - size
}
