//! Render sink
//!
//! The engine never draws. Each frame is turned into a flat list of
//! `DrawCommand`s which a `RenderSink` backend executes (2D canvas on the web).

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSink;
pub use frame::{DrawCommand, Sprite, frame, game_over_text_pos, hud_text};

use crate::sim::{Bounds, GameState};

/// Backend that can execute draw commands
pub trait RenderSink {
    type Error;

    fn execute(&mut self, command: &DrawCommand) -> Result<(), Self::Error>;

    /// Draw a complete frame for `state`
    fn present(&mut self, state: &GameState, bounds: Bounds) -> Result<(), Self::Error> {
        for command in frame(state, bounds) {
            self.execute(&command)?;
        }
        Ok(())
    }
}
