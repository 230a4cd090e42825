//! Frame layout for 2D primitives

use glam::Vec2;

use crate::sim::{Bounds, Direction, GameState};

pub const HUD_FONT: &str = "18px arial";
pub const HUD_COLOR: &str = "black";
pub const HUD_POS: Vec2 = Vec2::new(30.0, 30.0);

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const GAME_OVER_FONT: &str = "30px arial";
pub const GAME_OVER_COLOR: &str = "red";

/// Image assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    SnakeLeft,
    SnakeUp,
    SnakeRight,
    SnakeDown,
    Apple,
}

impl Sprite {
    pub const ALL: [Sprite; 5] = [
        Sprite::SnakeLeft,
        Sprite::SnakeUp,
        Sprite::SnakeRight,
        Sprite::SnakeDown,
        Sprite::Apple,
    ];

    /// Avatar sprite facing `direction`
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Sprite::SnakeLeft,
            Direction::Up => Sprite::SnakeUp,
            Direction::Right => Sprite::SnakeRight,
            Direction::Down => Sprite::SnakeDown,
        }
    }

    /// Image URL relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::SnakeLeft => "spriteImages/snake-left.png",
            Sprite::SnakeUp => "spriteImages/snake-up.png",
            Sprite::SnakeRight => "spriteImages/snake-right.png",
            Sprite::SnakeDown => "spriteImages/snake-down.png",
            Sprite::Apple => "spriteImages/apple.png",
        }
    }
}

/// A single drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    /// Filled text, left end of the baseline at `pos`
    Text {
        text: String,
        pos: Vec2,
        font: &'static str,
        color: &'static str,
    },
    /// Square image scaled to `size`
    Image { sprite: Sprite, pos: Vec2, size: f32 },
}

/// Score/speed overlay line
pub fn hud_text(state: &GameState) -> String {
    format!(
        "Blake the snake - Score: {}, Speed: {}",
        state.score, state.speed
    )
}

/// Where the game-over banner is drawn
pub fn game_over_text_pos(bounds: Bounds) -> Vec2 {
    Vec2::new(bounds.width / 2.0 - 50.0, bounds.height / 2.0)
}

/// Build the draw list for one frame
pub fn frame(state: &GameState, bounds: Bounds) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(5);

    commands.push(DrawCommand::Clear {
        width: bounds.width,
        height: bounds.height,
    });
    commands.push(DrawCommand::Text {
        text: hud_text(state),
        pos: HUD_POS,
        font: HUD_FONT,
        color: HUD_COLOR,
    });
    commands.push(DrawCommand::Image {
        sprite: Sprite::for_direction(state.direction),
        pos: state.avatar_pos,
        size: state.avatar_size as f32,
    });
    commands.push(DrawCommand::Image {
        sprite: Sprite::Apple,
        pos: state.food_pos,
        size: state.food_size as f32,
    });

    if state.game_over {
        commands.push(DrawCommand::Text {
            text: GAME_OVER_TEXT.to_string(),
            pos: game_over_text_pos(bounds),
            font: GAME_OVER_FONT,
            color: GAME_OVER_COLOR,
        });
    }

    commands
}
