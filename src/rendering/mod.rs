//! Rendering module - 2D board drawing
//!
//! Drawing is expressed against the small [`Renderer`] capability: resize
//! and clear the surface, then draw textures at pixel positions. The game
//! draws into a [`DrawList`], which records each frame as plain data; the
//! bevy frontend mirrors that list as sprites, and tests inspect it
//! directly.
//!
//! # Architecture
//!
//! - `board` - Pixel <-> cell coordinate system
//! - `frame` - Draws the board, pieces and selection highlight for one frame
//! - `sprites` - Bevy plugin turning the current frame into sprites

pub mod board;
pub mod frame;
pub mod sprites;

pub use board::BoardCoordinateSystem;
pub use frame::draw_frame;
pub use sprites::BoardSpritePlugin;

use crate::assets::{Texture, TextureKey};
use bevy::math::Vec2;

/// Pixel-addressable drawing surface
pub trait Renderer {
    /// Resize the surface to `width` x `height` and clear it
    fn begin_frame(&mut self, width: u32, height: u32);

    /// Draw a texture with its top-left corner at `top_left`
    fn draw(&mut self, texture: &Texture, top_left: Vec2);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub texture: Texture,
    pub position: Vec2,
}

/// Renderer that records the latest frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    generation: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface size of the latest frame
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Draw calls of the latest frame, in draw order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames begun so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// How many draw calls used textures matching `filter`
    pub fn count_where(&self, filter: impl Fn(TextureKey) -> bool) -> usize {
        self.commands
            .iter()
            .filter(|command| filter(command.texture.key))
            .count()
    }
}

impl Renderer for DrawList {
    fn begin_frame(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
        self.generation += 1;
    }

    fn draw(&mut self, texture: &Texture, top_left: Vec2) {
        self.commands.push(DrawCommand {
            texture: texture.clone(),
            position: top_left,
        });
    }
}
