//! Board coordinate system
//!
//! Converts between canvas pixels (origin top-left, y down) and 1-indexed
//! board cells using the layout's origin and pitch:
//!
//! ```text
//! col = floor((x - origin_x) / pitch_x) + 1      x = (col - 1) * pitch_x + origin_x
//! row = floor((y - origin_y) / pitch_y) + 1      y = (row - 1) * pitch_y + origin_y
//! ```
//!
//! Pixels that land outside the 9x10 grid are reported as off-board, never
//! clamped onto the nearest edge.

use crate::core::BoardLayoutConfig;
use crate::game::components::{CellCoord, BOARD_FILES, BOARD_RANKS};
use bevy::math::Vec2;
use std::sync::Arc;

/// Pixel <-> cell conversions for one layout
#[derive(Debug, Clone)]
pub struct BoardCoordinateSystem {
    layout: Arc<BoardLayoutConfig>,
}

impl BoardCoordinateSystem {
    pub fn new(layout: Arc<BoardLayoutConfig>) -> Self {
        Self { layout }
    }

    /// Cell under a canvas pixel, `None` when off the board
    ///
    /// Non-finite pixels and indices too large for the grid are off-board.
    pub fn pixel_to_cell(&self, pos: Vec2) -> Option<CellCoord> {
        let index = self.raw_cell(pos);
        let col = grid_index(index.x, BOARD_FILES)?;
        let row = grid_index(index.y, BOARD_RANKS)?;
        Some(CellCoord::new(col, row))
    }

    /// Unvalidated 1-based cell indices under a pixel, for diagnostics
    ///
    /// Kept in floating point; may be negative, huge or NaN.
    pub fn raw_cell(&self, pos: Vec2) -> Vec2 {
        Vec2::new(
            ((pos.x - self.layout.origin_x) / self.layout.cell_pitch_x).floor() + 1.0,
            ((pos.y - self.layout.origin_y) / self.layout.cell_pitch_y).floor() + 1.0,
        )
    }

    /// Top-left pixel at which a cell's piece image is drawn
    ///
    /// Column or row 0 (an unplaced piece) is treated as 1.
    pub fn cell_to_pixel_origin(&self, cell: CellCoord) -> Vec2 {
        Vec2::new(
            f32::from(cell.col.saturating_sub(1)) * self.layout.cell_pitch_x
                + self.layout.origin_x,
            f32::from(cell.row.saturating_sub(1)) * self.layout.cell_pitch_y
                + self.layout.origin_y,
        )
    }

    pub fn is_on_board(&self, cell: CellCoord) -> bool {
        cell.is_on_board()
    }

    /// Size of the drawing surface in pixels
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.layout.pixel_width, self.layout.pixel_height)
    }

    pub fn layout(&self) -> &BoardLayoutConfig {
        &self.layout
    }
}

/// Convert a 1-based float index to a grid index within `1..=count`
fn grid_index(index: f32, count: u8) -> Option<u8> {
    // NaN fails the range check
    (1.0..=f32::from(count))
        .contains(&index)
        .then_some(index as u8)
}
