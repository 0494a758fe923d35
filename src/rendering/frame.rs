//! Frame drawing
//!
//! One frame is: clear the surface to the layout size, draw the board at the
//! top-left corner, then every live piece in placement order with the
//! selection highlight stacked on the selected one. Pieces never share a
//! cell, so placement order is the only ordering needed.

use super::{BoardCoordinateSystem, Renderer};
use crate::assets::{AssetResult, TextureCatalog};
use crate::game::rules::BoardState;
use bevy::math::Vec2;

/// Draw the whole board into `renderer`
///
/// Fails only if a texture is missing from the catalog.
pub fn draw_frame<R>(
    board: &BoardState,
    textures: &TextureCatalog,
    coordinates: &BoardCoordinateSystem,
    renderer: &mut R,
) -> AssetResult<()>
where
    R: Renderer + ?Sized,
{
    let (width, height) = coordinates.canvas_size();
    renderer.begin_frame(width, height);
    renderer.draw(&textures.board()?, Vec2::ZERO);

    for (_, piece) in board.live_pieces() {
        let anchor = coordinates.cell_to_pixel_origin(piece.position);
        renderer.draw(&textures.piece(piece.faction, piece.piece_type)?, anchor);
        if piece.selected {
            renderer.draw(&textures.selection_highlight(piece.faction)?, anchor);
        }
    }
    Ok(())
}
