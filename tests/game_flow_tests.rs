//! Game Flow Integration Tests
//!
//! Full sessions against an in-memory asset source:
//! - Initialization and the first frame
//! - Click routing through pixel coordinates
//! - Selection highlight rendering
//! - Asset failures aborting startup
//! - New game reset

use bevy::math::Vec2;
use std::io::Cursor;
use std::time::Duration;
use xiangqi::assets::{AssetError, LoadFailure, LoadOptions, MemoryAssetSource, TextureKey};
use xiangqi::core::BoardLayoutConfig;
use xiangqi::game::components::{CellCoord, Faction, PieceType};
use xiangqi::game::resources::ClickOutcome;
use xiangqi::game::rules::MoveRules;
use xiangqi::game::{GameController, GameError};
use xiangqi::rendering::DrawList;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([120, 80, 40, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn asset_path(key: TextureKey) -> String {
    format!("assets/images/{}", key.relative_path())
}

/// Every texture of the reference theme
fn full_source() -> MemoryAssetSource {
    let mut source = MemoryAssetSource::new();
    for key in TextureKey::all() {
        let bytes = match key {
            TextureKey::Board | TextureKey::Background => png_bytes(325, 403),
            _ => png_bytes(34, 34),
        };
        source.insert(asset_path(key), bytes);
    }
    source
}

fn options() -> LoadOptions {
    LoadOptions {
        per_asset_timeout: Duration::from_millis(200),
    }
}

async fn start() -> (GameController, DrawList) {
    let mut frame = DrawList::new();
    let controller = GameController::init(
        BoardLayoutConfig::reference(),
        &full_source(),
        options(),
        &mut frame,
    )
    .await
    .unwrap();
    (controller, frame)
}

fn is_piece(key: TextureKey) -> bool {
    matches!(key, TextureKey::Piece(..))
}

fn is_highlight(key: TextureKey) -> bool {
    matches!(key, TextureKey::Selected(_))
}

/// Canvas pixel inside a cell of the reference layout
fn pixel(col: u8, row: u8) -> Vec2 {
    Vec2::new(
        5.0 + 35.0 * f32::from(col - 1) + 10.0,
        19.0 + 36.0 * f32::from(row - 1) + 10.0,
    )
}

// ============================================================================
// Initialization Tests
// ============================================================================

#[tokio::test]
async fn test_first_frame_draws_board_and_all_pieces() {
    let (controller, frame) = start().await;

    assert_eq!(frame.size(), (325, 403));
    assert_eq!(frame.generation(), 1);
    assert_eq!(frame.commands()[0].texture.key, TextureKey::Board);
    assert_eq!(frame.commands()[0].position, Vec2::ZERO);
    assert_eq!(frame.count_where(is_piece), 32);
    assert_eq!(frame.count_where(is_highlight), 0);
    assert_eq!(controller.board().len(), 32);
}

#[tokio::test]
async fn test_factions_take_their_sides() {
    let (controller, _) = start().await;
    let board = controller.board();

    let top_king = board.piece_at(CellCoord::new(5, 1)).unwrap();
    let top_king = board.piece(top_king).unwrap();
    assert_eq!(top_king.faction, Faction::Black);
    assert_eq!(top_king.piece_type, PieceType::King);

    let bottom_king = board.piece_at(CellCoord::new(5, 10)).unwrap();
    let bottom_king = board.piece(bottom_king).unwrap();
    assert_eq!(bottom_king.faction, Faction::Red);
    assert_eq!(bottom_king.piece_type, PieceType::King);
}

#[tokio::test]
async fn test_pieces_drawn_at_cell_anchors() {
    let (controller, frame) = start().await;

    let red_rook = frame
        .commands()
        .iter()
        .filter(|c| c.texture.key == TextureKey::Piece(Faction::Red, PieceType::Rook))
        .map(|c| c.position)
        .collect::<Vec<_>>();
    assert!(red_rook.contains(&Vec2::new(5.0, 343.0)));
    assert!(red_rook.contains(&Vec2::new(285.0, 343.0)));
    assert_eq!(controller.active_faction(), Faction::Red);
}

// ============================================================================
// Asset Failure Tests
// ============================================================================

#[tokio::test]
async fn test_missing_asset_aborts_init() {
    let mut source = full_source();
    let path = asset_path(TextureKey::Piece(Faction::Black, PieceType::Cannon));
    source.remove(&path);

    let mut frame = DrawList::new();
    let result =
        GameController::init(BoardLayoutConfig::reference(), &source, options(), &mut frame).await;

    match result {
        Err(GameError::Asset(AssetError::LoadFailed { path: failed, .. })) => {
            assert_eq!(failed, path)
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("init succeeded without every asset"),
    }
    assert_eq!(frame.generation(), 0, "nothing drawn before assets load");
}

#[tokio::test]
async fn test_stalled_asset_times_out() {
    let mut source = full_source();
    let path = asset_path(TextureKey::Board);
    source.stall(path.clone());

    let mut frame = DrawList::new();
    let result =
        GameController::init(BoardLayoutConfig::reference(), &source, options(), &mut frame).await;

    match result {
        Err(GameError::Asset(AssetError::LoadFailed {
            path: failed,
            reason: LoadFailure::TimedOut(_),
            ..
        })) => assert_eq!(failed, path),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("init succeeded with a stalled asset"),
    }
}

#[tokio::test]
async fn test_undecodable_asset_aborts_init() {
    let mut source = full_source();
    source.insert(asset_path(TextureKey::MoveHint), b"not a png".to_vec());

    let mut frame = DrawList::new();
    let result =
        GameController::init(BoardLayoutConfig::reference(), &source, options(), &mut frame).await;

    assert!(matches!(
        result,
        Err(GameError::Asset(AssetError::LoadFailed {
            reason: LoadFailure::Decode(_),
            ..
        }))
    ));
}

// ============================================================================
// Click Routing Tests
// ============================================================================

#[tokio::test]
async fn test_click_off_board_is_ignored() {
    let (mut controller, mut frame) = start().await;

    let outcome = controller
        .on_pointer_event(Vec2::new(-10.0, -10.0), &mut frame)
        .unwrap();
    assert_eq!(outcome, None);
    assert_eq!(frame.generation(), 1, "no redraw for off-board clicks");
}

#[tokio::test]
async fn test_extreme_clicks_are_off_board() {
    let (mut controller, mut frame) = start().await;

    for position in [
        Vec2::new(1e12, 100.0),
        Vec2::new(f32::INFINITY, 100.0),
        Vec2::new(100.0, f32::NAN),
    ] {
        let outcome = controller.on_pointer_event(position, &mut frame).unwrap();
        assert_eq!(outcome, None, "click at {position:?}");
    }
    assert_eq!(frame.generation(), 1);
    assert!(controller.board().selected().is_none());
}

#[tokio::test]
async fn test_click_on_black_piece_is_ignored_for_red() {
    let (mut controller, mut frame) = start().await;

    // (5, 19) is cell (1, 1): Black rook
    let outcome = controller
        .on_pointer_event(Vec2::new(5.0, 19.0), &mut frame)
        .unwrap();
    assert_eq!(outcome, Some(ClickOutcome::Ignored));
    assert_eq!(frame.count_where(is_highlight), 0);
}

#[tokio::test]
async fn test_select_and_deselect_red_piece() {
    let (mut controller, mut frame) = start().await;

    let outcome = controller.on_pointer_event(pixel(1, 10), &mut frame).unwrap();
    assert!(matches!(outcome, Some(ClickOutcome::Selected(_))));
    assert_eq!(frame.count_where(is_highlight), 1);
    let highlight = frame
        .commands()
        .iter()
        .find(|c| is_highlight(c.texture.key))
        .unwrap();
    assert_eq!(highlight.texture.key, TextureKey::Selected(Faction::Red));
    assert_eq!(highlight.position, Vec2::new(5.0, 343.0));

    let outcome = controller.on_pointer_event(pixel(1, 10), &mut frame).unwrap();
    assert!(matches!(outcome, Some(ClickOutcome::Deselected(_))));
    assert_eq!(frame.count_where(is_highlight), 0);
}

#[tokio::test]
async fn test_reselect_moves_highlight() {
    let (mut controller, mut frame) = start().await;

    controller.on_pointer_event(pixel(1, 10), &mut frame).unwrap();
    let outcome = controller.on_pointer_event(pixel(9, 10), &mut frame).unwrap();

    assert!(matches!(outcome, Some(ClickOutcome::Reselected { .. })));
    assert_eq!(frame.count_where(is_highlight), 1);
    let selected = controller.board().selected().unwrap();
    assert_eq!(selected.position, CellCoord::new(9, 10));
}

#[tokio::test]
async fn test_move_target_rejected_without_rules() {
    let (mut controller, mut frame) = start().await;

    controller.on_pointer_event(pixel(1, 7), &mut frame).unwrap();
    let outcome = controller.on_pointer_event(pixel(1, 6), &mut frame).unwrap();

    assert!(matches!(
        outcome,
        Some(ClickOutcome::Rejected { target, .. }) if target == CellCoord::new(1, 6)
    ));
    // Board and selection unchanged
    let selected = controller.board().selected().unwrap();
    assert_eq!(selected.position, CellCoord::new(1, 7));
    assert!(controller.board().piece_at(CellCoord::new(1, 6)).is_none());
    assert_eq!(frame.count_where(is_piece), 32);
}

struct AllowAll;

impl MoveRules for AllowAll {
    fn is_legal(
        &self,
        _board: &xiangqi::game::rules::BoardState,
        _piece: xiangqi::game::components::PieceId,
        _target: CellCoord,
    ) -> bool {
        true
    }
}

#[tokio::test]
async fn test_move_requested_with_permissive_rules() {
    let (controller, mut frame) = start().await;
    let mut controller = controller.with_rules(AllowAll);

    controller.on_pointer_event(pixel(1, 7), &mut frame).unwrap();
    let outcome = controller.on_pointer_event(pixel(1, 6), &mut frame).unwrap();

    assert!(matches!(outcome, Some(ClickOutcome::MoveRequested { .. })));
    assert!(controller.board().piece_at(CellCoord::new(1, 6)).is_none());
}

// ============================================================================
// New Game Tests
// ============================================================================

#[tokio::test]
async fn test_new_game_clears_selection() {
    let (mut controller, mut frame) = start().await;

    controller.on_pointer_event(pixel(5, 10), &mut frame).unwrap();
    assert_eq!(frame.count_where(is_highlight), 1);

    controller.new_game(&mut frame).unwrap();
    assert!(controller.board().selected().is_none());
    assert_eq!(controller.board().len(), 32);
    assert_eq!(frame.count_where(is_piece), 32);
    assert_eq!(frame.count_where(is_highlight), 0);
}
