//! Pointer and keyboard input for the board window
//!
//! Mouse presses are converted from window coordinates to canvas pixels and
//! handed to the [`GameSession`]. The board canvas fills the window, so the
//! canvas origin is normally `(0, 0)`; [`CanvasOrigin`] exists for hosts that
//! draw the board with an offset.
//!
//! # Systems
//!
//! - `cursor_tracking_system` - Keeps [`CursorState`] in sync with the primary window
//! - `board_click_system` - Routes left clicks through the session
//! - `new_game_key_system` - `R` restarts the game

use crate::game::resources::ClickOutcome;
use crate::game::GameSession;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Current cursor position within the primary window
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct CursorState {
    /// Window coordinates, `None` while the cursor is outside the window
    pub position: Option<Vec2>,
}

/// Window position of the canvas top-left corner
#[derive(Resource, Debug, Default, Clone, Copy, Reflect)]
#[reflect(Resource)]
pub struct CanvasOrigin(pub Vec2);

impl CanvasOrigin {
    /// Canvas pixel under a window position
    pub fn to_canvas(self, window_position: Vec2) -> Vec2 {
        window_position - self.0
    }
}

pub fn cursor_tracking_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cursor_state: ResMut<CursorState>,
) {
    cursor_state.position = windows
        .single()
        .ok()
        .and_then(|window| window.cursor_position());
}

pub fn board_click_system(
    mouse: Res<ButtonInput<MouseButton>>,
    cursor_state: Res<CursorState>,
    origin: Res<CanvasOrigin>,
    mut session: ResMut<GameSession>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(window_position) = cursor_state.position else {
        return;
    };

    let position = origin.to_canvas(window_position);
    match session.click(position) {
        Ok(Some(outcome)) => log_outcome(&outcome),
        Ok(None) => {}
        Err(err) => error!("[INPUT] Click at {:?} failed: {}", position, err),
    }
}

fn log_outcome(outcome: &ClickOutcome) {
    match outcome {
        ClickOutcome::MoveRequested { piece, target } => {
            info!("[INPUT] Move requested: piece {} -> {}", piece.index(), target)
        }
        ClickOutcome::Rejected { piece, target } => {
            debug!("[INPUT] Move rejected: piece {} -> {}", piece.index(), target)
        }
        other => debug!("[INPUT] {:?}", other),
    }
}

pub fn new_game_key_system(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<GameSession>) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    if let Err(err) = session.new_game() {
        error!("[INPUT] New game failed: {}", err);
    }
}

/// Plugin for board input
///
/// Requires a [`GameSession`] resource, so add it after the session is
/// inserted.
pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorState>();
        app.init_resource::<CanvasOrigin>();

        app.register_type::<CursorState>();
        app.register_type::<CanvasOrigin>();

        app.add_systems(
            Update,
            (
                cursor_tracking_system,
                board_click_system.after(cursor_tracking_system),
                new_game_key_system,
            ),
        );
    }
}
