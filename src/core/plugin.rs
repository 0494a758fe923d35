//! Core plugin for the Xiangqi frontend
//!
//! Provides fundamental application setup:
//! - Window configuration resource
//! - 2D camera looking at the board canvas
//!
//! # Plugin Order
//!
//! Recommended plugin order:
//! 1. [`bevy::DefaultPlugins`] - Core Bevy functionality (window from [`WindowConfig`])
//! 2. [`CorePlugin`] - Camera and core resources
//! 3. [`crate::rendering::BoardSpritePlugin`] - Texture upload and sprite sync
//! 4. [`crate::input::PointerInputPlugin`] - Click routing, always last

use super::WindowConfig;
use bevy::prelude::*;

/// Core plugin for the Xiangqi application
pub struct CorePlugin {
    /// Window settings the primary window was created from
    pub window: WindowConfig,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.window.clone())
            .register_type::<WindowConfig>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, setup_board_camera);
    }
}

/// Spawn the camera that frames the board canvas
///
/// The default 2D projection maps one world unit to one logical pixel, which
/// keeps sprite positions in the same units as the layout.
fn setup_board_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Board Camera")));
    debug!("[CORE] Board camera spawned");
}
