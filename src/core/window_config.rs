//! Window configuration resource
//!
//! The window doubles as the board's drawing surface, so its size is taken
//! from the layout rather than chosen freely. Resizing is disabled to keep
//! window pixels and layout pixels identical.

use crate::core::layout::BoardLayoutConfig;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Whether the window should be resizable
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::from_layout(&BoardLayoutConfig::reference())
    }
}

impl WindowConfig {
    /// Size the window to exactly cover the board canvas
    pub fn from_layout(layout: &BoardLayoutConfig) -> Self {
        Self {
            title: "Xiangqi".to_string(),
            width: layout.pixel_width,
            height: layout.pixel_height,
            resizable: false,
        }
    }

    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
