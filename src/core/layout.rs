//! Board layout configuration
//!
//! A layout (or "theme") pins the pixel geometry of a board image set: where
//! the first intersection sits, how far apart intersections are, and how
//! large the drawing surface must be. It is fixed once the game starts and is
//! shared by the texture catalog and the coordinate system.
//!
//! # Theme Files
//!
//! Themes can be loaded from a JSON file. Missing fields fall back to the
//! reference theme, so a file only needs to list what it overrides:
//!
//! ```json
//! { "asset_base_path": "themes/wood", "cell_pitch_x": 40.0 }
//! ```

use crate::core::error::{CoreError, CoreResult};
use crate::game::components::{BOARD_FILES, BOARD_RANKS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Pixel geometry of the board and where its images live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayoutConfig {
    /// Directory containing `board.png`, `pieces/` and `util/`
    pub asset_base_path: PathBuf,
    /// Width of the drawing surface in pixels
    pub pixel_width: u32,
    /// Height of the drawing surface in pixels
    pub pixel_height: u32,
    /// X pixel of the top-left cell's drawing anchor
    pub origin_x: f32,
    /// Y pixel of the top-left cell's drawing anchor
    pub origin_y: f32,
    /// Horizontal distance between adjacent files
    pub cell_pitch_x: f32,
    /// Vertical distance between adjacent ranks
    pub cell_pitch_y: f32,
}

impl Default for BoardLayoutConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl BoardLayoutConfig {
    /// The reference theme shipped with the game assets
    pub fn reference() -> Self {
        Self {
            asset_base_path: PathBuf::from("assets/images"),
            pixel_width: 325,
            pixel_height: 403,
            origin_x: 5.0,
            origin_y: 19.0,
            cell_pitch_x: 35.0,
            cell_pitch_y: 36.0,
        }
    }

    /// Load a theme from a JSON file and validate it
    pub fn load_theme(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path)?;
        let layout: Self = serde_json::from_str(&contents)?;
        layout.validate()?;
        info!("[LAYOUT] Loaded theme from {:?}", path);
        Ok(layout)
    }

    /// Reject layouts that cannot map pixels to cells
    pub fn validate(&self) -> CoreResult<()> {
        if self.pixel_width == 0 || self.pixel_height == 0 {
            return Err(CoreError::InvalidLayout {
                message: format!(
                    "canvas must be non-empty, got {}x{}",
                    self.pixel_width, self.pixel_height
                ),
            });
        }
        let pitches_ok = self.cell_pitch_x.is_finite()
            && self.cell_pitch_y.is_finite()
            && self.cell_pitch_x > 0.0
            && self.cell_pitch_y > 0.0;
        if !pitches_ok {
            return Err(CoreError::InvalidLayout {
                message: format!(
                    "cell pitch must be positive, got ({}, {})",
                    self.cell_pitch_x, self.cell_pitch_y
                ),
            });
        }
        let origin_ok = self.origin_x.is_finite()
            && self.origin_y.is_finite()
            && self.origin_x >= 0.0
            && self.origin_y >= 0.0;
        if !origin_ok {
            return Err(CoreError::InvalidLayout {
                message: format!(
                    "origin must be finite and inside the canvas, got ({}, {})",
                    self.origin_x, self.origin_y
                ),
            });
        }

        let grid_right = self.origin_x + f32::from(BOARD_FILES) * self.cell_pitch_x;
        let grid_bottom = self.origin_y + f32::from(BOARD_RANKS) * self.cell_pitch_y;
        if grid_right > self.pixel_width as f32 || grid_bottom > self.pixel_height as f32 {
            return Err(CoreError::InvalidLayout {
                message: format!(
                    "{}x{} grid ends at ({}, {}), outside the {}x{} canvas",
                    BOARD_FILES,
                    BOARD_RANKS,
                    grid_right,
                    grid_bottom,
                    self.pixel_width,
                    self.pixel_height
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_theme_values() {
        let layout = BoardLayoutConfig::default();
        assert_eq!(layout.asset_base_path, PathBuf::from("assets/images"));
        assert_eq!((layout.pixel_width, layout.pixel_height), (325, 403));
        assert_eq!((layout.origin_x, layout.origin_y), (5.0, 19.0));
        assert_eq!((layout.cell_pitch_x, layout.cell_pitch_y), (35.0, 36.0));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_partial_theme_falls_back_to_reference() {
        let layout: BoardLayoutConfig =
            serde_json::from_str(r#"{ "cell_pitch_x": 40.0 }"#).unwrap();
        assert_eq!(layout.cell_pitch_x, 40.0);
        assert_eq!(layout.cell_pitch_y, 36.0);
        assert_eq!(layout.pixel_width, 325);
    }

    #[test]
    fn test_zero_pitch_is_rejected() {
        let layout = BoardLayoutConfig {
            cell_pitch_y: 0.0,
            ..BoardLayoutConfig::reference()
        };
        assert!(matches!(
            layout.validate(),
            Err(CoreError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_empty_canvas_is_rejected() {
        let layout = BoardLayoutConfig {
            pixel_width: 0,
            ..BoardLayoutConfig::reference()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_grid_must_fit_canvas() {
        //! Reference grid ends at (320, 379) inside a 325x403 canvas
        let wide = BoardLayoutConfig {
            cell_pitch_x: 36.0,
            ..BoardLayoutConfig::reference()
        };
        assert!(matches!(wide.validate(), Err(CoreError::InvalidLayout { .. })));

        let tall = BoardLayoutConfig {
            origin_y: 44.0,
            ..BoardLayoutConfig::reference()
        };
        assert!(matches!(tall.validate(), Err(CoreError::InvalidLayout { .. })));

        let snug = BoardLayoutConfig {
            pixel_width: 320,
            pixel_height: 379,
            ..BoardLayoutConfig::reference()
        };
        assert!(snug.validate().is_ok());
    }

    #[test]
    fn test_negative_or_infinite_origin_is_rejected() {
        let negative = BoardLayoutConfig {
            origin_x: -1.0,
            ..BoardLayoutConfig::reference()
        };
        assert!(negative.validate().is_err());

        let infinite = BoardLayoutConfig {
            origin_y: f32::INFINITY,
            ..BoardLayoutConfig::reference()
        };
        assert!(infinite.validate().is_err());
    }

    #[test]
    fn test_missing_theme_file_is_io_error() {
        let result = BoardLayoutConfig::load_theme(Path::new("does/not/exist.json"));
        assert!(matches!(result, Err(CoreError::ThemeIo(_))));
    }
}
