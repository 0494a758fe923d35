//! Texture catalog - domain names for the board's images
//!
//! Every image the game draws is addressed by a [`TextureKey`] instead of a
//! formatted string. The key knows its file name and where the file lives
//! under the theme's asset directory:
//!
//! | Key                      | File                                  |
//! |--------------------------|---------------------------------------|
//! | `Piece(faction, type)`   | `pieces/{faction}_{type}.png`         |
//! | `Selected(faction)`      | `util/{faction}_selected.png`         |
//! | `MoveHint`               | `util/dot.png`                        |
//! | `Background`             | `background.jpg`                      |
//! | `Board`                  | `board.png`                           |

use super::{AssetResult, AssetSource, AssetStore, ImageHandle, LoadOptions, LoadingProgress};
use crate::core::BoardLayoutConfig;
use crate::game::components::{Faction, PieceType};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Typed name of one image asset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Board,
    Background,
    /// Marker reserved for move hints
    MoveHint,
    Piece(Faction, PieceType),
    /// Overlay drawn on top of the selected piece
    Selected(Faction),
}

impl TextureKey {
    /// Every key the catalog loads, in load order
    pub fn all() -> Vec<TextureKey> {
        let mut keys: Vec<TextureKey> = Faction::ALL
            .iter()
            .flat_map(|&faction| {
                PieceType::ALL
                    .iter()
                    .map(move |&piece_type| TextureKey::Piece(faction, piece_type))
            })
            .collect();
        keys.extend(Faction::ALL.iter().map(|&faction| TextureKey::Selected(faction)));
        keys.push(TextureKey::MoveHint);
        keys.push(TextureKey::Background);
        keys.push(TextureKey::Board);
        keys
    }

    /// File name without directory or extension
    pub fn file_name(self) -> String {
        match self {
            TextureKey::Board => "board".to_string(),
            TextureKey::Background => "background".to_string(),
            TextureKey::MoveHint => "dot".to_string(),
            TextureKey::Piece(faction, piece_type) => format!("{faction}_{piece_type}"),
            TextureKey::Selected(faction) => format!("{faction}_selected"),
        }
    }

    /// Path relative to the theme's asset directory
    pub fn relative_path(self) -> String {
        let name = self.file_name();
        match self {
            TextureKey::Piece(..) => format!("pieces/{name}.png"),
            TextureKey::Selected(_) | TextureKey::MoveHint => format!("util/{name}.png"),
            TextureKey::Background => format!("{name}.jpg"),
            TextureKey::Board => format!("{name}.png"),
        }
    }
}

impl fmt::Display for TextureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// A loaded image together with the key it was loaded under
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    pub key: TextureKey,
    pub image: ImageHandle,
}

/// Domain accessors over an [`AssetStore`] keyed by [`TextureKey`]
///
/// Accessors fail with `NotLoaded` until [`TextureCatalog::init`] has
/// completed.
#[derive(Debug)]
pub struct TextureCatalog {
    layout: Arc<BoardLayoutConfig>,
    store: AssetStore<TextureKey>,
}

impl TextureCatalog {
    pub fn new(layout: Arc<BoardLayoutConfig>, options: LoadOptions) -> Self {
        Self {
            layout,
            store: AssetStore::new(options),
        }
    }

    /// Load every texture of the theme
    pub async fn init<S>(&mut self, source: &S) -> AssetResult<()>
    where
        S: AssetSource + ?Sized,
    {
        let requests: Vec<(TextureKey, String)> = TextureKey::all()
            .into_iter()
            .map(|key| (key, self.asset_path(key)))
            .collect();
        self.store.load(source, requests).await?;
        info!(
            "[ASSETS] Texture catalog ready ({} textures from {:?})",
            self.store.len(),
            self.layout.asset_base_path
        );
        Ok(())
    }

    /// Full asset path of a key under the theme's base directory
    pub fn asset_path(&self, key: TextureKey) -> String {
        let base = self.layout.asset_base_path.to_string_lossy();
        let base = base.trim_end_matches('/');
        if base.is_empty() {
            key.relative_path()
        } else {
            format!("{base}/{}", key.relative_path())
        }
    }

    pub fn layout(&self) -> &BoardLayoutConfig {
        &self.layout
    }

    pub fn progress(&self) -> &LoadingProgress {
        self.store.progress()
    }

    pub fn texture(&self, key: TextureKey) -> AssetResult<Texture> {
        let image = self.store.get(&key)?;
        Ok(Texture { key, image })
    }

    pub fn board(&self) -> AssetResult<Texture> {
        self.texture(TextureKey::Board)
    }

    pub fn background(&self) -> AssetResult<Texture> {
        self.texture(TextureKey::Background)
    }

    pub fn move_hint(&self) -> AssetResult<Texture> {
        self.texture(TextureKey::MoveHint)
    }

    pub fn piece(&self, faction: Faction, piece_type: PieceType) -> AssetResult<Texture> {
        self.texture(TextureKey::Piece(faction, piece_type))
    }

    pub fn selection_highlight(&self, faction: Faction) -> AssetResult<Texture> {
        self.texture(TextureKey::Selected(faction))
    }

    /// Every loaded texture, in load order
    pub fn loaded_textures(&self) -> impl Iterator<Item = Texture> + '_ {
        TextureKey::all()
            .into_iter()
            .filter_map(|key| self.texture(key).ok())
    }
}
