//! Board sprites - mirrors the recorded frame in the bevy window
//!
//! The game draws into a [`DrawList`](super::DrawList) held by
//! [`GameSession`]. This plugin turns that list into 2D sprites:
//!
//! 1. `upload_textures` (Startup) converts every decoded texture into a bevy
//!    [`Image`] once and keeps the handles in [`TextureHandles`].
//! 2. `sync_frame_sprites` (Update) despawns the previous frame's sprites and
//!    spawns one sprite per draw call whenever the frame generation changes.
//!
//! # Coordinate Conversion
//!
//! Draw calls use canvas pixels (origin top-left, y down, anchor at the
//! image's top-left corner). Sprites use world units with the origin at the
//! window centre, y up, anchored at the image centre. With the default 2D
//! camera one world unit equals one logical pixel, see [`canvas_to_world`].

use crate::assets::{ImageHandle, TextureKey};
use crate::game::session::GameSession;
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use std::collections::HashMap;

/// Depth step between consecutive draw calls so later calls render on top
const DRAW_ORDER_STEP: f32 = 0.1;

/// Bevy image handles for every loaded texture
#[derive(Resource, Debug, Default)]
pub struct TextureHandles(pub HashMap<TextureKey, Handle<Image>>);

/// Marker for sprites spawned from the current frame
#[derive(Component, Debug)]
pub struct FrameSprite;

/// Plugin that displays the current board frame
pub struct BoardSpritePlugin;

impl Plugin for BoardSpritePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextureHandles>()
            .add_systems(Startup, upload_textures)
            .add_systems(Update, sync_frame_sprites);
    }
}

/// Convert a decoded RGBA image into a bevy texture
pub fn to_bevy_image(image: &ImageHandle) -> Image {
    let pixels = image.pixels();
    Image::new(
        Extent3d {
            width: pixels.width(),
            height: pixels.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pixels.as_raw().clone(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

/// World-space centre of an image drawn at a canvas position
///
/// `top_left` and `image_size` are canvas pixels, `canvas` is the surface
/// size, `depth` becomes the z coordinate.
pub fn canvas_to_world(top_left: Vec2, image_size: Vec2, canvas: Vec2, depth: f32) -> Vec3 {
    let center = top_left + image_size / 2.0;
    Vec3::new(center.x - canvas.x / 2.0, canvas.y / 2.0 - center.y, depth)
}

fn upload_textures(
    session: Res<GameSession>,
    mut images: ResMut<Assets<Image>>,
    mut handles: ResMut<TextureHandles>,
) {
    for texture in session.controller().textures().loaded_textures() {
        let handle = images.add(to_bevy_image(&texture.image));
        handles.0.insert(texture.key, handle);
    }
    info!("[RENDER] Uploaded {} textures", handles.0.len());
}

fn sync_frame_sprites(
    mut commands: Commands,
    session: Res<GameSession>,
    handles: Res<TextureHandles>,
    existing: Query<Entity, With<FrameSprite>>,
    mut synced_generation: Local<Option<u64>>,
) {
    let frame = session.frame();
    if *synced_generation == Some(frame.generation()) {
        return;
    }

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }

    let (width, height) = frame.size();
    let canvas = Vec2::new(width as f32, height as f32);
    for (index, draw) in frame.commands().iter().enumerate() {
        let Some(handle) = handles.0.get(&draw.texture.key) else {
            warn!("[RENDER] No uploaded image for {}", draw.texture.key);
            continue;
        };
        let image_size = Vec2::new(
            draw.texture.image.width() as f32,
            draw.texture.image.height() as f32,
        );
        let translation = canvas_to_world(
            draw.position,
            image_size,
            canvas,
            index as f32 * DRAW_ORDER_STEP,
        );
        commands.spawn((
            Sprite::from_image(handle.clone()),
            Transform::from_translation(translation),
            FrameSprite,
        ));
    }

    trace!(
        "[RENDER] Frame {} synced ({} sprites)",
        frame.generation(),
        frame.commands().len()
    );
    *synced_generation = Some(frame.generation());
}
