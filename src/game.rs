//! Game setup: asset loading and the initial scene.
//!
//! Startup happens in two steps so that the catalog can be inspected without
//! a window (`--list-sheets`):
//!
//! 1. [`build_catalog`] decodes and slices the character sheets on the CPU.
//! 2. [`load_assets`] uploads frames, the background tile and the terrain
//!    block to the GPU, then [`spawn_world`] creates the player and the
//!    floor.

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::components::animation::{AnimationCursor, CHARACTER_KEYS};
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::error::AssetError;
use crate::resources::background::{BACKGROUND_TEX_KEY, Background};
use crate::resources::gameconfig::GameConfig;
use crate::resources::sheetcatalog::{self, SCALE_FACTOR, SheetCatalog};
use crate::resources::texturestore::{self, TextureStore};

pub const CHARACTERS_CATEGORY: &str = "MainCharacters";
pub const BACKGROUND_DIR: &str = "Background";
pub const TERRAIN_DIR: &str = "Terrain";
pub const TERRAIN_FILE: &str = "Terrain.png";
/// Top-left corner of the floor block inside the terrain sheet.
pub const TERRAIN_BLOCK_ORIGIN: (u32, u32) = (96, 0);
pub const TERRAIN_TEX_KEY: &str = "terrain_block";

/// Decode and slice the configured character's sheets.
///
/// Fails unless the catalog holds every key the animation system can
/// select, so a missing `idle` or `run` sheet stops startup before the
/// window opens.
pub fn build_catalog(config: &GameConfig) -> Result<SheetCatalog, AssetError> {
    let catalog = SheetCatalog::from_dir(
        &config.assets_root,
        CHARACTERS_CATEGORY,
        &config.character,
        config.frame_width,
        config.frame_height,
        true,
    )?;
    catalog.require(&CHARACTER_KEYS)?;
    info!(
        "Sheet catalog for '{}' holds {} frame sets",
        config.character,
        catalog.len()
    );
    Ok(catalog)
}

fn background_path(config: &GameConfig) -> PathBuf {
    config
        .assets_root
        .join(BACKGROUND_DIR)
        .join(&config.background)
}

/// Upload every texture the scene draws.
pub fn load_assets(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &GameConfig,
    catalog: &SheetCatalog,
) -> Result<(TextureStore, Background), AssetError> {
    let mut textures = TextureStore::new();
    textures.upload_catalog(rl, th, catalog)?;

    let bg_pixels = sheetcatalog::load_image(&background_path(config))?;
    let (tile_w, tile_h) = bg_pixels.dimensions();
    let bg_tex = texturestore::texture_from_rgba(rl, th, BACKGROUND_TEX_KEY, &bg_pixels)?;
    textures.insert(BACKGROUND_TEX_KEY, bg_tex);
    let background = Background::new(
        BACKGROUND_TEX_KEY,
        tile_w,
        tile_h,
        config.window_width,
        config.window_height,
        config.background_scroll,
    );

    let terrain = sheetcatalog::load_image(
        &config.assets_root.join(TERRAIN_DIR).join(TERRAIN_FILE),
    )?;
    let edge = config.block_size / SCALE_FACTOR;
    let block = sheetcatalog::extract_region(
        &terrain,
        TERRAIN_BLOCK_ORIGIN.0,
        TERRAIN_BLOCK_ORIGIN.1,
        edge,
        edge,
        SCALE_FACTOR,
    )?;
    let block_tex = texturestore::texture_from_rgba(rl, th, TERRAIN_TEX_KEY, &block)?;
    textures.insert(TERRAIN_TEX_KEY, block_tex);

    Ok((textures, background))
}

/// Top-left corners of the floor: one row of blocks along the bottom edge,
/// extending a screen width to the left and to the right.
pub fn floor_positions(block_size: u32, screen_w: u32, screen_h: u32) -> Vec<Vector2> {
    if block_size == 0 {
        return Vec::new();
    }
    let size = block_size as i32;
    let width = screen_w as i32;
    let first = (-width).div_euclid(size);
    let last = (width * 2).div_euclid(size);
    let y = (screen_h as i32 - size) as f32;
    (first..last)
        .map(|i| Vector2 {
            x: (i * size) as f32,
            y,
        })
        .collect()
}

/// Spawn the player and the floor blocks.
pub fn spawn_world(
    world: &mut World,
    config: &GameConfig,
    catalog: &SheetCatalog,
) -> Result<Entity, AssetError> {
    let cursor = AnimationCursor::default();
    let key = cursor.key();
    let (w, h) = catalog.get(key)?.frame_size();

    for pos in floor_positions(config.block_size, config.window_width, config.window_height) {
        world.spawn((
            MapPosition::new(pos.x, pos.y),
            Sprite::texture(
                TERRAIN_TEX_KEY,
                config.block_size as f32,
                config.block_size as f32,
            ),
            ZIndex::TERRAIN,
        ));
    }

    let player = world
        .spawn((
            Player,
            MapPosition::new(config.player_start_x, config.player_start_y),
            RigidBody::new(),
            InputControlled::horizontal(config.player_velocity),
            cursor,
            Sprite::frame(key, w as f32, h as f32),
            ZIndex::CHARACTER,
        ))
        .id();
    Ok(player)
}
