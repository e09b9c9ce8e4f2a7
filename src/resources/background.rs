//! Tiled, vertically scrolling background.
//!
//! The background image is repeated in a grid large enough to cover the
//! window, with one spare row above the screen so that scrolling never
//! exposes a gap. [`Background::scroll`] stays in `0..tile_h` and is added
//! to every tile's y coordinate when drawing.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Texture key of the background tile in the texture store.
pub const BACKGROUND_TEX_KEY: &str = "background";

#[derive(Resource, Debug, Clone)]
pub struct Background {
    pub tex_key: String,
    pub tile_w: u32,
    pub tile_h: u32,
    /// Unscrolled top-left corner of every tile.
    pub tiles: Vec<Vector2>,
    /// Current vertical offset in pixels.
    pub scroll: f32,
    /// Pixels scrolled per tick.
    pub scroll_speed: f32,
}

impl Background {
    pub fn new(
        tex_key: impl Into<String>,
        tile_w: u32,
        tile_h: u32,
        screen_w: u32,
        screen_h: u32,
        scroll_speed: f32,
    ) -> Self {
        Self {
            tex_key: tex_key.into(),
            tile_w,
            tile_h,
            tiles: tile_positions(tile_w, tile_h, screen_w, screen_h),
            scroll: 0.0,
            scroll_speed,
        }
    }

    /// Advance the scroll offset by one tick, wrapping at the tile height.
    pub fn advance(&mut self) {
        if self.tile_h == 0 {
            return;
        }
        self.scroll = (self.scroll + self.scroll_speed).rem_euclid(self.tile_h as f32);
    }
}

/// Top-left corners of a grid of `tile_w`x`tile_h` tiles covering a
/// `screen_w`x`screen_h` area, starting one row above the screen.
pub fn tile_positions(tile_w: u32, tile_h: u32, screen_w: u32, screen_h: u32) -> Vec<Vector2> {
    if tile_w == 0 || tile_h == 0 {
        return Vec::new();
    }
    let cols = (screen_w / tile_w) as i32;
    let rows = (screen_h / tile_h) as i32;
    let mut tiles = Vec::with_capacity(((cols + 1) * (rows + 2)) as usize);
    for x in 0..=cols {
        for y in -1..=rows {
            tiles.push(Vector2 {
                x: (x * tile_w as i32) as f32,
                y: (y * tile_h as i32) as f32,
            });
        }
    }
    tiles
}
