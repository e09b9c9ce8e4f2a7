//! Rendering.
//!
//! [`render_system`] draws one frame per tick inside raylib's drawing scope:
//! the scrolled background tiles first, then every [`Sprite`] in
//! [`ZIndex`] order, then the debug overlay when [`DebugMode`] is present.
//!
//! The draw order and the overlay text live in buffers owned by the system
//! and are refilled in place, so a steady-state tick does not allocate.
use std::fmt::Write;

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::AnimationCursor;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::{Sprite, SpriteSource};
use crate::components::zindex::ZIndex;
use crate::resources::background::Background;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// Clear color behind the background tiles.
pub const BG_COLOR: Color = Color::new(255, 255, 200, 255);

fn sprite_texture<'a>(textures: &'a TextureStore, sprite: &Sprite) -> Option<&'a Texture2D> {
    match &sprite.source {
        SpriteSource::Texture(key) => textures.get(key),
        SpriteSource::Frame { key, index } => textures.frame(*key, *index),
    }
}

/// Refill `order` with `items` sorted by z, ties broken by entity.
pub fn fill_draw_order(
    order: &mut Vec<(ZIndex, Entity)>,
    items: impl Iterator<Item = (Entity, ZIndex)>,
) {
    order.clear();
    order.extend(items.map(|(entity, z)| (z, entity)));
    order.sort_unstable();
}

/// Overwrite `buf` with the debug status line.
pub fn write_status_line(buf: &mut String, fps: u32, time: &WorldTime) {
    buf.clear();
    let _ = write!(
        buf,
        "DEBUG MODE (press F11 to toggle) | FPS: {} | tick: {} | {:.1}s",
        fps, time.ticks, time.elapsed
    );
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    textures: NonSend<TextureStore>,
    background: Res<Background>,
    sprites: Query<(Entity, &Sprite, &MapPosition, &ZIndex)>,
    players: Query<(&AnimationCursor, &Sprite, &MapPosition), With<Player>>,
    debug: Option<Res<DebugMode>>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    mut draw_order: Local<Vec<(ZIndex, Entity)>>,
    mut text: Local<String>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BG_COLOR);

    if let Some(tex) = textures.get(&background.tex_key) {
        for tile in background.tiles.iter() {
            d.draw_texture(
                tex,
                tile.x as i32,
                (tile.y + background.scroll) as i32,
                Color::WHITE,
            );
        }
    }

    fill_draw_order(
        &mut draw_order,
        sprites.iter().map(|(entity, _, _, z)| (entity, *z)),
    );
    for &(_, entity) in draw_order.iter() {
        let Ok((_, sprite, pos, _)) = sprites.get(entity) else {
            continue;
        };
        if let Some(tex) = sprite_texture(&textures, sprite) {
            d.draw_texture(tex, pos.pos.x as i32, pos.pos.y as i32, Color::WHITE);
        }
    }

    if debug.is_none() {
        return;
    }

    write_status_line(&mut text, d.get_fps(), &time);
    d.draw_text(&text, 10, 10, 10, Color::BLACK);

    for (cursor, sprite, pos) in players.iter() {
        d.draw_rectangle_lines(
            pos.pos.x as i32,
            pos.pos.y as i32,
            sprite.width as i32,
            sprite.height as i32,
            Color::RED,
        );
        let frame = match &sprite.source {
            SpriteSource::Frame { index, .. } => *index,
            SpriteSource::Texture(_) => 0,
        };
        text.clear();
        let _ = write!(
            text,
            "{} frame {} elapsed {} at ({:.0}, {:.0})",
            cursor.key(),
            frame,
            cursor.elapsed_ticks,
            pos.pos.x,
            pos.pos.y
        );
        d.draw_text(&text, 10, screen.h - 20, 10, Color::BLACK);
    }
}
