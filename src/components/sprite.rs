use bevy_ecs::prelude::Component;

use crate::components::animation::AnimationKey;

/// Where a sprite's pixels come from.
#[derive(Clone, Debug, PartialEq)]
pub enum SpriteSource {
    /// A whole texture from the [`TextureStore`](crate::resources::texturestore::TextureStore).
    Texture(String),
    /// One frame of an animation set.
    Frame { key: AnimationKey, index: usize },
}

/// Drawable image for an entity, placed with its top-left corner at the
/// entity's [`MapPosition`](super::mapposition::MapPosition).
///
/// Animated sprites get their `source` rewritten every tick by the
/// animation system.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub source: SpriteSource,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn texture(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            source: SpriteSource::Texture(tex_key.into()),
            width,
            height,
        }
    }

    pub fn frame(key: AnimationKey, width: f32, height: f32) -> Self {
        Self {
            source: SpriteSource::Frame { key, index: 0 },
            width,
            height,
        }
    }
}
