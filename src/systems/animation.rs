//! Animation system.
//!
//! Once per tick, [`animation`] derives each character's state from its
//! horizontal velocity (idle or running, facing left or right), rewinds the
//! [`AnimationCursor`] on a state change, picks the frame to show from the
//! [`SheetCatalog`], and then counts the tick.
//!
//! # Related
//!
//! - [`crate::components::animation::AnimationCursor`] – per-entity playback state
//! - [`crate::resources::sheetcatalog::SheetCatalog`] – frame sets by key

use bevy_ecs::prelude::*;
use log::error;

use crate::components::animation::AnimationCursor;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::{Sprite, SpriteSource};
use crate::resources::sheetcatalog::SheetCatalog;

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`RigidBody`] velocity to pick the action and facing.
/// - Looks up frame counts in [`SheetCatalog`].
/// - Writes the chosen frame into [`Sprite::source`].
/// - A key missing from the catalog is logged when the state is entered and
///   leaves the sprite unchanged. Catalogs built by
///   [`crate::game::build_catalog`] always hold every key this system can
///   select.
pub fn animation(
    mut query: Query<(&RigidBody, &mut AnimationCursor, &mut Sprite)>,
    catalog: Res<SheetCatalog>,
) {
    for (rigidbody, mut cursor, mut sprite) in query.iter_mut() {
        cursor.follow(rigidbody);

        match cursor.select_frame(&catalog) {
            Ok(index) => {
                sprite.source = SpriteSource::Frame {
                    key: cursor.key(),
                    index,
                };
            }
            Err(e) => {
                if cursor.elapsed_ticks == 0 {
                    error!("{e}");
                }
            }
        }

        cursor.advance();
    }
}
