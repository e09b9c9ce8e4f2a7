//! Z-index component for render ordering.
//!
//! Background tiles are always drawn first; every entity with a [`ZIndex`]
//! is drawn on top of them, lowest value first.

use bevy_ecs::prelude::Component;

/// Rendering order hint. Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const TERRAIN: ZIndex = ZIndex(0);
    pub const CHARACTER: ZIndex = ZIndex(10);
}
