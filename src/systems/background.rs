use bevy_ecs::prelude::*;

use crate::resources::background::Background;

/// Scroll the background by one tick.
pub fn scroll_background(mut background: ResMut<Background>) {
    background.advance();
}
