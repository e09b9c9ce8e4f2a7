//! Time update system.
//!
//! Advances the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per tick of the main loop.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Count one tick of `dt` seconds.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.elapsed += dt;
    wt.ticks += 1;
}
