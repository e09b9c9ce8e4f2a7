//! Movement integration.
//!
//! Velocities are expressed in pixels per tick, so one run of [`movement`]
//! moves every body by exactly its velocity.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;

pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.translate(rigidbody.velocity.x, rigidbody.velocity.y);
    }
}
