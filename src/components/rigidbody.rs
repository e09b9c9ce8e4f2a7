//! Kinematic body component.
//!
//! [`RigidBody`] stores the velocity of an entity in pixels per simulation
//! tick. Input systems write it; the movement system integrates it into
//! [`MapPosition`](super::mapposition::MapPosition) once per tick. There are
//! no forces: gravity is not modelled.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity in pixels per tick.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Replace the velocity for this tick.
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// True when the body moves along the x axis.
    pub fn is_moving_horizontally(&self) -> bool {
        self.velocity.x != 0.0
    }
}
