//! Input-controlled movement component.
//!
//! [`InputControlled`] describes how an entity responds to the left/right
//! movement keys. The
//! [`input_simple_controller`](crate::systems::inputsimplecontroller::input_simple_controller)
//! system reads it together with
//! [`InputState`](crate::resources::input::InputState) to set velocity.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Movement intent derived from player keyboard input.
///
/// Each field stores the velocity to apply while the corresponding key is
/// held.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Velocity when moving left.
    pub left_velocity: Vector2,
    /// Velocity when moving right.
    pub right_velocity: Vector2,
}

impl InputControlled {
    pub fn new(left: Vector2, right: Vector2) -> Self {
        Self {
            left_velocity: left,
            right_velocity: right,
        }
    }

    /// Symmetric horizontal movement at `speed` pixels per tick.
    pub fn horizontal(speed: f32) -> Self {
        Self::new(Vector2 { x: -speed, y: 0.0 }, Vector2 { x: speed, y: 0.0 })
    }
}
