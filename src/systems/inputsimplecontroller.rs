//! Keyboard-to-velocity controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! sets the horizontal velocity of every entity with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component. With both keys held, right wins.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Update each controlled entity's `RigidBody` velocity based on input.
pub fn input_simple_controller(
    mut query: Query<(&InputControlled, &mut RigidBody)>,
    input_state: Res<InputState>,
) {
    for (controlled, mut rigidbody) in query.iter_mut() {
        let mut vx = 0.0;
        if input_state.move_left.active {
            vx = controlled.left_velocity.x;
        }
        if input_state.move_right.active {
            vx = controlled.right_velocity.x;
        }
        let vy = rigidbody.velocity.y;
        rigidbody.set_velocity(Vector2 { x: vx, y: vy });
    }
}
