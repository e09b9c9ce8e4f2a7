//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. A press
//! of the debug key triggers a
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let input = &mut *input;
    for state in [&mut input.move_left, &mut input.move_right] {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
    }

    input.mode_debug.just_pressed = rl.is_key_pressed(input.mode_debug.key_binding);
    input.mode_debug.active = rl.is_key_down(input.mode_debug.key_binding);
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
