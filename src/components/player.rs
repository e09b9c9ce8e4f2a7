use bevy_ecs::prelude::Component;

/// Tag component for the keyboard-driven character.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player;
