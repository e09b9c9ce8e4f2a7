//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – pick the animation state and frame for every character
//! - [`background`] – scroll the tiled background
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputsimplecontroller`] – translate input state into horizontal velocity
//! - [`movement`] – integrate positions from velocities
//! - [`render`] – draw background, sprites and the debug overlay using Raylib
//! - [`time`] – count ticks on [`crate::resources::worldtime::WorldTime`]

pub mod animation;
pub mod background;
pub mod input;
pub mod inputsimplecontroller;
pub mod movement;
pub mod render;
pub mod time;
