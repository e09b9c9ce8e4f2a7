//! NinjaFrog platformer demo library.
//!
//! Exposes the sprite-sheet catalog, animation state, ECS components,
//! resources, and systems for use by the binary and by integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
