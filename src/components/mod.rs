//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – animation keys and the per-character [`AnimationCursor`](animation::AnimationCursor)
//! - [`inputcontrolled`] – keyboard-driven horizontal movement intent
//! - [`mapposition`] – world-space position (top-left corner) for an entity
//! - [`player`] – tag for the player character
//! - [`rigidbody`] – velocity in pixels per tick
//! - [`sprite`] – what to draw for an entity
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod inputcontrolled;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
pub mod sprite;
pub mod zindex;
