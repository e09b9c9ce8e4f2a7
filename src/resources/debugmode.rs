//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay (frame key,
//! frame index, tick counters). Remove it to disable.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws the debug overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
