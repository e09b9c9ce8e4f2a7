use bevy_ecs::prelude::Resource;

/// Simulation clock advanced once per tick of the fixed-rate loop.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds of simulated time.
    pub elapsed: f32,
    /// Ticks run so far.
    pub ticks: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            ticks: 0,
        }
    }
}
