use bevy_ecs::prelude::Resource;

/// Simulation clock. `delta` is the fixed timestep of the current tick and
/// `tick` counts committed ticks since the world was created.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub tick: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            tick: 0,
        }
    }
}
