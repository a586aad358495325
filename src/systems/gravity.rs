use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::playerstate::Candidate;
use crate::resources::gameconfig::GameConfig;

/// Seed every candidate with the world's downward pull. Runs after input
/// resolution so an attack or walk branch that replaced the velocity still
/// feels gravity this tick.
pub fn apply_gravity(mut query: Query<&mut Candidate>, config: Res<GameConfig>) {
    for mut candidate in query.iter_mut() {
        candidate.0 = candidate.0.apply_force(Vec2::new(0.0, -config.gravity));
    }
}
