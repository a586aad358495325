use bevy_ecs::prelude::*;

use crate::components::fighter::Fighter;
use crate::components::mapposition::MapPosition;
use crate::resources::worldtime::WorldTime;

/// Integrate each fighter's position from its committed velocity. Runs last
/// so the position every external observer sees matches the committed state.
pub fn movement(mut query: Query<(&mut MapPosition, &Fighter)>, time: Res<WorldTime>) {
    for (mut position, fighter) in query.iter_mut() {
        position.pos += fighter.current.velocity * time.delta;
    }
}
