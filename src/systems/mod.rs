//! Simulation systems.
//!
//! This module groups the ECS systems that advance one fixed simulation
//! tick, plus the schedule builder that wires them in order.
//!
//! Submodules overview
//! - [`animation`] – select the clip implied by the committed state, advance playback
//! - [`collision`] – axis-separated push-back against static geometry
//! - [`combat`] – hitbox/hurtbox contact and the block/hit rule
//! - [`commit`] – derive result-dependent flags and rotate state buffers
//! - [`gravity`] – seed candidates with the world's downward pull
//! - [`intent`] – per-fighter input resolution into candidate states
//! - [`movement`] – integrate positions from committed velocities
//! - [`overlay`] – publish the read-only observer view
//! - [`time`] – advance the simulation clock

pub mod animation;
pub mod collision;
pub mod combat;
pub mod commit;
pub mod gravity;
pub mod intent;
pub mod movement;
pub mod overlay;
pub mod time;

use bevy_ecs::prelude::*;

use crate::systems::animation::animate;
use crate::systems::collision::resolve_statics;
use crate::systems::combat::resolve_hits;
use crate::systems::commit::commit;
use crate::systems::gravity::apply_gravity;
use crate::systems::intent::{begin_tick, intent};
use crate::systems::movement::movement;
use crate::systems::overlay::publish_overlay;
use crate::systems::time::update_world_time;

/// Build the per-tick schedule.
///
/// The order is the contract: candidates for every fighter are fully
/// computed before any collision resolution, hitboxes resolve before static
/// push-back so knockback is not cancelled by the same tick's ground
/// contact, and commit/animation/integration run only once everything is
/// resolved.
pub fn tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(begin_tick);
    schedule.add_systems(intent.after(begin_tick));
    schedule.add_systems(apply_gravity.after(intent));
    schedule.add_systems(resolve_hits.after(apply_gravity));
    schedule.add_systems(resolve_statics.after(resolve_hits));
    schedule.add_systems(commit.after(resolve_statics));
    schedule.add_systems(animate.after(commit));
    schedule.add_systems(movement.after(animate));
    schedule.add_systems(publish_overlay.after(movement));
    schedule
}

/// Run one fixed simulation tick.
pub fn run_tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}
