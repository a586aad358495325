//! Static geometry collision resolution.
//!
//! Axis-separated sweep: each axis is resolved independently, X before Y,
//! never diagonally. The hurtbox is projected forward by that axis's
//! velocity component over one tick and tested against every static
//! collider. On overlap the signed penetration along the direction of
//! travel turns into a push-back velocity of `-overlap / dt` added on top
//! of the candidate's velocity, which exactly cancels the penetration when
//! the position integrates at the end of the tick. The matching directional
//! flag is OR'd into this tick's collision flags.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::trace;

use crate::components::boxcollider::{BoxCollider, ColliderKind, Rect};
use crate::components::framestate::CollisionFlags;
use crate::components::mapposition::MapPosition;
use crate::components::playerstate::Candidate;
use crate::resources::worldtime::WorldTime;

/// Signed penetration of `moving` into `fixed` along the direction of
/// travel. Positive x means entering from the left (travelling right),
/// negative x entering from the right, and likewise for y.
fn penetration(moving: &Rect, velocity: Vec2, fixed: &Rect) -> Vec2 {
    let mut overlap = Vec2::ZERO;
    if !moving.overlaps(fixed) {
        return overlap;
    }
    if velocity.x > 0.0 && moving.max().x > fixed.min().x {
        overlap.x += moving.max().x - fixed.min().x;
    }
    if velocity.x < 0.0 && moving.min().x < fixed.max().x {
        overlap.x -= fixed.max().x - moving.min().x;
    }
    if velocity.y > 0.0 && moving.max().y > fixed.min().y {
        overlap.y += moving.max().y - fixed.min().y;
    }
    if velocity.y < 0.0 && moving.min().y < fixed.max().y {
        overlap.y -= fixed.max().y - moving.min().y;
    }
    overlap
}

fn flags_for(overlap: Vec2) -> CollisionFlags {
    let mut flags = CollisionFlags::empty();
    if overlap.x > 0.0 {
        flags.insert(CollisionFlags::RIGHT);
    }
    if overlap.x < 0.0 {
        flags.insert(CollisionFlags::LEFT);
    }
    if overlap.y > 0.0 {
        flags.insert(CollisionFlags::TOP);
    }
    if overlap.y < 0.0 {
        flags.insert(CollisionFlags::BOTTOM);
    }
    flags
}

pub fn resolve_statics(
    mut movers: Query<(&mut Candidate, &MapPosition, &BoxCollider)>,
    statics: Query<(&MapPosition, &BoxCollider), Without<Candidate>>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }

    for (mut candidate, position, collider) in movers.iter_mut() {
        if collider.kind != ColliderKind::Hurtbox {
            continue;
        }
        for axis in 0..2 {
            let velocity = if axis == 0 {
                Vec2::new(candidate.0.velocity.x, 0.0)
            } else {
                Vec2::new(0.0, candidate.0.velocity.y)
            };
            let projected = collider.rect(position.pos + velocity * dt);

            for (static_position, static_collider) in statics.iter() {
                if static_collider.kind != ColliderKind::Static {
                    continue;
                }
                let fixed = static_collider.rect(static_position.pos);
                let overlap = penetration(&projected, velocity, &fixed);
                if overlap == Vec2::ZERO {
                    continue;
                }
                let push_back = -overlap / dt;
                trace!("push-back {:?} from static at {:?}", push_back, fixed.pos);
                candidate.0.velocity += push_back;
                candidate.0.collisions.insert(flags_for(overlap));
            }
        }
    }
}
