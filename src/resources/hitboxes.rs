//! Transient per-tick hitbox collection.
//!
//! Hitboxes live for exactly one tick: input resolution appends one for every
//! fighter on an active attack frame, combat resolution reads them all, and
//! the driver clears the list at the top of the next tick. Ownership is
//! strict: only the tick driver clears, fighters only append.

use bevy_ecs::prelude::{Entity, Resource};
use smallvec::SmallVec;

use crate::components::boxcollider::Rect;
use crate::resources::animationstore::AttackData;

/// A live attack region for the current tick.
#[derive(Debug, Clone, Copy)]
pub struct SpawnedHitbox {
    /// World-space rectangle, already mirrored for the attacker's facing.
    pub rect: Rect,
    pub attack: AttackData,
    /// Attacking fighter; a hitbox never touches its owner's hurtbox.
    pub owner: Entity,
}

#[derive(Resource, Default)]
pub struct TickHitboxes {
    boxes: SmallVec<[SpawnedHitbox; 8]>,
}

impl TickHitboxes {
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    pub fn push(&mut self, hitbox: SpawnedHitbox) {
        self.boxes.push(hitbox);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpawnedHitbox> {
        self.boxes.iter()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
