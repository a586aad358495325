use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world space, stored as bottom-left corner + size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict AABB overlap test: touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min().x < other.max().x
            && self.max().x > other.min().x
            && self.min().y < other.max().y
            && self.max().y > other.min().y
    }

    /// Contact test inclusive of touching edges.
    pub fn touches(&self, other: &Rect) -> bool {
        self.min().x <= other.max().x
            && self.max().x >= other.min().x
            && self.min().y <= other.max().y
            && self.max().y >= other.min().y
    }
}

/// What a collider is for, which decides how overlaps are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderKind {
    /// Region on a fighter that can receive hits. Resolved against statics
    /// with push-back and against hitboxes through combat resolution.
    Hurtbox,
    /// Immovable world geometry. Only ever the passive side of a resolution.
    Static,
    /// One-tick attack region. Never lives on an entity; see
    /// [`TickHitboxes`](crate::resources::hitboxes::TickHitboxes).
    Hitbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
    pub kind: ColliderKind,
}

impl BoxCollider {
    /// Create a BoxCollider with given size and kind.
    pub fn new(width: f32, height: f32, kind: ColliderKind) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
            kind,
        }
    }

    /// Modify BoxCollider with given offset from the entity pivot.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vec2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vec2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// World-space rectangle of the collider at a given entity position.
    pub fn rect(&self, position: Vec2) -> Rect {
        let (min, max) = self.aabb(position);
        Rect {
            pos: min,
            size: max - min,
        }
    }

    /// Strict AABB vs AABB overlap test against another BoxCollider at a
    /// different entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        self.rect(position).overlaps(&other.rect(other_position))
    }

    /// Point containment in world space.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains_point(&self, position: Vec2, point: Vec2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
