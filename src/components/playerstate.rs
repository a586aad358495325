//! Authoritative per-fighter simulation state.
//!
//! [`PlayerState`] is a plain value: health, stun countdown, frame-state
//! flags, this-tick collision flags, velocity, and facing. Each tick a
//! fighter's committed state is copied into a [`Candidate`], the candidate is
//! reshaped by input resolution, world forces, combat, and collision, and the
//! commit system rotates it back in as the new committed state. Accumulation
//! happens through named pure functions rather than in-place mutation where a
//! system hands a state to another stage.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::framestate::{CollisionFlags, Facing, FrameState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Current health. Clamped at zero; whether zero ends the round is the
    /// embedding game's call.
    pub hp: i32,
    /// Ticks remaining before the fighter can act again while stunned.
    pub next_action_delay: i32,
    pub frame_state: FrameState,
    /// Valid for the current tick only.
    pub collisions: CollisionFlags,
    /// World units per second.
    pub velocity: Vec2,
    pub facing: Facing,
}

impl PlayerState {
    pub fn new(facing: Facing, hp: i32) -> Self {
        Self {
            hp,
            next_action_delay: 0,
            frame_state: FrameState::empty(),
            collisions: CollisionFlags::empty(),
            velocity: Vec2::ZERO,
            facing,
        }
    }

    /// Whether either attack flag is set.
    pub fn is_attacking(&self) -> bool {
        self.frame_state
            .intersects(FrameState::ATTACK_CANCELLABLE | FrameState::ATTACK_NONCANCELLABLE)
    }

    pub fn in_stun(&self) -> bool {
        self.frame_state
            .intersects(FrameState::HIT_STUN | FrameState::BLOCK_STUN)
    }

    /// Return a copy with `accel` added to the velocity.
    #[must_use]
    pub fn apply_force(mut self, accel: Vec2) -> Self {
        self.velocity += accel;
        self
    }
}

/// This tick's unresolved state for one fighter.
///
/// Written from the committed state by the intent system, then reshaped in
/// place by gravity, combat, and static collision before commit consumes it.
#[derive(Component, Debug, Clone, Copy)]
pub struct Candidate(pub PlayerState);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_neutral() {
        let s = PlayerState::new(Facing::Right, 100);
        assert_eq!(s.hp, 100);
        assert_eq!(s.next_action_delay, 0);
        assert!(s.frame_state.is_empty());
        assert!(s.collisions.is_empty());
        assert_eq!(s.velocity, Vec2::ZERO);
        assert!(!s.is_attacking());
        assert!(!s.in_stun());
    }

    #[test]
    fn test_apply_force_accumulates_velocity() {
        let s = PlayerState::new(Facing::Left, 100)
            .apply_force(Vec2::new(3.0, 0.0))
            .apply_force(Vec2::new(0.0, -2.0));
        assert_eq!(s.velocity, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_is_attacking_for_either_flag() {
        let mut s = PlayerState::new(Facing::Right, 100);
        s.frame_state.insert(FrameState::ATTACK_CANCELLABLE);
        assert!(s.is_attacking());
        s.frame_state = FrameState::ATTACK_NONCANCELLABLE;
        assert!(s.is_attacking());
        s.frame_state = FrameState::CROUCHING;
        assert!(!s.is_attacking());
    }
}
