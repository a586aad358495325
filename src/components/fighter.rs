//! Fighter identity and double-buffered state.
//!
//! The [`Fighter`] component carries everything about a player that outlives
//! one tick: who the opponent is, the committed state of this tick and the
//! one before it, the resolved animation handles, and which attack clip is
//! in progress.

use bevy_ecs::prelude::{Component, Entity};

use crate::components::framestate::Facing;
use crate::components::playerstate::PlayerState;
use crate::resources::animationstore::{AnimationStore, ClipId, StoreError};

/// The clip handles a fighter's state selection needs, resolved once at
/// startup. A missing name aborts initialization instead of surfacing as a
/// broken lookup mid-tick.
#[derive(Debug, Clone, Copy)]
pub struct ClipSet {
    pub idle: ClipId,
    pub walk_forward: ClipId,
    pub walk_back: ClipId,
    /// Transition played on entering a crouch; chains into `crouch`.
    pub crouch_enter: ClipId,
    pub crouch: ClipId,
    pub jump_ascent: ClipId,
    pub jump_descent: ClipId,
    pub block: ClipId,
    pub was_hit: ClipId,
    /// Standing normals in button priority order: Light, Medium, Heavy.
    pub standing: [ClipId; 3],
    /// Crouching normals in button priority order: Light, Medium, Heavy.
    pub crouching: [ClipId; 3],
}

impl ClipSet {
    /// Resolve the conventional clip names from the catalog.
    pub fn resolve(store: &AnimationStore) -> Result<Self, StoreError> {
        Ok(Self {
            idle: store.resolve("Idle")?,
            walk_forward: store.resolve("WalkForward")?,
            walk_back: store.resolve("WalkBack")?,
            crouch_enter: store.resolve("Crouching")?,
            crouch: store.resolve("Crouch")?,
            jump_ascent: store.resolve("NJumpAscent")?,
            jump_descent: store.resolve("NJumpDescent")?,
            block: store.resolve("Block")?,
            was_hit: store.resolve("WasHit1")?,
            standing: [
                store.resolve("StandingL")?,
                store.resolve("StandingM")?,
                store.resolve("StandingH")?,
            ],
            crouching: [
                store.resolve("CrouchingL")?,
                store.resolve("CrouchingM")?,
                store.resolve("CrouchingH")?,
            ],
        })
    }
}

#[derive(Component, Debug, Clone)]
pub struct Fighter {
    pub index: usize,
    pub opponent: Entity,
    pub clips: ClipSet,
    /// Attack clip in progress, cleared when the attack animation ends.
    pub attack_clip: Option<ClipId>,
    /// When set, input resolution treats the stick and buttons as released.
    pub control_disabled: bool,
    /// State committed this tick.
    pub current: PlayerState,
    /// State committed the tick before, kept for edge detection.
    pub last: PlayerState,
}

impl Fighter {
    pub fn new(index: usize, opponent: Entity, clips: ClipSet, facing: Facing, hp: i32) -> Self {
        Self {
            index,
            opponent,
            clips,
            attack_clip: None,
            control_disabled: false,
            current: PlayerState::new(facing, hp),
            last: PlayerState::new(facing, hp),
        }
    }
}
