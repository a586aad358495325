//! Read-only per-tick view for external observers.
//!
//! Rendering and debug-visualization collaborators read this resource after
//! a tick completes: the rectangles live this tick, each fighter's facing,
//! health, and the clip/keyframe the animator is showing. The simulation
//! never reads it back.

use bevy_ecs::prelude::Resource;

use crate::components::boxcollider::{ColliderKind, Rect};
use crate::components::framestate::Facing;
use crate::resources::animationstore::Stage;

#[derive(Debug, Clone, Copy)]
pub struct OverlayRect {
    pub rect: Rect,
    pub kind: ColliderKind,
}

/// What a fighter looks like from the outside this tick.
#[derive(Debug, Clone)]
pub struct FighterView {
    pub index: usize,
    pub hp: i32,
    pub facing: Facing,
    pub clip: String,
    pub stage: Stage,
    /// Playback tick within the current clip.
    pub playback_tick: u32,
}

#[derive(Resource, Default)]
pub struct DebugOverlay {
    pub rects: Vec<OverlayRect>,
    pub fighters: Vec<FighterView>,
}

impl DebugOverlay {
    pub fn clear(&mut self) {
        self.rects.clear();
        self.fighters.clear();
    }
}
