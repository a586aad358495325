//! Publish the per-tick observer view.
//!
//! Gathers the rectangles and animation state external collaborators need
//! into [`DebugOverlay`] after the tick has committed. Purely one-way: the
//! simulation never reads the overlay back.

use bevy_ecs::prelude::*;

use crate::components::animator::Animator;
use crate::components::boxcollider::{BoxCollider, ColliderKind};
use crate::components::fighter::Fighter;
use crate::components::mapposition::MapPosition;
use crate::resources::animationstore::{AnimationStore, Stage};
use crate::resources::hitboxes::TickHitboxes;
use crate::resources::overlay::{DebugOverlay, FighterView, OverlayRect};

pub fn publish_overlay(
    mut overlay: ResMut<DebugOverlay>,
    fighters: Query<(&Fighter, &Animator, &MapPosition, &BoxCollider)>,
    statics: Query<(&MapPosition, &BoxCollider), Without<Fighter>>,
    hitboxes: Res<TickHitboxes>,
    store: Res<AnimationStore>,
) {
    overlay.clear();

    for (fighter, animator, position, collider) in fighters.iter() {
        overlay.rects.push(OverlayRect {
            rect: collider.rect(position.pos),
            kind: collider.kind,
        });
        let clip = store.clip(animator.current_clip());
        overlay.fighters.push(FighterView {
            index: fighter.index,
            hp: fighter.current.hp,
            facing: fighter.current.facing,
            clip: clip.name.clone(),
            stage: animator
                .current_keyframe(&store)
                .map(|f| f.stage)
                .unwrap_or(Stage::Unset),
            playback_tick: animator.playback_tick(clip),
        });
    }

    for (position, collider) in statics.iter() {
        overlay.rects.push(OverlayRect {
            rect: collider.rect(position.pos),
            kind: collider.kind,
        });
    }

    for hitbox in hitboxes.iter() {
        overlay.rects.push(OverlayRect {
            rect: hitbox.rect,
            kind: ColliderKind::Hitbox,
        });
    }
}
