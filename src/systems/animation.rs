//! Animation selection and timeline advance.
//!
//! The committed frame state is the single source of truth for which clip
//! plays. Selection order mirrors how the states preempt each other: stun
//! over attack, attack over airborne poses, then crouch, walk, idle. After
//! selection the animator advances by the tick's delta; a completed one-shot
//! clip hands off to its follow-up inside [`Animator::advance`], which is
//! what ends an attack on the state-machine side one tick later.

use bevy_ecs::prelude::*;

use crate::components::animator::Animator;
use crate::components::fighter::Fighter;
use crate::components::framestate::FrameState;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

pub fn animate(
    mut query: Query<(&Fighter, &mut Animator)>,
    store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (fighter, mut animator) in query.iter_mut() {
        let state = &fighter.current;
        let clips = &fighter.clips;

        if state.in_stun() {
            if state.frame_state.contains(FrameState::BLOCK_STUN) {
                animator.play(clips.block);
            } else {
                animator.play(clips.was_hit);
            }
        } else if state.is_attacking() {
            if let Some(clip) = fighter.attack_clip {
                animator.play(clip);
            }
        } else if state.frame_state.contains(FrameState::AERIAL) {
            if state.velocity.y > 0.0 {
                animator.play(clips.jump_ascent);
            } else if state.velocity.y < 0.0 {
                animator.play(clips.jump_descent);
            }
            // At the apex the current pose holds.
        } else if state.frame_state.contains(FrameState::CROUCHING) {
            // Entering a crouch plays the transition clip, which chains into
            // the held loop on its own.
            if !fighter.last.frame_state.contains(FrameState::CROUCHING)
                || animator.current_clip() == clips.crouch_enter
            {
                animator.play(clips.crouch_enter);
            } else {
                animator.play(clips.crouch);
            }
        } else {
            let forward = (state.facing.is_right() && state.velocity.x > 0.0)
                || (!state.facing.is_right() && state.velocity.x < 0.0);
            let backward = (state.facing.is_right() && state.velocity.x < 0.0)
                || (!state.facing.is_right() && state.velocity.x > 0.0);
            if forward {
                animator.play(clips.walk_forward);
            } else if backward {
                animator.play(clips.walk_back);
            } else {
                animator.play(clips.idle);
            }
        }

        animator.advance(&store, time.delta);
    }
}
