//! Per-fighter input resolution.
//!
//! [`intent`] turns the committed state plus this tick's input snapshot into
//! the unresolved candidate state. A fighter already in an attack follows the
//! attack timeline: the current keyframe's displacement becomes velocity and,
//! on active frames, the keyframe's hit rectangle is registered as a live
//! hitbox for this tick. Otherwise the grounded branches evaluate normals
//! with fixed Light > Medium > Heavy priority or derive walk velocity from
//! the stick.
//!
//! [`begin_tick`] clears the transient hitbox list; it runs first so hitboxes
//! from the previous tick never leak into this one.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::animator::Animator;
use crate::components::boxcollider::{BoxCollider, Rect};
use crate::components::fighter::{ClipSet, Fighter};
use crate::components::framestate::{Facing, FrameState};
use crate::components::input::InputSnapshot;
use crate::components::mapposition::MapPosition;
use crate::components::playerstate::Candidate;
use crate::resources::animationstore::{AnimationStore, ClipId, Stage};
use crate::resources::gameconfig::GameConfig;
use crate::resources::hitboxes::{SpawnedHitbox, TickHitboxes};
use crate::resources::worldtime::WorldTime;

/// Reset the per-tick hitbox list. Runs before any fighter resolves input.
pub fn begin_tick(mut hitboxes: ResMut<TickHitboxes>) {
    hitboxes.clear();
}

/// First crouching normal whose button went down this tick.
fn crouching_attack(input: &InputSnapshot, clips: &ClipSet) -> Option<ClipId> {
    if input.light.just_pressed {
        return Some(clips.crouching[0]);
    }
    if input.medium.just_pressed {
        return Some(clips.crouching[1]);
    }
    if input.heavy.just_pressed {
        return Some(clips.crouching[2]);
    }
    None
}

/// First standing normal whose button went down this tick.
fn standing_attack(input: &InputSnapshot, clips: &ClipSet) -> Option<ClipId> {
    if input.light.just_pressed {
        return Some(clips.standing[0]);
    }
    if input.medium.just_pressed {
        return Some(clips.standing[1]);
    }
    if input.heavy.just_pressed {
        return Some(clips.standing[2]);
    }
    None
}

/// Aerial normals. Deliberately empty: the baseline kit has no air attacks,
/// and this is where they would slot in.
fn aerial_attack(_input: &InputSnapshot, _clips: &ClipSet) -> Option<ClipId> {
    None
}

/// Mirror a character-local hit rectangle into world space against the
/// fighter's hurtbox, flipping around the hurtbox for a left-facing attacker.
fn hitbox_to_world(local: &Rect, hurtbox: &Rect, facing: Facing) -> Rect {
    match facing {
        Facing::Right => Rect {
            pos: hurtbox.min() + local.pos,
            size: local.size,
        },
        Facing::Left => Rect {
            pos: Vec2::new(
                hurtbox.max().x - local.pos.x - local.size.x,
                hurtbox.min().y + local.pos.y,
            ),
            size: local.size,
        },
    }
}

pub fn intent(
    mut query: Query<(
        Entity,
        &mut Fighter,
        &mut Candidate,
        &Animator,
        &InputSnapshot,
        &MapPosition,
        &BoxCollider,
    )>,
    store: Res<AnimationStore>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut hitboxes: ResMut<TickHitboxes>,
) {
    let dt = time.delta;
    for (entity, mut fighter, mut candidate, animator, input, position, collider) in
        query.iter_mut()
    {
        let disabled = InputSnapshot::default();
        let input = if fighter.control_disabled {
            &disabled
        } else {
            input
        };

        let mut state = fighter.current;

        // Holding away is derived fresh every tick from the stick relative
        // to facing.
        let away = (state.facing == Facing::Right && input.left())
            || (state.facing == Facing::Left && input.right());
        state.frame_state.set(FrameState::HOLDING_AWAY, away);

        if state.is_attacking() {
            // Follow the attack timeline: keyframe displacement drives
            // velocity, active frames expose the hit rectangle to the world.
            if let Some(keyframe) = animator.current_keyframe(&store) {
                if dt > 0.0 {
                    state = state.apply_force(keyframe.displacement / dt);
                }
                if keyframe.stage == Stage::Active {
                    if let (Some(local), Some(attack)) =
                        (keyframe.hit_rect, store.clip(animator.current_clip()).attack)
                    {
                        let hurtbox = collider.rect(position.pos);
                        let rect = hitbox_to_world(&local, &hurtbox, state.facing);
                        debug!("player {} hitbox live at {:?}", fighter.index, rect.pos);
                        hitboxes.push(SpawnedHitbox {
                            rect,
                            attack,
                            owner: entity,
                        });
                    }
                }
            }
        } else {
            let in_air = state.frame_state.contains(FrameState::AERIAL);
            let in_neutral = !state.in_stun();

            if !in_air && in_neutral {
                if input.down() {
                    state.frame_state.insert(FrameState::CROUCHING);
                    let picked = crouching_attack(input, &fighter.clips);
                    fighter.attack_clip = picked;
                    if picked.is_some() {
                        state.frame_state.insert(FrameState::ATTACK_NONCANCELLABLE);
                    }
                    state.velocity = Vec2::ZERO;
                } else {
                    state.frame_state.remove(FrameState::CROUCHING);
                    let picked = standing_attack(input, &fighter.clips);
                    fighter.attack_clip = picked;
                    if picked.is_some() {
                        state.frame_state.insert(FrameState::ATTACK_NONCANCELLABLE);
                        state.velocity = Vec2::ZERO;
                    } else {
                        state.velocity = Vec2::new(
                            input.x * config.ground_speed,
                            input.y * config.air_speed,
                        );
                    }
                }
            } else {
                let picked = aerial_attack(input, &fighter.clips);
                fighter.attack_clip = picked;
                if picked.is_some() {
                    state.frame_state.insert(FrameState::ATTACK_NONCANCELLABLE);
                }
            }
        }

        candidate.0 = state;
    }
}
