//! State commit.
//!
//! The last stage that touches a candidate. Derives the flags that depend on
//! this tick's resolution results (grounded/aerial from the Bottom collision
//! flag, moving flags from the final velocity), finishes an attack whose
//! animation has ended, counts stun down, then rotates the buffers: the
//! candidate becomes the committed state and the old committed state becomes
//! last. Facing is updated afterwards, relative to the opponent's hurtbox
//! center.

use bevy_ecs::prelude::*;
use log::debug;
use rustc_hash::FxHashMap;

use crate::components::animator::Animator;
use crate::components::boxcollider::BoxCollider;
use crate::components::fighter::Fighter;
use crate::components::framestate::{CollisionFlags, Facing, FrameState};
use crate::components::mapposition::MapPosition;
use crate::components::playerstate::Candidate;
use crate::resources::animationstore::AnimationStore;

pub fn commit(
    mut fighters: Query<(Entity, &mut Fighter, &mut Candidate, &Animator)>,
    positions: Query<(Entity, &MapPosition, &BoxCollider), With<Fighter>>,
    store: Res<AnimationStore>,
) {
    // Hurtbox centers, gathered up front so every fighter resolves facing
    // against the same snapshot.
    let centers: FxHashMap<Entity, f32> = positions
        .iter()
        .map(|(entity, position, collider)| (entity, collider.rect(position.pos).center().x))
        .collect();

    for (entity, mut fighter, mut candidate, animator) in fighters.iter_mut() {
        let mut state = candidate.0;

        let grounded = state.collisions.contains(CollisionFlags::BOTTOM);

        // The animator has already moved off the attack clip when the attack
        // animation finished last tick.
        let ended_attack = !animator.in_attack(&store) && fighter.current.is_attacking();
        if ended_attack {
            debug!("player {} attack ended", fighter.index);
            fighter.attack_clip = None;
            state
                .frame_state
                .remove(FrameState::ATTACK_CANCELLABLE | FrameState::ATTACK_NONCANCELLABLE);
        }

        state
            .frame_state
            .set(FrameState::MOVING_HORIZONTAL, state.velocity.x != 0.0);
        state
            .frame_state
            .set(FrameState::MOVING_VERTICAL, state.velocity.y != 0.0);

        state.frame_state.set(FrameState::AERIAL, !grounded);

        // Stun counts down once per tick, no matter the timestep; both stun
        // flags clear together when the countdown runs out.
        if fighter.current.in_stun() {
            state.next_action_delay -= 1;
            if state.next_action_delay <= 0 {
                state
                    .frame_state
                    .remove(FrameState::HIT_STUN | FrameState::BLOCK_STUN);
            }
        }

        fighter.last = fighter.current;
        fighter.current = state;
        candidate.0 = state;

        if let (Some(&own), Some(&other)) = (centers.get(&entity), centers.get(&fighter.opponent)) {
            if own > other {
                fighter.current.facing = Facing::Left;
            }
            if own < other {
                fighter.current.facing = Facing::Right;
            }
        }
    }
}
