//! Hitbox/hurtbox combat resolution.
//!
//! [`resolve_hits`] runs before static collision so knockback velocity is
//! still subject to the same tick's ground push-back. For every fighter it
//! first resets the per-tick collision flags, then applies every live hitbox
//! whose rectangle touches the fighter's hurtbox (edges count as contact).
//! A hitbox never touches the hurtbox of the fighter that spawned it.
//!
//! [`apply_attack`] is the pure block/hit rule: a contact is blocked only if
//! the defender is free to block (no attack in progress, not in hit-stun),
//! is holding the stick away from the incoming push, and meets the attack's
//! guard height with their stance. Anything else is a hit.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::fighter::Fighter;
use crate::components::framestate::{CollisionFlags, Facing, FrameState};
use crate::components::input::InputSnapshot;
use crate::components::mapposition::MapPosition;
use crate::components::playerstate::{Candidate, PlayerState};
use crate::resources::animationstore::{AttackData, Guard};
use crate::resources::gameconfig::GameConfig;
use crate::resources::hitboxes::TickHitboxes;

/// Resolve one attack contact against a defender's state.
///
/// Returns the defender's new state: block stun with dampened horizontal
/// knockback on a block, or hit stun with damage and the full 2D knockback
/// on a hit. The push direction is the attack's pushback vector, normalized
/// and mirrored so it always points away from the defender's facing.
#[must_use]
pub fn apply_attack(
    mut state: PlayerState,
    input: &InputSnapshot,
    attack: &AttackData,
    block_knockback: f32,
) -> PlayerState {
    let dir = attack.pushback.normalize_or_zero();
    let dir = match state.facing {
        Facing::Left => dir,
        Facing::Right => Vec2::new(-dir.x, dir.y),
    };

    let free_to_block = !state.frame_state.intersects(
        FrameState::ATTACK_CANCELLABLE | FrameState::ATTACK_NONCANCELLABLE | FrameState::HIT_STUN,
    );
    let holding_away = (dir.x < 0.0 && state.facing.is_right() && input.left())
        || (dir.x > 0.0 && !state.facing.is_right() && input.right());

    let crouching = state.frame_state.contains(FrameState::CROUCHING);
    let overhead = dir.y < 0.0;
    let guard_met = match attack.guard {
        Guard::High | Guard::Mid => !crouching,
        Guard::Low => crouching && !overhead,
    };

    if free_to_block && holding_away && guard_met {
        state.frame_state.insert(FrameState::BLOCK_STUN);
        state.next_action_delay = attack.frame_adv_on_block;
        state.velocity = Vec2::new(dir.x * attack.damage as f32, 0.0) * block_knockback;
    } else {
        state.frame_state.insert(FrameState::HIT_STUN);
        state.next_action_delay = attack.frame_adv_on_hit;
        state.hp = (state.hp - attack.damage).max(0);
        state.velocity = dir * attack.damage as f32;
    }
    state
}

pub fn resolve_hits(
    mut query: Query<(Entity, &Fighter, &mut Candidate, &InputSnapshot, &MapPosition, &BoxCollider)>,
    hitboxes: Res<TickHitboxes>,
    config: Res<GameConfig>,
) {
    for (entity, fighter, mut candidate, input, position, collider) in query.iter_mut() {
        candidate.0.collisions = CollisionFlags::empty();

        let hurtbox = collider.rect(position.pos);
        for hitbox in hitboxes.iter() {
            if hitbox.owner == entity {
                continue;
            }
            if hitbox.rect.touches(&hurtbox) {
                let before = candidate.0.hp;
                candidate.0 = apply_attack(candidate.0, input, &hitbox.attack, config.block_knockback);
                if candidate.0.hp < before {
                    debug!(
                        "player {} hit for {} (hp {})",
                        fighter.index,
                        before - candidate.0.hp,
                        candidate.0.hp
                    );
                } else {
                    debug!("player {} blocked", fighter.index);
                }
            }
        }
    }
}
