//! Per-tick gameplay condition flags.
//!
//! [`FrameState`] is the bitset of simultaneous conditions a fighter is in
//! (aerial, stunned, attacking, crouching, ...). It is recomputed every tick
//! from velocity, collision results, and stun timers and is the single source
//! of truth for which animation clip plays. [`CollisionFlags`] records the
//! directions a fighter touched static geometry in during one tick only.

use bitflags::bitflags;

bitflags! {
    /// Simultaneous gameplay conditions of one fighter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FrameState: u16 {
        const AERIAL = 1 << 0;
        const HIT_STUN = 1 << 1;
        const BLOCK_STUN = 1 << 2;
        const ATTACK_NONCANCELLABLE = 1 << 3;
        const ATTACK_CANCELLABLE = 1 << 4;
        const MOVING_HORIZONTAL = 1 << 5;
        const MOVING_VERTICAL = 1 << 6;
        const CROUCHING = 1 << 7;
        const HOLDING_AWAY = 1 << 8;
    }
}

bitflags! {
    /// Directions in which static geometry was touched this tick.
    /// Reset to empty at the start of every tick's collision resolution.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CollisionFlags: u8 {
        const RIGHT = 1 << 0;
        const LEFT = 1 << 1;
        const BOTTOM = 1 << 2;
        const TOP = 1 << 3;
    }
}

/// Horizontal direction a fighter faces. Updated at commit time relative to
/// the opponent's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn is_right(self) -> bool {
        self == Facing::Right
    }
}
