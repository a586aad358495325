//! Per-tick decoded input snapshot for one fighter.
//!
//! The core does not poll devices. Whatever feeds the simulation (local
//! keyboard decode, replay playback, a test script) writes one
//! [`InputSnapshot`] per fighter per tick and the state machine reads it
//! exactly once during input resolution. [`ButtonState::step`] derives the
//! press/release edges from raw held booleans so producers only have to
//! supply level state.

use bevy_ecs::prelude::Component;

/// Boolean button state with per-tick edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Whether the button is currently held this tick.
    pub active: bool,
    /// Whether the button went down this tick.
    pub just_pressed: bool,
    /// Whether the button went up this tick.
    pub just_released: bool,
}

impl ButtonState {
    /// Produce the next tick's state from this tick's state and the raw
    /// held level of the button.
    pub fn step(self, held: bool) -> ButtonState {
        ButtonState {
            active: held,
            just_pressed: held && !self.active,
            just_released: !held && self.active,
        }
    }
}

/// Decoded input for one fighter, valid for exactly one tick.
///
/// Axis values are normalized to {-1, 0, 1}. Positive x is world-right,
/// positive y is up.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub x: f32,
    pub y: f32,
    pub light: ButtonState,
    pub medium: ButtonState,
    pub heavy: ButtonState,
}

impl InputSnapshot {
    /// Round raw axis values to {-1, 0, 1}.
    pub fn set_axis(&mut self, x: f32, y: f32) {
        self.x = x.round().clamp(-1.0, 1.0);
        self.y = y.round().clamp(-1.0, 1.0);
    }

    pub fn left(&self) -> bool {
        self.x < 0.0
    }

    pub fn right(&self) -> bool {
        self.x > 0.0
    }

    pub fn up(&self) -> bool {
        self.y > 0.0
    }

    pub fn down(&self) -> bool {
        self.y < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_press_edge() {
        let b = ButtonState::default().step(true);
        assert!(b.active);
        assert!(b.just_pressed);
        assert!(!b.just_released);
    }

    #[test]
    fn test_button_hold_has_no_edge() {
        let b = ButtonState::default().step(true).step(true);
        assert!(b.active);
        assert!(!b.just_pressed);
        assert!(!b.just_released);
    }

    #[test]
    fn test_button_release_edge() {
        let b = ButtonState::default().step(true).step(false);
        assert!(!b.active);
        assert!(!b.just_pressed);
        assert!(b.just_released);
    }

    #[test]
    fn test_axis_rounds_to_unit_steps() {
        let mut input = InputSnapshot::default();
        input.set_axis(0.7, -0.6);
        assert_eq!(input.x, 1.0);
        assert_eq!(input.y, -1.0);
        assert!(input.right());
        assert!(input.down());

        input.set_axis(0.2, 0.2);
        assert_eq!(input.x, 0.0);
        assert_eq!(input.y, 0.0);
        assert!(!input.left() && !input.right());
    }
}
