//! Per-fighter animation playback state.
//!
//! The animator holds which clip is playing and how long it has played.
//! Everything else is read from the [`AnimationStore`]: the current keyframe
//! (and with it the live hit rectangle and per-frame displacement) is a pure
//! function of (clip, elapsed time). Completion of a `Once` or `Reverse`
//! clip hands playback to the clip's follow-up, or the animator's default
//! clip; because the hand-off switches the current clip and resets the
//! elapsed time, it fires exactly once per completion.

use bevy_ecs::prelude::Component;
use log::trace;

use crate::resources::animationstore::{AnimationStore, Clip, ClipId, Keyframe, Playback};

#[derive(Component, Debug, Clone)]
pub struct Animator {
    current: ClipId,
    /// Played when a finished clip names no follow-up.
    pub default_clip: ClipId,
    /// Seconds the current clip has been playing.
    pub elapsed: f32,
}

impl Animator {
    pub fn new(default_clip: ClipId) -> Self {
        Self {
            current: default_clip,
            default_clip,
            elapsed: 0.0,
        }
    }

    pub fn current_clip(&self) -> ClipId {
        self.current
    }

    /// Switch to `clip`, restarting playback. A no-op when `clip` is
    /// already playing.
    pub fn play(&mut self, clip: ClipId) {
        if clip != self.current {
            self.current = clip;
            self.elapsed = 0.0;
        }
    }

    /// Whether the current clip is an attack.
    pub fn in_attack(&self, store: &AnimationStore) -> bool {
        store.clip(self.current).attack.is_some()
    }

    /// Playback tick within `clip` for the current elapsed time. `Reverse`
    /// clips play back to front.
    pub fn playback_tick(&self, clip: &Clip) -> u32 {
        let mut time = self.elapsed;
        if clip.mode == Playback::Reverse {
            time = clip.duration() - time;
        }
        clip.tick_for_time(time)
    }

    /// Keyframe currently showing. Falls back to the clip's first keyframe
    /// when the playback tick has run off the end of the timeline.
    pub fn current_keyframe<'a>(&self, store: &'a AnimationStore) -> Option<&'a Keyframe> {
        let clip = store.clip(self.current);
        clip.keyframe_at(self.playback_tick(clip))
            .or_else(|| clip.first_keyframe())
    }

    /// Advance playback by `dt` seconds, wrapping looping clips and handing
    /// completed one-shot clips to their follow-up.
    pub fn advance(&mut self, store: &AnimationStore, dt: f32) {
        let clip = store.clip(self.current);
        let duration = clip.duration();
        if duration > 0.0 && self.elapsed >= duration {
            match clip.mode {
                Playback::Loop | Playback::Bounce => self.elapsed -= duration,
                Playback::Once | Playback::Reverse => {
                    let next = clip.next().unwrap_or(self.default_clip);
                    trace!(
                        "clip '{}' complete, playing '{}'",
                        clip.name,
                        store.clip(next).name
                    );
                    self.play(next);
                }
            }
        }
        self.elapsed += dt;
    }
}
