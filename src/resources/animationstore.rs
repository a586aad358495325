//! Animation catalog resource.
//!
//! Clips are authored externally, loaded once, and addressed from the hot
//! simulation path by copyable [`ClipId`] handles; the string-keyed map only
//! exists for load-time resolution. A clip is an ordered list of
//! [`Keyframe`]s, each lasting a whole number of ticks, with a playback mode,
//! an optional attack payload, and an optional follow-up clip played on
//! completion.
//!
//! The tick→keyframe index is derived data. Structural mutation may leave it
//! stale; queries detect the disagreement between the stored index length and
//! the clip's total tick count and fall back to a linear scan until
//! [`Clip::rebuild_index`] is called.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::boxcollider::Rect;

/// Duration of one animation tick in seconds.
pub const TICK_TIME: f32 = 1.0 / 60.0;

/// Stable handle to a loaded clip. Only minted by [`AnimationStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipId(usize);

/// Phase of an attack a keyframe belongs to. Only `Active` keyframes
/// produce a live hitbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stage {
    Startup,
    Active,
    Recovery,
    #[default]
    Unset,
}

/// How playback position maps onto elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    /// Wrap around at the end.
    Loop,
    /// Play to the end, then hand off to the next clip (or the animator's
    /// default).
    Once,
    /// Wraps like `Loop`.
    Bounce,
    /// Plays back to front, then hands off like `Once`.
    Reverse,
}

/// Which defensive stances can block an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guard {
    Low,
    Mid,
    High,
}

/// Combat payload of an attack clip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackData {
    pub damage: i32,
    pub guard: Guard,
    pub frame_adv_on_block: i32,
    pub frame_adv_on_hit: i32,
    /// Knockback direction applied to the defender, authored for an attacker
    /// facing world-right. Scaled by damage at resolution time.
    pub pushback: Vec2,
}

/// One stage of a clip: a duration in ticks, an optional hit rectangle in
/// character-local space, and how far the character moves per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    #[serde(default)]
    pub stage: Stage,
    pub frame_count: u32,
    #[serde(default)]
    pub hit_rect: Option<Rect>,
    #[serde(default)]
    pub displacement: Vec2,
}

/// Serialized form of a clip, as the asset collaborator provides it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipDef {
    pub name: String,
    pub mode: Playback,
    #[serde(default)]
    pub frames: Vec<Keyframe>,
    #[serde(default)]
    pub attack: Option<AttackData>,
    #[serde(default)]
    pub next_clip: Option<String>,
}

/// A loaded animation clip.
#[derive(Debug, Clone)]
pub struct Clip {
    pub name: String,
    pub mode: Playback,
    frames: Vec<Keyframe>,
    /// Invariant: equals the sum of all keyframe durations.
    total_ticks: u32,
    /// Derived tick → keyframe index. May lag behind `frames` after
    /// mutation; length disagreement with `total_ticks` marks it stale.
    index: Vec<usize>,
    pub attack: Option<AttackData>,
    pub next_clip: Option<String>,
    /// Resolved by [`AnimationStore::link`].
    next: Option<ClipId>,
}

impl Clip {
    fn from_def(def: ClipDef) -> Self {
        let total_ticks = def.frames.iter().map(|f| f.frame_count).sum();
        let mut clip = Self {
            name: def.name,
            mode: def.mode,
            frames: def.frames,
            total_ticks,
            index: Vec::new(),
            attack: def.attack,
            next_clip: def.next_clip,
            next: None,
        };
        clip.rebuild_index();
        clip
    }

    pub fn frames(&self) -> &[Keyframe] {
        &self.frames
    }

    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    /// Clip length in seconds.
    pub fn duration(&self) -> f32 {
        self.total_ticks as f32 * TICK_TIME
    }

    /// Clip to play when this one completes, if any was linked.
    pub fn next(&self) -> Option<ClipId> {
        self.next
    }

    pub fn first_keyframe(&self) -> Option<&Keyframe> {
        self.frames.first()
    }

    /// Keyframe whose cumulative duration window contains `tick`, or `None`
    /// at or past the clip's total tick count.
    ///
    /// Uses the derived index when it agrees with the total tick count and
    /// falls back to a cumulative scan when it does not.
    pub fn keyframe_at(&self, tick: u32) -> Option<&Keyframe> {
        if tick >= self.total_ticks {
            return None;
        }
        if self.index.len() == self.total_ticks as usize {
            return self.frames.get(self.index[tick as usize]);
        }
        debug!("clip '{}': tick index stale, scanning", self.name);
        let mut acc = 0;
        self.frames.iter().find(|f| {
            acc += f.frame_count;
            tick < acc
        })
    }

    /// Playback tick for an elapsed time within the clip.
    pub fn tick_for_time(&self, time: f32) -> u32 {
        if self.total_ticks == 0 {
            return 0;
        }
        ((time / self.duration()) * self.total_ticks as f32).floor() as u32
    }

    /// Append a keyframe, keeping the total and the derived index current.
    pub fn push_frame(&mut self, frame: Keyframe) {
        let slot = self.frames.len();
        for _ in 0..frame.frame_count {
            self.index.push(slot);
        }
        self.total_ticks += frame.frame_count;
        self.frames.push(frame);
    }

    /// Remove the keyframe at `slot`, keeping the total and index current.
    pub fn remove_frame(&mut self, slot: usize) {
        if slot >= self.frames.len() {
            return;
        }
        let removed = self.frames.remove(slot);
        self.total_ticks -= removed.frame_count;
        self.rebuild_index();
    }

    /// Change the duration of the keyframe at `slot`. The derived index is
    /// left stale and rebuilt lazily on demand.
    pub fn set_frame_duration(&mut self, slot: usize, ticks: u32) {
        if let Some(frame) = self.frames.get_mut(slot) {
            self.total_ticks = self.total_ticks - frame.frame_count + ticks;
            frame.frame_count = ticks;
        }
    }

    /// Whether the stored total agrees with the summed keyframe durations.
    pub fn invariant_holds(&self) -> bool {
        self.frames.iter().map(|f| f.frame_count).sum::<u32>() == self.total_ticks
    }

    /// Recompute the total from the keyframes and rebuild the index. The
    /// recovery path when the total has been knocked out of agreement.
    pub fn recompute(&mut self) {
        self.total_ticks = self.frames.iter().map(|f| f.frame_count).sum();
        self.rebuild_index();
    }

    /// Rebuild the tick → keyframe index. O(total tick count).
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for (slot, frame) in self.frames.iter().enumerate() {
            for _ in 0..frame.frame_count {
                self.index.push(slot);
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown animation clip '{0}'")]
    UnknownClip(String),
    #[error("duplicate animation clip '{0}'")]
    DuplicateClip(String),
    #[error("clip '{0}' carries attack data but does not play once")]
    AttackOnLoopingClip(String),
    #[error("bad animation data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Central registry of loaded clips.
#[derive(Resource, Default)]
pub struct AnimationStore {
    clips: Vec<Clip>,
    by_name: FxHashMap<String, ClipId>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clip. Names must be unique, and only one-shot clips may
    /// carry attack data.
    pub fn add_clip(&mut self, def: ClipDef) -> Result<ClipId, StoreError> {
        if self.by_name.contains_key(&def.name) {
            return Err(StoreError::DuplicateClip(def.name));
        }
        if def.attack.is_some() && def.mode != Playback::Once {
            return Err(StoreError::AttackOnLoopingClip(def.name));
        }
        let id = ClipId(self.clips.len());
        self.by_name.insert(def.name.clone(), id);
        self.clips.push(Clip::from_def(def));
        Ok(id)
    }

    /// Resolve a clip name to its handle. The only place names are looked
    /// up; everything past load time carries [`ClipId`]s.
    pub fn resolve(&self, name: &str) -> Result<ClipId, StoreError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| StoreError::UnknownClip(name.to_string()))
    }

    /// Resolve every clip's follow-up name to a handle. A dangling name is
    /// a configuration error and fails loading outright.
    pub fn link(&mut self) -> Result<(), StoreError> {
        for slot in 0..self.clips.len() {
            if let Some(name) = self.clips[slot].next_clip.clone() {
                let id = self.resolve(&name)?;
                self.clips[slot].next = Some(id);
            }
        }
        Ok(())
    }

    pub fn clip(&self, id: ClipId) -> &Clip {
        &self.clips[id.0]
    }

    pub fn clip_mut(&mut self, id: ClipId) -> &mut Clip {
        &mut self.clips[id.0]
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Load a full catalog from its JSON form and link follow-ups.
    pub fn from_json(data: &str) -> Result<Self, StoreError> {
        let defs: Vec<ClipDef> = serde_json::from_str(data)?;
        let mut store = Self::new();
        for def in defs {
            store.add_clip(def)?;
        }
        store.link()?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kf(ticks: u32, stage: Stage) -> Keyframe {
        Keyframe {
            stage,
            frame_count: ticks,
            hit_rect: None,
            displacement: Vec2::ZERO,
        }
    }

    fn three_frame_clip() -> Clip {
        Clip::from_def(ClipDef {
            name: "Jab".to_string(),
            mode: Playback::Once,
            frames: vec![
                kf(2, Stage::Startup),
                kf(3, Stage::Active),
                kf(4, Stage::Recovery),
            ],
            attack: None,
            next_clip: None,
        })
    }

    #[test]
    fn test_total_ticks_matches_summed_durations() {
        let clip = three_frame_clip();
        assert_eq!(clip.total_ticks(), 9);
        assert!(clip.invariant_holds());
    }

    #[test]
    fn test_keyframe_windows() {
        let clip = three_frame_clip();
        assert_eq!(clip.keyframe_at(0).map(|f| f.stage), Some(Stage::Startup));
        assert_eq!(clip.keyframe_at(1).map(|f| f.stage), Some(Stage::Startup));
        assert_eq!(clip.keyframe_at(2).map(|f| f.stage), Some(Stage::Active));
        assert_eq!(clip.keyframe_at(4).map(|f| f.stage), Some(Stage::Active));
        assert_eq!(clip.keyframe_at(5).map(|f| f.stage), Some(Stage::Recovery));
        assert_eq!(clip.keyframe_at(8).map(|f| f.stage), Some(Stage::Recovery));
    }

    #[test]
    fn test_keyframe_at_end_is_none() {
        let clip = three_frame_clip();
        assert!(clip.keyframe_at(9).is_none());
        assert!(clip.keyframe_at(100).is_none());
    }

    #[test]
    fn test_keyframe_query_is_idempotent() {
        let clip = three_frame_clip();
        let first = clip.keyframe_at(3).copied();
        for _ in 0..10 {
            assert_eq!(clip.keyframe_at(3).copied(), first);
        }
    }

    #[test]
    fn test_push_and_remove_keep_invariant() {
        let mut clip = three_frame_clip();
        clip.push_frame(kf(5, Stage::Unset));
        assert_eq!(clip.total_ticks(), 14);
        assert!(clip.invariant_holds());
        assert_eq!(clip.keyframe_at(13).map(|f| f.stage), Some(Stage::Unset));

        clip.remove_frame(1);
        assert_eq!(clip.total_ticks(), 11);
        assert!(clip.invariant_holds());
        assert_eq!(clip.keyframe_at(2).map(|f| f.stage), Some(Stage::Recovery));
    }

    #[test]
    fn test_stale_index_is_detected_not_trusted() {
        let mut clip = three_frame_clip();
        // Stretch the startup window without rebuilding the index.
        clip.set_frame_duration(0, 5);
        assert!(clip.invariant_holds());
        assert_eq!(clip.total_ticks(), 12);
        // Queries answer from the cumulative scan while the index is stale.
        assert_eq!(clip.keyframe_at(4).map(|f| f.stage), Some(Stage::Startup));
        assert_eq!(clip.keyframe_at(5).map(|f| f.stage), Some(Stage::Active));
        assert_eq!(clip.keyframe_at(11).map(|f| f.stage), Some(Stage::Recovery));

        clip.rebuild_index();
        assert_eq!(clip.keyframe_at(4).map(|f| f.stage), Some(Stage::Startup));
        assert_eq!(clip.keyframe_at(5).map(|f| f.stage), Some(Stage::Active));
    }

    #[test]
    fn test_recompute_restores_agreement() {
        let mut clip = three_frame_clip();
        clip.set_frame_duration(2, 1);
        clip.recompute();
        assert!(clip.invariant_holds());
        assert_eq!(clip.total_ticks(), 6);
        assert!(clip.keyframe_at(6).is_none());
    }

    #[test]
    fn test_tick_for_time() {
        let clip = three_frame_clip();
        assert_eq!(clip.tick_for_time(0.0), 0);
        assert_eq!(clip.tick_for_time(TICK_TIME * 4.5), 4);
        // At exactly the duration the tick index falls off the end.
        assert_eq!(clip.tick_for_time(clip.duration()), 9);
    }

    #[test]
    fn test_resolve_unknown_clip_fails() {
        let store = AnimationStore::new();
        assert!(matches!(
            store.resolve("Idle"),
            Err(StoreError::UnknownClip(_))
        ));
    }

    #[test]
    fn test_duplicate_clip_rejected() {
        let mut store = AnimationStore::new();
        let def = ClipDef {
            name: "Idle".to_string(),
            mode: Playback::Loop,
            frames: vec![kf(4, Stage::Unset)],
            attack: None,
            next_clip: None,
        };
        store.add_clip(def.clone()).unwrap();
        assert!(matches!(
            store.add_clip(def),
            Err(StoreError::DuplicateClip(_))
        ));
    }

    #[test]
    fn test_attack_data_requires_play_once() {
        let mut store = AnimationStore::new();
        let result = store.add_clip(ClipDef {
            name: "BadIdle".to_string(),
            mode: Playback::Loop,
            frames: vec![kf(4, Stage::Unset)],
            attack: Some(AttackData {
                damage: 5,
                guard: Guard::Mid,
                frame_adv_on_block: 6,
                frame_adv_on_hit: 10,
                pushback: Vec2::new(3.0, 1.0),
            }),
            next_clip: None,
        });
        assert!(matches!(result, Err(StoreError::AttackOnLoopingClip(_))));
    }

    #[test]
    fn test_link_resolves_follow_up() {
        let mut store = AnimationStore::new();
        let idle = store
            .add_clip(ClipDef {
                name: "Idle".to_string(),
                mode: Playback::Loop,
                frames: vec![kf(4, Stage::Unset)],
                attack: None,
                next_clip: None,
            })
            .unwrap();
        let jab = store
            .add_clip(ClipDef {
                name: "Jab".to_string(),
                mode: Playback::Once,
                frames: vec![kf(6, Stage::Startup)],
                attack: None,
                next_clip: Some("Idle".to_string()),
            })
            .unwrap();
        store.link().unwrap();
        assert_eq!(store.clip(jab).next(), Some(idle));
    }

    #[test]
    fn test_link_dangling_follow_up_fails() {
        let mut store = AnimationStore::new();
        store
            .add_clip(ClipDef {
                name: "Jab".to_string(),
                mode: Playback::Once,
                frames: vec![kf(6, Stage::Startup)],
                attack: None,
                next_clip: Some("Missing".to_string()),
            })
            .unwrap();
        assert!(matches!(store.link(), Err(StoreError::UnknownClip(_))));
    }

    #[test]
    fn test_from_json_builds_linked_catalog() {
        let data = r#"[
            {"name": "Idle", "mode": "Loop",
             "frames": [{"frame_count": 4}]},
            {"name": "Jab", "mode": "Once", "next_clip": "Idle",
             "attack": {"damage": 5, "guard": "Mid",
                        "frame_adv_on_block": 6, "frame_adv_on_hit": 10,
                        "pushback": [3.0, 1.0]},
             "frames": [
                {"frame_count": 2, "stage": "Startup"},
                {"frame_count": 1, "stage": "Active",
                 "hit_rect": {"pos": [40.0, 20.0], "size": [50.0, 30.0]}},
                {"frame_count": 3, "stage": "Recovery"}]}
        ]"#;
        let store = AnimationStore::from_json(data).unwrap();
        assert_eq!(store.len(), 2);
        let jab = store.resolve("Jab").unwrap();
        let clip = store.clip(jab);
        assert_eq!(clip.total_ticks(), 6);
        assert_eq!(clip.attack.map(|a| a.damage), Some(5));
        assert_eq!(clip.next(), Some(store.resolve("Idle").unwrap()));
        let active = clip.keyframe_at(2).unwrap();
        assert_eq!(active.stage, Stage::Active);
        assert!(active.hit_rect.is_some());
    }
}
