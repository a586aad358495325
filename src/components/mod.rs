//! ECS components for entities.
//!
//! This module groups the component types attached to entities in the
//! simulation world: fighters, their per-tick state buffers, colliders, and
//! animation playback.
//!
//! Submodules overview:
//! - [`animator`] – per-fighter clip playback state
//! - [`boxcollider`] – axis-aligned rectangular collider with a kind
//! - [`fighter`] – fighter identity, clip handles, and committed state
//! - [`framestate`] – frame-state / collision-flag bitsets and facing
//! - [`input`] – per-tick decoded input snapshot and button edges
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`playerstate`] – the per-fighter state value and candidate buffer

pub mod animator;
pub mod boxcollider;
pub mod fighter;
pub mod framestate;
pub mod input;
pub mod mapposition;
pub mod playerstate;
