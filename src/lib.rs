//! Brawlcore library.
//!
//! Deterministic fixed-timestep combat simulation core for a two-player 2D
//! versus fighter. Exposes the ECS components, resources, and systems for
//! use by the demo driver and integration tests.

pub mod components;
pub mod resources;
pub mod systems;
