//! ECS resources made available to systems.
//!
//! This module groups the world-level data injected into the ECS world and
//! accessed by systems during execution: the animation catalog, simulation
//! tuning, timing, the transient hitbox list, and the observer view. Each
//! submodule documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – loaded animation clips addressed by stable handles
//! - `gameconfig` – gravity, movement speeds, and other tuning from INI
//! - `hitboxes` – this tick's live attack rectangles, cleared every tick
//! - `overlay` – read-only view for rendering/debug collaborators
//! - `worldtime` – simulation time, fixed delta, and tick counter

pub mod animationstore;
pub mod gameconfig;
pub mod hitboxes;
pub mod overlay;
pub mod worldtime;
