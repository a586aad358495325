//! Brawlcore demo driver.
//!
//! A deterministic per-tick combat simulation core for a 2D versus fighter
//! built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - fixed-timestep scheduling with explicit system ordering
//!
//! This executable runs a headless scripted bout between two fighters: no
//! window, no rendering, just the simulation and its log output. It doubles
//! as a worked example of embedding the core: build the animation catalog,
//! resolve the clip handles, spawn the arena and the fighters, then feed
//! input snapshots and tick the schedule.
//!
//! # Main Loop
//!
//! 1. Initialize logging, CLI, and configuration
//! 2. Build the animation catalog and resolve each fighter's clip set
//! 3. Spawn the arena statics and both fighters
//! 4. Per tick: write scripted input snapshots, run the schedule, report
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use log::info;

use brawlcore::components::animator::Animator;
use brawlcore::components::boxcollider::{BoxCollider, ColliderKind, Rect};
use brawlcore::components::fighter::{ClipSet, Fighter};
use brawlcore::components::framestate::Facing;
use brawlcore::components::input::InputSnapshot;
use brawlcore::components::mapposition::MapPosition;
use brawlcore::components::playerstate::{Candidate, PlayerState};
use brawlcore::resources::animationstore::{
    AnimationStore, AttackData, ClipDef, Guard, Keyframe, Playback, Stage, StoreError,
};
use brawlcore::resources::gameconfig::GameConfig;
use brawlcore::resources::hitboxes::TickHitboxes;
use brawlcore::resources::overlay::DebugOverlay;
use brawlcore::resources::worldtime::WorldTime;
use brawlcore::systems::{run_tick, tick_schedule};

/// Brawlcore headless demo bout
#[derive(Parser)]
#[command(version, about = "Runs a scripted two-player bout through the simulation core")]
struct Cli {
    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 900)]
    ticks: u64,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn frame(ticks: u32, stage: Stage) -> Keyframe {
    Keyframe {
        stage,
        frame_count: ticks,
        hit_rect: None,
        displacement: Vec2::ZERO,
    }
}

/// A looping pose with evenly spaced frames.
fn pose(name: &str, frames: usize, ticks_each: u32) -> ClipDef {
    ClipDef {
        name: name.to_string(),
        mode: Playback::Loop,
        frames: vec![frame(ticks_each, Stage::Unset); frames],
        attack: None,
        next_clip: None,
    }
}

/// A one-shot attack clip: startup, active frames carrying the hit
/// rectangle, recovery.
fn strike(
    name: &str,
    startup: u32,
    active: u32,
    recovery: u32,
    hit_rect: Rect,
    step: f32,
    attack: AttackData,
) -> ClipDef {
    ClipDef {
        name: name.to_string(),
        mode: Playback::Once,
        frames: vec![
            Keyframe {
                stage: Stage::Startup,
                frame_count: startup,
                hit_rect: None,
                displacement: Vec2::new(step, 0.0),
            },
            Keyframe {
                stage: Stage::Active,
                frame_count: active,
                hit_rect: Some(hit_rect),
                displacement: Vec2::ZERO,
            },
            frame(recovery, Stage::Recovery),
        ],
        attack: Some(attack),
        next_clip: None,
    }
}

fn attack(damage: i32, guard: Guard, on_block: i32, on_hit: i32, pushback: Vec2) -> AttackData {
    AttackData {
        damage,
        guard,
        frame_adv_on_block: on_block,
        frame_adv_on_hit: on_hit,
        pushback,
    }
}

/// Built-in catalog for the demo bout. A real game loads this from the
/// asset collaborator instead; see [`AnimationStore::from_json`].
fn demo_catalog() -> Result<AnimationStore, StoreError> {
    let mut store = AnimationStore::new();

    store.add_clip(pose("Idle", 4, 5))?;
    store.add_clip(pose("WalkForward", 4, 4))?;
    store.add_clip(pose("WalkBack", 4, 4))?;
    store.add_clip(ClipDef {
        name: "Crouching".to_string(),
        mode: Playback::Once,
        frames: vec![frame(3, Stage::Unset)],
        attack: None,
        next_clip: Some("Crouch".to_string()),
    })?;
    store.add_clip(pose("Crouch", 1, 6))?;
    store.add_clip(pose("NJumpAscent", 2, 4))?;
    store.add_clip(pose("NJumpDescent", 2, 4))?;
    store.add_clip(pose("Block", 1, 4))?;
    store.add_clip(pose("WasHit1", 2, 4))?;

    store.add_clip(strike(
        "StandingL",
        3,
        2,
        6,
        Rect::new(55.0, 60.0, 45.0, 20.0),
        1.2,
        attack(5, Guard::Mid, 6, 10, Vec2::new(3.0, 1.0)),
    ))?;
    store.add_clip(strike(
        "StandingM",
        5,
        3,
        9,
        Rect::new(50.0, 55.0, 55.0, 25.0),
        1.8,
        attack(8, Guard::Mid, 4, 14, Vec2::new(4.0, 1.0)),
    ))?;
    store.add_clip(strike(
        "StandingH",
        8,
        3,
        13,
        Rect::new(45.0, 50.0, 65.0, 35.0),
        2.5,
        attack(12, Guard::High, 2, 18, Vec2::new(5.0, 2.0)),
    ))?;
    store.add_clip(strike(
        "CrouchingL",
        3,
        2,
        7,
        Rect::new(50.0, 10.0, 40.0, 18.0),
        0.8,
        attack(4, Guard::Low, 5, 9, Vec2::new(2.0, 0.5)),
    ))?;
    store.add_clip(strike(
        "CrouchingM",
        6,
        2,
        10,
        Rect::new(55.0, 12.0, 50.0, 20.0),
        1.0,
        attack(7, Guard::Low, 3, 13, Vec2::new(3.0, 1.0)),
    ))?;
    store.add_clip(strike(
        "CrouchingH",
        9,
        4,
        15,
        Rect::new(40.0, 15.0, 55.0, 45.0),
        1.5,
        attack(11, Guard::Low, 1, 20, Vec2::new(2.5, 3.0)),
    ))?;

    store.link()?;
    Ok(store)
}

fn spawn_fighter(world: &mut World, index: usize, x: f32, facing: Facing, clips: ClipSet) -> Entity {
    world
        .spawn((
            MapPosition::new(x, 0.0),
            BoxCollider::new(60.0, 100.0, ColliderKind::Hurtbox),
            Fighter::new(index, Entity::PLACEHOLDER, clips, facing, 100),
            Candidate(PlayerState::new(facing, 100)),
            Animator::new(clips.idle),
            InputSnapshot::default(),
        ))
        .id()
}

fn spawn_arena(world: &mut World) {
    // Floor spanning the stage, walls at both edges.
    world.spawn((
        MapPosition::new(-400.0, -40.0),
        BoxCollider::new(800.0, 40.0, ColliderKind::Static),
    ));
    world.spawn((
        MapPosition::new(-440.0, -40.0),
        BoxCollider::new(40.0, 440.0, ColliderKind::Static),
    ));
    world.spawn((
        MapPosition::new(400.0, -40.0),
        BoxCollider::new(40.0, 440.0, ColliderKind::Static),
    ));
}

/// Deterministic input script: player one advances and pokes, player two
/// backs off, crouches in waves, and swings heavy now and then.
fn scripted_input(tick: u64, index: usize) -> (f32, f32, bool, bool, bool) {
    match index {
        0 => {
            let light = tick % 120 == 30;
            let medium = tick % 240 == 150;
            (1.0, 0.0, light, medium, false)
        }
        _ => {
            let crouched = (tick / 150) % 2 == 1;
            let y = if crouched { -1.0 } else { 0.0 };
            let heavy = tick % 270 == 100;
            (1.0, y, false, false, heavy)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    let dt = config.tick_delta();

    let store = demo_catalog().expect("Failed to build animation catalog");
    let clips = ClipSet::resolve(&store).expect("Animation catalog is missing a required clip");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(TickHitboxes::default());
    world.insert_resource(DebugOverlay::default());
    world.insert_resource(config);
    world.insert_resource(store);

    spawn_arena(&mut world);
    let one = spawn_fighter(&mut world, 0, -120.0, Facing::Right, clips);
    let two = spawn_fighter(&mut world, 1, 60.0, Facing::Left, clips);
    world
        .get_mut::<Fighter>(one)
        .expect("fighter one just spawned")
        .opponent = two;
    world
        .get_mut::<Fighter>(two)
        .expect("fighter two just spawned")
        .opponent = one;

    let mut schedule = tick_schedule();
    schedule
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    info!("Starting bout: {} ticks at {}Hz", cli.ticks, 1.0 / dt);

    for tick in 0..cli.ticks {
        for (index, entity) in [one, two].into_iter().enumerate() {
            let (x, y, light, medium, heavy) = scripted_input(tick, index);
            if let Some(mut snapshot) = world.get_mut::<InputSnapshot>(entity) {
                let previous = *snapshot;
                snapshot.set_axis(x, y);
                snapshot.light = previous.light.step(light);
                snapshot.medium = previous.medium.step(medium);
                snapshot.heavy = previous.heavy.step(heavy);
            }
        }

        run_tick(&mut world, &mut schedule, dt);

        if (tick + 1) % 60 == 0 {
            let overlay = world.resource::<DebugOverlay>();
            for view in &overlay.fighters {
                info!(
                    "t={:>3}s  p{} hp={:<3} clip={:<12} facing={:?}",
                    (tick + 1) / 60,
                    view.index + 1,
                    view.hp,
                    view.clip,
                    view.facing
                );
            }
        }
    }

    let overlay = world.resource::<DebugOverlay>();
    let mut summary: Vec<_> = overlay.fighters.iter().collect();
    summary.sort_by_key(|view| view.index);
    for view in &summary {
        info!("final: p{} hp={}", view.index + 1, view.hp);
    }
}
