//! End-to-end runs of the frame loop.
//!
//! Builds worlds from tuning and asset sources, drives them through `tick`
//! and `render`, and checks the gameplay rules that span modules.

use std::fs;
use std::path::PathBuf;

use glam::Vec2;
use mini_shmup::assets::{AssetCatalog, BuiltinAssets, ManifestAssets, SpriteId};
use mini_shmup::error::AssetError;
use mini_shmup::renderer::{DrawCommand, render};
use mini_shmup::sim::{
    EntityKind, FireOutcome, GameState, SpawnOutcome, TickInput, overlaps_any, tick,
};
use mini_shmup::tuning::Tuning;

const DT: f32 = 1.0 / 60.0;

// ── Helpers ────────────────────────────────────────────────────────────

fn world(tuning: Tuning, seed: u64) -> GameState {
    GameState::new(tuning, &AssetCatalog::builtin(), seed)
}

/// Rocks never spawn on their own
fn still_tuning() -> Tuning {
    Tuning {
        spawn_delay: 1_000_000.0,
        ..Tuning::default()
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mini-shmup-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

// ── Combat ─────────────────────────────────────────────────────────────

#[test]
fn largest_rock_takes_exactly_five_bullets() {
    let tuning = Tuning {
        rock_radius_min: 39,
        rock_radius_max: 39,
        ..still_tuning()
    };
    let mut state = world(tuning, 1);
    let rock = state.pool.activate(EntityKind::Rock, Vec2::new(500.0, 300.0)).unwrap();
    assert_eq!(state.pool.get(rock).unwrap().health, 5);
    assert!((state.pool.get(rock).unwrap().scale - 1.17).abs() < 1e-5);

    for hit in 1..=5 {
        assert!(state.pool.get(rock).unwrap().active, "rock gone before hit {hit}");
        let bullet = state.pool.activate(EntityKind::Bullet, Vec2::new(500.0, 300.0)).unwrap();
        let report = tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(report.contacts, 1);
        assert!(!state.pool.get(bullet).unwrap().active);
    }
    assert!(!state.pool.get(rock).unwrap().active);
}

#[test]
fn ship_keeps_flying_at_zero_health() {
    let mut state = world(still_tuning(), 2);
    for _ in 0..state.tuning.ship_health {
        let pos = state.ship().pos;
        state.pool.activate(EntityKind::Rock, pos).unwrap();
        tick(&mut state, &TickInput::default(), DT);
    }
    assert!(state.is_ship_destroyed());
    assert!(state.ship().active);
    assert!(state.snapshot().ship_destroyed);

    // Still steerable; game over is the caller's call
    let before = state.ship().pos;
    let input = TickInput { down: true, ..Default::default() };
    tick(&mut state, &input, DT);
    assert!(state.ship().pos.y > before.y);
}

#[test]
fn bullets_fly_off_and_are_reused() {
    let tuning = Tuning {
        bullet_capacity: 1,
        ..still_tuning()
    };
    let mut state = world(tuning, 3);
    let fire = TickInput { fire: true, ..Default::default() };

    let first = tick(&mut state, &fire, DT).fire;
    assert!(matches!(first, FireOutcome::Fired(_)));
    assert_eq!(tick(&mut state, &fire, DT).fire, FireOutcome::PoolExhausted);

    // 800 px at 250 px/s is a little over three seconds
    for _ in 0..240 {
        tick(&mut state, &TickInput::default(), DT);
    }
    assert_eq!(state.pool.active_count(EntityKind::Bullet), 0);
    assert_eq!(tick(&mut state, &fire, DT).fire, first);
}

// ── Spawning ───────────────────────────────────────────────────────────

#[test]
fn committed_spawns_never_overlap() {
    let tuning = Tuning {
        rock_capacity: 60,
        spawn_delay: 0.0,
        ..Tuning::default()
    };
    let mut state = world(tuning, 4);
    let mut spawned = 0;
    for frame in 0..600 {
        // Sweep the ship so it crosses the rock lane now and then
        let input = TickInput {
            up: frame % 120 < 60,
            down: frame % 120 >= 60,
            fire: frame % 5 == 0,
            ..Default::default()
        };
        let before = state.pool.entities().to_vec();
        let report = tick(&mut state, &input, DT);
        if let SpawnOutcome::Spawned(idx) = report.spawn {
            spawned += 1;
            // Check against the world as it stood when the rock was placed
            let mut placed = before;
            placed[idx].active = true;
            placed[idx].pos = Vec2::new(
                state.field.x + placed[idx].half_extent.x * 2.0,
                state.pool.get(idx).unwrap().pos.y,
            );
            assert!(!overlaps_any(&placed, idx, 0.0));
        }
        assert!(state.pool.active_count(EntityKind::Rock) <= 60);
    }
    assert!(spawned > 0);
}

#[test]
fn crowded_lane_delays_spawns() {
    let tuning = Tuning {
        spawn_delay: 0.0,
        spawn_clearance_ship_widths: 100.0,
        ..Tuning::default()
    };
    let mut state = world(tuning, 5);
    // The ship alone blocks every spot with this much clearance
    for _ in 0..10 {
        assert_eq!(tick(&mut state, &TickInput::default(), DT).spawn, SpawnOutcome::Blocked);
    }
    assert_eq!(state.pool.active_count(EntityKind::Rock), 0);
}

// ── Determinism and rendering ──────────────────────────────────────────

#[test]
fn same_seed_same_run() {
    let script = |frame: u64| TickInput {
        up: frame % 50 < 25,
        right: frame % 70 < 10,
        fire: frame % 3 == 0,
        ..Default::default()
    };
    let run = |seed| {
        let mut state = world(Tuning::default(), seed);
        for frame in 0..300 {
            tick(&mut state, &script(frame), DT);
        }
        state
    };
    let a = run(77);
    let b = run(77);
    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.pool.entities(), b.pool.entities());
    assert_eq!(a.background, b.background);
}

#[test]
fn frame_renders_background_before_entities() {
    let mut state = world(Tuning::default(), 6);
    for _ in 0..120 {
        tick(&mut state, &TickInput { fire: true, ..Default::default() }, DT);
    }
    let mut commands = Vec::new();
    render(&state, &mut commands);

    let kinds: Vec<SpriteId> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Sprite(s) => Some(s.sprite),
            DrawCommand::Circle { .. } => None,
        })
        .collect();
    let first_entity = kinds
        .iter()
        .position(|s| matches!(s, SpriteId::Ship | SpriteId::Rock | SpriteId::Bullet))
        .unwrap();
    assert_eq!(&kinds[..2], &[SpriteId::Sky, SpriteId::Ground]);
    assert!(kinds[first_entity..]
        .iter()
        .all(|s| matches!(s, SpriteId::Ship | SpriteId::Rock | SpriteId::Bullet)));
    let active = state.pool.iter_active().count();
    assert_eq!(kinds.len() - first_entity, active);
}

// ── Startup ────────────────────────────────────────────────────────────

#[test]
fn manifest_and_tuning_files_load() {
    let dir = scratch_dir("load");
    let mut sprites = serde_json::Map::new();
    for id in SpriteId::ALL {
        let file = format!("{}.png", id.name());
        fs::write(dir.join(&file), b"png").unwrap();
        sprites.insert(
            id.name().to_string(),
            serde_json::json!({ "file": file, "width": 64, "height": 32 }),
        );
    }
    let manifest = serde_json::json!({ "sprites": sprites });
    let manifest_path = dir.join("sprites.json");
    fs::write(&manifest_path, manifest.to_string()).unwrap();

    let tuning_path = dir.join("tuning.json");
    fs::write(&tuning_path, r#"{ "rock_capacity": 8, "seed": 11 }"#).unwrap();

    let mut source = ManifestAssets::open(&manifest_path).unwrap();
    let catalog = AssetCatalog::load(&mut source).unwrap();
    assert_eq!(catalog.get(SpriteId::Rock).size, Vec2::new(64.0, 32.0));

    let tuning = Tuning::load(&tuning_path).unwrap();
    assert_eq!(tuning.seed, Some(11));
    let state = GameState::new(tuning, &catalog, 11);
    assert_eq!(state.pool.capacity(EntityKind::Rock), 8);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_sprite_file_is_fatal() {
    let dir = scratch_dir("missing");
    let manifest = r#"{ "sprites": { "ship": { "file": "nope.png", "width": 10, "height": 10 } } }"#;
    let mut source = ManifestAssets::from_json_str(manifest, &dir).unwrap();
    let err = AssetCatalog::load(&mut source).unwrap_err();
    assert!(matches!(err, AssetError::FileNotFound { .. }));

    assert!(AssetCatalog::load(&mut BuiltinAssets).is_ok());
    fs::remove_dir_all(&dir).ok();
}
