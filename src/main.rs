//! Mini Shmup headless runner
//!
//! Loads assets and tuning, then drives the simulation with a fixed clock and
//! a scripted pilot. Every frame is rendered into an in-memory command list;
//! a JSON summary of the run goes to stdout.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use mini_shmup::assets::{AssetCatalog, BuiltinAssets, ManifestAssets};
use mini_shmup::renderer::{DrawCommand, render};
use mini_shmup::sim::{FireOutcome, GameState, SpawnOutcome, TickInput, WorldSnapshot, tick};
use mini_shmup::tuning::Tuning;

#[derive(Parser, Debug)]
#[command(name = "mini-shmup")]
#[command(about = "Run the side-scrolling shooter simulation headless and report the outcome")]
struct Cli {
    /// Frames to simulate
    #[arg(long, default_value_t = 3_600)]
    frames: u64,
    /// RNG seed (defaults to tuning file seed, then wall-clock time)
    #[arg(long)]
    seed: Option<u64>,
    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// JSON tuning overrides
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// JSON sprite manifest (defaults to the built-in sprite sheet sizes)
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Emit collision circles after the sprites
    #[arg(long, default_value_t = false)]
    debug_draw: bool,
}

/// Deterministic input script: weave up and down, keep firing, and ask to
/// quit once the ship is out of health.
struct Pilot {
    /// Frames spent on each vertical sweep
    sweep: u64,
    /// Fire on every n-th frame
    fire_every: u64,
}

impl Default for Pilot {
    fn default() -> Self {
        Self {
            sweep: 90,
            fire_every: 6,
        }
    }
}

impl Pilot {
    fn input(&self, state: &GameState) -> TickInput {
        let frame = state.frame;
        let going_up = (frame / self.sweep) % 2 == 0;
        TickInput {
            up: going_up,
            down: !going_up,
            right: frame % (self.sweep * 4) < self.sweep,
            left: false,
            fire: frame % self.fire_every == 0,
            quit: state.is_ship_destroyed(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct RunStats {
    frames_run: u64,
    quit_requested: bool,
    rocks_spawned: u64,
    spawns_blocked: u64,
    spawns_exhausted: u64,
    shots_fired: u64,
    shots_dropped: u64,
    contacts: u64,
    /// Commands in the last rendered frame
    draw_commands: usize,
}

#[derive(Debug, Serialize)]
struct Summary {
    stats: RunStats,
    world: WorldSnapshot,
}

fn load_tuning(cli: &Cli) -> Result<Tuning> {
    let mut tuning = match &cli.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    if cli.debug_draw {
        tuning.debug_collisions = true;
    }
    Ok(tuning)
}

fn load_assets(cli: &Cli) -> Result<AssetCatalog> {
    let catalog = match &cli.assets {
        Some(path) => {
            let mut source = ManifestAssets::open(path)
                .with_context(|| format!("reading sprite manifest {}", path.display()))?;
            AssetCatalog::load(&mut source)
        }
        None => AssetCatalog::load(&mut BuiltinAssets),
    };
    catalog.context("loading sprites")
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn run(cli: &Cli, state: &mut GameState) -> RunStats {
    let pilot = Pilot::default();
    let mut stats = RunStats::default();
    let mut commands: Vec<DrawCommand> = Vec::new();

    for _ in 0..cli.frames {
        let input = pilot.input(state);
        if input.quit {
            log::info!("Ship destroyed at frame {}, stopping", state.frame);
            stats.quit_requested = true;
            break;
        }

        let report = tick(state, &input, cli.dt);
        stats.frames_run += 1;
        stats.contacts += u64::from(report.contacts);
        match report.spawn {
            SpawnOutcome::Spawned(_) => stats.rocks_spawned += 1,
            SpawnOutcome::Blocked => stats.spawns_blocked += 1,
            SpawnOutcome::PoolExhausted => stats.spawns_exhausted += 1,
            SpawnOutcome::Waiting => {}
        }
        match report.fire {
            FireOutcome::Fired(_) => stats.shots_fired += 1,
            FireOutcome::PoolExhausted => stats.shots_dropped += 1,
            FireOutcome::Idle => {}
        }

        commands.clear();
        render(state, &mut commands);
        stats.draw_commands = commands.len();
    }
    stats
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let tuning = load_tuning(&cli)?;
    let catalog = load_assets(&cli)?;
    let seed = cli.seed.or(tuning.seed).unwrap_or_else(clock_seed);

    log::info!("Mini Shmup starting, seed {}", seed);
    let mut state = GameState::new(tuning, &catalog, seed);
    let stats = run(&cli, &mut state);

    let summary = Summary {
        stats,
        world: state.snapshot(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
