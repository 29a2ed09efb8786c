//! World state for one run
//!
//! Everything the frame loop touches lives here: the entity arena, the rock
//! spawner, the background and the seeded RNG. Nothing is allocated after
//! `GameState::new` returns.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::background::Background;
use super::entity::{Entity, EntityKind};
use super::movement::muzzle_position;
use super::pool::EntityPool;
use super::rng::SimRng;
use super::spawn::{SpawnController, scatter_rocks};
use crate::assets::{AssetCatalog, SpriteId};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Playfield size in pixels
    pub field: Vec2,
    pub pool: EntityPool,
    pub spawner: SpawnController,
    pub background: Background,
    /// Frames simulated so far
    pub frame: u64,
    /// Simulated seconds so far
    pub time: f64,
    pub rng: SimRng,
}

impl GameState {
    /// Build a fresh world: ship at the left edge, idle rock and bullet pools,
    /// a generated background and, if enabled, an initial scatter of rocks.
    pub fn new(tuning: Tuning, catalog: &AssetCatalog, seed: u64) -> Self {
        debug_assert!(tuning.validate().is_ok(), "invalid tuning: {:?}", tuning.validate());
        let mut rng = SimRng::new(seed);
        let field = tuning.field_size();

        let ship = Entity::ship(&tuning, catalog.get(SpriteId::Ship));
        let rock_sprite = catalog.get(SpriteId::Rock);
        let rocks = (0..tuning.rock_capacity)
            .map(|_| {
                let radius = rng.range_u32(tuning.rock_radius_min, tuning.rock_radius_max) as f32;
                Entity::rock(&tuning, rock_sprite, radius)
            })
            .collect();
        let bullet_sprite = catalog.get(SpriteId::Bullet);
        let bullets = (0..tuning.bullet_capacity)
            .map(|_| Entity::bullet(&tuning, bullet_sprite))
            .collect();

        let clearance = ship.half_extent.x * 2.0 * tuning.spawn_clearance_ship_widths;
        let mut pool = EntityPool::new(ship, rocks, bullets);
        let spawner = SpawnController::new(tuning.spawn_delay, clearance);
        let background = Background::generate(&tuning, catalog, &mut rng, field);

        if tuning.scatter_rocks {
            let placed = scatter_rocks(
                &mut pool,
                &mut rng,
                field,
                tuning.scatter_min_dist,
                tuning.scatter_tries,
            );
            log::info!("Scattered {} rocks", placed);
        }

        log::info!(
            "World ready: {}x{} field, {} rocks, {} bullets, seed {}",
            field.x,
            field.y,
            tuning.rock_capacity,
            tuning.bullet_capacity,
            seed
        );

        Self {
            tuning,
            field,
            pool,
            spawner,
            background,
            frame: 0,
            time: 0.0,
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn ship(&self) -> &Entity {
        self.pool.ship()
    }

    /// Launch a bullet from the ship's leading edge.
    ///
    /// Returns the bullet slot, or `None` when every bullet is in flight.
    pub fn fire_bullet(&mut self) -> Option<usize> {
        let muzzle = muzzle_position(self.pool.ship());
        let idx = self.pool.activate(EntityKind::Bullet, muzzle);
        if idx.is_none() {
            log::trace!("Fire dropped: no free bullet");
        }
        idx
    }

    /// Ship health has run out. Ending the run is up to the caller.
    pub fn is_ship_destroyed(&self) -> bool {
        self.pool.ship().health <= 0
    }

    /// Serializable summary of the current frame
    pub fn snapshot(&self) -> WorldSnapshot {
        let ship = self.pool.ship();
        WorldSnapshot {
            frame: self.frame,
            time: self.time,
            seed: self.seed(),
            ship_pos: ship.pos,
            ship_thrust: ship.thrust().unwrap_or(Vec2::ZERO),
            ship_health: ship.health,
            ship_destroyed: self.is_ship_destroyed(),
            active_rocks: self.pool.active_count(EntityKind::Rock),
            rock_capacity: self.pool.capacity(EntityKind::Rock),
            active_bullets: self.pool.active_count(EntityKind::Bullet),
            bullet_capacity: self.pool.capacity(EntityKind::Bullet),
            colliding: self.pool.iter_active().filter(|(_, e)| e.colliding).count(),
            background_layers: self.background.layers.len(),
        }
    }
}

/// Per-frame world summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub time: f64,
    pub seed: u64,
    pub ship_pos: Vec2,
    pub ship_thrust: Vec2,
    pub ship_health: i32,
    pub ship_destroyed: bool,
    pub active_rocks: usize,
    pub rock_capacity: usize,
    pub active_bullets: usize,
    pub bullet_capacity: usize,
    /// Active entities flagged by the last collision pass
    pub colliding: usize,
    pub background_layers: usize,
}
