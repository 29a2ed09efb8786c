//! Rock spawning
//!
//! A timer gates spawn attempts. An attempt that finds no free rock or no
//! clear spot keeps the timer running, so the next frame simply tries again.
//! Crowding delays spawns, it never produces overlapping ones.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::overlaps_any;
use super::entity::EntityKind;
use super::pool::EntityPool;
use super::rng::SimRng;

/// Result of one frame's spawn check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnOutcome {
    /// Delay not reached yet
    Waiting,
    /// Every rock is already in play
    PoolExhausted,
    /// Chosen spot was too close to something
    Blocked,
    /// Rock in this slot entered play
    Spawned(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnController {
    /// Seconds accumulated since the last successful spawn
    pub timer: f32,
    /// Seconds between spawns
    pub delay: f32,
    /// Extra radius a new rock must keep clear of everything else
    pub clearance: f32,
}

impl SpawnController {
    pub fn new(delay: f32, clearance: f32) -> Self {
        Self {
            timer: 0.0,
            delay,
            clearance,
        }
    }

    /// Accumulate `dt` and, once the delay is reached, try to bring in one rock
    /// just off the right edge at a random height.
    pub fn update(
        &mut self,
        dt: f32,
        pool: &mut EntityPool,
        rng: &mut SimRng,
        field: Vec2,
    ) -> SpawnOutcome {
        self.timer += dt;
        if self.timer < self.delay {
            return SpawnOutcome::Waiting;
        }

        let Some(idx) = pool.first_inactive(EntityKind::Rock) else {
            log::trace!("Rock spawn skipped: pool exhausted");
            return SpawnOutcome::PoolExhausted;
        };

        let half = pool.entities()[idx].half_extent;
        let y = rng.range_f32(half.y, field.y - half.y);
        let pos = Vec2::new(field.x + half.x * 2.0, y);

        if try_place(pool, idx, pos, self.clearance) {
            self.timer = 0.0;
            log::trace!("Rock {} spawned at ({:.1}, {:.1})", idx, pos.x, pos.y);
            SpawnOutcome::Spawned(idx)
        } else {
            log::trace!("Rock spawn blocked at ({:.1}, {:.1})", pos.x, pos.y);
            SpawnOutcome::Blocked
        }
    }
}

/// Activate the inactive entity in slot `idx` at `pos` and keep it only if,
/// with its radius grown by `clearance`, it touches no other active entity.
///
/// On failure the slot is returned to the pool untouched apart from position.
pub fn try_place(pool: &mut EntityPool, idx: usize, pos: Vec2, clearance: f32) -> bool {
    let Some(entity) = pool.get_mut(idx) else {
        return false;
    };
    if entity.active {
        return false;
    }
    entity.activate(pos);

    if overlaps_any(pool.entities(), idx, clearance) {
        pool.deactivate(idx);
        return false;
    }
    true
}

/// Fill the field with rocks before play starts.
///
/// Each rock gets up to `tries` random spots, checked with its radius scaled
/// by `min_dist`. Scattering stops at the first rock that finds no room.
/// Returns the number of rocks placed.
pub fn scatter_rocks(
    pool: &mut EntityPool,
    rng: &mut SimRng,
    field: Vec2,
    min_dist: f32,
    tries: u32,
) -> usize {
    let mut placed = 0;
    while let Some(idx) = pool.first_inactive(EntityKind::Rock) {
        let extra = pool.entities()[idx].radius * (min_dist - 1.0).max(0.0);
        let found = (0..tries).any(|_| {
            let pos = Vec2::new(rng.range_f32(0.0, field.x), rng.range_f32(0.0, field.y));
            try_place(pool, idx, pos, extra)
        });
        if !found {
            log::debug!("Rock scatter stopped after {} rocks: no room left", placed);
            break;
        }
        placed += 1;
    }
    placed
}
