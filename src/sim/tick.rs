//! Variable timestep simulation tick
//!
//! One call advances the world by the elapsed time since the last frame:
//! spawn, collisions, movement, then background scroll.

use serde::{Deserialize, Serialize};

use super::collision::check_collisions;
use super::entity::{EntityKind, Role};
use super::movement::advance;
use super::spawn::SpawnOutcome;
use super::state::GameState;

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Launch one bullet this frame
    pub fire: bool,
    /// Ask the outer loop to stop. The core ignores it.
    pub quit: bool,
}

/// What happened to this frame's fire request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireOutcome {
    /// Nothing requested, or the ship was not in play
    Idle,
    Fired(usize),
    /// Every bullet was already in flight
    PoolExhausted,
}

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReport {
    pub spawn: SpawnOutcome,
    /// Contacts resolved by the collision pass
    pub contacts: u32,
    pub fire: FireOutcome,
}

/// Clamp a frame time to something safe to integrate with
pub fn sanitize_elapsed(elapsed: f32) -> f32 {
    if elapsed > 0.0 && elapsed.is_finite() {
        elapsed
    } else {
        0.0
    }
}

/// Advance the game state by `elapsed` seconds
pub fn tick(state: &mut GameState, input: &TickInput, elapsed: f32) -> FrameReport {
    let dt = sanitize_elapsed(elapsed);

    let spawn = state
        .spawner
        .update(dt, &mut state.pool, &mut state.rng, state.field);

    let contacts = check_collisions(state.pool.entities_mut());

    let mut fire = FireOutcome::Idle;
    for idx in 0..state.pool.len() {
        let Some(entity) = state.pool.get_mut(idx) else {
            continue;
        };
        if !entity.active {
            continue;
        }
        advance(entity, input, &state.tuning, state.field, dt);

        // Bullet slots come after the ship, so a new bullet also moves this frame
        if input.fire && matches!(entity.role, Role::Ship { .. }) {
            fire = match state.fire_bullet() {
                Some(bullet) => FireOutcome::Fired(bullet),
                None => FireOutcome::PoolExhausted,
            };
        }
    }

    state.background.update(dt, state.field.x);

    state.frame += 1;
    state.time += f64::from(dt);

    if contacts > 0 {
        log::trace!(
            "Frame {}: {} contacts, ship health {}, {} rocks active",
            state.frame,
            contacts,
            state.ship().health,
            state.pool.active_count(EntityKind::Rock)
        );
    }

    FrameReport {
        spawn,
        contacts,
        fire,
    }
}
