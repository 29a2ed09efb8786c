//! Per-kind movement rules

use glam::Vec2;

use super::entity::{Entity, Role};
use super::tick::TickInput;
use crate::decay_factor;
use crate::tuning::Tuning;

/// Advance one active entity by `dt` seconds.
///
/// Rocks and bullets leave play once fully outside the field on their exit
/// side; the ship is clamped instead. Firing is handled by the caller.
pub fn advance(entity: &mut Entity, input: &TickInput, tuning: &Tuning, field: Vec2, dt: f32) {
    match entity.role {
        Role::Ship { .. } => steer_ship(entity, input, tuning, field, dt),
        Role::Rock => drift_rock(entity, tuning.rock_speed, dt),
        Role::Bullet => drift_bullet(entity, tuning.bullet_speed, field.x, dt),
    }
}

/// Inertial ship control.
///
/// A pressed direction sets that axis of the thrust to full speed. Up wins
/// over Down and Left wins over Right when both are held. Thrust decays every
/// frame whether or not anything is pressed.
pub fn steer_ship(ship: &mut Entity, input: &TickInput, tuning: &Tuning, field: Vec2, dt: f32) {
    let Role::Ship { thrust } = &mut ship.role else {
        return;
    };

    let speed = tuning.ship_speed;
    if input.up {
        thrust.y = -speed;
    } else if input.down {
        thrust.y = speed;
    }
    if input.left {
        thrust.x = -speed;
    } else if input.right {
        thrust.x = speed;
    }

    ship.pos += *thrust * dt;
    *thrust *= decay_factor(tuning.thrust_decay_rate, tuning.thrust_decay_period, dt);

    let margin = ship.half_extent * 2.0 * tuning.ship_edge_margin;
    ship.pos.x = ship.pos.x.max(margin.x).min(field.x - margin.x);
    ship.pos.y = ship.pos.y.max(margin.y).min(field.y - margin.y);
}

/// Where a fired bullet appears: the ship's leading edge
pub fn muzzle_position(ship: &Entity) -> Vec2 {
    ship.pos + Vec2::new(ship.half_extent.x, 0.0)
}

/// Rocks fly left and leave once fully past the left edge
pub fn drift_rock(rock: &mut Entity, speed: f32, dt: f32) {
    rock.pos.x -= speed * dt;
    if rock.pos.x < -rock.half_extent.x {
        rock.active = false;
    }
}

/// Bullets fly right and leave once fully past the right edge
pub fn drift_bullet(bullet: &mut Entity, speed: f32, field_width: f32, dt: f32) {
    bullet.pos.x += speed * dt;
    if bullet.pos.x > field_width + bullet.half_extent.x {
        bullet.active = false;
    }
}
