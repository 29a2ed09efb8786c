//! Ships, rocks and bullets
//!
//! One closed set of kinds, so behavior is picked by matching on the role
//! rather than through trait objects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::{SpriteId, SpriteInfo};
use crate::tuning::Tuning;

/// What an entity is, without its per-kind state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Rock,
    Bullet,
}

/// Per-kind state carried by an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// Player ship. Thrust persists across frames and decays.
    Ship { thrust: Vec2 },
    Rock,
    Bullet,
}

/// A pooled game object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub role: Role,
    /// Sprite center
    pub pos: Vec2,
    /// Collision radius
    pub radius: f32,
    pub scale: f32,
    /// Radians, clockwise on screen
    pub rotation: f32,
    /// Half of the on-screen bounding box (after scale and rotation)
    pub half_extent: Vec2,
    /// Only active entities update, draw and collide
    pub active: bool,
    /// Touched something during the last collision pass
    pub colliding: bool,
    pub health: i32,
    /// Health restored when the slot is reused
    pub max_health: i32,
}

impl Entity {
    fn new(role: Role, sprite: SpriteInfo, radius: f32, scale: f32, rotation: f32, health: i32) -> Self {
        Self {
            role,
            pos: Vec2::ZERO,
            radius,
            scale,
            rotation,
            half_extent: rotated_extent(sprite.size * scale, rotation) * 0.5,
            active: false,
            colliding: false,
            health,
            max_health: health,
        }
    }

    /// The player ship, active, parked at the left edge facing right
    pub fn ship(tuning: &Tuning, sprite: SpriteInfo) -> Self {
        let mut ship = Self::new(
            Role::Ship { thrust: Vec2::ZERO },
            sprite,
            tuning.ship_radius,
            tuning.ship_scale,
            tuning.ship_rotation_deg.to_radians(),
            tuning.ship_health,
        );
        ship.pos = Vec2::new(
            ship.half_extent.x * 2.0 * tuning.ship_edge_margin,
            tuning.screen_height / 2.0,
        );
        ship.active = true;
        ship
    }

    /// An inactive rock. Bigger rocks draw larger and take more hits.
    pub fn rock(tuning: &Tuning, sprite: SpriteInfo, radius: f32) -> Self {
        let scale = rock_scale(tuning, radius);
        Self::new(Role::Rock, sprite, radius, scale, 0.0, rock_health(tuning, scale))
    }

    /// An inactive bullet
    pub fn bullet(tuning: &Tuning, sprite: SpriteInfo) -> Self {
        Self::new(Role::Bullet, sprite, tuning.bullet_radius, tuning.bullet_scale, 0.0, 1)
    }

    pub fn kind(&self) -> EntityKind {
        match self.role {
            Role::Ship { .. } => EntityKind::Ship,
            Role::Rock => EntityKind::Rock,
            Role::Bullet => EntityKind::Bullet,
        }
    }

    pub fn sprite(&self) -> SpriteId {
        match self.role {
            Role::Ship { .. } => SpriteId::Ship,
            Role::Rock => SpriteId::Rock,
            Role::Bullet => SpriteId::Bullet,
        }
    }

    /// Current ship thrust (None for rocks and bullets)
    pub fn thrust(&self) -> Option<Vec2> {
        match self.role {
            Role::Ship { thrust } => Some(thrust),
            _ => None,
        }
    }

    /// Bring a pooled slot back into play as if freshly created
    pub fn activate(&mut self, pos: Vec2) {
        self.active = true;
        self.colliding = false;
        self.pos = pos;
        self.health = self.max_health;
    }

    /// Reduce health; rocks and bullets leave play at zero. The ship never does,
    /// game over is decided by whoever owns the run.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
        if self.health <= 0 && self.kind() != EntityKind::Ship {
            self.active = false;
        }
    }

    /// Remove from play regardless of remaining health
    pub fn destroy(&mut self) {
        self.take_damage(self.health.max(1));
    }

    /// React to touching `other`.
    ///
    /// | self \ other | Rock                            |
    /// |--------------|---------------------------------|
    /// | Ship         | self -1, other destroyed        |
    /// | Bullet       | self -1, other -1               |
    ///
    /// Every other pairing does nothing, so calling this both ways round for a
    /// contact gives the same result whichever entity goes first.
    pub fn hit(&mut self, other: &mut Entity) {
        match (self.kind(), other.kind()) {
            (EntityKind::Ship, EntityKind::Rock) => {
                self.take_damage(1);
                other.destroy();
            }
            (EntityKind::Bullet, EntityKind::Rock) => {
                self.take_damage(1);
                other.take_damage(1);
            }
            _ => {}
        }
    }
}

/// Sprite scale for a rock of the given collision radius
pub fn rock_scale(tuning: &Tuning, radius: f32) -> f32 {
    tuning.rock_scale_factor * (radius / tuning.rock_reference_radius)
}

/// Starting health for a rock drawn at `scale` (floor, at least 1)
pub fn rock_health(tuning: &Tuning, scale: f32) -> i32 {
    ((tuning.rock_health_factor * scale) as i32).max(1)
}

/// Axis-aligned size of a `size` box rotated by `rotation` radians
fn rotated_extent(size: Vec2, rotation: f32) -> Vec2 {
    let (sin, cos) = rotation.sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Vec2::new(cos * size.x + sin * size.y, sin * size.x + cos * size.y)
}
