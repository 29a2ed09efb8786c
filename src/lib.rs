//! Mini Shmup - a side-scrolling asteroid shooter core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entity pool, collisions, spawning, parallax background)
//! - `renderer`: Ordered draw-command submission (no rasterization)
//! - `assets`: Sprite catalog and asset sources
//! - `tuning`: Data-driven game balance
//! - `error`: Startup error types

pub mod assets;
pub mod error;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use assets::{AssetCatalog, SpriteId, SpriteInfo};
pub use error::{AssetError, TuningError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_SPEED: f32 = 250.0;
    /// How close to the edge the ship can get (fraction of its on-screen size)
    pub const SHIP_EDGE_MARGIN: f32 = 0.6;
    pub const SHIP_RADIUS: f32 = 25.0;
    pub const SHIP_SCALE: f32 = 0.2;
    /// Sprite art points up, the ship flies right
    pub const SHIP_ROTATION_DEG: f32 = 90.0;
    pub const SHIP_HEALTH: i32 = 3;

    /// Thrust decay: `thrust *= 1 - rate * (dt / period)`
    pub const THRUST_DECAY_RATE: f32 = 0.1;
    pub const THRUST_DECAY_PERIOD: f32 = 0.02;

    /// Rock defaults
    pub const ROCK_CAPACITY: usize = 500;
    pub const ROCK_SPEED: f32 = 150.0;
    pub const ROCK_RADIUS_MIN: u32 = 10;
    pub const ROCK_RADIUS_MAX: u32 = 39;
    /// Radius at which a rock sprite is drawn at `ROCK_SCALE_FACTOR`
    pub const ROCK_REFERENCE_RADIUS: f32 = 25.0;
    pub const ROCK_SCALE_FACTOR: f32 = 0.75;
    /// Health per unit of sprite scale
    pub const ROCK_HEALTH_FACTOR: f32 = 5.0;

    /// Bullet defaults
    pub const BULLET_CAPACITY: usize = 50;
    pub const BULLET_SPEED: f32 = 250.0;
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SCALE: f32 = 0.5;

    /// Seconds between rock spawn attempts
    pub const SPAWN_DELAY: f32 = 0.01;
    /// Spawn clearance, in ship widths
    pub const SPAWN_CLEARANCE_SHIP_WIDTHS: f32 = 2.0;
    /// Radius multiplier used when scattering rocks at startup
    pub const SCATTER_MIN_DIST: f32 = 2.15;
    /// Placement attempts per scattered rock before giving up
    pub const SCATTER_TRIES: u32 = 10;

    /// Background parallax ranges
    pub const BG_LAYERS_MIN: u32 = 6;
    pub const BG_LAYERS_MAX: u32 = 12;
    pub const BG_SPEED_MIN: f32 = 7.5;
    pub const BG_SPEED_MAX: f32 = 50.0;
    pub const BG_SCALE_MIN: f32 = 0.3;
    pub const BG_SCALE_MAX: f32 = 1.0;
    /// Max depth (mountain base height at full screen scale)
    pub const BG_DEPTH_MAX: f32 = 75.0;
    /// Past this fraction of max depth use the silhouette textures
    pub const BG_FAR_FRACTION: f32 = 0.8;
}

/// Linear interpolation between `min` and `max` by `t`
#[inline]
pub fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + (max - min) * t
}

/// Multiplier for one frame of exponential decay.
///
/// `rate` is the fraction lost every `period` seconds. Clamped at zero so a
/// long frame stops the motion instead of reversing it.
#[inline]
pub fn decay_factor(rate: f32, period: f32, dt: f32) -> f32 {
    if period <= 0.0 {
        return 1.0;
    }
    (1.0 - rate * (dt / period)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(7.5, 50.0, 0.0), 7.5);
        assert_eq!(lerp(7.5, 50.0, 1.0), 50.0);
        assert!((lerp(0.3, 1.0, 0.5) - 0.65).abs() < 1e-6);
    }

    #[test]
    fn test_decay_factor() {
        // Zero elapsed keeps everything
        assert_eq!(decay_factor(0.1, 0.02, 0.0), 1.0);
        // One period loses `rate`
        assert!((decay_factor(0.1, 0.02, 0.02) - 0.9).abs() < 1e-6);
        // Huge frames bottom out instead of flipping sign
        assert_eq!(decay_factor(0.1, 0.02, 1.0), 0.0);
    }
}
