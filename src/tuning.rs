//! Game balance and layout tuning
//!
//! Read once at startup (JSON), never changed while a run is in progress.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Every named constant the simulation reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    // === Field ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Ship ===
    pub ship_speed: f32,
    /// Fraction of the ship's on-screen size kept clear of each edge
    pub ship_edge_margin: f32,
    pub ship_radius: f32,
    pub ship_scale: f32,
    pub ship_rotation_deg: f32,
    pub ship_health: i32,
    pub thrust_decay_rate: f32,
    pub thrust_decay_period: f32,

    // === Rocks ===
    pub rock_capacity: usize,
    pub rock_speed: f32,
    pub rock_radius_min: u32,
    pub rock_radius_max: u32,
    pub rock_reference_radius: f32,
    pub rock_scale_factor: f32,
    pub rock_health_factor: f32,

    // === Bullets ===
    pub bullet_capacity: usize,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullet_scale: f32,

    // === Spawning ===
    pub spawn_delay: f32,
    /// Extra radius during spawn placement, in ship widths
    pub spawn_clearance_ship_widths: f32,
    /// Fill the field with rocks before the first frame
    pub scatter_rocks: bool,
    pub scatter_min_dist: f32,
    pub scatter_tries: u32,

    // === Background ===
    pub bg_layers_min: u32,
    pub bg_layers_max: u32,
    pub bg_depth_max: f32,
    pub bg_far_fraction: f32,
    pub bg_speed_min: f32,
    pub bg_speed_max: f32,
    pub bg_scale_min: f32,
    pub bg_scale_max: f32,

    // === Diagnostics ===
    /// Emit collision circles after the sprites
    pub debug_collisions: bool,
    /// Fixed RNG seed (None = seeded by the driver)
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            ship_speed: SHIP_SPEED,
            ship_edge_margin: SHIP_EDGE_MARGIN,
            ship_radius: SHIP_RADIUS,
            ship_scale: SHIP_SCALE,
            ship_rotation_deg: SHIP_ROTATION_DEG,
            ship_health: SHIP_HEALTH,
            thrust_decay_rate: THRUST_DECAY_RATE,
            thrust_decay_period: THRUST_DECAY_PERIOD,

            rock_capacity: ROCK_CAPACITY,
            rock_speed: ROCK_SPEED,
            rock_radius_min: ROCK_RADIUS_MIN,
            rock_radius_max: ROCK_RADIUS_MAX,
            rock_reference_radius: ROCK_REFERENCE_RADIUS,
            rock_scale_factor: ROCK_SCALE_FACTOR,
            rock_health_factor: ROCK_HEALTH_FACTOR,

            bullet_capacity: BULLET_CAPACITY,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_scale: BULLET_SCALE,

            spawn_delay: SPAWN_DELAY,
            spawn_clearance_ship_widths: SPAWN_CLEARANCE_SHIP_WIDTHS,
            scatter_rocks: false,
            scatter_min_dist: SCATTER_MIN_DIST,
            scatter_tries: SCATTER_TRIES,

            bg_layers_min: BG_LAYERS_MIN,
            bg_layers_max: BG_LAYERS_MAX,
            bg_depth_max: BG_DEPTH_MAX,
            bg_far_fraction: BG_FAR_FRACTION,
            bg_speed_min: BG_SPEED_MIN,
            bg_speed_max: BG_SPEED_MAX,
            bg_scale_min: BG_SCALE_MIN,
            bg_scale_max: BG_SCALE_MAX,

            debug_collisions: false,
            seed: None,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Play field size in pixels
    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
            TuningError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(invalid("screen_width/screen_height", "field must have positive size"));
        }
        if self.ship_health <= 0 {
            return Err(invalid("ship_health", "ship must start with positive health"));
        }
        if !(self.ship_scale > 0.0 && self.bullet_scale > 0.0) {
            return Err(invalid("ship_scale/bullet_scale", "sprite scales must be positive"));
        }
        if !(self.ship_speed >= 0.0 && self.rock_speed >= 0.0 && self.bullet_speed >= 0.0) {
            return Err(invalid("ship_speed/rock_speed/bullet_speed", "speeds must not be negative"));
        }
        if !(self.ship_radius > 0.0 && self.bullet_radius > 0.0) {
            return Err(invalid("ship_radius/bullet_radius", "collision radii must be positive"));
        }
        if !(self.thrust_decay_period > 0.0) {
            return Err(invalid("thrust_decay_period", "must be positive"));
        }
        if self.rock_radius_min == 0 || self.rock_radius_min > self.rock_radius_max {
            return Err(invalid(
                "rock_radius_min",
                format!(
                    "need 0 < min <= max, got {}..={}",
                    self.rock_radius_min, self.rock_radius_max
                ),
            ));
        }
        if !(self.rock_reference_radius > 0.0) {
            return Err(invalid("rock_reference_radius", "must be positive"));
        }
        if !(self.spawn_delay >= 0.0) {
            return Err(invalid("spawn_delay", "must not be negative"));
        }
        if self.bg_layers_min > self.bg_layers_max {
            return Err(invalid(
                "bg_layers_min",
                format!("{} > {}", self.bg_layers_min, self.bg_layers_max),
            ));
        }
        if !(0.0..=1.0).contains(&self.bg_far_fraction) {
            return Err(invalid("bg_far_fraction", "must be within [0, 1]"));
        }
        if !(self.bg_speed_min >= 0.0) {
            return Err(invalid("bg_speed_min", "must not be negative"));
        }
        if !(self.bg_depth_max > 0.0) {
            return Err(invalid("bg_depth_max", "must be positive"));
        }
        if self.bg_speed_min > self.bg_speed_max {
            return Err(invalid("bg_speed_min", "min speed above max speed"));
        }
        if self.bg_scale_min > self.bg_scale_max {
            return Err(invalid("bg_scale_min", "min scale above max scale"));
        }
        Ok(())
    }
}
