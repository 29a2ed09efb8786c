//! Procedural parallax background
//!
//! Two fixed base layers (sky, ground) sit behind a random number of depth
//! layers. Depth picks the texture set and drives scale and scroll speed:
//! deeper values draw taller and scroll faster, so they read as nearer.
//! Layers are kept sorted by depth, which is also their draw order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::SimRng;
use crate::assets::{AssetCatalog, SpriteId};
use crate::lerp;
use crate::tuning::Tuning;

/// Textures for layers at or below the far threshold
pub const NEAR_TEXTURES: [SpriteId; 4] = [
    SpriteId::Cloud1,
    SpriteId::Mountain1,
    SpriteId::Mountain2,
    SpriteId::Mountain3,
];

/// Silhouette textures for layers beyond the far threshold
pub const FAR_TEXTURES: [SpriteId; 2] = [SpriteId::Cloud2, SpriteId::Mountain4];

/// Static full-screen layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseLayer {
    pub sprite: SpriteId,
    /// Top-left corner
    pub pos: Vec2,
    pub scale: Vec2,
}

/// One scrolling depth layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundLayer {
    /// Parallax depth in `[0, bg_depth_max]`, fixed at generation
    pub depth: f32,
    /// Scroll speed, pixels per second
    pub speed: f32,
    /// `x` stretches the strip to the field width, `y` carries the depth scale
    pub scale: Vec2,
    /// Top-left corner
    pub pos: Vec2,
    pub sprite: SpriteId,
    /// On-screen width of one copy of the strip
    pub width: f32,
    pub tileable: bool,
}

impl BackgroundLayer {
    /// Scroll left by `speed * dt`, wrapping once fully past the left edge.
    ///
    /// Tileable strips shift right by whole widths so the loop is seamless;
    /// other strips re-enter from the right edge.
    pub fn scroll(&mut self, dt: f32, field_width: f32) {
        self.pos.x -= self.speed * dt;
        if self.pos.x < -self.width {
            if self.tileable {
                self.pos.x = self.pos.x.rem_euclid(self.width) - self.width;
            } else {
                self.pos.x = field_width;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Sky then ground, always drawn first
    pub base: [BaseLayer; 2],
    /// Sorted ascending by depth
    pub layers: Vec<BackgroundLayer>,
}

/// Unscrolled layer before its depth-derived values are filled in
struct Draft {
    depth: f32,
    sprite: SpriteId,
}

impl Background {
    /// Build a fresh random background for a field of `field` pixels
    pub fn generate(tuning: &Tuning, catalog: &AssetCatalog, rng: &mut SimRng, field: Vec2) -> Self {
        let base = [SpriteId::Sky, SpriteId::Ground].map(|sprite| BaseLayer {
            sprite,
            pos: Vec2::ZERO,
            scale: field / catalog.get(sprite).size,
        });

        let count = rng.range_u32(tuning.bg_layers_min, tuning.bg_layers_max) as usize;
        let z_max = tuning.bg_depth_max;
        let far_threshold = z_max * tuning.bg_far_fraction;

        let mut drafts: Vec<Draft> = (0..count)
            .map(|_| {
                let depth = rng.range_f32(0.0, z_max);
                let set: &[SpriteId] = if depth > far_threshold {
                    &FAR_TEXTURES
                } else {
                    &NEAR_TEXTURES
                };
                let sprite = rng.pick(set).unwrap_or(SpriteId::Cloud1);
                Draft { depth, sprite }
            })
            .collect();

        drafts.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        let layers = drafts
            .into_iter()
            .map(|draft| {
                let info = catalog.get(draft.sprite);
                let t = depth_fraction(draft.depth, z_max);
                let scale = Vec2::new(
                    field.x / info.size.x,
                    lerp(tuning.bg_scale_min, tuning.bg_scale_max, t),
                );
                let size = info.size * scale;
                let x = rng.range_f32(0.0, size.x) - size.x;
                let y = field.y - size.y - draft.depth;
                BackgroundLayer {
                    depth: draft.depth,
                    speed: lerp(tuning.bg_speed_min, tuning.bg_speed_max, t),
                    scale,
                    pos: Vec2::new(x, y),
                    sprite: draft.sprite,
                    width: size.x,
                    tileable: info.tileable,
                }
            })
            .collect::<Vec<_>>();

        log::info!(
            "Generated background: {} depth layers ({} far)",
            layers.len(),
            layers.iter().filter(|l| l.depth > far_threshold).count()
        );

        Self { base, layers }
    }

    /// Scroll every depth layer. Base layers never move.
    pub fn update(&mut self, dt: f32, field_width: f32) {
        for layer in &mut self.layers {
            layer.scroll(dt, field_width);
        }
    }
}

/// `depth / z_max`, clamped to `[0, 1]`
pub fn depth_fraction(depth: f32, z_max: f32) -> f32 {
    if z_max <= 0.0 {
        return 0.0;
    }
    (depth / z_max).clamp(0.0, 1.0)
}
