//! Draw request generation
//!
//! The core never touches a graphics API. A frame is turned into an ordered
//! list of `DrawCommand`s which a `RenderSink` consumes: base layers, then
//! depth layers far to near, then active entities, then the debug overlay.

pub mod overlay;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::SpriteId;
use crate::sim::GameState;
use crate::sim::background::BackgroundLayer;

/// Which point of the sprite `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Center,
    TopLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteDraw {
    pub sprite: SpriteId,
    pub pos: Vec2,
    pub scale: Vec2,
    /// Radians
    pub rotation: f32,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Sprite(SpriteDraw),
    /// Outline circle, RGBA
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
}

/// Anything that accepts draw commands in order
pub trait RenderSink {
    fn submit(&mut self, command: DrawCommand);
}

impl RenderSink for Vec<DrawCommand> {
    fn submit(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

/// Emit the whole frame into `sink`
pub fn render(state: &GameState, sink: &mut impl RenderSink) {
    for base in &state.background.base {
        sink.submit(DrawCommand::Sprite(SpriteDraw {
            sprite: base.sprite,
            pos: base.pos,
            scale: base.scale,
            rotation: 0.0,
            anchor: Anchor::TopLeft,
        }));
    }

    for layer in &state.background.layers {
        emit_layer(layer, state.field.x, sink);
    }

    for (_, entity) in state.pool.iter_active() {
        sink.submit(DrawCommand::Sprite(SpriteDraw {
            sprite: entity.sprite(),
            pos: entity.pos,
            scale: Vec2::splat(entity.scale),
            rotation: entity.rotation,
            anchor: Anchor::Center,
        }));
    }

    if state.tuning.debug_collisions {
        overlay::collision_circles(state.pool.entities(), sink);
    }
}

/// A tileable strip repeats rightwards until it covers the field; anything
/// else is drawn once.
fn emit_layer(layer: &BackgroundLayer, field_width: f32, sink: &mut impl RenderSink) {
    let mut x = layer.pos.x;
    loop {
        sink.submit(DrawCommand::Sprite(SpriteDraw {
            sprite: layer.sprite,
            pos: Vec2::new(x, layer.pos.y),
            scale: layer.scale,
            rotation: 0.0,
            anchor: Anchor::TopLeft,
        }));
        x += layer.width;
        if !layer.tileable || layer.width <= 0.0 || x >= field_width {
            break;
        }
    }
}
