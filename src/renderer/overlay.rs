//! Debug collision overlay

use super::{DrawCommand, RenderSink};
use crate::sim::Entity;

pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.9, 0.3, 1.0];
pub const HIT_COLOR: [f32; 4] = [1.0, 0.2, 0.2, 1.0];

/// Outline color for an entity's collision circle
pub fn collision_color(entity: &Entity) -> [f32; 4] {
    if entity.colliding { HIT_COLOR } else { CLEAR_COLOR }
}

/// One circle per active entity at its collision radius
pub fn collision_circles(entities: &[Entity], sink: &mut impl RenderSink) {
    for entity in entities.iter().filter(|e| e.active) {
        sink.submit(DrawCommand::Circle {
            center: entity.pos,
            radius: entity.radius,
            color: collision_color(entity),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCatalog;
    use crate::renderer::render;
    use crate::sim::{EntityKind, GameState};
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_overlay_follows_sprites_and_flags() {
        let tuning = Tuning {
            debug_collisions: true,
            spawn_delay: 1_000.0,
            ..Tuning::default()
        };
        let mut state = GameState::new(tuning, &AssetCatalog::builtin(), 9);
        let idx = state.pool.activate(EntityKind::Rock, Vec2::new(400.0, 300.0)).unwrap();
        state.pool.get_mut(idx).unwrap().colliding = true;

        let mut commands = Vec::new();
        render(&state, &mut commands);

        let circles: Vec<_> = commands
            .iter()
            .skip_while(|c| matches!(c, DrawCommand::Sprite(_)))
            .collect();
        assert_eq!(circles.len(), 2);
        assert!(circles.iter().all(|c| matches!(c, DrawCommand::Circle { .. })));
        assert!(matches!(
            circles[1],
            DrawCommand::Circle { color, radius, .. } if *color == HIT_COLOR && *radius == state.pool.get(idx).unwrap().radius
        ));
        assert!(matches!(circles[0], DrawCommand::Circle { color, .. } if *color == CLEAR_COLOR));
    }
}
