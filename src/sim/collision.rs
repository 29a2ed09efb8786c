//! Circle-circle collision detection and response
//!
//! Every active pair is tested once per frame. Active counts are bounded by
//! the pool capacities, so the quadratic scan needs no spatial partitioning.

use glam::Vec2;

use super::entity::Entity;

/// Two circle centers are touching when no further apart than `min_dist`
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, min_dist: f32) -> bool {
    a.distance(b) <= min_dist
}

/// Check whether `entities[idx]`, with its radius grown by `extra_radius`,
/// touches any other active entity.
pub fn overlaps_any(entities: &[Entity], idx: usize, extra_radius: f32) -> bool {
    let Some(subject) = entities.get(idx) else {
        return false;
    };
    let radius = subject.radius + extra_radius;
    entities.iter().enumerate().any(|(other_idx, other)| {
        other_idx != idx && other.active && circles_overlap(subject.pos, other.pos, radius + other.radius)
    })
}

/// Apply a contact between two entities: flag both, then let each react to the other
pub fn resolve_contact(a: &mut Entity, b: &mut Entity) {
    a.colliding = true;
    b.colliding = true;
    a.hit(b);
    b.hit(a);
}

/// Run one collision pass over the arena.
///
/// Clears every `colliding` flag, tests each unordered active pair once and
/// resolves the overlaps. An entity knocked out earlier in the pass takes no
/// further part in it. Returns the number of contacts resolved.
pub fn check_collisions(entities: &mut [Entity]) -> u32 {
    for entity in entities.iter_mut() {
        entity.colliding = false;
    }

    let mut contacts = 0;
    for i in 0..entities.len() {
        if !entities[i].active {
            continue;
        }
        let (head, tail) = entities.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if !a.active {
                break;
            }
            if !b.active {
                continue;
            }
            if circles_overlap(a.pos, b.pos, a.radius + b.radius) {
                resolve_contact(a, b);
                contacts += 1;
            }
        }
    }
    contacts
}
