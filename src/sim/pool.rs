//! Fixed-capacity entity arena
//!
//! Slots are laid out `[ship, rocks.., bullets..]` and never move. Creating and
//! destroying is flipping `active`; when every slot of a kind is busy the
//! request is simply dropped.

use std::ops::Range;

use glam::Vec2;

use super::entity::{Entity, EntityKind};

/// The ship always lives in the first slot
pub const SHIP_SLOT: usize = 0;

#[derive(Debug, Clone)]
pub struct EntityPool {
    entities: Vec<Entity>,
    rocks: Range<usize>,
    bullets: Range<usize>,
}

impl EntityPool {
    /// Lay out the arena. Capacities are the lengths of `rocks` and `bullets`.
    pub fn new(ship: Entity, rocks: Vec<Entity>, bullets: Vec<Entity>) -> Self {
        debug_assert_eq!(ship.kind(), EntityKind::Ship);
        debug_assert!(rocks.iter().all(|e| e.kind() == EntityKind::Rock));
        debug_assert!(bullets.iter().all(|e| e.kind() == EntityKind::Bullet));

        let rock_start = SHIP_SLOT + 1;
        let bullet_start = rock_start + rocks.len();
        let end = bullet_start + bullets.len();

        let mut entities = Vec::with_capacity(end);
        entities.push(ship);
        entities.extend(rocks);
        entities.extend(bullets);

        Self {
            entities,
            rocks: rock_start..bullet_start,
            bullets: bullet_start..end,
        }
    }

    fn slots(&self, kind: EntityKind) -> Range<usize> {
        match kind {
            EntityKind::Ship => SHIP_SLOT..SHIP_SLOT + 1,
            EntityKind::Rock => self.rocks.clone(),
            EntityKind::Bullet => self.bullets.clone(),
        }
    }

    /// First idle slot of `kind`, if any
    pub fn first_inactive(&self, kind: EntityKind) -> Option<usize> {
        self.slots(kind).find(|&idx| !self.entities[idx].active)
    }

    /// Put the first idle entity of `kind` into play at `pos`.
    ///
    /// Returns `None` and changes nothing when every slot is busy.
    pub fn activate(&mut self, kind: EntityKind, pos: Vec2) -> Option<usize> {
        let idx = self.first_inactive(kind)?;
        self.entities[idx].activate(pos);
        Some(idx)
    }

    pub fn deactivate(&mut self, idx: usize) {
        if let Some(entity) = self.entities.get_mut(idx) {
            entity.active = false;
        }
    }

    pub fn take_damage(&mut self, idx: usize, amount: i32) {
        if let Some(entity) = self.entities.get_mut(idx) {
            entity.take_damage(amount);
        }
    }

    pub fn get(&self, idx: usize) -> Option<&Entity> {
        self.entities.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Entity> {
        self.entities.get_mut(idx)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn ship(&self) -> &Entity {
        &self.entities[SHIP_SLOT]
    }

    pub fn ship_mut(&mut self) -> &mut Entity {
        &mut self.entities[SHIP_SLOT]
    }

    /// Total slots, all kinds
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn capacity(&self, kind: EntityKind) -> usize {
        self.slots(kind).len()
    }

    pub fn active_count(&self, kind: EntityKind) -> usize {
        self.entities[self.slots(kind)]
            .iter()
            .filter(|e| e.active)
            .count()
    }

    /// Active entities with their slot index, in slot order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Entity)> {
        self.entities.iter().enumerate().filter(|(_, e)| e.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetCatalog, SpriteId};
    use crate::tuning::Tuning;

    fn pool(rocks: usize, bullets: usize) -> EntityPool {
        let tuning = Tuning::default();
        let catalog = AssetCatalog::builtin();
        EntityPool::new(
            Entity::ship(&tuning, catalog.get(SpriteId::Ship)),
            (0..rocks)
                .map(|_| Entity::rock(&tuning, catalog.get(SpriteId::Rock), 20.0))
                .collect(),
            (0..bullets)
                .map(|_| Entity::bullet(&tuning, catalog.get(SpriteId::Bullet)))
                .collect(),
        )
    }

    #[test]
    fn test_layout_and_capacity() {
        let pool = pool(3, 2);
        assert_eq!(pool.len(), 6);
        assert_eq!(pool.capacity(EntityKind::Ship), 1);
        assert_eq!(pool.capacity(EntityKind::Rock), 3);
        assert_eq!(pool.capacity(EntityKind::Bullet), 2);
        assert_eq!(pool.ship().kind(), EntityKind::Ship);
        assert_eq!(pool.active_count(EntityKind::Rock), 0);
    }

    #[test]
    fn test_activate_takes_first_free_slot() {
        let mut pool = pool(3, 0);
        let a = pool.activate(EntityKind::Rock, Vec2::new(1.0, 2.0)).unwrap();
        let b = pool.activate(EntityKind::Rock, Vec2::new(3.0, 4.0)).unwrap();
        assert_eq!((a, b), (1, 2));
        assert_eq!(pool.get(a).unwrap().pos, Vec2::new(1.0, 2.0));

        // Freed slot is reused before later ones
        pool.deactivate(a);
        assert_eq!(pool.activate(EntityKind::Rock, Vec2::ZERO), Some(a));
    }

    #[test]
    fn test_exhaustion_is_silent_and_mutates_nothing() {
        let mut pool = pool(1, 1);
        assert!(pool.activate(EntityKind::Bullet, Vec2::ZERO).is_some());
        let before: Vec<_> = pool.entities().to_vec();

        assert_eq!(pool.activate(EntityKind::Bullet, Vec2::new(9.0, 9.0)), None);
        assert_eq!(pool.entities(), &before[..]);
    }

    #[test]
    fn test_ship_slot_is_never_free_while_alive() {
        let mut pool = pool(0, 0);
        assert_eq!(pool.activate(EntityKind::Ship, Vec2::ZERO), None);
    }

    #[test]
    fn test_take_damage_deactivates_rock() {
        let mut pool = pool(1, 0);
        let idx = pool.activate(EntityKind::Rock, Vec2::ZERO).unwrap();
        let health = pool.get(idx).unwrap().health;
        pool.take_damage(idx, health);
        assert!(!pool.get(idx).unwrap().active);
        assert_eq!(pool.active_count(EntityKind::Rock), 0);
    }
}
