//! Fixed-capacity entity storage.
//!
//! The pool is a dense array of [`MAX_ENTITY_COUNT`] slots. An entity lives in
//! one slot for its whole lifetime and is addressed by an [`EntityHandle`]
//! carrying the slot index and the slot's generation at creation time.
//!
//! Free slots are tracked in a stack, so `create` and `destroy` are O(1). On a
//! fresh pool slots are handed out in ascending index order; a destroyed slot
//! is the next one reused. Destroying bumps the slot generation, which makes
//! every outstanding handle to the old occupant stale.
//!
//! Running out of slots is fatal: [`EntityPool::create`] panics.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::Resource;
use log::{error, warn};

use crate::components::entity::Entity;

/// Number of slots in the pool.
pub const MAX_ENTITY_COUNT: usize = 1024;

/// Reference to an entity slot, valid until that entity is destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityHandle {
    index: u32,
    generation: u32,
}

impl EntityHandle {
    /// Slot index.
    pub fn index(self) -> usize {
        self.index as usize
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    entity: Entity,
    generation: u32,
}

/// ECS resource holding every entity in the game.
#[derive(Resource)]
pub struct EntityPool {
    slots: Box<[Slot]>,
    /// Stack of free slot indices; the next slot to hand out is on top.
    free_list: ArrayVec<u32, MAX_ENTITY_COUNT>,
    len: usize,
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityPool {
    pub fn new() -> Self {
        Self {
            slots: vec![Slot::default(); MAX_ENTITY_COUNT].into_boxed_slice(),
            free_list: (0..MAX_ENTITY_COUNT as u32).rev().collect(),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        MAX_ENTITY_COUNT
    }

    /// Number of valid entities.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Claim a free slot, or `None` when the pool is full.
    ///
    /// The claimed entity is valid with every other field at its default.
    pub fn try_create(&mut self) -> Option<EntityHandle> {
        let index = self.free_list.pop()?;
        let slot = &mut self.slots[index as usize];
        slot.entity = Entity {
            is_valid: true,
            ..Entity::default()
        };
        self.len += 1;
        Some(EntityHandle {
            index,
            generation: slot.generation,
        })
    }

    /// Claim a free slot.
    ///
    /// # Panics
    ///
    /// Panics when all [`MAX_ENTITY_COUNT`] slots are in use. A valid slot is
    /// never overwritten.
    pub fn create(&mut self) -> EntityHandle {
        match self.try_create() {
            Some(handle) => handle,
            None => {
                error!("Entity pool exhausted ({} slots in use)", self.len);
                panic!("No more free entities!");
            }
        }
    }

    /// Reset the entity's slot to its default state and make it reusable.
    ///
    /// Returns `false` if the handle is stale or out of range.
    pub fn destroy(&mut self, handle: EntityHandle) -> bool {
        if !self.is_alive(handle) {
            warn!("Ignoring destroy of stale entity handle {:?}", handle);
            return false;
        }
        let slot = &mut self.slots[handle.index()];
        slot.entity = Entity::default();
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(handle.index);
        self.len -= 1;
        true
    }

    /// Whether `handle` still refers to the entity it was created for.
    pub fn is_alive(&self, handle: EntityHandle) -> bool {
        self.slots
            .get(handle.index())
            .is_some_and(|slot| slot.entity.is_valid && slot.generation == handle.generation)
    }

    pub fn get(&self, handle: EntityHandle) -> Option<&Entity> {
        if !self.is_alive(handle) {
            return None;
        }
        Some(&self.slots[handle.index()].entity)
    }

    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        if !self.is_alive(handle) {
            return None;
        }
        Some(&mut self.slots[handle.index()].entity)
    }

    /// Valid entities in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityHandle, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.entity.is_valid)
            .map(|(index, slot)| {
                (
                    EntityHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    &slot.entity,
                )
            })
    }

    /// Valid entities in slot order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityHandle, &mut Entity)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, slot)| slot.entity.is_valid)
            .map(|(index, slot)| {
                (
                    EntityHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    &mut slot.entity,
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::archetype::EntityArchetype;
    use crate::components::spriteid::SpriteId;

    #[test]
    fn test_new_pool_is_empty() {
        let pool = EntityPool::new();
        assert_eq!(pool.len(), 0);
        assert!(pool.is_empty());
        assert_eq!(pool.capacity(), MAX_ENTITY_COUNT);
        assert_eq!(pool.iter().count(), 0);
    }

    #[test]
    fn test_create_hands_out_ascending_slots() {
        let mut pool = EntityPool::new();
        let a = pool.create();
        let b = pool.create();
        let c = pool.create();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(c.index(), 2);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_created_entity_is_valid_and_defaulted() {
        let mut pool = EntityPool::new();
        let h = pool.create();
        let e = pool.get(h).unwrap();
        assert!(e.is_valid);
        assert_eq!(e.arch, EntityArchetype::None);
        assert_eq!(e.sprite_id, SpriteId::None);
        assert_eq!(e.pos.x, 0.0);
        assert_eq!(e.pos.y, 0.0);
    }

    #[test]
    fn test_fill_to_capacity_all_slots_valid() {
        let mut pool = EntityPool::new();
        for _ in 0..MAX_ENTITY_COUNT {
            pool.create();
        }
        assert_eq!(pool.len(), MAX_ENTITY_COUNT);
        assert_eq!(pool.iter().count(), MAX_ENTITY_COUNT);
        assert!(pool.try_create().is_none());
    }

    #[test]
    #[should_panic(expected = "No more free entities!")]
    fn test_create_past_capacity_panics() {
        let mut pool = EntityPool::new();
        for _ in 0..MAX_ENTITY_COUNT {
            pool.create();
        }
        pool.create();
    }

    #[test]
    fn test_full_pool_does_not_overwrite() {
        let mut pool = EntityPool::new();
        let first = pool.create();
        pool.get_mut(first).unwrap().setup(EntityArchetype::Spike);
        for _ in 1..MAX_ENTITY_COUNT {
            pool.create();
        }
        assert!(pool.try_create().is_none());
        assert_eq!(pool.get(first).unwrap().arch, EntityArchetype::Spike);
    }

    #[test]
    fn test_destroy_resets_and_reuses_slot() {
        let mut pool = EntityPool::new();
        let _a = pool.create();
        let b = pool.create();
        let _c = pool.create();
        pool.get_mut(b).unwrap().setup(EntityArchetype::Rock);

        assert!(pool.destroy(b));
        assert_eq!(pool.len(), 2);
        assert!(!pool.is_alive(b));
        assert!(pool.get(b).is_none());

        let reused = pool.create();
        assert_eq!(reused.index(), b.index());
        assert_ne!(reused.generation(), b.generation());
        assert_eq!(pool.get(reused).unwrap().arch, EntityArchetype::None);
    }

    #[test]
    fn test_destroy_after_full_frees_a_slot() {
        let mut pool = EntityPool::new();
        let mut handles = Vec::new();
        for _ in 0..MAX_ENTITY_COUNT {
            handles.push(pool.create());
        }
        let victim = handles[500];
        assert!(pool.destroy(victim));
        let h = pool.create();
        assert_eq!(h.index(), 500);
    }

    #[test]
    fn test_stale_handle_is_rejected() {
        let mut pool = EntityPool::new();
        let h = pool.create();
        assert!(pool.destroy(h));
        let _new = pool.create();
        assert!(!pool.destroy(h));
        assert!(pool.get_mut(h).is_none());
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_iter_skips_invalid_in_slot_order() {
        let mut pool = EntityPool::new();
        let hs: Vec<_> = (0..5).map(|_| pool.create()).collect();
        pool.destroy(hs[1]);
        pool.destroy(hs[3]);
        let order: Vec<usize> = pool.iter().map(|(h, _)| h.index()).collect();
        assert_eq!(order, vec![0, 2, 4]);
    }

    #[test]
    fn test_iter_mut_edits_in_place() {
        let mut pool = EntityPool::new();
        let h = pool.create();
        for (_, e) in pool.iter_mut() {
            e.pos.x = 42.0;
        }
        assert_eq!(pool.get(h).unwrap().pos.x, 42.0);
    }
}
