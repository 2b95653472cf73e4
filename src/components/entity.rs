use raylib::prelude::Vector2;

use crate::components::archetype::EntityArchetype;
use crate::components::spriteid::SpriteId;

/// One slot's worth of entity data.
///
/// A record with `is_valid == false` is logically absent: every system skips
/// it, and [`EntityPool`](crate::resources::entitypool::EntityPool) keeps it
/// at its [`Default`] value.
#[derive(Clone, Copy, Debug)]
pub struct Entity {
    pub is_valid: bool,
    pub arch: EntityArchetype,
    /// World-space position, y-up.
    pub pos: Vector2,
    pub sprite_id: SpriteId,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            is_valid: false,
            arch: EntityArchetype::None,
            pos: Vector2 { x: 0.0, y: 0.0 },
            sprite_id: SpriteId::None,
        }
    }
}

impl Entity {
    /// Turn this entity into an `arch` with the archetype's default sprite.
    pub fn setup(&mut self, arch: EntityArchetype) {
        self.arch = arch;
        self.sprite_id = arch.default_sprite();
    }
}
