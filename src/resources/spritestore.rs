//! Sprite registry.
//!
//! A fixed table indexed by [`SpriteId`] that pairs each sprite with the key
//! of its texture in the [`TextureStore`](crate::resources::texturestore::TextureStore)
//! and its logical size in world units. Filled once at startup and only read
//! afterwards.
use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::components::spriteid::SpriteId;

/// A renderable image and its on-screen size in world units.
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    /// Key of the image in the texture store. Empty for the null sprite.
    pub tex_key: &'static str,
    /// Image file name inside the resources directory. Empty for the null sprite.
    pub file_name: &'static str,
    pub size: Vector2,
}

impl Sprite {
    pub const NULL: Sprite = Sprite {
        tex_key: "",
        file_name: "",
        size: Vector2 { x: 0.0, y: 0.0 },
    };

    pub fn is_null(&self) -> bool {
        self.tex_key.is_empty()
    }
}

#[derive(Resource, Clone, Debug)]
pub struct SpriteStore {
    sprites: [Sprite; SpriteId::COUNT],
}

impl Default for SpriteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteStore {
    /// The game's sprite table.
    pub fn new() -> Self {
        let mut sprites = [Sprite::NULL; SpriteId::COUNT];
        sprites[SpriteId::Player.index()] = Sprite {
            tex_key: "player",
            file_name: "player.png",
            size: Vector2 { x: 22.0, y: 35.0 },
        };
        sprites[SpriteId::Rock.index()] = Sprite {
            tex_key: "rock_0",
            file_name: "rock_0.png",
            size: Vector2 { x: 12.0, y: 5.0 },
        };
        sprites[SpriteId::MineralRock.index()] = Sprite {
            tex_key: "rock_1",
            file_name: "rock_1.png",
            size: Vector2 { x: 18.0, y: 10.0 },
        };
        sprites[SpriteId::Spike.index()] = Sprite {
            tex_key: "spike_0",
            file_name: "spike_0.png",
            size: Vector2 { x: 14.0, y: 26.0 },
        };
        Self { sprites }
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id.index()]
    }

    /// Look up by raw table index; out-of-range indices yield the null sprite.
    pub fn get_by_index(&self, index: usize) -> &Sprite {
        self.get(SpriteId::from_index(index))
    }

    /// Every non-null sprite with its id, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (SpriteId, &Sprite)> {
        SpriteId::ALL
            .into_iter()
            .zip(self.sprites.iter())
            .filter(|(_, sprite)| !sprite.is_null())
    }
}
