//! GPU textures keyed by name.
//!
//! Kept as a non-send resource: textures belong to the raylib thread.
use log::info;
use raylib::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use crate::resources::spritestore::SpriteStore;

#[derive(Default)]
pub struct TextureStore {
    pub map: HashMap<&'static str, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, texture: Texture2D) {
        self.map.insert(key, texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    /// Load the image of every sprite in `sprites` from `dir`.
    pub fn load_sprites(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        sprites: &SpriteStore,
        dir: &Path,
    ) -> Result<Self, String> {
        let mut store = Self::new();
        for (id, sprite) in sprites.iter() {
            let path = dir.join(sprite.file_name);
            let path_str = path
                .to_str()
                .ok_or_else(|| format!("Non UTF-8 texture path: {}", path.display()))?;
            let texture = rl
                .load_texture(th, path_str)
                .map_err(|e| format!("Failed to load {:?} from {}: {:?}", id, path.display(), e))?;
            info!(
                "Loaded sprite {:?} ({}x{} px) from {}",
                id,
                texture.width,
                texture.height,
                path.display()
            );
            store.insert(sprite.tex_key, texture);
        }
        Ok(store)
    }
}
