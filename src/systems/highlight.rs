//! Entity hover highlight.
use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::resources::drawqueue::{DrawQueue, Rect2};
use crate::resources::entitypool::EntityPool;
use crate::resources::mouse::MouseWorld;
use crate::resources::spritestore::SpriteStore;

pub const HIGHLIGHT_COLOR: Color = Color::new(255, 255, 255, 102);
pub const HIGHLIGHT_HOVER_COLOR: Color = Color::WHITE;

/// Draw every entity's sprite bounds, solid when the mouse is inside them.
///
/// Bounds are anchored bottom-centre on the entity position.
pub fn entity_highlight_render(
    mut queue: ResMut<DrawQueue>,
    pool: Res<EntityPool>,
    sprites: Res<SpriteStore>,
    mouse: Res<MouseWorld>,
) {
    for (_, entity) in pool.iter() {
        let sprite = sprites.get(entity.sprite_id);
        let bounds = Rect2::bottom_center(entity.pos, sprite.size);
        let color = if bounds.contains(mouse.pos) {
            HIGHLIGHT_HOVER_COLOR
        } else {
            HIGHLIGHT_COLOR
        };
        queue.rect(bounds, color);
    }
}
