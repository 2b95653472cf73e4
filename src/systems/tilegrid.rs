//! Background tile grid.
//!
//! Draws a faint checkerboard of tiles around the player and highlights the
//! tile under the mouse. Tiles are centred on their tile position, so the
//! highlighted tile is the one [`world_pos_to_tile_pos`] picks for the cursor.
use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::resources::drawqueue::{DrawQueue, Rect2};
use crate::resources::entitypool::EntityPool;
use crate::resources::mouse::MouseWorld;
use crate::resources::player::Player;
use crate::tile::{TILE_SIZE, tile_pos_to_world_pos, world_pos_to_tile_pos};

/// Tiles drawn on each side of the player's tile.
pub const TILE_GRID_RADIUS: i32 = 40;

pub const CHECKER_COLOR: Color = Color::new(26, 26, 26, 26);
pub const HOVER_COLOR: Color = Color::new(128, 128, 128, 128);

/// Whether the checkerboard fills tile `(x, y)`.
pub fn is_checker_tile(x: i32, y: i32) -> bool {
    (x + i32::from(y % 2 == 0)) % 2 == 0
}

/// World rectangle covered by tile `(x, y)`.
pub fn tile_rect(x: i32, y: i32) -> Rect2 {
    let half = TILE_SIZE as f32 * 0.5;
    let size = TILE_SIZE as f32;
    Rect2::from_min_size(
        Vector2 {
            x: tile_pos_to_world_pos(x) - half,
            y: tile_pos_to_world_pos(y) - half,
        },
        Vector2 { x: size, y: size },
    )
}

pub fn tilegrid_render(
    mut queue: ResMut<DrawQueue>,
    pool: Res<EntityPool>,
    player: Option<Res<Player>>,
    mouse: Res<MouseWorld>,
) {
    let center = player
        .and_then(|p| pool.get(p.0).map(|e| e.pos))
        .unwrap_or(Vector2 { x: 0.0, y: 0.0 });
    let center_x = world_pos_to_tile_pos(center.x);
    let center_y = world_pos_to_tile_pos(center.y);

    for x in (center_x - TILE_GRID_RADIUS)..(center_x + TILE_GRID_RADIUS) {
        for y in (center_y - TILE_GRID_RADIUS)..(center_y + TILE_GRID_RADIUS) {
            if is_checker_tile(x, y) {
                queue.rect(tile_rect(x, y), CHECKER_COLOR);
            }
        }
    }

    queue.rect(tile_rect(mouse.tile_x, mouse.tile_y), HOVER_COLOR);
}
