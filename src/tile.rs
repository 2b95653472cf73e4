//! Tile grid math.
//!
//! The world is laid out on a grid of square tiles [`TILE_SIZE`] world units
//! wide. These helpers convert between continuous world coordinates and
//! integer tile coordinates, and snap positions onto the grid.
use raylib::prelude::Vector2;

/// Width and height of one tile in world units.
pub const TILE_SIZE: i32 = 16;

/// Convert a world coordinate to the nearest tile coordinate.
///
/// Ties round half away from zero, matching C `roundf`.
pub fn world_pos_to_tile_pos(world_pos: f32) -> i32 {
    (world_pos / TILE_SIZE as f32).round() as i32
}

/// Convert a tile coordinate to the world coordinate of its centre.
pub fn tile_pos_to_world_pos(tile_pos: i32) -> f32 {
    tile_pos as f32 * TILE_SIZE as f32
}

/// Snap a world position to the nearest tile position on both axes.
pub fn snap_to_tile(world_pos: Vector2) -> Vector2 {
    Vector2 {
        x: tile_pos_to_world_pos(world_pos_to_tile_pos(world_pos.x)),
        y: tile_pos_to_world_pos(world_pos_to_tile_pos(world_pos.y)),
    }
}

/// Return `v` scaled to unit length, or the zero vector when `v` has no length.
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    let length = (v.x * v.x + v.y * v.y).sqrt();
    if length == 0.0 || !length.is_finite() {
        return Vector2 { x: 0.0, y: 0.0 };
    }
    Vector2 {
        x: v.x / length,
        y: v.y / length,
    }
}
