use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Where the mouse points in the world this frame.
///
/// Written by [`update_mouse_world`](crate::systems::mouse::update_mouse_world).
#[derive(Resource, Clone, Copy, Debug)]
pub struct MouseWorld {
    /// World position under the cursor.
    pub pos: Vector2,
    /// Tile under the cursor.
    pub tile_x: i32,
    pub tile_y: i32,
}

impl Default for MouseWorld {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
            tile_x: 0,
            tile_y: 0,
        }
    }
}
