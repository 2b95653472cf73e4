//! Mouse picking.
use bevy_ecs::prelude::*;

use crate::resources::camera2d::CameraState;
use crate::resources::input::InputState;
use crate::resources::mouse::MouseWorld;
use crate::resources::windowsize::WindowSize;
use crate::tile::world_pos_to_tile_pos;

/// Resolve the mouse's window position to a world position and tile.
///
/// Runs after the camera has moved so the hover matches what is drawn.
pub fn update_mouse_world(
    mut mouse: ResMut<MouseWorld>,
    input: Res<InputState>,
    camera: Res<CameraState>,
    window: Res<WindowSize>,
) {
    let pos = camera.screen_to_world(input.mouse_screen, *window);
    mouse.pos = pos;
    mouse.tile_x = world_pos_to_tile_pos(pos.x);
    mouse.tile_y = world_pos_to_tile_pos(pos.y);
}
