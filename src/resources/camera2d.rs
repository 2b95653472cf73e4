//! Shared 2D camera resource.
//!
//! The camera lives in world space (y-up). [`CameraState::to_camera2d`]
//! builds the raylib [`Camera2D`] used by the draw pass, which works in
//! raylib's y-down space, and [`CameraState::screen_to_world`] maps window
//! pixels back into world units the same way.
use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

use crate::resources::windowsize::WindowSize;

#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraState {
    /// World position shown at the centre of the window.
    pub pos: Vector2,
    /// World units per window pixel; `0.5` draws everything twice as large.
    pub zoom: f32,
    /// Smoothing rate used when following the player.
    pub follow_rate: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
            zoom: 0.5,
            follow_rate: 8.0,
        }
    }
}

impl CameraState {
    /// Map a window-pixel position (y down) to world space (y up).
    ///
    /// Goes through normalized device coordinates, undoes the orthographic
    /// projection (window centred on the origin) and then applies the view
    /// transform `world = camera + zoom * view`.
    pub fn screen_to_world(&self, screen: Vector2, window: WindowSize) -> Vector2 {
        if window.w <= 0 || window.h <= 0 {
            return self.pos;
        }
        let half_w = window.w as f32 * 0.5;
        let half_h = window.h as f32 * 0.5;
        let ndc_x = screen.x / half_w - 1.0;
        let ndc_y = 1.0 - screen.y / half_h;

        let view_x = ndc_x * half_w;
        let view_y = ndc_y * half_h;

        Vector2 {
            x: self.pos.x + view_x * self.zoom,
            y: self.pos.y + view_y * self.zoom,
        }
    }

    /// Raylib camera equivalent to this view for a window of the given size.
    pub fn to_camera2d(&self, window: WindowSize) -> Camera2D {
        let zoom = if self.zoom > 0.0 { 1.0 / self.zoom } else { 1.0 };
        Camera2D {
            target: Vector2 {
                x: self.pos.x,
                y: -self.pos.y,
            },
            offset: Vector2 {
                x: window.w as f32 * 0.5,
                y: window.h as f32 * 0.5,
            },
            rotation: 0.0,
            zoom,
        }
    }
}
