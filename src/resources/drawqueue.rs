//! Per-frame draw command list.
//!
//! Simulation-side render systems push [`DrawCmd`]s in world space; the
//! raylib pass in [`render_system`](crate::systems::render::render_system)
//! replays them in order. The queue is scratch memory for one frame and is
//! cleared by [`begin_frame`](crate::systems::frame::begin_frame).
use bevy_ecs::prelude::Resource;
use raylib::prelude::{Color, Vector2};

use crate::components::spriteid::SpriteId;

/// Axis-aligned rectangle in world space (y-up).
#[derive(Clone, Copy, Debug)]
pub struct Rect2 {
    pub min: Vector2,
    pub max: Vector2,
}

impl Rect2 {
    pub fn from_min_size(min: Vector2, size: Vector2) -> Self {
        Self {
            min,
            max: Vector2 {
                x: min.x + size.x,
                y: min.y + size.y,
            },
        }
    }

    /// Rectangle of `size` whose bottom edge is centred on `anchor`.
    pub fn bottom_center(anchor: Vector2, size: Vector2) -> Self {
        Self::from_min_size(
            Vector2 {
                x: anchor.x - size.x * 0.5,
                y: anchor.y,
            },
            size,
        )
    }

    pub fn size(&self) -> Vector2 {
        Vector2 {
            x: self.max.x - self.min.x,
            y: self.max.y - self.min.y,
        }
    }

    /// Inclusive point-in-rectangle test.
    pub fn contains(&self, p: Vector2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[derive(Clone, Copy, Debug)]
pub enum DrawCmd {
    /// Filled rectangle.
    Rect { rect: Rect2, color: Color },
    /// Sprite image stretched over `rect`.
    Sprite {
        sprite_id: SpriteId,
        rect: Rect2,
        tint: Color,
    },
}

#[derive(Resource, Debug)]
pub struct DrawQueue {
    commands: Vec<DrawCmd>,
}

impl Default for DrawQueue {
    fn default() -> Self {
        Self {
            commands: Vec::with_capacity(4096),
        }
    }
}

impl DrawQueue {
    /// Drop last frame's commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    pub fn rect(&mut self, rect: Rect2, color: Color) {
        self.push(DrawCmd::Rect { rect, color });
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
