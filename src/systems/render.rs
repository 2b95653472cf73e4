//! Rendering.
//!
//! Rendering is split in two. [`entity_render`] (like the tile grid and
//! highlight passes) records world-space [`DrawCmd`]s into the frame's
//! [`DrawQueue`]. [`render_system`] then opens a raylib drawing scope, clears
//! the frame and replays the queue through the camera, converting from the
//! game's y-up world to raylib's y-down space on the way.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::archetype::RenderStyle;
use crate::resources::camera2d::CameraState;
use crate::resources::drawqueue::{DrawCmd, DrawQueue, Rect2};
use crate::resources::entitypool::EntityPool;
use crate::resources::gameconfig::GameConfig;
use crate::resources::spritestore::SpriteStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::tile::TILE_SIZE;

/// Queue a sprite draw for every valid entity, in slot order.
///
/// Sprites are centred horizontally on the entity position. With
/// `foot_offset` enabled they are also dropped half a tile so the feet line
/// up with the tile centre.
pub fn entity_render(
    mut queue: ResMut<DrawQueue>,
    pool: Res<EntityPool>,
    sprites: Res<SpriteStore>,
    config: Res<GameConfig>,
) {
    let foot = if config.foot_offset {
        TILE_SIZE as f32 * 0.5
    } else {
        0.0
    };
    for (_, entity) in pool.iter() {
        match entity.arch.render_style() {
            RenderStyle::Hidden => continue,
            RenderStyle::FootAligned => {
                let sprite = sprites.get(entity.sprite_id);
                if sprite.is_null() {
                    continue;
                }
                let min = Vector2 {
                    x: entity.pos.x - sprite.size.x * 0.5,
                    y: entity.pos.y - foot,
                };
                queue.push(DrawCmd::Sprite {
                    sprite_id: entity.sprite_id,
                    rect: Rect2::from_min_size(min, sprite.size),
                    tint: Color::WHITE,
                });
            }
        }
    }
}

/// World rectangle (y-up) to raylib rectangle (y-down, top-left origin).
pub fn to_raylib_rect(rect: Rect2) -> Rectangle {
    let size = rect.size();
    Rectangle {
        x: rect.min.x,
        y: -rect.max.y,
        width: size.x,
        height: size.y,
    }
}

/// Draw the frame's queued commands and present.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    textures: NonSend<TextureStore>,
    sprites: Res<SpriteStore>,
    queue: Res<DrawQueue>,
    camera: Res<CameraState>,
    window: Res<WindowSize>,
    config: Res<GameConfig>,
) {
    let cam = camera.to_camera2d(*window);
    let mut d = rl.begin_drawing(&th);
    d.clear_background(config.clear_color);

    let mut d2 = d.begin_mode2D(cam);
    for cmd in queue.commands() {
        match *cmd {
            DrawCmd::Rect { rect, color } => {
                d2.draw_rectangle_rec(to_raylib_rect(rect), color);
            }
            DrawCmd::Sprite {
                sprite_id,
                rect,
                tint,
            } => {
                let sprite = sprites.get(sprite_id);
                if let Some(tex) = textures.get(sprite.tex_key) {
                    let src = Rectangle {
                        x: 0.0,
                        y: 0.0,
                        width: tex.width as f32,
                        height: tex.height as f32,
                    };
                    d2.draw_texture_pro(
                        tex,
                        src,
                        to_raylib_rect(rect),
                        Vector2 { x: 0.0, y: 0.0 },
                        0.0,
                        tint,
                    );
                }
            }
        }
    }
}
