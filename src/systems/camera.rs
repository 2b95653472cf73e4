//! Camera follow system.
use bevy_ecs::prelude::*;

use crate::animate::approach_v2;
use crate::resources::camera2d::CameraState;
use crate::resources::entitypool::EntityPool;
use crate::resources::player::Player;
use crate::resources::worldtime::WorldTime;

/// Ease the camera toward the player's current position.
///
/// Does nothing when there is no live player.
pub fn camera_follow(
    mut camera: ResMut<CameraState>,
    pool: Res<EntityPool>,
    player: Option<Res<Player>>,
    time: Res<WorldTime>,
) {
    let Some(player) = player else {
        return;
    };
    let Some(entity) = pool.get(player.0) else {
        return;
    };
    let rate = camera.follow_rate;
    camera.pos = approach_v2(camera.pos, entity.pos, time.delta, rate);
}
