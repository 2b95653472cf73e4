//! Keyboard movement for player-controlled entities.
//!
//! Reads the shared [`InputState`] and moves every entity whose archetype is
//! player controlled. The axis is normalized, so diagonal movement is as
//! fast as straight movement.
use bevy_ecs::prelude::*;

use crate::components::archetype::UpdateBehavior;
use crate::resources::entitypool::EntityPool;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::tile::normalize_or_zero;

pub fn player_movement(
    mut pool: ResMut<EntityPool>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
) {
    let axis = normalize_or_zero(input.movement_axis());
    let step = config.player_speed * time.delta;
    for (_, entity) in pool.iter_mut() {
        match entity.arch.update_behavior() {
            UpdateBehavior::PlayerControlled => {
                entity.pos.x += axis.x * step;
                entity.pos.y += axis.y * step;
            }
            UpdateBehavior::Static => {}
        }
    }
}
