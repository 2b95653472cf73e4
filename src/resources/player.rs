use bevy_ecs::prelude::Resource;

use crate::resources::entitypool::EntityHandle;

/// Handle of the player entity in the [`EntityPool`](crate::resources::entitypool::EntityPool).
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player(pub EntityHandle);
