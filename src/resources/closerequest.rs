use bevy_ecs::prelude::Resource;

/// Set when the game should exit. The main loop checks it before each frame.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CloseRequested(pub bool);
