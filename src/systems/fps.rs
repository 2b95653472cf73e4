use bevy_ecs::prelude::*;
use log::info;

use crate::resources::fps::FpsCounter;
use crate::resources::worldtime::WorldTime;

/// Log the frame rate roughly once per second.
pub fn fps_counter(mut fps: ResMut<FpsCounter>, time: Res<WorldTime>) {
    if let Some(frames) = fps.tick(f64::from(time.delta)) {
        info!("fps: {}", frames);
    }
}
