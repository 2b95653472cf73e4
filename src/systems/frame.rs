//! Start-of-frame housekeeping.
use bevy_ecs::prelude::*;

use crate::resources::drawqueue::DrawQueue;

/// Reset per-frame scratch state before any system records into it.
pub fn begin_frame(mut queue: ResMut<DrawQueue>) {
    queue.clear();
}
