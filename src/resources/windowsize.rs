//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels. Updated each frame by the
//! input system to follow resizes.

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
