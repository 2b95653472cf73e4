use bevy_ecs::prelude::Resource;

/// Frame counter that reports once more than a second has accumulated.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct FpsCounter {
    pub seconds: f64,
    pub frames: u32,
}

impl FpsCounter {
    /// Count one frame of `delta_t` seconds.
    ///
    /// Returns the number of frames seen once the accumulated time exceeds one
    /// second, and resets both counters.
    pub fn tick(&mut self, delta_t: f64) -> Option<u32> {
        self.seconds += delta_t.max(0.0);
        self.frames += 1;
        if self.seconds > 1.0 {
            let fps = self.frames;
            self.seconds = 0.0;
            self.frames = 0;
            Some(fps)
        } else {
            None
        }
    }
}
