//! Per-frame input resource.
//!
//! Captures the keys the game cares about (WASD for movement, Escape to quit)
//! and the mouse position in window pixels.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            key_binding,
            ..Self::default()
        }
    }

    /// Overwrite the per-frame flags, keeping the binding.
    pub fn set(&mut self, active: bool, just_pressed: bool, just_released: bool) {
        self.active = active;
        self.just_pressed = just_pressed;
        self.just_released = just_released;
    }
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    pub action_back: BoolState,
    /// Mouse position in window pixels, origin top-left, y down.
    pub mouse_screen: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            maindirection_up: BoolState::bound_to(KeyboardKey::KEY_W),
            maindirection_left: BoolState::bound_to(KeyboardKey::KEY_A),
            maindirection_down: BoolState::bound_to(KeyboardKey::KEY_S),
            maindirection_right: BoolState::bound_to(KeyboardKey::KEY_D),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mouse_screen: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl InputState {
    /// Movement axis from the held direction keys, y-up, not normalized.
    ///
    /// Opposite keys cancel out.
    pub fn movement_axis(&self) -> Vector2 {
        let mut axis = Vector2 { x: 0.0, y: 0.0 };
        if self.maindirection_left.active {
            axis.x -= 1.0;
        }
        if self.maindirection_right.active {
            axis.x += 1.0;
        }
        if self.maindirection_down.active {
            axis.y -= 1.0;
        }
        if self.maindirection_up.active {
            axis.y += 1.0;
        }
        axis
    }
}
