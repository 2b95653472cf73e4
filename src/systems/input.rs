//! Input system.
//!
//! [`update_input_state`] reads hardware input from raylib each frame and
//! writes it into [`InputState`] and [`WindowSize`]. It is the only system
//! touching the keyboard and mouse directly; everything downstream reads the
//! resources, which lets tests drive the game headless.
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::resources::input::{BoolState, InputState};
use crate::resources::windowsize::WindowSize;

/// Poll raylib for keyboard and mouse input and update the input resources.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    mut window: ResMut<WindowSize>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    let poll = |state: &mut BoolState| {
        let key: KeyboardKey = state.key_binding;
        state.set(
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        );
    };

    poll(&mut input.maindirection_up);
    poll(&mut input.maindirection_left);
    poll(&mut input.maindirection_down);
    poll(&mut input.maindirection_right);
    poll(&mut input.action_back);

    input.mouse_screen = rl.get_mouse_position();

    window.w = rl.get_screen_width();
    window.h = rl.get_screen_height();
}
