use bevy_ecs::prelude::*;

use crate::resources::closerequest::CloseRequested;
use crate::resources::input::InputState;

/// Request shutdown when the back key (Escape) is pressed.
///
/// The main loop only notices at the top of the next iteration, so the
/// current frame still finishes.
pub fn exit_on_escape(input: Res<InputState>, mut close: ResMut<CloseRequested>) {
    if input.action_back.just_pressed {
        log::info!("Escape pressed, closing");
        close.0 = true;
    }
}
