//! Game tick system.

use bevy::prelude::*;

use crate::bevy::{FrameInput, GameStateRes};

/// System to run one game tick with the captured input.
///
/// Movement and animation keys apply first, then the clock advances and the
/// skeleton is re-posed.
pub fn update_game_state(frame_input: Res<FrameInput>, mut game_state: ResMut<GameStateRes>) {
    game_state.0.update(&frame_input.0);
    tracing::trace!(
        "[anim] frame {} / {}",
        game_state.0.clock.current_frame(),
        game_state.0.clock.length()
    );
}
