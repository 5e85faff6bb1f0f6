//! Keyboard input system.

use bevy::prelude::*;

use crate::bevy::FrameInput;
use crate::input::{Directions, InputState};

/// Maps the keyboard to an input snapshot.
///
/// Arrow keys are read as held; Space, F and B only on the frame they go down.
pub fn input_from_keyboard(keyboard: &ButtonInput<KeyCode>) -> InputState {
    InputState {
        held: Directions {
            up: keyboard.pressed(KeyCode::ArrowUp),
            down: keyboard.pressed(KeyCode::ArrowDown),
            left: keyboard.pressed(KeyCode::ArrowLeft),
            right: keyboard.pressed(KeyCode::ArrowRight),
        },
        toggle_pause: keyboard.just_pressed(KeyCode::Space),
        step_forward: keyboard.just_pressed(KeyCode::KeyF),
        step_backward: keyboard.just_pressed(KeyCode::KeyB),
    }
}

/// System to capture this tick's input.
///
/// Without a keyboard resource the tick sees no input.
pub fn gather_keyboard_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut frame_input: ResMut<FrameInput>,
) {
    frame_input.0 = keyboard
        .map(|k| input_from_keyboard(&k))
        .unwrap_or_default();

    if frame_input.0.toggle_pause || frame_input.0.step_forward || frame_input.0.step_backward {
        tracing::debug!("[input] {:?}", frame_input.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_mapping() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ArrowLeft);
        keyboard.press(KeyCode::KeyF);

        let input = input_from_keyboard(&keyboard);
        assert!(input.held.left);
        assert!(!input.held.right);
        assert!(input.step_forward);
        assert!(!input.toggle_pause);

        // Held keys stay held, but the press edge is gone after a frame.
        keyboard.clear();
        let input = input_from_keyboard(&keyboard);
        assert!(input.held.left);
        assert!(!input.step_forward);
    }
}
