//! Per-frame input snapshot and the movement rules applied to it.

use serde::{Deserialize, Serialize};

use crate::config::MovementConfig;

/// Direction keys held down this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    /// The held direction when exactly one is held.
    pub fn single(&self) -> Option<Facing> {
        let held = [
            (self.up, Facing::Up),
            (self.down, Facing::Down),
            (self.left, Facing::Left),
            (self.right, Facing::Right),
        ];
        let mut pressed = held.iter().filter(|(on, _)| *on).map(|(_, facing)| *facing);
        match (pressed.next(), pressed.next()) {
            (Some(facing), None) => Some(facing),
            _ => None,
        }
    }
}

/// Everything the game reads from the keyboard in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub held: Directions,
    /// Pause key went down this frame.
    pub toggle_pause: bool,
    /// Step-forward key went down this frame.
    pub step_forward: bool,
    /// Step-backward key went down this frame.
    pub step_backward: bool,
}

/// Direction the character last faced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    Up,
    Left,
    #[default]
    Down,
    Right,
}

impl Facing {
    /// Heading in degrees, counterclockwise from up.
    pub fn angle(self) -> f64 {
        match self {
            Self::Up => 0.0,
            Self::Left => 90.0,
            Self::Down => 180.0,
            Self::Right => 270.0,
        }
    }
}

/// Pixel offset for this tick's held directions.
///
/// Opposing keys cancel; moving on both axes damps each by the diagonal
/// factor.
pub fn movement_delta(held: Directions, movement: &MovementConfig) -> (f64, f64) {
    let speed = movement.speed;
    let mut dx = 0.0;
    if held.right {
        dx += speed;
    }
    if held.left {
        dx -= speed;
    }
    let mut dy = 0.0;
    if held.up {
        dy += speed;
    }
    if held.down {
        dy -= speed;
    }
    if dx != 0.0 && dy != 0.0 {
        dx *= movement.diagonal_factor;
        dy *= movement.diagonal_factor;
    }
    (dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(up: bool, down: bool, left: bool, right: bool) -> Directions {
        Directions { up, down, left, right }
    }

    #[test]
    fn test_single_direction_moves_at_full_speed() {
        let movement = MovementConfig::default();
        assert_eq!(movement_delta(held(false, false, false, true), &movement), (5.0, 0.0));
        assert_eq!(movement_delta(held(true, false, false, false), &movement), (0.0, 5.0));
        assert_eq!(movement_delta(held(false, true, false, false), &movement), (0.0, -5.0));
    }

    #[test]
    fn test_diagonal_is_damped() {
        let movement = MovementConfig::default();
        let (dx, dy) = movement_delta(held(true, false, true, false), &movement);
        assert!((dx - -4.0).abs() < 1e-12);
        assert!((dy - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposing_keys_cancel_without_damping() {
        let movement = MovementConfig::default();
        assert_eq!(movement_delta(held(true, false, true, true), &movement), (0.0, 5.0));
        assert_eq!(movement_delta(held(true, true, true, true), &movement), (0.0, 0.0));
    }

    #[test]
    fn test_single_direction_for_facing() {
        assert_eq!(held(false, false, true, false).single(), Some(Facing::Left));
        assert_eq!(held(true, false, true, false).single(), None);
        assert_eq!(Directions::default().single(), None);
    }

    #[test]
    fn test_facing_angles() {
        assert_eq!(Facing::default(), Facing::Down);
        assert!((Facing::Right.angle() - 270.0).abs() < f64::EPSILON);
    }
}
