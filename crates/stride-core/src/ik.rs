//! Analytical two-bone IK for a leg.
//!
//! Angles are in degrees, measured clockwise from the up (+y) axis, so a bone
//! at angle `a` points along `(sin a, cos a)`. The thigh hangs from the hip;
//! the shank is expressed from the foot back towards the knee.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::geometry::{AbsolutePoint, Offset};

/// Floor for the squared hip-foot distance. Keeps the law-of-cosines division
/// stable when the foot sits on top of the hip.
pub const MIN_DISTANCE_SQUARED: f64 = 500.0;

/// Joint angles produced by [`solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegAngles {
    /// Direction of the thigh, from hip to knee.
    pub thigh_angle: f64,
    /// Direction of the shank, from foot to knee.
    pub shank_angle: f64,
}

impl LegAngles {
    /// Knee position reached by walking the thigh down from the hip.
    pub fn knee_from_hip(&self, hip: AbsolutePoint, thigh_length: f64) -> AbsolutePoint {
        hip + bone_direction(self.thigh_angle) * thigh_length
    }

    /// Knee position reached by walking the shank up from the foot.
    pub fn knee_from_foot(&self, foot: AbsolutePoint, shank_length: f64) -> AbsolutePoint {
        foot + bone_direction(self.shank_angle) * shank_length
    }

    /// Foot position implied by the angles when chaining hip -> knee -> foot.
    pub fn foot_from_hip(&self, hip: AbsolutePoint, thigh_length: f64, shank_length: f64) -> AbsolutePoint {
        self.knee_from_hip(hip, thigh_length) - bone_direction(self.shank_angle) * shank_length
    }
}

/// Unit vector for an angle in degrees, clockwise from up.
pub fn bone_direction(angle_degrees: f64) -> Offset {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    Offset { dx: sin, dy: cos }
}

/// Solves the thigh and shank angles that put the foot on `foot`.
///
/// When the target is out of reach the leg is returned fully extended along
/// the hip-foot line. The solver never fails for positive bone lengths.
pub fn solve(hip: AbsolutePoint, foot: AbsolutePoint, thigh_length: f64, shank_length: f64) -> LegAngles {
    let d_squared = hip.distance_squared(foot).max(MIN_DISTANCE_SQUARED);
    let d = d_squared.sqrt();

    // atan2 runs counterclockwise from +x; flip it to clockwise from +y.
    let alpha = FRAC_PI_2 - (foot.y - hip.y).atan2(foot.x - hip.x);

    if d > thigh_length + shank_length {
        tracing::trace!(
            "[ik] target out of reach (d={:.1}, reach={:.1})",
            d,
            thigh_length + shank_length
        );
        return LegAngles {
            thigh_angle: alpha.to_degrees(),
            shank_angle: (alpha + PI).to_degrees(),
        };
    }

    // Distance from the hip to the knee's projection on the hip-foot line.
    let a = (thigh_length * thigh_length - shank_length * shank_length + d_squared) / (2.0 * d);
    let beta = (a / thigh_length).clamp(-1.0, 1.0).acos();
    let thigh_angle = alpha - beta;

    let b = d - a;
    let delta = (b / shank_length).clamp(-1.0, 1.0).acos();
    let gamma = alpha + PI;
    let shank_angle = gamma + delta;

    LegAngles {
        thigh_angle: thigh_angle.to_degrees(),
        shank_angle: shank_angle.to_degrees(),
    }
}
