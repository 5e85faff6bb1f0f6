//! Skeleton and per-leg pose assembly.
//!
//! Each frame the skeleton's relative targets are placed in the frame,
//! scaled about the frame center to fake depth, solved with [`ik::solve`] and
//! turned into two bone segments per leg.

use serde::{Deserialize, Serialize};

use crate::config::RigConfig;
use crate::geometry::{AbsolutePoint, DepthScale, Frame, RelativePoint};
use crate::ik::{self, LegAngles};
use crate::keyframe::Pose;
use crate::render::{Rect, RectStyle, RenderSink, Rgb, Segment};

/// Rotation anchor of a bone bar: middle of its base.
const BONE_ANCHOR: (f64, f64) = (0.5, 0.0);

/// Side length of a debug joint marker, in pixels.
const JOINT_MARKER_SIZE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegSide {
    Left,
    Right,
}

impl LegSide {
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];
}

/// Leg colors keyed by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegPalette {
    pub left: Rgb,
    pub right: Rgb,
}

impl LegPalette {
    pub fn color(&self, side: LegSide) -> Rgb {
        match side {
            LegSide::Left => self.left,
            LegSide::Right => self.right,
        }
    }
}

impl Default for LegPalette {
    fn default() -> Self {
        Self {
            left: Rgb::new(0, 128, 0),
            right: Rgb::new(128, 0, 0),
        }
    }
}

/// Relative leg targets plus bone proportions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skeleton {
    pub hip: RelativePoint,
    /// Fraction of the frame height.
    pub thigh_length: f64,
    /// Fraction of the frame height.
    pub shank_length: f64,
    pub left_foot: RelativePoint,
    pub right_foot: RelativePoint,
}

impl Skeleton {
    pub fn new(thigh_length: f64, shank_length: f64, pose: Pose) -> Self {
        assert!(
            thigh_length > 0.0 && shank_length > 0.0,
            "bone lengths must be positive"
        );
        Self {
            hip: pose.hip,
            thigh_length,
            shank_length,
            left_foot: pose.left_foot,
            right_foot: pose.right_foot,
        }
    }

    /// Overwrites the targets in place; bone lengths are kept.
    pub fn apply_pose(&mut self, pose: Pose) {
        self.hip = pose.hip;
        self.left_foot = pose.left_foot;
        self.right_foot = pose.right_foot;
    }

    pub fn foot(&self, side: LegSide) -> RelativePoint {
        match side {
            LegSide::Left => self.left_foot,
            LegSide::Right => self.right_foot,
        }
    }
}

/// A leg resolved to screen space and solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosedLeg {
    pub side: LegSide,
    pub hip: AbsolutePoint,
    pub foot: AbsolutePoint,
    pub thigh_length: f64,
    pub shank_length: f64,
    pub angles: LegAngles,
}

impl PosedLeg {
    pub fn knee(&self) -> AbsolutePoint {
        self.angles.knee_from_hip(self.hip, self.thigh_length)
    }
}

/// Depth scale for one leg, centered on the frame.
pub fn leg_scale(frame: &Frame, rig: &RigConfig, side: LegSide) -> DepthScale {
    let factor = match side {
        LegSide::Left => rig.left_scale,
        LegSide::Right => rig.right_scale,
    };
    DepthScale::new(factor, frame.center())
}

/// Places one leg of `skeleton` in `frame` and solves it.
pub fn pose_leg(frame: &Frame, skeleton: &Skeleton, side: LegSide, scale: DepthScale) -> PosedLeg {
    let hip = scale.scale_position(frame.absolute_position(skeleton.hip));
    let foot = scale.scale_position(frame.absolute_position(skeleton.foot(side)));
    let thigh_length = scale.scale_length(frame.absolute_h(skeleton.thigh_length));
    let shank_length = scale.scale_length(frame.absolute_h(skeleton.shank_length));
    let angles = ik::solve(hip, foot, thigh_length, shank_length);

    PosedLeg {
        side,
        hip,
        foot,
        thigh_length,
        shank_length,
        angles,
    }
}

/// Emits the thigh (from the hip) and the shank (from the foot).
///
/// Solver angles run clockwise while segments turn counterclockwise, hence
/// the negation.
pub fn draw_leg(sink: &mut impl RenderSink, leg: &PosedLeg, rig: &RigConfig) {
    let color = rig.palette.color(leg.side);
    sink.draw_segment(&Segment {
        anchor: leg.hip,
        length: leg.thigh_length,
        width: rig.bone_width,
        angle: -leg.angles.thigh_angle,
        anchor_fraction: BONE_ANCHOR,
        color,
    });
    sink.draw_segment(&Segment {
        anchor: leg.foot,
        length: leg.shank_length,
        width: rig.bone_width,
        angle: -leg.angles.shank_angle,
        anchor_fraction: BONE_ANCHOR,
        color,
    });
}

/// Debug markers on the hip, knee and foot.
pub fn draw_joints(sink: &mut impl RenderSink, leg: &PosedLeg, rig: &RigConfig) {
    let color = rig.palette.color(leg.side);
    for point in [leg.hip, leg.knee(), leg.foot] {
        sink.draw_rect(
            Rect::centered_square(point, JOINT_MARKER_SIZE),
            RectStyle::Filled(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyframe::KeyframeTable;
    use crate::render::DrawCommand;

    fn frame() -> Frame {
        Frame::new(540.0, 50.0, 200.0, 400.0)
    }

    fn skeleton() -> Skeleton {
        Skeleton::new(0.15, 0.2, KeyframeTable::walk_cycle().pose_at(0.0))
    }

    #[test]
    fn test_pose_leg_applies_depth_scale() {
        let rig = RigConfig::default();
        let frame = frame();
        let skeleton = skeleton();

        let left = pose_leg(&frame, &skeleton, LegSide::Left, leg_scale(&frame, &rig, LegSide::Left));
        let right = pose_leg(&frame, &skeleton, LegSide::Right, leg_scale(&frame, &rig, LegSide::Right));

        // Hip (0.5, 0.33) -> (640, 182); center (640, 250).
        assert!((left.hip.x - 640.0).abs() < 1e-9);
        assert!((left.hip.y - (250.0 - 68.0 * 0.95)).abs() < 1e-9);
        assert!((right.hip.y - (250.0 - 68.0 * 1.05)).abs() < 1e-9);

        assert!((left.thigh_length - 57.0).abs() < 1e-9);
        assert!((right.thigh_length - 63.0).abs() < 1e-9);
        assert!((left.shank_length - 76.0).abs() < 1e-9);
        assert!((right.shank_length - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_posed_leg_reaches_its_foot() {
        let rig = RigConfig::default();
        let frame = frame();
        let table = KeyframeTable::walk_cycle();
        let mut skeleton = skeleton();

        for tick in 0..table.length() {
            skeleton.apply_pose(table.pose_at(f64::from(tick)));
            for side in LegSide::ALL {
                let leg = pose_leg(&frame, &skeleton, side, leg_scale(&frame, &rig, side));
                if leg.hip.distance(leg.foot) <= leg.thigh_length + leg.shank_length {
                    let implied = leg.angles.foot_from_hip(leg.hip, leg.thigh_length, leg.shank_length);
                    assert!(implied.distance(leg.foot) < 1e-3, "tick {tick} {side:?}");
                }
            }
        }
    }

    #[test]
    fn test_draw_leg_negates_angles() {
        let rig = RigConfig::default();
        let frame = frame();
        let leg = pose_leg(&frame, &skeleton(), LegSide::Right, leg_scale(&frame, &rig, LegSide::Right));

        let mut commands: Vec<DrawCommand> = Vec::new();
        draw_leg(&mut commands, &leg, &rig);
        assert_eq!(commands.len(), 2);

        let DrawCommand::Segment(thigh) = commands[0] else {
            panic!("expected thigh segment");
        };
        let DrawCommand::Segment(shank) = commands[1] else {
            panic!("expected shank segment");
        };
        assert_eq!(thigh.anchor, leg.hip);
        assert_eq!(shank.anchor, leg.foot);
        assert!((thigh.angle + leg.angles.thigh_angle).abs() < f64::EPSILON);
        assert!((shank.angle + leg.angles.shank_angle).abs() < f64::EPSILON);
        assert_eq!(thigh.color, Rgb::new(128, 0, 0));
        assert!((thigh.width - 4.0).abs() < f64::EPSILON);

        // Drawn bars land on the solved knee from both ends.
        let knee = leg.knee();
        assert!(thigh.end().distance(knee) < 1e-6);
        assert!(shank.end().distance(knee) < 1e-6);
    }

    #[test]
    fn test_draw_joints_emits_three_markers() {
        let rig = RigConfig::default();
        let frame = frame();
        let leg = pose_leg(&frame, &skeleton(), LegSide::Left, leg_scale(&frame, &rig, LegSide::Left));

        let mut commands: Vec<DrawCommand> = Vec::new();
        draw_joints(&mut commands, &leg, &rig);
        assert_eq!(commands.len(), 3);
        assert!(commands
            .iter()
            .all(|c| matches!(c, DrawCommand::Rect(_, RectStyle::Filled(color)) if *color == Rgb::new(0, 128, 0))));
    }

    #[test]
    fn test_palette_lookup() {
        let palette = LegPalette::default();
        assert_eq!(palette.color(LegSide::Left), palette.left);
        assert_eq!(palette.color(LegSide::Right), palette.right);
    }
}
