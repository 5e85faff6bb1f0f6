//! Keyframe table and pose interpolation for the walk cycle.

use serde::{Deserialize, Serialize};

use crate::geometry::RelativePoint;

/// Error type for keyframe table validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyframeError {
    #[error("a keyframe table needs at least two keyframes, got {0}")]
    TooFewKeyframes(usize),
    #[error("the first keyframe must sit on tick 0, got tick {0}")]
    FirstTickNotZero(u32),
    #[error("keyframe {index} has tick {tick}, not after the previous tick {previous}")]
    NotAscending { index: usize, previous: u32, tick: u32 },
}

/// Easing applied to the interpolation factor between two keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl EasingType {
    /// Applies the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Limb targets for one frame, in frame-relative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub hip: RelativePoint,
    pub left_foot: RelativePoint,
    pub right_foot: RelativePoint,
}

impl Pose {
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            hip: self.hip.lerp(other.hip, t),
            left_foot: self.left_foot.lerp(other.left_foot, t),
            right_foot: self.right_foot.lerp(other.right_foot, t),
        }
    }
}

/// A pose pinned to an animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub tick: u32,
    pub hip: RelativePoint,
    pub left_foot: RelativePoint,
    pub right_foot: RelativePoint,
}

impl Keyframe {
    pub const fn new(tick: u32, hip: RelativePoint, left_foot: RelativePoint, right_foot: RelativePoint) -> Self {
        Self {
            tick,
            hip,
            left_foot,
            right_foot,
        }
    }

    pub fn pose(&self) -> Pose {
        Pose {
            hip: self.hip,
            left_foot: self.left_foot,
            right_foot: self.right_foot,
        }
    }
}

/// On-disk shape of a table: either a bare list or a list with easing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum KeyframeTableDef {
    List(Vec<Keyframe>),
    Table {
        keyframes: Vec<Keyframe>,
        #[serde(default)]
        easing: EasingType,
    },
}

/// An ordered, validated sequence of keyframes forming one looping cycle.
///
/// The first keyframe sits on tick 0 and ticks strictly increase, so every
/// frame in `0..length()` has exactly one bracketing pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KeyframeTableDef", into = "KeyframeTableDef")]
pub struct KeyframeTable {
    keyframes: Vec<Keyframe>,
    easing: EasingType,
}

impl KeyframeTable {
    /// Creates a linear table, checking ordering invariants.
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self, KeyframeError> {
        Self::with_easing(keyframes, EasingType::Linear)
    }

    pub fn with_easing(keyframes: Vec<Keyframe>, easing: EasingType) -> Result<Self, KeyframeError> {
        if keyframes.len() < 2 {
            return Err(KeyframeError::TooFewKeyframes(keyframes.len()));
        }
        if keyframes[0].tick != 0 {
            return Err(KeyframeError::FirstTickNotZero(keyframes[0].tick));
        }
        for (index, pair) in keyframes.windows(2).enumerate() {
            if pair[1].tick <= pair[0].tick {
                return Err(KeyframeError::NotAscending {
                    index: index + 1,
                    previous: pair[0].tick,
                    tick: pair[1].tick,
                });
            }
        }
        Ok(Self { keyframes, easing })
    }

    /// The built-in walk cycle: six keyframes over 35 ticks.
    pub fn walk_cycle() -> Self {
        let p = RelativePoint::new;
        Self::new(vec![
            Keyframe::new(0, p(0.5, 0.33), p(0.09, 0.25), p(0.7, 0.0)),
            Keyframe::new(8, p(0.5, 0.31), p(0.2, 0.18), p(0.5, 0.0)),
            Keyframe::new(16, p(0.5, 0.33), p(0.73, 0.05), p(0.08, 0.05)),
            Keyframe::new(24, p(0.5, 0.32), p(0.75, 0.0), p(0.08, 0.2)),
            Keyframe::new(32, p(0.5, 0.29), p(0.2, 0.02), p(0.4, 0.1)),
            Keyframe::new(35, p(0.5, 0.33), p(0.09, 0.25), p(0.7, 0.0)),
        ])
        .expect("walk cycle keyframes start at tick 0 and ascend")
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn easing(&self) -> EasingType {
        self.easing
    }

    /// Number of ticks in one cycle: the last keyframe's tick.
    pub fn length(&self) -> u32 {
        self.keyframes[self.keyframes.len() - 1].tick
    }

    /// Interpolated pose at `frame`.
    ///
    /// Frames outside `0..=length()` are wrapped into the cycle first. On the
    /// closing tick the next keyframe is the first one of the following
    /// cycle, which sits on the same instant, so the closing keyframe is
    /// returned as is.
    pub fn pose_at(&self, frame: f64) -> Pose {
        let length = f64::from(self.length());
        let frame = if (0.0..=length).contains(&frame) {
            frame
        } else {
            frame.rem_euclid(length)
        };

        // First tick is 0 and frame >= 0, so at least one keyframe precedes it.
        let next_index = self
            .keyframes
            .partition_point(|k| f64::from(k.tick) <= frame);
        let previous = &self.keyframes[next_index - 1];
        let Some(next) = self.keyframes.get(next_index) else {
            return previous.pose();
        };

        let span = f64::from(next.tick - previous.tick);
        let factor = self
            .easing
            .apply((frame - f64::from(previous.tick)) / span);
        previous.pose().lerp(&next.pose(), factor)
    }
}

impl Default for KeyframeTable {
    fn default() -> Self {
        Self::walk_cycle()
    }
}

impl TryFrom<KeyframeTableDef> for KeyframeTable {
    type Error = KeyframeError;

    fn try_from(def: KeyframeTableDef) -> Result<Self, Self::Error> {
        match def {
            KeyframeTableDef::Table { keyframes, easing } => Self::with_easing(keyframes, easing),
            KeyframeTableDef::List(keyframes) => Self::new(keyframes),
        }
    }
}

impl From<KeyframeTable> for KeyframeTableDef {
    fn from(table: KeyframeTable) -> Self {
        Self::Table {
            keyframes: table.keyframes,
            easing: table.easing,
        }
    }
}
