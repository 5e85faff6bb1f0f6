//! Stride Core Library
//!
//! A pair of legs posed by two-bone inverse kinematics, with foot and hip
//! targets driven by a looping keyframe walk cycle.
//!
//! The pipeline is engine-agnostic: [`game::GameState`] takes an
//! [`input::InputState`] per tick and draws into any [`render::RenderSink`].
//! The [`bevy`] module hosts it inside a Bevy app.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod config;
pub mod game;
pub mod geometry;
pub mod ik;
pub mod input;
pub mod keyframe;
pub mod render;
pub mod rig;

// Bevy integration
pub mod bevy;

pub use clock::AnimationClock;
pub use config::{ConfigError, StrideConfig};
pub use game::GameState;
pub use geometry::{AbsolutePoint, DepthScale, Frame, RelativePoint};
pub use ik::{LegAngles, MIN_DISTANCE_SQUARED};
pub use input::{Directions, Facing, InputState};
pub use keyframe::{EasingType, Keyframe, KeyframeError, KeyframeTable, Pose};
pub use render::{DrawCommand, Rect, RectStyle, RenderSink, Rgb, Segment};
pub use rig::{LegPalette, LegSide, PosedLeg, Skeleton};
