//! Bevy host for the stride pipeline.
//!
//! Bevy plays the role of the frame scheduler: plugin build performs setup
//! once, and every `Update` run is one tick (input, simulate, draw).

pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

pub use plugin::{StrideHeadlessPlugin, StrideSet, StrideUnifiedPlugin};
pub use resources::*;
pub use systems::input_from_keyboard;
