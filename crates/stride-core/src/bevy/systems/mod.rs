//! Systems for the stride game.
//!
//! Organized by functionality:
//! - input: Keyboard snapshot for the current tick
//! - animation: Movement, animation keys, clock and pose update
//! - rendering: Draw list recording and gizmo replay

pub mod animation;
pub mod input;
pub mod rendering;

pub use animation::*;
pub use input::*;
pub use rendering::*;
