//! ECS Resources for the stride game.

use bevy::prelude::*;

use crate::game::GameState;
use crate::input::InputState;
use crate::render::DrawCommand;

/// The game state, owned by the Bevy world.
#[derive(Resource, Debug, Clone)]
pub struct GameStateRes(pub GameState);

/// Input snapshot for the current tick.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct FrameInput(pub InputState);

/// Draw calls recorded for the current tick.
///
/// Rebuilt every frame after the simulation step; the render plugin replays
/// it into gizmos.
#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList(pub Vec<DrawCommand>);
