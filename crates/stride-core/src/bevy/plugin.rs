//! Bevy plugins for the stride game.
//!
//! Provides:
//! - `StrideHeadlessPlugin`: Game tick and draw recording without rendering or window dependencies
//! - `StrideUnifiedPlugin`: `StrideHeadlessPlugin` + camera and gizmo rendering

use bevy::prelude::*;

use crate::bevy::resources::*;
use crate::bevy::systems;
use crate::config::StrideConfig;
use crate::game::GameState;

/// Ordering of one tick within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum StrideSet {
    /// Snapshot the keyboard.
    Input,
    /// Move, handle animation keys, advance the clock and re-pose.
    Simulate,
    /// Record the frame's draw calls.
    Draw,
}

// ============================================================================
// Headless Plugin (logic only, no rendering/window dependencies)
// ============================================================================

/// Headless plugin running one game tick per `Update`.
///
/// Use this plugin in tests with `MinimalPlugins`. Draw calls are recorded
/// into [`DrawList`] but never flushed to the screen.
#[derive(Default)]
pub struct StrideHeadlessPlugin {
    pub config: StrideConfig,
}

impl Plugin for StrideHeadlessPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GameStateRes(GameState::new(self.config.clone())))
            .init_resource::<FrameInput>()
            .init_resource::<DrawList>();

        app.configure_sets(
            Update,
            (StrideSet::Input, StrideSet::Simulate, StrideSet::Draw).chain(),
        );

        app.add_systems(
            Update,
            (
                systems::gather_keyboard_input.in_set(StrideSet::Input),
                systems::update_game_state.in_set(StrideSet::Simulate),
                systems::build_draw_list.in_set(StrideSet::Draw),
            ),
        );

        tracing::info!("[stride] headless plugin initialized");
    }
}

// ============================================================================
// Unified Plugin (headless + rendering)
// ============================================================================

/// Full plugin: game logic plus a 2D camera and gizmo rendering.
///
/// Requires `DefaultPlugins` (or at least the gizmo and render plugins).
#[derive(Default)]
pub struct StrideUnifiedPlugin {
    pub config: StrideConfig,
}

impl StrideUnifiedPlugin {
    pub fn new(config: StrideConfig) -> Self {
        Self { config }
    }
}

impl Plugin for StrideUnifiedPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(StrideHeadlessPlugin {
            config: self.config.clone(),
        });

        app.insert_resource(ClearColor(Color::WHITE));
        app.add_systems(Startup, setup_camera);
        app.add_systems(Update, systems::flush_draw_list.after(StrideSet::Draw));

        tracing::info!("[stride] unified plugin initialized");
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
