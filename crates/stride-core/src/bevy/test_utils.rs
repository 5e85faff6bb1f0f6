//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `StrideHeadlessPlugin`.

use bevy::prelude::*;

use crate::bevy::plugin::StrideHeadlessPlugin;
use crate::bevy::resources::{DrawList, GameStateRes};
use crate::config::StrideConfig;
use crate::game::GameState;
use crate::render::DrawCommand;

/// A headless Bevy app wrapper for testing.
///
/// Keyboard state is driven directly through the `ButtonInput<KeyCode>`
/// resource. `InputPlugin` is left out since it would clear presses made
/// between updates before the game reads them.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Create a new test app with the default config.
    pub fn new() -> Self {
        Self::with_config(StrideConfig::default())
    }

    pub fn with_config(config: StrideConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_plugins(StrideHeadlessPlugin { config });
        Self { app }
    }

    /// Run one tick, then drop this tick's press edges.
    pub fn update(&mut self) {
        self.app.update();
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    /// Press, tick once, release.
    pub fn tap(&mut self, key: KeyCode) {
        self.press(key);
        self.update();
        self.release(key);
    }

    pub fn game_state(&self) -> &GameState {
        &self.app.world().resource::<GameStateRes>().0
    }

    pub fn draw_list(&self) -> &[DrawCommand] {
        &self.app.world().resource::<DrawList>().0
    }
}
