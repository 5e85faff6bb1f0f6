//! Stride desktop viewer.
//!
//! Opens a window sized to the configured screen and plays the walk cycle.
//! Pass a JSON config path as the first argument to override the defaults.
//!
//! Keys: arrows move the frame, Space pauses, F / B step while paused.

use anyhow::Context;
use bevy::prelude::*;
use stride_core::StrideConfig;
use stride_core::bevy::StrideUnifiedPlugin;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => StrideConfig::load(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => StrideConfig::default(),
    };
    tracing::info!(
        "[stride] screen {}x{}, cycle of {} ticks",
        config.screen.width,
        config.screen.height,
        config.keyframes.length()
    );

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "stride".to_string(),
                        resolution: (config.screen.width, config.screen.height).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                // tracing_subscriber is already installed above
                .disable::<bevy::log::LogPlugin>(),
        )
        .add_plugins(StrideUnifiedPlugin::new(config))
        .run();

    Ok(())
}
