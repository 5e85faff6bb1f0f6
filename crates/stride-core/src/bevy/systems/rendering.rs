//! Rendering systems for the stride game.
//!
//! The frame is first recorded into [`DrawList`] (headless-safe), then
//! replayed into Bevy's Gizmos API by the render plugin.

use bevy::prelude::*;

use crate::bevy::{DrawList, GameStateRes};
use crate::config::ScreenConfig;
use crate::geometry::AbsolutePoint;
use crate::render::{Rect, RectStyle, RenderSink, Rgb, Segment};

/// System to record the current frame's draw calls.
pub fn build_draw_list(game_state: Res<GameStateRes>, mut draw_list: ResMut<DrawList>) {
    draw_list.0.clear();
    game_state.0.render(&mut draw_list.0);
}

/// System to draw the recorded frame using gizmos.
pub fn flush_draw_list(mut gizmos: Gizmos, draw_list: Res<DrawList>, game_state: Res<GameStateRes>) {
    let mut sink = GizmoSink::new(&mut gizmos, game_state.0.config().screen);
    for command in &draw_list.0 {
        command.replay(&mut sink);
    }
}

/// Converts screen pixels (origin bottom-left) to 2D world units
/// (origin at the window center).
#[allow(clippy::cast_possible_truncation)]
pub fn screen_to_world(point: AbsolutePoint, screen: ScreenConfig) -> Vec2 {
    Vec2::new(
        (point.x - f64::from(screen.width) / 2.0) as f32,
        (point.y - f64::from(screen.height) / 2.0) as f32,
    )
}

fn gizmo_color(rgb: Rgb) -> Color {
    Color::srgb_u8(rgb.r, rgb.g, rgb.b)
}

/// [`RenderSink`] drawing with Bevy gizmos.
pub struct GizmoSink<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    screen: ScreenConfig,
}

impl<'a, 'w, 's> GizmoSink<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, screen: ScreenConfig) -> Self {
        Self { gizmos, screen }
    }
}

impl RenderSink for GizmoSink<'_, '_, '_> {
    #[allow(clippy::cast_possible_truncation)]
    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        let center = screen_to_world(
            AbsolutePoint::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0),
            self.screen,
        );
        let size = Vec2::new(rect.w as f32, rect.h as f32);
        match style {
            RectStyle::Border(rgb) => {
                self.gizmos
                    .rect_2d(Isometry2d::from_translation(center), size, gizmo_color(rgb));
            }
            RectStyle::Filled(rgb) => {
                // Gizmos only stroke; cross the box so small markers read as solid.
                let color = gizmo_color(rgb);
                let half = size / 2.0;
                self.gizmos
                    .rect_2d(Isometry2d::from_translation(center), size, color);
                self.gizmos.line_2d(center - half, center + half, color);
                self.gizmos.line_2d(
                    center + Vec2::new(-half.x, half.y),
                    center + Vec2::new(half.x, -half.y),
                    color,
                );
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw_segment(&mut self, segment: &Segment) {
        let color = gizmo_color(segment.color);
        let rotation = Rot2::degrees(segment.angle as f32);
        let size = Vec2::new(segment.width as f32, segment.length as f32);

        // Offset from the rotation anchor to the bar center, before rotating.
        let (fx, fy) = segment.anchor_fraction;
        let local = Vec2::new(
            ((0.5 - fx) * segment.width) as f32,
            ((0.5 - fy) * segment.length) as f32,
        );
        let anchor = screen_to_world(segment.anchor, self.screen);
        let center = anchor + rotation * local;

        self.gizmos.rect_2d(Isometry2d::new(center, rotation), size, color);
        self.gizmos.line_2d(
            screen_to_world(segment.start(), self.screen),
            screen_to_world(segment.end(), self.screen),
            color,
        );
    }
}
