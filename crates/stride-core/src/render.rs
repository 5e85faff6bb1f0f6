//! Draw primitives and the sink they are emitted into.
//!
//! Coordinates are screen pixels (origin bottom-left, y up). Segment angles
//! are in degrees, counterclockwise, with 0 pointing up.

use serde::{Deserialize, Serialize};

use crate::geometry::AbsolutePoint;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle, `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// A `size` x `size` square centered on `point`.
    pub fn centered_square(point: AbsolutePoint, size: f64) -> Self {
        Self {
            x: point.x - size / 2.0,
            y: point.y - size / 2.0,
            w: size,
            h: size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectStyle {
    Border(Rgb),
    Filled(Rgb),
}

/// A bone drawn as a rotated `width` x `length` bar.
///
/// The bar rotates about `anchor`, which sits at `anchor_fraction` of the
/// bar's own width and length (`(0.5, 0.0)` is the middle of its base).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub anchor: AbsolutePoint,
    pub length: f64,
    pub width: f64,
    pub angle: f64,
    pub anchor_fraction: (f64, f64),
    pub color: Rgb,
}

impl Segment {
    /// Far end of the bar's center line.
    pub fn end(&self) -> AbsolutePoint {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let along = self.length * (1.0 - self.anchor_fraction.1);
        AbsolutePoint::new(self.anchor.x - sin * along, self.anchor.y + cos * along)
    }

    /// Near end of the bar's center line (equals `anchor` for a base anchor).
    pub fn start(&self) -> AbsolutePoint {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let back = self.length * self.anchor_fraction.1;
        AbsolutePoint::new(self.anchor.x + sin * back, self.anchor.y - cos * back)
    }
}

/// Backend that accepts the frame's draw calls.
pub trait RenderSink {
    fn draw_rect(&mut self, rect: Rect, style: RectStyle);
    fn draw_segment(&mut self, segment: &Segment);
}

/// A recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Rect(Rect, RectStyle),
    Segment(Segment),
}

impl DrawCommand {
    pub fn replay(&self, sink: &mut impl RenderSink) {
        match self {
            Self::Rect(rect, style) => sink.draw_rect(*rect, *style),
            Self::Segment(segment) => sink.draw_segment(segment),
        }
    }
}

impl RenderSink for Vec<DrawCommand> {
    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        self.push(DrawCommand::Rect(rect, style));
    }

    fn draw_segment(&mut self, segment: &Segment) {
        self.push(DrawCommand::Segment(*segment));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(angle: f64) -> Segment {
        Segment {
            anchor: AbsolutePoint::new(10.0, 20.0),
            length: 50.0,
            width: 4.0,
            angle,
            anchor_fraction: (0.5, 0.0),
            color: Rgb::BLACK,
        }
    }

    #[test]
    fn test_segment_end_follows_counterclockwise_angle() {
        let up = segment(0.0).end();
        assert!((up.x - 10.0).abs() < 1e-9);
        assert!((up.y - 70.0).abs() < 1e-9);

        // Positive angles turn left.
        let left = segment(90.0).end();
        assert!((left.x - -40.0).abs() < 1e-9);
        assert!((left.y - 20.0).abs() < 1e-9);

        assert_eq!(segment(33.0).start(), AbsolutePoint::new(10.0, 20.0));
    }

    #[test]
    fn test_recording_and_replay() {
        let mut recorded: Vec<DrawCommand> = Vec::new();
        recorded.draw_rect(
            Rect::centered_square(AbsolutePoint::new(5.0, 5.0), 10.0),
            RectStyle::Border(Rgb::BLACK),
        );
        recorded.draw_segment(&segment(45.0));
        assert_eq!(recorded.len(), 2);
        assert_eq!(
            recorded[0],
            DrawCommand::Rect(
                Rect {
                    x: 0.0,
                    y: 0.0,
                    w: 10.0,
                    h: 10.0
                },
                RectStyle::Border(Rgb::BLACK)
            )
        );

        let mut copy: Vec<DrawCommand> = Vec::new();
        for command in &recorded {
            command.replay(&mut copy);
        }
        assert_eq!(copy, recorded);
    }
}
