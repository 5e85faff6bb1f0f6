//! Coordinate spaces and the transforms between them.
//!
//! Two point types keep the spaces apart:
//! - [`RelativePoint`]: fractions (0..1) of a [`Frame`]'s width and height.
//! - [`AbsolutePoint`]: screen pixels, origin bottom-left, y up.
//!
//! The only way from one space to the other is [`Frame::absolute_position`].

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point expressed as fractions of a frame's size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativePoint {
    pub x: f64,
    pub y: f64,
}

impl RelativePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t = 0` returns `self`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }
}

/// A point in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AbsolutePoint {
    pub x: f64,
    pub y: f64,
}

impl AbsolutePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// Offset between two absolute points, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Sub for AbsolutePoint {
    type Output = Offset;

    fn sub(self, rhs: Self) -> Offset {
        Offset {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl Add<Offset> for AbsolutePoint {
    type Output = AbsolutePoint;

    fn add(self, rhs: Offset) -> AbsolutePoint {
        AbsolutePoint::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<Offset> for AbsolutePoint {
    type Output = AbsolutePoint;

    fn sub(self, rhs: Offset) -> AbsolutePoint {
        AbsolutePoint::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;

    fn mul(self, rhs: f64) -> Offset {
        Offset {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

/// The rectangle that relative coordinates are measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn absolute_position(&self, relative: RelativePoint) -> AbsolutePoint {
        AbsolutePoint::new(self.absolute_x(relative.x), self.absolute_y(relative.y))
    }

    pub fn absolute_x(&self, relative_x: f64) -> f64 {
        self.x + self.w * relative_x
    }

    pub fn absolute_y(&self, relative_y: f64) -> f64 {
        self.y + self.h * relative_y
    }

    /// Converts a length given as a fraction of the frame height.
    pub fn absolute_h(&self, relative_h: f64) -> f64 {
        self.h * relative_h
    }

    /// Converts a length given as a fraction of the frame width.
    pub fn absolute_w(&self, relative_w: f64) -> f64 {
        self.w * relative_w
    }

    pub fn center(&self) -> AbsolutePoint {
        self.absolute_position(RelativePoint::new(0.5, 0.5))
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// Uniform scale about a fixed center, used to fake depth between the legs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthScale {
    pub factor: f64,
    pub center: AbsolutePoint,
}

impl DepthScale {
    pub const fn new(factor: f64, center: AbsolutePoint) -> Self {
        Self { factor, center }
    }

    pub fn scale_position(&self, point: AbsolutePoint) -> AbsolutePoint {
        scale_position(self.factor, self.center, point)
    }

    pub fn scale_length(&self, length: f64) -> f64 {
        scale_length(self.factor, length)
    }
}

/// `center + factor * (point - center)`.
pub fn scale_position(factor: f64, center: AbsolutePoint, point: AbsolutePoint) -> AbsolutePoint {
    center + (point - center) * factor
}

pub fn scale_length(factor: f64, length: f64) -> f64 {
    length * factor
}
