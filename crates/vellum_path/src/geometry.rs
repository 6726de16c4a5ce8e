//! Point arithmetic shared by the curve and arc handlers

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate this point by `by`, treating it as a vector
    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }

    /// Point reflection of `self` through `pivot` (`2 * pivot - self`)
    pub fn reflect_through(self, pivot: Point) -> Self {
        Self::new(2.0 * pivot.x - self.x, 2.0 * pivot.y - self.y)
    }

    /// Round both coordinates to `places` decimal places
    pub fn rounded(self, places: i32) -> Self {
        Self::new(round_to(self.x, places), round_to(self.y, places))
    }
}

/// Round half away from zero to `places` decimal places.
///
/// A decimal tie such as `1.005` is stored just below the tie, so the scaled value rounds
/// down. The result is bumped one step when the halfway point maps back onto `value`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let mut rounded = (value * scale).round();

    if value > 0.0 && (rounded + 0.5) / scale <= value {
        rounded += 1.0;
    } else if value < 0.0 && (rounded - 0.5) / scale >= value {
        rounded -= 1.0;
    }

    rounded / scale
}

/// Elevate a quadratic Bézier to the two control points of the equivalent cubic.
///
/// Returns `(control1, control2)`; the end points are shared with the quadratic.
pub fn elevate_quadratic(start: Point, control: Point, end: Point) -> (Point, Point) {
    let control1 = Point::new(
        start.x + (control.x - start.x) * 2.0 / 3.0,
        start.y + (control.y - start.y) * 2.0 / 3.0,
    );
    let control2 = Point::new(
        control1.x + (end.x - start.x) / 3.0,
        control1.y + (end.y - start.y) / 3.0,
    );
    (control1, control2)
}
