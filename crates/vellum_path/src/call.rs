//! Drawing calls and the backend they are replayed into
//!
//! The parser's output is a flat, ordered `Vec<DrawCall>`. A rendering engine consumes it
//! either by matching on the variants directly or by implementing [`DrawBackend`] and
//! calling [`replay`].

use crate::geometry::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One drawing primitive emitted by the path interpreter
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "call", rename_all = "snake_case"))]
pub enum DrawCall {
    /// Start a new subpath at a point
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Cubic Bézier curve to `end`
    CurveTo {
        end: Point,
        control1: Point,
        control2: Point,
    },
    /// Close the current subpath
    ClosePath,
    /// Pie slice of an ellipse, angles in degrees
    PieSlice {
        center: Point,
        radius_x: f64,
        radius_y: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

impl DrawCall {
    /// End point of a positioning call, `None` for `ClosePath` and `PieSlice`
    pub fn end_point(&self) -> Option<Point> {
        match self {
            DrawCall::MoveTo(p) | DrawCall::LineTo(p) => Some(*p),
            DrawCall::CurveTo { end, .. } => Some(*end),
            DrawCall::ClosePath | DrawCall::PieSlice { .. } => None,
        }
    }

    /// Issue this call against a backend
    pub fn apply<B: DrawBackend + ?Sized>(&self, backend: &mut B) {
        match *self {
            DrawCall::MoveTo(p) => backend.move_to(p),
            DrawCall::LineTo(p) => backend.line_to(p),
            DrawCall::CurveTo {
                end,
                control1,
                control2,
            } => backend.curve_to(end, control1, control2),
            DrawCall::ClosePath => backend.close_path(),
            DrawCall::PieSlice {
                center,
                radius_x,
                radius_y,
                start_angle,
                end_angle,
            } => backend.pie_slice(center, radius_x, radius_y, start_angle, end_angle),
        }
    }
}

/// The operations a rendering engine must expose to consume parsed paths
pub trait DrawBackend {
    /// Begin a new subpath
    fn move_to(&mut self, point: Point);

    /// Straight segment from the current point
    fn line_to(&mut self, point: Point);

    /// Cubic Bézier from the current point
    fn curve_to(&mut self, end: Point, control1: Point, control2: Point);

    /// Close the current subpath
    fn close_path(&mut self);

    /// Elliptical pie slice; angles are in degrees
    fn pie_slice(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        start_angle: f64,
        end_angle: f64,
    );
}

/// Replay a call list into a backend, preserving order
pub fn replay<B: DrawBackend + ?Sized>(calls: &[DrawCall], backend: &mut B) {
    for call in calls {
        call.apply(backend);
    }
}

/// A backend that records every call it receives
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<DrawCall>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded calls
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the backend empty
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl DrawBackend for RecordingBackend {
    fn move_to(&mut self, point: Point) {
        self.calls.push(DrawCall::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.calls.push(DrawCall::LineTo(point));
    }

    fn curve_to(&mut self, end: Point, control1: Point, control2: Point) {
        self.calls.push(DrawCall::CurveTo {
            end,
            control1,
            control2,
        });
    }

    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }

    fn pie_slice(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        self.calls.push(DrawCall::PieSlice {
            center,
            radius_x,
            radius_y,
            start_angle,
            end_angle,
        });
    }
}
