//! Elliptical arc handling
//!
//! Arcs are emitted as pie slices around a centre taken from the path's line-to data,
//! not derived from the arc's own end-point parameters. The slice always uses `radius_x`
//! for both radii, and `x_axis_rotation` is carried but not applied.

use crate::geometry::Point;

/// The seven values of one arc invocation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSegment {
    pub radius_x: f64,
    pub radius_y: f64,
    pub x_axis_rotation: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub end: Point,
}

impl ArcSegment {
    /// Build from `rx ry rotation large-arc-flag sweep-flag x y`
    pub fn from_values(values: &[f64; 7]) -> Self {
        let [radius_x, radius_y, x_axis_rotation, large_arc, sweep, x, y] = *values;
        Self {
            radius_x,
            radius_y,
            x_axis_rotation,
            large_arc: large_arc != 0.0,
            sweep: sweep != 0.0,
            end: Point::new(x, y),
        }
    }

    /// A zero x radius draws nothing
    pub fn is_degenerate(&self) -> bool {
        self.radius_x == 0.0
    }
}

/// Start and end angles, in degrees, of the pie slice drawn for `arc`.
///
/// `current` is the pen position before the arc and `centre` the looked-up centre.
/// Coordinates outside the circle of radius `radius_x` give `NaN` angles.
pub fn pie_slice_angles(arc: &ArcSegment, current: Point, centre: Point) -> (f64, f64) {
    let rx = arc.radius_x;

    match (arc.large_arc, arc.sweep) {
        // Small arc, positive direction: walks from the end point back to the pen
        (false, true) => {
            let start = arc.end;
            let end = current;
            let dx = start.x - centre.x;
            let dy = end.x - centre.x;
            let start_angle = acos_degrees(dx / rx) * below_sign(start, centre);
            let end_angle = acos_degrees(dy / rx) * below_sign(end, centre);

            // Slices are always drawn anti-clockwise
            if dx < dy {
                (end_angle, start_angle)
            } else {
                (start_angle, end_angle)
            }
        }
        (true, true) => {
            let start = arc.end;
            let end = current;
            let mut dx = start.x - centre.x;
            let mut dy = end.x - centre.x;
            if start.x < centre.x && start.y > centre.y {
                dx = -dx;
            }
            if end.x < centre.x {
                dy = -dy;
            }

            let start_angle = acos_degrees(dx / rx) + below_offset(start, centre);
            let end_angle = acos_degrees(dy / rx);
            (start_angle, end_angle)
        }
        (false, false) => {
            let start = current;
            let end = arc.end;
            let dx = start.x + centre.x;
            let dy = end.x + centre.x;
            let start_angle = acos_degrees(dx / rx) * below_sign(start, centre);
            let end_angle = acos_degrees(dy / rx) * below_sign(end, centre);
            (start_angle, end_angle)
        }
        (true, false) => {
            let start = current;
            let end = arc.end;
            let start_angle = acos_degrees(end.x / rx) + below_offset(start, centre);
            let end_angle = acos_degrees(end.y / rx) + below_offset(end, centre);
            (start_angle, end_angle)
        }
    }
}

fn acos_degrees(ratio: f64) -> f64 {
    ratio.acos().to_degrees()
}

/// -1 when `point` lies below `centre` in y-down coordinates
fn below_sign(point: Point, centre: Point) -> f64 {
    if point.y > centre.y {
        -1.0
    } else {
        1.0
    }
}

/// Half a turn when `point` lies below `centre` in y-down coordinates
fn below_offset(point: Point, centre: Point) -> f64 {
    if point.y > centre.y {
        180.0
    } else {
        0.0
    }
}
