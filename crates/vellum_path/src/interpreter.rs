//! Path command interpreter
//!
//! Walks the tokenized segments in order, tracking the pen and control-point memory, and
//! appends the resulting drawing calls. A command followed by more values than it consumes
//! repeats implicitly; `M` with trailing pairs continues as absolute `L`.

use tracing::{debug, trace, warn};

use crate::arc::{pie_slice_angles, ArcSegment};
use crate::call::{replay, DrawBackend, DrawCall};
use crate::command::{Command, CommandKind};
use crate::error::{MalformedPath, Result};
use crate::geometry::{elevate_quadratic, Point};
use crate::lexer::{tokenize, Segment};

/// Decimal places kept on curve coordinates
const CURVE_PRECISION: i32 = 2;

/// Cursor state for a single parse
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParserState {
    /// Current pen position, unset before the first move
    pub last_point: Option<Point>,
    /// Start of the current subpath, set only by moves
    pub subpath_initial_point: Option<Point>,
    /// Second control point of the last cubic curve
    pub previous_cubic_control_point: Option<Point>,
    /// Control point of the last quadratic curve
    pub previous_quadratic_control_point: Option<Point>,
    /// Centre used by the most recent arc command
    pub arc_centre: Option<Point>,
}

/// Parses path strings into drawing calls.
///
/// Each call to [`PathParser::parse`] runs on its own [`ParserState`], so one parser can be
/// shared freely between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathParser;

impl PathParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse path data into an ordered list of drawing calls
    pub fn parse(&self, data: &str) -> Result<Vec<DrawCall>> {
        let segments = tokenize(data)?;
        let mut interpreter = Interpreter::new(&segments);

        for (index, segment) in segments.iter().enumerate() {
            interpreter.run_segment(index, segment)?;
        }

        trace!(
            "Parsed {} segments into {} draw calls",
            segments.len(),
            interpreter.calls.len()
        );
        Ok(interpreter.calls)
    }

    /// Parse path data and replay the calls into `backend`.
    ///
    /// Nothing reaches the backend unless the whole string parses. Returns the number of
    /// calls issued.
    pub fn parse_into<B: DrawBackend + ?Sized>(
        &self,
        data: &str,
        backend: &mut B,
    ) -> Result<usize> {
        let calls = self.parse(data)?;
        replay(&calls, backend);
        Ok(calls.len())
    }
}

/// Parse path data with a default [`PathParser`]
pub fn parse_path(data: &str) -> Result<Vec<DrawCall>> {
    PathParser::new().parse(data)
}

/// Positions of absolute line-to segments, used to place arc centres
#[derive(Debug, Default)]
struct LineToIndex {
    /// `(segment index, first point)`, ascending by index
    entries: Vec<(usize, Point)>,
}

impl LineToIndex {
    fn build(segments: &[Segment]) -> Self {
        let entries = segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| segment.letter == 'L')
            .filter_map(|(index, segment)| match segment.args.as_slice() {
                [x, y, ..] => Some((index, Point::new(*x, *y))),
                _ => None,
            })
            .collect();

        Self { entries }
    }

    /// First line-to point after the segment at `index`
    fn centre_after(&self, index: usize) -> Option<Point> {
        let next = self.entries.partition_point(|(i, _)| *i <= index);
        self.entries.get(next).map(|(_, point)| *point)
    }
}

struct Interpreter {
    state: ParserState,
    calls: Vec<DrawCall>,
    line_to_index: LineToIndex,
}

impl Interpreter {
    fn new(segments: &[Segment]) -> Self {
        Self {
            state: ParserState::default(),
            calls: Vec::new(),
            line_to_index: LineToIndex::build(segments),
        }
    }

    fn run_segment(&mut self, index: usize, segment: &Segment) -> Result<()> {
        let command = Command::from_letter(segment.letter);
        let args = segment.args.as_slice();
        trace!("Segment '{}' with {} values", segment.letter, args.len());

        match command.kind {
            CommandKind::MoveTo => self.move_to(command, args)?,
            CommandKind::LineTo => self.line_to(command, args)?,
            CommandKind::HorizontalLineTo => self.horizontal_line_to(command, args)?,
            CommandKind::VerticalLineTo => self.vertical_line_to(command, args)?,
            CommandKind::CubicCurveTo => self.cubic_curve_to(command, args)?,
            CommandKind::SmoothCubicCurveTo => self.smooth_cubic_curve_to(command, args)?,
            CommandKind::QuadraticCurveTo | CommandKind::SmoothQuadraticCurveTo => {
                self.quadratic_curve_to(command, args)?
            }
            CommandKind::EllipticalArc => self.elliptical_arc(command, index, segment)?,
            CommandKind::ClosePath => self.close_path(args),
            CommandKind::Unknown(letter) => {
                warn!(
                    "Ignoring unknown path command '{}' and its {} values",
                    letter,
                    args.len()
                );
            }
        }

        if !command.keeps_cubic_control() {
            self.state.previous_cubic_control_point = None;
        }
        if !command.keeps_quadratic_control() {
            self.state.previous_quadratic_control_point = None;
        }

        Ok(())
    }

    /// Offset `point` by the pen when the command is relative and a pen exists
    fn resolve(&self, relative: bool, point: Point) -> Point {
        match self.state.last_point {
            Some(last) if relative => point.offset(last),
            _ => point,
        }
    }

    fn current_point(&self, command: Command) -> Result<Point> {
        self.state.last_point.ok_or(MalformedPath::NoCurrentPoint {
            command: command.letter(),
        })
    }

    fn move_to(&mut self, command: Command, args: &[f64]) -> Result<()> {
        let (first, rest) = match args {
            [x, y, rest @ ..] if rest.len() % 2 == 0 => (Point::new(*x, *y), rest),
            _ => {
                return Err(MalformedPath::MissingArguments {
                    command: command.letter(),
                    expected: command.arity(),
                    found: if args.is_empty() { 0 } else { args.len() % 2 },
                })
            }
        };

        let point = self.resolve(command.relative, first);
        self.state.last_point = Some(point);
        self.state.subpath_initial_point = Some(point);
        self.calls.push(DrawCall::MoveTo(point));

        if !rest.is_empty() {
            self.line_to(Command::from_letter('L'), rest)?;
        }
        Ok(())
    }

    fn line_to(&mut self, command: Command, args: &[f64]) -> Result<()> {
        for [x, y] in groups::<2>(command, args)? {
            self.current_point(command)?;
            let point = self.resolve(command.relative, Point::new(x, y));
            self.state.last_point = Some(point);
            self.calls.push(DrawCall::LineTo(point));
        }
        Ok(())
    }

    fn horizontal_line_to(&mut self, command: Command, args: &[f64]) -> Result<()> {
        for [x] in groups::<1>(command, args)? {
            let last = self.current_point(command)?;
            let x = if command.relative { x + last.x } else { x };
            let point = Point::new(x, last.y);
            self.state.last_point = Some(point);
            self.calls.push(DrawCall::LineTo(point));
        }
        Ok(())
    }

    fn vertical_line_to(&mut self, command: Command, args: &[f64]) -> Result<()> {
        for [y] in groups::<1>(command, args)? {
            let last = self.current_point(command)?;
            let y = if command.relative { y + last.y } else { y };
            let point = Point::new(last.x, y);
            self.state.last_point = Some(point);
            self.calls.push(DrawCall::LineTo(point));
        }
        Ok(())
    }

    fn cubic_curve_to(&mut self, command: Command, args: &[f64]) -> Result<()> {
        for [x1, y1, x2, y2, x, y] in groups::<6>(command, args)? {
            self.current_point(command)?;
            let control1 = self.resolve(command.relative, Point::new(x1, y1));
            let control2 = self.resolve(command.relative, Point::new(x2, y2));
            let end = self.resolve(command.relative, Point::new(x, y));
            self.push_curve(end, control1, control2);
            self.state.previous_cubic_control_point = Some(control2);
        }
        Ok(())
    }

    fn smooth_cubic_curve_to(&mut self, command: Command, args: &[f64]) -> Result<()> {
        for [x2, y2, x, y] in groups::<4>(command, args)? {
            let last = self.current_point(command)?;
            let control2 = self.resolve(command.relative, Point::new(x2, y2));
            let end = self.resolve(command.relative, Point::new(x, y));
            let control1 = self
                .state
                .previous_cubic_control_point
                .map_or(last, |previous| previous.reflect_through(last));
            self.push_curve(end, control1, control2);
            self.state.previous_cubic_control_point = Some(control2);
        }
        Ok(())
    }

    fn quadratic_curve_to(&mut self, command: Command, args: &[f64]) -> Result<()> {
        let smooth = command.kind == CommandKind::SmoothQuadraticCurveTo;
        let arity = command.arity();
        check_groups(command, args)?;

        for values in args.chunks_exact(arity) {
            let last = self.current_point(command)?;
            let (control, end) = if smooth {
                let end = self.resolve(command.relative, Point::new(values[0], values[1]));
                let control = self
                    .state
                    .previous_quadratic_control_point
                    .map_or(last, |previous| previous.reflect_through(last));
                (control, end)
            } else {
                let control = self.resolve(command.relative, Point::new(values[0], values[1]));
                let end = self.resolve(command.relative, Point::new(values[2], values[3]));
                (control, end)
            };

            let (control1, control2) = elevate_quadratic(last, control, end);
            self.push_curve(end, control1, control2);
            self.state.previous_quadratic_control_point = Some(control);
        }
        Ok(())
    }

    fn elliptical_arc(&mut self, command: Command, index: usize, segment: &Segment) -> Result<()> {
        let centre = self
            .line_to_index
            .centre_after(index)
            .ok_or(MalformedPath::MissingArcCentre {
                offset: segment.offset,
            })?;
        self.state.arc_centre = Some(centre);

        for values in groups::<7>(command, &segment.args)? {
            let arc = ArcSegment::from_values(&values);
            if arc.is_degenerate() {
                debug!("Skipping arc with zero x radius at offset {}", segment.offset);
                continue;
            }

            let current = self.current_point(command)?;
            let (start_angle, end_angle) = pie_slice_angles(&arc, current, centre);
            self.calls.push(DrawCall::PieSlice {
                center: centre,
                radius_x: arc.radius_x,
                radius_y: arc.radius_x,
                start_angle,
                end_angle,
            });
        }
        Ok(())
    }

    fn close_path(&mut self, args: &[f64]) {
        if !args.is_empty() {
            debug!("Ignoring {} values after close path", args.len());
        }

        if let Some(initial) = self.state.subpath_initial_point {
            self.calls.push(DrawCall::ClosePath);
            self.state.last_point = Some(initial);
        }
    }

    /// Emit a cubic curve rounded to the curve precision and advance the pen
    fn push_curve(&mut self, end: Point, control1: Point, control2: Point) {
        self.state.last_point = Some(end);
        self.calls.push(DrawCall::CurveTo {
            end: end.rounded(CURVE_PRECISION),
            control1: control1.rounded(CURVE_PRECISION),
            control2: control2.rounded(CURVE_PRECISION),
        });
    }
}

/// Fail unless `args` splits evenly into the command's argument groups
fn check_groups(command: Command, args: &[f64]) -> Result<()> {
    let arity = command.arity();
    let remainder = args.len() % arity;
    if remainder != 0 {
        return Err(MalformedPath::MissingArguments {
            command: command.letter(),
            expected: arity,
            found: remainder,
        });
    }
    Ok(())
}

/// Split `args` into fixed-size groups, one per implicit invocation
fn groups<const N: usize>(
    command: Command,
    args: &[f64],
) -> Result<impl Iterator<Item = [f64; N]> + '_> {
    debug_assert_eq!(command.arity(), N);
    check_groups(command, args)?;

    Ok(args.chunks_exact(N).map(|chunk| {
        let mut values = [0.0; N];
        values.copy_from_slice(chunk);
        values
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::RecordingBackend;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn curve(end: Point, control1: Point, control2: Point) -> DrawCall {
        DrawCall::CurveTo {
            end,
            control1,
            control2,
        }
    }

    fn positioning_count(calls: &[DrawCall]) -> usize {
        calls.iter().filter(|c| c.end_point().is_some()).count()
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(parse_path("").unwrap(), vec![]);
    }

    #[test]
    fn test_command_repetition() {
        let calls = parse_path("M0 0 L1 1 2 2 3 3").unwrap();
        assert_eq!(
            calls,
            vec![
                DrawCall::MoveTo(p(0.0, 0.0)),
                DrawCall::LineTo(p(1.0, 1.0)),
                DrawCall::LineTo(p(2.0, 2.0)),
                DrawCall::LineTo(p(3.0, 3.0)),
            ]
        );
    }

    #[test]
    fn test_implicit_line_continuation() {
        let calls = parse_path("M0 0 5 5").unwrap();
        assert_eq!(
            calls,
            vec![DrawCall::MoveTo(p(0.0, 0.0)), DrawCall::LineTo(p(5.0, 5.0))]
        );
    }

    #[test]
    fn test_relative_move_continues_as_absolute_lines() {
        let calls = parse_path("M10 10 m5 5 1 1").unwrap();
        assert_eq!(
            calls,
            vec![
                DrawCall::MoveTo(p(10.0, 10.0)),
                DrawCall::MoveTo(p(15.0, 15.0)),
                DrawCall::LineTo(p(1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_relative_without_current_point_is_absolute() {
        let calls = parse_path("m3 4 l1 1").unwrap();
        assert_eq!(
            calls,
            vec![DrawCall::MoveTo(p(3.0, 4.0)), DrawCall::LineTo(p(4.0, 5.0))]
        );
    }

    #[test]
    fn test_horizontal_and_vertical_lines() {
        let calls = parse_path("M1 2 H5 v3 h-2 V0").unwrap();
        assert_eq!(
            calls,
            vec![
                DrawCall::MoveTo(p(1.0, 2.0)),
                DrawCall::LineTo(p(5.0, 2.0)),
                DrawCall::LineTo(p(5.0, 5.0)),
                DrawCall::LineTo(p(3.0, 5.0)),
                DrawCall::LineTo(p(3.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_close_path_returns_to_subpath_start() {
        let calls = parse_path("M1 1 L5 1 L5 5 Z l1 0").unwrap();
        assert_eq!(calls[3], DrawCall::ClosePath);
        assert_eq!(calls[4], DrawCall::LineTo(p(2.0, 1.0)));
    }

    #[test]
    fn test_close_path_without_subpath_is_noop() {
        assert_eq!(parse_path("Z z").unwrap(), vec![]);
        let calls = parse_path("Z M0 0 Z").unwrap();
        assert_eq!(
            calls,
            vec![DrawCall::MoveTo(p(0.0, 0.0)), DrawCall::ClosePath]
        );
    }

    #[test]
    fn test_cubic_curve_rounds_output() {
        let calls = parse_path("M0 0 C1.111 2.226 3.3333 4.4444 5.556 6.666").unwrap();
        assert_eq!(
            calls[1],
            curve(p(5.56, 6.67), p(1.11, 2.23), p(3.33, 4.44))
        );
    }

    #[test]
    fn test_cubic_curve_rounds_decimal_ties_up() {
        let calls = parse_path("M0 0 C1.005 0 2.675 0 5.015 0").unwrap();
        assert_eq!(
            calls[1],
            curve(p(5.02, 0.0), p(1.01, 0.0), p(2.68, 0.0))
        );
    }

    #[test]
    fn test_relative_cubic_curve() {
        let calls = parse_path("M10 10 c1 0 2 1 3 3").unwrap();
        assert_eq!(
            calls[1],
            curve(p(13.0, 13.0), p(11.0, 10.0), p(12.0, 11.0))
        );
    }

    #[test]
    fn test_smooth_cubic_mirrors_control_point() {
        let calls = parse_path("M0,0 C10,0 10,10 20,10 S30,20 40,10").unwrap();
        assert_eq!(calls.len(), 3);
        assert_eq!(
            calls[2],
            curve(p(40.0, 10.0), p(30.0, 10.0), p(30.0, 20.0))
        );
    }

    #[test]
    fn test_smooth_cubic_without_previous_curve_uses_pen() {
        let calls = parse_path("M5,5 L10,10 S30,20 40,10").unwrap();
        assert_eq!(
            calls[2],
            curve(p(40.0, 10.0), p(10.0, 10.0), p(30.0, 20.0))
        );
    }

    #[test]
    fn test_cubic_memory_cleared_by_other_commands() {
        let calls = parse_path("M0,0 C10,0 10,10 20,10 L20,10 S30,20 40,10").unwrap();
        assert_eq!(
            calls[3],
            curve(p(40.0, 10.0), p(20.0, 10.0), p(30.0, 20.0))
        );
    }

    #[test]
    fn test_quadratic_elevation() {
        let calls = parse_path("M0,0 Q10,10 20,0").unwrap();
        assert_eq!(
            calls[1],
            curve(p(20.0, 0.0), p(6.67, 6.67), p(13.33, 6.67))
        );
    }

    #[test]
    fn test_smooth_quadratic_mirrors_control_point() {
        let calls = parse_path("M0,0 Q10,10 20,0 T40,0").unwrap();
        // Mirrored control is (30, -10)
        assert_eq!(
            calls[2],
            curve(p(40.0, 0.0), p(26.67, -6.67), p(33.33, -6.67))
        );
    }

    #[test]
    fn test_smooth_quadratic_without_previous_curve_is_straight() {
        let calls = parse_path("M0,0 T30,0").unwrap();
        assert_eq!(calls[1], curve(p(30.0, 0.0), p(0.0, 0.0), p(10.0, 0.0)));
    }

    #[test]
    fn test_quadratic_memory_not_shared_with_cubic() {
        let calls = parse_path("M0,0 Q10,10 20,0 S30,20 40,10").unwrap();
        // S after Q has no cubic control to mirror
        assert_eq!(
            calls[2],
            curve(p(40.0, 10.0), p(20.0, 0.0), p(30.0, 20.0))
        );
    }

    #[test]
    fn test_relative_quadratic() {
        let calls = parse_path("M10,10 q10,10 20,0").unwrap();
        assert_eq!(
            calls[1],
            curve(p(30.0, 10.0), p(16.67, 16.67), p(23.33, 16.67))
        );
    }

    #[test]
    fn test_relative_and_absolute_agree() {
        let absolute = parse_path("M10 10 L20 10 L20 20 C25 20 30 25 30 30 Z").unwrap();
        let relative = parse_path("M10 10 l10 0 l0 10 c5 0 10 5 10 10 z").unwrap();

        assert_eq!(positioning_count(&absolute), positioning_count(&relative));
        assert_eq!(absolute, relative);
    }

    #[test]
    fn test_arc_emits_pie_slice_around_line_to_centre() {
        let calls = parse_path("M50 40 A10 10 0 0 1 60 50 L50 50").unwrap();
        assert_eq!(calls.len(), 3);

        match calls[1] {
            DrawCall::PieSlice {
                center,
                radius_x,
                radius_y,
                start_angle,
                end_angle,
            } => {
                assert_eq!(center, p(50.0, 50.0));
                assert_eq!(radius_x, 10.0);
                assert_eq!(radius_y, 10.0);
                assert!(start_angle.abs() < 1e-9);
                assert!((end_angle - 90.0).abs() < 1e-9);
            }
            ref other => panic!("expected a pie slice, got {:?}", other),
        }
    }

    #[test]
    fn test_arc_uses_radius_x_for_both_radii() {
        let calls = parse_path("M50 40 A10 25 45 0 1 60 50 L50 50").unwrap();
        assert!(matches!(
            calls[1],
            DrawCall::PieSlice {
                radius_x,
                radius_y,
                ..
            } if radius_x == 10.0 && radius_y == 10.0
        ));
    }

    #[test]
    fn test_arc_does_not_move_pen() {
        let calls = parse_path("M50 40 A10 10 0 0 1 60 50 l1 1 L50 50").unwrap();
        assert_eq!(calls[2], DrawCall::LineTo(p(51.0, 41.0)));
    }

    #[test]
    fn test_relative_arc_end_point_is_not_offset() {
        let absolute = parse_path("M50 40 A10 10 0 0 1 60 50 L50 50").unwrap();
        let relative = parse_path("M50 40 a10 10 0 0 1 60 50 L50 50").unwrap();
        assert_eq!(relative, absolute);
    }

    #[test]
    fn test_arc_repeats() {
        let calls = parse_path("M50 40 A10 10 0 0 1 60 50 10 10 0 0 1 60 50 L50 50").unwrap();
        let slices = calls
            .iter()
            .filter(|c| matches!(c, DrawCall::PieSlice { .. }))
            .count();
        assert_eq!(slices, 2);
    }

    #[test]
    fn test_degenerate_arc_is_skipped() {
        let calls = parse_path("M50 40 A0 10 0 0 1 60 50 L50 50").unwrap();
        assert_eq!(
            calls,
            vec![
                DrawCall::MoveTo(p(50.0, 40.0)),
                DrawCall::LineTo(p(50.0, 50.0)),
            ]
        );
    }

    #[test]
    fn test_arc_centre_comes_from_following_line_to() {
        let calls = parse_path("M50 40 L0 0 M50 40 A10 10 0 0 1 60 50 L50 50 L7 7").unwrap();
        assert!(matches!(
            calls[3],
            DrawCall::PieSlice { center, .. } if center == p(50.0, 50.0)
        ));
    }

    #[test]
    fn test_arc_without_line_to_fails() {
        assert_eq!(
            parse_path("M50 40 L50 50 A10 10 0 0 1 60 50"),
            Err(MalformedPath::MissingArcCentre { offset: 14 })
        );
        assert!(matches!(
            parse_path("M50 40 A10 10 0 0 1 60 50 l5 5"),
            Err(MalformedPath::MissingArcCentre { .. })
        ));
    }

    #[test]
    fn test_value_before_command_fails() {
        assert_eq!(
            parse_path("5 5 M0 0"),
            Err(MalformedPath::ValueBeforeCommand { offset: 0 })
        );
    }

    #[test]
    fn test_drawing_before_move_fails() {
        assert_eq!(
            parse_path("L5 5"),
            Err(MalformedPath::NoCurrentPoint { command: 'L' })
        );
        assert_eq!(
            parse_path("C1 1 2 2 3 3"),
            Err(MalformedPath::NoCurrentPoint { command: 'C' })
        );
    }

    #[test]
    fn test_invalid_character_fails() {
        assert_eq!(
            parse_path("M0 0 #5 5"),
            Err(MalformedPath::InvalidCharacter {
                character: '#',
                offset: 5
            })
        );
    }

    #[test]
    fn test_incomplete_group_fails() {
        assert_eq!(
            parse_path("M0 0 L1 2 3"),
            Err(MalformedPath::MissingArguments {
                command: 'L',
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_path("M0 0 1"),
            Err(MalformedPath::MissingArguments {
                command: 'M',
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            parse_path("M"),
            Err(MalformedPath::MissingArguments {
                command: 'M',
                expected: 2,
                found: 0
            })
        );
        assert!(matches!(
            parse_path("M0 0 c1 2 3 4 5"),
            Err(MalformedPath::MissingArguments {
                command: 'c',
                expected: 6,
                found: 5
            })
        ));
    }

    #[test]
    fn test_missing_current_point_fails() {
        assert_eq!(
            parse_path("H5"),
            Err(MalformedPath::NoCurrentPoint { command: 'H' })
        );
        assert_eq!(
            parse_path("q1 1 2 2"),
            Err(MalformedPath::NoCurrentPoint { command: 'q' })
        );
    }

    #[test]
    fn test_unknown_command_is_ignored() {
        let calls = parse_path("M0 0 X 1 2 L3 3").unwrap();
        assert_eq!(
            calls,
            vec![DrawCall::MoveTo(p(0.0, 0.0)), DrawCall::LineTo(p(3.0, 3.0))]
        );
    }

    #[test]
    fn test_close_path_never_precedes_move() {
        for data in ["Z", "z M1 1 z", "M0 0 Z Z", "Z M2 2 L3 3 z m1 1 Z"] {
            let calls = parse_path(data).unwrap();
            let first_move = calls
                .iter()
                .position(|c| matches!(c, DrawCall::MoveTo(_)))
                .unwrap_or(calls.len());
            let first_close = calls
                .iter()
                .position(|c| matches!(c, DrawCall::ClosePath))
                .unwrap_or(calls.len());
            assert!(first_close >= first_move, "close before move in {:?}", data);
        }
    }

    #[test]
    fn test_parse_into_backend() {
        let mut backend = RecordingBackend::new();
        let count = PathParser::new()
            .parse_into("M0 0 L1 1 Z", &mut backend)
            .unwrap();

        assert_eq!(count, 3);
        assert_eq!(backend.calls().len(), 3);
    }

    #[test]
    fn test_parse_into_backend_discards_partial_output() {
        let mut backend = RecordingBackend::new();
        let result = PathParser::new().parse_into("M0 0 L1 1 #", &mut backend);

        assert!(result.is_err());
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_parser_is_shareable_across_threads() {
        let parser = PathParser::new();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let data = format!("M{} 0 L{} 10", i, i);
                    parser.parse(&data).unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let calls = handle.join().unwrap();
            assert_eq!(calls[0], DrawCall::MoveTo(p(i as f64, 0.0)));
        }
    }

    #[test]
    fn test_line_to_index() {
        let segments = tokenize("L1 1 A L2 2 L3").unwrap();
        let index = LineToIndex::build(&segments);

        // The bare `L3` has no full point and is not indexed
        assert_eq!(index.entries.len(), 2);
        assert_eq!(index.centre_after(0), Some(p(2.0, 2.0)));
        assert_eq!(index.centre_after(1), Some(p(2.0, 2.0)));
        assert_eq!(index.centre_after(2), None);
    }
}
