//! Printing parsed calls

use anyhow::Result;
use vellum_path::{replay, DrawBackend, DrawCall, Point};

use crate::config::{OutputConfig, OutputFormat};

/// A backend that renders each call as one line of text
#[derive(Debug, Default)]
pub struct TextBackend {
    out: String,
}

impl TextBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn line(&mut self, name: &str, points: &[Point], scalars: &[f64]) {
        self.out.push_str(name);
        for point in points {
            self.out.push_str(&format!(" {} {}", point.x, point.y));
        }
        for value in scalars {
            self.out.push_str(&format!(" {}", value));
        }
        self.out.push('\n');
    }
}

impl DrawBackend for TextBackend {
    fn move_to(&mut self, point: Point) {
        self.line("move_to", &[point], &[]);
    }

    fn line_to(&mut self, point: Point) {
        self.line("line_to", &[point], &[]);
    }

    fn curve_to(&mut self, end: Point, control1: Point, control2: Point) {
        self.line("curve_to", &[end, control1, control2], &[]);
    }

    fn close_path(&mut self) {
        self.line("close_path", &[], &[]);
    }

    fn pie_slice(
        &mut self,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        self.line(
            "pie_slice",
            &[center],
            &[radius_x, radius_y, start_angle, end_angle],
        );
    }
}

/// Format calls according to the output configuration
pub fn render(calls: &[DrawCall], config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => {
            let mut backend = TextBackend::new();
            replay(calls, &mut backend);
            Ok(backend.into_string())
        }
        OutputFormat::Json => {
            let mut json = if config.pretty {
                serde_json::to_string_pretty(calls)?
            } else {
                serde_json::to_string(calls)?
            };
            json.push('\n');
            Ok(json)
        }
    }
}
