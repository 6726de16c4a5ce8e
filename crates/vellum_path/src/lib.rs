//! Vellum path interpreter
//!
//! Turns path data (the `d` mini-language of vector graphics: `M`, `L`, `H`, `V`, `C`, `S`,
//! `Q`, `T`, `A`, `Z` and their relative forms) into a flat, ordered list of drawing calls for
//! a rendering backend:
//!
//! - **Tokenizer**: splits the string into command letters and numeric arguments
//! - **Interpreter**: resolves relative coordinates, mirrors smooth-curve control points,
//!   elevates quadratics to cubics and turns arcs into pie slices
//! - **Backend**: a small trait a renderer implements to consume the calls
//!
//! # Example
//!
//! ```rust
//! use vellum_path::{parse_path, DrawCall, Point};
//!
//! let calls = parse_path("M0,0 Q10,10 20,0").unwrap();
//!
//! assert_eq!(calls[0], DrawCall::MoveTo(Point::new(0.0, 0.0)));
//! assert_eq!(
//!     calls[1],
//!     DrawCall::CurveTo {
//!         end: Point::new(20.0, 0.0),
//!         control1: Point::new(6.67, 6.67),
//!         control2: Point::new(13.33, 6.67),
//!     }
//! );
//! ```

pub mod arc;
pub mod call;
pub mod command;
pub mod error;
pub mod geometry;
pub mod interpreter;
pub mod lexer;

pub use arc::ArcSegment;
pub use call::{replay, DrawBackend, DrawCall, RecordingBackend};
pub use command::{Command, CommandKind};
pub use error::{MalformedPath, Result};
pub use geometry::Point;
pub use interpreter::{parse_path, ParserState, PathParser};
pub use lexer::{tokenize, Segment};
