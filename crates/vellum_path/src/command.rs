//! Path command letters

/// Command family, independent of absolute/relative form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicCurveTo,
    SmoothCubicCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    EllipticalArc,
    ClosePath,
    /// A letter outside the path grammar
    Unknown(char),
}

/// A command letter resolved to its family and coordinate mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// Lowercase letters take coordinates relative to the current point
    pub relative: bool,
}

impl Command {
    pub fn from_letter(letter: char) -> Self {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizontalLineTo,
            'V' => CommandKind::VerticalLineTo,
            'C' => CommandKind::CubicCurveTo,
            'S' => CommandKind::SmoothCubicCurveTo,
            'Q' => CommandKind::QuadraticCurveTo,
            'T' => CommandKind::SmoothQuadraticCurveTo,
            'A' => CommandKind::EllipticalArc,
            'Z' => CommandKind::ClosePath,
            _ => CommandKind::Unknown(letter),
        };

        Self {
            kind,
            relative: letter.is_ascii_lowercase(),
        }
    }

    /// Canonical letter for this command, cased by its coordinate mode
    pub fn letter(&self) -> char {
        let upper = match self.kind {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CubicCurveTo => 'C',
            CommandKind::SmoothCubicCurveTo => 'S',
            CommandKind::QuadraticCurveTo => 'Q',
            CommandKind::SmoothQuadraticCurveTo => 'T',
            CommandKind::EllipticalArc => 'A',
            CommandKind::ClosePath => 'Z',
            CommandKind::Unknown(c) => return c,
        };

        if self.relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    /// Number of values consumed by one invocation
    pub fn arity(&self) -> usize {
        match self.kind {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticCurveTo => 2,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::CubicCurveTo => 6,
            CommandKind::SmoothCubicCurveTo | CommandKind::QuadraticCurveTo => 4,
            CommandKind::EllipticalArc => 7,
            CommandKind::ClosePath | CommandKind::Unknown(_) => 0,
        }
    }

    /// Whether the last cubic control point survives this command
    pub fn keeps_cubic_control(&self) -> bool {
        matches!(
            self.kind,
            CommandKind::CubicCurveTo | CommandKind::SmoothCubicCurveTo
        )
    }

    /// Whether the last quadratic control point survives this command
    pub fn keeps_quadratic_control(&self) -> bool {
        matches!(
            self.kind,
            CommandKind::QuadraticCurveTo | CommandKind::SmoothQuadraticCurveTo
        )
    }
}
