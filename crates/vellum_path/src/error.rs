//! Path parsing error types

use thiserror::Error;

/// A path string that cannot be turned into drawing calls.
///
/// Every failure aborts the whole parse; no partial output is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedPath {
    /// A number appeared before any command letter
    #[error("Numerical value specified before character command in path data (offset {offset})")]
    ValueBeforeCommand { offset: usize },

    /// A character outside the path grammar
    #[error("Invalid character '{character}' in path data (offset {offset})")]
    InvalidCharacter { character: char, offset: usize },

    /// A numeric literal that does not form a decimal number
    #[error("Invalid number '{literal}' in path data (offset {offset})")]
    InvalidNumber { literal: String, offset: usize },

    /// An arc command with no later `L` command to take its centre from
    #[error("Line to value must be specified in path data containing command 'A' (offset {offset})")]
    MissingArcCentre { offset: usize },

    /// A command whose trailing argument group is incomplete
    #[error("Command '{command}' expects {expected} values per segment, found {found}")]
    MissingArguments {
        command: char,
        expected: usize,
        found: usize,
    },

    /// A command that needs a current point before any move
    #[error("Command '{command}' requires a current point")]
    NoCurrentPoint { command: char },
}

/// Result alias for path parsing
pub type Result<T> = std::result::Result<T, MalformedPath>;
