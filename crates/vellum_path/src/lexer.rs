//! Path data tokenizer
//!
//! Splits a path string into segments: one command letter followed by the numeric values
//! that appeared before the next letter. Values may be separated by whitespace or commas,
//! or packed together when a `-` sign delimits them (`10-5` is `10` and `-5`).

use crate::error::{MalformedPath, Result};

/// A command letter with the values written after it
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub letter: char,
    pub args: Vec<f64>,
    /// Byte offset of the command letter in the source string
    pub offset: usize,
}

impl Segment {
    fn new(letter: char, offset: usize) -> Self {
        Self {
            letter,
            args: Vec::new(),
            offset,
        }
    }
}

/// Tokenize a whole path string into segments, in source order
pub fn tokenize(data: &str) -> Result<Vec<Segment>> {
    let mut lexer = Lexer::default();

    for (offset, c) in data.char_indices() {
        lexer.feed(offset, c)?;
    }

    lexer.finish()
}

#[derive(Default)]
struct Lexer {
    segments: Vec<Segment>,
    current: Option<Segment>,
    literal: String,
    literal_start: usize,
}

impl Lexer {
    fn feed(&mut self, offset: usize, c: char) -> Result<()> {
        match c {
            'A'..='Z' | 'a'..='z' => {
                self.flush_literal()?;
                if let Some(segment) = self.current.take() {
                    self.segments.push(segment);
                }
                self.current = Some(Segment::new(c, offset));
            }
            '0'..='9' | '.' => self.extend_literal(offset, c)?,
            '-' if self.literal.is_empty() => self.extend_literal(offset, c)?,
            '-' => {
                self.flush_literal()?;
                self.extend_literal(offset, c)?;
            }
            ' ' | '\t' | '\r' | '\n' | ',' => self.flush_literal()?,
            _ => {
                return Err(MalformedPath::InvalidCharacter {
                    character: c,
                    offset,
                })
            }
        }

        Ok(())
    }

    fn extend_literal(&mut self, offset: usize, c: char) -> Result<()> {
        if self.current.is_none() {
            return Err(MalformedPath::ValueBeforeCommand { offset });
        }
        if self.literal.is_empty() {
            self.literal_start = offset;
        }
        self.literal.push(c);
        Ok(())
    }

    fn flush_literal(&mut self) -> Result<()> {
        if self.literal.is_empty() {
            return Ok(());
        }

        let value: f64 = self
            .literal
            .parse()
            .map_err(|_| MalformedPath::InvalidNumber {
                literal: self.literal.clone(),
                offset: self.literal_start,
            })?;

        match self.current.as_mut() {
            Some(segment) => segment.args.push(value),
            None => {
                return Err(MalformedPath::ValueBeforeCommand {
                    offset: self.literal_start,
                })
            }
        }

        self.literal.clear();
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<Segment>> {
        self.flush_literal()?;
        if let Some(segment) = self.current.take() {
            self.segments.push(segment);
        }
        Ok(self.segments)
    }
}
