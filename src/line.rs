//! A line within an assembly file.

use std::str::FromStr;

use crate::record::body;
use crate::record::body::BodyRecord;
use crate::record::cprops;
use crate::record::cprops::CpropsRecord;
use crate::record::cprops::CPROPS_PREFIX;

/// The prefix for a comment line.
pub const COMMENT_PREFIX: char = '#';

/// An error associated with parsing a line of an assembly file.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid cprops record.
    InvalidCpropsRecord(cprops::ParseError, String),
    /// An invalid body record.
    InvalidBodyRecord(body::ParseError, String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidCpropsRecord(err, line) => {
                write!(f, "invalid cprops record: {}\n\nline: {}", err, line)
            }
            ParseError::InvalidBodyRecord(err, line) => {
                write!(f, "invalid body record: {}\n\nline: {}", err, line)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A line within an assembly file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// An empty (or whitespace-only) line.
    Empty,
    /// A comment line.
    Comment(String),
    /// A cprops (header section) line.
    Cprops(CpropsRecord),
    /// A body line.
    Body(BodyRecord),
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Empty => write!(f, ""),
            Line::Comment(text) => write!(f, "{}", text),
            Line::Cprops(record) => write!(f, "{}", record),
            Line::Body(record) => write!(f, "{}", record),
        }
    }
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Ok(Self::Empty)
        } else if s.starts_with(COMMENT_PREFIX) {
            Ok(Self::Comment(s.into()))
        } else if s.starts_with(CPROPS_PREFIX) {
            s.parse::<CpropsRecord>()
                .map(Line::Cprops)
                .map_err(|e| ParseError::InvalidCpropsRecord(e, s.into()))
        } else {
            s.parse::<BodyRecord>()
                .map(Line::Body)
                .map_err(|e| ParseError::InvalidBodyRecord(e, s.into()))
        }
    }
}
