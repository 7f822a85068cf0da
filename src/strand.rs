//! The strand upon which a contig is laid into a scaffold.

use std::io;
use std::str::FromStr;

/// An error related to the parsing of a strand.
#[derive(Debug)]
pub struct ParseStrandError(io::Error);

impl std::fmt::Display for ParseStrandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse strand error: {}", self.0)
    }
}

impl std::error::Error for ParseStrandError {}

/// The orientation of a contig within a scaffold.
///
/// Assembly body lines encode the strand as the sign of a contig index
/// reference; chain files encode it as `+` or `-`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strand {
    /// The positive strand (`+`).
    Positive,
    /// The negative strand (`-`).
    Negative,
}

impl Strand {
    /// Derives a strand from the sign of an assembly body token.
    ///
    /// # Examples
    ///
    /// ```
    /// use assemblyfile::strand::Strand;
    ///
    /// assert_eq!(Strand::from_sign(4), Strand::Positive);
    /// assert_eq!(Strand::from_sign(-4), Strand::Negative);
    /// ```
    pub fn from_sign(value: i64) -> Strand {
        if value < 0 {
            Strand::Negative
        } else {
            Strand::Positive
        }
    }

    /// Returns whether this is the negative strand.
    pub fn is_negative(&self) -> bool {
        matches!(self, Strand::Negative)
    }
}

impl FromStr for Strand {
    type Err = ParseStrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Positive),
            "-" => Ok(Self::Negative),
            c => Err(ParseStrandError(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} is not a valid strand", c),
            ))),
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strand::Positive => write!(f, "+"),
            Strand::Negative => write!(f, "-"),
        }
    }
}
