//! A cprops record.
//!
//! The header section of an assembly file is made up of cprops lines, each
//! declaring one contig with a label, a unique positive index, and a length.

use std::num::ParseIntError;
use std::str::FromStr;

/// The prefix for a cprops record.
pub const CPROPS_PREFIX: char = '>';

/// The number of expected fields in a cprops record.
pub const NUM_CPROPS_FIELDS: usize = 3;

/// An error associated with parsing a cprops record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the cprops line.
    IncorrectNumberOfFields(usize),
    /// An invalid index.
    InvalidIndex(ParseIntError),
    /// An index of zero, which can never be referenced from a body line.
    ZeroIndex,
    /// An invalid length.
    InvalidLength(ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in cprops record: expected {} fields, found {} fields",
                NUM_CPROPS_FIELDS, n
            ),
            ParseError::InvalidIndex(err) => write!(f, "invalid index: {}", err),
            ParseError::ZeroIndex => write!(f, "invalid index: index must be a positive integer"),
            ParseError::InvalidLength(err) => write!(f, "invalid length: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

/// A cprops record within the header section of an assembly file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CpropsRecord {
    /// The full literal label of the contig.
    label: String,
    /// The unique index by which body lines reference the contig.
    index: usize,
    /// The length of the contig in bases.
    length: usize,
}

impl CpropsRecord {
    /// Returns the literal label of the contig.
    ///
    /// # Examples
    ///
    /// ```
    /// use assemblyfile::record::CpropsRecord;
    ///
    /// let record = ">ctgA:::fragment_1 1 50".parse::<CpropsRecord>()?;
    /// assert_eq!(record.label(), "ctgA:::fragment_1");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the index of the contig.
    ///
    /// # Examples
    ///
    /// ```
    /// use assemblyfile::record::CpropsRecord;
    ///
    /// let record = ">ctgA:::fragment_1 1 50".parse::<CpropsRecord>()?;
    /// assert_eq!(record.index(), 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the length of the contig.
    ///
    /// # Examples
    ///
    /// ```
    /// use assemblyfile::record::CpropsRecord;
    ///
    /// let record = ">ctgA:::fragment_1 1 50".parse::<CpropsRecord>()?;
    /// assert_eq!(record.length(), 50);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn length(&self) -> usize {
        self.length
    }
}

impl FromStr for CpropsRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .trim_start_matches(CPROPS_PREFIX)
            .split_whitespace()
            .collect::<Vec<_>>();
        if parts.len() != NUM_CPROPS_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        let label = parts[0].to_string();
        let index = parts[1].parse().map_err(ParseError::InvalidIndex)?;
        if index == 0 {
            return Err(ParseError::ZeroIndex);
        }
        let length = parts[2].parse().map_err(ParseError::InvalidLength)?;

        Ok(CpropsRecord {
            label,
            index,
            length,
        })
    }
}

impl std::fmt::Display for CpropsRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            CPROPS_PREFIX, self.label, self.index, self.length
        )
    }
}
