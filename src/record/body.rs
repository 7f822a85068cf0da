//! A body record.
//!
//! Each line in the body section of an assembly file describes one output
//! scaffold as an ordered list of signed contig index references: the
//! magnitude selects a contig declared in the header section, and the sign
//! selects the strand on which it is laid into the scaffold.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::strand::Strand;

/// An error associated with parsing a body record.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid contig reference token.
    InvalidReference(ParseIntError, String),
    /// A contig reference of zero, which encodes neither index nor strand.
    ZeroReference,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidReference(err, token) => {
                write!(f, "invalid contig reference \"{}\": {}", token, err)
            }
            ParseError::ZeroReference => {
                write!(f, "invalid contig reference: zero is not a valid reference")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A single signed contig reference within a body record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContigRef {
    /// The index of the referenced contig.
    index: usize,
    /// The strand on which the contig is laid into the scaffold.
    strand: Strand,
}

impl ContigRef {
    /// Returns the index of the referenced contig.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the strand of the reference.
    pub fn strand(&self) -> Strand {
        self.strand
    }
}

impl std::fmt::Display for ContigRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.strand {
            Strand::Positive => write!(f, "{}", self.index),
            Strand::Negative => write!(f, "-{}", self.index),
        }
    }
}

/// A body record within an assembly file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BodyRecord(Vec<ContigRef>);

impl BodyRecord {
    /// Returns the ordered contig references of the record.
    ///
    /// # Examples
    ///
    /// ```
    /// use assemblyfile::record::BodyRecord;
    /// use assemblyfile::strand::Strand;
    ///
    /// let record = "1 -2 3".parse::<BodyRecord>()?;
    ///
    /// assert_eq!(record.references().len(), 3);
    /// assert_eq!(record.references()[1].index(), 2);
    /// assert_eq!(record.references()[1].strand(), Strand::Negative);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn references(&self) -> &[ContigRef] {
        &self.0
    }
}

impl FromStr for BodyRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut references = Vec::new();

        for token in s.split_whitespace() {
            let value = token
                .parse::<i64>()
                .map_err(|e| ParseError::InvalidReference(e, token.into()))?;

            if value == 0 {
                return Err(ParseError::ZeroReference);
            }

            references.push(ContigRef {
                index: value.unsigned_abs() as usize,
                strand: Strand::from_sign(value),
            });
        }

        Ok(BodyRecord(references))
    }
}

impl std::fmt::Display for BodyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = self
            .0
            .iter()
            .map(|reference| reference.to_string())
            .collect::<Vec<_>>();

        write!(f, "{}", parts.join(" "))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_parsing_body_record() -> Result<(), Box<dyn std::error::Error>> {
        let record = "1 -2 3".parse::<BodyRecord>()?;

        let references = record.references();
        assert_eq!(references.len(), 3);

        assert_eq!(references[0].index(), 1);
        assert_eq!(references[0].strand(), Strand::Positive);

        assert_eq!(references[1].index(), 2);
        assert_eq!(references[1].strand(), Strand::Negative);

        assert_eq!(references[2].index(), 3);
        assert_eq!(references[2].strand(), Strand::Positive);

        Ok(())
    }

    #[test]
    fn test_invalid_reference() -> Result<(), Box<dyn std::error::Error>> {
        let err = "1 two".parse::<BodyRecord>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid contig reference \"two\": invalid digit found in string"
        );
        Ok(())
    }

    #[test]
    fn test_zero_reference() -> Result<(), Box<dyn std::error::Error>> {
        let err = "1 0".parse::<BodyRecord>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid contig reference: zero is not a valid reference"
        );
        Ok(())
    }

    #[test]
    fn test_body_record_display() -> Result<(), Box<dyn std::error::Error>> {
        let record = "1 -2 3".parse::<BodyRecord>()?;
        assert_eq!(record.to_string(), "1 -2 3");
        Ok(())
    }
}
