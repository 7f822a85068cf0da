//! Liftover chain emission.
//!
//! Each kept placement becomes one chain stanza: a 13-field header line
//! mapping the original contig interval (target) onto the output scaffold
//! interval (query), followed by a single alignment-block length and a
//! blank separator line.

use std::io::Write;
use std::io::{self};

use crate::scaffold::Placement;
use crate::scaffold::Scaffold;
use crate::strand::Strand;

/// The prefix for a chain header line.
pub const HEADER_PREFIX: &str = "chain";

/// The delimiter for a chain header line.
pub const HEADER_DELIMITER: char = ' ';

/// The score written for every chain header line.
pub const SCORE: usize = 0;

/// A liftover chain record mapping one contig placement onto its scaffold.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChainRecord {
    /// The target (original contig) name.
    target_name: String,
    /// The total length of the target contig.
    target_length: usize,
    /// The start of the aligned target interval.
    target_start: usize,
    /// The end of the aligned target interval.
    target_end: usize,
    /// The query (output scaffold) name.
    query_name: String,
    /// The total length of the query scaffold.
    query_length: usize,
    /// The strand of the query interval.
    query_strand: Strand,
    /// The start of the aligned query interval.
    query_start: usize,
    /// The end of the aligned query interval.
    query_end: usize,
    /// The chain id.
    id: usize,
}

impl ChainRecord {
    /// Creates a new chain record.
    ///
    /// # Examples
    ///
    /// ```
    /// use assemblyfile::chain::ChainRecord;
    /// use assemblyfile::strand::Strand;
    ///
    /// let record = ChainRecord::new(
    ///     "ctgA", 50, 0, 50,
    ///     "Scaffold1", 50, Strand::Positive, 0, 50,
    ///     1,
    /// );
    ///
    /// assert_eq!(
    ///     record.to_string(),
    ///     "chain 0 ctgA 50 + 0 50 Scaffold1 50 + 0 50 1"
    /// );
    /// assert_eq!(record.block_size(), 50);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        target_name: impl Into<String>,
        target_length: usize,
        target_start: usize,
        target_end: usize,
        query_name: impl Into<String>,
        query_length: usize,
        query_strand: Strand,
        query_start: usize,
        query_end: usize,
        id: usize,
    ) -> Self {
        Self {
            target_name: target_name.into(),
            target_length,
            target_start,
            target_end,
            query_name: query_name.into(),
            query_length,
            query_strand,
            query_start,
            query_end,
            id,
        }
    }

    /// Derives the chain record for a placement of a finalized scaffold.
    ///
    /// The placement's scaffold coordinates were computed assuming a
    /// forward layout, but the chain format expresses a negative-strand
    /// query interval in coordinates counted from the far end of the
    /// scaffold. For a reverse placement the interval is therefore flipped
    /// through the scaffold's total length; forward placements pass through
    /// unchanged. This is why emission must wait until the scaffold is
    /// complete.
    pub fn from_placement(
        placement: &Placement,
        scaffold: &Scaffold,
        target_length: usize,
    ) -> Self {
        let total_length = scaffold.length();

        let (query_start, query_end) = match placement.strand() {
            Strand::Positive => (placement.scaffold_start(), placement.scaffold_end()),
            Strand::Negative => (
                total_length - placement.scaffold_end(),
                total_length - placement.scaffold_start(),
            ),
        };

        Self {
            target_name: placement.contig_name().to_string(),
            target_length,
            target_start: placement.contig_start(),
            target_end: placement.contig_end(),
            query_name: scaffold.name().to_string(),
            query_length: total_length,
            query_strand: placement.strand(),
            query_start,
            query_end,
            id: placement.chain_number(),
        }
    }

    /// Returns the target (original contig) name.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Returns the query (output scaffold) name.
    pub fn query_name(&self) -> &str {
        &self.query_name
    }

    /// Returns the strand of the query interval.
    pub fn query_strand(&self) -> Strand {
        self.query_strand
    }

    /// Returns the aligned query interval.
    pub fn query_interval(&self) -> (usize, usize) {
        (self.query_start, self.query_end)
    }

    /// Returns the aligned target interval.
    pub fn target_interval(&self) -> (usize, usize) {
        (self.target_start, self.target_end)
    }

    /// Returns the chain id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the length of the single alignment block of this chain.
    pub fn block_size(&self) -> usize {
        self.target_end - self.target_start
    }
}

impl std::fmt::Display for ChainRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts = [
            HEADER_PREFIX.to_string(),
            SCORE.to_string(),
            self.target_name.clone(),
            self.target_length.to_string(),
            Strand::Positive.to_string(),
            self.target_start.to_string(),
            self.target_end.to_string(),
            self.query_name.clone(),
            self.query_length.to_string(),
            self.query_strand.to_string(),
            self.query_start.to_string(),
            self.query_end.to_string(),
            self.id.to_string(),
        ];

        write!(f, "{}", parts.join(HEADER_DELIMITER.to_string().as_str()))
    }
}

/// A chain file writer.
#[derive(Debug)]
pub struct Writer<W>
where
    W: Write,
{
    /// The inner writer.
    inner: W,
}

impl<W> Writer<W>
where
    W: Write,
{
    /// Creates a chain file writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes one chain stanza: the header line, the alignment-block
    /// length, and a blank separator line.
    ///
    /// # Examples
    ///
    /// ```
    /// use assemblyfile::chain::ChainRecord;
    /// use assemblyfile::chain::Writer;
    /// use assemblyfile::strand::Strand;
    ///
    /// let record = ChainRecord::new(
    ///     "ctgA", 50, 0, 50,
    ///     "Scaffold1", 50, Strand::Positive, 0, 50,
    ///     1,
    /// );
    ///
    /// let mut writer = Writer::new(Vec::new());
    /// writer.write_record(&record)?;
    ///
    /// assert_eq!(
    ///     String::from_utf8(writer.into_inner())?,
    ///     "chain 0 ctgA 50 + 0 50 Scaffold1 50 + 0 50 1\n50\n\n"
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_record(&mut self, record: &ChainRecord) -> io::Result<()> {
        writeln!(self.inner, "{}", record)?;
        writeln!(self.inner, "{}", record.block_size())?;
        writeln!(self.inner)
    }

    /// Gets a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consumes self and returns the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
