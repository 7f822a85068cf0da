//! Random-access nucleotide sequence retrieval.
//!
//! Scaffold building needs two things from the source genome: per-contig
//! total lengths and arbitrary `[start, end)` substrings. The
//! [`SequenceSource`] trait captures that contract; [`FastaStore`] provides
//! it over an in-memory copy of a FASTA file.

use std::collections::HashMap;
use std::io::BufRead;
use std::io::{self};
use std::path::Path;

use noodles::core::Position;
use noodles::fasta;
use noodles::fasta::record::Sequence;

/// An error related to sequence retrieval.
#[derive(Debug)]
pub enum Error {
    /// The named contig does not exist in the source.
    UnknownContig(String),
    /// The requested interval falls outside of the contig.
    OutOfBounds {
        /// The name of the contig.
        name: String,
        /// The requested start position (0-based).
        start: usize,
        /// The requested end position (exclusive).
        end: usize,
        /// The total length of the contig.
        length: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownContig(name) => {
                write!(f, "unknown contig: {}", name)
            }
            Error::OutOfBounds {
                name,
                start,
                end,
                length,
            } => write!(
                f,
                "interval [{}, {}) falls outside of contig {} (length {})",
                start, end, name, length
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A random-access provider of nucleotide sequences keyed by contig name.
pub trait SequenceSource {
    /// Returns the total length of the named contig, if it exists.
    fn length(&self, name: &str) -> Option<usize>;

    /// Fetches the `[start, end)` substring (0-based, half-open) of the
    /// named contig.
    fn fetch(&self, name: &str, start: usize, end: usize) -> Result<String, Error>;
}

/// An in-memory sequence store loaded from a FASTA file.
///
/// # Examples
///
/// ```
/// use assemblyfile::sequence::store::FastaStore;
/// use assemblyfile::sequence::store::SequenceSource as _;
///
/// let data = b">ctgA\nACGTACGT\n";
/// let store = FastaStore::from_reader(&data[..])?;
///
/// assert_eq!(store.length("ctgA"), Some(8));
/// assert_eq!(store.fetch("ctgA", 2, 6)?, "GTAC");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct FastaStore {
    /// The sequences keyed by record name.
    sequences: HashMap<String, Sequence>,
}

impl FastaStore {
    /// Loads a FASTA file from a path.
    pub fn from_path<P>(path: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let mut reader = fasta::reader::Builder.build_from_path(path)?;
        Self::read_records(&mut reader)
    }

    /// Loads FASTA records from a buffered reader.
    pub fn from_reader<R>(inner: R) -> io::Result<Self>
    where
        R: BufRead,
    {
        let mut reader = fasta::Reader::new(inner);
        Self::read_records(&mut reader)
    }

    /// Drains all records from a FASTA reader into the store.
    fn read_records<R>(reader: &mut fasta::Reader<R>) -> io::Result<Self>
    where
        R: BufRead,
    {
        let mut sequences = HashMap::new();

        for result in reader.records() {
            let record = result?;
            let name = String::from_utf8_lossy(record.name()).to_string();
            sequences.insert(name, record.sequence().clone());
        }

        Ok(Self { sequences })
    }

    /// Returns the number of contigs in the store.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl SequenceSource for FastaStore {
    fn length(&self, name: &str) -> Option<usize> {
        self.sequences.get(name).map(|sequence| sequence.len())
    }

    fn fetch(&self, name: &str, start: usize, end: usize) -> Result<String, Error> {
        let sequence = self
            .sequences
            .get(name)
            .ok_or_else(|| Error::UnknownContig(name.to_string()))?;

        let out_of_bounds = || Error::OutOfBounds {
            name: name.to_string(),
            start,
            end,
            length: sequence.len(),
        };

        if start > end || end > sequence.len() {
            return Err(out_of_bounds());
        }

        if start == end {
            return Ok(String::new());
        }

        // Positions are 1-based in the noodles interval space.
        let interval_start = Position::new(start + 1).ok_or_else(out_of_bounds)?;
        let interval_end = Position::new(end).ok_or_else(out_of_bounds)?;
        let interval = noodles::core::region::Interval::from(interval_start..=interval_end);

        let slice = sequence.slice(interval).ok_or_else(out_of_bounds)?;
        Ok(String::from_utf8_lossy(slice.as_ref()).into_owned())
    }
}
