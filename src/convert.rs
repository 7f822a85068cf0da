//! Applying an assembly file to a FASTA.
//!
//! This is the top-level driver: it streams the assembly file once, builds
//! the contig-property index from the header section, and converts each
//! body line into one scaffold, writing the scaffold FASTA record and its
//! liftover chain stanzas as it goes.
//!
//! Scaffold ordinals and chain numbers are process-wide, monotonically
//! increasing, and assigned strictly in input order, so the conversion is
//! deterministic and reproducible across runs on the same input.

use std::io::BufRead;
use std::io::Write;

use crate::chain;
use crate::chain::ChainRecord;
use crate::fasta;
use crate::index;
use crate::index::ContigIndex;
use crate::reader;
use crate::scaffold;
use crate::sequence::store;
use crate::sequence::store::SequenceSource;
use crate::Line;
use crate::Reader;

/// Options controlling a conversion.
#[derive(Clone, Debug)]
pub struct Options {
    /// Use cprops labels literally as origin names instead of splitting on
    /// the `:::` separator.
    pub literal_names: bool,
    /// The fixed length of the `N` run inserted between contigs.
    pub gap_length: usize,
    /// Trim terminal `N` runs from contigs before placing them.
    pub trim_terminal_ns: bool,
    /// The prefix for output scaffold names.
    pub scaffold_prefix: String,
    /// The minimum digit width of the scaffold ordinal suffix.
    pub zero_pad_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            literal_names: false,
            gap_length: 100,
            trim_terminal_ns: false,
            scaffold_prefix: String::from("Scaffold"),
            zero_pad_length: 1,
        }
    }
}

/// An error related to a conversion.
#[derive(Debug)]
pub enum Error {
    /// An error while reading the assembly file.
    Reader(reader::Error),

    /// An error while building the contig-property index.
    Index(index::Error),

    /// An error while building a scaffold.
    Scaffold(scaffold::Error),

    /// An I/O error while writing output.
    Io(std::io::Error),

    /// The assembly file contained a body line before any cprops line.
    MissingHeader,

    /// The assembly file ended without a single body line.
    MissingBody,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Reader(err) => write!(f, "read error: {}", err),
            Error::Index(err) => write!(f, "index error: {}", err),
            Error::Scaffold(err) => write!(f, "scaffold error: {}", err),
            Error::Io(err) => write!(f, "i/o error: {}", err),
            Error::MissingHeader => {
                write!(f, "no cprops-style assembly file header detected")
            }
            Error::MissingBody => {
                write!(f, "no asm-style assembly file body detected")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A summary of a completed conversion.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// The number of scaffolds written.
    scaffolds: usize,
    /// The number of chain records written.
    chains: usize,
}

impl Summary {
    /// Returns the number of scaffolds written.
    pub fn scaffolds(&self) -> usize {
        self.scaffolds
    }

    /// Returns the number of chain records written.
    pub fn chains(&self) -> usize {
        self.chains
    }
}

/// Converts an assembly file into scaffold FASTA records and liftover
/// chain stanzas.
///
/// The header section must precede the first body line, and the body
/// section must be non-empty; either condition failing is a malformed-file
/// error. The "no body" check is deferred until end-of-file because the
/// body may legitimately follow an arbitrary number of cprops lines.
///
/// # Examples
///
/// ```
/// use assemblyfile::convert::convert;
/// use assemblyfile::convert::Options;
/// use assemblyfile::sequence::store::FastaStore;
/// use assemblyfile::{chain, fasta, Reader};
///
/// let assembly = b">ctgA:::fragment_1 1 4\n>ctgB 2 4\n1 -2\n";
/// let mut reader = Reader::new(&assembly[..]);
///
/// let source = FastaStore::from_reader(&b">ctgA\nACGG\n>ctgB\nTTCA\n"[..])?;
///
/// let options = Options {
///     gap_length: 0,
///     ..Default::default()
/// };
///
/// let mut fasta = fasta::Writer::new(Vec::new());
/// let mut chain = chain::Writer::new(Vec::new());
///
/// let summary = convert(&mut reader, &source, &options, &mut fasta, &mut chain)?;
/// assert_eq!(summary.scaffolds(), 1);
/// assert_eq!(summary.chains(), 2);
///
/// assert_eq!(
///     String::from_utf8(fasta.into_inner())?,
///     ">Scaffold1\nACGGTGAA\n\n"
/// );
/// assert_eq!(
///     String::from_utf8(chain.into_inner())?,
///     "chain 0 ctgA 4 + 0 4 Scaffold1 8 + 0 4 1\n4\n\n\
///      chain 0 ctgB 4 + 0 4 Scaffold1 8 - 0 4 2\n4\n\n"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert<R, S, F, C>(
    reader: &mut Reader<R>,
    source: &S,
    options: &Options,
    fasta: &mut fasta::Writer<F>,
    chain: &mut chain::Writer<C>,
) -> Result<Summary, Error>
where
    R: BufRead,
    S: SequenceSource,
    F: Write,
    C: Write,
{
    let mut index = ContigIndex::new(options.literal_names);

    let mut seen_body = false;
    let mut ordinal = 0;
    let mut next_chain_number = 1;

    let mut buffer = String::new();

    while let Some(line) = reader.read_line(&mut buffer).map_err(Error::Reader)? {
        match line {
            Line::Empty | Line::Comment(_) => {}
            Line::Cprops(record) => {
                index.insert(&record).map_err(Error::Index)?;
            }
            Line::Body(record) => {
                if index.is_empty() {
                    return Err(Error::MissingHeader);
                }

                seen_body = true;
                ordinal += 1;

                let scaffold = scaffold::build(
                    &record,
                    ordinal,
                    next_chain_number,
                    &index,
                    source,
                    options,
                )
                .map_err(Error::Scaffold)?;

                next_chain_number += scaffold.placements().len();

                for placement in scaffold.placements() {
                    let target_length = source.length(placement.contig_name()).ok_or_else(|| {
                        Error::Scaffold(scaffold::Error::Source(store::Error::UnknownContig(
                            placement.contig_name().to_string(),
                        )))
                    })?;

                    let record = ChainRecord::from_placement(placement, &scaffold, target_length);
                    chain.write_record(&record).map_err(Error::Io)?;
                }

                fasta
                    .write_record(scaffold.name(), scaffold.sequence())
                    .map_err(Error::Io)?;
            }
        }
    }

    if !seen_body {
        return Err(Error::MissingBody);
    }

    Ok(Summary {
        scaffolds: ordinal,
        chains: next_chain_number - 1,
    })
}
