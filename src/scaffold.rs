//! Scaffold building.
//!
//! One assembly body line yields one scaffold: the referenced contigs are
//! concatenated in order, each on its requested strand, with a fixed-length
//! run of `N`s between consecutive kept contigs. Alongside the sequence,
//! the builder records one [`Placement`] per kept contig so that a liftover
//! chain record can later be derived from it.

use tracing::trace;

use crate::convert::Options;
use crate::index::ContigIndex;
use crate::record::BodyRecord;
use crate::sequence;
use crate::sequence::store;
use crate::sequence::store::SequenceSource;
use crate::strand::Strand;

/// An error related to scaffold building.
#[derive(Debug)]
pub enum Error {
    /// A body line referenced an index that was never declared in the
    /// header section.
    UnknownIndex(usize),

    /// A sequence retrieval error.
    Source(store::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownIndex(index) => {
                write!(f, "body line references undeclared contig index {}", index)
            }
            Error::Source(err) => write!(f, "sequence retrieval error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

/// The placement of one contig within a scaffold.
///
/// Coordinates are recorded assuming a forward scaffold layout; the
/// reverse-strand query flip is applied later, when the chain record is
/// derived (see [`crate::chain::ChainRecord::from_placement`]).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    /// The origin contig name.
    contig_name: String,
    /// The start of the placed interval within the origin contig (post-trim).
    contig_start: usize,
    /// The end of the placed interval within the origin contig (post-trim).
    contig_end: usize,
    /// The strand on which the contig was laid into the scaffold.
    strand: Strand,
    /// The start of the placement in scaffold coordinates.
    scaffold_start: usize,
    /// The end of the placement in scaffold coordinates.
    scaffold_end: usize,
    /// The globally unique chain number assigned to this placement.
    chain_number: usize,
}

impl Placement {
    /// Returns the origin contig name.
    pub fn contig_name(&self) -> &str {
        &self.contig_name
    }

    /// Returns the start of the placed interval within the origin contig.
    pub fn contig_start(&self) -> usize {
        self.contig_start
    }

    /// Returns the end of the placed interval within the origin contig.
    pub fn contig_end(&self) -> usize {
        self.contig_end
    }

    /// Returns the strand of the placement.
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Returns the start of the placement in scaffold coordinates.
    pub fn scaffold_start(&self) -> usize {
        self.scaffold_start
    }

    /// Returns the end of the placement in scaffold coordinates.
    pub fn scaffold_end(&self) -> usize {
        self.scaffold_end
    }

    /// Returns the chain number assigned to this placement.
    pub fn chain_number(&self) -> usize {
        self.chain_number
    }
}

/// A fully built scaffold.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scaffold {
    /// The scaffold name (prefix plus zero-padded ordinal).
    name: String,
    /// The 1-based ordinal of the scaffold.
    ordinal: usize,
    /// The scaffold sequence, gaps included.
    sequence: String,
    /// The ordered placements of the scaffold.
    placements: Vec<Placement>,
}

impl Scaffold {
    /// Returns the scaffold name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the 1-based ordinal of the scaffold.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Returns the scaffold sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Returns the ordered placements of the scaffold.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns the total length of the scaffold.
    ///
    /// The total length is the scaffold-space end of the final kept
    /// placement; a trailing gap is never counted. An empty scaffold has
    /// length zero.
    pub fn length(&self) -> usize {
        self.placements
            .last()
            .map(|placement| placement.scaffold_end())
            .unwrap_or_default()
    }
}

/// Builds one scaffold from a body record.
///
/// `first_chain_number` is the next unassigned value of the global chain
/// counter; the kept placements are numbered consecutively from it, in
/// body-line order. Contigs that are entirely `N` under terminal-N trimming
/// are dropped: they contribute no sequence, no placement, and no chain
/// number.
pub fn build<S>(
    record: &BodyRecord,
    ordinal: usize,
    first_chain_number: usize,
    index: &ContigIndex,
    source: &S,
    options: &Options,
) -> Result<Scaffold, Error>
where
    S: SequenceSource,
{
    let name = format!(
        "{}{:0width$}",
        options.scaffold_prefix,
        ordinal,
        width = options.zero_pad_length
    );

    let gap = "N".repeat(options.gap_length);

    let mut sequence = String::new();
    let mut placements: Vec<Placement> = Vec::new();
    let mut cursor = 0;
    let mut chain_number = first_chain_number;

    for reference in record.references() {
        let property = index
            .get(reference.index())
            .ok_or(Error::UnknownIndex(reference.index()))?;

        let raw = source
            .fetch(
                property.origin_name(),
                property.origin_start(),
                property.origin_end(),
            )
            .map_err(Error::Source)?;

        let (contig_sequence, contig_start, contig_end) = if options.trim_terminal_ns {
            match sequence::trim_terminal_ns(&raw) {
                Some(trimmed) => (
                    trimmed.sequence().to_string(),
                    property.origin_start() + trimmed.leading(),
                    property.origin_end() - trimmed.trailing(),
                ),
                None => {
                    trace!(
                        "{}: dropping {}: contig is entirely N",
                        name,
                        property.display_name()
                    );
                    continue;
                }
            }
        } else {
            (raw, property.origin_start(), property.origin_end())
        };

        let contig_sequence = match reference.strand() {
            Strand::Positive => contig_sequence,
            Strand::Negative => sequence::reverse_complement(&contig_sequence),
        };

        let scaffold_start = cursor;
        let scaffold_end = scaffold_start + (contig_end - contig_start);

        if !placements.is_empty() {
            sequence.push_str(&gap);
        }
        sequence.push_str(&contig_sequence);

        trace!(
            "{}: placing {} ({}) at [{}, {})",
            name,
            property.display_name(),
            reference.strand(),
            scaffold_start,
            scaffold_end
        );

        placements.push(Placement {
            contig_name: property.origin_name().to_string(),
            contig_start,
            contig_end,
            strand: reference.strand(),
            scaffold_start,
            scaffold_end,
            chain_number,
        });

        chain_number += 1;
        cursor = scaffold_end + options.gap_length;
    }

    Ok(Scaffold {
        name,
        ordinal,
        sequence,
        placements,
    })
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::sequence::store::FastaStore;

    fn index() -> ContigIndex {
        let mut index = ContigIndex::new(false);
        for line in [">ctgA 1 30", ">ctgB 2 30", ">ctgC 3 8"] {
            index.insert(&line.parse().unwrap()).unwrap();
        }
        index
    }

    fn source() -> FastaStore {
        let data = b"\
>ctgA
AAAAAAAAAACCCCCCCCCCGGGGGGGGGG
>ctgB
ACGTACGTACGTACGTACGTACGTACGTAC
>ctgC
NNACGTNN
";
        FastaStore::from_reader(&data[..]).unwrap()
    }

    #[test]
    fn test_building_a_forward_scaffold() -> Result<(), Box<dyn std::error::Error>> {
        let record = "1".parse()?;
        let options = Options {
            gap_length: 0,
            ..Default::default()
        };

        let scaffold = build(&record, 1, 1, &index(), &source(), &options)?;

        assert_eq!(scaffold.name(), "Scaffold1");
        assert_eq!(scaffold.ordinal(), 1);
        assert_eq!(scaffold.length(), 30);
        assert_eq!(scaffold.sequence(), "AAAAAAAAAACCCCCCCCCCGGGGGGGGGG");

        let placements = scaffold.placements();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].contig_name(), "ctgA");
        assert_eq!(placements[0].contig_start(), 0);
        assert_eq!(placements[0].contig_end(), 30);
        assert_eq!(placements[0].scaffold_start(), 0);
        assert_eq!(placements[0].scaffold_end(), 30);
        assert_eq!(placements[0].chain_number(), 1);

        Ok(())
    }

    #[test]
    fn test_building_a_mixed_orientation_scaffold() -> Result<(), Box<dyn std::error::Error>> {
        let record = "1 -2".parse()?;
        let options = Options {
            gap_length: 10,
            ..Default::default()
        };

        let scaffold = build(&record, 1, 1, &index(), &source(), &options)?;

        // 30 + 10 + 30; the trailing gap is never counted.
        assert_eq!(scaffold.length(), 70);
        assert_eq!(scaffold.sequence().len(), 70);
        assert_eq!(
            scaffold.sequence(),
            "AAAAAAAAAACCCCCCCCCCGGGGGGGGGG\
             NNNNNNNNNN\
             GTACGTACGTACGTACGTACGTACGTACGT"
        );

        let placements = scaffold.placements();
        assert_eq!(placements.len(), 2);

        assert_eq!(placements[1].strand(), Strand::Negative);
        assert_eq!(placements[1].scaffold_start(), 40);
        assert_eq!(placements[1].scaffold_end(), 70);
        assert_eq!(placements[1].chain_number(), 2);

        Ok(())
    }

    #[test]
    fn test_trimming_adjusts_the_placed_interval() -> Result<(), Box<dyn std::error::Error>> {
        // ctgC is NNACGTNN; trimming keeps ACGT and narrows the origin
        // interval accordingly.
        let record = "3".parse()?;
        let options = Options {
            trim_terminal_ns: true,
            ..Default::default()
        };

        let scaffold = build(&record, 1, 1, &index(), &source(), &options)?;
        assert_eq!(scaffold.length(), 4);

        let placements = scaffold.placements();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].contig_start(), 2);
        assert_eq!(placements[0].contig_end(), 6);
        assert_eq!(scaffold.sequence(), "ACGT");

        Ok(())
    }

    #[test]
    fn test_a_dropped_contig_leaves_no_trace() -> Result<(), Box<dyn std::error::Error>> {
        let mut index = ContigIndex::new(false);
        index.insert(&">ctgN 1 6".parse().unwrap()).unwrap();
        index.insert(&">ctgD 2 4".parse().unwrap()).unwrap();

        let data = b">ctgN\nNNNNNN\n>ctgD\nACGT\n";
        let source = FastaStore::from_reader(&data[..]).unwrap();

        let record = "1 2".parse()?;
        let options = Options {
            gap_length: 5,
            trim_terminal_ns: true,
            ..Default::default()
        };

        let scaffold = build(&record, 1, 1, &index, &source, &options)?;

        // The dropped contig contributes no sequence, no gap, no chain
        // number: ctgD is the first kept contig and takes chain number 1.
        assert_eq!(scaffold.length(), 4);
        assert_eq!(scaffold.sequence(), "ACGT");
        assert_eq!(scaffold.placements().len(), 1);
        assert_eq!(scaffold.placements()[0].contig_name(), "ctgD");
        assert_eq!(scaffold.placements()[0].chain_number(), 1);
        assert_eq!(scaffold.placements()[0].scaffold_start(), 0);

        Ok(())
    }

    #[test]
    fn test_an_entirely_dropped_body_line() -> Result<(), Box<dyn std::error::Error>> {
        let mut index = ContigIndex::new(false);
        index.insert(&">ctgN 1 6".parse().unwrap()).unwrap();

        let data = b">ctgN\nNNNNNN\n";
        let source = FastaStore::from_reader(&data[..]).unwrap();

        let record = "1".parse()?;
        let options = Options {
            trim_terminal_ns: true,
            ..Default::default()
        };

        let scaffold = build(&record, 3, 7, &index, &source, &options)?;

        assert_eq!(scaffold.length(), 0);
        assert_eq!(scaffold.sequence(), "");
        assert!(scaffold.placements().is_empty());
        assert_eq!(scaffold.ordinal(), 3);

        Ok(())
    }

    #[test]
    fn test_unknown_index() -> Result<(), Box<dyn std::error::Error>> {
        let record = "9".parse()?;
        let options = Options::default();

        let err = build(&record, 1, 1, &index(), &source(), &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "body line references undeclared contig index 9"
        );

        Ok(())
    }

    #[test]
    fn test_scaffold_name_zero_padding() -> Result<(), Box<dyn std::error::Error>> {
        let record = "1".parse()?;
        let options = Options {
            scaffold_prefix: String::from("HiC_scaffold_"),
            zero_pad_length: 4,
            ..Default::default()
        };

        let scaffold = build(&record, 7, 1, &index(), &source(), &options)?;
        assert_eq!(scaffold.name(), "HiC_scaffold_0007");

        Ok(())
    }
}
