//! The contig-property index built from the header section of an assembly
//! file.
//!
//! Upstream scaffolding tools may split one origin contig into several
//! consecutive cprops rows named `<origin>:::<fragment>`. The index tracks a
//! running offset per origin name so that each property row maps back to a
//! half-open interval in the origin sequence's coordinate space.

use std::collections::HashMap;

use crate::record::CpropsRecord;

/// The separator between the origin name and the fragment parts of a
/// synthetic cprops label.
pub const ORIGIN_NAME_SEPARATOR: &str = ":::";

/// An error related to a [`ContigIndex`].
#[derive(Debug)]
pub enum Error {
    /// A cprops index was declared more than once.
    DuplicateIndex(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DuplicateIndex(index) => {
                write!(f, "duplicate cprops index: {}", index)
            }
        }
    }
}

impl std::error::Error for Error {}

/// The resolved properties of one declared contig.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContigProperty {
    /// The base identifier of the origin sequence.
    origin_name: String,
    /// The start of the contig within the origin sequence (0-based).
    origin_start: usize,
    /// The end of the contig within the origin sequence (exclusive).
    origin_end: usize,
    /// The full literal cprops label, retained for diagnostics.
    display_name: String,
}

impl ContigProperty {
    /// Returns the origin sequence name.
    pub fn origin_name(&self) -> &str {
        &self.origin_name
    }

    /// Returns the start of the contig within the origin sequence.
    pub fn origin_start(&self) -> usize {
        self.origin_start
    }

    /// Returns the end of the contig within the origin sequence.
    pub fn origin_end(&self) -> usize {
        self.origin_end
    }

    /// Returns the full literal cprops label.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// An index of contig properties keyed by cprops index.
///
/// Built once, in file order, from the header section of an assembly file;
/// read-only thereafter.
///
/// # Examples
///
/// ```
/// use assemblyfile::index::ContigIndex;
/// use assemblyfile::record::CpropsRecord;
///
/// let mut index = ContigIndex::new(false);
/// index.insert(&">ctgA:::fragment_1 1 30".parse::<CpropsRecord>()?)?;
/// index.insert(&">ctgA:::fragment_2 2 20".parse::<CpropsRecord>()?)?;
///
/// let property = index.get(2).unwrap();
/// assert_eq!(property.origin_name(), "ctgA");
/// assert_eq!(property.origin_start(), 30);
/// assert_eq!(property.origin_end(), 50);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct ContigIndex {
    /// The contig properties keyed by cprops index.
    properties: HashMap<usize, ContigProperty>,
    /// Whether cprops labels are taken literally as origin names.
    literal_names: bool,
    /// The origin name of the most recently inserted record.
    previous_origin: Option<String>,
    /// The running offset within the current origin sequence.
    running_offset: usize,
}

impl ContigIndex {
    /// Creates an empty index.
    ///
    /// When `literal_names` is true, cprops labels are used as origin names
    /// verbatim; otherwise each label is split on `:::` and the first token
    /// is taken as the origin name.
    pub fn new(literal_names: bool) -> Self {
        Self {
            properties: HashMap::new(),
            literal_names,
            previous_origin: None,
            running_offset: 0,
        }
    }

    /// Inserts the next cprops record, in header order.
    ///
    /// A record whose origin differs from the immediately preceding record
    /// resets the running offset to zero; a record with the same origin
    /// continues where the previous one ended.
    pub fn insert(&mut self, record: &CpropsRecord) -> Result<(), Error> {
        let origin_name = if self.literal_names {
            record.label().to_string()
        } else {
            // The split always yields at least one token.
            record
                .label()
                .split(ORIGIN_NAME_SEPARATOR)
                .next()
                .unwrap_or(record.label())
                .to_string()
        };

        if self.previous_origin.as_deref() != Some(origin_name.as_str()) {
            self.running_offset = 0;
        }

        if self.properties.contains_key(&record.index()) {
            return Err(Error::DuplicateIndex(record.index()));
        }

        self.properties.insert(
            record.index(),
            ContigProperty {
                origin_name: origin_name.clone(),
                origin_start: self.running_offset,
                origin_end: self.running_offset + record.length(),
                display_name: record.label().to_string(),
            },
        );

        self.running_offset += record.length();
        self.previous_origin = Some(origin_name);

        Ok(())
    }

    /// Looks up a contig property by cprops index.
    pub fn get(&self, index: usize) -> Option<&ContigProperty> {
        self.properties.get(&index)
    }

    /// Returns the number of declared contigs.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn record(s: &str) -> CpropsRecord {
        s.parse().unwrap()
    }

    #[test]
    fn test_offsets_partition_the_origin() -> Result<(), Box<dyn std::error::Error>> {
        let mut index = ContigIndex::new(false);
        index.insert(&record(">ctgA:::fragment_1 1 30"))?;
        index.insert(&record(">ctgA:::fragment_2 2 20"))?;
        index.insert(&record(">ctgA:::fragment_3 3 50"))?;

        // Consecutive rows with the same origin form a contiguous,
        // non-overlapping partition of [0, 100).
        let first = index.get(1).unwrap();
        let second = index.get(2).unwrap();
        let third = index.get(3).unwrap();

        assert_eq!((first.origin_start(), first.origin_end()), (0, 30));
        assert_eq!((second.origin_start(), second.origin_end()), (30, 50));
        assert_eq!((third.origin_start(), third.origin_end()), (50, 100));

        assert_eq!(first.origin_end(), second.origin_start());
        assert_eq!(second.origin_end(), third.origin_start());

        Ok(())
    }

    #[test]
    fn test_offset_resets_on_new_origin() -> Result<(), Box<dyn std::error::Error>> {
        let mut index = ContigIndex::new(false);
        index.insert(&record(">ctgA:::fragment_1 1 30"))?;
        index.insert(&record(">ctgB 2 40"))?;

        let property = index.get(2).unwrap();
        assert_eq!(property.origin_name(), "ctgB");
        assert_eq!(property.origin_start(), 0);
        assert_eq!(property.origin_end(), 40);

        Ok(())
    }

    #[test]
    fn test_literal_names_are_not_split() -> Result<(), Box<dyn std::error::Error>> {
        let mut index = ContigIndex::new(true);
        index.insert(&record(">ctgA:::fragment_1 1 30"))?;

        let property = index.get(1).unwrap();
        assert_eq!(property.origin_name(), "ctgA:::fragment_1");
        assert_eq!(property.display_name(), "ctgA:::fragment_1");

        Ok(())
    }

    #[test]
    fn test_display_name_keeps_the_full_label() -> Result<(), Box<dyn std::error::Error>> {
        let mut index = ContigIndex::new(false);
        index.insert(&record(">ctgA:::fragment_1:::debris 1 30"))?;

        let property = index.get(1).unwrap();
        assert_eq!(property.origin_name(), "ctgA");
        assert_eq!(property.display_name(), "ctgA:::fragment_1:::debris");

        Ok(())
    }

    #[test]
    fn test_duplicate_index() -> Result<(), Box<dyn std::error::Error>> {
        let mut index = ContigIndex::new(false);
        index.insert(&record(">ctgA 1 30"))?;

        let err = index.insert(&record(">ctgB 1 40")).unwrap_err();
        assert_eq!(err.to_string(), "duplicate cprops index: 1");

        Ok(())
    }
}
