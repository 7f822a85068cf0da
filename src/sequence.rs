//! Nucleotide sequence transforms.
//!
//! Contigs pulled out of the source FASTA may need two adjustments before
//! they are laid into a scaffold: trimming of terminal ambiguous-base runs
//! (when enabled) and reverse-complementation (when the assembly places the
//! contig on the negative strand).

pub mod store;

use std::sync::LazyLock;

use regex::Regex;

/// A maximal leading run of `N`/`n`. This pattern always matches, possibly
/// against the empty string.
static LEADING_NS: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[Nn]*").unwrap());

/// A maximal trailing run of `N`/`n`. This pattern always matches, possibly
/// against the empty string.
static TRAILING_NS: LazyLock<Regex> = LazyLock::new(|| Regex::new("[Nn]*$").unwrap());

/// Returns the complement of a single nucleotide byte.
///
/// The table covers the standard bases and the IUPAC ambiguity codes, both
/// cases, with `U`/`u` complementing to `A`/`a`. Bytes outside the table
/// pass through unchanged.
///
/// # Examples
///
/// ```
/// use assemblyfile::sequence::complement;
///
/// assert_eq!(complement(b'A'), b'T');
/// assert_eq!(complement(b'g'), b'c');
/// assert_eq!(complement(b'N'), b'N');
/// assert_eq!(complement(b'-'), b'-');
/// ```
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'a' => b't',
        b'B' => b'V',
        b'b' => b'v',
        b'C' => b'G',
        b'c' => b'g',
        b'D' => b'H',
        b'd' => b'h',
        b'G' => b'C',
        b'g' => b'c',
        b'H' => b'D',
        b'h' => b'd',
        b'K' => b'M',
        b'k' => b'm',
        b'M' => b'K',
        b'm' => b'k',
        b'N' => b'N',
        b'n' => b'n',
        b'R' => b'Y',
        b'r' => b'y',
        b'S' => b'W',
        b's' => b'w',
        b'T' => b'A',
        b't' => b'a',
        b'U' => b'A',
        b'u' => b'a',
        b'V' => b'B',
        b'v' => b'b',
        b'W' => b'S',
        b'w' => b's',
        b'Y' => b'R',
        b'y' => b'r',
        other => other,
    }
}

/// Reverse-complements a nucleotide sequence.
///
/// # Examples
///
/// ```
/// use assemblyfile::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement("ACGT"), "ACGT");
/// assert_eq!(reverse_complement("AACC"), "GGTT");
/// assert_eq!(reverse_complement("acgNt"), "aNcgt");
/// ```
pub fn reverse_complement(sequence: &str) -> String {
    sequence
        .chars()
        .rev()
        .map(|c| {
            if c.is_ascii() {
                complement(c as u8) as char
            } else {
                c
            }
        })
        .collect()
}

/// The result of trimming terminal `N` runs from a contig sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrimmedContig<'a> {
    /// The sequence with terminal `N` runs removed.
    sequence: &'a str,
    /// The number of leading bases removed.
    leading: usize,
    /// The number of trailing bases removed.
    trailing: usize,
}

impl<'a> TrimmedContig<'a> {
    /// Returns the trimmed sequence.
    pub fn sequence(&self) -> &'a str {
        self.sequence
    }

    /// Returns the number of leading bases removed.
    pub fn leading(&self) -> usize {
        self.leading
    }

    /// Returns the number of trailing bases removed.
    pub fn trailing(&self) -> usize {
        self.trailing
    }
}

/// Trims maximal terminal runs of `N`/`n` from a contig sequence.
///
/// Returns [`None`] when the contig consists entirely of `N`s (including
/// the empty sequence); such a contig carries no usable sequence and is
/// dropped from its scaffold by the caller.
///
/// # Examples
///
/// ```
/// use assemblyfile::sequence::trim_terminal_ns;
///
/// let trimmed = trim_terminal_ns("NNACGTn").unwrap();
/// assert_eq!(trimmed.sequence(), "ACGT");
/// assert_eq!(trimmed.leading(), 2);
/// assert_eq!(trimmed.trailing(), 1);
///
/// assert!(trim_terminal_ns("NNNN").is_none());
/// ```
pub fn trim_terminal_ns(sequence: &str) -> Option<TrimmedContig<'_>> {
    // Both searches always succeed, possibly matching empty strings.
    let leading = LEADING_NS
        .find(sequence)
        .map(|m| m.len())
        .unwrap_or_default();
    let trailing = TRAILING_NS
        .find(sequence)
        .map(|m| m.len())
        .unwrap_or_default();

    if leading + trailing >= sequence.len() {
        return None;
    }

    Some(TrimmedContig {
        sequence: &sequence[leading..sequence.len() - trailing],
        leading,
        trailing,
    })
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement_is_an_involution() {
        let sequence = "ACGTTGCAAGGCCT";
        assert_eq!(reverse_complement(&reverse_complement(sequence)), sequence);
    }

    #[test]
    fn test_reverse_complement_of_ambiguity_codes() {
        assert_eq!(reverse_complement("RYSWKMBDHVN"), "NBDHVKMSWRY");
        assert_eq!(reverse_complement("ryswkmbdhvn"), "nbdhvkmswry");
    }

    #[test]
    fn test_uracil_complements_to_adenine() {
        assert_eq!(reverse_complement("UU"), "AA");
        assert_eq!(reverse_complement("uu"), "aa");
    }

    #[test]
    fn test_unrecognized_bytes_pass_through() {
        assert_eq!(reverse_complement("AC-GT"), "AC-GT");
        assert_eq!(reverse_complement("A*T"), "A*T");
    }

    #[test]
    fn test_trimming_terminal_ns() {
        let trimmed = trim_terminal_ns("NNNACGTNACGTnn").unwrap();
        assert_eq!(trimmed.sequence(), "ACGTNACGT");
        assert_eq!(trimmed.leading(), 3);
        assert_eq!(trimmed.trailing(), 2);
    }

    #[test]
    fn test_trimming_leaves_inner_ns_alone() {
        let trimmed = trim_terminal_ns("ANNA").unwrap();
        assert_eq!(trimmed.sequence(), "ANNA");
        assert_eq!(trimmed.leading(), 0);
        assert_eq!(trimmed.trailing(), 0);
    }

    #[test]
    fn test_trimming_an_all_n_contig() {
        assert!(trim_terminal_ns("NNNN").is_none());
        assert!(trim_terminal_ns("nNnN").is_none());
        assert!(trim_terminal_ns("N").is_none());
        assert!(trim_terminal_ns("").is_none());
    }
}
