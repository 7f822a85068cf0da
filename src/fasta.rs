//! A wrapping FASTA writer.

use std::io::Write;
use std::io::{self};

/// The default line width for wrapped FASTA output.
pub const DEFAULT_LINE_WIDTH: usize = 100;

/// A FASTA writer that wraps sequences at a fixed width.
#[derive(Debug)]
pub struct Writer<W>
where
    W: Write,
{
    /// The inner writer.
    inner: W,
    /// The line width; [`None`] (or zero) emits each sequence on one line.
    width: Option<usize>,
}

impl<W> Writer<W>
where
    W: Write,
{
    /// Creates a FASTA writer wrapping at the default width.
    pub fn new(inner: W) -> Self {
        Self::with_width(inner, Some(DEFAULT_LINE_WIDTH))
    }

    /// Creates a FASTA writer wrapping at the provided width.
    ///
    /// A width of [`None`] or `Some(0)` disables wrapping.
    pub fn with_width(inner: W, width: Option<usize>) -> Self {
        Self { inner, width }
    }

    /// Writes one named sequence as a FASTA record.
    ///
    /// The record consists of the `>`-prefixed name line, the sequence
    /// split into fixed-width lines (the final line may be shorter), and a
    /// trailing blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use assemblyfile::fasta::Writer;
    ///
    /// let mut writer = Writer::with_width(Vec::new(), Some(4));
    /// writer.write_record("Scaffold1", "ACGTACGTAC")?;
    ///
    /// assert_eq!(
    ///     String::from_utf8(writer.into_inner())?,
    ///     ">Scaffold1\nACGT\nACGT\nAC\n\n"
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_record(&mut self, name: &str, sequence: &str) -> io::Result<()> {
        writeln!(self.inner, ">{}", name)?;

        match self.width {
            Some(width) if width > 0 => {
                for chunk in sequence.as_bytes().chunks(width) {
                    self.inner.write_all(chunk)?;
                    self.inner.write_all(b"\n")?;
                }
            }
            _ => {
                if !sequence.is_empty() {
                    writeln!(self.inner, "{}", sequence)?;
                }
            }
        }

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

#[cfg(test)]
pub mod tests {
    use super::*;

    fn write(width: Option<usize>, name: &str, sequence: &str) -> String {
        let mut writer = Writer::with_width(Vec::new(), width);
        writer.write_record(name, sequence).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_wrapping_at_a_fixed_width() {
        assert_eq!(
            write(Some(4), "Scaffold1", "ACGTACGTAC"),
            ">Scaffold1\nACGT\nACGT\nAC\n\n"
        );
    }

    #[test]
    fn test_an_exact_multiple_of_the_width() {
        assert_eq!(
            write(Some(4), "Scaffold1", "ACGTACGT"),
            ">Scaffold1\nACGT\nACGT\n\n"
        );
    }

    #[test]
    fn test_unwrapped_output() {
        assert_eq!(
            write(None, "Scaffold1", "ACGTACGTAC"),
            ">Scaffold1\nACGTACGTAC\n\n"
        );
        assert_eq!(
            write(Some(0), "Scaffold1", "ACGTACGTAC"),
            ">Scaffold1\nACGTACGTAC\n\n"
        );
    }

    #[test]
    fn test_an_empty_sequence() {
        assert_eq!(write(Some(4), "Scaffold1", ""), ">Scaffold1\n\n");
    }

    #[test]
    fn test_unwrapping_reproduces_the_sequence() {
        let sequence = "ACGT".repeat(60);
        let out = write(Some(100), "Scaffold1", &sequence);

        let unwrapped = out
            .lines()
            .skip(1)
            .filter(|line| !line.is_empty())
            .collect::<String>();
        assert_eq!(unwrapped, sequence);
    }
}
