//! `assemblyfile` is a crate for converting Hi-C assembly files into
//! scaffold FASTA and liftover chain files.
//!
//! An assembly file describes how an in-progress genome assembly was
//! re-arranged during Hi-C curation: a header section of cprops lines
//! declares the contig fragments (`>label index length`), and a body
//! section lists, one scaffold per line, the signed indices of the
//! fragments that compose it (a negative index means the fragment is laid
//! in reverse complement).
//!
//! The crate provides two main points of entry:
//!
//! - Parsing and reading assembly files directly.
//! - Converting an assembly file plus its source FASTA into scaffold
//!   sequences and a liftover chain file.
//!
//! ## Parsing and reading assembly files
//!
//! If you're interested in parsing and reading assembly files directly,
//! you can use the [`Reader`] facility to accomplish that. Each line of
//! the file parses into a [`Line`]: a [cprops
//! record](crate::record::CpropsRecord), a [body
//! record](crate::record::BodyRecord), a comment, or an empty line.
//!
//! ```
//! use assemblyfile::{Line, Reader};
//!
//! let data = b">ctgA:::fragment_1 1 100\n>ctgB 2 50\n1 -2\n";
//! let mut reader = Reader::new(&data[..]);
//!
//! let mut buffer = String::new();
//! while let Some(line) = reader.read_line(&mut buffer)? {
//!     match line {
//!         Line::Cprops(record) => println!("contig {}", record.label()),
//!         Line::Body(record) => println!("{} fragments", record.references().len()),
//!         _ => {}
//!     }
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Conversion
//!
//! Most users will want [`convert::convert`], which streams an assembly
//! file once and writes one FASTA record and one group of chain stanzas
//! per scaffold. The chain records map intervals of the original contigs
//! (target) onto intervals of the output scaffolds (query), so the
//! resulting file can be handed to standard liftover tooling to migrate
//! annotations onto the curated assembly.
//!
//! ```
//! use assemblyfile::convert::convert;
//! use assemblyfile::convert::Options;
//! use assemblyfile::sequence::store::FastaStore;
//! use assemblyfile::{chain, fasta, Reader};
//!
//! let mut reader = Reader::new(&b">ctgA 1 8\n1\n"[..]);
//! let source = FastaStore::from_reader(&b">ctgA\nACGTACGT\n"[..])?;
//!
//! let mut fasta = fasta::Writer::new(Vec::new());
//! let mut chain = chain::Writer::new(Vec::new());
//!
//! let summary = convert(
//!     &mut reader,
//!     &source,
//!     &Options::default(),
//!     &mut fasta,
//!     &mut chain,
//! )?;
//!
//! assert_eq!(summary.scaffolds(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod chain;
pub mod convert;
pub mod fasta;
pub mod index;
pub mod line;
pub mod reader;
pub mod record;
pub mod scaffold;
pub mod sequence;
pub mod strand;

pub use line::Line;

pub use self::reader::Reader;
