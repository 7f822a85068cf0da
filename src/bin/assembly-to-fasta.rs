//! A binary to convert a Hi-C assembly file into scaffold FASTA and
//! liftover chain files.
//!
//! ```shell
//! cargo run --release --bin=assembly-to-fasta genome.assembly draft.fasta out
//! ```
//!
//! This writes `out.fasta`, the scaffold-level sequences, and `out.chain`,
//! a UCSC chain file mapping intervals of the original contigs onto the
//! output scaffolds.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write as _;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use assemblyfile::chain;
use assemblyfile::convert::convert;
use assemblyfile::convert::Options;
use assemblyfile::fasta;
use assemblyfile::sequence::store::FastaStore;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

/// Converts a Hi-C assembly file into scaffold FASTA and liftover chain files.
#[derive(Parser)]
struct Args {
    /// The assembly file describing the curated scaffolds (may be gzipped).
    assembly: PathBuf,

    /// The FASTA file holding the original contig sequences.
    fasta: PathBuf,

    /// The prefix for the output files (`<prefix>.fasta` and `<prefix>.chain`).
    output_prefix: String,

    /// Use cprops labels literally as sequence names instead of splitting
    /// off the part before the `:::` separator.
    #[arg(short = 'c', long)]
    cprops_names: bool,

    /// The number of `N`s inserted between contigs within a scaffold.
    #[arg(short, long, default_value_t = 100)]
    gap_length: usize,

    /// Trim leading and trailing runs of `N` from each contig; contigs that
    /// are entirely `N` are dropped.
    #[arg(short = 'N', long = "trim-terminal-ns")]
    trim_terminal_ns: bool,

    /// The prefix for output scaffold names.
    #[arg(short, long, default_value = "Scaffold")]
    scaffold_prefix: String,

    /// The minimum digit width of the scaffold ordinal suffix (padded with
    /// zeros).
    #[arg(short, long, default_value_t = 1)]
    zero_pad_length: usize,

    /// The line width for wrapped FASTA output (`0` disables wrapping).
    #[arg(short = 'w', long, default_value_t = 100)]
    line_width: usize,

    #[command(flatten)]
    verbose: Verbosity,
}

/// Opens the assembly file, transparently decompressing gzip input.
fn open_assembly(path: &Path) -> Result<Box<dyn BufRead>> {
    let file =
        File::open(path).with_context(|| format!("opening assembly file {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn run(args: &Args) -> Result<()> {
    let mut reader = open_assembly(&args.assembly).map(assemblyfile::Reader::new)?;

    info!("loading sequences from {}", args.fasta.display());
    let source = FastaStore::from_path(&args.fasta)
        .with_context(|| format!("reading FASTA file {}", args.fasta.display()))?;
    info!("loaded {} sequences", source.len());

    let options = Options {
        literal_names: args.cprops_names,
        gap_length: args.gap_length,
        trim_terminal_ns: args.trim_terminal_ns,
        scaffold_prefix: args.scaffold_prefix.clone(),
        zero_pad_length: args.zero_pad_length,
    };

    let line_width = match args.line_width {
        0 => None,
        width => Some(width),
    };

    let fasta_path = format!("{}.fasta", args.output_prefix);
    let chain_path = format!("{}.chain", args.output_prefix);

    let mut fasta_writer = File::create(&fasta_path)
        .map(BufWriter::new)
        .map(|inner| fasta::Writer::with_width(inner, line_width))
        .with_context(|| format!("creating {}", fasta_path))?;

    let mut chain_writer = File::create(&chain_path)
        .map(BufWriter::new)
        .map(chain::Writer::new)
        .with_context(|| format!("creating {}", chain_path))?;

    let summary = convert(
        &mut reader,
        &source,
        &options,
        &mut fasta_writer,
        &mut chain_writer,
    )
    .with_context(|| format!("converting {}", args.assembly.display()))?;

    fasta_writer
        .into_inner()
        .flush()
        .with_context(|| format!("flushing {}", fasta_path))?;
    chain_writer
        .into_inner()
        .flush()
        .with_context(|| format!("flushing {}", chain_path))?;

    info!(
        "wrote {} scaffolds and {} chain records",
        summary.scaffolds(),
        summary.chains()
    );

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    run(&args)
}
