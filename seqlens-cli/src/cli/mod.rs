pub mod commands;
pub mod input;
pub mod output;
pub mod visualize;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqlens",
    version,
    about = "Composition, distance, motif and alignment analysis for DNA sequences",
    long_about = "Seqlens analyses small sets of nucleotide sequences loaded from FASTA files \
                  or typed on the command line: base composition, pairwise distances, motif \
                  occurrences, a gap-padded alignment with consensus, and FASTA export."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $SEQLENS_HOME/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "SEQLENS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show base composition of every sequence and of the whole set
    Stats(commands::stats::StatsArgs),

    /// Show a colour-coded preview of one sequence
    View(commands::view::ViewArgs),

    /// Compute the distance between two sequences
    Distance(commands::distance::DistanceArgs),

    /// Find every occurrence of a motif
    Motif(commands::motif::MotifArgs),

    /// Pad sequences to a common length and build a consensus
    Align(commands::align::AlignArgs),

    /// All-pairs similarity matrix over the raw sequences
    Matrix(commands::matrix::MatrixArgs),

    /// Write sequences as FASTA
    Export(commands::export::ExportArgs),

    /// Manage stored sequence pairs
    Pairs(commands::pairs::PairsArgs),

    /// Show or create the configuration file
    Config(commands::config::ConfigArgs),
}
