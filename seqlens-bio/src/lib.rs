//! Sequence analysis for seqlens
//!
//! Every analysis here is a pure function over an in-memory record set:
//! nothing is cached between calls and no I/O happens outside [`fasta`].

pub mod alignment;
pub mod alphabet;
pub mod composition;
pub mod distance;
pub mod fasta;
pub mod motif;
pub mod sequence;

// Re-export commonly used types
pub use alignment::{AlignmentResult, ConsensusResult, NaiveAligner, SimilarityMatrix};
pub use alphabet::{Motif, Nucleotide, GAP};
pub use composition::{CollectionSummary, Composition};
pub use distance::{DistanceMatrix, DistanceMethod, DistanceRequest};
pub use motif::MotifMatch;
pub use sequence::SequenceRecord;
// Re-export fasta functions
pub use fasta::{parse_fasta, parse_fasta_str, to_fasta_string, write_fasta};
