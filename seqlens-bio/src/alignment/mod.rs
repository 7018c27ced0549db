pub mod consensus;
pub mod matrix;
pub mod naive;

pub use consensus::{consensus, Conservation, ConsensusResult};
pub use matrix::{raw_similarity, SimilarityMatrix};
pub use naive::{aligned_similarity, AlignedSequence, AlignmentResult, NaiveAligner};
