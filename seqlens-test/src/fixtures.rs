//! Test fixtures and data generators

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Titled test sequence
#[derive(Debug, Clone, PartialEq)]
pub struct TestSequence {
    pub title: String,
    pub sequence: String,
}

impl TestSequence {
    pub fn new(title: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sequence: sequence.into(),
        }
    }

    /// Convert to FASTA format
    pub fn to_fasta(&self) -> String {
        format!(">{}\n{}\n", self.title, self.sequence)
    }
}

/// Generate random DNA sequences
pub fn generate_sequences(count: usize, length: usize) -> Vec<TestSequence> {
    let mut rng = StdRng::seed_from_u64(42); // Deterministic for tests
    let bases = ['A', 'T', 'G', 'C'];

    (0..count)
        .map(|i| {
            let sequence: String = (0..length).map(|_| bases[rng.gen_range(0..4)]).collect();
            TestSequence::new(format!("seq_{}", i), sequence)
        })
        .collect()
}

/// Generate sequences of varying lengths derived from one reference
///
/// Sequence `i` is the reference truncated to `min_length + i * step` with
/// roughly `mutation_rate` of its positions substituted.
pub fn generate_related_sequences(
    count: usize,
    min_length: usize,
    step: usize,
    mutation_rate: f64,
) -> Vec<TestSequence> {
    let mut rng = StdRng::seed_from_u64(7);
    let bases = ['A', 'T', 'G', 'C'];
    let max_length = min_length + count.saturating_sub(1) * step;
    let reference: Vec<char> = (0..max_length).map(|_| bases[rng.gen_range(0..4)]).collect();

    (0..count)
        .map(|i| {
            let length = min_length + i * step;
            let sequence: String = reference[..length]
                .iter()
                .map(|&base| {
                    if rng.gen::<f64>() < mutation_rate {
                        bases[rng.gen_range(0..4)]
                    } else {
                        base
                    }
                })
                .collect();
            TestSequence::new(format!("variant_{}", i), sequence)
        })
        .collect()
}

/// Create FASTA file content from test sequences
pub fn create_test_fasta(sequences: &[TestSequence]) -> String {
    sequences.iter().map(TestSequence::to_fasta).collect()
}

/// A small hand-written panel with known properties
///
/// Lengths 5, 8 and 3; the first columns agree, later ones diverge.
pub fn sample_panel() -> Vec<TestSequence> {
    vec![
        TestSequence::new("Gen TP53 humano", "ACGTA"),
        TestSequence::new("Gen TP53 raton", "ACGTTGCA"),
        TestSequence::new("fragmento", "acg"),
    ]
}
