//! All-pairs similarity over the raw, unpadded sequences
//!
//! This is not the gap-aware similarity of [`super::naive`]: records are
//! compared position by position over their shared prefix length only.

use crate::sequence::SequenceRecord;
use serde::{Deserialize, Serialize};

/// Percent of identical positions over `min(len_a, len_b)`
///
/// `None` when either sequence is empty.
pub fn raw_similarity(first: &[u8], second: &[u8]) -> Option<f64> {
    let overlap = first.len().min(second.len());
    if overlap == 0 {
        return None;
    }

    let identical = first
        .iter()
        .zip(second.iter())
        .filter(|(a, b)| a.eq_ignore_ascii_case(b))
        .count();

    Some(identical as f64 / overlap as f64 * 100.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    pub titles: Vec<String>,
    /// Row-major percentages; the diagonal is always 100
    pub cells: Vec<Vec<Option<f64>>>,
}

impl SimilarityMatrix {
    pub fn compute(records: &[SequenceRecord]) -> Self {
        let cells = records
            .iter()
            .enumerate()
            .map(|(i, a)| {
                records
                    .iter()
                    .enumerate()
                    .map(|(j, b)| {
                        if i == j {
                            Some(100.0)
                        } else {
                            raw_similarity(&a.sequence, &b.sequence)
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            titles: records.iter().map(|r| r.title.clone()).collect(),
            cells,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, seq: &str) -> SequenceRecord {
        SequenceRecord::new(title.to_string(), seq.as_bytes().to_vec())
    }

    #[test]
    fn test_raw_similarity_uses_shared_prefix() {
        assert_eq!(raw_similarity(b"ACGT", b"ACGTTTTT"), Some(100.0));
        assert_eq!(raw_similarity(b"ACGT", b"acga"), Some(75.0));
        assert_eq!(raw_similarity(b"", b"ACGT"), None);
    }

    #[test]
    fn test_diagonal_is_always_100() {
        let records = vec![record("a", "ACGT"), record("empty", ""), record("c", "TTTT")];
        let matrix = SimilarityMatrix::compute(&records);
        for i in 0..matrix.len() {
            assert_eq!(matrix.get(i, i), Some(100.0));
        }
        assert_eq!(matrix.get(0, 1), None);
        assert_eq!(matrix.get(0, 2), Some(25.0));
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let records = vec![record("a", "ACGTAC"), record("b", "ACG"), record("c", "TCGTA")];
        let matrix = SimilarityMatrix::compute(&records);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }
}
