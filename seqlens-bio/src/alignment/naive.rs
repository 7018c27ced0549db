//! Naive multiple alignment by right-padding every record with gaps
//!
//! There is no scoring and no gap placement: every sequence keeps its
//! bases at their original offsets and is extended with [`GAP`] up to the
//! length of the longest record.

use crate::alphabet::GAP;
use crate::sequence::SequenceRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedSequence {
    pub title: String,
    /// Uppercase sequence right-padded with gaps
    #[serde(with = "padded_text")]
    pub padded: Vec<u8>,
    pub original_length: usize,
}

impl AlignedSequence {
    /// Number of gap symbols added by padding
    pub fn gaps(&self) -> usize {
        self.padded.len() - self.original_length
    }

    pub fn padded_str(&self) -> String {
        String::from_utf8_lossy(&self.padded).into_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub sequences: Vec<AlignedSequence>,
    /// Column count, the longest record's length
    pub length: usize,
    pub conserved_positions: usize,
    /// Mean gap-aware pairwise similarity in percent over every pair, `None`
    /// when there is no pair or any pair is undefined
    pub average_similarity: Option<f64>,
    /// Pairs that share no non-gap position
    pub undefined_pairs: usize,
    pub total_gaps: usize,
}

impl AlignmentResult {
    /// Symbols of every sequence at one column, `None` past the last column
    pub fn column(&self, index: usize) -> Option<Vec<u8>> {
        if index >= self.length {
            return None;
        }
        self.sequences.iter().map(|s| s.padded.get(index).copied()).collect()
    }

    /// True when exactly one distinct non-gap symbol occupies the column
    pub fn is_conserved(&self, index: usize) -> bool {
        self.column(index)
            .is_some_and(|column| is_conserved_column(&column))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveAligner;

impl NaiveAligner {
    pub fn new() -> Self {
        Self
    }

    pub fn align(&self, records: &[SequenceRecord]) -> AlignmentResult {
        let length = records.iter().map(SequenceRecord::len).max().unwrap_or(0);

        let sequences: Vec<AlignedSequence> = records
            .iter()
            .map(|record| {
                let mut padded = record.normalized();
                padded.resize(length.max(padded.len()), GAP);
                AlignedSequence {
                    title: record.title.clone(),
                    padded,
                    original_length: record.len(),
                }
            })
            .collect();

        let conserved_positions = (0..length)
            .filter(|&col| {
                let column: Vec<u8> = sequences.iter().map(|s| s.padded[col]).collect();
                is_conserved_column(&column)
            })
            .count();

        let mut similarities = Vec::new();
        let mut undefined_pairs = 0;
        for i in 0..sequences.len() {
            for j in (i + 1)..sequences.len() {
                match aligned_similarity(&sequences[i].padded, &sequences[j].padded) {
                    Some(value) => similarities.push(value * 100.0),
                    None => undefined_pairs += 1,
                }
            }
        }

        let average_similarity = if similarities.is_empty() || undefined_pairs > 0 {
            None
        } else {
            Some(similarities.iter().sum::<f64>() / similarities.len() as f64)
        };

        let total_gaps = sequences.iter().map(AlignedSequence::gaps).sum();

        debug!(
            "Aligned {} sequences to {} columns ({} conserved, {} gaps)",
            sequences.len(),
            length,
            conserved_positions,
            total_gaps
        );

        AlignmentResult {
            sequences,
            length,
            conserved_positions,
            average_similarity,
            undefined_pairs,
            total_gaps,
        }
    }
}

fn is_conserved_column(column: &[u8]) -> bool {
    let mut bases = column.iter().filter(|&&b| b != GAP);
    match bases.next() {
        Some(first) => bases.all(|b| b == first),
        None => false,
    }
}

/// Fraction of shared non-gap positions holding the same base
///
/// Only positions where both sequences have a base are compared. When
/// there are none the ratio is undefined and `None` is returned.
pub fn aligned_similarity(first: &[u8], second: &[u8]) -> Option<f64> {
    let mut compared = 0usize;
    let mut identical = 0usize;

    for (&a, &b) in first.iter().zip(second.iter()) {
        if a == GAP || b == GAP {
            continue;
        }
        compared += 1;
        if a.eq_ignore_ascii_case(&b) {
            identical += 1;
        }
    }

    if compared == 0 {
        None
    } else {
        Some(identical as f64 / compared as f64)
    }
}

mod padded_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        Ok(String::deserialize(deserializer)?.into_bytes())
    }
}
