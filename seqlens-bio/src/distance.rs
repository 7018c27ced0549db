//! Pairwise distance between two records of a set
//!
//! Three interchangeable methods: a lookup into a precomputed
//! [`DistanceMatrix`], a length-penalised Hamming distance, and the
//! identity score derived from it.

use crate::sequence::SequenceRecord;
use seqlens_core::SeqlensError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Precomputed distances keyed by `"title1|title2"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceMatrix {
    entries: HashMap<String, f64>,
}

pub fn pair_key(first: &str, second: &str) -> String {
    format!("{}|{}", first, second)
}

impl DistanceMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw entries, rejecting values outside [0, 1]
    pub fn from_entries(entries: HashMap<String, f64>) -> Result<Self, SeqlensError> {
        for (key, value) in &entries {
            if !(0.0..=1.0).contains(value) {
                return Err(SeqlensError::InvalidInput(format!(
                    "distance for '{}' is {}, expected a value in [0, 1]",
                    key, value
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json_str(json: &str) -> Result<Self, SeqlensError> {
        let entries: HashMap<String, f64> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SeqlensError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let matrix = Self::from_json_str(&contents)?;
        debug!(
            "Loaded {} precomputed distances from {}",
            matrix.len(),
            path.as_ref().display()
        );
        Ok(matrix)
    }

    pub fn insert(&mut self, first: &str, second: &str, distance: f64) {
        self.entries.insert(pair_key(first, second), distance);
    }

    /// Look up a pair under either key ordering
    pub fn lookup(&self, first: &str, second: &str) -> Option<f64> {
        self.entries
            .get(&pair_key(first, second))
            .or_else(|| self.entries.get(&pair_key(second, first)))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hamming distance normalised by the longer length
///
/// Positions past the shorter sequence count as mismatches. Comparison
/// ignores case. Two empty sequences are identical (distance 0).
pub fn hamming_distance(first: &[u8], second: &[u8]) -> f64 {
    let longest = first.len().max(second.len());
    if longest == 0 {
        return 0.0;
    }

    let mismatches = first
        .iter()
        .zip(second.iter())
        .filter(|(a, b)| !a.eq_ignore_ascii_case(b))
        .count();
    let tail = first.len().abs_diff(second.len());

    (mismatches + tail) as f64 / longest as f64
}

pub fn identity_score(first: &[u8], second: &[u8]) -> f64 {
    1.0 - hamming_distance(first, second)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMethod {
    Precalculated,
    Hamming,
    Identity,
}

impl FromStr for DistanceMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "precalculated" | "precomputed" => Ok(DistanceMethod::Precalculated),
            "hamming" => Ok(DistanceMethod::Hamming),
            "identity" => Ok(DistanceMethod::Identity),
            _ => Err(format!("Unknown distance method: {}", s)),
        }
    }
}

impl fmt::Display for DistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DistanceMethod::Precalculated => "precalculated",
            DistanceMethod::Hamming => "hamming",
            DistanceMethod::Identity => "identity",
        };
        write!(f, "{}", name)
    }
}

/// Compare the records at two positions of a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceRequest {
    pub first: usize,
    pub second: usize,
    pub method: DistanceMethod,
}

impl DistanceRequest {
    pub fn new(first: usize, second: usize, method: DistanceMethod) -> Self {
        Self {
            first,
            second,
            method,
        }
    }

    /// Evaluate the request
    ///
    /// `Ok(None)` means the precalculated matrix has no entry for the pair.
    /// The computed methods always return a value in [0, 1]; comparing a
    /// record with itself returns 0 (Hamming) or 1 (identity) without a scan.
    pub fn evaluate(
        &self,
        records: &[SequenceRecord],
        matrix: &DistanceMatrix,
    ) -> Result<Option<f64>, SeqlensError> {
        let first = record_at(records, self.first)?;
        let second = record_at(records, self.second)?;
        let same = self.first == self.second;

        let value = match self.method {
            DistanceMethod::Precalculated => matrix.lookup(&first.title, &second.title),
            DistanceMethod::Hamming if same => Some(0.0),
            DistanceMethod::Hamming => Some(hamming_distance(&first.sequence, &second.sequence)),
            DistanceMethod::Identity if same => Some(1.0),
            DistanceMethod::Identity => Some(identity_score(&first.sequence, &second.sequence)),
        };

        debug!(
            "{} distance between '{}' and '{}': {:?}",
            self.method, first.title, second.title, value
        );
        Ok(value)
    }
}

fn record_at(records: &[SequenceRecord], index: usize) -> Result<&SequenceRecord, SeqlensError> {
    records.get(index).ok_or_else(|| {
        SeqlensError::NotFound(format!(
            "sequence index {} (set has {} records)",
            index,
            records.len()
        ))
    })
}
