//! Base composition of single records and of a whole record set

use crate::alphabet::Nucleotide;
use crate::sequence::SequenceRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-record base composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub title: String,
    pub length: usize,
    /// Count of every uppercase symbol present, in order of first occurrence
    pub counts: IndexMap<char, usize>,
    pub gc_percent: f64,
    pub at_percent: f64,
}

/// Fixed A/T/C/G/N tally where unrecognised symbols count as N
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseBuckets {
    pub a: usize,
    pub t: usize,
    pub c: usize,
    pub g: usize,
    pub n: usize,
}

impl BaseBuckets {
    pub fn total(&self) -> usize {
        self.a + self.t + self.c + self.g + self.n
    }

    pub fn get(&self, base: Nucleotide) -> usize {
        match base {
            Nucleotide::A => self.a,
            Nucleotide::T => self.t,
            Nucleotide::C => self.c,
            Nucleotide::G => self.g,
            Nucleotide::N => self.n,
        }
    }

    /// Buckets in display order A, T, C, G, N
    pub fn iter(&self) -> impl Iterator<Item = (Nucleotide, usize)> + '_ {
        [
            Nucleotide::A,
            Nucleotide::T,
            Nucleotide::C,
            Nucleotide::G,
            Nucleotide::N,
        ]
        .into_iter()
        .map(move |base| (base, self.get(base)))
    }

    fn add(&mut self, other: &BaseBuckets) {
        self.a += other.a;
        self.t += other.t;
        self.c += other.c;
        self.g += other.g;
        self.n += other.n;
    }
}

impl Composition {
    /// Count bases and derive GC/AT percentages
    ///
    /// An empty sequence has no bases to share out, so both GC and AT are 0%.
    pub fn analyze(record: &SequenceRecord) -> Self {
        let mut counts: IndexMap<char, usize> = IndexMap::new();
        for &byte in &record.sequence {
            *counts.entry(byte.to_ascii_uppercase() as char).or_insert(0) += 1;
        }

        let length = record.len();
        let (gc_percent, at_percent) = if length == 0 {
            (0.0, 0.0)
        } else {
            let gc =
                counts.get(&'G').copied().unwrap_or(0) + counts.get(&'C').copied().unwrap_or(0);
            let gc_percent = 100.0 * gc as f64 / length as f64;
            (gc_percent, 100.0 - gc_percent)
        };

        Self {
            title: record.title.clone(),
            length,
            counts,
            gc_percent,
            at_percent,
        }
    }

    pub fn count(&self, symbol: char) -> usize {
        self.counts
            .get(&symbol.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    pub fn buckets(&self) -> BaseBuckets {
        let mut buckets = BaseBuckets::default();
        for (&symbol, &count) in &self.counts {
            match symbol {
                'A' => buckets.a += count,
                'T' => buckets.t += count,
                'C' => buckets.c += count,
                'G' => buckets.g += count,
                _ => buckets.n += count,
            }
        }
        buckets
    }
}

/// One bar of the length histogram, bounds inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBin {
    pub start: usize,
    pub end: usize,
    pub count: usize,
}

impl LengthBin {
    pub fn label(&self) -> String {
        if self.start == self.end {
            format!("{}", self.start)
        } else {
            format!("{}-{}", self.start, self.end)
        }
    }
}

/// Statistics over every record of a set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub total_sequences: usize,
    pub total_bases: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub mean_length: f64,
    /// Mean of the per-record GC percentages
    pub average_gc: f64,
    /// Share of every A/T/C/G/N bucket over all bases, in percent
    pub base_percentages: IndexMap<Nucleotide, f64>,
    pub length_histogram: Vec<LengthBin>,
    pub compositions: Vec<Composition>,
}

impl CollectionSummary {
    pub fn from_records(records: &[SequenceRecord], bins: usize) -> Self {
        let compositions: Vec<Composition> = records.iter().map(Composition::analyze).collect();
        let lengths: Vec<usize> = records.iter().map(SequenceRecord::len).collect();

        let total_sequences = records.len();
        let total_bases: usize = lengths.iter().sum();

        let mut buckets = BaseBuckets::default();
        for composition in &compositions {
            buckets.add(&composition.buckets());
        }

        let base_percentages = buckets
            .iter()
            .map(|(base, count)| {
                let pct = if total_bases > 0 {
                    count as f64 / total_bases as f64 * 100.0
                } else {
                    0.0
                };
                (base, pct)
            })
            .collect();

        let average_gc = if compositions.is_empty() {
            0.0
        } else {
            compositions.iter().map(|c| c.gc_percent).sum::<f64>() / compositions.len() as f64
        };

        let mean_length = if total_sequences > 0 {
            total_bases as f64 / total_sequences as f64
        } else {
            0.0
        };

        debug!(
            "Summarised {} sequences ({} bases)",
            total_sequences, total_bases
        );

        Self {
            total_sequences,
            total_bases,
            min_length: lengths.iter().copied().min().unwrap_or(0),
            max_length: lengths.iter().copied().max().unwrap_or(0),
            mean_length,
            average_gc,
            base_percentages,
            length_histogram: length_histogram(&lengths, bins),
            compositions,
        }
    }
}

/// Equal-width histogram over `[min, max]` with at most `bins` bars
pub fn length_histogram(lengths: &[usize], bins: usize) -> Vec<LengthBin> {
    let (Some(&min), Some(&max)) = (lengths.iter().min(), lengths.iter().max()) else {
        return Vec::new();
    };

    let bins = bins.max(1);
    let span = max - min + 1;
    let width = span.div_ceil(bins);
    let count = span.div_ceil(width);

    let mut histogram: Vec<LengthBin> = (0..count)
        .map(|i| LengthBin {
            start: min + i * width,
            end: (min + (i + 1) * width - 1).min(max),
            count: 0,
        })
        .collect();

    for &length in lengths {
        histogram[(length - min) / width].count += 1;
    }

    histogram
}
