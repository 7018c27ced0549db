use super::naive::AlignmentResult;
use crate::alphabet::GAP;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How strongly one alignment column agrees on its consensus base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conservation {
    /// Every non-gap base is the consensus base
    Conserved,
    /// At least half of the non-gap bases are the consensus base
    Majority,
    /// Less than half agree
    Variable,
    /// Only gaps in the column
    Gap,
}

impl Conservation {
    pub fn classify(fraction: f64, all_gap: bool) -> Self {
        if all_gap {
            Conservation::Gap
        } else if fraction >= 1.0 {
            Conservation::Conserved
        } else if fraction >= 0.5 {
            Conservation::Majority
        } else {
            Conservation::Variable
        }
    }

    /// Single-character marker used in text renderings
    pub fn symbol(self) -> char {
        match self {
            Conservation::Conserved => '*',
            Conservation::Majority => ':',
            Conservation::Variable => '.',
            Conservation::Gap => ' ',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    pub sequence: String,
    /// Winning base count over non-gap count, 0 for all-gap columns
    pub conservation_per_position: Vec<f64>,
    pub classes: Vec<Conservation>,
}

/// Majority symbol of one column and the share of non-gap symbols that agree
///
/// Ties go to the symbol seen first in the column: a later symbol only
/// takes the lead with a strictly greater count.
pub fn column_consensus(column: &[u8]) -> (u8, f64) {
    let mut tally: IndexMap<u8, usize> = IndexMap::new();
    for &symbol in column.iter().filter(|&&b| b != GAP) {
        *tally.entry(symbol.to_ascii_uppercase()).or_insert(0) += 1;
    }

    let total: usize = tally.values().sum();
    let mut winner: Option<(u8, usize)> = None;
    for (&symbol, &count) in &tally {
        match winner {
            Some((_, best)) if count <= best => {}
            _ => winner = Some((symbol, count)),
        }
    }

    match winner {
        Some((symbol, count)) => (symbol, count as f64 / total as f64),
        None => (GAP, 0.0),
    }
}

/// Consensus sequence of an alignment, one symbol per column
pub fn consensus(alignment: &AlignmentResult) -> ConsensusResult {
    let mut sequence = String::with_capacity(alignment.length);
    let mut conservation_per_position = Vec::with_capacity(alignment.length);
    let mut classes = Vec::with_capacity(alignment.length);

    for col in 0..alignment.length {
        let column = alignment.column(col).unwrap_or_default();
        let (symbol, fraction) = column_consensus(&column);
        let all_gap = symbol == GAP;

        sequence.push(symbol as char);
        conservation_per_position.push(fraction);
        classes.push(Conservation::classify(fraction, all_gap));
    }

    ConsensusResult {
        sequence,
        conservation_per_position,
        classes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::NaiveAligner;
    use crate::sequence::SequenceRecord;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unanimous_column() {
        assert_eq!(column_consensus(b"AAA"), (b'A', 1.0));
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        assert_eq!(column_consensus(b"AT-"), (b'A', 0.5));
        assert_eq!(column_consensus(b"TA-"), (b'T', 0.5));
        assert_eq!(column_consensus(b"GCCG"), (b'G', 0.5));
    }

    #[test]
    fn test_later_symbol_wins_with_strictly_more() {
        assert_eq!(column_consensus(b"ATT"), (b'T', 2.0 / 3.0));
    }

    #[test]
    fn test_all_gap_column() {
        assert_eq!(column_consensus(b"---"), (GAP, 0.0));
    }

    #[test]
    fn test_consensus_of_alignment() {
        let records = vec![
            SequenceRecord::new("a".to_string(), b"ACGT".to_vec()),
            SequenceRecord::new("b".to_string(), b"ACCA".to_vec()),
            SequenceRecord::new("c".to_string(), b"AGC".to_vec()),
        ];
        let alignment = NaiveAligner::new().align(&records);
        let result = consensus(&alignment);

        // col 0: AAA  col 1: CCG  col 2: GCC  col 3: TA-
        assert_eq!(result.sequence, "ACCT");
        assert_eq!(
            result.classes,
            vec![
                Conservation::Conserved,
                Conservation::Majority,
                Conservation::Majority,
                Conservation::Majority,
            ]
        );
        assert_eq!(result.conservation_per_position[0], 1.0);
        assert_eq!(result.conservation_per_position[3], 0.5);
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(Conservation::classify(1.0, false), Conservation::Conserved);
        assert_eq!(Conservation::classify(0.5, false), Conservation::Majority);
        assert_eq!(Conservation::classify(0.4, false), Conservation::Variable);
        assert_eq!(Conservation::classify(0.0, true), Conservation::Gap);
    }
}
