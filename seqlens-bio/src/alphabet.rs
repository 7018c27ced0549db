//! Nucleotide alphabet and the reserved gap symbol

use seqlens_core::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Padding symbol used by the aligner. Never a valid base.
pub const GAP: u8 = b'-';

/// Accepted nucleotide symbols (case-insensitive on input)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
    N,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 5] = [
        Nucleotide::A,
        Nucleotide::C,
        Nucleotide::G,
        Nucleotide::T,
        Nucleotide::N,
    ];

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' => Some(Nucleotide::T),
            b'N' => Some(Nucleotide::N),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::C => b'C',
            Nucleotide::G => b'G',
            Nucleotide::T => b'T',
            Nucleotide::N => b'N',
        }
    }

    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}

/// Check that every symbol of `input` belongs to {A,C,G,T,N}, ignoring case
pub fn validate_nucleotides(input: &str) -> Result<Vec<Nucleotide>, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Empty);
    }

    input
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let base = if c.is_ascii() {
                Nucleotide::from_byte(c as u8)
            } else {
                None
            };
            base.ok_or(ValidationError::InvalidSymbol {
                symbol: c,
                position: i + 1,
            })
        })
        .collect()
}

/// A validated, uppercase literal motif
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Motif(Vec<u8>);

impl Motif {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let bases = validate_nucleotides(input)?;
        Ok(Self(bases.into_iter().map(Nucleotide::as_byte).collect()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: an empty motif never validates
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Motif {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Motif::parse(s)
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_is_case_insensitive() {
        assert_eq!(Nucleotide::from_byte(b'a'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_byte(b'N'), Some(Nucleotide::N));
        assert_eq!(Nucleotide::from_byte(b'U'), None);
        assert_eq!(Nucleotide::from_byte(GAP), None);
    }

    #[test]
    fn test_motif_uppercases() {
        let motif = Motif::parse("gaTc").unwrap();
        assert_eq!(motif.as_bytes(), b"GATC");
        assert_eq!(motif.to_string(), "GATC");
    }

    #[test]
    fn test_motif_rejects_empty() {
        assert_eq!(Motif::parse(""), Err(ValidationError::Empty));
    }

    #[test]
    fn test_motif_rejects_foreign_symbols() {
        assert_eq!(
            Motif::parse("ACXG"),
            Err(ValidationError::InvalidSymbol {
                symbol: 'X',
                position: 3
            })
        );
        assert!(Motif::parse("AC G").is_err());
        assert!(Motif::parse("AC-G").is_err());
        assert!(Motif::parse("ACGÜ").is_err());
    }
}
