use seqlens_core::StoredPair;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A titled nucleotide sequence as supplied by a loader
///
/// Symbols are stored as given. Analyses read them through
/// [`SequenceRecord::normalized`] so case never affects a result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub title: String,
    #[serde(with = "sequence_text")]
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(title: String, sequence: Vec<u8>) -> Self {
        Self { title, sequence }
    }

    /// Build a record from a manual form entry
    ///
    /// Blank sequence text yields `None`. Whitespace inside the text is
    /// dropped and a blank title becomes `sequence_<ordinal>`.
    pub fn from_manual(title: &str, text: &str, ordinal: usize) -> Option<Self> {
        let sequence: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        if sequence.is_empty() {
            return None;
        }

        let title = title.trim();
        let title = if title.is_empty() {
            format!("sequence_{}", ordinal)
        } else {
            title.to_string()
        };

        Some(Self::new(title, sequence))
    }

    /// Both stored fields joined into one record, as the pair view counts them
    pub fn from_pair(pair: &StoredPair) -> Self {
        let sequence = pair
            .first
            .bytes()
            .chain(pair.second.bytes())
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        Self::new(format!("pair {}", pair.id), sequence)
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Uppercase copy of the sequence
    pub fn normalized(&self) -> Vec<u8> {
        self.sequence.to_ascii_uppercase()
    }

    pub fn header(&self) -> String {
        format!(">{}", self.title)
    }

    pub fn sequence_str(&self) -> String {
        String::from_utf8_lossy(&self.sequence).into_owned()
    }
}

impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bp)", self.title, self.len())
    }
}

mod sequence_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(text.into_bytes())
    }
}
