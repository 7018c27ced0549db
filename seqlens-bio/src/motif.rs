//! Literal motif search with overlapping matches

use crate::alphabet::Motif;
use crate::sequence::SequenceRecord;
use seqlens_core::ValidationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bases of context reported on each side of a match by default
pub const DEFAULT_CONTEXT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifMatch {
    pub sequence_title: String,
    /// 1-indexed start of the match
    pub position: usize,
    /// 1-indexed, inclusive end of the match
    pub end_position: usize,
    pub context_before: String,
    pub context_motif: String,
    pub context_after: String,
}

/// Validate `motif` and search every record for it
pub fn search(
    motif: &str,
    records: &[SequenceRecord],
    context: usize,
) -> Result<Vec<MotifMatch>, ValidationError> {
    let motif = Motif::parse(motif)?;
    Ok(search_motif(&motif, records, context))
}

/// Every occurrence of `motif` in every record, in record then position order
///
/// Scanning resumes one base after each hit, so overlapping occurrences
/// are all reported.
pub fn search_motif(motif: &Motif, records: &[SequenceRecord], context: usize) -> Vec<MotifMatch> {
    let needle = motif.as_bytes();
    let mut matches = Vec::new();

    for record in records {
        let haystack = record.normalized();
        if haystack.len() < needle.len() {
            continue;
        }

        for start in 0..=haystack.len() - needle.len() {
            if &haystack[start..start + needle.len()] != needle {
                continue;
            }

            let end = start + needle.len();
            let before = start.saturating_sub(context);
            let after = (end + context).min(haystack.len());

            matches.push(MotifMatch {
                sequence_title: record.title.clone(),
                position: start + 1,
                end_position: end,
                context_before: text(&haystack[before..start]),
                context_motif: text(&haystack[start..end]),
                context_after: text(&haystack[end..after]),
            });
        }
    }

    debug!(
        "Motif {} matched {} times across {} sequences",
        motif,
        matches.len(),
        records.len()
    );
    matches
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
