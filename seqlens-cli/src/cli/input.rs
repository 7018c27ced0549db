//! Sequence input shared by the analysis commands

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use seqlens_bio::{parse_fasta, SequenceRecord};
use seqlens_core::SeqlensError;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// FASTA or plain-text sequence file (.gz accepted, repeatable)
    #[arg(short, long = "input", value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Manual sequence entry as TITLE=SEQUENCE or just SEQUENCE (repeatable)
    #[arg(short, long = "seq", value_name = "TITLE=SEQUENCE")]
    pub seqs: Vec<String>,
}

impl InputArgs {
    /// Load every file, then every manual entry, in the order given
    pub fn load_records(&self) -> Result<Vec<SequenceRecord>> {
        let mut records = Vec::new();

        if !self.inputs.is_empty() {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);

            for path in &self.inputs {
                spinner.set_message(format!("Loading {}...", path.display()));
                let loaded = parse_fasta(path)?;
                if loaded.is_empty() {
                    warn!("No sequences found in {}", path.display());
                }
                records.extend(loaded);
            }
            spinner.finish_and_clear();
        }

        records.extend(manual_records(&self.seqs));

        if records.is_empty() {
            return Err(SeqlensError::InvalidInput(
                "no sequences to analyse; pass --input FILE or --seq TITLE=SEQUENCE".to_string(),
            )
            .into());
        }

        info!("Loaded {} sequences", records.len());
        Ok(records)
    }
}

/// Turn `TITLE=SEQUENCE` entries into records, skipping blank sequences
///
/// Entries are numbered from 1 so an untitled one becomes `sequence_<n>`.
pub fn manual_records(entries: &[String]) -> Vec<SequenceRecord> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let (title, text) = entry.split_once('=').unwrap_or(("", entry.as_str()));
            let record = SequenceRecord::from_manual(title, text, i + 1);
            if record.is_none() {
                warn!("Skipping manual entry {} with no sequence", i + 1);
            }
            record
        })
        .collect()
}

/// Find a record by exact title, falling back to a 1-based index
pub fn resolve_record(records: &[SequenceRecord], selector: &str) -> Result<usize, SeqlensError> {
    if let Some(index) = records.iter().position(|r| r.title == selector) {
        return Ok(index);
    }

    match selector.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= records.len() => Ok(n - 1),
        _ => Err(SeqlensError::NotFound(format!(
            "sequence '{}' (expected a title or an index from 1 to {})",
            selector,
            records.len()
        ))),
    }
}
