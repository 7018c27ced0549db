use crate::cli::input::InputArgs;
use crate::cli::output::*;
use crate::cli::visualize::colored_base;
use clap::Args;
use colored::*;
use seqlens_bio::alignment::{consensus, AlignedSequence};
use seqlens_bio::{AlignmentResult, ConsensusResult, NaiveAligner};
use seqlens_core::Config;
use serde::Serialize;

#[derive(Args)]
pub struct AlignArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (text, json, csv)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

#[derive(Serialize)]
struct AlignReport<'a> {
    alignment: &'a AlignmentResult,
    consensus: &'a ConsensusResult,
}

pub fn run(args: AlignArgs, config: &Config) -> anyhow::Result<()> {
    let records = args.input.load_records()?;
    let alignment = NaiveAligner::new().align(&records);
    let consensus = consensus(&alignment);

    match resolve_format(args.format, &config.display.format)? {
        OutputFormat::Json => print_json(&AlignReport {
            alignment: &alignment,
            consensus: &consensus,
        })?,
        OutputFormat::Csv => {
            println!("title,padded,original_length,gaps");
            for seq in &alignment.sequences {
                println!(
                    "{},{},{},{}",
                    csv_field(&seq.title),
                    seq.padded_str(),
                    seq.original_length,
                    seq.gaps()
                );
            }
        }
        OutputFormat::Text => print_text_alignment(&alignment, &consensus),
    }

    Ok(())
}

fn colored_row(seq: &AlignedSequence) -> String {
    seq.padded.iter().map(|&b| colored_base(b).to_string()).collect()
}

fn print_text_alignment(alignment: &AlignmentResult, consensus: &ConsensusResult) {
    section_header_with_line("Naive Alignment");

    let label_width = alignment
        .sequences
        .iter()
        .map(|s| s.title.chars().count())
        .chain(std::iter::once("Consensus".len()))
        .max()
        .unwrap_or(0);

    for seq in &alignment.sequences {
        println!("{:<width$}  {}", seq.title, colored_row(seq), width = label_width);
    }
    let markers: String = consensus.classes.iter().map(|c| c.symbol()).collect();
    println!("{:<width$}  {}", "", markers.dimmed(), width = label_width);
    println!(
        "{:<width$}  {}",
        "Consensus".bold(),
        consensus.sequence.bold(),
        width = label_width
    );

    subsection_header("Alignment Statistics");
    let conserved_pct = if alignment.length > 0 {
        alignment.conserved_positions as f64 / alignment.length as f64 * 100.0
    } else {
        0.0
    };
    tree_item(false, "Sequences", Some(&format_number(alignment.sequences.len())));
    tree_item(false, "Length", Some(&format!("{} columns", format_number(alignment.length))));
    tree_item(
        false,
        "Conserved Positions",
        Some(&format!(
            "{} ({:.1}%)",
            format_number(alignment.conserved_positions),
            conserved_pct
        )),
    );
    tree_item(
        false,
        "Average Similarity",
        Some(&format_optional_percent(alignment.average_similarity)),
    );
    if alignment.undefined_pairs > 0 {
        tree_item(
            false,
            "Undefined Pairs",
            Some(&format_number(alignment.undefined_pairs)),
        );
    }
    tree_item(true, "Total Gaps", Some(&format_number(alignment.total_gaps)));
}
