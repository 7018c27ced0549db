use crate::cli::input::InputArgs;
use crate::cli::output::*;
use clap::Args;
use colored::*;
use comfy_table::Cell;
use seqlens_bio::motif::search;
use seqlens_bio::MotifMatch;
use seqlens_core::{Config, SeqlensError};

#[derive(Args)]
pub struct MotifArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Motif to search for (A, C, G, T, N)
    #[arg(short, long)]
    pub motif: String,

    /// Bases of context on each side (defaults to [analysis] motif_context)
    #[arg(long)]
    pub context: Option<usize>,

    /// Output format (text, json, csv)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: MotifArgs, config: &Config) -> anyhow::Result<()> {
    let records = args.input.load_records()?;
    let context = args.context.unwrap_or(config.analysis.motif_context);
    let matches = search(&args.motif, &records, context).map_err(SeqlensError::from)?;

    match resolve_format(args.format, &config.display.format)? {
        OutputFormat::Json => print_json(&matches)?,
        OutputFormat::Csv => print_csv_matches(&matches),
        OutputFormat::Text => print_text_matches(&args.motif, &matches),
    }

    Ok(())
}

fn print_text_matches(motif: &str, matches: &[MotifMatch]) {
    section_header_with_line(&format!("Motif {}", motif.to_uppercase()));

    if matches.is_empty() {
        empty("No occurrences found");
        return;
    }

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Sequence"),
        header_cell("Start"),
        header_cell("End"),
        header_cell("Context"),
    ]);

    for m in matches {
        let context = format!(
            "{}{}{}",
            m.context_before.dimmed(),
            m.context_motif.red().bold(),
            m.context_after.dimmed()
        );
        table.add_row(vec![
            Cell::new(&m.sequence_title),
            Cell::new(m.position),
            Cell::new(m.end_position),
            Cell::new(context),
        ]);
    }
    println!("{}", table);
    success(&format!("{} occurrences", format_number(matches.len())));
}

fn print_csv_matches(matches: &[MotifMatch]) {
    println!("sequence,position,end_position,context_before,motif,context_after");
    for m in matches {
        println!(
            "{},{},{},{},{},{}",
            csv_field(&m.sequence_title),
            m.position,
            m.end_position,
            m.context_before,
            m.context_motif,
            m.context_after
        );
    }
}
