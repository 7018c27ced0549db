use crate::cli::input::{resolve_record, InputArgs};
use crate::cli::output::*;
use crate::cli::visualize::{progress_bar, sequence_preview};
use clap::Args;
use seqlens_bio::Composition;
use seqlens_core::Config;

#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Sequence to show, by title or 1-based index
    #[arg(long, default_value = "1", value_name = "TITLE|INDEX")]
    pub index: String,

    /// Bases to preview (defaults to [display] preview_width)
    #[arg(long)]
    pub width: Option<usize>,
}

pub fn run(args: ViewArgs, config: &Config) -> anyhow::Result<()> {
    let records = args.input.load_records()?;
    let record = &records[resolve_record(&records, &args.index)?];
    let width = args.width.unwrap_or(config.display.preview_width);
    let composition = Composition::analyze(record);

    section_header_with_line(&record.title);
    println!("{}", sequence_preview(&record.sequence, width));

    subsection_header("Composition");
    tree_item(false, "Length", Some(&format!("{} bp", format_number(record.len()))));
    let counts: Vec<(String, String)> = composition
        .buckets()
        .iter()
        .map(|(base, count)| (base.to_string(), format_number(count)))
        .collect();
    tree_section(
        "Bases",
        counts.iter().map(|(k, v)| (k.as_str(), v.clone())).collect(),
        false,
    );
    tree_item(
        true,
        "GC / AT",
        Some(&format!(
            "{:.1}% / {:.1}%",
            composition.gc_percent, composition.at_percent
        )),
    );
    println!(
        "{}",
        progress_bar(composition.gc_percent, 100.0, 40, "  GC Content", config.display.color)
    );

    Ok(())
}
