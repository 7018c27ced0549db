use crate::cli::input::InputArgs;
use crate::cli::output::*;
use crate::cli::visualize::{ascii_histogram, length_histogram_rows, progress_bar};
use clap::Args;
use colored::*;
use comfy_table::Cell;
use seqlens_bio::CollectionSummary;
use seqlens_core::Config;

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (text, json, csv)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Show visual charts and graphs
    #[arg(long)]
    pub visual: bool,

    /// Number of length histogram bins (defaults to [display] histogram_bins)
    #[arg(long)]
    pub bins: Option<usize>,
}

pub fn run(args: StatsArgs, config: &Config) -> anyhow::Result<()> {
    let records = args.input.load_records()?;
    let bins = args.bins.unwrap_or(config.display.histogram_bins);
    let summary = CollectionSummary::from_records(&records, bins);

    match resolve_format(args.format, &config.display.format)? {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Csv => print_csv_stats(&summary),
        OutputFormat::Text => {
            print_text_stats(&summary);
            if args.visual {
                print_visual_stats(&summary, config.display.color);
            }
        }
    }

    Ok(())
}

fn print_text_stats(summary: &CollectionSummary) {
    section_header_with_line("Sequence Statistics Report");

    subsection_header("Collection");
    tree_item(false, "Total Sequences", Some(&format_number(summary.total_sequences)));
    tree_item(false, "Total Bases", Some(&format_number(summary.total_bases)));

    let length_items = vec![
        ("Average", format!("{:.1} bp", summary.mean_length)),
        (
            "Min/Max",
            format!(
                "{} / {} bp",
                format_number(summary.min_length),
                format_number(summary.max_length)
            ),
        ),
    ];
    tree_section("Length Statistics", length_items, false);
    tree_item(false, "Average GC", Some(&format!("{:.1}%", summary.average_gc)));

    let base_items: Vec<(String, String)> = summary
        .base_percentages
        .iter()
        .map(|(base, pct)| (base.to_string(), format!("{:.1}%", pct)))
        .collect();
    tree_section(
        "Base Percentages",
        base_items.iter().map(|(k, v)| (k.as_str(), v.clone())).collect(),
        true,
    );

    subsection_header("Per Sequence");
    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Title"),
        header_cell("Length"),
        header_cell("GC %"),
        header_cell("AT %"),
        header_cell("A"),
        header_cell("T"),
        header_cell("C"),
        header_cell("G"),
        header_cell("N"),
    ]);

    for (i, composition) in summary.compositions.iter().enumerate() {
        let buckets = composition.buckets();
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&composition.title),
            Cell::new(format_number(composition.length)),
            Cell::new(format!("{:.1}", composition.gc_percent)),
            Cell::new(format!("{:.1}", composition.at_percent)),
            Cell::new(buckets.a),
            Cell::new(buckets.t),
            Cell::new(buckets.c),
            Cell::new(buckets.g),
            Cell::new(buckets.n),
        ]);
    }
    println!("{}", table);
}

fn print_visual_stats(summary: &CollectionSummary, use_color: bool) {
    println!();
    println!("{}", "▶ LENGTH DISTRIBUTION".yellow().bold());
    let rows = length_histogram_rows(&summary.length_histogram);
    print!("{}", ascii_histogram(&rows, 40, use_color));

    println!();
    println!("{}", "◆ COMPOSITION".yellow().bold());
    println!("{}", progress_bar(summary.average_gc, 100.0, 40, "  GC Content", use_color));
    println!(
        "{}",
        progress_bar(100.0 - summary.average_gc, 100.0, 40, "  AT Content", use_color)
    );
}

fn print_csv_stats(summary: &CollectionSummary) {
    println!("title,length,gc_percent,at_percent,a,t,c,g,n");
    for composition in &summary.compositions {
        let b = composition.buckets();
        println!(
            "{},{},{:.2},{:.2},{},{},{},{},{}",
            csv_field(&composition.title),
            composition.length,
            composition.gc_percent,
            composition.at_percent,
            b.a,
            b.t,
            b.c,
            b.g,
            b.n
        );
    }
}
