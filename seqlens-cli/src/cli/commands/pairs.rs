use crate::cli::output::*;
use clap::{Args, Subcommand};
use comfy_table::Cell;
use seqlens_bio::distance::{hamming_distance, identity_score};
use seqlens_bio::{Composition, SequenceRecord};
use seqlens_core::{Config, PairStore};
use std::path::PathBuf;

#[derive(Args)]
pub struct PairsArgs {
    #[command(subcommand)]
    pub command: PairsCommand,
}

#[derive(Subcommand)]
pub enum PairsCommand {
    /// Store two sequence texts as they are
    Add {
        first: String,
        second: String,
    },

    /// List stored pairs, oldest first
    List {
        /// Output format (text, json, csv)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Composition of one or two stored pairs, and their distance
    Stats {
        #[arg(num_args = 1..=2, required = true)]
        ids: Vec<u64>,
    },
}

fn store_location(config: &Config) -> PathBuf {
    config
        .store
        .path
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(seqlens_core::store_path)
}

pub fn run(args: PairsArgs, config: &Config) -> anyhow::Result<()> {
    let mut store = PairStore::open(store_location(config))?;

    match args.command {
        PairsCommand::Add { first, second } => {
            let row = store.insert(&first, &second)?;
            success(&format!("Stored pair {}", row.id));
        }
        PairsCommand::List { format } => list(&store, format, config)?,
        PairsCommand::Stats { ids } => stats(&store, &ids)?,
    }

    Ok(())
}

fn list(store: &PairStore, format: Option<OutputFormat>, config: &Config) -> anyhow::Result<()> {
    let rows = store.list();

    match resolve_format(format, &config.display.format)? {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Csv => {
            println!("id,first,second,created_at");
            for row in &rows {
                println!(
                    "{},{},{},{}",
                    row.id,
                    csv_field(&row.first),
                    csv_field(&row.second),
                    row.created_at.to_rfc3339()
                );
            }
        }
        OutputFormat::Text => {
            section_header_with_line("Stored Pairs");
            if rows.is_empty() {
                empty("No pairs stored");
                return Ok(());
            }

            let mut table = create_standard_table();
            table.set_header(vec![
                header_cell("ID"),
                header_cell("First"),
                header_cell("Second"),
                header_cell("Created"),
            ]);
            for row in &rows {
                table.add_row(vec![
                    Cell::new(row.id),
                    Cell::new(&row.first),
                    Cell::new(&row.second),
                    Cell::new(row.created_at.format("%Y-%m-%d %H:%M:%S")),
                ]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn stats(store: &PairStore, ids: &[u64]) -> anyhow::Result<()> {
    let records = ids
        .iter()
        .map(|&id| store.get(id).map(SequenceRecord::from_pair))
        .collect::<Result<Vec<_>, _>>()?;

    section_header_with_line("Pair Statistics");
    for record in &records {
        let composition = Composition::analyze(record);
        let items = vec![
            ("Length", format!("{} bp", format_number(composition.length))),
            ("GC Content", format!("{:.1}%", composition.gc_percent)),
            ("AT Content", format!("{:.1}%", composition.at_percent)),
        ];
        tree_section(&record.title, items, false);
    }

    if let [first, second] = records.as_slice() {
        let items = vec![
            (
                "Hamming",
                format!("{:.4}", hamming_distance(&first.sequence, &second.sequence)),
            ),
            (
                "Identity",
                format!("{:.4}", identity_score(&first.sequence, &second.sequence)),
            ),
        ];
        tree_section("Distance", items, true);
    }

    Ok(())
}
