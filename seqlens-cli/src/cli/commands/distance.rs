use crate::cli::input::{resolve_record, InputArgs};
use crate::cli::output::*;
use clap::Args;
use colored::*;
use seqlens_bio::{DistanceMatrix, DistanceMethod, DistanceRequest};
use seqlens_core::{Config, SeqlensError};
use std::path::PathBuf;

#[derive(Args)]
pub struct DistanceArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// First sequence, by title or 1-based index
    #[arg(long, value_name = "TITLE|INDEX")]
    pub first: String,

    /// Second sequence, by title or 1-based index
    #[arg(long, value_name = "TITLE|INDEX")]
    pub second: String,

    /// Distance method: hamming, identity or precalculated
    #[arg(short, long)]
    pub method: Option<DistanceMethod>,

    /// JSON object of precomputed distances keyed "TITLE1|TITLE2"
    #[arg(long, value_name = "JSON")]
    pub matrix: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: DistanceArgs, config: &Config) -> anyhow::Result<()> {
    let records = args.input.load_records()?;
    let method = match args.method {
        Some(method) => method,
        None => config.analysis.default_method.parse::<DistanceMethod>().map_err(|e| {
            SeqlensError::Configuration(format!("[analysis] default_method: {}", e))
        })?,
    };

    let matrix = match &args.matrix {
        Some(path) => DistanceMatrix::load(path)?,
        None => DistanceMatrix::new(),
    };
    if method == DistanceMethod::Precalculated && args.matrix.is_none() {
        tracing::warn!("No --matrix given; precalculated distances will be unknown");
    }

    let first = resolve_record(&records, &args.first)?;
    let second = resolve_record(&records, &args.second)?;
    let value = DistanceRequest::new(first, second, method).evaluate(&records, &matrix)?;

    match resolve_format(args.format, &config.display.format)? {
        OutputFormat::Json => print_json(&serde_json::json!({
            "first": records[first].title,
            "second": records[second].title,
            "method": method.to_string(),
            "value": value,
        }))?,
        OutputFormat::Csv => {
            println!("first,second,method,value");
            println!(
                "{},{},{},{}",
                csv_field(&records[first].title),
                csv_field(&records[second].title),
                method,
                value.map(|v| format!("{:.4}", v)).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            let rendered = match value {
                Some(v) => format!("{:.4}", v).bold().to_string(),
                None => "unknown".yellow().to_string(),
            };
            println!(
                "{} {} '{}' vs '{}': {}",
                "●".blue(),
                method,
                records[first].title,
                records[second].title,
                rendered
            );
        }
    }

    Ok(())
}
