use crate::cli::input::InputArgs;
use crate::cli::output::*;
use clap::Args;
use comfy_table::{Cell, CellAlignment};
use seqlens_bio::SimilarityMatrix;
use seqlens_core::Config;

#[derive(Args)]
pub struct MatrixArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (text, json, csv)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: MatrixArgs, config: &Config) -> anyhow::Result<()> {
    let records = args.input.load_records()?;
    let matrix = SimilarityMatrix::compute(&records);

    match resolve_format(args.format, &config.display.format)? {
        OutputFormat::Json => print_json(&matrix)?,
        OutputFormat::Csv => print_csv_matrix(&matrix),
        OutputFormat::Text => {
            section_header_with_line("Similarity Matrix (%)");
            let mut table = create_standard_table();
            let mut header = vec![header_cell("")];
            header.extend(matrix.titles.iter().map(|t| header_cell(t)));
            table.set_header(header);

            for (i, title) in matrix.titles.iter().enumerate() {
                let mut row = vec![header_cell(title)];
                row.extend((0..matrix.len()).map(|j| {
                    Cell::new(cell_text(matrix.get(i, j))).set_alignment(CellAlignment::Right)
                }));
                table.add_row(row);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn cell_text(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "n/a".to_string())
}

fn print_csv_matrix(matrix: &SimilarityMatrix) {
    let header: Vec<String> = matrix.titles.iter().map(|t| csv_field(t)).collect();
    println!(",{}", header.join(","));
    for (i, title) in matrix.titles.iter().enumerate() {
        let cells: Vec<String> = (0..matrix.len())
            .map(|j| matrix.get(i, j).map(|v| format!("{:.1}", v)).unwrap_or_default())
            .collect();
        println!("{},{}", csv_field(title), cells.join(","));
    }
}
