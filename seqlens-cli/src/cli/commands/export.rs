use crate::cli::input::InputArgs;
use crate::cli::output::*;
use clap::Args;
use seqlens_bio::fasta::write_fasta_to_writer;
use seqlens_bio::{to_fasta_string, write_fasta};
use seqlens_core::Config;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (.gz is compressed); stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Wrap sequences at this many bases (defaults to [export] line_width, 0 = no wrapping)
    #[arg(long)]
    pub line_width: Option<usize>,
}

pub fn run(args: ExportArgs, config: &Config) -> anyhow::Result<()> {
    let records = args.input.load_records()?;
    let line_width = args.line_width.unwrap_or(config.export.line_width);

    match &args.output {
        Some(path) => {
            write_fasta(path, &records, line_width)?;
            let size = std::fs::metadata(path)?.len();
            success(&format!(
                "Wrote {} sequences to {} ({})",
                format_number(records.len()),
                path.display(),
                format_size(size)
            ));
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            if line_width == 0 {
                handle.write_all(to_fasta_string(&records).as_bytes())?;
            } else {
                write_fasta_to_writer(&mut handle, &records, line_width)?;
            }
            handle.flush()?;
        }
    }

    Ok(())
}
