use crate::sequence::SequenceRecord;
use flate2::read::GzDecoder;
use memmap2::Mmap;
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{line_ending, not_line_ending},
    combinator::opt,
    IResult,
};
use seqlens_core::SeqlensError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Parse a FASTA header line, returning the trimmed title
fn parse_header(input: &[u8]) -> IResult<&[u8], String> {
    let (input, _) = tag(b">")(input)?;
    let (input, title) = not_line_ending(input)?;
    let (input, _) = opt(line_ending)(input)?;
    Ok((input, String::from_utf8_lossy(title).trim().to_string()))
}

/// Parse sequence lines until next header or EOF
fn parse_sequence(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let mut sequence = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() && remaining[0] != b'>' {
        let (rest, line) =
            take_till::<_, _, nom::error::Error<_>>(|c: u8| c == b'\n' || c == b'\r')(remaining)?;
        let (rest, _) = opt(line_ending)(rest)?;
        // A lone '\r' is not a nom line ending
        let rest = rest.strip_prefix(b"\r").unwrap_or(rest);

        sequence.extend(line.iter().copied().filter(|c| !c.is_ascii_whitespace()));
        remaining = rest;
    }

    Ok((remaining, sequence))
}

/// Parse a single FASTA record
fn parse_record(input: &[u8]) -> IResult<&[u8], SequenceRecord> {
    let (input, title) = parse_header(input)?;
    let (input, sequence) = parse_sequence(input)?;
    Ok((input, SequenceRecord::new(title, sequence)))
}

fn skip_whitespace(mut input: &[u8]) -> &[u8] {
    while let Some((first, rest)) = input.split_first() {
        if !first.is_ascii_whitespace() {
            break;
        }
        input = rest;
    }
    input
}

/// Parse FASTA (or plain sequence text) from bytes
///
/// Input that does not start with a `>` header is read as one plain
/// sequence named `default_title`. Records with no sequence are skipped.
pub fn parse_fasta_bytes(
    data: &[u8],
    default_title: &str,
) -> Result<Vec<SequenceRecord>, SeqlensError> {
    let mut input = skip_whitespace(data);
    let mut records = Vec::new();

    if input.is_empty() {
        return Ok(records);
    }

    if input[0] != b'>' {
        let sequence: Vec<u8> = input
            .iter()
            .copied()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        debug!("Read {} bases of plain sequence text", sequence.len());
        records.push(SequenceRecord::new(default_title.to_string(), sequence));
        return Ok(records);
    }

    while !input.is_empty() {
        let (remaining, record) = parse_record(input)
            .map_err(|e| SeqlensError::Parse(format!("Failed to parse FASTA: {:?}", e)))?;

        if record.is_empty() {
            warn!("Skipping record '{}' with an empty sequence", record.title);
        } else {
            records.push(record);
        }
        input = skip_whitespace(remaining);
    }

    Ok(records)
}

/// Parse FASTA from a string
pub fn parse_fasta_str(text: &str, default_title: &str) -> Result<Vec<SequenceRecord>, SeqlensError> {
    parse_fasta_bytes(text.as_bytes(), default_title)
}

/// Parse a FASTA file into records (supports .gz compression)
///
/// Plain-text files without headers become one record named after the file.
pub fn parse_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<SequenceRecord>, SeqlensError> {
    let path = path.as_ref();
    let default_title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.trim_end_matches(".fasta").trim_end_matches(".fa"))
        .unwrap_or("sequence")
        .to_string();

    let records = if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let file = File::open(path)?;
        let mut decoder = GzDecoder::new(BufReader::new(file));
        let mut buffer = Vec::new();
        decoder.read_to_end(&mut buffer)?;
        parse_fasta_bytes(&buffer, &default_title)?
    } else {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Vec::new());
        }
        let mmap = unsafe { Mmap::map(&file)? };
        parse_fasta_bytes(&mmap[..], &default_title)?
    };

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Render records as `>title\nsequence\n` blocks
pub fn to_fasta_string(records: &[SequenceRecord]) -> String {
    let mut output = String::new();
    for record in records {
        output.push('>');
        output.push_str(&record.title);
        output.push('\n');
        output.push_str(&record.sequence_str());
        output.push('\n');
    }
    output
}

/// Write records to any writer, wrapping sequences at `line_width` (0 = no wrapping)
pub fn write_fasta_to_writer<W: Write>(
    writer: &mut W,
    records: &[SequenceRecord],
    line_width: usize,
) -> Result<(), SeqlensError> {
    for record in records {
        writeln!(writer, "{}", record.header())?;

        if line_width == 0 {
            writer.write_all(&record.sequence)?;
            writeln!(writer)?;
        } else {
            for chunk in record.sequence.chunks(line_width) {
                writer.write_all(chunk)?;
                writeln!(writer)?;
            }
        }
    }
    Ok(())
}

/// Write records to a FASTA file (supports .gz compression)
pub fn write_fasta<P: AsRef<Path>>(
    path: P,
    records: &[SequenceRecord],
    line_width: usize,
) -> Result<(), SeqlensError> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let path = path.as_ref();
    let file = File::create(path)?;

    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let encoder = GzEncoder::new(file, Compression::default());
        let mut writer = BufWriter::new(encoder);
        write_fasta_to_writer(&mut writer, records, line_width)?;
        writer
            .into_inner()
            .map_err(|e| SeqlensError::Io(e.into_error()))?
            .finish()?;
    } else {
        let mut writer = BufWriter::new(file);
        write_fasta_to_writer(&mut writer, records, line_width)?;
        writer.flush()?;
    }

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
