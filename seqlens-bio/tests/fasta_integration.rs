//! FASTA files on disk: plain, wrapped and gzip-compressed

use pretty_assertions::assert_eq;
use seqlens_bio::fasta::parse_fasta_bytes;
use seqlens_bio::{parse_fasta, parse_fasta_str, to_fasta_string, write_fasta, SequenceRecord};
use seqlens_test::{
    assert_valid_fasta, create_test_fasta, generate_sequences, init_test_logging, TestEnvironment,
};

#[test]
fn test_export_then_reparse_round_trips() {
    init_test_logging();
    let content = create_test_fasta(&generate_sequences(6, 75));
    let records = parse_fasta_str(&content, "unused").unwrap();

    let exported = to_fasta_string(&records);
    assert_valid_fasta(&exported);
    assert_eq!(exported, content);
    assert_eq!(parse_fasta_str(&exported, "unused").unwrap(), records);
}

#[test]
fn test_titles_with_spaces_survive_export() {
    let records = vec![
        SequenceRecord::new("Gen TP53 humano".to_string(), b"ACGTA".to_vec()),
        SequenceRecord::new("pair 3".to_string(), b"acgtTT".to_vec()),
    ];
    let reparsed = parse_fasta_str(&to_fasta_string(&records), "unused").unwrap();
    assert_eq!(reparsed, records);
}

#[test]
fn test_wrapped_file_round_trip() {
    let env = TestEnvironment::new().unwrap();
    let path = env.output_path("wrapped.fasta");
    let records = parse_fasta_str(&create_test_fasta(&generate_sequences(3, 130)), "x").unwrap();

    write_fasta(&path, &records, 60).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.lines().all(|line| line.len() <= 60 || line.starts_with('>')));
    assert_eq!(parse_fasta(&path).unwrap(), records);
}

#[test]
fn test_gzip_round_trip() {
    let env = TestEnvironment::new().unwrap();
    let path = env.output_path("panel.fasta.gz");
    let records = parse_fasta_str(&create_test_fasta(&generate_sequences(4, 50)), "x").unwrap();

    write_fasta(&path, &records, 0).unwrap();
    assert_eq!(parse_fasta(&path).unwrap(), records);
}

#[test]
fn test_plain_text_file_is_named_after_file() {
    let env = TestEnvironment::new().unwrap();
    let path = env.create_input_file("brca1.fasta", "ACGT\nacgt\n").unwrap();

    let records = parse_fasta(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "brca1");
    assert_eq!(records[0].sequence, b"ACGTacgt");
}

#[test]
fn test_empty_file_yields_no_records() {
    let env = TestEnvironment::new().unwrap();
    let path = env.create_input_file("empty.fa", "").unwrap();
    assert!(parse_fasta(&path).unwrap().is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let env = TestEnvironment::new().unwrap();
    let err = parse_fasta(env.output_path("absent.fasta")).unwrap_err();
    assert!(matches!(err, seqlens_core::SeqlensError::Io(_)));
}

#[test]
fn test_crlf_input() {
    let records = parse_fasta_bytes(b">a\r\nAC\r\nGT\r\n>b\r\nTT", "x").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sequence, b"ACGT");
    assert_eq!(records[1].sequence, b"TT");
}
