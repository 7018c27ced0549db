mod common;

use anyhow::Result;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use std::fs;

use common::*;

#[test]
fn test_cli_help_command() -> Result<()> {
    let env = TestEnvironment::new()?;
    seqlens_cmd(&env)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("motif"))
        .stdout(predicate::str::contains("align"));
    Ok(())
}

#[test]
fn test_stats_json_summary() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = panel_fasta(&env);

    let json = stdout_json(seqlens_cmd(&env).args(["stats", "--format", "json", "-i"]).arg(&input));

    assert_eq!(json["total_sequences"], 3);
    assert_eq!(json["total_bases"], 16);
    assert_eq!(json["min_length"], 3);
    assert_eq!(json["max_length"], 8);
    assert_eq!(json["compositions"][0]["title"], "Gen TP53 humano");
    Ok(())
}

#[test]
fn test_stats_csv_from_manual_entries() -> Result<()> {
    let env = TestEnvironment::new()?;
    seqlens_cmd(&env)
        .args(["stats", "--format", "csv", "-s", "human=GGCC", "-s", "ACGTN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("human,4,100.00,0.00,0,0,2,2,0"))
        .stdout(predicate::str::contains("sequence_2,5,40.00,60.00,1,1,1,1,1"));
    Ok(())
}

#[test]
fn test_stats_text_with_histogram() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = panel_fasta(&env);
    seqlens_cmd(&env)
        .args(["stats", "--visual", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Sequences: 3"))
        .stdout(predicate::str::contains("LENGTH DISTRIBUTION"))
        .stdout(predicate::str::contains("Gen TP53 raton"));
    Ok(())
}

#[test]
fn test_configured_default_format() -> Result<()> {
    let env = TestEnvironment::new()?;
    fs::create_dir_all(env.home())?;
    fs::write(config_file(&env), "[display]\nformat = \"json\"\n")?;

    let json = stdout_json(seqlens_cmd(&env).args(["stats", "-s", "x=ACGT"]));
    assert_eq!(json["total_bases"], 4);
    Ok(())
}

#[test]
fn test_view_preview_truncates() -> Result<()> {
    let env = TestEnvironment::new()?;
    seqlens_cmd(&env)
        .args(["view", "-s", "long=ACGTACGTAC", "--width", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ACGT... (6 more)"))
        .stdout(predicate::str::contains("GC / AT: 50.0% / 50.0%"));
    Ok(())
}

#[test]
fn test_motif_overlapping_matches_csv() -> Result<()> {
    let env = TestEnvironment::new()?;
    let output = seqlens_cmd(&env)
        .args(["motif", "--motif", "aa", "--format", "csv", "-s", "s=AAAA"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output)?;
    let positions: Vec<&str> = text
        .lines()
        .skip(1)
        .map(|line| line.split(',').nth(1).unwrap())
        .collect();
    assert_eq!(positions, vec!["1", "2", "3"]);
    Ok(())
}

#[test]
fn test_motif_json_context() -> Result<()> {
    let env = TestEnvironment::new()?;
    let json = stdout_json(seqlens_cmd(&env).args([
        "motif",
        "-m",
        "GC",
        "--context",
        "2",
        "--format",
        "json",
        "-s",
        "s=TTTGCAAA",
    ]));

    assert_eq!(json[0]["position"], 4);
    assert_eq!(json[0]["end_position"], 5);
    assert_eq!(json[0]["context_before"], "TT");
    assert_eq!(json[0]["context_after"], "AA");
    Ok(())
}

#[test]
fn test_align_text_report() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = panel_fasta(&env);
    seqlens_cmd(&env)
        .arg("align")
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ACG-----"))
        .stdout(predicate::str::contains("Consensus"))
        .stdout(predicate::str::contains("Total Gaps: 8"));
    Ok(())
}

#[test]
fn test_align_json() -> Result<()> {
    let env = TestEnvironment::new()?;
    let json = stdout_json(seqlens_cmd(&env).args([
        "align", "--format", "json", "-s", "a=ACGT", "-s", "b=ACCA", "-s", "c=AGC",
    ]));

    assert_eq!(json["consensus"]["sequence"], "ACCT");
    assert_eq!(json["alignment"]["length"], 4);
    assert_eq!(json["alignment"]["total_gaps"], 1);
    assert_eq!(json["alignment"]["sequences"][2]["padded"], "AGC-");
    Ok(())
}

#[test]
fn test_matrix_csv() -> Result<()> {
    let env = TestEnvironment::new()?;
    seqlens_cmd(&env)
        .args(["matrix", "--format", "csv", "-s", "a=ACGT", "-s", "b=ACGA"])
        .assert()
        .success()
        .stdout(",a,b\na,100.0,75.0\nb,75.0,100.0\n");
    Ok(())
}

#[test]
fn test_distance_by_index_and_title() -> Result<()> {
    let env = TestEnvironment::new()?;
    seqlens_cmd(&env)
        .args(["distance", "-s", "a=ACGT", "-s", "b=ACGA"])
        .args(["--first", "1", "--second", "b", "--method", "hamming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.2500"));
    Ok(())
}

#[test]
fn test_distance_precalculated_lookup() -> Result<()> {
    let env = TestEnvironment::new()?;
    let matrix = env.create_input_file("distances.json", r#"{"a|b": 0.12}"#)?;

    seqlens_cmd(&env)
        .args(["distance", "-s", "a=ACGT", "-s", "b=ACGA", "-s", "c=TTTT"])
        .args(["--first", "b", "--second", "a", "--method", "precalculated", "--matrix"])
        .arg(&matrix)
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1200"));

    seqlens_cmd(&env)
        .args(["distance", "-s", "a=ACGT", "-s", "b=ACGA", "-s", "c=TTTT"])
        .args(["--first", "a", "--second", "c", "--method", "precalculated", "--matrix"])
        .arg(&matrix)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown"));
    Ok(())
}

#[test]
fn test_export_to_stdout_is_exact() -> Result<()> {
    let env = TestEnvironment::new()?;
    seqlens_cmd(&env)
        .args(["export", "-s", "Gen TP53=ACGT", "-s", "b=acga"])
        .assert()
        .success()
        .stdout(">Gen TP53\nACGT\n>b\nacga\n");
    Ok(())
}

#[test]
fn test_export_gzip_file_round_trip() -> Result<()> {
    let env = TestEnvironment::new()?;
    let input = panel_fasta(&env);
    let output = env.output_path("out.fasta.gz");

    seqlens_cmd(&env)
        .arg("export")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 sequences"));

    let records = seqlens_bio::parse_fasta(&output)?;
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Gen TP53 humano", "Gen TP53 raton", "fragmento"]);
    assert_eq!(records[2].sequence, b"acg");
    Ok(())
}

#[test]
fn test_pairs_workflow() -> Result<()> {
    let env = TestEnvironment::new()?;

    seqlens_cmd(&env)
        .args(["pairs", "add", "ACGT", "GGCC"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored pair 1"));
    seqlens_cmd(&env)
        .args(["pairs", "add", "not dna", "TT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored pair 2"));

    let json = stdout_json(seqlens_cmd(&env).args(["pairs", "list", "--format", "json"]));
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[1]["id"], 2);
    assert_eq!(json[1]["first"], "not dna");

    seqlens_cmd(&env)
        .args(["pairs", "stats", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pair 1"))
        .stdout(predicate::str::contains("GC Content: 75.0%"))
        .stdout(predicate::str::contains("Hamming"));

    assert_eq!(env.open_store()?.len(), 2);
    Ok(())
}

#[test]
fn test_config_init_and_show() -> Result<()> {
    let env = TestEnvironment::new()?;

    seqlens_cmd(&env)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults"))
        .stdout(predicate::str::contains("motif_context = 10"));

    seqlens_cmd(&env).args(["config", "init"]).assert().success();
    assert!(config_file(&env).exists());

    seqlens_cmd(&env)
        .args(["config", "init"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    seqlens_cmd(&env)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    Ok(())
}
