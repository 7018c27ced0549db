#![allow(dead_code)]

use assert_cmd::Command;
pub use seqlens_test::{create_test_fasta, sample_panel, TestEnvironment};
use std::path::PathBuf;

/// Command for the seqlens binary isolated inside `env`
pub fn seqlens_cmd(env: &TestEnvironment) -> Command {
    let mut cmd = Command::cargo_bin("seqlens").unwrap();
    cmd.env("SEQLENS_HOME", env.home())
        .env("SEQLENS_CONFIG", config_file(env))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SEQLENS_LOG");
    cmd
}

pub fn config_file(env: &TestEnvironment) -> PathBuf {
    env.home().join("config.toml")
}

/// Write the three-record sample panel and return its path
pub fn panel_fasta(env: &TestEnvironment) -> PathBuf {
    env.create_input_file("panel.fasta", &create_test_fasta(&sample_panel()))
        .unwrap()
}

/// Parse stdout of a successful run as JSON
pub fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}
