//! Test utilities for the seqlens workspace
//!
//! Fixtures, FASTA builders, isolated environments and assertions shared by
//! the integration tests of every crate.

pub mod assertions;
pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::{assert_close, assert_percentages_sum_to_100, assert_valid_fasta};
pub use environment::TestEnvironment;
pub use fixtures::{
    create_test_fasta, generate_related_sequences, generate_sequences, sample_panel, TestSequence,
};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (safe to call from every test)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
