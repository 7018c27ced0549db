//! Isolated test environments with automatic cleanup

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory acting as a seqlens home plus scratch space
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::Builder::new()
            .prefix("seqlens-test-")
            .tempdir()
            .context("Failed to create test directory")?;
        Ok(Self { temp_dir })
    }

    /// Directory to pass as SEQLENS_HOME
    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// Write an input file and return its path
    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Path for an output file inside the environment
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Pair store path under this environment's home
    pub fn store_path(&self) -> PathBuf {
        self.home().join("pairs.json")
    }

    /// Open the pair store the binary would use with this home
    pub fn open_store(&self) -> Result<seqlens_core::PairStore> {
        Ok(seqlens_core::PairStore::open(self.store_path())?)
    }
}
