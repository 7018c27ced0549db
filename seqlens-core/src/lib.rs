//! Core utilities and types shared across all seqlens crates

pub mod config;
pub mod error;
pub mod store;
pub mod system;

// Re-export commonly used types
pub use config::{default_config, load_config, load_config_or_default, save_config, Config};
pub use error::{SeqlensError, SeqlensResult, ValidationError};
pub use store::{PairStore, StoredPair};

// Re-export system utilities
pub use system::{config_path, generate_utc_timestamp, seqlens_home, store_path};

/// Version information for the seqlens project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
