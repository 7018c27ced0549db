pub mod paths;

pub use paths::{config_path, generate_utc_timestamp, seqlens_home, store_path};
