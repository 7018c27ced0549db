use std::path::PathBuf;

/// Generate a UTC timestamp in RFC 3339 form
pub fn generate_utc_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Get the seqlens home directory
/// Checks SEQLENS_HOME environment variable, falls back to ${HOME}/.seqlens
pub fn seqlens_home() -> PathBuf {
    if let Ok(path) = std::env::var("SEQLENS_HOME") {
        PathBuf::from(path)
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| {
            std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string())
        });
        PathBuf::from(home).join(".seqlens")
    }
}

/// Get the config file path
/// Checks SEQLENS_CONFIG environment variable, falls back to SEQLENS_HOME/config.toml
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("SEQLENS_CONFIG") {
        PathBuf::from(path)
    } else {
        seqlens_home().join("config.toml")
    }
}

/// Get the default pair store path: SEQLENS_HOME/pairs.json
pub fn store_path() -> PathBuf {
    seqlens_home().join("pairs.json")
}
