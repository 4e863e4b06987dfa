use std::path::PathBuf;

/// Data directory below the user's home.
pub const DEFAULT_DATA_DIR: &str = ".hangar";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "HANGAR_HOME";

/// Gets the data directory, supporting the HANGAR_HOME env var.
pub fn data_dir() -> PathBuf {
    if let Ok(env_dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(env_dir);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DATA_DIR)
}

/// Environment variable holding log filter directives, e.g. `hangar_core=debug`.
/// `RUST_LOG` is read when it is unset.
pub const LOG_FILTER_ENV: &str = "HANGAR_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Daily log files kept per component.
pub const MAX_LOG_FILES: usize = 7;

pub fn log_dir() -> PathBuf {
    data_dir().join("logs")
}
