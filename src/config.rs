use log::LevelFilter;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `-d/--db` is not given.
pub const DB_ENV: &str = "LRLIST_DB";
/// Fallback database location: search the working directory.
pub const DEFAULT_DB_LOCATION: &str = ".";

/// Resolve where to look for the catalog: flag, then `LRLIST_DB`, then `.`.
pub fn database_location(flag: Option<&Path>) -> PathBuf {
    location_from_sources(flag, env_non_empty(DB_ENV))
}

fn location_from_sources(flag: Option<&Path>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    env_value
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_LOCATION))
}

/// Map repeated `-v` flags onto a log level. Zero keeps the quiet default.
pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
