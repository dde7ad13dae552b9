//! Catalog file discovery.
//!
//! The CLI accepts either a catalog file or a directory holding one. A
//! directory is searched (non-recursively) for exactly one `*.lrcat` file;
//! Lightroom's sidecars (`.lrcat-wal`, `.lrcat.lock`, `.lrcat-data`) never
//! match because the extension must be exactly `lrcat`.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extension Lightroom uses for catalog databases.
pub const CATALOG_EXTENSION: &str = "lrcat";

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("no Lightroom database found at '{}'", .0.display())]
    NotFound(PathBuf),
    #[error("multiple Lightroom databases found: {}", quoted_list(.0))]
    Ambiguous(Vec<PathBuf>),
    #[error("reading directory '{}'", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Turn a `-d` argument into the catalog file to open.
///
/// Anything that is not a directory is returned untouched; opening it is
/// left to SQLite so a bad path surfaces as a storage error.
pub fn locate_catalog(location: &Path) -> Result<PathBuf, DiscoveryError> {
    if !location.is_dir() {
        debug!("using catalog path {} as given", location.display());
        return Ok(location.to_path_buf());
    }

    let mut found = catalogs_in(location)?;
    match found.len() {
        0 => Err(DiscoveryError::NotFound(location.to_path_buf())),
        1 => {
            let catalog = found.remove(0);
            debug!("found catalog {}", catalog.display());
            Ok(catalog)
        }
        _ => Err(DiscoveryError::Ambiguous(found)),
    }
}

fn catalogs_in(dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let read_err = |source| DiscoveryError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if is_catalog_file(&path) {
            found.push(path);
        }
    }
    found.sort();
    Ok(found)
}

fn is_catalog_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'));
    !hidden
        && path.is_file()
        && path.extension().and_then(|ext| ext.to_str()) == Some(CATALOG_EXTENSION)
}

fn quoted_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("'{}'", path.display()))
        .collect::<Vec<_>>()
        .join(", ")
}
