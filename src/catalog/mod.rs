//! Lightroom catalog access.
//!
//! [`Catalog`] owns the SQLite connection for the lifetime of a run. Every
//! operation borrows it and hands back a prepared [`Query`]; running the
//! query yields a single-pass [`Cursor`] over the result rows. Cursors borrow
//! the query, which borrows the catalog, so results can never outlive the
//! connection they read from.
//!
//! Errors are plain [`rusqlite::Error`] values. A catalog missing the expected
//! tables fails at prepare time with SQLite's own message.

pub mod collections;
pub mod model;
pub mod paths;
pub mod query;

pub use model::{Collection, Resolution};
pub use query::{Cursor, Query};

use log::debug;
use rusqlite::{Connection, OpenFlags, Result as SqlResult};
use std::path::{Path, PathBuf};

/// Read-only handle to a Lightroom catalog database.
pub struct Catalog {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Catalog {
    /// Open the catalog at `path` without write access.
    ///
    /// The file must already exist; SQLite will not create it in read-only
    /// mode.
    pub fn open(path: &Path) -> SqlResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!("opened catalog {} read-only", path.display());
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an already-open connection, e.g. an in-memory fixture.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn, path: None }
    }

    /// Location of the catalog file, when opened from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").field("path", &self.path).finish()
    }
}
