//! Read-only traversal of Lightroom catalogs.
//!
//! A catalog (`*.lrcat`) is a SQLite database. This crate resolves collection
//! references against it and reconstructs the absolute paths of every image
//! in a collection, ordered by capture time. The `lrlist` binary is a thin
//! wrapper around [`Catalog`] plus [`locate_catalog`].

pub mod catalog;
pub mod config;
pub mod discovery;

pub use catalog::{Catalog, Collection, Cursor, Query, Resolution};
pub use config::{DB_ENV, DEFAULT_DB_LOCATION, database_location, log_level};
pub use discovery::{CATALOG_EXTENSION, DiscoveryError, locate_catalog};
