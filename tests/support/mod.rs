#![allow(dead_code)]

use anyhow::{Context, Result};
use lrlist::Catalog;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// The subset of the Lightroom schema the traversal touches. Column names
// match real catalogs; unused columns are omitted.
const SCHEMA: &str = "
CREATE TABLE AgLibraryRootFolder (
    id_local INTEGER PRIMARY KEY,
    absolutePath NOT NULL DEFAULT '',
    name NOT NULL DEFAULT ''
);
CREATE TABLE AgLibraryFolder (
    id_local INTEGER PRIMARY KEY,
    pathFromRoot NOT NULL DEFAULT '',
    rootFolder INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE AgLibraryFile (
    id_local INTEGER PRIMARY KEY,
    folder INTEGER NOT NULL DEFAULT 0,
    idx_filename NOT NULL DEFAULT ''
);
CREATE TABLE Adobe_images (
    id_local INTEGER PRIMARY KEY,
    captureTime,
    rootFile INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE AgLibraryCollection (
    id_local INTEGER PRIMARY KEY,
    creationId NOT NULL DEFAULT 'com.adobe.ag.library.collection',
    name NOT NULL DEFAULT '',
    parent INTEGER
);
CREATE TABLE AgLibraryCollectionImage (
    id_local INTEGER PRIMARY KEY,
    collection INTEGER NOT NULL DEFAULT 0,
    image INTEGER NOT NULL DEFAULT 0
);
";

/// A throwaway `*.lrcat` in its own temp directory.
pub struct FixtureCatalog {
    dir: TempDir,
    path: PathBuf,
    conn: Connection,
}

impl FixtureCatalog {
    pub fn new() -> Result<Self> {
        Self::named("Fixture.lrcat")
    }

    pub fn named(file_name: &str) -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate fixture dir")?;
        let path = dir.path().join(file_name);
        let conn = Connection::open(&path)
            .with_context(|| format!("creating fixture catalog {}", path.display()))?;
        conn.execute_batch(SCHEMA).context("creating fixture schema")?;
        Ok(Self { dir, path, conn })
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open(&self) -> Result<Catalog> {
        Catalog::open(&self.path).context("opening fixture catalog")
    }

    pub fn collection(&self, id: i64, name: &str, parent: Option<i64>) -> Result<()> {
        self.conn.execute(
            "INSERT INTO AgLibraryCollection (id_local, name, parent) VALUES (?1, ?2, ?3)",
            params![id, name, parent],
        )?;
        Ok(())
    }

    pub fn root_folder(&self, id: i64, absolute_path: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO AgLibraryRootFolder (id_local, absolutePath) VALUES (?1, ?2)",
            params![id, absolute_path],
        )?;
        Ok(())
    }

    pub fn folder(&self, id: i64, root_folder: i64, path_from_root: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO AgLibraryFolder (id_local, rootFolder, pathFromRoot) VALUES (?1, ?2, ?3)",
            params![id, root_folder, path_from_root],
        )?;
        Ok(())
    }

    pub fn file(&self, id: i64, folder: i64, filename: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO AgLibraryFile (id_local, folder, idx_filename) VALUES (?1, ?2, ?3)",
            params![id, folder, filename],
        )?;
        Ok(())
    }

    pub fn image(&self, id: i64, file: i64, capture_time: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO Adobe_images (id_local, rootFile, captureTime) VALUES (?1, ?2, ?3)",
            params![id, file, capture_time],
        )?;
        Ok(())
    }

    pub fn add_member(&self, collection: i64, image: i64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO AgLibraryCollectionImage (collection, image) VALUES (?1, ?2)",
            params![collection, image],
        )?;
        Ok(())
    }

    /// Root, folder, file and image rows for one photo, all sharing `id`.
    pub fn photo(
        &self,
        id: i64,
        root: &str,
        folder: &str,
        filename: &str,
        capture_time: &str,
    ) -> Result<()> {
        self.root_folder(id, root)?;
        self.folder(id, id, folder)?;
        self.file(id, id, filename)?;
        self.image(id, id, capture_time)
    }
}

/// Two collections, one nested, with three photos captured out of
/// insertion order.
pub fn sample_catalog() -> Result<FixtureCatalog> {
    let fixture = FixtureCatalog::new()?;
    fixture.collection(10, "Trips", None)?;
    fixture.collection(11, "Iceland", Some(10))?;
    fixture.root_folder(1, "/photos/")?;
    fixture.folder(1, 1, "2023/trip/")?;
    fixture.file(1, 1, "IMG_001.CR2")?;
    fixture.file(2, 1, "IMG_002.CR2")?;
    fixture.file(3, 1, "IMG_003.CR2")?;
    fixture.image(1, 1, "2023-06-02T10:00:00")?;
    fixture.image(2, 2, "2023-06-01T09:00:00")?;
    fixture.image(3, 3, "2023-06-03T08:00:00")?;
    for image in 1..=3 {
        fixture.add_member(11, image)?;
    }
    Ok(fixture)
}

pub fn lrlist() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lrlist"));
    cmd.env_remove("LRLIST_DB").env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to run {:?}", cmd.get_program()))
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
