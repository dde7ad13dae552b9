//! Image path reconstruction.
//!
//! Lightroom stores a file's location in three pieces: the root folder's
//! absolute path, the folder's path below that root, and the bare filename.
//! The catalog keeps separators on the fragments themselves (`/photos/`,
//! `2023/trip/`), so joining is plain concatenation.

use crate::catalog::{Catalog, Query};
use rusqlite::{Result as SqlResult, Row};

// Filters on the collection directly rather than on a resolved id so the
// whole lookup is one statement. One output row per membership row: virtual
// copies and repeated memberships surface as repeated paths.
const PATHS_SQL: &str = "SELECT rootfolder.absolutePath, folder.pathFromRoot, file.idx_filename
     FROM AgLibraryCollection collection
     JOIN AgLibraryCollectionImage membership ON membership.collection = collection.id_local
     JOIN Adobe_images image ON image.id_local = membership.image
     JOIN AgLibraryFile file ON file.id_local = image.rootFile
     JOIN AgLibraryFolder folder ON folder.id_local = file.folder
     JOIN AgLibraryRootFolder rootfolder ON rootfolder.id_local = folder.rootFolder
     WHERE collection.name = ?1 OR collection.id_local = ?1
     ORDER BY image.captureTime";

impl Catalog {
    /// Absolute paths of every image in the collection(s) matching
    /// `reference`, oldest capture first.
    pub fn enumerate_paths(&self, reference: &str) -> SqlResult<Query<'_, String>> {
        Query::prepare(self.connection(), PATHS_SQL, Some(reference), path_from_row)
    }
}

fn path_from_row(row: &Row<'_>) -> SqlResult<String> {
    let root: String = row.get(0)?;
    let folder: String = row.get(1)?;
    let filename: String = row.get(2)?;
    Ok(join_fragments(&root, &folder, &filename))
}

fn join_fragments(root: &str, folder: &str, filename: &str) -> String {
    let mut path = String::with_capacity(root.len() + folder.len() + filename.len());
    path.push_str(root);
    path.push_str(folder);
    path.push_str(filename);
    path
}
