use crate::catalog::{Catalog, Collection, Query, Resolution};
use log::warn;
use rusqlite::{Result as SqlResult, Row};

const LIST_SQL: &str = "SELECT id_local, name, parent FROM AgLibraryCollection";

// The raw reference is bound once and compared against both columns. SQLite
// applies numeric affinity when comparing against `id_local`, so "42" matches
// id 42 as well as a collection literally named "42".
const RESOLVE_SQL: &str = "SELECT id_local, name, parent
     FROM AgLibraryCollection
     WHERE name = ?1 OR id_local = ?1";

impl Catalog {
    /// Every collection in the catalog, in storage order.
    pub fn list_all(&self) -> SqlResult<Query<'_, Collection>> {
        Query::prepare(self.connection(), LIST_SQL, None, collection_from_row)
    }

    /// Collections whose name or id equals `reference`.
    ///
    /// No match is an empty result, not an error; several matches are all
    /// returned.
    pub fn resolve(&self, reference: &str) -> SqlResult<Query<'_, Collection>> {
        Query::prepare(
            self.connection(),
            RESOLVE_SQL,
            Some(reference),
            collection_from_row,
        )
    }

    /// Run [`Catalog::resolve`] to completion and classify the outcome.
    pub fn resolution(&self, reference: &str) -> SqlResult<Resolution> {
        let resolution = self
            .resolve(reference)?
            .run()?
            .collect::<SqlResult<Resolution>>()?;
        match &resolution {
            Resolution::NotFound => warn!("no collection matches {reference:?}"),
            Resolution::Ambiguous(found) => warn!(
                "collection reference {reference:?} matches {} collections",
                found.len()
            ),
            Resolution::Unique(_) => {}
        }
        Ok(resolution)
    }
}

fn collection_from_row(row: &Row<'_>) -> SqlResult<Collection> {
    Ok(Collection {
        id: row.get(0)?,
        name: row.get(1)?,
        parent: row.get(2)?,
    })
}
