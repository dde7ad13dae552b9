//! Prepared statements and the cursors they produce.

use log::{debug, trace};
use rusqlite::{Connection, Result as SqlResult, Row, Rows, Statement};
use std::iter::FusedIterator;

/// Converts one result row into an item.
pub type RowMapper<T> = fn(&Row<'_>) -> SqlResult<T>;

/// A prepared catalog query, optionally bound to a collection reference.
///
/// Each call to [`Query::run`] re-executes the statement and returns a fresh
/// cursor; a cursor itself cannot be rewound.
pub struct Query<'c, T> {
    stmt: Statement<'c>,
    reference: Option<String>,
    map: RowMapper<T>,
}

impl<'c, T> Query<'c, T> {
    pub(crate) fn prepare(
        conn: &'c Connection,
        sql: &str,
        reference: Option<&str>,
        map: RowMapper<T>,
    ) -> SqlResult<Self> {
        trace!("preparing: {sql}");
        let stmt = conn.prepare(sql)?;
        Ok(Self {
            stmt,
            reference: reference.map(str::to_owned),
            map,
        })
    }

    /// The reference bound to `?1`, if the query is filtered.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Execute the statement and stream its rows.
    pub fn run(&mut self) -> SqlResult<Cursor<'_, T>> {
        let rows = match &self.reference {
            Some(reference) => {
                debug!("querying catalog for reference {reference:?}");
                self.stmt.query([reference.as_str()])?
            }
            None => self.stmt.query([])?,
        };
        Ok(Cursor {
            rows,
            map: self.map,
            done: false,
        })
    }
}

/// Single-pass iterator over the rows of a running [`Query`].
///
/// Rows are fetched from SQLite one at a time. The first error ends the
/// iteration.
pub struct Cursor<'s, T> {
    rows: Rows<'s>,
    map: RowMapper<T>,
    done: bool,
}

impl<T> Iterator for Cursor<'_, T> {
    type Item = SqlResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.rows.next() {
            Ok(Some(row)) => {
                let item = (self.map)(row);
                if item.is_err() {
                    self.done = true;
                }
                Some(item)
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<T> FusedIterator for Cursor<'_, T> {}
