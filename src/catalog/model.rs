use serde::Serialize;
use std::fmt;

/// One row of `AgLibraryCollection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    /// Parent collection id; `None` for top-level collections and sets.
    pub parent: Option<i64>,
}

impl fmt::Display for Collection {
    /// Listing line: right-aligned id, name, and the parent if there is one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>8}: {}", self.id, self.name)?;
        if let Some(parent) = self.parent {
            write!(f, " (child of {parent})")?;
        }
        Ok(())
    }
}

/// How a collection reference resolved.
///
/// The resolver only reports matches; callers that need exactly one
/// collection use this to decide what the shape of the result means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NotFound,
    Unique(Collection),
    Ambiguous(Vec<Collection>),
}

impl Resolution {
    pub fn unique(&self) -> Option<&Collection> {
        match self {
            Resolution::Unique(collection) => Some(collection),
            Resolution::NotFound | Resolution::Ambiguous(_) => None,
        }
    }
}

impl FromIterator<Collection> for Resolution {
    fn from_iter<I: IntoIterator<Item = Collection>>(iter: I) -> Self {
        let mut matches: Vec<Collection> = iter.into_iter().collect();
        match matches.len() {
            0 => Resolution::NotFound,
            1 => Resolution::Unique(matches.remove(0)),
            _ => Resolution::Ambiguous(matches),
        }
    }
}
