//! Catalog database bootstrap.
//!
//! # Responsibility
//! - Hand out catalog connections that are configured and fully migrated.
//! - Say which catalog file failed when a connection cannot be produced.
//!
//! # Invariants
//! - Catalog data is never read or written before migrations succeed.
//! - A database stamped by a newer build is refused untouched.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory, DbLocation};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// The catalog file could not be opened or configured.
    Open {
        location: DbLocation,
        source: Box<DbError>,
    },
    /// A single migration step failed; earlier steps were rolled back with it.
    Migration {
        version: u32,
        name: &'static str,
        source: rusqlite::Error,
    },
    /// The file carries a schema stamp this build does not know.
    SchemaTooNew { found: u32, supported: u32 },
    Sqlite(rusqlite::Error),
}

impl DbError {
    pub(crate) fn at(self, location: &DbLocation) -> Self {
        match self {
            already @ Self::Open { .. } => already,
            other => Self::Open {
                location: location.clone(),
                source: Box::new(other),
            },
        }
    }

    /// Innermost cause, skipping the location wrapper.
    pub fn root(&self) -> &DbError {
        match self {
            Self::Open { source, .. } => source.root(),
            other => other,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { location, source } => {
                write!(f, "cannot open catalog {location}: {source}")
            }
            Self::Migration {
                version,
                name,
                source,
            } => write!(f, "migration {version} ({name}) failed: {source}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "schema version {found} is newer than this build supports ({supported})"
            ),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source.as_ref()),
            Self::Migration { source, .. } | Self::Sqlite(source) => Some(source),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
