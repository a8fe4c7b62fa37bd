//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the create/read/delete flows.
//! - Keep request handlers decoupled from storage details.
//!
//! # Invariants
//! - Nothing is persisted unless the submission validates.
//! - A case-insensitive name match short-circuits creation.
//! - Store failures are never retried; they propagate to the caller.

use crate::db::DbError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod category_service;
pub mod item_service;
pub mod summary;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Fatal errors from catalog use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Operation exists in the route table but has no behavior yet.
    NotImplemented(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::NotImplemented(operation) => write!(f, "not implemented: {operation}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotImplemented(_) => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<DbError> for ServiceError {
    fn from(value: DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}

/// Result of a create submission.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome<R> {
    /// A new record was persisted with this id.
    Created(Uuid),
    /// A record with the same folded name already exists; nothing persisted.
    Duplicate(Uuid),
    /// Validation failed; carries the state needed to redisplay the form.
    Rejected(R),
}

impl<R> CreateOutcome<R> {
    /// Id the caller should navigate to, if the submission was accepted.
    pub fn target_id(&self) -> Option<Uuid> {
        match self {
            Self::Created(id) | Self::Duplicate(id) => Some(*id),
            Self::Rejected(_) => None,
        }
    }
}
