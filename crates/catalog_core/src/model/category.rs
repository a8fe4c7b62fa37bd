//! Category domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another category.
//! - `name` and `description` are stored sanitized and non-empty.
//! - The detail URL is derived from `id` and never stored.

use crate::model::form::{limit_name, require_text, sanitize_text, FieldError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a category.
pub type CategoryId = Uuid;

/// Path of the category list page.
pub const CATEGORY_LIST_URL: &str = "/catalog/categories";

/// Returns the detail page path for a category id.
pub fn category_url(id: CategoryId) -> String {
    format!("/catalog/category/{id}")
}

/// Persisted category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl Category {
    /// Creates a category with a freshly generated id.
    pub fn new(input: NewCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
        }
    }

    pub fn url(&self) -> String {
        category_url(self.id)
    }
}

/// List projection: `{id, name}` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub name: String,
}

impl CategorySummary {
    pub fn url(&self) -> String {
        category_url(self.id)
    }
}

/// Raw category form submission, as received from the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

/// Validated category input, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Rejected category submission: the sanitized values plus field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRejection {
    pub draft: CategoryDraft,
    pub errors: Vec<FieldError>,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns a copy with every field trimmed and escaped.
    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize_text(&self.name),
            description: sanitize_text(&self.description),
        }
    }

    /// Sanitizes then validates the submission.
    ///
    /// # Errors
    /// - Returns the sanitized draft with every failing field when `name` or
    ///   `description` is empty, or `name` is longer than 100 characters.
    pub fn validate(&self) -> Result<NewCategory, CategoryRejection> {
        let draft = self.sanitized();
        let mut errors = Vec::new();
        require_text(&mut errors, "name", &draft.name, "Name must not be empty.");
        limit_name(&mut errors, &draft.name);
        require_text(
            &mut errors,
            "description",
            &draft.description,
            "Description must not be empty.",
        );

        if !errors.is_empty() {
            return Err(CategoryRejection { draft, errors });
        }

        Ok(NewCategory {
            name: draft.name,
            description: draft.description,
        })
    }
}
