//! Item domain model.
//!
//! # Invariants
//! - `price` is finite and `>= 0`; `num_in_stock` is a non-negative integer.
//! - `category` holds distinct ids in submission order. The first entry is
//!   the primary category used for display.
//! - Category ids are not checked for existence; they may dangle after a
//!   category is deleted.

use crate::model::category::CategoryId;
use crate::model::form::{limit_name, require_text, sanitize_text, FieldError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an item.
pub type ItemId = Uuid;

/// Path of the item list page.
pub const ITEM_LIST_URL: &str = "/catalog/items";

/// Returns the detail page path for an item id.
pub fn item_url(id: ItemId) -> String {
    format!("/catalog/item/{id}")
}

/// Persisted item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub num_in_stock: u32,
    pub category: Vec<CategoryId>,
}

impl Item {
    /// Creates an item with a freshly generated id.
    pub fn new(input: NewItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            price: input.price,
            num_in_stock: input.num_in_stock,
            category: input.category,
        }
    }

    pub fn url(&self) -> String {
        item_url(self.id)
    }

    /// Primary category reference, if any.
    pub fn primary_category(&self) -> Option<CategoryId> {
        self.category.first().copied()
    }
}

/// List projection: `{id, name}` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: ItemId,
    pub name: String,
}

impl ItemSummary {
    pub fn url(&self) -> String {
        item_url(self.id)
    }
}

/// Raw item form submission. Numeric fields stay strings until parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub num_in_stock: String,
    /// Selected category ids, one entry per checked box.
    pub category: Vec<String>,
}

/// Validated item input, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub num_in_stock: u32,
    pub category: Vec<CategoryId>,
}

/// Rejected item submission: the sanitized values plus field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRejection {
    pub draft: ItemDraft,
    pub errors: Vec<FieldError>,
}

impl ItemDraft {
    /// Returns a copy with free text escaped and every field trimmed.
    pub fn sanitized(&self) -> Self {
        Self {
            name: sanitize_text(&self.name),
            description: sanitize_text(&self.description),
            price: self.price.trim().to_string(),
            num_in_stock: self.num_in_stock.trim().to_string(),
            category: self
                .category
                .iter()
                .map(|value| sanitize_text(value))
                .filter(|value| !value.is_empty())
                .collect(),
        }
    }

    /// Sanitizes, parses and validates the submission.
    ///
    /// Checks run in field order (`name`, `description`, `price`,
    /// `num_in_stock`, `category`) and every failure is collected.
    ///
    /// # Errors
    /// - Returns the sanitized draft and all field errors on any failure.
    pub fn validate(&self) -> Result<NewItem, ItemRejection> {
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
        let price = parse_price(&draft.price, &mut errors);
        let num_in_stock = parse_stock(&draft.num_in_stock, &mut errors);
        let category = parse_category_refs(&draft.category, &mut errors);

        match (price, num_in_stock) {
            (Some(price), Some(num_in_stock)) if errors.is_empty() => Ok(NewItem {
                name: draft.name,
                description: draft.description,
                price,
                num_in_stock,
                category,
            }),
            _ => Err(ItemRejection { draft, errors }),
        }
    }
}

fn parse_price(value: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    match value.parse::<f64>() {
        Ok(price) if !price.is_finite() => {
            errors.push(FieldError::new("price", "Price must be a valid number."));
            None
        }
        Ok(price) if price < 0.0 => {
            errors.push(FieldError::new("price", "Price must not be negative."));
            None
        }
        Ok(price) => Some(price),
        Err(_) => {
            errors.push(FieldError::new("price", "Price must be a valid number."));
            None
        }
    }
}

fn parse_stock(value: &str, errors: &mut Vec<FieldError>) -> Option<u32> {
    match value.parse::<i64>() {
        Ok(count) if count < 0 => {
            errors.push(FieldError::new(
                "num_in_stock",
                "Number in stock must not be negative.",
            ));
            None
        }
        Ok(count) => match u32::try_from(count) {
            Ok(count) => Some(count),
            Err(_) => {
                errors.push(FieldError::new(
                    "num_in_stock",
                    "Number in stock is too large.",
                ));
                None
            }
        },
        Err(_) => {
            errors.push(FieldError::new(
                "num_in_stock",
                "Number in stock must be a whole number.",
            ));
            None
        }
    }
}

fn parse_category_refs(values: &[String], errors: &mut Vec<FieldError>) -> Vec<CategoryId> {
    let mut ids: Vec<CategoryId> = Vec::with_capacity(values.len());
    for value in values {
        match Uuid::parse_str(value) {
            Ok(id) if !ids.contains(&id) => ids.push(id),
            Ok(_) => {}
            Err(_) => errors.push(FieldError::new(
                "category",
                format!("Category reference `{value}` is not valid."),
            )),
        }
    }
    ids
}
