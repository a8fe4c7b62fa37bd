//! Catalog domain model.
//!
//! # Responsibility
//! - Define the `Category` and `Item` records and their read projections.
//! - Own boundary parsing: raw form strings become typed, validated input.
//!
//! # Invariants
//! - Every record is identified by a stable UUID generated at creation.
//! - Names are at most 100 characters and never blank.
//! - An item's category list is a weak reference set; ids may be stale.

pub mod category;
pub mod form;
pub mod item;
