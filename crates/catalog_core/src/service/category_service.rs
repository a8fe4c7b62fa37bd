//! Category use-case service.
//!
//! # Invariants
//! - `delete` is idempotent and does not look at referencing items.
//! - `list_items_in_category` is informational only; it never gates deletion.

use crate::model::category::{
    Category, CategoryDraft, CategoryId, CategoryRejection, CategorySummary,
};
use crate::model::form::fold_name;
use crate::model::item::Item;
use crate::repo::category_repo::CategoryRepository;
use crate::repo::item_repo::ItemRepository;
use crate::service::{CreateOutcome, ServiceError, ServiceResult};
use log::info;

/// Category store over category and item repositories.
pub struct CategoryService<C: CategoryRepository, I: ItemRepository> {
    categories: C,
    items: I,
}

impl<C: CategoryRepository, I: ItemRepository> CategoryService<C, I> {
    pub fn new(categories: C, items: I) -> Self {
        Self { categories, items }
    }

    /// Lists every category as `{id, name}`, sorted by name.
    pub fn list(&self) -> ServiceResult<Vec<CategorySummary>> {
        Ok(self.categories.list_categories()?)
    }

    pub fn get_by_id(&self, id: CategoryId) -> ServiceResult<Option<Category>> {
        Ok(self.categories.get_category(id)?)
    }

    /// Finds a category whose stored name matches `name` after case folding.
    ///
    /// `name` is compared in its stored (sanitized) form.
    pub fn find_by_name_case_insensitive(&self, name: &str) -> ServiceResult<Option<Category>> {
        Ok(self.categories.find_category_by_name_key(&fold_name(name))?)
    }

    /// Validates and persists a category submission.
    ///
    /// # Contract
    /// - Invalid input returns `Rejected` with sanitized values and errors.
    /// - A folded-name match returns `Duplicate` with the existing id.
    /// - Otherwise exactly one record is inserted and `Created` returned.
    pub fn create(
        &self,
        draft: &CategoryDraft,
    ) -> ServiceResult<CreateOutcome<CategoryRejection>> {
        let input = match draft.validate() {
            Ok(input) => input,
            Err(rejection) => {
                info!(
                    "event=category_create module=service status=rejected error_count={}",
                    rejection.errors.len()
                );
                return Ok(CreateOutcome::Rejected(rejection));
            }
        };

        if let Some(existing) = self.find_by_name_case_insensitive(&input.name)? {
            info!(
                "event=category_create module=service status=duplicate category_id={}",
                existing.id
            );
            return Ok(CreateOutcome::Duplicate(existing.id));
        }

        let category = Category::new(input);
        let id = self.categories.create_category(&category)?;
        info!("event=category_create module=service status=created category_id={id}");
        Ok(CreateOutcome::Created(id))
    }

    /// Deletes a category by id. Missing ids are a successful no-op.
    pub fn delete(&self, id: CategoryId) -> ServiceResult<()> {
        let removed = self.categories.delete_category(id)?;
        info!("event=category_delete module=service status=ok category_id={id} removed={removed}");
        Ok(())
    }

    /// Lists items whose category set contains `id`, sorted by name.
    pub fn list_items_in_category(&self, id: CategoryId) -> ServiceResult<Vec<Item>> {
        Ok(self.items.list_items_in_category(id)?)
    }

    /// Category editing has no behavior yet.
    pub fn update(&self, _id: CategoryId, _draft: &CategoryDraft) -> ServiceResult<CategoryId> {
        Err(ServiceError::NotImplemented("category update"))
    }
}
