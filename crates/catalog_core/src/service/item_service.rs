//! Item use-case service.
//!
//! # Invariants
//! - A rejected submission always carries the full category option list
//!   with the submitted selection marked.
//! - A stale primary category reference resolves to `None`, never an error.

use crate::model::category::{Category, CategoryId, CategorySummary};
use crate::model::form::{fold_name, FieldError};
use crate::model::item::{Item, ItemDraft, ItemId, ItemSummary};
use crate::repo::category_repo::CategoryRepository;
use crate::repo::item_repo::ItemRepository;
use crate::service::{CreateOutcome, ServiceError, ServiceResult};
use log::{info, warn};
use serde::Serialize;

/// One entry of the category selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub id: CategoryId,
    pub name: String,
    pub checked: bool,
}

/// State needed to redisplay a rejected item form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFormState {
    /// Sanitized values exactly as the user submitted them.
    pub draft: ItemDraft,
    pub errors: Vec<FieldError>,
    pub categories: Vec<CategoryOption>,
}

/// Item joined with its primary category.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWithCategory {
    pub item: Item,
    /// `None` when the item has no category or the reference is stale.
    pub category: Option<Category>,
}

/// Item store over item and category repositories.
pub struct ItemService<I: ItemRepository, C: CategoryRepository> {
    items: I,
    categories: C,
}

impl<I: ItemRepository, C: CategoryRepository> ItemService<I, C> {
    pub fn new(items: I, categories: C) -> Self {
        Self { items, categories }
    }

    /// Lists every item as `{id, name}`, sorted by name.
    pub fn list(&self) -> ServiceResult<Vec<ItemSummary>> {
        Ok(self.items.list_items()?)
    }

    pub fn get_by_id(&self, id: ItemId) -> ServiceResult<Option<Item>> {
        Ok(self.items.get_item(id)?)
    }

    /// Fetches an item and resolves its primary category reference.
    pub fn get_by_id_with_category(&self, id: ItemId) -> ServiceResult<Option<ItemWithCategory>> {
        let Some(item) = self.items.get_item(id)? else {
            return Ok(None);
        };

        let category = match item.primary_category() {
            Some(category_id) => {
                let category = self.categories.get_category(category_id)?;
                if category.is_none() {
                    warn!(
                        "event=item_category_resolve module=service status=stale item_id={id} category_id={category_id}"
                    );
                }
                category
            }
            None => None,
        };

        Ok(Some(ItemWithCategory { item, category }))
    }

    /// Finds an item whose stored name matches `name` after case folding.
    pub fn find_by_name_case_insensitive(&self, name: &str) -> ServiceResult<Option<Item>> {
        Ok(self.items.find_item_by_name_key(&fold_name(name))?)
    }

    /// Validates and persists an item submission.
    ///
    /// # Contract
    /// - Invalid input returns `Rejected` with sanitized values, all field
    ///   errors, and category options marked with the submitted selection.
    /// - A folded-name match returns `Duplicate` with the existing id.
    /// - Otherwise exactly one item is inserted and `Created` returned.
    pub fn create(&self, draft: &ItemDraft) -> ServiceResult<CreateOutcome<ItemFormState>> {
        let input = match draft.validate() {
            Ok(input) => input,
            Err(rejection) => {
                info!(
                    "event=item_create module=service status=rejected error_count={}",
                    rejection.errors.len()
                );
                let categories = self.category_options(&rejection.draft.category)?;
                return Ok(CreateOutcome::Rejected(ItemFormState {
                    draft: rejection.draft,
                    errors: rejection.errors,
                    categories,
                }));
            }
        };

        if let Some(existing) = self.find_by_name_case_insensitive(&input.name)? {
            info!(
                "event=item_create module=service status=duplicate item_id={}",
                existing.id
            );
            return Ok(CreateOutcome::Duplicate(existing.id));
        }

        let item = Item::new(input);
        let id = self.items.create_item(&item)?;
        info!(
            "event=item_create module=service status=created item_id={id} category_count={}",
            item.category.len()
        );
        Ok(CreateOutcome::Created(id))
    }

    /// Deletes an item by id. Missing ids are a successful no-op.
    pub fn delete(&self, id: ItemId) -> ServiceResult<()> {
        let removed = self.items.delete_item(id)?;
        info!("event=item_delete module=service status=ok item_id={id} removed={removed}");
        Ok(())
    }

    /// Lists all categories sorted by name, for the selection control.
    pub fn list_categories_for_form(&self) -> ServiceResult<Vec<CategorySummary>> {
        Ok(self.categories.list_categories()?)
    }

    /// Builds selection options, checking those whose id is in `selected`.
    pub fn category_options(&self, selected: &[String]) -> ServiceResult<Vec<CategoryOption>> {
        let options = self
            .list_categories_for_form()?
            .into_iter()
            .map(|category| {
                let id_text = category.id.to_string();
                CategoryOption {
                    checked: selected.iter().any(|value| value.eq_ignore_ascii_case(&id_text)),
                    id: category.id,
                    name: category.name,
                }
            })
            .collect();
        Ok(options)
    }

    /// Item editing has no behavior yet.
    pub fn update(&self, _id: ItemId, _draft: &ItemDraft) -> ServiceResult<ItemId> {
        Err(ServiceError::NotImplemented("item update"))
    }
}
