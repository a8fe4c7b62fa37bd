//! Route handlers, one `impl Catalog` block per entity.

use crate::outcome::Page;
use catalog_core::{
    CategoryService, ItemService, ServiceResult, SqliteCategoryRepository, SqliteItemRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

mod category;
mod index;
mod item;

type Categories<'c> = CategoryService<SqliteCategoryRepository<'c>, SqliteItemRepository<'c>>;
type Items<'c> = ItemService<SqliteItemRepository<'c>, SqliteCategoryRepository<'c>>;

fn category_service(conn: &Connection) -> ServiceResult<Categories<'_>> {
    Ok(CategoryService::new(
        SqliteCategoryRepository::try_new(conn)?,
        SqliteItemRepository::try_new(conn)?,
    ))
}

fn item_service(conn: &Connection) -> ServiceResult<Items<'_>> {
    Ok(ItemService::new(
        SqliteItemRepository::try_new(conn)?,
        SqliteCategoryRepository::try_new(conn)?,
    ))
}

/// Parses a path or form id. Malformed ids are treated like missing records.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Placeholder answer shared by the update routes of both entities.
fn update_not_implemented(entity: &str, verb: &str) -> Page {
    Page::NotImplemented {
        message: format!("NOT IMPLEMENTED: {entity} update {verb}"),
    }
}
