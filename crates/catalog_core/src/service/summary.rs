//! Catalog-wide counts for the home page.
//!
//! The two counts have no ordering dependency. `load_summary_concurrently`
//! issues them on separate connections from scoped threads and joins both
//! before returning.

use crate::db::open_db;
use crate::repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
use crate::repo::item_repo::{ItemRepository, SqliteItemRepository};
use crate::service::ServiceResult;
use serde::Serialize;
use std::path::Path;
use std::thread;

/// Total record counts per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub item_count: u64,
    pub category_count: u64,
}

/// Counts both collections through already-open repositories.
pub fn load_summary(
    items: &impl ItemRepository,
    categories: &impl CategoryRepository,
) -> ServiceResult<CatalogSummary> {
    Ok(CatalogSummary {
        item_count: items.count_items()?,
        category_count: categories.count_categories()?,
    })
}

/// Counts both collections concurrently, one connection per count.
pub fn load_summary_concurrently(db_path: &Path) -> ServiceResult<CatalogSummary> {
    let (item_count, category_count) = thread::scope(|scope| {
        let items = scope.spawn(|| -> ServiceResult<u64> {
            let conn = open_db(db_path)?;
            Ok(SqliteItemRepository::try_new(&conn)?.count_items()?)
        });
        let categories = scope.spawn(|| -> ServiceResult<u64> {
            let conn = open_db(db_path)?;
            Ok(SqliteCategoryRepository::try_new(&conn)?.count_categories()?)
        });
        (join_count(items), join_count(categories))
    });

    Ok(CatalogSummary {
        item_count: item_count?,
        category_count: category_count?,
    })
}

fn join_count(handle: thread::ScopedJoinHandle<'_, ServiceResult<u64>>) -> ServiceResult<u64> {
    match handle.join() {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}
