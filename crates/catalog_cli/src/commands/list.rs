//! Read-only listing commands.

use super::CommandResult;
use catalog_core::db::open_db;
use catalog_core::{
    load_summary_concurrently, CatalogConfig, CategoryService, ItemService,
    SqliteCategoryRepository, SqliteItemRepository,
};

pub fn categories(config: &CatalogConfig) -> CommandResult {
    let conn = open_db(&config.db_path)?;
    let service = CategoryService::new(
        SqliteCategoryRepository::try_new(&conn)?,
        SqliteItemRepository::try_new(&conn)?,
    );
    for category in service.list()? {
        println!("{}\t{}", category.url(), category.name);
    }
    Ok(())
}

pub fn items(config: &CatalogConfig) -> CommandResult {
    let conn = open_db(&config.db_path)?;
    let service = ItemService::new(
        SqliteItemRepository::try_new(&conn)?,
        SqliteCategoryRepository::try_new(&conn)?,
    );
    for item in service.list()? {
        println!("{}\t{}", item.url(), item.name);
    }
    Ok(())
}

pub fn summary(config: &CatalogConfig) -> CommandResult {
    let summary = load_summary_concurrently(&config.db_path)?;
    println!("items={}", summary.item_count);
    println!("categories={}", summary.category_count);
    Ok(())
}
