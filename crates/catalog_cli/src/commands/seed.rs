//! Usage: catalog seed

use super::CommandResult;
use catalog_core::db::open_db;
use catalog_core::{seed_sample_catalog, CatalogConfig};

pub fn execute(config: &CatalogConfig) -> CommandResult {
    let conn = open_db(&config.db_path)?;
    let report = seed_sample_catalog(&conn)?;
    println!(
        "Seeded {}: {} categories, {} items created ({} already present)",
        config.db_path.display(),
        report.categories_created,
        report.items_created,
        report.duplicates_skipped
    );
    Ok(())
}
