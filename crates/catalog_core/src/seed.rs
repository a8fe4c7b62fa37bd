//! Sample catalog data for local development.
//!
//! Records go through the validated create path, so seeding an already
//! seeded database adds nothing: every name resolves as a duplicate.

use crate::model::category::{CategoryDraft, CategoryId};
use crate::model::item::ItemDraft;
use crate::repo::category_repo::SqliteCategoryRepository;
use crate::repo::item_repo::SqliteItemRepository;
use crate::service::category_service::CategoryService;
use crate::service::item_service::ItemService;
use crate::service::{CreateOutcome, ServiceResult};
use log::{info, warn};
use rusqlite::Connection;

const SAMPLE_CATEGORIES: &[(&str, &str)] = &[
    ("Electronics", "Devices and gadgets"),
    ("Books", "Printed and digital books"),
    ("Clothing", "Men and women clothing"),
    ("Furniture", "Home and office furniture"),
    ("Toys", "Toys and games for children"),
    ("Groceries", "Daily essentials and food items"),
];

/// `(name, description, price, num_in_stock, category index)`
const SAMPLE_ITEMS: &[(&str, &str, &str, &str, usize)] = &[
    ("Smartphone", "A modern smartphone", "599", "50", 0),
    ("Laptop", "A powerful laptop", "999", "30", 0),
    ("Novel", "A captivating novel", "19.99", "100", 1),
    ("T-shirt", "A comfortable T-shirt", "9.99", "200", 2),
    ("Sofa", "A comfortable sofa", "299", "10", 3),
    ("Desk", "A wooden desk", "149", "20", 3),
    ("Action Figure", "A popular action figure", "14.99", "150", 4),
    ("Board Game", "A fun board game for the family", "29.99", "75", 4),
    ("Milk", "A gallon of milk", "3.99", "200", 5),
    ("Bread", "A loaf of bread", "2.99", "150", 5),
];

/// Counts of what a seeding run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories_created: usize,
    pub items_created: usize,
    pub duplicates_skipped: usize,
}

/// Inserts the sample categories, then the sample items that reference them.
pub fn seed_sample_catalog(conn: &Connection) -> ServiceResult<SeedReport> {
    let categories = CategoryService::new(
        SqliteCategoryRepository::try_new(conn)?,
        SqliteItemRepository::try_new(conn)?,
    );
    let items = ItemService::new(
        SqliteItemRepository::try_new(conn)?,
        SqliteCategoryRepository::try_new(conn)?,
    );
    let mut report = SeedReport::default();

    let mut category_ids: Vec<CategoryId> = Vec::with_capacity(SAMPLE_CATEGORIES.len());
    for (name, description) in SAMPLE_CATEGORIES {
        match categories.create(&CategoryDraft::new(*name, *description))? {
            CreateOutcome::Created(id) => {
                report.categories_created += 1;
                category_ids.push(id);
            }
            CreateOutcome::Duplicate(id) => {
                report.duplicates_skipped += 1;
                category_ids.push(id);
            }
            CreateOutcome::Rejected(rejection) => {
                warn!(
                    "event=seed module=seed status=rejected kind=category error_count={}",
                    rejection.errors.len()
                );
            }
        }
    }

    for (name, description, price, num_in_stock, category_index) in SAMPLE_ITEMS {
        let draft = ItemDraft {
            name: (*name).to_string(),
            description: (*description).to_string(),
            price: (*price).to_string(),
            num_in_stock: (*num_in_stock).to_string(),
            category: category_ids
                .get(*category_index)
                .map(|id| vec![id.to_string()])
                .unwrap_or_default(),
        };
        match items.create(&draft)? {
            CreateOutcome::Created(_) => report.items_created += 1,
            CreateOutcome::Duplicate(_) => report.duplicates_skipped += 1,
            CreateOutcome::Rejected(state) => {
                warn!(
                    "event=seed module=seed status=rejected kind=item error_count={}",
                    state.errors.len()
                );
            }
        }
    }

    info!(
        "event=seed module=seed status=ok categories_created={} items_created={} duplicates_skipped={}",
        report.categories_created, report.items_created, report.duplicates_skipped
    );
    Ok(report)
}
