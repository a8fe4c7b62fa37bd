//! Core domain logic for the inventory catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use config::CatalogConfig;
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::category::{
    category_url, Category, CategoryDraft, CategoryId, CategoryRejection, CategorySummary,
    NewCategory, CATEGORY_LIST_URL,
};
pub use model::form::{fold_name, sanitize_text, FieldError, NAME_MAX_CHARS};
pub use model::item::{
    item_url, Item, ItemDraft, ItemId, ItemRejection, ItemSummary, NewItem, ITEM_LIST_URL,
};
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::item_repo::{ItemRepository, SqliteItemRepository};
pub use repo::{RepoError, RepoResult};
pub use seed::{seed_sample_catalog, SeedReport};
pub use service::category_service::CategoryService;
pub use service::item_service::{CategoryOption, ItemFormState, ItemService, ItemWithCategory};
pub use service::summary::{load_summary, load_summary_concurrently, CatalogSummary};
pub use service::{CreateOutcome, ServiceError, ServiceResult};

