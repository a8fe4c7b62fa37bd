//! Request-level API for the inventory catalog.
//!
//! # Responsibility
//! - Resolve `(method, path)` pairs to catalog operations.
//! - Run each operation against the stores on a fresh connection.
//! - Hand back a [`Page`] for the renderer, or a fatal [`ApiError`].
//!
//! # Invariants
//! - Requests share no in-process mutable state; each opens its own
//!   connection.
//! - Handlers never panic on user input; bad ids become 404 pages or
//!   redirects depending on the flow.

pub mod form;
mod handlers;
pub mod outcome;
pub mod routes;
pub mod views;

pub use form::FormData;
pub use outcome::{ApiError, ApiResult, Page};
pub use routes::{Method, Route};

use catalog_core::db::open_db;
use catalog_core::{CatalogConfig, ServiceError, ServiceResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Catalog request handler bound to one database file.
#[derive(Debug, Clone)]
pub struct Catalog {
    db_path: PathBuf,
}

impl Catalog {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.db_path.clone())
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Resolves and handles one request.
    ///
    /// Unknown routes produce a 404 page rather than an error.
    pub fn handle_request(&self, method: &str, path: &str, form: &FormData) -> ApiResult<Page> {
        match Method::parse(method).and_then(|method| Route::resolve(method, path)) {
            Some(route) => self.handle(&route, form),
            None => {
                info!("event=request module=api route=unknown status=404");
                Ok(Page::not_found("Page not found"))
            }
        }
    }

    /// Handles an already-resolved route.
    ///
    /// # Errors
    /// - Store failures propagate as [`ApiError`]; nothing is retried.
    pub fn handle(&self, route: &Route, form: &FormData) -> ApiResult<Page> {
        let started_at = Instant::now();
        let result = match route {
            Route::Index => self.index(),
            Route::CategoryList => self.category_list(),
            Route::CategoryDetail(id) => self.category_detail(id),
            Route::CategoryCreateForm => Ok(self.category_create_get()),
            Route::CategoryCreate => self.category_create_post(form),
            Route::CategoryDeleteForm(id) => self.category_delete_get(id),
            Route::CategoryDelete(id) => self.category_delete_post(id, form),
            Route::CategoryUpdateForm(id) => Ok(self.category_update_get(id)),
            Route::CategoryUpdate(id) => self.category_update_post(id, form),
            Route::ItemList => self.item_list(),
            Route::ItemDetail(id) => self.item_detail(id),
            Route::ItemCreateForm => self.item_create_get(),
            Route::ItemCreate => self.item_create_post(form),
            Route::ItemDeleteForm(id) => self.item_delete_get(id),
            Route::ItemDelete(id) => self.item_delete_post(id),
            Route::ItemUpdateForm(id) => Ok(self.item_update_get(id)),
            Route::ItemUpdate(id) => self.item_update_post(id, form),
        };

        match &result {
            Ok(page) => info!(
                "event=request module=api route={} status={} duration_ms={}",
                route.name(),
                page.status_code(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=request module=api route={} status=500 duration_ms={} error={err}",
                route.name(),
                started_at.elapsed().as_millis()
            ),
        }
        result
    }

    fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> ServiceResult<T>) -> ApiResult<T> {
        let conn = open_db(&self.db_path).map_err(ServiceError::from)?;
        Ok(f(&conn)?)
    }
}
