#![allow(dead_code)]

use catalog_api::{Catalog, FormData, Page};
use tempfile::TempDir;

/// Catalog backed by a fresh database file that lives as long as the fixture.
pub struct Fixture {
    _dir: TempDir,
    pub catalog: Catalog,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::new(dir.path().join("catalog.sqlite3"));
        Self { _dir: dir, catalog }
    }

    pub fn get(&self, path: &str) -> Page {
        self.catalog
            .handle_request("GET", path, &FormData::new())
            .unwrap()
    }

    pub fn post(&self, path: &str, form: FormData) -> Page {
        self.catalog.handle_request("POST", path, &form).unwrap()
    }

    pub fn create_category(&self, name: &str, description: &str) -> String {
        let page = self.post(
            "/catalog/category/create",
            FormData::new()
                .with("name", name)
                .with("description", description),
        );
        page.location()
            .unwrap_or_else(|| panic!("expected redirect, got {page:?}"))
            .to_string()
    }
}

/// Last path segment of a detail URL.
pub fn id_of(url: &str) -> &str {
    url.rsplit('/').next().unwrap()
}
