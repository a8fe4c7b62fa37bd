use crate::outcome::{ApiResult, Page};
use crate::views::{IndexView, View};
use crate::Catalog;
use catalog_core::load_summary_concurrently;

impl Catalog {
    pub(crate) fn index(&self) -> ApiResult<Page> {
        let summary = load_summary_concurrently(self.db_path())?;
        Ok(Page::render(View::Index(IndexView {
            title: "Inventory Application Home".to_string(),
            item_count: summary.item_count,
            category_count: summary.category_count,
        })))
    }
}
