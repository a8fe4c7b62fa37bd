use super::{category_service, parse_id, update_not_implemented};
use crate::form::FormData;
use crate::outcome::{ApiError, ApiResult, Page};
use crate::views::{
    CategoryDeleteView, CategoryDetailView, CategoryFormView, CategoryListView, LinkView, View,
};
use crate::Catalog;
use catalog_core::{category_url, CategoryDraft, CreateOutcome, ServiceError, CATEGORY_LIST_URL};

const CREATE_TITLE: &str = "Create Category";

impl Catalog {
    pub(crate) fn category_list(&self) -> ApiResult<Page> {
        let categories = self.with_connection(|conn| category_service(conn)?.list())?;
        Ok(Page::render(View::CategoryList(CategoryListView {
            title: "Category List".to_string(),
            category_list: categories.into_iter().map(LinkView::from).collect(),
        })))
    }

    pub(crate) fn category_detail(&self, raw_id: &str) -> ApiResult<Page> {
        let Some(id) = parse_id(raw_id) else {
            return Ok(Page::not_found("Category not found"));
        };
        let found = self.with_connection(|conn| {
            let service = category_service(conn)?;
            let Some(category) = service.get_by_id(id)? else {
                return Ok(None);
            };
            let items = service.list_items_in_category(id)?;
            Ok(Some((category, items)))
        })?;

        let Some((category, items)) = found else {
            return Ok(Page::not_found("Category not found"));
        };
        Ok(Page::render(View::CategoryDetail(CategoryDetailView {
            title: category.name.clone(),
            category: category.into(),
            item_list: items.into_iter().map(Into::into).collect(),
        })))
    }

    pub(crate) fn category_create_get(&self) -> Page {
        Page::render(View::CategoryForm(CategoryFormView {
            title: CREATE_TITLE.to_string(),
            category: CategoryDraft::default(),
            errors: Vec::new(),
        }))
    }

    pub(crate) fn category_create_post(&self, form: &FormData) -> ApiResult<Page> {
        let draft = form.category_draft();
        let outcome = self.with_connection(|conn| category_service(conn)?.create(&draft))?;
        Ok(match outcome {
            CreateOutcome::Created(id) | CreateOutcome::Duplicate(id) => {
                Page::redirect(category_url(id))
            }
            CreateOutcome::Rejected(rejection) => {
                Page::render(View::CategoryForm(CategoryFormView {
                    title: CREATE_TITLE.to_string(),
                    category: rejection.draft,
                    errors: rejection.errors,
                }))
            }
        })
    }

    /// Missing or malformed ids redirect to the list instead of failing.
    pub(crate) fn category_delete_get(&self, raw_id: &str) -> ApiResult<Page> {
        let Some(id) = parse_id(raw_id) else {
            return Ok(Page::redirect(CATEGORY_LIST_URL));
        };
        let found = self.with_connection(|conn| {
            let service = category_service(conn)?;
            let Some(category) = service.get_by_id(id)? else {
                return Ok(None);
            };
            let items = service.list_items_in_category(id)?;
            Ok(Some((category, items)))
        })?;

        let Some((category, items)) = found else {
            return Ok(Page::redirect(CATEGORY_LIST_URL));
        };
        Ok(Page::render(View::CategoryDelete(CategoryDeleteView {
            title: "Delete Category".to_string(),
            category: category.into(),
            item_list: items.into_iter().map(Into::into).collect(),
        })))
    }

    /// Deletes the category named by the `categoryid` field (the path id
    /// when the field is absent). Always ends on the category list.
    pub(crate) fn category_delete_post(&self, path_id: &str, form: &FormData) -> ApiResult<Page> {
        let raw_id = form.get("categoryid").unwrap_or(path_id);
        if let Some(id) = parse_id(raw_id) {
            self.with_connection(|conn| category_service(conn)?.delete(id))?;
        }
        Ok(Page::redirect(CATEGORY_LIST_URL))
    }

    /// Both update verbs agree: malformed ids are 404, anything else is
    /// the placeholder.
    pub(crate) fn category_update_get(&self, raw_id: &str) -> Page {
        match parse_id(raw_id) {
            Some(_) => update_not_implemented("Category", "GET"),
            None => Page::not_found("Category not found"),
        }
    }

    pub(crate) fn category_update_post(&self, raw_id: &str, form: &FormData) -> ApiResult<Page> {
        let Some(id) = parse_id(raw_id) else {
            return Ok(Page::not_found("Category not found"));
        };
        let draft = form.category_draft();
        match self.with_connection(|conn| category_service(conn)?.update(id, &draft)) {
            Ok(id) => Ok(Page::redirect(category_url(id))),
            Err(ApiError::Service(ServiceError::NotImplemented(_))) => {
                Ok(update_not_implemented("Category", "POST"))
            }
            Err(err) => Err(err),
        }
    }
}
