use super::{item_service, parse_id, update_not_implemented};
use crate::form::FormData;
use crate::outcome::{ApiError, ApiResult, Page};
use crate::views::{ItemDeleteView, ItemDetailView, ItemFormView, ItemListView, LinkView, View};
use crate::Catalog;
use catalog_core::{item_url, CreateOutcome, ItemDraft, ServiceError, ITEM_LIST_URL};

const CREATE_TITLE: &str = "Create Item";

impl Catalog {
    pub(crate) fn item_list(&self) -> ApiResult<Page> {
        let items = self.with_connection(|conn| item_service(conn)?.list())?;
        Ok(Page::render(View::ItemList(ItemListView {
            title: "Item List".to_string(),
            item_list: items.into_iter().map(LinkView::from).collect(),
        })))
    }

    pub(crate) fn item_detail(&self, raw_id: &str) -> ApiResult<Page> {
        let Some(id) = parse_id(raw_id) else {
            return Ok(Page::not_found("Item not found"));
        };
        let found =
            self.with_connection(|conn| item_service(conn)?.get_by_id_with_category(id))?;

        let Some(detail) = found else {
            return Ok(Page::not_found("Item not found"));
        };
        Ok(Page::render(View::ItemDetail(ItemDetailView {
            title: detail.item.name.clone(),
            category: detail.category.as_ref().map(LinkView::from),
            item: detail.item.into(),
        })))
    }

    pub(crate) fn item_create_get(&self) -> ApiResult<Page> {
        let categories = self.with_connection(|conn| item_service(conn)?.category_options(&[]))?;
        Ok(Page::render(View::ItemForm(ItemFormView {
            title: CREATE_TITLE.to_string(),
            item: ItemDraft::default(),
            categories,
            errors: Vec::new(),
        })))
    }

    pub(crate) fn item_create_post(&self, form: &FormData) -> ApiResult<Page> {
        let draft = form.item_draft();
        let outcome = self.with_connection(|conn| item_service(conn)?.create(&draft))?;
        Ok(match outcome {
            CreateOutcome::Created(id) | CreateOutcome::Duplicate(id) => {
                Page::redirect(item_url(id))
            }
            CreateOutcome::Rejected(state) => Page::render(View::ItemForm(ItemFormView {
                title: CREATE_TITLE.to_string(),
                item: state.draft,
                categories: state.categories,
                errors: state.errors,
            })),
        })
    }

    /// Missing or malformed ids redirect to the list instead of failing.
    pub(crate) fn item_delete_get(&self, raw_id: &str) -> ApiResult<Page> {
        let Some(id) = parse_id(raw_id) else {
            return Ok(Page::redirect(ITEM_LIST_URL));
        };
        let found = self.with_connection(|conn| item_service(conn)?.get_by_id(id))?;

        let Some(item) = found else {
            return Ok(Page::redirect(ITEM_LIST_URL));
        };
        Ok(Page::render(View::ItemDelete(ItemDeleteView {
            title: "Delete Item".to_string(),
            item: item.into(),
        })))
    }

    pub(crate) fn item_delete_post(&self, raw_id: &str) -> ApiResult<Page> {
        if let Some(id) = parse_id(raw_id) {
            self.with_connection(|conn| item_service(conn)?.delete(id))?;
        }
        Ok(Page::redirect(ITEM_LIST_URL))
    }

    /// Both update verbs agree: malformed ids are 404, anything else is
    /// the placeholder.
    pub(crate) fn item_update_get(&self, raw_id: &str) -> Page {
        match parse_id(raw_id) {
            Some(_) => update_not_implemented("Item", "GET"),
            None => Page::not_found("Item not found"),
        }
    }

    pub(crate) fn item_update_post(&self, raw_id: &str, form: &FormData) -> ApiResult<Page> {
        let Some(id) = parse_id(raw_id) else {
            return Ok(Page::not_found("Item not found"));
        };
        let draft = form.item_draft();
        match self.with_connection(|conn| item_service(conn)?.update(id, &draft)) {
            Ok(id) => Ok(Page::redirect(item_url(id))),
            Err(ApiError::Service(ServiceError::NotImplemented(_))) => {
                Ok(update_not_implemented("Item", "POST"))
            }
            Err(err) => Err(err),
        }
    }
}
