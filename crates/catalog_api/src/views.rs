//! View models handed to the page renderer.
//!
//! Each variant of [`View`] names one template and carries exactly the
//! context that template reads. Field names follow the template contract
//! (`category_list`, `item_list`, `errors`, ...).

use catalog_core::{
    category_url, item_url, Category, CategoryDraft, CategoryId, CategoryOption,
    CategorySummary, FieldError, Item, ItemDraft, ItemSummary,
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "template", content = "context", rename_all = "snake_case")]
pub enum View {
    Index(IndexView),
    CategoryList(CategoryListView),
    CategoryDetail(CategoryDetailView),
    CategoryForm(CategoryFormView),
    CategoryDelete(CategoryDeleteView),
    ItemList(ItemListView),
    ItemDetail(ItemDetailView),
    ItemForm(ItemFormView),
    ItemDelete(ItemDeleteView),
}

impl View {
    /// Template name the renderer should use.
    pub fn template(&self) -> &'static str {
        match self {
            Self::Index(_) => "index",
            Self::CategoryList(_) => "category_list",
            Self::CategoryDetail(_) => "category_detail",
            Self::CategoryForm(_) => "category_form",
            Self::CategoryDelete(_) => "category_delete",
            Self::ItemList(_) => "item_list",
            Self::ItemDetail(_) => "item_detail",
            Self::ItemForm(_) => "item_form",
            Self::ItemDelete(_) => "item_delete",
        }
    }
}

/// `{id, name, url}` row of a list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub id: Uuid,
    pub name: String,
    pub url: String,
}

impl From<CategorySummary> for LinkView {
    fn from(value: CategorySummary) -> Self {
        Self {
            url: category_url(value.id),
            id: value.id,
            name: value.name,
        }
    }
}

impl From<ItemSummary> for LinkView {
    fn from(value: ItemSummary) -> Self {
        Self {
            url: item_url(value.id),
            id: value.id,
            name: value.name,
        }
    }
}

impl From<&Category> for LinkView {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            url: value.url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub url: String,
}

impl From<Category> for CategoryView {
    fn from(value: Category) -> Self {
        Self {
            url: value.url(),
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub num_in_stock: u32,
    pub url: String,
}

impl From<Item> for ItemView {
    fn from(value: Item) -> Self {
        Self {
            url: value.url(),
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            num_in_stock: value.num_in_stock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexView {
    pub title: String,
    pub item_count: u64,
    pub category_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListView {
    pub title: String,
    pub category_list: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDetailView {
    pub title: String,
    pub category: CategoryView,
    pub item_list: Vec<ItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFormView {
    pub title: String,
    pub category: CategoryDraft,
    pub errors: Vec<FieldError>,
}

/// Delete confirmation. Referencing items are listed for information only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDeleteView {
    pub title: String,
    pub category: CategoryView,
    pub item_list: Vec<ItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemListView {
    pub title: String,
    pub item_list: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDetailView {
    pub title: String,
    pub item: ItemView,
    /// `None` renders as "no category".
    pub category: Option<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFormView {
    pub title: String,
    pub item: ItemDraft,
    pub categories: Vec<CategoryOption>,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDeleteView {
    pub title: String,
    pub item: ItemView,
}
