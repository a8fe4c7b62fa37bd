//! Route table: maps `(method, path)` to a catalog operation.
//!
//! Literal paths win over `:id` patterns, so `/catalog/item/create` is
//! never read as an item id. A single trailing slash is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

static RECORD_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/catalog/(category|item)/([^/]+)(?:/(delete|update))?$")
        .expect("valid record path regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Parses an HTTP method name, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("GET") {
            Some(Self::Get)
        } else if value.eq_ignore_ascii_case("POST") {
            Some(Self::Post)
        } else {
            None
        }
    }
}

/// One catalog operation. `:id` segments are carried unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    CategoryList,
    CategoryDetail(String),
    CategoryCreateForm,
    CategoryCreate,
    CategoryDeleteForm(String),
    CategoryDelete(String),
    CategoryUpdateForm(String),
    CategoryUpdate(String),
    ItemList,
    ItemDetail(String),
    ItemCreateForm,
    ItemCreate,
    ItemDeleteForm(String),
    ItemDelete(String),
    ItemUpdateForm(String),
    ItemUpdate(String),
}

impl Route {
    /// Resolves a request line. Returns `None` for paths outside the table.
    pub fn resolve(method: Method, path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        let literal = match (method, path) {
            (Method::Get, "/catalog") => Some(Self::Index),
            (Method::Get, "/catalog/categories") => Some(Self::CategoryList),
            (Method::Get, "/catalog/category/create") => Some(Self::CategoryCreateForm),
            (Method::Post, "/catalog/category/create") => Some(Self::CategoryCreate),
            (Method::Get, "/catalog/items") => Some(Self::ItemList),
            (Method::Get, "/catalog/item/create") => Some(Self::ItemCreateForm),
            (Method::Post, "/catalog/item/create") => Some(Self::ItemCreate),
            _ => None,
        };
        if literal.is_some() {
            return literal;
        }

        let captures = RECORD_PATH_RE.captures(path)?;
        let id = captures.get(2)?.as_str().to_string();
        let action = captures.get(3).map(|m| m.as_str());
        let route = match (&captures[1], action, method) {
            ("category", None, Method::Get) => Self::CategoryDetail(id),
            ("category", Some("delete"), Method::Get) => Self::CategoryDeleteForm(id),
            ("category", Some("delete"), Method::Post) => Self::CategoryDelete(id),
            ("category", Some("update"), Method::Get) => Self::CategoryUpdateForm(id),
            ("category", Some("update"), Method::Post) => Self::CategoryUpdate(id),
            ("item", None, Method::Get) => Self::ItemDetail(id),
            ("item", Some("delete"), Method::Get) => Self::ItemDeleteForm(id),
            ("item", Some("delete"), Method::Post) => Self::ItemDelete(id),
            ("item", Some("update"), Method::Get) => Self::ItemUpdateForm(id),
            ("item", Some("update"), Method::Post) => Self::ItemUpdate(id),
            _ => return None,
        };
        Some(route)
    }

    /// Stable snake_case name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::CategoryList => "category_list",
            Self::CategoryDetail(_) => "category_detail",
            Self::CategoryCreateForm => "category_create_get",
            Self::CategoryCreate => "category_create_post",
            Self::CategoryDeleteForm(_) => "category_delete_get",
            Self::CategoryDelete(_) => "category_delete_post",
            Self::CategoryUpdateForm(_) => "category_update_get",
            Self::CategoryUpdate(_) => "category_update_post",
            Self::ItemList => "item_list",
            Self::ItemDetail(_) => "item_detail",
            Self::ItemCreateForm => "item_create_get",
            Self::ItemCreate => "item_create_post",
            Self::ItemDeleteForm(_) => "item_delete_get",
            Self::ItemDelete(_) => "item_delete_post",
            Self::ItemUpdateForm(_) => "item_update_get",
            Self::ItemUpdate(_) => "item_update_post",
        }
    }
}
