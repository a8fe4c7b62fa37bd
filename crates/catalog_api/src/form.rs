//! Submitted form fields.
//!
//! Holds decoded `name=value` pairs in submission order. Repeated keys are
//! kept, so multi-select fields such as `category` survive intact.

use catalog_core::{CategoryDraft, ItemDraft};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one field, keeping earlier values for the same key.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// First value submitted for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All values submitted for `name` or its `name[]` array form.
    pub fn get_all(&self, name: &str) -> Vec<String> {
        let array_key = format!("{name}[]");
        self.fields
            .iter()
            .filter(|(key, _)| key == name || *key == array_key)
            .map(|(_, value)| value.clone())
            .collect()
    }

    fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    pub fn category_draft(&self) -> CategoryDraft {
        CategoryDraft::new(self.text("name"), self.text("description"))
    }

    pub fn item_draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.text("name"),
            description: self.text("description"),
            price: self.text("price"),
            num_in_stock: self.text("num_in_stock"),
            category: self.get_all("category"),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
