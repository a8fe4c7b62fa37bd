//! Category repository contract and SQLite implementation.
//!
//! # Invariants
//! - Lists are ordered by `name ASC, id ASC` (binary collation).
//! - `name_key` is written from [`fold_name`] on every insert.
//! - Deleting a category leaves `item_categories` rows untouched.

use crate::model::category::{Category, CategoryId, CategorySummary};
use crate::model::form::fold_name;
use crate::repo::{count_to_u64, ensure_connection_ready, parse_uuid, RepoResult};
use rusqlite::{params, Connection, Row};

const CATEGORY_SELECT_SQL: &str = "SELECT id, name, description FROM categories";

/// Repository interface for category persistence.
pub trait CategoryRepository {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Returns `{id, name}` projections sorted by name.
    fn list_categories(&self) -> RepoResult<Vec<CategorySummary>>;
    /// Finds the oldest category whose folded name equals `name_key`.
    fn find_category_by_name_key(&self, name_key: &str) -> RepoResult<Option<Category>>;
    /// Removes one category. Returns whether a row existed.
    fn delete_category(&self, id: CategoryId) -> RepoResult<bool>;
    fn count_categories(&self) -> RepoResult<u64>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn create_category(&self, category: &Category) -> RepoResult<CategoryId> {
        self.conn.execute(
            "INSERT INTO categories (id, name, name_key, description)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                category.id.to_string(),
                category.name.as_str(),
                fold_name(&category.name),
                category.description.as_str(),
            ],
        )?;
        Ok(category.id)
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CATEGORY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_category_row(row)?)),
            None => Ok(None),
        }
    }

    fn list_categories(&self) -> RepoResult<Vec<CategorySummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY name ASC, id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next()? {
            let id_text: String = row.get("id")?;
            categories.push(CategorySummary {
                id: parse_uuid(&id_text, "categories.id")?,
                name: row.get("name")?,
            });
        }
        Ok(categories)
    }

    fn find_category_by_name_key(&self, name_key: &str) -> RepoResult<Option<Category>> {
        let mut stmt = self.conn.prepare(&format!(
            "{CATEGORY_SELECT_SQL}
             WHERE name_key = ?1
             ORDER BY created_at ASC, rowid ASC
             LIMIT 1;"
        ))?;
        let mut rows = stmt.query([name_key])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_category_row(row)?)),
            None => Ok(None),
        }
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM categories WHERE id = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }

    fn count_categories(&self) -> RepoResult<u64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM categories;", [], |row| row.get(0))?;
        count_to_u64(count, "categories")
    }
}

fn parse_category_row(row: &Row<'_>) -> RepoResult<Category> {
    let id_text: String = row.get("id")?;
    Ok(Category {
        id: parse_uuid(&id_text, "categories.id")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}
