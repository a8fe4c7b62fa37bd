//! Item repository contract and SQLite implementation.
//!
//! # Invariants
//! - Lists are ordered by `name ASC, id ASC` (binary collation).
//! - An item and its `item_categories` rows are written in one transaction.
//! - Category references keep submission order via `position`.
//! - Category references are never validated against `categories`.

use crate::model::category::CategoryId;
use crate::model::form::fold_name;
use crate::model::item::{Item, ItemId, ItemSummary};
use crate::repo::{count_to_u64, ensure_connection_ready, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const ITEM_SELECT_SQL: &str = "SELECT
    items.id AS id,
    items.name AS name,
    items.description AS description,
    items.price AS price,
    items.num_in_stock AS num_in_stock
FROM items";

/// Repository interface for item persistence.
pub trait ItemRepository {
    fn create_item(&self, item: &Item) -> RepoResult<ItemId>;
    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>>;
    /// Returns `{id, name}` projections sorted by name.
    fn list_items(&self) -> RepoResult<Vec<ItemSummary>>;
    /// Returns full items referencing `category_id`, sorted by name.
    fn list_items_in_category(&self, category_id: CategoryId) -> RepoResult<Vec<Item>>;
    /// Finds the oldest item whose folded name equals `name_key`.
    fn find_item_by_name_key(&self, name_key: &str) -> RepoResult<Option<Item>>;
    /// Removes one item and its category links. Returns whether a row existed.
    fn delete_item(&self, id: ItemId) -> RepoResult<bool>;
    fn count_items(&self) -> RepoResult<u64>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn load_item(&self, row: &Row<'_>) -> RepoResult<Item> {
        let id_text: String = row.get("id")?;
        let id = parse_uuid(&id_text, "items.id")?;
        let stock: i64 = row.get("num_in_stock")?;
        let num_in_stock = u32::try_from(stock).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid num_in_stock value `{stock}` in items.num_in_stock"
            ))
        })?;
        let price: f64 = row.get("price")?;
        if !price.is_finite() || price < 0.0 {
            return Err(RepoError::InvalidData(format!(
                "invalid price value `{price}` in items.price"
            )));
        }

        Ok(Item {
            id,
            name: row.get("name")?,
            description: row.get("description")?,
            price,
            num_in_stock,
            category: self.load_category_refs(&id_text)?,
        })
    }

    fn load_category_refs(&self, item_id: &str) -> RepoResult<Vec<CategoryId>> {
        let mut stmt = self.conn.prepare(
            "SELECT category_id
             FROM item_categories
             WHERE item_id = ?1
             ORDER BY position ASC;",
        )?;
        let mut rows = stmt.query([item_id])?;
        let mut refs = Vec::new();
        while let Some(row) = rows.next()? {
            let value: String = row.get(0)?;
            refs.push(parse_uuid(&value, "item_categories.category_id")?);
        }
        Ok(refs)
    }

    fn query_items(&self, sql: &str, param: &str) -> RepoResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([param])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(self.load_item(row)?);
        }
        Ok(items)
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, item: &Item) -> RepoResult<ItemId> {
        let id_text = item.id.to_string();
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO items (id, name, name_key, description, price, num_in_stock)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                id_text.as_str(),
                item.name.as_str(),
                fold_name(&item.name),
                item.description.as_str(),
                item.price,
                i64::from(item.num_in_stock),
            ],
        )?;
        {
            let mut link = tx.prepare(
                "INSERT INTO item_categories (item_id, category_id, position)
                 VALUES (?1, ?2, ?3);",
            )?;
            for (position, category_id) in item.category.iter().enumerate() {
                let position = i64::try_from(position).map_err(|_| {
                    RepoError::InvalidData(format!("category position {position} overflows"))
                })?;
                link.execute(params![
                    id_text.as_str(),
                    category_id.to_string(),
                    position
                ])?;
            }
        }
        tx.commit()?;
        Ok(item.id)
    }

    fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let sql = format!("{ITEM_SELECT_SQL} WHERE items.id = ?1;");
        Ok(self.query_items(&sql, &id.to_string())?.into_iter().next())
    }

    fn list_items(&self) -> RepoResult<Vec<ItemSummary>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM items ORDER BY name ASC, id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            let id_text: String = row.get("id")?;
            items.push(ItemSummary {
                id: parse_uuid(&id_text, "items.id")?,
                name: row.get("name")?,
            });
        }
        Ok(items)
    }

    fn list_items_in_category(&self, category_id: CategoryId) -> RepoResult<Vec<Item>> {
        let sql = format!(
            "{ITEM_SELECT_SQL}
             INNER JOIN item_categories ON item_categories.item_id = items.id
             WHERE item_categories.category_id = ?1
             ORDER BY items.name ASC, items.id ASC;"
        );
        self.query_items(&sql, &category_id.to_string())
    }

    fn find_item_by_name_key(&self, name_key: &str) -> RepoResult<Option<Item>> {
        let sql = format!(
            "{ITEM_SELECT_SQL}
             WHERE items.name_key = ?1
             ORDER BY items.created_at ASC, items.rowid ASC
             LIMIT 1;"
        );
        Ok(self.query_items(&sql, name_key)?.into_iter().next())
    }

    fn delete_item(&self, id: ItemId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }

    fn count_items(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM items;", [], |row| row.get(0))?;
        count_to_u64(count, "items")
    }
}
