//! Catalog schema history.
//!
//! Steps are either plain SQL scripts or Rust functions for changes SQLite
//! cannot express, such as recomputing `name_key` with the current folding
//! rules. All pending steps share one transaction, and each step stamps
//! `PRAGMA user_version` as it lands.

use crate::db::{DbError, DbResult};
use crate::model::form::fold_name;
use log::info;
use rusqlite::{params, Connection, Transaction};

type RustStep = fn(&Transaction<'_>) -> rusqlite::Result<()>;

enum Step {
    Sql(&'static str),
    Rust(RustStep),
}

struct Migration {
    version: u32,
    name: &'static str,
    step: Step,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "catalog",
        step: Step::Sql(include_str!("0001_catalog.sql")),
    },
    Migration {
        version: 2,
        name: "item_categories",
        step: Step::Sql(include_str!("0002_item_categories.sql")),
    },
    Migration {
        version: 3,
        name: "refold_name_keys",
        step: Step::Rust(refold_name_keys),
    },
];

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Reads the schema version stamped on the connection.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

/// Brings the connection up to [`latest_version`].
///
/// # Errors
/// - [`DbError::SchemaTooNew`] when the file was written by a newer build.
/// - [`DbError::Migration`] naming the first step that failed. Nothing from
///   this call is committed in that case.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = current_user_version(conn)?;
    let supported = latest_version();
    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    let pending: Vec<&Migration> = MIGRATIONS
        .iter()
        .filter(|migration| migration.version > found)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in pending {
        run_step(&tx, migration).map_err(|source| DbError::Migration {
            version: migration.version,
            name: migration.name,
            source,
        })?;
        info!(
            "event=db_migrate module=db status=applied version={} name={}",
            migration.version, migration.name
        );
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={found} to_version={supported}");
    Ok(())
}

fn run_step(tx: &Transaction<'_>, migration: &Migration) -> rusqlite::Result<()> {
    match migration.step {
        Step::Sql(sql) => tx.execute_batch(sql)?,
        Step::Rust(step) => step(tx)?,
    }
    tx.pragma_update(None, "user_version", migration.version)
}

/// Rewrites every `name_key` with [`fold_name`], so rows keyed by an older
/// folding rule keep matching their case variants.
fn refold_name_keys(tx: &Transaction<'_>) -> rusqlite::Result<()> {
    for table in ["categories", "items"] {
        let rows: Vec<(String, String)> = {
            let mut stmt = tx.prepare(&format!("SELECT id, name FROM {table};"))?;
            let mapped = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            mapped.collect::<rusqlite::Result<_>>()?
        };

        let mut update = tx.prepare(&format!("UPDATE {table} SET name_key = ?1 WHERE id = ?2;"))?;
        for (id, name) in &rows {
            update.execute(params![fold_name(name), id])?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply_migrations, current_user_version, latest_version, MIGRATIONS};
    use rusqlite::Connection;

    #[test]
    fn versions_are_strictly_increasing_from_one() {
        for (index, migration) in MIGRATIONS.iter().enumerate() {
            assert_eq!(migration.version as usize, index + 1, "{}", migration.name);
        }
    }

    #[test]
    fn refold_rewrites_keys_written_by_lowercasing() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(include_str!("0001_catalog.sql")).unwrap();
        conn.execute_batch(include_str!("0002_item_categories.sql")).unwrap();
        conn.execute_batch(
            "PRAGMA user_version = 2;
             INSERT INTO categories (id, name, name_key, description)
             VALUES ('c1', 'Straße', 'straße', 'Roads');",
        )
        .unwrap();

        apply_migrations(&mut conn).unwrap();

        let key: String = conn
            .query_row("SELECT name_key FROM categories WHERE id = 'c1';", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(key, "strasse");
        assert_eq!(current_user_version(&conn).unwrap(), latest_version());
    }
}
