use catalog_core::db::migrations::latest_version;
use catalog_core::db::{open_db, open_db_in_memory, DbError, DbLocation};
use catalog_core::{RepoError, SqliteCategoryRepository, SqliteItemRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "categories");
    assert_table_exists(&conn, "items");
    assert_table_exists(&conn, "item_categories");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    let first = open_db(&path).unwrap();
    assert_eq!(schema_version(&first), latest_version());
    drop(first);

    let second = open_db(&path).unwrap();
    assert_eq!(schema_version(&second), latest_version());
    assert_table_exists(&second, "items");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err.root() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(*found, 999);
            assert_eq!(*supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        &err,
        DbError::Open { location: DbLocation::File(at), .. } if at == &path
    ));

    let untouched = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&untouched), 999);
}

#[test]
fn open_failure_names_the_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("catalog.db");

    let err = open_db(&path).unwrap_err();

    assert!(matches!(err.root(), DbError::Sqlite(_)));
    let message = err.to_string();
    assert!(
        message.contains(&path.display().to_string()),
        "message should name the file: {message}"
    );
    assert!(message.starts_with("cannot open catalog"), "{message}");
}

#[test]
fn repositories_reject_unmigrated_connections() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteCategoryRepository::try_new(&conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::UninitializedConnection {
            actual_version: 0,
            ..
        }
    ));
    assert!(SqliteItemRepository::try_new(&conn).is_err());
}

#[test]
fn category_references_are_not_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO items (id, name, name_key, description, price, num_in_stock)
         VALUES ('i1', 'Mug', 'mug', 'Ceramic', 1.0, 1);",
        [],
    )
    .unwrap();

    let inserted = conn.execute(
        "INSERT INTO item_categories (item_id, category_id, position)
         VALUES ('i1', 'no-such-category', 0);",
        [],
    );
    assert_eq!(inserted.unwrap(), 1);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
