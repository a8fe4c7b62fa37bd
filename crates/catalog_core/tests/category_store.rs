use catalog_core::db::open_db_in_memory;
use catalog_core::{
    CategoryDraft, CategoryService, CreateOutcome, ItemDraft, ItemService, ServiceError,
    SqliteCategoryRepository, SqliteItemRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

type Categories<'c> = CategoryService<SqliteCategoryRepository<'c>, SqliteItemRepository<'c>>;

fn category_service(conn: &Connection) -> Categories<'_> {
    CategoryService::new(
        SqliteCategoryRepository::try_new(conn).unwrap(),
        SqliteItemRepository::try_new(conn).unwrap(),
    )
}

fn item_service(
    conn: &Connection,
) -> ItemService<SqliteItemRepository<'_>, SqliteCategoryRepository<'_>> {
    ItemService::new(
        SqliteItemRepository::try_new(conn).unwrap(),
        SqliteCategoryRepository::try_new(conn).unwrap(),
    )
}

fn create(service: &Categories<'_>, name: &str, description: &str) -> Uuid {
    match service.create(&CategoryDraft::new(name, description)).unwrap() {
        CreateOutcome::Created(id) => id,
        other => panic!("expected Created, got {other:?}"),
    }
}

fn category_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM categories;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn create_persists_one_record_and_list_includes_it() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    let id = create(&service, "Books", "Printed and digital books");

    assert_eq!(category_count(&conn), 1);
    let listed = service.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].name, "Books");
    assert_eq!(listed[0].url(), format!("/catalog/category/{id}"));
}

#[test]
fn list_is_sorted_by_name() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    create(&service, "Toys", "Toys and games for children");
    create(&service, "Books", "Printed and digital books");
    create(&service, "Groceries", "Daily essentials and food items");
    create(&service, "Electronics", "Devices and gadgets");

    let names: Vec<_> = service.list().unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Books", "Electronics", "Groceries", "Toys"]);
}

#[test]
fn case_and_whitespace_variant_returns_original_identity() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    create(&service, "Books", "Printed and digital books");
    let original = create(&service, "Electronics", "Devices and gadgets");

    let outcome = service
        .create(&CategoryDraft::new("electronics", " Devices and gadgets "))
        .unwrap();

    assert_eq!(outcome, CreateOutcome::Duplicate(original));
    assert_eq!(outcome.target_id(), Some(original));
    assert_eq!(category_count(&conn), 2);
    let names: Vec<_> = service.list().unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Books", "Electronics"]);
}

#[test]
fn duplicate_check_ignores_description() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    let original = create(&service, "Clothing", "Men and women clothing");

    let outcome = service
        .create(&CategoryDraft::new("  CLOTHING", "Something else entirely"))
        .unwrap();
    assert_eq!(outcome, CreateOutcome::Duplicate(original));
    assert_eq!(category_count(&conn), 1);
}

#[test]
fn full_case_folding_treats_sharp_s_as_ss() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    let original = create(&service, "Straße", "Roads and streets");

    let outcome = service
        .create(&CategoryDraft::new("STRASSE", "Roads and streets"))
        .unwrap();

    assert_eq!(outcome, CreateOutcome::Duplicate(original));
    assert_eq!(category_count(&conn), 1);
    assert_eq!(
        service
            .find_by_name_case_insensitive("strasse")
            .unwrap()
            .map(|category| category.id),
        Some(original)
    );
}

#[test]
fn blank_fields_are_rejected_and_nothing_is_persisted() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    for (name, description) in [
        ("", "desc"),
        ("   ", "desc"),
        ("Name", ""),
        ("Name", "\t\n"),
        (" ", " "),
    ] {
        match service.create(&CategoryDraft::new(name, description)).unwrap() {
            CreateOutcome::Rejected(rejection) => {
                assert!(!rejection.errors.is_empty());
                assert_eq!(rejection.draft.name, name.trim());
            }
            other => panic!("expected Rejected for ({name:?}, {description:?}), got {other:?}"),
        }
    }
    assert_eq!(category_count(&conn), 0);
}

#[test]
fn markup_is_escaped_before_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);

    let id = create(&service, "<script>", "Tom & Jerry");
    let stored = service.get_by_id(id).unwrap().unwrap();
    assert_eq!(stored.name, "&lt;script&gt;");
    assert_eq!(stored.description, "Tom &amp; Jerry");
}

#[test]
fn find_by_name_is_unicode_case_insensitive() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    let id = create(&service, "Électronique", "Appareils");

    let found = service.find_by_name_case_insensitive("éLECTRONIQUE").unwrap();
    assert_eq!(found.map(|category| category.id), Some(id));
    assert!(service.find_by_name_case_insensitive("Electronique").unwrap().is_none());
}

#[test]
fn delete_then_get_yields_none_for_any_id() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    let id = create(&service, "Furniture", "Home and office furniture");

    service.delete(id).unwrap();
    assert!(service.get_by_id(id).unwrap().is_none());

    service.delete(id).unwrap();
    let never_existed = Uuid::new_v4();
    service.delete(never_existed).unwrap();
    assert!(service.get_by_id(never_existed).unwrap().is_none());
}

#[test]
fn deleting_referenced_category_keeps_items_and_reports_no_category() {
    let conn = open_db_in_memory().unwrap();
    let categories = category_service(&conn);
    let items = item_service(&conn);
    let category_id = create(&categories, "Electronics", "Devices and gadgets");

    let item_id = items
        .create(&ItemDraft {
            name: "Laptop".to_string(),
            description: "A powerful laptop".to_string(),
            price: "999".to_string(),
            num_in_stock: "30".to_string(),
            category: vec![category_id.to_string()],
        })
        .unwrap()
        .target_id()
        .unwrap();

    let before = categories.list_items_in_category(category_id).unwrap();
    assert_eq!(before.len(), 1);
    assert_eq!(before[0].id, item_id);

    categories.delete(category_id).unwrap();

    let detail = items.get_by_id_with_category(item_id).unwrap().unwrap();
    assert_eq!(detail.item.name, "Laptop");
    assert_eq!(detail.item.category, vec![category_id]);
    assert!(detail.category.is_none());
}

#[test]
fn update_is_not_implemented() {
    let conn = open_db_in_memory().unwrap();
    let service = category_service(&conn);
    let id = create(&service, "Books", "Printed and digital books");

    let err = service
        .update(id, &CategoryDraft::new("Novels", "Fiction"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotImplemented("category update")));
    assert_eq!(service.get_by_id(id).unwrap().unwrap().name, "Books");
}
