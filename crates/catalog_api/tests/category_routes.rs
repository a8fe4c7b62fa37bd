mod common;

use catalog_api::views::View;
use catalog_api::{FormData, Page};
use common::{id_of, Fixture};
use uuid::Uuid;

#[test]
fn create_form_starts_empty() {
    let fixture = Fixture::new();
    match fixture.get("/catalog/category/create").view() {
        Some(View::CategoryForm(form)) => {
            assert_eq!(form.title, "Create Category");
            assert!(form.category.name.is_empty());
            assert!(form.errors.is_empty());
        }
        other => panic!("expected category form, got {other:?}"),
    }
}

#[test]
fn create_redirects_to_new_record_and_list_shows_it_sorted() {
    let fixture = Fixture::new();
    fixture.create_category("Toys", "Toys and games for children");
    let url = fixture.create_category("Electronics", "Devices and gadgets");
    assert!(url.starts_with("/catalog/category/"));

    let page = fixture.get("/catalog/categories");
    match page.view() {
        Some(View::CategoryList(list)) => {
            let names: Vec<_> = list.category_list.iter().map(|c| c.name.as_str()).collect();
            assert_eq!(names, vec!["Electronics", "Toys"]);
            assert_eq!(list.category_list[0].url, url);
        }
        other => panic!("expected category list, got {other:?}"),
    }
}

#[test]
fn duplicate_submission_redirects_to_existing_record() {
    let fixture = Fixture::new();
    let original = fixture.create_category("Electronics", "Devices and gadgets");

    let again = fixture.create_category("electronics", " Devices and gadgets ");
    assert_eq!(again, original);

    match fixture.get("/catalog/categories").view() {
        Some(View::CategoryList(list)) => assert_eq!(list.category_list.len(), 1),
        other => panic!("expected category list, got {other:?}"),
    }
}

#[test]
fn invalid_submission_redisplays_form_with_errors() {
    let fixture = Fixture::new();
    let page = fixture.post(
        "/catalog/category/create",
        FormData::new().with("name", " <b>Books</b> ").with("description", "  "),
    );

    assert_eq!(page.status_code(), 200);
    match page.view() {
        Some(View::CategoryForm(form)) => {
            assert_eq!(form.category.name, "&lt;b&gt;Books&lt;&#x2F;b&gt;");
            assert_eq!(form.errors.len(), 1);
            assert_eq!(form.errors[0].field, "description");
            assert_eq!(form.errors[0].message, "Description must not be empty.");
        }
        other => panic!("expected category form, got {other:?}"),
    }
}

#[test]
fn detail_shows_category_with_its_items() {
    let fixture = Fixture::new();
    let url = fixture.create_category("Books", "Printed and digital books");
    fixture.post(
        "/catalog/item/create",
        FormData::new()
            .with("name", "Novel")
            .with("description", "A captivating novel")
            .with("price", "19.99")
            .with("num_in_stock", "100")
            .with("category", id_of(&url)),
    );

    match fixture.get(&url).view() {
        Some(View::CategoryDetail(detail)) => {
            assert_eq!(detail.title, "Books");
            assert_eq!(detail.category.description, "Printed and digital books");
            assert_eq!(detail.item_list.len(), 1);
            assert_eq!(detail.item_list[0].name, "Novel");
        }
        other => panic!("expected category detail, got {other:?}"),
    }
}

#[test]
fn unknown_or_malformed_detail_id_is_not_found() {
    let fixture = Fixture::new();
    for path in [
        format!("/catalog/category/{}", Uuid::new_v4()),
        "/catalog/category/not-an-id".to_string(),
    ] {
        let page = fixture.get(&path);
        assert_eq!(
            page,
            Page::NotFound {
                message: "Category not found".to_string()
            }
        );
        assert_eq!(page.status_code(), 404);
    }
}

#[test]
fn delete_flow_lists_referencing_items_then_deletes() {
    let fixture = Fixture::new();
    let url = fixture.create_category("Furniture", "Home and office furniture");
    let id = id_of(&url).to_string();
    fixture.post(
        "/catalog/item/create",
        FormData::new()
            .with("name", "Desk")
            .with("description", "A wooden desk")
            .with("price", "149")
            .with("num_in_stock", "20")
            .with("category", id.as_str()),
    );

    match fixture.get(&format!("{url}/delete")).view() {
        Some(View::CategoryDelete(confirm)) => {
            assert_eq!(confirm.title, "Delete Category");
            assert_eq!(confirm.item_list.len(), 1);
        }
        other => panic!("expected delete confirmation, got {other:?}"),
    }

    let page = fixture.post(
        &format!("{url}/delete"),
        FormData::new().with("categoryid", id.as_str()),
    );
    assert_eq!(page.location(), Some("/catalog/categories"));
    assert_eq!(page.status_code(), 302);

    assert_eq!(fixture.get(&url).status_code(), 404);
    assert_eq!(
        fixture.get(&format!("{url}/delete")).location(),
        Some("/catalog/categories")
    );
}

#[test]
fn deleting_nonexistent_category_redirects_without_error() {
    let fixture = Fixture::new();
    let ghost = Uuid::new_v4().to_string();

    let page = fixture.post(
        &format!("/catalog/category/{ghost}/delete"),
        FormData::new().with("categoryid", ghost.as_str()),
    );
    assert_eq!(page.location(), Some("/catalog/categories"));

    let page = fixture.post(
        "/catalog/category/garbage/delete",
        FormData::new().with("categoryid", "garbage"),
    );
    assert_eq!(page.location(), Some("/catalog/categories"));
}

#[test]
fn update_routes_are_placeholders() {
    let fixture = Fixture::new();
    let url = fixture.create_category("Books", "Printed and digital books");

    assert_eq!(
        fixture.get(&format!("{url}/update")),
        Page::NotImplemented {
            message: "NOT IMPLEMENTED: Category update GET".to_string()
        }
    );

    let post = fixture.post(
        &format!("{url}/update"),
        FormData::new().with("name", "Novels").with("description", "Fiction"),
    );
    assert_eq!(
        post,
        Page::NotImplemented {
            message: "NOT IMPLEMENTED: Category update POST".to_string()
        }
    );
}

#[test]
fn update_routes_agree_on_malformed_ids() {
    let fixture = Fixture::new();
    let not_found = Page::not_found("Category not found");

    assert_eq!(fixture.get("/catalog/category/garbage/update"), not_found);
    assert_eq!(
        fixture.post("/catalog/category/garbage/update", FormData::new()),
        not_found
    );
}

#[test]
fn delete_post_without_categoryid_uses_the_path_id() {
    let fixture = Fixture::new();
    let url = fixture.create_category("Groceries", "Daily essentials and food items");
    let keep = fixture.create_category("Toys", "Toys and games for children");

    let page = fixture.post(&format!("{url}/delete"), FormData::new());

    assert_eq!(page.location(), Some("/catalog/categories"));
    assert_eq!(fixture.get(&url).status_code(), 404);
    assert_eq!(fixture.get(&keep).status_code(), 200);
}
