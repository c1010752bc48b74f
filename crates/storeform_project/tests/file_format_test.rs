use storeform_project::{CatalogError, default_layout, init_catalog, load_catalog, save_catalog};

#[test]
fn test_catalog_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forms").join("catalog.json");

    let mut catalog = init_catalog("demo-shop", &path).unwrap();
    let id = catalog.create_form("Signup", default_layout().unwrap()).unwrap();
    catalog.select_form(id).unwrap();
    save_catalog(&catalog, &path).unwrap();

    let loaded = load_catalog(&path).unwrap();
    assert_eq!(loaded.store_name, "demo-shop");
    assert_eq!(loaded.selected_form_id, Some(id));
    assert_eq!(loaded.get(id).unwrap().layout, catalog.get(id).unwrap().layout);

    // Ids keep counting after a reload.
    let mut loaded = loaded;
    let next = loaded.create_form("Second", default_layout().unwrap()).unwrap();
    assert_eq!(next, id + 1);
}

#[test]
fn test_store_is_activated_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    init_catalog("demo-shop", &path).unwrap();
    let again = init_catalog("demo-shop", &path);

    match again {
        Err(err @ CatalogError::StoreExists(_)) => {
            assert_eq!(err.to_string(), "Store already exists.");
        }
        other => panic!("expected StoreExists, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_broken_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let json = r#"{
        "store_name": "demo",
        "forms": [{
            "id": 1,
            "name": "Broken",
            "created_at": "2024-03-01T12:00:00Z",
            "layout": {
                "mainFields": {
                    "email": {"keyName": "email", "name": "Email", "category": "static",
                              "location": "main", "position": null}
                },
                "selectedFields": {}
            }
        }]
    }"#;
    std::fs::write(&path, json).unwrap();

    match load_catalog(&path) {
        Err(CatalogError::Json(err)) => {
            assert!(err.to_string().contains("cannot sit in the unplaced pool"));
        }
        other => panic!("expected a rejected layout, got {:?}", other),
    }
}

fn write_catalog(dir: &tempfile::TempDir, forms: &str, selected: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    let json = format!(
        r#"{{"store_name": "demo", "selected_form_id": {selected}, "forms": [{forms}]}}"#
    );
    std::fs::write(&path, json).unwrap();
    path
}

fn form_json(id: u32, status: &str) -> String {
    format!(
        r#"{{"id": {id}, "name": "Form {id}", "status": "{status}",
            "created_at": "2024-03-01T12:00:00Z",
            "layout": {{"mainFields": {{}}, "selectedFields": {{}}}}}}"#
    )
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let forms = format!("{},{}", form_json(1, "active"), form_json(1, "archived"));
    let path = write_catalog(&dir, &forms, "null");

    assert!(matches!(load_catalog(&path), Err(CatalogError::DuplicateFormId(1))));
}

#[test]
fn test_load_rejects_archived_selection() {
    let dir = tempfile::tempdir().unwrap();
    let forms = format!("{},{}", form_json(1, "archived"), form_json(2, "active"));
    let path = write_catalog(&dir, &forms, "1");

    assert!(matches!(load_catalog(&path), Err(CatalogError::FormArchived(1))));
}

#[test]
fn test_load_rejects_missing_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, &form_json(1, "active"), "7");

    assert!(matches!(load_catalog(&path), Err(CatalogError::FormNotFound(7))));
}

#[test]
fn test_load_accepts_active_selection() {
    let dir = tempfile::tempdir().unwrap();
    let forms = format!("{},{}", form_json(1, "archived"), form_json(2, "active"));
    let path = write_catalog(&dir, &forms, "2");

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.selected_form().unwrap().name, "Form 2");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_catalog(dir.path().join("nope.json"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}
