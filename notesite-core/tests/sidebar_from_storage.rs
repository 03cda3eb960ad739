use notesite_core::{build_sidebar, build_sidebar_with_report, Storage};
use serde_json::json;
use tempfile::NamedTempFile;

fn storage_with(sql: &str) -> (Storage, NamedTempFile) {
    let temp = NamedTempFile::new().unwrap();
    let storage = Storage::create(temp.path()).unwrap();
    storage.connection().execute_batch(sql).unwrap();
    (storage, temp)
}

#[test]
fn costs_and_designs_sidebar() {
    let (mut storage, _temp) = storage_with(
        "INSERT INTO note_folder (id, title, parent_id, link_txt) VALUES
            ('F1', 'Costs handbook', NULL, 'costs'),
            ('F2', 'Designs handbook', NULL, 'designs');
         INSERT INTO note_tree (id, folder_id, node_txt, parent_id, note_id, sort) VALUES
            ('b', 'F1', 'Level two', 'a', 'n2', 2),
            ('a', 'F1', 'Level one', NULL, 'n1', 1);",
    );

    let tree = build_sidebar(&storage.snapshot().unwrap()).unwrap();
    let json = serde_json::to_value(&tree).unwrap();

    assert_eq!(
        json,
        json!({
            "/costs/": [{
                "id": "F1",
                "sort": 0.0,
                "text": "Costs handbook",
                "link_txt": "costs",
                "folderId": "F1",
                "parent_id": null,
                "noteId": null,
                "items": [{
                    "id": "a",
                    "sort": 1.0,
                    "text": "Level one",
                    "link_txt": "costs",
                    "folderId": "F1",
                    "parent_id": null,
                    "noteId": "n1",
                    "link": "/costs/n1",
                    "collapsed": false,
                    "items": [{
                        "id": "b",
                        "sort": 2.0,
                        "text": "Level two",
                        "link_txt": "costs",
                        "folderId": "F1",
                        "parent_id": "a",
                        "noteId": "n2",
                        "link": "/costs/n2"
                    }]
                }]
            }],
            "/designs/": [{
                "id": "F2",
                "sort": 0.0,
                "text": "Designs handbook",
                "link_txt": "designs",
                "folderId": "F2",
                "parent_id": null,
                "noteId": null,
                "items": []
            }]
        })
    );
}

#[test]
fn sentinel_values_from_storage_are_normalized() {
    let (mut storage, _temp) = storage_with(
        "INSERT INTO note_folder (id, title, parent_id, link_txt) VALUES ('F1', 'Costs', NULL, '/costs/');
         INSERT INTO note_tree (id, folder_id, node_txt, parent_id, note_id, sort) VALUES
            ('a', 'F1', 'Empty parent', '', '', 1),
            ('b', 'F1', 'None parent', 'None', 'None', 2);",
    );

    let tree = build_sidebar(&storage.snapshot().unwrap()).unwrap();
    let groups = tree.get("/costs/").unwrap();
    assert_eq!(groups.len(), 1);

    let items = groups[0].children();
    assert_eq!(items.len(), 2);
    for item in items {
        assert!(item.parent_id.is_none());
        assert!(item.note_id.is_none());
        assert!(item.link.is_none());
        assert!(item.items.is_none());
    }
}

#[test]
fn deep_rows_are_reported_not_rendered() {
    let (mut storage, _temp) = storage_with(
        "INSERT INTO note_folder (id, title, parent_id, link_txt) VALUES ('F1', 'Costs', NULL, 'costs');
         INSERT INTO note_tree (id, folder_id, node_txt, parent_id, note_id, sort) VALUES
            ('a', 'F1', 'Top', NULL, NULL, 1),
            ('b', 'F1', 'Child', 'a', NULL, 1),
            ('c', 'F1', 'Grandchild', 'b', 'n9', 1);",
    );

    let (tree, report) = build_sidebar_with_report(&storage.snapshot().unwrap()).unwrap();
    assert_eq!(report.dropped_rows, ["c"]);

    let rendered = serde_json::to_string(&tree).unwrap();
    assert_eq!(rendered.matches("\"id\":\"b\"").count(), 1);
    assert!(!rendered.contains("Grandchild"));
}

#[test]
fn repeated_builds_are_byte_identical() {
    let (mut storage, _temp) = storage_with(
        "INSERT INTO note_folder (id, title, parent_id, link_txt) VALUES
            ('F1', 'Costs', NULL, 'costs'),
            ('F2', 'Designs', NULL, 'designs'),
            ('F3', 'Empty', NULL, 'costs');
         INSERT INTO note_tree (id, folder_id, node_txt, parent_id, note_id, sort) VALUES
            ('a', 'F1', 'A', NULL, 'n1', 1),
            ('b', 'F1', 'B', NULL, NULL, 1),
            ('c', 'F2', 'C', NULL, 'n3', 0);",
    );

    let first = serde_json::to_string(&build_sidebar(&storage.snapshot().unwrap()).unwrap()).unwrap();
    let second = serde_json::to_string(&build_sidebar(&storage.snapshot().unwrap()).unwrap()).unwrap();
    assert_eq!(first, second);

    let tree = build_sidebar(&storage.snapshot().unwrap()).unwrap();
    let costs: Vec<&str> = tree.get("/costs/").unwrap().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(costs, ["F1", "F3"]);
}
