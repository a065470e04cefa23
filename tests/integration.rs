use std::fs;
use std::path::{Path, PathBuf};

use dirhelper::{
    ARGUMENTS_MISSING, OperationResult, XmlStore, any_missing, create_directory_if_not_exists,
    delete_directory_if_empty, delete_directory_if_exists, delete_file_if_exists,
    get_all_directories_from_path, get_all_files_from_path, move_directory_if_exists,
    move_file_if_exists, rename_directory_if_exists, rename_file_if_exists,
    search_directories_from_path, search_files_from_path,
};
use serde::{Deserialize, Serialize};
use tempfile::tempdir;

// Helper to snapshot every file under a directory with its contents
fn snapshot(root: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let mut entries = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                entries.push((path.clone(), Vec::new()));
                pending.push(path);
            } else {
                let contents = fs::read(&path).unwrap();
                entries.push((path, contents));
            }
        }
    }
    entries.sort();
    entries
}

fn file_names(result: &OperationResult<Vec<PathBuf>>) -> Vec<String> {
    result
        .payload()
        .expect("listing should succeed")
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

#[test]
fn test_any_missing_contract() {
    dirhelper::utils::setup_logging();
    assert!(!any_missing(&[]));
    assert!(any_missing(&[&None::<String>]));
    assert!(any_missing(&[&"", &"x"]));
    assert!(!any_missing(&[&"a", &"b"]));
}

#[test]
fn test_missing_arguments_never_touch_the_filesystem() {
    let root = tempdir().unwrap();
    let dir = root.path().join("dir");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("a.txt"), b"a").unwrap();
    let before = snapshot(root.path());

    let results: Vec<OperationResult> = vec![
        create_directory_if_not_exists(""),
        move_directory_if_exists(&dir, ""),
        move_file_if_exists("a.txt", &dir, "", true),
        delete_directory_if_exists(""),
        delete_directory_if_empty(""),
        delete_file_if_exists(&dir, ""),
        rename_directory_if_exists(root.path(), "dir", ""),
        rename_file_if_exists(&dir, "", "b.txt"),
    ];
    for result in results {
        assert_eq!(result, OperationResult::failure(ARGUMENTS_MISSING));
    }

    assert_eq!(get_all_files_from_path("").message(), ARGUMENTS_MISSING);
    assert_eq!(get_all_directories_from_path("").message(), ARGUMENTS_MISSING);
    assert_eq!(search_files_from_path("", "a", false).message(), ARGUMENTS_MISSING);

    assert_eq!(snapshot(root.path()), before);
}

#[test]
fn test_create_then_delete_tree() {
    let root = tempdir().unwrap();
    let tree = root.path().join("project");

    assert!(create_directory_if_not_exists(tree.join("src").join("bin")).is_success());
    fs::write(tree.join("src").join("main.txt"), b"fn").unwrap();
    assert!(create_directory_if_not_exists(&tree).is_success());
    assert!(tree.join("src").join("main.txt").exists());

    let result = delete_directory_if_exists(&tree);
    assert!(result.is_success());
    assert!(!tree.exists());
}

#[test]
fn test_search_reports_scenario() {
    let root = tempdir().unwrap();
    for name in ["report1.txt", "report2.txt", "notes.txt"] {
        fs::write(root.path().join(name), b"").unwrap();
    }

    let result = search_files_from_path(root.path(), "report", false);

    assert!(result.is_success());
    assert_eq!(file_names(&result), vec!["report1.txt", "report2.txt"]);
}

#[test]
fn test_rename_file_collision_leaves_both_files() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("a.txt"), b"first").unwrap();
    fs::write(root.path().join("b.txt"), b"second").unwrap();

    let result = rename_file_if_exists(root.path(), "a.txt", "b.txt");

    assert!(!result.is_success());
    assert_eq!(fs::read(root.path().join("a.txt")).unwrap(), b"first");
    assert_eq!(fs::read(root.path().join("b.txt")).unwrap(), b"second");
}

#[test]
fn test_file_lifecycle_across_directories() {
    let root = tempdir().unwrap();
    let inbox = root.path().join("inbox");
    let archive = root.path().join("archive").join("2024");
    create_directory_if_not_exists(&inbox);
    fs::write(inbox.join("invoice.txt"), b"42").unwrap();

    let result = move_file_if_exists("invoice.txt", &inbox, &archive, true);
    assert!(result.is_success(), "{}", result);

    let result = rename_file_if_exists(&archive, "invoice.txt", "invoice-01.txt");
    assert!(result.is_success());
    assert_eq!(file_names(&get_all_files_from_path(&archive)), vec!["invoice-01.txt"]);

    assert!(delete_file_if_exists(&archive, "invoice-01.txt").is_success());
    assert!(delete_directory_if_empty(&archive).is_success());
    assert!(delete_directory_if_empty(&inbox).is_success());

    let dirs = get_all_directories_from_path(root.path());
    assert_eq!(file_names(&dirs), vec!["archive"]);
}

#[test]
fn test_directory_moves_and_renames() {
    let root = tempdir().unwrap();
    let photos = root.path().join("photos");
    fs::create_dir_all(photos.join("summer")).unwrap();
    fs::create_dir_all(photos.join("winter")).unwrap();

    assert!(rename_directory_if_exists(&photos, "summer", "summer-2024").is_success());
    let result = search_directories_from_path(&photos, "summer", false);
    assert_eq!(file_names(&result), vec!["summer-2024"]);

    let moved = root.path().join("pictures");
    assert!(move_directory_if_exists(&photos, &moved).is_success());
    assert!(!photos.exists());

    let result = search_directories_from_path(&moved, "winter", true);
    assert_eq!(file_names(&result), vec!["winter"]);
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Inventory {
    owner: String,
    slots: u32,
    items: Vec<String>,
}

#[test]
fn test_xml_store_round_trip() {
    let root = tempdir().unwrap();
    let store = XmlStore::new(root.path().join("state"));
    let inventory = Inventory {
        owner: "ada".to_string(),
        slots: 12,
        items: vec!["lamp".to_string(), "rope".to_string()],
    };

    let saved = store.save(&inventory);
    assert!(saved.is_success(), "{}", saved);
    assert_eq!(
        saved.into_payload(),
        Some(root.path().join("state").join("Inventory.xml"))
    );

    let loaded = store.load().into_result().expect("load inventory");
    assert_eq!(loaded, inventory);
}
