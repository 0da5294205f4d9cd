use regbookapp::model::Record;
use regbookapp::records::{RecordStore, DEFAULT_STORAGE_KEY};
use regbookapp::store::fs_backend::FsSessionStorage;
use regbookapp::store::SessionStorage;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsSessionStorage) {
    let dir = TempDir::new().unwrap();
    let storage = FsSessionStorage::new(dir.path().join("sessions").join("default"));
    (dir, storage)
}

fn record(name: &str, city: &str) -> Record {
    Record {
        name: name.into(),
        email: "a@b.com".into(),
        password: "p".into(),
        gender: "Male".into(),
        address: "addr".into(),
        city: city.into(),
    }
}

#[test]
fn test_missing_item_reads_as_none() {
    let (_dir, storage) = setup();
    assert_eq!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap(), None);
    assert!(!storage.root().exists());
}

#[test]
fn test_set_creates_session_dir_and_file() {
    let (_dir, storage) = setup();
    storage.set_item("submittedData", "[]").unwrap();

    let path = storage.item_path("submittedData");
    assert!(path.ends_with("submittedData.json"));
    assert_eq!(fs::read_to_string(path).unwrap(), "[]");
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (_dir, storage) = setup();
    storage.set_item("k", "one").unwrap();
    storage.set_item("k", "two").unwrap();

    for entry in fs::read_dir(storage.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));
}

#[test]
fn test_clear_ends_the_session() {
    let (_dir, storage) = setup();
    storage.set_item("k", "v").unwrap();
    storage.clear("k").unwrap();

    assert!(!storage.root().exists());
    assert_eq!(storage.get_item("k").unwrap(), None);
    // Clearing twice is fine
    storage.clear("k").unwrap();
}

#[test]
fn test_clear_leaves_unrelated_files_alone() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("mydocs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("thesis.txt"), "chapter one").unwrap();
    fs::write(docs.join("other.json"), "[]").unwrap();
    fs::write(docs.join(".k-stale.tmp"), "half").unwrap();

    let storage = FsSessionStorage::new(docs.clone());
    storage.set_item("k", "v").unwrap();
    storage.clear("k").unwrap();

    assert!(docs.exists());
    assert_eq!(
        fs::read_to_string(docs.join("thesis.txt")).unwrap(),
        "chapter one"
    );
    assert!(docs.join("other.json").exists());
    assert!(!docs.join("k.json").exists());
    assert!(!docs.join(".k-stale.tmp").exists());
}

#[test]
fn test_failed_rename_leaves_no_tmp_file() {
    let (_dir, storage) = setup();
    // A non-empty directory where the item file should go makes the rename fail
    let blocker = storage.item_path("k");
    fs::create_dir_all(&blocker).unwrap();
    fs::write(blocker.join("inside"), "x").unwrap();

    assert!(storage.set_item("k", "v").is_err());

    for entry in fs::read_dir(storage.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_record_list_round_trips_through_disk() {
    let (_dir, storage) = setup();
    let mut store = RecordStore::open(&storage, DEFAULT_STORAGE_KEY);
    store.append(record("A", "Surat")).unwrap();
    store.append(record("B", "Rajkot")).unwrap();
    store.append(record("C", "Mumbai")).unwrap();
    store.remove_at(1).unwrap();
    store.replace_at(0, record("A2", "Surat")).unwrap();
    let expected = store.records().to_vec();
    drop(store);

    let root = storage.root().to_path_buf();
    let reopened = RecordStore::open(FsSessionStorage::new(root), DEFAULT_STORAGE_KEY);
    assert_eq!(reopened.records(), expected.as_slice());
    assert_eq!(
        reopened.records().iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["A2", "C"]
    );
}

#[test]
fn test_corrupt_file_opens_as_empty_and_is_overwritten() {
    let (_dir, storage) = setup();
    storage.set_item(DEFAULT_STORAGE_KEY, "{ truncated").unwrap();

    let mut store = RecordStore::open(&storage, DEFAULT_STORAGE_KEY);
    assert!(store.is_empty());

    store.append(record("A", "Surat")).unwrap();
    assert_eq!(store.load(), vec![record("A", "Surat")]);
}
