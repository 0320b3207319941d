use rosterapp::cache::fs::FileCache;
use rosterapp::cache::Cache;
use rosterapp::commands::{add, delete, list};
use rosterapp::model::NewCustomer;
use rosterapp::sequence::{assign_on_create, resequence_all};
use rosterapp::store::backend::StorageBackend;
use rosterapp::store::fs::FileStore;
use rosterapp::store::fs_backend::FsBackend;
use rosterapp::store::RecordStore;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

fn customer(i: usize) -> NewCustomer {
    NewCustomer::parse(
        &format!("First{}", i),
        &format!("Last{}", i),
        Some(&format!("c{}@example.com", i)),
        None,
    )
    .unwrap()
}

fn ids(store: &FileStore) -> Vec<String> {
    store
        .scan_ordered_by_customer_id()
        .unwrap()
        .into_iter()
        .map(|c| c.customer_id.unwrap())
        .collect()
}

#[test]
fn test_hundredth_customer_widens_ids_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf());

    for i in 1..=99 {
        let created = store.create_without_id(customer(i)).unwrap();
        assign_on_create(&mut store, &created.id).unwrap();
    }
    assert_eq!(ids(&store)[0], "01");

    let created = store.create_without_id(customer(100)).unwrap();
    let assigned = assign_on_create(&mut store, &created.id).unwrap();
    assert_eq!(assigned, "100");

    // A fresh handle sees the rewritten ids
    let reopened = FileStore::new(dir.path().to_path_buf());
    let on_disk = ids(&reopened);
    assert_eq!(on_disk.len(), 100);
    assert_eq!(on_disk[0], "001");
    assert_eq!(on_disk[98], "099");
    assert_eq!(on_disk[99], "100");
}

#[test]
fn test_recovery_from_hand_damaged_index() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf());
    for i in 1..=3 {
        let created = store.create_without_id(customer(i)).unwrap();
        assign_on_create(&mut store, &created.id).unwrap();
    }

    // Simulate a pass that died half way: one id rewritten at the wrong width
    let backend = FsBackend::new(dir.path().to_path_buf());
    let mut index = backend.load_index().unwrap();
    let second = index
        .values_mut()
        .find(|c| c.customer_id.as_deref() == Some("2"))
        .unwrap();
    second.customer_id = Some("02".to_string());
    backend.save_index(&index).unwrap();

    let report = resequence_all(&mut store).unwrap();
    assert_eq!(report.rewritten, 1);
    assert_eq!(ids(&store), vec!["1", "2", "3"]);
}

#[test]
fn test_file_cache_is_transparent_across_handles() {
    let dir = TempDir::new().unwrap();
    let ttl = Duration::from_secs(3600);
    let mut store = FileStore::new(dir.path().to_path_buf());
    let cache = FileCache::new(dir.path().to_path_buf());

    for i in 1..=3 {
        add::run(&mut store, &cache, customer(i)).unwrap();
    }
    let first = list::run(&store, &cache, ttl).unwrap();
    assert!(!first.from_cache);

    // A second invocation: new handles on the same directory
    let store2 = FileStore::new(dir.path().to_path_buf());
    let cache2 = FileCache::new(dir.path().to_path_buf());
    let second = list::run(&store2, &cache2, ttl).unwrap();
    assert!(second.from_cache);
    assert_eq!(first.listed_customers, second.listed_customers);

    delete::run(&mut store, &cache, "2").unwrap();
    assert_eq!(cache2.get("all_customers").unwrap(), None);
    let third = list::run(&store2, &cache2, ttl).unwrap();
    assert!(!third.from_cache);
    assert_eq!(third.listed_customers.len(), 2);
    assert_eq!(third.listed_customers[1].name, "First3 Last3");
    assert_eq!(third.listed_customers[1].id, "2");
}

#[test]
fn test_no_temp_files_after_renumbering() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::new(dir.path().to_path_buf());
    for i in 1..=10 {
        let created = store.create_without_id(customer(i)).unwrap();
        assign_on_create(&mut store, &created.id).unwrap();
    }

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}
