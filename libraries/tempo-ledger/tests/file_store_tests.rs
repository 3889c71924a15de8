use std::fs;
use std::sync::Arc;

use tempo_ledger::{FileStore, PreferenceStore, SizeLedger};

#[test]
fn file_store_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("prefs.json"));

    assert_eq!(store.get("slot"), None);
    store.put("slot", "{\"a\":1}").unwrap();
    assert_eq!(store.get("slot").as_deref(), Some("{\"a\":1}"));
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let ledger = SizeLedger::new(Arc::new(FileStore::new(&path)));
        ledger.record_size("track-1", 1024);
        ledger.record_size("track-2", 2048);
    }

    let reopened = SizeLedger::new(Arc::new(FileStore::new(&path)));
    assert_eq!(reopened.get_size("track-1"), Some(1024));
    assert_eq!(reopened.get_size("track-2"), Some(2048));
}

#[test]
fn file_store_preserves_other_preference_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("prefs.json"));

    store.put("theme", "dark").unwrap();
    store.put("slot", "{}").unwrap();

    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn corrupt_preference_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    fs::write(&path, "{{{ torn write").unwrap();

    let store = FileStore::new(&path);
    assert_eq!(store.get("slot"), None);

    // A write replaces the corrupt file with valid content
    store.put("slot", "{}").unwrap();
    assert_eq!(store.get("slot").as_deref(), Some("{}"));
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("never-written.json"));
    assert_eq!(store.get("slot"), None);
}

#[test]
fn writes_leave_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let store = FileStore::new(&path);

    for i in 0..10 {
        store.put("slot", &format!("{{\"n\":{i}}}")).unwrap();
    }

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec!["prefs.json"]);
}

#[test]
fn ledger_over_file_store_survives_corruption() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let ledger = SizeLedger::new(Arc::new(FileStore::new(&path)));
    ledger.record_size("track-1", 512);

    fs::write(&path, "no longer json").unwrap();
    assert_eq!(ledger.get_size("track-1"), None);

    // Recording again rebuilds a valid slot
    ledger.record_size("track-1", 512);
    assert_eq!(ledger.get_size("track-1"), Some(512));
}
