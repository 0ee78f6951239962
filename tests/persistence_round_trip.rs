use pretty_assertions::assert_eq;
use std::fs;

use rust_todo_app::io::{load_entries, save_entries, TASKS_FILE};
use rust_todo_app::model::{Entry, EntryStore, Priority, DEFAULT_CAPACITY};

fn entry(desc: &str, date: &str, priority: Priority, completed: bool) -> Entry {
    Entry {
        completed,
        description: desc.to_string(),
        date: date.to_string(),
        priority,
        editing: false,
        edit_buffer: String::new(),
    }
}

#[test]
fn store_survives_a_save_load_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(TASKS_FILE);

    let mut store = EntryStore::new();
    store
        .append(entry("Buy milk", "01.01.2024, 10:00", Priority::Low, false))
        .unwrap();
    store
        .append(entry("Fix the roof", "03.01.2024, 08:12", Priority::High, false))
        .unwrap();
    store
        .append(entry("Call Ana", "05.01.2024, 19:45", Priority::Medium, true))
        .unwrap();
    store.sort_by_priority();

    save_entries(store.entries(), &path).unwrap();
    let reloaded = EntryStore::from_entries(load_entries(&path), DEFAULT_CAPACITY);

    assert_eq!(reloaded.len(), store.len());
    for (loaded, original) in reloaded.entries().iter().zip(store.entries()) {
        assert_eq!(loaded.completed, original.completed);
        assert_eq!(loaded.description, original.description);
        assert_eq!(loaded.date, original.date);
        assert_eq!(loaded.priority, original.priority);
        assert!(!loaded.editing);
        assert_eq!(loaded.edit_buffer, loaded.description);
    }
}

#[test]
fn wire_format_matches_the_documented_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(TASKS_FILE);

    let entries = vec![entry("Buy milk", "01.01.2024, 10:00", Priority::Low, false)];
    save_entries(&entries, &path).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let records = raw.as_array().expect("file holds a JSON array");
    assert_eq!(records.len(), 1);

    let record = records[0].as_object().unwrap();
    assert_eq!(record.len(), 4);
    assert_eq!(record["completed"], false);
    assert_eq!(record["desc"], "Buy milk");
    assert_eq!(record["date"], "01.01.2024, 10:00");
    assert_eq!(record["priority"], 0);
}

#[test]
fn reader_accepts_hand_written_files_with_reordered_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(TASKS_FILE);

    fs::write(
        &path,
        r#"[
            {"priority": 2, "desc": "Urgent thing", "completed": false, "date": "10.02.2024, 07:00"},
            {"date": "09.02.2024, 22:10", "completed": true, "desc": "Done thing", "priority": 0}
        ]"#,
    )
    .unwrap();

    let entries = load_entries(&path);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].description, "Urgent thing");
    assert_eq!(entries[0].priority, Priority::High);
    assert_eq!(entries[1].description, "Done thing");
    assert!(entries[1].completed);
}

#[test]
fn malformed_file_loads_as_empty_without_erroring() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(TASKS_FILE);

    fs::write(&path, "this is not json").unwrap();
    assert!(load_entries(&path).is_empty());

    // A record with an undefined priority level poisons the whole load.
    fs::write(
        &path,
        r#"[{"completed": false, "desc": "x", "date": "y", "priority": 9}]"#,
    )
    .unwrap();
    assert!(load_entries(&path).is_empty());
}

#[test]
fn repeated_saves_keep_exactly_the_latest_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(TASKS_FILE);

    let mut store = EntryStore::new();
    for i in 0..5 {
        store
            .append(entry(
                &format!("task {}", i),
                "01.01.2024, 10:00",
                Priority::Medium,
                false,
            ))
            .unwrap();
        save_entries(store.entries(), &path).unwrap();
    }
    store.remove_at(2).unwrap();
    save_entries(store.entries(), &path).unwrap();

    let loaded = load_entries(&path);
    let names: Vec<&str> = loaded.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(names, vec!["task 0", "task 1", "task 3", "task 4"]);
}
