use std::fs;

use clitodo::error::{AddError, Error};
use clitodo::storage::TodoStore;
use clitodo::todo::{Priority, Todo};
use tempfile::TempDir;

fn setup_store() -> (TempDir, TodoStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = TodoStore::open(dir.path().join("todo.json"));
    store.initialize().expect("init store");
    (dir, store)
}

fn seed(store: &TodoStore, descriptions: &[&str]) {
    for description in descriptions {
        store
            .add(&[*description], Priority::MEDIUM)
            .expect("seed to-do");
    }
}

#[test]
fn add_appends_period_once() {
    let (_dir, store) = setup_store();

    let plain = store.add(&["Buy", "bread"], Priority::MEDIUM).unwrap();
    let dotted = store.add(&["Buy", "eggs."], Priority::MEDIUM).unwrap();
    let shouted = store.add(&["Call", "now!"], Priority::HIGH).unwrap();

    assert_eq!(plain.description, "Buy bread.");
    assert_eq!(dotted.description, "Buy eggs.");
    assert_eq!(shouted.description, "Call now!");
}

#[test]
fn add_grows_list_by_one() {
    let (_dir, store) = setup_store();
    seed(&store, &["one", "two"]);

    let before = store.list_all().unwrap();
    let added = store.add(&["three"], Priority::LOW).unwrap();
    let after = store.list_all().unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&added));
    assert!(!added.done);
}

#[test]
fn add_scenario_from_existing_file() {
    let (_dir, store) = setup_store();
    fs::write(
        store.path(),
        r#"[{"Description":"Get milk.","Priority":2,"Done":false}]"#,
    )
    .unwrap();

    let added = store.add(&["Wash", "the", "car"], Priority::MEDIUM).unwrap();
    assert_eq!(added, Todo::new("Wash the car.", Priority::MEDIUM));

    let todos = store.list_all().unwrap();
    assert_eq!(
        todos,
        vec![
            Todo::new("Get milk.", Priority::MEDIUM),
            Todo::new("Wash the car.", Priority::MEDIUM),
        ]
    );
    assert_eq!(store.get(1).unwrap().description, "Get milk.");
    assert_eq!(store.get(2).unwrap().description, "Wash the car.");
}

#[test]
fn add_on_missing_file_returns_would_be_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = TodoStore::open(dir.path().join("missing.json"));

    let err = store.add(&["Water", "plants"], Priority::LOW).unwrap_err();
    match err {
        AddError::NotSaved { todo, error } => {
            assert_eq!(todo.description, "Water plants.");
            assert_eq!(todo.priority, Priority::LOW);
            assert!(matches!(error, Error::ReadError { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!store.exists());
}

#[test]
fn remove_shrinks_and_shifts_ids() {
    let (_dir, store) = setup_store();
    seed(&store, &["one", "two", "three"]);

    let removed = store.remove(2).unwrap();
    assert_eq!(removed.description, "two.");

    let todos = store.list_all().unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(store.get(2).unwrap().description, "three.");

    assert!(matches!(store.remove(3), Err(Error::InvalidId { id: 3, len: 2 })));
}

#[test]
fn remove_zero_is_invalid() {
    let (_dir, store) = setup_store();
    seed(&store, &["one"]);
    assert!(matches!(store.remove(0), Err(Error::InvalidId { id: 0, .. })));
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn mark_done_touches_only_target() {
    let (_dir, store) = setup_store();
    seed(&store, &["one", "two", "three"]);
    let before = store.list_all().unwrap();

    let done = store.mark_done(2).unwrap();
    assert!(done.done);
    assert_eq!(done.description, "two.");

    let after = store.list_all().unwrap();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert!(after[1].done);
    assert_eq!(after[1].description, before[1].description);
    assert_eq!(after[1].priority, before[1].priority);
}

#[test]
fn mark_done_out_of_range_keeps_file_bytes() {
    let (_dir, store) = setup_store();
    seed(&store, &["one", "two"]);
    let before = fs::read(store.path()).unwrap();

    let err = store.mark_done(5).unwrap_err();
    assert!(matches!(err, Error::InvalidId { id: 5, len: 2 }));
    assert_eq!(fs::read(store.path()).unwrap(), before);
}

#[test]
fn remove_all_empties_any_content() {
    let (_dir, store) = setup_store();
    seed(&store, &["one", "two"]);
    store.remove_all().unwrap();
    assert!(store.list_all().unwrap().is_empty());

    // does not need a readable file first
    fs::write(store.path(), "corrupt").unwrap();
    store.remove_all().unwrap();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn save_then_load_round_trips() {
    let (_dir, store) = setup_store();

    store.save_all(&[]).unwrap();
    assert!(store.load_all().unwrap().is_empty());

    let mut finished = Todo::new("Ship it!", Priority::HIGH);
    finished.done = true;
    let todos = vec![
        Todo::new("Get milk.", Priority::MEDIUM),
        finished,
        Todo::new("Read a book?", Priority::LOW),
    ];
    store.save_all(&todos).unwrap();
    assert_eq!(store.load_all().unwrap(), todos);
}

#[test]
fn load_accepts_compact_and_missing_done() {
    let (_dir, store) = setup_store();
    fs::write(
        store.path(),
        r#"[{"Description":"Old entry.","Priority":3}]"#,
    )
    .unwrap();

    let todos = store.load_all().unwrap();
    assert_eq!(todos, vec![Todo::new("Old entry.", Priority::LOW)]);
}

#[test]
fn invalid_priority_on_disk_is_parse_error() {
    let (_dir, store) = setup_store();
    fs::write(
        store.path(),
        r#"[{"Description":"Bad.","Priority":9,"Done":false}]"#,
    )
    .unwrap();

    assert!(matches!(store.load_all(), Err(Error::ParseError { .. })));
}
