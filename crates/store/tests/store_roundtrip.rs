//! Integration tests for the SQLite-backed debug log: durability across
//! reopen, insertion ordering, and serialized-collection variable values.

use tempfile::TempDir;

use webdiag_store::{DebugRecord, LogStore, SqliteStore};

// ============================================================================
// Durability
// ============================================================================

/// Verifies appended records survive closing and reopening the database file.
#[test]
fn records_survive_reopen() {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("debug_log.sqlite");

    {
        let mut store = SqliteStore::open(&db_path).expect("open");
        store
            .append(
                &DebugRecord::new("first pass", "SELECT 1").with_timestamp("2026-08-06 08:00:00"),
            )
            .expect("append");
    }

    let store = SqliteStore::open(&db_path).expect("reopen");
    let records = store.records().expect("read back");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].note, "first pass");
    assert_eq!(records[0].timestamp, "2026-08-06 08:00:00");
}

/// Verifies records come back in insertion order.
#[test]
fn read_back_preserves_insertion_order() {
    let mut store = SqliteStore::open_in_memory().expect("open");
    for n in 0..5 {
        store
            .append(&DebugRecord::new(format!("note {n}"), format!("SELECT {n}")))
            .expect("append");
    }

    let notes: Vec<String> = store
        .records()
        .expect("read back")
        .into_iter()
        .map(|record| record.note)
        .collect();
    assert_eq!(notes, ["note 0", "note 1", "note 2", "note 3", "note 4"]);
}

// ============================================================================
// Variable snapshots
// ============================================================================

/// Verifies a serialized collection stored as a variable value decodes back
/// to the original structure.
#[test]
fn collection_variable_round_trips_through_storage() {
    let mut store = SqliteStore::open_in_memory().expect("open");
    let record = DebugRecord::new("batch ids", "SELECT id FROM batch")
        .with_variable_json("ids", &vec![10, 20, 30])
        .expect("serializable");

    store.append(&record).expect("append");

    let stored = store.records().expect("read back");
    let value = stored[0].variable_value.as_deref().expect("value present");
    let decoded: Vec<i32> = serde_json::from_str(value).expect("valid json");
    assert_eq!(decoded, vec![10, 20, 30]);
}

/// Verifies optional fields stay NULL when never set.
#[test]
fn absent_variable_reads_back_as_none() {
    let mut store = SqliteStore::open_in_memory().expect("open");
    store
        .append(&DebugRecord::new("bare", "SELECT 1"))
        .expect("append");

    let stored = store.records().expect("read back");
    assert!(stored[0].variable_name.is_none());
    assert!(stored[0].variable_value.is_none());
}
