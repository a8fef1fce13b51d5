use std::fmt;
use std::path::Path;

use rusqlite::{Connection, params};

use crate::DebugRecord;

/// Insert-only persistence contract for debug records.
///
/// Implementations durably append the record and own all escaping toward
/// their storage engine; callers hand over values, never statement fragments.
pub trait LogStore {
    /// Durably appends one record.
    fn append(&mut self, record: &DebugRecord) -> Result<(), StoreError>;
}

/// Error raised by a debug log store.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying database failure.
    Database(rusqlite::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database(error) => write!(f, "debug log store failure: {error}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(error) => Some(error),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Database(error)
    }
}

/// SQLite-backed debug log.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (creating if needed) the debug log database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;

        // WAL keeps concurrent readers (a log browser) off the writer's back.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        Self::bootstrap(&conn)?;
        Ok(Self { conn })
    }

    /// Opens an in-memory store, primarily for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(&conn)?;
        Ok(Self { conn })
    }

    fn bootstrap(conn: &Connection) -> Result<(), rusqlite::Error> {
        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS debug_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                note TEXT NOT NULL,
                sql_text TEXT NOT NULL,
                logged_at TEXT NOT NULL,
                variable_name TEXT,
                variable_value TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_debug_log_logged_at ON debug_log(logged_at);
            ",
        )
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM debug_log", [], |row| row.get(0))?;
        Ok(count.unsigned_abs())
    }

    /// Reports whether the log holds no records.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Reads every stored record back in insertion order.
    ///
    /// Backs the log browser and the round-trip tests; the live system only
    /// ever appends.
    pub fn records(&self) -> Result<Vec<DebugRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT note, sql_text, logged_at, variable_name, variable_value
             FROM debug_log ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(DebugRecord {
                note: row.get(0)?,
                sql_text: row.get(1)?,
                timestamp: row.get(2)?,
                variable_name: row.get(3)?,
                variable_value: row.get(4)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

impl LogStore for SqliteStore {
    fn append(&mut self, record: &DebugRecord) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO debug_log (note, sql_text, logged_at, variable_name, variable_value)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &record.note,
                &record.sql_text,
                &record.timestamp,
                &record.variable_name,
                &record.variable_value,
            ],
        )?;

        tracing::debug!(note = %record.note, "debug record appended");
        Ok(())
    }
}

impl fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}
