//! SQLite-backed durable snapshot of the attendance session.
//!
//! The snapshot is a flat key/value table. Besides the serialized session
//! record, the scalar fields are stored under their own keys so the state
//! can be inspected with plain SQL:
//!
//! | key               | value                          |
//! |-------------------|--------------------------------|
//! | `isActive`        | `true` / `false`               |
//! | `loginInstant`    | `09:00:00 AM`                  |
//! | `logoutInstant`   | `05:30:15 PM` (absent if open) |
//! | `attendanceRecord`| JSON of the session            |
//!
//! Every save and clear runs in one transaction.

use crate::db::db::{Db, DB_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::error::PersistenceError;
use crate::libs::session::{AttendanceSession, SnapshotStore};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SCHEMA_SNAPSHOT: &str = "CREATE TABLE IF NOT EXISTS attendance_snapshot (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";
const UPSERT_ENTRY: &str = "INSERT INTO attendance_snapshot (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_ENTRY: &str = "DELETE FROM attendance_snapshot WHERE key = ?1";
const DELETE_ALL: &str = "DELETE FROM attendance_snapshot";
const SELECT_ENTRY: &str = "SELECT value FROM attendance_snapshot WHERE key = ?1";
const COUNT_ENTRIES: &str = "SELECT COUNT(*) FROM attendance_snapshot";

pub const KEY_IS_ACTIVE: &str = "isActive";
pub const KEY_LOGIN_INSTANT: &str = "loginInstant";
pub const KEY_LOGOUT_INSTANT: &str = "logoutInstant";
pub const KEY_RECORD: &str = "attendanceRecord";

pub struct SqliteSnapshot {
    conn: Connection,
}

impl SqliteSnapshot {
    /// Opens the snapshot in the application database.
    pub fn new() -> Result<Self, PersistenceError> {
        let path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&path)
    }

    pub fn open(path: &Path) -> Result<Self, PersistenceError> {
        Self::with_connection(Db::open(path)?.conn)
    }

    pub fn in_memory() -> Result<Self, PersistenceError> {
        Self::with_connection(Db::in_memory()?.conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, PersistenceError> {
        conn.execute(SCHEMA_SNAPSHOT, [])?;
        Ok(Self { conn })
    }

    /// Raw value stored under `key`.
    pub fn entry(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.conn.query_row(SELECT_ENTRY, [key], |row| row.get(0)).optional()?)
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize, PersistenceError> {
        let count: i64 = self.conn.query_row(COUNT_ENTRIES, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool, PersistenceError> {
        Ok(self.len()? == 0)
    }
}

impl SnapshotStore for SqliteSnapshot {
    fn load(&self) -> Result<Option<AttendanceSession>, PersistenceError> {
        let Some(record) = self.entry(KEY_RECORD)? else {
            return Ok(None);
        };
        let session: AttendanceSession = serde_json::from_str(&record)?;

        if let Some(is_active) = self.entry(KEY_IS_ACTIVE)? {
            if is_active != session.is_active.to_string() {
                return Err(PersistenceError::Corrupt(format!(
                    "{} is '{}' but the record says {}",
                    KEY_IS_ACTIVE, is_active, session.is_active
                )));
            }
        }

        Ok(Some(session))
    }

    fn save(&mut self, session: &AttendanceSession) -> Result<(), PersistenceError> {
        let record = serde_json::to_string(session)?;

        let tx = self.conn.transaction()?;
        tx.execute(UPSERT_ENTRY, params![KEY_IS_ACTIVE, session.is_active.to_string()])?;
        tx.execute(UPSERT_ENTRY, params![KEY_LOGIN_INSTANT, session.login_instant])?;
        match &session.logout_instant {
            Some(logout) => tx.execute(UPSERT_ENTRY, params![KEY_LOGOUT_INSTANT, logout])?,
            None => tx.execute(DELETE_ENTRY, [KEY_LOGOUT_INSTANT])?,
        };
        tx.execute(UPSERT_ENTRY, params![KEY_RECORD, record])?;
        tx.commit()?;

        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_ALL, [])?;
        tx.commit()?;
        Ok(())
    }
}
