//! askrate-store — single-file keyed persistence for questionnaire data.
//!
//! A thin generic wrapper over an embedded SQLite database holding one
//! `kv` table. Values are serialized as JSON text, so callers can keep
//! strings, lists, or numbers under the same API. Opening a missing file
//! creates a fresh empty store.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying SQLite operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A value could not be serialized or deserialized.
    #[error("bad value under key {key}: {source}")]
    Value {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

/// Durable key→value store backed by a single file on disk.
///
/// Each operation runs in its own transaction; nothing is cached between
/// calls beyond what SQLite buffers itself. Key order is insertion order:
/// overwriting an existing key keeps its original position.
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Open the store at `path`, creating the file and schema when missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path)?;
        conn.execute(SCHEMA, [])?;
        tracing::debug!(path = %path.display(), "opened store");
        Ok(Self { conn, path })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save `value` under `key`, overwriting unconditionally.
    pub fn save_by_key<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Value {
            key: key.to_string(),
            source,
        })?;
        let tx = self.conn.unchecked_transaction()?;
        // Upsert rather than INSERT OR REPLACE so the row keeps its rowid,
        // which is what key order is derived from.
        tx.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, json],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Read the value stored under `key`, or `None` when unset.
    pub fn read_by_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let json: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        json.map(|j| {
            serde_json::from_str(&j).map_err(|source| StoreError::Value {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
    }

    /// Append `item` to the list stored under `key`, creating a
    /// single-element list when the key is absent.
    ///
    /// The read and the write are two separate transactions; the race is
    /// benign for a single-user, single-process tool.
    pub fn merge_to_array_by_key<T>(&self, key: &str, item: T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut items: Vec<T> = self.read_by_key(key)?.unwrap_or_default();
        items.push(item);
        self.save_by_key(key, &items)
    }

    /// All stored values, in key insertion order.
    pub fn all_stored<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key, value FROM kv ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut values = Vec::new();
        for row in rows {
            let (key, json) = row?;
            values.push(
                serde_json::from_str(&json).map_err(|source| StoreError::Value { key, source })?,
            );
        }
        Ok(values)
    }

    /// All keys, in insertion order.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        let keys = rows.collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}
