//! Persistent settings backed by SQLite.
//!
//! One tiny table. Today it holds a single fact, the greeting service
//! endpoint, so that a `--endpoint` given once sticks for later sessions.

use std::sync::Mutex;

use anyhow::{Context as _, Result};
use rusqlite::Connection;

const ENDPOINT_KEY: &str = "endpoint";

/// Typed access to the settings table. Use `":memory:"` for tests.
pub struct Settings {
    conn: Mutex<Connection>,
}

impl Settings {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open settings database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS settings (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create settings table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// The remembered service endpoint, if any.
    pub fn endpoint(&self) -> Result<Option<String>> {
        self.get(ENDPOINT_KEY)
    }

    /// Remember the service endpoint for later sessions.
    pub fn set_endpoint(&self, endpoint: &str) -> Result<()> {
        self.set(ENDPOINT_KEY, endpoint)
    }

    pub fn forget_endpoint(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM settings WHERE key = ?1", [ENDPOINT_KEY])?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }
}
