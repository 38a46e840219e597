//! SQLite-backed option-var store
//!
//! One flat `option_vars` table; no migrations framework, the schema is
//! created on open and never changes shape.

use std::path::Path;

use polysym_core::{Result, SymError};
use rusqlite::{Connection, OptionalExtension};

use crate::vars::OptionVars;

/// Durable option-var store for headless or batch use
pub struct SqliteOptionVars {
    conn: Connection,
}

impl SqliteOptionVars {
    /// Open (or create) a store at the given path
    ///
    /// # Errors
    ///
    /// Returns `SymError::Persistence` if the database cannot be opened or
    /// the schema cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path).map_err(from_rusqlite)?;
        Self::with_connection(conn)
    }

    /// Open an in-memory store (for testing)
    ///
    /// # Errors
    ///
    /// Returns `SymError::Persistence` if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS option_vars (
                name  TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(from_rusqlite)?;
        Ok(Self { conn })
    }
}

impl OptionVars for SqliteOptionVars {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM option_vars WHERE name = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO option_vars (name, value) VALUES (?1, ?2)
                 ON CONFLICT(name) DO UPDATE SET value = excluded.value",
                [key, value],
            )
            .map_err(from_rusqlite)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM option_vars WHERE name = ?1", [key])
            .map_err(from_rusqlite)?;
        Ok(removed > 0)
    }
}

/// Create a persistence error from rusqlite::Error
fn from_rusqlite(err: rusqlite::Error) -> SymError {
    SymError::Persistence {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_set_get_remove() {
        let mut vars = SqliteOptionVars::open_in_memory().unwrap();
        assert_eq!(vars.get("k").unwrap(), None);

        vars.set("k", "v").unwrap();
        assert_eq!(vars.get("k").unwrap().as_deref(), Some("v"));

        vars.set("k", "v2").unwrap();
        assert_eq!(vars.get("k").unwrap().as_deref(), Some("v2"));

        assert!(vars.remove("k").unwrap());
        assert!(!vars.remove("k").unwrap());
    }
}
