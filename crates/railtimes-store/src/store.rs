//! Route Store
//!
//! Persists destination/departure associations behind a single long-lived
//! SQLite handle. Each operation is a scoped acquire-use-release against
//! that handle; no connection is opened per call.

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::schema::SCHEMA_SQL;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

/// One departure joined with its destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureRow {
    /// Human-readable destination name
    pub dest: String,
    /// Departure time as recorded; no format is enforced
    pub departure_time: String,
    /// Store-assigned destination number
    pub number: i64,
}

/// Persistent mapping from a destination name to a train number and the
/// set of departure times for that train
pub struct RouteStore {
    conn: Connection,
}

impl RouteStore {
    /// Open the store at the given path, creating the file if missing
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory store (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        db::configure(&conn)?;
        Ok(Self { conn })
    }

    /// Create both relations if absent; idempotent
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA_SQL)
            .map_err(from_rusqlite("ensure_schema"))
    }

    /// Record one departure for `dest` at `departure_time`
    ///
    /// A destination row is created lazily the first time a name is seen;
    /// its number is assigned by the store and reused on every later call
    /// for the same name. Duplicate departures for the same destination and
    /// time are permitted and accumulate.
    pub fn add_departure(&mut self, dest: &str, departure_time: &str) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(from_rusqlite("add_departure"))?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT number FROM destination WHERE dest = ?1",
                [dest],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite("add_departure"))?;

        // Insert-and-read-back in one statement, so the assigned number
        // never depends on last_insert_rowid state.
        let number: i64 = match existing {
            Some(number) => number,
            None => tx
                .query_row(
                    "INSERT INTO destination (dest) VALUES (?1) RETURNING number",
                    [dest],
                    |row| row.get(0),
                )
                .map_err(from_rusqlite("add_departure"))?,
        };

        tx.execute(
            "INSERT INTO time (number, departure_time) VALUES (?1, ?2)",
            params![number, departure_time],
        )
        .map_err(from_rusqlite("add_departure"))?;

        tx.commit().map_err(from_rusqlite("add_departure"))?;

        debug!(dest, number, departure_time, "recorded departure");
        Ok(())
    }

    /// Every departure joined with its destination, in natural result order
    ///
    /// An empty store yields an empty vec, not an error.
    pub fn list_all(&self) -> Result<Vec<DepartureRow>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT destination.dest, time.departure_time, destination.number
                 FROM destination
                 INNER JOIN time ON time.number = destination.number",
            )
            .map_err(from_rusqlite("list_all"))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(DepartureRow {
                    dest: row.get(0)?,
                    departure_time: row.get(1)?,
                    number: row.get(2)?,
                })
            })
            .map_err(from_rusqlite("list_all"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite("list_all"))?;

        debug!(count = rows.len(), "listed departures");
        Ok(rows)
    }

    /// Same join, filtered to the given destination number
    ///
    /// An unknown number yields an empty vec, not an error.
    pub fn list_by_number(&self, number: i64) -> Result<Vec<DepartureRow>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT destination.dest, time.departure_time, destination.number
                 FROM destination
                 INNER JOIN time ON time.number = destination.number
                 WHERE destination.number = ?1",
            )
            .map_err(from_rusqlite("list_by_number"))?;

        let rows = stmt
            .query_map([number], |row| {
                Ok(DepartureRow {
                    dest: row.get(0)?,
                    departure_time: row.get(1)?,
                    number: row.get(2)?,
                })
            })
            .map_err(from_rusqlite("list_by_number"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite("list_by_number"))?;

        debug!(number, count = rows.len(), "listed departures by number");
        Ok(rows)
    }
}
