//! Embedded schema definition
//!
//! Both relations are created with CREATE TABLE IF NOT EXISTS so that
//! `RouteStore::ensure_schema` stays idempotent.

/// The two Route Store relations: destinations and their departure times.
///
/// `destination.number` is assigned by SQLite and never reused or updated;
/// `time` rows reference it one-to-many.
pub(crate) const SCHEMA_SQL: &str = "
    CREATE TABLE IF NOT EXISTS destination (
        number INTEGER PRIMARY KEY,
        dest TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS time (
        departure_time TEXT NOT NULL,
        number INTEGER NOT NULL,
        FOREIGN KEY(number) REFERENCES destination(number)
    );
";
