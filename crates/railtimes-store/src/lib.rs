//! railtimes-store - Persistence layer for train departures
//!
//! Provides:
//! - SQLite schema for destinations and their departure times
//! - A long-lived `RouteStore` handle wrapping a single connection
//! - Join queries returning plain departure rows

pub mod db;
pub mod errors;
mod schema;
pub mod store;

// Re-export key types
pub use errors::{Result, StoreError};
pub use store::{DepartureRow, RouteStore};
