//! Error handling for railtimes-store

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by the Route Store
///
/// The store has exactly one meaningful failure mode: the storage medium
/// is unreachable or rejects a statement. Unknown destination numbers and
/// empty stores are reported as ordinary (empty) results, not errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite connection or statement failure
    #[error("storage unavailable during {op}: {source}")]
    Storage {
        op: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

/// Map a rusqlite error into a storage error tagged with the failing operation
pub(crate) fn from_rusqlite(op: &'static str) -> impl FnOnce(rusqlite::Error) -> StoreError {
    move |source| StoreError::Storage { op, source }
}
