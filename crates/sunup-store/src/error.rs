//! # Store Error Types
//!
//! Error types for catalog and order-log persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  std::io::Error / serde_json::Error                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← adds the path and the operation         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  caller decides: surface (catalog load/save) or swallow with a      │
//! │  warn! (order-log load, which is best-effort by design)             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Persistence-layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input could not be parsed as either the nested catalog shape or a
    /// single bare category.
    ///
    /// Fatal to the load call; the caller's previous catalog (if any) is
    /// left untouched because loading constructs a fresh store.
    #[error("catalog format not recognized: {0}")]
    CatalogFormat(String),

    /// A filesystem read or write failed.
    #[error("{op} {path} failed: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    /// In-memory state could not be serialized for writing.
    #[error("serializing {what} failed: {source}")]
    Serialize {
        what: &'static str,
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Wraps an I/O failure with the operation and path it happened on.
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Wraps a serialization failure with what was being written.
    pub fn serialize(what: &'static str, source: serde_json::Error) -> Self {
        StoreError::Serialize { what, source }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_includes_path() {
        let err = StoreError::io(
            "writing",
            "/tmp/orders.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("writing"));
        assert!(msg.contains("/tmp/orders.json"));
    }

    #[test]
    fn test_catalog_format_message() {
        let err = StoreError::CatalogFormat("expected an object".to_string());
        assert_eq!(
            err.to_string(),
            "catalog format not recognized: expected an object"
        );
    }
}
