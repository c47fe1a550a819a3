//! # sunup-store: Persistence Layer for Sunup POS
//!
//! This crate owns the two on-disk artifacts of the system and the
//! in-memory stores built over them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Sunup POS Data Flow                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  sunup-store (THIS CRATE)                   │   │
//! │  │                                                             │   │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   │   │
//! │  │   │ CatalogStore │   │ OrderLedger  │   │    jsonc     │   │   │
//! │  │   │ (catalog.rs) │   │ (ledger.rs)  │   │ comment/comma│   │   │
//! │  │   │ two views,   │   │ per-day ids, │   │  tolerance   │   │   │
//! │  │   │ one catalog  │   │ history      │   │              │   │   │
//! │  │   └──────┬───────┘   └──────┬───────┘   └──────────────┘   │   │
//! │  └──────────┼──────────────────┼───────────────────────────────┘   │
//! │             ▼                  ▼                                   │
//! │        menu.json          orders.json                              │
//! │        (pretty-printed, human-readable, non-ASCII unescaped)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Catalog store: nested category tree + flat id index
//! - [`ledger`] - Order ledger: append-mostly finalized-order history
//! - [`jsonc`] - Input preprocessor tolerating comments/trailing commas
//! - [`error`] - Store error types
//!
//! ## Failure Model
//!
//! Catalog parse failures are fatal to the load call and surfaced as
//! [`error::StoreError::CatalogFormat`]. Order-log load failures are
//! swallowed into an empty ledger (history loss is preferred over startup
//! failure). Write failures surface once per call, are never retried, and
//! never roll back in-memory state.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod jsonc;
pub mod ledger;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::CatalogStore;
pub use error::{StoreError, StoreResult};
pub use ledger::OrderLedger;
