//! # sunup-core: Pure Business Logic for Sunup POS
//!
//! This crate is the **heart** of the breakfast-shop POS. It contains all
//! business logic as pure functions and owned values with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Sunup POS Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │               ★ sunup-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐           │   │
//! │  │  │  menu   │ │ pricing │ │  cart   │ │  order  │           │   │
//! │  │  │ MenuItem│ │ options │ │  Cart   │ │  Order  │           │   │
//! │  │  │ Variant │ │ variants│ │ CartLine│ │ next id │           │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘           │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO CLOCK • NO FILES • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                sunup-store (Persistence Layer)              │   │
//! │  │          JSON catalog file, JSON order log on disk          │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Catalog types (MenuItem, VariantKind, document shapes)
//! - [`pricing`] - Variant-price resolution from sparse optional fields
//! - [`cart`] - Cart aggregation with merge-on-identical-selection
//! - [`order`] - Finalized order snapshots and per-day order numbering
//! - [`money`] - Integer money type (no floating point!)
//! - [`validation`] - Pre-flight menu-item validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; dates are parameters
//! 2. **No I/O**: file access lives in `sunup-store`, never here
//! 3. **Integer Money**: whole currency units as i64, never floats
//! 4. **Total Operations**: cart and pricing never fail; absent data
//!    degrades to documented fallbacks

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartSortKey};
pub use error::{ValidationError, ValidationResult};
pub use menu::{CatalogDoc, CategoryDoc, ItemId, MenuItem, VariantKind, UNASSIGNED_ID};
pub use money::Money;
pub use order::Order;
pub use pricing::{PriceOption, Selection};
