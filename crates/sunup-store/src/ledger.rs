//! # Order Ledger
//!
//! The finalized-order history: an append-mostly list of checked-out
//! orders backed by one JSON file.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Order Ledger Flow                            │
//! │                                                                     │
//! │   open(path) ──► load orders.json (best-effort: any failure         │
//! │       │          becomes an empty ledger + warn!)                   │
//! │       ▼                                                             │
//! │   next_order_id() ──► YYYYMMDD + 4-digit per-day sequence           │
//! │       ▼                                                             │
//! │   append(order) ──► push + rewrite file                             │
//! │       ▼                                                             │
//! │   search / remove / daily_total over the in-memory list             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Load failures are swallowed on purpose: the shop must be able to take
//! the morning's first order even when last night's log file is missing
//! or corrupt. Write failures do surface, once per call.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use sunup_core::order::{self, Order};
use sunup_core::Money;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Append-mostly history of finalized orders, mirrored to one file.
#[derive(Debug)]
pub struct OrderLedger {
    path: PathBuf,
    orders: Vec<Order>,
}

impl OrderLedger {
    /// Opens the ledger at `path`, loading any existing order log.
    ///
    /// A missing file is the normal first-run case and loads silently as
    /// empty. An unreadable or unparseable file also loads as empty, with
    /// a `warn!`; the next [`OrderLedger::append`] overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let orders = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Vec<Order>>(&text) {
                Ok(orders) => {
                    info!(path = %path.display(), count = orders.len(), "order log loaded");
                    orders
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "order log unparseable, starting empty"
                    );
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "order log unreadable, starting empty"
                );
                Vec::new()
            }
        };

        OrderLedger { path, orders }
    }

    // -------------------------------------------------------------------------
    // Order Ids
    // -------------------------------------------------------------------------

    /// The id the next checkout should use, based on today's date.
    pub fn next_order_id(&self) -> String {
        self.next_order_id_for(Local::now().date_naive())
    }

    /// Id allocation for an explicit date. The sequence restarts at 0001
    /// on every new date.
    pub fn next_order_id_for(&self, date: NaiveDate) -> String {
        order::next_order_id(&self.orders, date)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Appends a finalized order and rewrites the log file.
    ///
    /// The order stays in memory even when the write fails, so a later
    /// append can flush it.
    pub fn append(&mut self, order: Order) -> StoreResult<()> {
        debug!(order_id = %order.order_id, lines = order.items.len(), "appending order");
        self.orders.push(order);
        self.save()
    }

    /// Removes the order with the given id. Returns false (no file write)
    /// when no such order exists.
    pub fn remove(&mut self, order_id: &str) -> StoreResult<bool> {
        let before = self.orders.len();
        self.orders.retain(|o| o.order_id != order_id);
        if self.orders.len() == before {
            return Ok(false);
        }

        debug!(order_id, "order removed");
        self.save()?;
        Ok(true)
    }

    fn save(&self) -> StoreResult<()> {
        // serde_json leaves non-ASCII text unescaped, so the log stays
        // readable in any text editor.
        let json = serde_json::to_string_pretty(&self.orders)
            .map_err(|err| StoreError::serialize("order log", err))?;
        fs::write(&self.path, json).map_err(|err| StoreError::io("writing", &self.path, err))
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Orders whose id contains `query`. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Order> {
        let query = query.trim();
        if query.is_empty() {
            return self.orders.iter().collect();
        }
        self.orders
            .iter()
            .filter(|o| o.order_id.contains(query))
            .collect()
    }

    /// Order count and revenue for one calendar date.
    pub fn daily_total(&self, date: NaiveDate) -> (usize, Money) {
        self.orders
            .iter()
            .filter(|o| o.date() == date)
            .fold((0, Money::zero()), |(count, sum), o| {
                (count + 1, sum + o.total_amount())
            })
    }

    /// Every order, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
