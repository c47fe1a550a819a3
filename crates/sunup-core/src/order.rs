//! # Finalized Orders
//!
//! The immutable order snapshot produced at checkout, and the pure
//! per-day order numbering algorithm.
//!
//! ## Order Id Scheme
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  202405010001                                                       │
//! │  └──┬───┘└─┬┘                                                       │
//! │  YYYYMMDD  4-digit sequence, zero padded                            │
//! │                                                                     │
//! │  next id = greatest id with today's prefix, suffix + 1              │
//! │            (or 0001 when today has no orders yet)                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`next_order_id`] is computed against the in-memory order list the
//! ledger passes in; id generation and the following append must happen as
//! one logical step (single-writer discipline, see the ledger docs).

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::money::Money;

/// Length of the `YYYYMMDD` date prefix in an order id.
const DATE_PREFIX_LEN: usize = 8;

// =============================================================================
// Order
// =============================================================================

/// A finalized order: an id, a timestamp, and a frozen copy of the cart
/// lines at checkout time.
///
/// Created once at checkout, appended to the ledger, never mutated
/// thereafter except by explicit deletion from history. The total is
/// derived from the lines, not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,

    pub timestamp: DateTime<Local>,

    pub items: Vec<CartLine>,
}

impl Order {
    /// Builds an order from a finished cart's lines.
    pub fn new(order_id: impl Into<String>, at: DateTime<Local>, items: Vec<CartLine>) -> Self {
        Order {
            order_id: order_id.into(),
            timestamp: at,
            items,
        }
    }

    /// Sum of line totals across the snapshot.
    pub fn total_amount(&self) -> Money {
        self.items.iter().map(CartLine::line_total).sum()
    }

    /// The calendar date this order was placed on.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

// =============================================================================
// Order Numbering
// =============================================================================

/// Computes the next collision-free order id for `today`.
///
/// Scans the given orders for the numerically greatest id carrying today's
/// 8-digit date prefix and increments its 4-digit suffix; the sequence
/// starts at `0001` when today has no orders. A malformed suffix on the
/// greatest id restarts the sequence at `0001` rather than failing.
pub fn next_order_id(orders: &[Order], today: NaiveDate) -> String {
    let prefix = today.format("%Y%m%d").to_string();

    let next = orders
        .iter()
        .filter(|o| o.order_id.starts_with(&prefix))
        .map(|o| o.order_id.as_str())
        .max()
        .and_then(|id| id[DATE_PREFIX_LEN..].parse::<u32>().ok())
        .map_or(1, |last| last + 1);

    format!("{prefix}{next:04}")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order_with_id(id: &str) -> Order {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        Order::new(id, at, Vec::new())
    }

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_first_order_of_the_day() {
        assert_eq!(next_order_id(&[], may_first()), "202405010001");
    }

    #[test]
    fn test_sequence_increments_from_greatest() {
        let orders = vec![
            order_with_id("202405010001"),
            order_with_id("202405010003"),
            order_with_id("202405010002"),
        ];
        assert_eq!(next_order_id(&orders, may_first()), "202405010004");
    }

    #[test]
    fn test_sequence_resets_per_day() {
        let orders = vec![
            order_with_id("202404300007"),
            order_with_id("202404300008"),
        ];
        // Yesterday's orders do not advance today's sequence.
        assert_eq!(next_order_id(&orders, may_first()), "202405010001");
    }

    #[test]
    fn test_two_sequential_ids_never_collide() {
        let mut orders = Vec::new();
        let first = next_order_id(&orders, may_first());
        assert_eq!(first, "202405010001");

        orders.push(order_with_id(&first));
        let second = next_order_id(&orders, may_first());
        assert_eq!(second, "202405010002");
    }

    #[test]
    fn test_malformed_suffix_restarts_sequence() {
        let orders = vec![order_with_id("20240501-oops")];
        assert_eq!(next_order_id(&orders, may_first()), "202405010001");
    }

    #[test]
    fn test_total_amount_derived_from_lines() {
        use crate::cart::CartLine;

        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let order = Order::new(
            "202405010001",
            at,
            vec![
                CartLine {
                    item_id: 1,
                    name: "Ham Toast".into(),
                    category: "Toasts".into(),
                    option: "with egg".into(),
                    unit_price: Money::from_units(45),
                    quantity: 2,
                },
                CartLine {
                    item_id: 2,
                    name: "Milk Tea".into(),
                    category: "Drinks".into(),
                    option: "large".into(),
                    unit_price: Money::from_units(40),
                    quantity: 1,
                },
            ],
        );

        assert_eq!(order.total_amount(), Money::from_units(130));
        assert_eq!(order.date(), may_first());
    }

    #[test]
    fn test_order_json_has_no_stored_totals() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let order = Order::new("202405010001", at, Vec::new());

        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("total_amount").is_none());
        assert_eq!(json["order_id"], "202405010001");
    }
}
