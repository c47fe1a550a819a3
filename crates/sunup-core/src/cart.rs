//! # Cart Aggregation
//!
//! The in-progress transaction: an ordered list of cart lines with
//! merge-on-identical-selection semantics.
//!
//! ## Merge Key
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 (item_id, option label) is unique                   │
//! │                                                                     │
//! │  tap "Ham Toast / with egg"  ──► new line, qty 1                    │
//! │  tap "Ham Toast / with egg"  ──► same line, qty 2   (merged)        │
//! │  tap "Ham Toast / regular"   ──► new line, qty 1    (different key) │
//! │                                                                     │
//! │  decrement qty-1 line        ──► line removed, never kept at 0      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines denormalize the item name and owning category at add time; later
//! catalog edits do not reach back into an open cart.
//!
//! All operations are total. Acting on a missing line is a no-op and an
//! empty cart is valid with total 0.

use serde::{Deserialize, Serialize};

use crate::menu::{ItemId, MenuItem};
use crate::money::Money;
use crate::order::Order;
use chrono::{DateTime, Local};

// =============================================================================
// Cart Line
// =============================================================================

/// One (item, chosen variant) aggregate entry with a quantity.
///
/// Serialized into order records; field names match the order-log file.
/// The line subtotal is derived via [`CartLine::line_total`], not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ItemId,

    /// Item name captured at add time (frozen, not live-linked).
    pub name: String,

    /// Owning category name captured at add time (frozen).
    pub category: String,

    /// The chosen variant's label; one half of the merge key.
    pub option: String,

    /// Resolved price for that label, captured at add time.
    pub unit_price: Money,

    /// Always at least 1; a line that would drop to 0 is removed instead.
    pub quantity: i64,
}

impl CartLine {
    /// Line subtotal (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

// =============================================================================
// Sort Keys
// =============================================================================

/// Columns the cart can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartSortKey {
    Name,
    Option,
    UnitPrice,
    Quantity,
    LineTotal,
}

// =============================================================================
// Cart
// =============================================================================

/// The in-progress transaction.
///
/// ## Invariants
/// - at most one line per `(item_id, option)` pair
/// - every line has `quantity >= 1`
/// - an applied sort key persists and re-applies after every mutation
///   until changed or cleared
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    sort: Option<(CartSortKey, bool)>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a selection to the cart, merging with an existing line when
    /// the `(item id, option)` pair is already present.
    ///
    /// On a miss, a new quantity-1 line captures the item name and the
    /// caller-supplied owning category at this instant.
    pub fn add_or_increment(
        &mut self,
        item: &MenuItem,
        category: &str,
        option: &str,
        unit_price: Money,
    ) {
        if let Some(line) = self.find_mut(item.id, option) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                item_id: item.id,
                name: item.name.clone(),
                category: category.to_string(),
                option: option.to_string(),
                unit_price,
                quantity: 1,
            });
        }
        self.resort();
    }

    /// Bumps a line's quantity by one. No-op (returns false) on a missing
    /// line.
    pub fn increment(&mut self, item_id: ItemId, option: &str) -> bool {
        let found = match self.find_mut(item_id, option) {
            Some(line) => {
                line.quantity += 1;
                true
            }
            None => false,
        };
        if found {
            self.resort();
        }
        found
    }

    /// Drops a line's quantity by one; a line at quantity 1 is removed
    /// rather than kept at zero. No-op (returns false) on a missing line.
    pub fn decrement(&mut self, item_id: ItemId, option: &str) -> bool {
        let Some(pos) = self.find_pos(item_id, option) else {
            return false;
        };

        if self.lines[pos].quantity <= 1 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].quantity -= 1;
        }
        self.resort();
        true
    }

    /// Unconditionally removes a line. Returns false if it was not there.
    pub fn remove_line(&mut self, item_id: ItemId, option: &str) -> bool {
        match self.find_pos(item_id, option) {
            Some(pos) => {
                self.lines.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Empties the cart. The sort key survives for the next transaction.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Applies a sort key. The key persists across later mutations until
    /// replaced or cleared; the sort itself is stable.
    pub fn sort_by(&mut self, key: CartSortKey, ascending: bool) {
        self.sort = Some((key, ascending));
        self.resort();
    }

    /// Drops the persistent sort; current line order is kept as-is.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Sum of line totals across all lines; 0 for an empty cart.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The current lines, in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (not total quantity).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Snapshots the current lines into a finalized [`Order`].
    ///
    /// The caller obtains `order_id` from the ledger immediately before
    /// this call and appends the result in the same logical step.
    pub fn checkout(&self, order_id: impl Into<String>, at: DateTime<Local>) -> Order {
        Order::new(order_id, at, self.lines.clone())
    }

    fn find_pos(&self, item_id: ItemId, option: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| l.item_id == item_id && l.option == option)
    }

    fn find_mut(&mut self, item_id: ItemId, option: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|l| l.item_id == item_id && l.option == option)
    }

    /// Re-applies the persistent sort key, if any. Stable, so lines that
    /// compare equal keep their relative order.
    fn resort(&mut self) {
        let Some((key, ascending)) = self.sort else {
            return;
        };

        self.lines.sort_by(|a, b| {
            let ord = match key {
                CartSortKey::Name => a.name.cmp(&b.name),
                CartSortKey::Option => a.option.cmp(&b.option),
                CartSortKey::UnitPrice => a.unit_price.cmp(&b.unit_price),
                CartSortKey::Quantity => a.quantity.cmp(&b.quantity),
                CartSortKey::LineTotal => a.line_total().cmp(&b.line_total()),
            };
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::VariantKind;
    use crate::pricing;

    fn toast() -> MenuItem {
        let mut item = MenuItem::new("Ham Toast")
            .with_price(VariantKind::Regular, 35)
            .with_price(VariantKind::WithEgg, 45);
        item.id = 7;
        item
    }

    fn fries() -> MenuItem {
        let mut item = MenuItem::new("Fries").with_price(VariantKind::Small, 30);
        item.id = 9;
        item
    }

    #[test]
    fn test_same_selection_merges_into_one_line() {
        let mut cart = Cart::new();
        let item = toast();

        cart.add_or_increment(&item, "Toasts", "with egg", Money::from_units(45));
        cart.add_or_increment(&item, "Toasts", "with egg", Money::from_units(45));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_different_option_gets_its_own_line() {
        let mut cart = Cart::new();
        let item = toast();

        cart.add_or_increment(&item, "Toasts", "regular", Money::from_units(35));
        cart.add_or_increment(&item, "Toasts", "with egg", Money::from_units(45));

        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_decrement_at_quantity_one_removes_line() {
        let mut cart = Cart::new();
        let item = toast();
        cart.add_or_increment(&item, "Toasts", "regular", Money::from_units(35));
        cart.add_or_increment(&item, "Toasts", "regular", Money::from_units(35));

        assert!(cart.decrement(7, "regular"));
        assert_eq!(cart.lines()[0].quantity, 1);

        assert!(cart.decrement(7, "regular"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_missing_line_operations_are_noops() {
        let mut cart = Cart::new();
        assert!(!cart.increment(99, "regular"));
        assert!(!cart.decrement(99, "regular"));
        assert!(!cart.remove_line(99, "regular"));
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_total_sums_line_totals() {
        let mut cart = Cart::new();
        cart.add_or_increment(&toast(), "Toasts", "regular", Money::from_units(50));
        cart.increment(7, "regular"); // qty 2 at $50
        cart.add_or_increment(&fries(), "Sides", "small", Money::from_units(30));

        assert_eq!(cart.total(), Money::from_units(130));
    }

    #[test]
    fn test_add_captures_name_and_category() {
        let mut cart = Cart::new();
        cart.add_or_increment(&toast(), "Toasts", "regular", Money::from_units(35));

        let line = &cart.lines()[0];
        assert_eq!(line.name, "Ham Toast");
        assert_eq!(line.category, "Toasts");
        assert_eq!(line.line_total(), Money::from_units(35));
    }

    #[test]
    fn test_sort_persists_across_mutations() {
        let mut cart = Cart::new();
        cart.add_or_increment(&toast(), "Toasts", "with egg", Money::from_units(45));
        cart.add_or_increment(&fries(), "Sides", "small", Money::from_units(30));
        cart.sort_by(CartSortKey::UnitPrice, true);

        assert_eq!(cart.lines()[0].name, "Fries");

        // A cheaper line added later must land first without re-sorting
        // explicitly.
        let mut egg = MenuItem::new("Boiled Egg").with_price(VariantKind::Single, 10);
        egg.id = 3;
        cart.add_or_increment(&egg, "Sides", "single", Money::from_units(10));

        assert_eq!(cart.lines()[0].name, "Boiled Egg");
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut cart = Cart::new();
        let mut a = MenuItem::new("Alpha").with_price(VariantKind::Single, 20);
        a.id = 1;
        let mut b = MenuItem::new("Beta").with_price(VariantKind::Single, 20);
        b.id = 2;

        cart.add_or_increment(&a, "X", "single", Money::from_units(20));
        cart.add_or_increment(&b, "X", "single", Money::from_units(20));
        cart.sort_by(CartSortKey::UnitPrice, false);

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);
    }

    #[test]
    fn test_selection_feeds_cart_merge_key() {
        // End to end through the resolver: same tap twice merges.
        let item = {
            let mut i = MenuItem::new("Jam Toast")
                .with_price(VariantKind::Regular, 25)
                .with_price(VariantKind::WithEgg, 35)
                .with_flavors(["Strawberry"]);
            i.id = 4;
            i
        };

        let selections = pricing::selectable_variants(&item);
        let picked = &selections[1]; // "Strawberry/with egg"

        let mut cart = Cart::new();
        cart.add_or_increment(&item, "Toasts", &picked.label, picked.price);
        cart.add_or_increment(&item, "Toasts", &picked.label, picked.price);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].option, "Strawberry/with egg");
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_checkout_snapshots_lines() {
        use chrono::TimeZone;

        let mut cart = Cart::new();
        cart.add_or_increment(&toast(), "Toasts", "regular", Money::from_units(35));

        let at = Local.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let order = cart.checkout("202405010001", at);

        // Later cart mutation does not touch the snapshot.
        cart.clear();
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total_amount(), Money::from_units(35));
    }
}
