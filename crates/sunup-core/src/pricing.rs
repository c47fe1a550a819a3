//! # Price Option Resolution
//!
//! Pure functions that turn a [`MenuItem`]'s sparse price table into the
//! ordered list of sellable variants.
//!
//! ## Resolution Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   From Item to Cart Choices                         │
//! │                                                                     │
//! │  MenuItem ──► price_options() ──► [(regular, $35), (with egg, $45)] │
//! │      │                                                              │
//! │      │        has_multiple_variants()? ── false ─► add directly     │
//! │      │                 │                                            │
//! │      │                true                                          │
//! │      ▼                 ▼                                            │
//! │  flavors ──► selectable_variants() ──► "Spicy/with egg" ($45) ...   │
//! │                                                                     │
//! │  chosen Selection + MenuItem ──► Cart::add_or_increment             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is total: an item with no prices at all resolves to an
//! empty option list and a single zero-priced "single" selection.

use crate::menu::{MenuItem, VariantKind};
use crate::money::Money;

/// Option label used when an item has no variant dimensions at all.
pub const DEFAULT_OPTION_LABEL: &str = "single";

/// Price kinds that count as real choices for [`has_multiple_variants`].
///
/// Bundle and Single are fallback/base prices, not choices, so they are
/// deliberately excluded.
const CHOICE_KINDS: [VariantKind; 9] = [
    VariantKind::Regular,
    VariantKind::WithEgg,
    VariantKind::Small,
    VariantKind::Medium,
    VariantKind::Large,
    VariantKind::DanbingCrust,
    VariantKind::HefenCrust,
    VariantKind::EightPieces,
    VariantKind::TenPieces,
];

// =============================================================================
// Price Options
// =============================================================================

/// One priced variant of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceOption {
    pub kind: VariantKind,
    pub price: Money,
}

impl PriceOption {
    /// The display label, also used as the cart merge key component.
    #[inline]
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Enumerates the valid price options of an item.
///
/// Each populated price field contributes exactly one entry, in the fixed
/// [`VariantKind::ALL`] order; absent fields contribute none. Pure, no
/// failure cases; a fully-empty item yields an empty list.
pub fn price_options(item: &MenuItem) -> Vec<PriceOption> {
    VariantKind::ALL
        .iter()
        .filter_map(|&kind| item.price(kind).map(|price| PriceOption { kind, price }))
        .collect()
}

/// Whether a caller must disambiguate before adding this item to a cart.
///
/// True when the item has flavors, or more than one populated price field
/// among the real choice kinds (bundle and single prices do not count).
pub fn has_multiple_variants(item: &MenuItem) -> bool {
    if !item.flavor_list().is_empty() {
        return true;
    }

    let count = CHOICE_KINDS
        .iter()
        .filter(|&&kind| item.price(kind).is_some())
        .count();
    count > 1
}

/// The single representative price used for sorting and menu display.
///
/// Fixed fallback priority: regular, then small, then single, then bundle,
/// then zero when nothing is priced.
pub fn base_price(item: &MenuItem) -> Money {
    item.price(VariantKind::Regular)
        .or_else(|| item.price(VariantKind::Small))
        .or_else(|| item.price(VariantKind::Single))
        .or_else(|| item.price(VariantKind::Bundle))
        .unwrap_or_else(Money::zero)
}

// =============================================================================
// Selectable Variants
// =============================================================================

/// One concrete choice a customer can pick: the final cart option label
/// and its unit price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub label: String,
    pub price: Money,
}

/// The effective choice set for an item, combining flavors with price
/// options.
///
/// ## Combination Rule
/// - flavors and two or more price options: the cartesian product, labeled
///   `"flavor/price-label"` (e.g. `"Strawberry/with egg"`)
/// - flavors and at most one price option: one selection per flavor,
///   labeled by the flavor alone, priced at the lone option (or 0 when the
///   item is unpriced)
/// - no flavors: one selection per price option; an unpriced item falls
///   back to a single zero-priced [`DEFAULT_OPTION_LABEL`] entry
///
/// Note the one-option flavor label omits the price label on purpose; the
/// label is the cart merge key, and re-pricing an item must not strand old
/// cart lines under a stale key mid-transaction.
pub fn selectable_variants(item: &MenuItem) -> Vec<Selection> {
    let options = price_options(item);
    let flavors = item.flavor_list();

    if !flavors.is_empty() {
        if options.len() > 1 {
            return flavors
                .iter()
                .flat_map(|flavor| {
                    options.iter().map(move |opt| Selection {
                        label: format!("{}/{}", flavor, opt.label()),
                        price: opt.price,
                    })
                })
                .collect();
        }

        let price = options.first().map_or_else(Money::zero, |opt| opt.price);
        return flavors
            .iter()
            .map(|flavor| Selection {
                label: flavor.clone(),
                price,
            })
            .collect();
    }

    if options.is_empty() {
        return vec![Selection {
            label: DEFAULT_OPTION_LABEL.to_string(),
            price: Money::zero(),
        }];
    }

    options
        .iter()
        .map(|opt| Selection {
            label: opt.label().to_string(),
            price: opt.price,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;

    #[test]
    fn test_single_price_field_resolves_to_one_option() {
        let item = MenuItem::new("Ham Toast").with_price(VariantKind::Regular, 35);

        let opts = price_options(&item);
        assert_eq!(opts.len(), 1);
        assert_eq!(opts[0].kind, VariantKind::Regular);
        assert_eq!(opts[0].price, Money::from_units(35));
        assert!(!has_multiple_variants(&item));
    }

    #[test]
    fn test_empty_item_resolves_to_no_options() {
        let item = MenuItem::new("Mystery");
        assert!(price_options(&item).is_empty());
        assert!(!has_multiple_variants(&item));
        assert!(base_price(&item).is_zero());
    }

    #[test]
    fn test_options_follow_fixed_order() {
        // Populated out of order on purpose; resolution order must win.
        let item = MenuItem::new("Milk Tea")
            .with_price(VariantKind::Large, 45)
            .with_price(VariantKind::Small, 30)
            .with_price(VariantKind::Medium, 35);

        let labels: Vec<&str> = price_options(&item).iter().map(|o| o.label()).collect();
        assert_eq!(labels, ["small", "medium", "large"]);
    }

    #[test]
    fn test_bundle_and_single_do_not_count_as_choices() {
        let item = MenuItem::new("Combo A")
            .with_price(VariantKind::Bundle, 99)
            .with_price(VariantKind::Single, 79);
        assert!(!has_multiple_variants(&item));

        let item = item.with_price(VariantKind::Regular, 55);
        // Still one real choice kind.
        assert!(!has_multiple_variants(&item));
    }

    #[test]
    fn test_two_choice_kinds_require_disambiguation() {
        let item = MenuItem::new("Egg Pancake")
            .with_price(VariantKind::DanbingCrust, 40)
            .with_price(VariantKind::HefenCrust, 45);
        assert!(has_multiple_variants(&item));
    }

    #[test]
    fn test_flavors_alone_require_disambiguation() {
        let item = MenuItem::new("Jam Toast")
            .with_price(VariantKind::Regular, 25)
            .with_flavors(["Strawberry", "Peanut"]);
        assert!(has_multiple_variants(&item));
    }

    #[test]
    fn test_base_price_fallback_priority() {
        let regular = MenuItem::new("A")
            .with_price(VariantKind::Regular, 35)
            .with_price(VariantKind::Small, 30);
        assert_eq!(base_price(&regular), Money::from_units(35));

        let small = MenuItem::new("B")
            .with_price(VariantKind::Small, 30)
            .with_price(VariantKind::Single, 60);
        assert_eq!(base_price(&small), Money::from_units(30));

        let single = MenuItem::new("C")
            .with_price(VariantKind::Single, 60)
            .with_price(VariantKind::Bundle, 99);
        assert_eq!(base_price(&single), Money::from_units(60));

        let bundle = MenuItem::new("D").with_price(VariantKind::Bundle, 99);
        assert_eq!(base_price(&bundle), Money::from_units(99));
    }

    #[test]
    fn test_flavor_times_price_cartesian() {
        let item = MenuItem::new("Jam Toast")
            .with_price(VariantKind::Regular, 25)
            .with_price(VariantKind::WithEgg, 35)
            .with_flavors(["Strawberry", "Peanut"]);

        let selections = selectable_variants(&item);
        assert_eq!(selections.len(), 4); // len(flavors) * 2

        let labels: Vec<&str> = selections.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Strawberry/regular",
                "Strawberry/with egg",
                "Peanut/regular",
                "Peanut/with egg",
            ]
        );
        assert_eq!(selections[1].price, Money::from_units(35));
    }

    #[test]
    fn test_flavor_with_single_price_labels_by_flavor_alone() {
        let item = MenuItem::new("Tea")
            .with_price(VariantKind::Regular, 20)
            .with_flavors(["Black", "Green"]);

        let selections = selectable_variants(&item);
        assert_eq!(selections.len(), 2);
        assert_eq!(selections[0].label, "Black");
        assert_eq!(selections[0].price, Money::from_units(20));
    }

    #[test]
    fn test_flavor_with_no_price_is_zero_priced() {
        let item = MenuItem::new("Topping").with_flavors(["Pearl"]);

        let selections = selectable_variants(&item);
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].label, "Pearl");
        assert!(selections[0].price.is_zero());
    }

    #[test]
    fn test_unpriced_item_falls_back_to_single() {
        let selections = selectable_variants(&MenuItem::new("Water"));
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].label, DEFAULT_OPTION_LABEL);
        assert!(selections[0].price.is_zero());
    }
}
