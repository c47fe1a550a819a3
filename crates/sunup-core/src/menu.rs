//! # Catalog Types
//!
//! Domain types for the menu catalog: items with sparse variant pricing,
//! categories, and the document shapes read from / written to the catalog
//! file.
//!
//! ## Sparse Variant Pricing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         MenuItem                                    │
//! │                                                                     │
//! │  id: 12  name: "Ham Toast"                                          │
//! │                                                                     │
//! │  price_regular:  Some(35) ──┐                                       │
//! │  price_with_egg: Some(45) ──┤  populated fields = this item's       │
//! │  price_small:    None       │  variant dimensions                   │
//! │  price_danbing:  None       │                                       │
//! │  ...                      ──┘  absent (or null) = "not applicable"  │
//! │                                                                     │
//! │  flavors: ["Original", "Spicy"]   (orthogonal to price variants)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A field being absent is *not* the same as a price of zero. Each price
//! field is one [`VariantKind`]; the closed set of kinds and their fixed
//! order drive the deterministic enumeration in [`crate::pricing`].

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item Identity
// =============================================================================

/// Catalog-wide item identifier. Positive once assigned, stable forever.
pub type ItemId = u32;

/// The id of an item that has not been assigned one yet.
///
/// Items arrive from hand-edited catalog files without ids; the catalog
/// store backfills fresh ids at load time. No valid item keeps id 0.
pub const UNASSIGNED_ID: ItemId = 0;

// =============================================================================
// Variant Kinds
// =============================================================================

/// The closed set of price-variant dimensions an item can carry.
///
/// ## Ordering Is Significant
/// [`VariantKind::ALL`] fixes the enumeration order used everywhere a
/// price list is produced (menus, context choices, cart labels). Changing
/// it would reorder every displayed option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// Plain preparation.
    Regular,
    /// With a fried egg added (toasts, burgers, fried noodles).
    WithEgg,
    /// Small serving (drinks, fries).
    Small,
    /// Medium serving.
    Medium,
    /// Large serving.
    Large,
    /// Served on a danbing (egg-crepe) crust.
    DanbingCrust,
    /// Served on a hefen (flat rice noodle) crust.
    HefenCrust,
    /// Eight-piece portion (dumplings).
    EightPieces,
    /// Ten-piece portion.
    TenPieces,
    /// Combo/bundle price for a set.
    Bundle,
    /// Single à-la-carte price; also the default label for items with no
    /// variant dimensions at all.
    Single,
}

impl VariantKind {
    /// Every kind, in the fixed resolution/display order.
    pub const ALL: [VariantKind; 11] = [
        VariantKind::Regular,
        VariantKind::WithEgg,
        VariantKind::Small,
        VariantKind::Medium,
        VariantKind::Large,
        VariantKind::DanbingCrust,
        VariantKind::HefenCrust,
        VariantKind::EightPieces,
        VariantKind::TenPieces,
        VariantKind::Bundle,
        VariantKind::Single,
    ];

    /// The display label for this kind. Labels are part of the cart merge
    /// key, so they are stable.
    pub const fn label(self) -> &'static str {
        match self {
            VariantKind::Regular => "regular",
            VariantKind::WithEgg => "with egg",
            VariantKind::Small => "small",
            VariantKind::Medium => "medium",
            VariantKind::Large => "large",
            VariantKind::DanbingCrust => "danbing crust",
            VariantKind::HefenCrust => "hefen crust",
            VariantKind::EightPieces => "8 pcs",
            VariantKind::TenPieces => "10 pcs",
            VariantKind::Bundle => "bundle",
            VariantKind::Single => "single",
        }
    }

    /// The catalog-file field name carrying this kind's price.
    pub const fn field_name(self) -> &'static str {
        match self {
            VariantKind::Regular => "price_regular",
            VariantKind::WithEgg => "price_with_egg",
            VariantKind::Small => "price_small",
            VariantKind::Medium => "price_medium",
            VariantKind::Large => "price_large",
            VariantKind::DanbingCrust => "price_danbing",
            VariantKind::HefenCrust => "price_hefen",
            VariantKind::EightPieces => "price_8pcs",
            VariantKind::TenPieces => "price_10pcs",
            VariantKind::Bundle => "price",
            VariantKind::Single => "price_single",
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A single sellable item with a sparse table of optional variant prices.
///
/// Field names mirror the catalog file format. Every price field is
/// individually optional; both omission and an explicit `null` read as
/// "this variant does not apply". Unknown fields in input are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog-wide id; [`UNASSIGNED_ID`] until the store assigns one.
    #[serde(default)]
    pub id: ItemId,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Plain-preparation price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_regular: Option<i64>,

    /// Price with an added egg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_with_egg: Option<i64>,

    /// Small-serving price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_small: Option<i64>,

    /// Medium-serving price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_medium: Option<i64>,

    /// Large-serving price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_large: Option<i64>,

    /// Price on a danbing crust.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_danbing: Option<i64>,

    /// Price on a hefen crust.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_hefen: Option<i64>,

    /// Eight-piece price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_8pcs: Option<i64>,

    /// Ten-piece price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_10pcs: Option<i64>,

    /// Combo/bundle set price. Stored as `price` in the file.
    #[serde(rename = "price", default, skip_serializing_if = "Option::is_none")]
    pub price_bundle: Option<i64>,

    /// Single à-la-carte price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_single: Option<i64>,

    /// What a bundle contains, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Ordered flavor choices. A distinct dimension, orthogonal to the
    /// price variants above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavors: Option<Vec<String>>,

    /// Opaque image reference; not interpreted by the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MenuItem {
    /// Creates an unpriced, unassigned item with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        MenuItem {
            name: name.into(),
            ..MenuItem::default()
        }
    }

    /// Builder-style price setter, mainly for editors and tests.
    pub fn with_price(mut self, kind: VariantKind, units: i64) -> Self {
        *self.price_slot_mut(kind) = Some(units);
        self
    }

    /// Builder-style flavor setter.
    pub fn with_flavors<I, S>(mut self, flavors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flavors = Some(flavors.into_iter().map(Into::into).collect());
        self
    }

    /// The price for one variant kind, if that variant applies.
    pub fn price(&self, kind: VariantKind) -> Option<Money> {
        self.price_slot(kind).map(Money::from_units)
    }

    /// The flavor list, empty when the item has no flavor dimension.
    pub fn flavor_list(&self) -> &[String] {
        self.flavors.as_deref().unwrap_or(&[])
    }

    /// Whether the store has assigned this item a real id yet.
    #[inline]
    pub fn has_id(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    fn price_slot(&self, kind: VariantKind) -> Option<i64> {
        match kind {
            VariantKind::Regular => self.price_regular,
            VariantKind::WithEgg => self.price_with_egg,
            VariantKind::Small => self.price_small,
            VariantKind::Medium => self.price_medium,
            VariantKind::Large => self.price_large,
            VariantKind::DanbingCrust => self.price_danbing,
            VariantKind::HefenCrust => self.price_hefen,
            VariantKind::EightPieces => self.price_8pcs,
            VariantKind::TenPieces => self.price_10pcs,
            VariantKind::Bundle => self.price_bundle,
            VariantKind::Single => self.price_single,
        }
    }

    fn price_slot_mut(&mut self, kind: VariantKind) -> &mut Option<i64> {
        match kind {
            VariantKind::Regular => &mut self.price_regular,
            VariantKind::WithEgg => &mut self.price_with_egg,
            VariantKind::Small => &mut self.price_small,
            VariantKind::Medium => &mut self.price_medium,
            VariantKind::Large => &mut self.price_large,
            VariantKind::DanbingCrust => &mut self.price_danbing,
            VariantKind::HefenCrust => &mut self.price_hefen,
            VariantKind::EightPieces => &mut self.price_8pcs,
            VariantKind::TenPieces => &mut self.price_10pcs,
            VariantKind::Bundle => &mut self.price_bundle,
            VariantKind::Single => &mut self.price_single,
        }
    }
}

// =============================================================================
// Catalog Document Shapes
// =============================================================================

/// One category as it appears in the catalog file: a unique name, an
/// optional note, and an ordered item list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDoc {
    #[serde(default)]
    pub category_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// The catalog file root: menu name, provenance, categories.
///
/// A file may alternatively contain a single bare [`CategoryDoc`]; the
/// store auto-wraps that into a singleton root on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDoc {
    #[serde(default)]
    pub menu_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_files: Vec<String>,

    #[serde(default)]
    pub categories: Vec<CategoryDoc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
