//! # Catalog Store
//!
//! Owns the menu catalog and keeps its two views consistent: the nested
//! Category→MenuItem tree (the file shape, display order) and a flat index
//! of every item by id.
//!
//! ## Two Views, One Collection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       CatalogStore                                  │
//! │                                                                     │
//! │   items: { 1 → Ham Toast, 2 → Milk Tea, 3 → Combo A }   (owned)     │
//! │                                                                     │
//! │   flat:       [1, 2, 3]                 (traversal order, by id)    │
//! │   categories: Toasts  → [1]                                         │
//! │               Drinks  → [2]             (ordered id references)     │
//! │               Combos  → [3]                                         │
//! │                                                                     │
//! │   The tree and the flat index hold ids, never item copies, so a     │
//! │   mutation through either view is visible through both.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - every item id is a positive integer, unique across the catalog
//! - every item appears in exactly one category's id list
//! - `flat` and the union of all category lists reference the same id set
//!
//! ## Failure Model
//! Loading a malformed file is a hard [`StoreError::CatalogFormat`].
//! Every mutation is total: a missing target category degrades to the
//! first category (or creates one) instead of failing, so an edit is
//! never dropped on the floor.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sunup_core::menu::{CatalogDoc, CategoryDoc, ItemId, MenuItem, UNASSIGNED_ID};
use sunup_core::pricing;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::jsonc;

/// Category name used when an item is added to an empty catalog without
/// naming one.
pub const DEFAULT_CATEGORY_NAME: &str = "New Items";

/// Menu name given to a catalog auto-wrapped from a bare category file.
pub const SINGLE_CATEGORY_MENU_NAME: &str = "Single Category Import";

// =============================================================================
// Internal Layout
// =============================================================================

/// One category: name, note, and ordered references into `items`.
#[derive(Debug, Clone)]
struct CategorySlot {
    name: String,
    note: Option<String>,
    item_ids: Vec<ItemId>,
}

/// A borrowed view of one category and its items, in display order.
#[derive(Debug)]
pub struct CategoryView<'a> {
    pub name: &'a str,
    pub note: Option<&'a str>,
    pub items: Vec<&'a MenuItem>,
}

// =============================================================================
// Catalog Store
// =============================================================================

/// The canonical owner of the menu catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    menu_name: String,
    source_files: Vec<String>,
    items: HashMap<ItemId, MenuItem>,
    flat: Vec<ItemId>,
    categories: Vec<CategorySlot>,
}

impl CatalogStore {
    /// Creates an empty catalog with the given menu name.
    pub fn new(menu_name: impl Into<String>) -> Self {
        CatalogStore {
            menu_name: menu_name.into(),
            ..CatalogStore::default()
        }
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Parses catalog text into a fresh store.
    ///
    /// Accepts either the nested root shape or a single bare category
    /// (auto-wrapped into a singleton root). Comments and trailing commas
    /// in the text are tolerated. Anything else is a hard
    /// [`StoreError::CatalogFormat`].
    ///
    /// After the structural parse, items are indexed in category traversal
    /// order and any item with id 0 receives `max existing id + 1`;
    /// pre-existing nonzero ids are never renumbered, so reloading an
    /// id-complete catalog changes nothing.
    pub fn parse(text: &str) -> StoreResult<Self> {
        let clean = jsonc::strip(text);

        let root = serde_json::from_str::<CatalogDoc>(&clean);
        let doc = match root {
            Ok(doc) if !doc.categories.is_empty() => doc,
            root => {
                // Either unparseable as a root or parsed with zero
                // categories; retry as a single bare category.
                match serde_json::from_str::<CategoryDoc>(&clean) {
                    Ok(cat) if !cat.category_name.is_empty() => CatalogDoc {
                        menu_name: SINGLE_CATEGORY_MENU_NAME.to_string(),
                        source_files: Vec::new(),
                        categories: vec![cat],
                    },
                    _ => root.map_err(|err| StoreError::CatalogFormat(err.to_string()))?,
                }
            }
        };

        Ok(Self::from_doc(doc))
    }

    /// Reads and parses a catalog file.
    pub fn load_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|err| StoreError::io("reading", path, err))?;
        let store = Self::parse(&text)?;
        info!(
            path = %path.display(),
            items = store.item_count(),
            categories = store.categories.len(),
            "catalog loaded"
        );
        Ok(store)
    }

    /// Builds the indexed store from a parsed document, backfilling ids.
    ///
    /// A duplicate nonzero id is treated like an unassigned one (the
    /// second occurrence gets a fresh id); load stays total and the
    /// id-unique invariant holds even for malformed input.
    fn from_doc(doc: CatalogDoc) -> Self {
        let mut store = CatalogStore {
            menu_name: doc.menu_name,
            source_files: doc.source_files,
            ..CatalogStore::default()
        };

        let mut max_id: ItemId = doc
            .categories
            .iter()
            .flat_map(|c| c.items.iter())
            .map(|i| i.id)
            .max()
            .unwrap_or(UNASSIGNED_ID);

        for cat in doc.categories {
            let mut slot = CategorySlot {
                name: cat.category_name,
                note: cat.note,
                item_ids: Vec::with_capacity(cat.items.len()),
            };

            for mut item in cat.items {
                if item.id == UNASSIGNED_ID || store.items.contains_key(&item.id) {
                    max_id += 1;
                    debug!(name = %item.name, assigned = max_id, "backfilling item id");
                    item.id = max_id;
                }
                slot.item_ids.push(item.id);
                store.flat.push(item.id);
                store.items.insert(item.id, item);
            }

            store.categories.push(slot);
        }

        store
    }

    // -------------------------------------------------------------------------
    // Saving
    // -------------------------------------------------------------------------

    /// Rebuilds the nested document shape from the in-memory views.
    pub fn to_doc(&self) -> CatalogDoc {
        CatalogDoc {
            menu_name: self.menu_name.clone(),
            source_files: self.source_files.clone(),
            categories: self
                .categories
                .iter()
                .map(|slot| CategoryDoc {
                    category_name: slot.name.clone(),
                    note: slot.note.clone(),
                    items: slot
                        .item_ids
                        .iter()
                        .filter_map(|id| self.items.get(id).cloned())
                        .collect(),
                })
                .collect(),
        }
    }

    /// The catalog as pretty-printed JSON, ids populated.
    pub fn to_json_string(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(&self.to_doc())
            .map_err(|err| StoreError::serialize("catalog", err))
    }

    /// Writes the catalog file. Plain blocking write, surfaced once on
    /// failure, no retry.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|err| StoreError::io("writing", path, err))?;
        info!(path = %path.display(), items = self.item_count(), "catalog saved");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Adds an item, assigning the next free id, and returns that id.
    ///
    /// The item lands in the named category when it exists, else in the
    /// first category, else in a newly created category (named
    /// `category_name`, or [`DEFAULT_CATEGORY_NAME`] when blank).
    pub fn add_item(&mut self, mut item: MenuItem, category_name: &str) -> ItemId {
        let id = self.items.keys().copied().max().unwrap_or(UNASSIGNED_ID) + 1;
        item.id = id;

        debug!(id, name = %item.name, category = category_name, "adding item");
        self.items.insert(id, item);
        self.flat.push(id);
        self.attach_to_category(id, category_name);
        id
    }

    /// Replaces the item with the given id and moves it to the target
    /// category (same fallback chain as [`CatalogStore::add_item`]).
    ///
    /// Addressed by stable id on purpose: a concurrent re-sort of either
    /// view cannot redirect the edit to the wrong item. Returns false
    /// (no-op) when the id is unknown.
    pub fn update_item(
        &mut self,
        id: ItemId,
        mut new_item: MenuItem,
        new_category_name: &str,
    ) -> bool {
        if !self.items.contains_key(&id) {
            return false;
        }

        debug!(id, name = %new_item.name, category = new_category_name, "updating item");
        new_item.id = id;
        self.items.insert(id, new_item);

        // Flat position is keyed by id and stays put; only the category
        // membership moves.
        if let Some(slot) = self.categories.iter_mut().find(|c| c.item_ids.contains(&id)) {
            slot.item_ids.retain(|&other| other != id);
        }
        self.attach_to_category(id, new_category_name);
        true
    }

    /// Removes an item from every view. Returns false (no-op) when the id
    /// is unknown.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        if self.items.remove(&id).is_none() {
            return false;
        }

        debug!(id, "removing item");
        self.flat.retain(|&other| other != id);
        if let Some(slot) = self.categories.iter_mut().find(|c| c.item_ids.contains(&id)) {
            slot.item_ids.retain(|&other| other != id);
        }
        true
    }

    /// Stable in-place sort of one category's items by base price. The
    /// flat index order is untouched. Unknown category is a no-op.
    pub fn sort_category(&mut self, category_name: &str, ascending: bool) {
        let items = &self.items;
        let Some(slot) = self.categories.iter_mut().find(|c| c.name == category_name) else {
            return;
        };

        debug!(category = category_name, ascending, "sorting category by base price");
        slot.item_ids.sort_by(|a, b| {
            let pa = items.get(a).map(pricing::base_price).unwrap_or_default();
            let pb = items.get(b).map(pricing::base_price).unwrap_or_default();
            let ord = pa.cmp(&pb);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    /// Stable sort of the flat index by item name.
    pub fn sort_by_name(&mut self, ascending: bool) {
        let items = &self.items;
        self.flat.sort_by(|a, b| {
            let na = items.get(a).map(|i| i.name.as_str()).unwrap_or("");
            let nb = items.get(b).map(|i| i.name.as_str()).unwrap_or("");
            let ord = na.cmp(nb);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    /// Stable sort of the flat index by base price.
    pub fn sort_by_price(&mut self, ascending: bool) {
        let items = &self.items;
        self.flat.sort_by(|a, b| {
            let pa = items.get(a).map(pricing::base_price).unwrap_or_default();
            let pb = items.get(b).map(pricing::base_price).unwrap_or_default();
            let ord = pa.cmp(&pb);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    /// Drops every item and category.
    pub fn clear(&mut self) {
        self.items.clear();
        self.flat.clear();
        self.categories.clear();
    }

    /// Appends an id to the named category, falling back to the first
    /// category, creating one only when the catalog has none.
    fn attach_to_category(&mut self, id: ItemId, category_name: &str) {
        if let Some(slot) = self.categories.iter_mut().find(|c| c.name == category_name) {
            slot.item_ids.push(id);
            return;
        }

        if let Some(first) = self.categories.first_mut() {
            first.item_ids.push(id);
            return;
        }

        let name = if category_name.trim().is_empty() {
            DEFAULT_CATEGORY_NAME
        } else {
            category_name
        };
        self.categories.push(CategorySlot {
            name: name.to_string(),
            note: None,
            item_ids: vec![id],
        });
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Looks up one item by id.
    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.get(&id)
    }

    /// The name of the category currently holding an item.
    pub fn category_of(&self, id: ItemId) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.item_ids.contains(&id))
            .map(|c| c.name.as_str())
    }

    /// Every item in flat-index order.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.flat.iter().filter_map(move |id| self.items.get(id))
    }

    /// Every category with its items, in display order.
    pub fn categories(&self) -> impl Iterator<Item = CategoryView<'_>> {
        self.categories.iter().map(move |slot| CategoryView {
            name: &slot.name,
            note: slot.note.as_deref(),
            items: slot
                .item_ids
                .iter()
                .filter_map(|id| self.items.get(id))
                .collect(),
        })
    }

    pub fn menu_name(&self) -> &str {
        &self.menu_name
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
