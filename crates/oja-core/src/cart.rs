//! # Cart Collection
//!
//! The pure cart collection: merge-or-insert, quantity updates, removal,
//! and the three aggregate totals. No I/O, no ids of its own, no
//! notifications — those concerns live in `oja-store`.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                      Cart Collection Operations                      │
//! │                                                                      │
//! │  Store Operation           Collection Change                         │
//! │  ───────────────           ─────────────────                         │
//! │                                                                      │
//! │  add(draft) ─────────────► merge by (productId, vendorId)            │
//! │                            or push with a fresh id                   │
//! │                                                                      │
//! │  update_quantity(id, n) ─► n <= 0 ? remove : items[i].quantity = n   │
//! │                                                                      │
//! │  remove(id) ─────────────► items.retain(...), returns removed item   │
//! │                                                                      │
//! │  clear() ────────────────► items.clear()                             │
//! │                                                                      │
//! │  totals ─────────────────► (read only, pure sums)                    │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `(product_id, vendor_id)`; re-adding merges
//!   quantity and keeps the EXISTING snapshot (the new draft's price,
//!   name, image, vendor, and shipping are discarded)
//! - Quantity is > 0 for every stored item; a quantity update to <= 0
//!   removes the item
//! - Insertion order is preserved for display, never for correctness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartLineItem, LineItemDraft};

// =============================================================================
// Add Outcome
// =============================================================================

/// What an add operation did to the collection.
///
/// Consumers use this to render the same "added" vs "updated" distinction
/// the notification surface carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum AddOutcome {
    /// A new line item was inserted with a freshly assigned id.
    Added { id: String },

    /// An existing `(product_id, vendor_id)` line absorbed the draft's
    /// quantity. `quantity` is the resulting merged quantity.
    Merged { id: String, quantity: i64 },
}

impl AddOutcome {
    /// The id of the line item the operation landed on.
    pub fn id(&self) -> &str {
        match self {
            AddOutcome::Added { id } => id,
            AddOutcome::Merged { id, .. } => id,
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The cart collection.
///
/// Exclusively owned by the store; consumers only ever see cloned
/// snapshots of `items`.
#[derive(Debug, Clone)]
pub struct Cart {
    /// Line items in insertion order.
    items: Vec<CartLineItem>,

    /// When the cart was created or last cleared. In-memory bookkeeping
    /// only, never written to the storage slot.
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Rebuilds a cart from a previously persisted collection.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        Cart {
            items,
            created_at: Utc::now(),
        }
    }

    /// Adds a draft to the cart, merging with an existing line when the
    /// `(product_id, vendor_id)` pair is already present.
    ///
    /// ## Merge Behavior
    /// On merge only the quantity moves: `existing.quantity += draft.quantity`.
    /// The existing snapshot fields win and the draft's are discarded, so a
    /// price change between two adds never silently repriced the cart.
    ///
    /// `new_id` is invoked only when an insert actually happens, so injected
    /// sequential generators stay gap-free under merges.
    pub fn add(&mut self, draft: LineItemDraft, new_id: impl FnOnce() -> String) -> AddOutcome {
        if let Some(item) = self.items.iter_mut().find(|i| i.same_listing(&draft)) {
            item.quantity += draft.quantity;
            return AddOutcome::Merged {
                id: item.id.clone(),
                quantity: item.quantity,
            };
        }

        let item = CartLineItem::from_draft(new_id(), draft);
        let id = item.id.clone();
        self.items.push(item);
        AddOutcome::Added { id }
    }

    /// Updates the quantity of a line item, replacing (not incrementing)
    /// the stored value.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves exactly as [`Cart::remove`]
    /// - unknown `id`: no-op, returns `None`
    ///
    /// ## Returns
    /// `Some(removed)` when the update removed the line (quantity <= 0),
    /// `None` otherwise (plain updates and unknown ids).
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Option<CartLineItem> {
        if quantity <= 0 {
            return self.remove(id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
        None
    }

    /// Removes a line item by id.
    ///
    /// ## Returns
    /// The removed item, or `None` when the id was not present (a defined
    /// no-op, not an error — removing twice is safe).
    pub fn remove(&mut self, id: &str) -> Option<CartLineItem> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Clears all items from the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Read snapshot of the items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Returns the number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of `quantity` across all line items. 0 for an empty cart.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of `(discount_price ?? price) × quantity` across all lines.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Sum of `shipping.cost`, counted ONCE per distinct line item
    /// regardless of quantity.
    pub fn shipping_total(&self) -> Money {
        self.items.iter().map(|i| i.shipping.cost).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Aggregate totals for panel rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Distinct line items.
    pub item_count: usize,

    /// Total units across all lines.
    pub total_items: i64,

    /// Σ (discountPrice ?? price) × quantity.
    pub total_price: Money,

    /// Σ shipping.cost, once per line.
    pub shipping_total: Money,

    /// total_price + shipping_total.
    pub grand_total: Money,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        let total_price = cart.total_price();
        let shipping_total = cart.shipping_total();
        CartSummary {
            item_count: cart.item_count(),
            total_items: cart.total_items(),
            total_price,
            shipping_total,
            grand_total: total_price + shipping_total,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ShippingInfo, VendorInfo};

    fn draft(product: &str, vendor: &str, price: i64, quantity: i64) -> LineItemDraft {
        LineItemDraft {
            product_id: product.to_string(),
            vendor_id: vendor.to_string(),
            name: format!("Product {}", product),
            price: Money::from_naira(price),
            discount_price: None,
            quantity,
            image: format!("https://cdn.oja.test/{}.png", product),
            vendor: VendorInfo {
                name: format!("Vendor {}", vendor),
                location: "Lagos".to_string(),
            },
            shipping: ShippingInfo {
                cost: Money::from_naira(500),
                estimated_days: 3,
            },
        }
    }

    fn add(cart: &mut Cart, d: LineItemDraft) -> AddOutcome {
        let n = cart.item_count();
        cart.add(d, move || format!("li-{}", n + 1))
    }

    #[test]
    fn test_add_inserts_new_line() {
        let mut cart = Cart::new();
        let outcome = add(&mut cart, draft("p1", "v1", 1000, 2));

        assert_eq!(outcome, AddOutcome::Added { id: "li-1".to_string() });
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_add_same_listing_merges_quantity() {
        let mut cart = Cart::new();
        add(&mut cart, draft("p1", "v1", 1000, 2));
        let outcome = add(&mut cart, draft("p1", "v1", 1000, 3));

        assert_eq!(
            outcome,
            AddOutcome::Merged { id: "li-1".to_string(), quantity: 5 }
        );
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price().naira(), 5000);
        // shipping charged once per line, not per unit
        assert_eq!(cart.shipping_total().naira(), 500);
    }

    #[test]
    fn test_merge_keeps_existing_snapshot() {
        let mut cart = Cart::new();
        add(&mut cart, draft("p1", "v1", 1000, 1));

        // second add carries a different price and vendor name; both lose
        let mut repriced = draft("p1", "v1", 9999, 1);
        repriced.name = "Renamed".to_string();
        repriced.shipping.cost = Money::from_naira(2000);
        add(&mut cart, repriced);

        let item = &cart.items()[0];
        assert_eq!(item.price.naira(), 1000);
        assert_eq!(item.name, "Product p1");
        assert_eq!(item.shipping.cost.naira(), 500);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_same_product_different_vendor_is_distinct() {
        let mut cart = Cart::new();
        add(&mut cart, draft("p1", "v1", 1000, 1));
        add(&mut cart, draft("p1", "v2", 1000, 1));

        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_new_id_not_consumed_on_merge() {
        let mut cart = Cart::new();
        cart.add(draft("p1", "v1", 1000, 1), || "li-1".to_string());
        cart.add(draft("p1", "v1", 1000, 1), || {
            panic!("id generator must not run on merge")
        });
    }

    #[test]
    fn test_update_quantity_replaces_value() {
        let mut cart = Cart::new();
        add(&mut cart, draft("p1", "v1", 1000, 2));

        let removed = cart.update_quantity("li-1", 7);
        assert!(removed.is_none());
        assert_eq!(cart.total_items(), 7);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for qty in [0, -1] {
            let mut cart = Cart::new();
            add(&mut cart, draft("p1", "v1", 1000, 2));

            let removed = cart.update_quantity("li-1", qty);
            assert_eq!(removed.unwrap().id, "li-1");
            assert!(cart.is_empty());
        }
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        add(&mut cart, draft("p1", "v1", 1000, 2));

        assert!(cart.update_quantity("missing", 9).is_none());
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_remove_twice_is_safe() {
        let mut cart = Cart::new();
        add(&mut cart, draft("p1", "v1", 1000, 2));

        assert!(cart.remove("li-1").is_some());
        assert!(cart.remove("li-1").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_price_uses_discount_when_present() {
        let mut cart = Cart::new();
        add(&mut cart, draft("p1", "v1", 1000, 1));

        let mut discounted = draft("p2", "v2", 2000, 1);
        discounted.discount_price = Some(Money::from_naira(1500));
        add(&mut cart, discounted);

        assert_eq!(cart.total_price().naira(), 2500);
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero());
        assert_eq!(cart.shipping_total(), Money::zero());
    }

    #[test]
    fn test_clear_resets_items_and_created_at() {
        let mut cart = Cart::new();
        add(&mut cart, draft("p1", "v1", 1000, 2));
        let before = cart.created_at();

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.created_at() >= before);

        // clearing an already-empty cart also succeeds
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_summary_matches_totals() {
        let mut cart = Cart::new();
        add(&mut cart, draft("p1", "v1", 1000, 2));
        add(&mut cart, draft("p2", "v2", 300, 1));

        let summary = CartSummary::from(&cart);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.total_price.naira(), 2300);
        assert_eq!(summary.shipping_total.naira(), 1000);
        assert_eq!(summary.grand_total.naira(), 3300);
    }
}
