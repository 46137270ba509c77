//! # Cart Store
//!
//! The single-writer cart store: owns the collection, the transient panel
//! flag, and the wiring to the storage slot, id generator, and notification
//! sink. This is the ONLY surface consumers (cart panel, checkout trigger)
//! are permitted to use.
//!
//! ## Operation Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                       CartStore Operations                           │
//! │                                                                      │
//! │  Consumer Action          Store Operation        Side Effects        │
//! │  ───────────────          ───────────────        ────────────        │
//! │                                                                      │
//! │  Click "Add" ───────────► add(draft) ──────────► save slot + notify  │
//! │                                                                      │
//! │  Change quantity ───────► update_quantity() ───► save slot           │
//! │                           (<= 0 acts as remove)  (+ notify if gone)  │
//! │                                                                      │
//! │  Click remove ──────────► remove(id) ──────────► save slot + notify  │
//! │                                                  (only if it existed)│
//! │                                                                      │
//! │  Click "Clear" ─────────► clear() ─────────────► save slot + notify  │
//! │                                                  (always)            │
//! │                                                                      │
//! │  Render panel ──────────► items()/summary() ───► (read only)         │
//! │                                                                      │
//! │  Toggle panel ──────────► set_open(bool) ──────► none (not persisted)│
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single-Writer Contract
//! Every mutation runs to completion under the cart mutex before control
//! returns, so a `total_items()` immediately after `add()` in the same
//! logical sequence reflects the addition — read-your-own-writes, no
//! eventual-consistency window.
//!
//! ## Best-Effort Persistence
//! The slot write happens synchronously inside each mutation but its failure
//! never rolls back the in-memory change. The in-memory store is the source
//! of truth for the session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use tracing::{debug, warn};

use oja_core::validation::validate_draft;
use oja_core::{AddOutcome, Cart, CartLineItem, CartSummary, CoreError, LineItemDraft, Money};

use crate::ids::{IdGenerator, UuidIds};
use crate::notify::{LogSink, Notification, NotificationSink};
use crate::storage::{CartStorage, JsonFileStorage, StorageError};

// =============================================================================
// Cart Store
// =============================================================================

/// The stateful cart store.
///
/// ## Lifetime & Ownership
/// Constructed once at application start and passed by handle (typically
/// `Arc<CartStore>`) to whichever component tree needs it — no ambient
/// global state. The collection is exclusively owned here; `items()` hands
/// out cloned snapshots only.
///
/// ## Thread Safety
/// The collection sits behind a `Mutex` so only one mutation runs at a
/// time; the panel flag is an `AtomicBool` since it never touches the
/// collection or the slot.
pub struct CartStore {
    cart: Mutex<Cart>,
    is_open: AtomicBool,
    storage: Box<dyn CartStorage>,
    sink: Box<dyn NotificationSink>,
    ids: Box<dyn IdGenerator>,
}

impl CartStore {
    /// Opens a store over the given storage slot, notification sink, and
    /// id generator, restoring any saved collection.
    ///
    /// ## Recovery
    /// A missing slot starts empty. A malformed or unreadable slot also
    /// starts empty — logged, never surfaced to the caller.
    pub fn open(
        storage: impl CartStorage + 'static,
        sink: impl NotificationSink + 'static,
        ids: impl IdGenerator + 'static,
    ) -> Self {
        let items = match storage.load() {
            Ok(Some(items)) => {
                debug!(count = items.len(), "restored saved cart");
                items
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not restore saved cart, starting empty");
                Vec::new()
            }
        };

        CartStore {
            cart: Mutex::new(Cart::from_items(items)),
            is_open: AtomicBool::new(false),
            storage: Box::new(storage),
            sink: Box::new(sink),
            ids: Box::new(ids),
        }
    }

    /// Opens a store with the production wiring: the platform-default JSON
    /// slot, the log sink, and UUID v4 ids.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(CartStore::open(
            JsonFileStorage::default_slot()?,
            LogSink,
            UuidIds,
        ))
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a draft to the cart.
    ///
    /// ## Behavior
    /// - Same `(product_id, vendor_id)` already present: quantities merge,
    ///   the existing snapshot wins, and the draft's other fields are
    ///   discarded
    /// - Otherwise: a fresh id is assigned and the draft becomes a new line
    ///
    /// ## Validation
    /// The draft must pass the add-time policy (positive quantity,
    /// non-negative amounts, non-empty ids) — a documented extension over
    /// the original storefront, which accepted anything.
    ///
    /// ## Notifications
    /// Emits "Added to cart" or "Cart updated" so consumers can tell the
    /// two apart.
    pub fn add(&self, draft: LineItemDraft) -> Result<AddOutcome, CoreError> {
        validate_draft(&draft)?;

        let name = draft.name.clone();
        let mut cart = self.lock_cart();
        let outcome = cart.add(draft, || self.ids.next_id());
        self.persist(&cart);
        drop(cart);

        match &outcome {
            AddOutcome::Added { id } => {
                debug!(id = %id, item = %name, "added line item");
                self.sink.notify(Notification::added(&name));
            }
            AddOutcome::Merged { id, quantity } => {
                debug!(id = %id, item = %name, quantity, "merged line item");
                self.sink.notify(Notification::updated(&name, *quantity));
            }
        }

        Ok(outcome)
    }

    /// Removes a line item by id.
    ///
    /// Unknown ids are a no-op: nothing is saved, nothing is notified, and
    /// calling twice in a row is safe.
    pub fn remove(&self, id: &str) -> Option<CartLineItem> {
        let mut cart = self.lock_cart();
        let removed = cart.remove(id);
        if removed.is_some() {
            self.persist(&cart);
        }
        drop(cart);

        if let Some(item) = &removed {
            debug!(id = %item.id, item = %item.name, "removed line item");
            self.sink.notify(Notification::removed(&item.name));
        }
        removed
    }

    /// Replaces a line item's quantity.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves exactly as [`CartStore::remove`],
    ///   including the removal notification
    /// - unknown `id`: no-op
    ///
    /// ## Returns
    /// `Some(removed)` when the update removed the line, `None` otherwise.
    pub fn update_quantity(&self, id: &str, quantity: i64) -> Option<CartLineItem> {
        if quantity <= 0 {
            return self.remove(id);
        }

        let mut cart = self.lock_cart();
        let known = cart.items().iter().any(|i| i.id == id);
        if known {
            cart.update_quantity(id, quantity);
            self.persist(&cart);
            debug!(id = %id, quantity, "updated line item quantity");
        }
        None
    }

    /// Empties the cart unconditionally.
    ///
    /// Always saves and always emits "Cart cleared", even when the cart was
    /// already empty.
    pub fn clear(&self) {
        let mut cart = self.lock_cart();
        cart.clear();
        self.persist(&cart);
        drop(cart);

        debug!("cleared cart");
        self.sink.notify(Notification::cleared());
    }

    // -------------------------------------------------------------------------
    // Reads (pure, no side effects)
    // -------------------------------------------------------------------------

    /// Cloned read snapshot of the collection in insertion order.
    pub fn items(&self) -> Vec<CartLineItem> {
        self.lock_cart().items().to_vec()
    }

    /// Sum of `quantity` across all entries. 0 for an empty cart.
    pub fn total_items(&self) -> i64 {
        self.lock_cart().total_items()
    }

    /// Sum of `(discount_price ?? price) × quantity` across all entries.
    pub fn total_price(&self) -> Money {
        self.lock_cart().total_price()
    }

    /// Sum of `shipping.cost`, once per line item regardless of quantity.
    pub fn shipping_total(&self) -> Money {
        self.lock_cart().shipping_total()
    }

    /// Aggregate totals for panel rendering.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(&*self.lock_cart())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lock_cart().is_empty()
    }

    // -------------------------------------------------------------------------
    // Panel Flag (transient, never persisted)
    // -------------------------------------------------------------------------

    /// Whether the cart panel is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::Relaxed)
    }

    /// Toggles the transient panel flag. Has no effect on persisted state.
    pub fn set_open(&self, open: bool) {
        debug!(open, "set cart panel flag");
        self.is_open.store(open, Ordering::Relaxed);
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn lock_cart(&self) -> std::sync::MutexGuard<'_, Cart> {
        self.cart.lock().expect("cart mutex poisoned")
    }

    /// Best-effort slot write: failure is logged and swallowed, the
    /// in-memory mutation stands.
    fn persist(&self, cart: &Cart) {
        if let Err(e) = self.storage.save(cart.items()) {
            warn!(error = %e, "cart persistence failed, in-memory state kept");
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("is_open", &self.is_open)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use oja_core::{ShippingInfo, VendorInfo};

    use crate::ids::SequentialIds;
    use crate::notify::MemorySink;
    use crate::storage::MemoryStorage;

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

    fn test_store() -> (CartStore, Arc<MemoryStorage>, Arc<MemorySink>) {
        let storage = Arc::new(MemoryStorage::new());
        let sink = Arc::new(MemorySink::new());
        let store = CartStore::open(
            Arc::clone(&storage),
            Arc::clone(&sink),
            SequentialIds::default(),
        );
        (store, storage, sink)
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let (store, _, _) = test_store();

        let a = store.add(draft("p1", "v1", 1000, 1)).unwrap();
        let b = store.add(draft("p2", "v2", 2000, 1)).unwrap();

        assert_eq!(a.id(), "li-1");
        assert_eq!(b.id(), "li-2");
    }

    #[test]
    fn test_read_your_own_writes() {
        let (store, _, _) = test_store();

        store.add(draft("p1", "v1", 1000, 2)).unwrap();
        // the addition is visible immediately, no settling window
        assert_eq!(store.total_items(), 2);
    }

    #[test]
    fn test_add_distinguishes_added_and_updated() {
        let (store, _, sink) = test_store();

        store.add(draft("p1", "v1", 1000, 2)).unwrap();
        store.add(draft("p1", "v1", 1000, 3)).unwrap();

        assert_eq!(sink.titles(), vec!["Added to cart", "Cart updated"]);
        assert_eq!(
            sink.sent()[1].description,
            "Product p1 quantity increased to 5"
        );
    }

    #[test]
    fn test_add_rejects_invalid_draft_without_side_effects() {
        let (store, storage, sink) = test_store();

        let err = store.add(draft("p1", "v1", 1000, 0));
        assert!(err.is_err());

        assert!(store.is_empty());
        assert!(storage.raw().is_none());
        assert!(sink.sent().is_empty());
    }

    #[test]
    fn test_remove_notifies_only_when_item_existed() {
        let (store, _, sink) = test_store();
        store.add(draft("p1", "v1", 1000, 1)).unwrap();

        assert!(store.remove("li-1").is_some());
        assert!(store.remove("li-1").is_none());

        let titles = sink.titles();
        assert_eq!(
            titles.iter().filter(|t| *t == "Removed from cart").count(),
            1
        );
    }

    #[test]
    fn test_update_quantity_zero_acts_as_remove() {
        let (store, _, sink) = test_store();
        store.add(draft("p1", "v1", 1000, 2)).unwrap();

        let removed = store.update_quantity("li-1", 0);
        assert_eq!(removed.unwrap().id, "li-1");
        assert!(store.is_empty());
        assert!(sink.titles().contains(&"Removed from cart".to_string()));
    }

    #[test]
    fn test_clear_always_notifies() {
        let (store, _, sink) = test_store();
        store.add(draft("p1", "v1", 1000, 1)).unwrap();

        store.clear();
        store.clear(); // already empty, still succeeds and still notifies

        assert_eq!(
            sink.titles()
                .iter()
                .filter(|t| *t == "Cart cleared")
                .count(),
            2
        );
    }

    #[test]
    fn test_every_item_mutation_persists() {
        let (store, storage, _) = test_store();

        store.add(draft("p1", "v1", 1000, 2)).unwrap();
        let after_add = storage.raw().unwrap();
        assert!(after_add.contains("\"p1\""));

        store.update_quantity("li-1", 5);
        assert_ne!(storage.raw().unwrap(), after_add);

        store.clear();
        assert_eq!(storage.raw().unwrap(), "[]");
    }

    #[test]
    fn test_panel_flag_is_transient() {
        let (store, storage, sink) = test_store();
        store.add(draft("p1", "v1", 1000, 1)).unwrap();
        let saved = storage.raw().unwrap();

        assert!(!store.is_open());
        store.set_open(true);
        assert!(store.is_open());

        // no save, no notification
        assert_eq!(storage.raw().unwrap(), saved);
        assert_eq!(sink.titles(), vec!["Added to cart"]);
    }
}
