//! # Storage Slot
//!
//! Whole-collection persistence behind a single trait. The slot holds one
//! JSON array of line items under a fixed key; it is read once when the
//! store opens and overwritten after every item mutation.
//!
//! ## Persistence Protocol
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                      Storage Slot Protocol                           │
//! │                                                                      │
//! │  CartStore::open() ──► load() ──┬── Ok(Some(items)) → restore        │
//! │                                 ├── Ok(None)        → empty cart     │
//! │                                 └── Err(_)          → empty cart     │
//! │                                      (logged, never surfaced)        │
//! │                                                                      │
//! │  every item mutation ──► save(items) ── best-effort:                 │
//! │                                          failure is logged and       │
//! │                                          swallowed; in-memory state  │
//! │                                          stays the source of truth   │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No partial writes: the whole collection is serialized each time, so the
//! slot is always a complete, self-consistent snapshot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use oja_core::CartLineItem;

/// Fixed key the cart collection is stored under.
///
/// File-backed slots use this as the file stem (`oja-cart.json`).
pub const CART_STORAGE_KEY: &str = "oja-cart";

// =============================================================================
// Storage Error
// =============================================================================

/// Storage-slot read/write failures.
///
/// These never reach store callers: the store logs them and carries on,
/// per the best-effort persistence contract.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying read/write failed (quota, permissions, missing volume).
    #[error("storage slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Slot contents are not a valid line-item array.
    #[error("storage slot holds malformed data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// No per-user data directory could be resolved on this platform.
    #[error("no data directory available for the storage slot")]
    NoDataDir,
}

// =============================================================================
// Storage Trait
// =============================================================================

/// One key-value slot holding the serialized cart collection.
pub trait CartStorage: Send + Sync {
    /// Reads the saved collection.
    ///
    /// `Ok(None)` means the slot has never been written — distinct from a
    /// malformed slot, which is an error the caller downgrades to "empty".
    fn load(&self) -> Result<Option<Vec<CartLineItem>>, StorageError>;

    /// Overwrites the slot with the full collection.
    fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError>;
}

/// Shared handles forward to the inner slot, so tests can inspect the slot
/// the store writes to.
impl<S: CartStorage + ?Sized> CartStorage for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<Vec<CartLineItem>>, StorageError> {
        (**self).load()
    }

    fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError> {
        (**self).save(items)
    }
}

// =============================================================================
// JSON File Storage (production)
// =============================================================================

/// Storage slot backed by a single JSON file.
///
/// ## Default Location
/// - Linux: `~/.local/share/oja-cart/oja-cart.json`
/// - macOS: `~/Library/Application Support/ng.oja.oja-cart/oja-cart.json`
/// - Windows: `%APPDATA%/oja/oja-cart/data/oja-cart.json`
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Slot at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    /// Slot at the platform data directory under [`CART_STORAGE_KEY`].
    pub fn default_slot() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("ng", "oja", "oja-cart").ok_or(StorageError::NoDataDir)?;
        let path = dirs.data_dir().join(format!("{}.json", CART_STORAGE_KEY));
        Ok(JsonFileStorage { path })
    }

    /// Where this slot lives on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<CartLineItem>>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved cart at slot path");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let items: Vec<CartLineItem> = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), count = items.len(), "loaded saved cart");
        Ok(Some(items))
    }

    fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(items)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), count = items.len(), "saved cart");
        Ok(())
    }
}

// =============================================================================
// Memory Storage (tests, storage-disabled mode)
// =============================================================================

/// In-memory slot holding the serialized payload, byte-for-byte what a
/// file-backed slot would hold. Also the wiring for "storage disabled"
/// sessions where the cart should live only in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Pre-seeds the slot with a raw payload (including malformed payloads,
    /// for recovery tests).
    pub fn seeded(raw: impl Into<String>) -> Self {
        MemoryStorage {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// Raw slot contents, as a file-backed slot would persist them.
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().expect("storage slot mutex poisoned").clone()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<CartLineItem>>, StorageError> {
        let slot = self.slot.lock().expect("storage slot mutex poisoned");
        match slot.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, items: &[CartLineItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        *self.slot.lock().expect("storage slot mutex poisoned") = Some(raw);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use oja_core::{LineItemDraft, Money, ShippingInfo, VendorInfo};

    fn item(id: &str, product: &str, vendor: &str, quantity: i64) -> CartLineItem {
        CartLineItem::from_draft(
            id.to_string(),
            LineItemDraft {
                product_id: product.to_string(),
                vendor_id: vendor.to_string(),
                name: format!("Product {}", product),
                price: Money::from_naira(1000),
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
            },
        )
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        let items = vec![item("li-1", "p1", "v1", 2), item("li-2", "p2", "v2", 1)];
        storage.save(&items).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_memory_storage_malformed_payload_is_error() {
        let storage = MemoryStorage::seeded("{not json");
        assert!(matches!(storage.load(), Err(StorageError::Malformed(_))));
    }

    #[test]
    fn test_file_storage_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::at_path(dir.path().join("oja-cart.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_file_storage_round_trip_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::at_path(dir.path().join("nested/slot/oja-cart.json"));

        let items = vec![item("li-1", "p1", "v1", 2)];
        storage.save(&items).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_file_storage_overwrites_whole_collection() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::at_path(dir.path().join("oja-cart.json"));

        storage
            .save(&[item("li-1", "p1", "v1", 2), item("li-2", "p2", "v2", 1)])
            .unwrap();
        storage.save(&[item("li-2", "p2", "v2", 4)]).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "li-2");
        assert_eq!(loaded[0].quantity, 4);
    }
}
