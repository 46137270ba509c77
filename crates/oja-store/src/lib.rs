//! # oja-store: Stateful Cart Store for the Oja Marketplace
//!
//! The single-writer cart store plus the I/O concerns the pure core is
//! forbidden from touching: the JSON storage slot, line-item id generation,
//! and the notification sink.
//!
//! ## Module Organization
//! ```text
//! oja_store/
//! ├── lib.rs          ◄─── You are here (wiring & re-exports)
//! ├── store.rs        ◄─── CartStore: the consumer-facing surface
//! ├── storage.rs      ◄─── Storage slot trait + JSON file / memory slots
//! ├── ids.rs          ◄─── IdGenerator trait + UUID / sequential impls
//! └── notify.rs       ◄─── NotificationSink trait + log / memory sinks
//! ```
//!
//! ## Wiring
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                        Store Wiring                                  │
//! │                                                                      │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐  │
//! │  │   CartStorage    │ │   IdGenerator    │ │   NotificationSink   │  │
//! │  │                  │ │                  │ │                      │  │
//! │  │ • JsonFileStorage│ │ • UuidIds        │ │ • LogSink            │  │
//! │  │ • MemoryStorage  │ │ • SequentialIds  │ │ • MemorySink (tests) │  │
//! │  └────────┬─────────┘ └────────┬─────────┘ └──────────┬───────────┘  │
//! │           └────────────────────┼──────────────────────┘              │
//! │                                ▼                                     │
//! │                       CartStore::open(...)                           │
//! │                                │                                     │
//! │              Arc<CartStore> handed to UI consumers                   │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use oja_core::{LineItemDraft, Money, ShippingInfo, VendorInfo};
//! use oja_store::{CartStore, LogSink, MemoryStorage, UuidIds};
//!
//! let store = CartStore::open(MemoryStorage::new(), LogSink, UuidIds);
//!
//! store.add(LineItemDraft {
//!     product_id: "p1".to_string(),
//!     vendor_id: "v1".to_string(),
//!     name: "Ankara Tote".to_string(),
//!     price: Money::from_naira(1000),
//!     discount_price: None,
//!     quantity: 2,
//!     image: "https://cdn.oja.example/p1.png".to_string(),
//!     vendor: VendorInfo { name: "Ada Crafts".to_string(), location: "Enugu".to_string() },
//!     shipping: ShippingInfo { cost: Money::from_naira(500), estimated_days: 3 },
//! }).unwrap();
//!
//! assert_eq!(store.total_items(), 2);
//! assert_eq!(store.total_price(), Money::from_naira(2000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod ids;
pub mod notify;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use notify::{LogSink, MemorySink, Notification, NotificationSink};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, StorageError, CART_STORAGE_KEY};
pub use store::CartStore;
