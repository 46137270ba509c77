//! # Notification Sink
//!
//! One-way, fire-and-forget user feedback. The store calls the sink with a
//! `{ title, description }` pair on add/update/remove/clear and never
//! consumes a return value — presentation (toast, banner, sound) is entirely
//! the sink's business.
//!
//! ## Dispatch Rules
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  Operation                  Notification                             │
//! │  ─────────                  ────────────                             │
//! │  add (new line)             "Added to cart"                          │
//! │  add (merged line)          "Cart updated"                           │
//! │  remove (item existed)      "Removed from cart" naming the item      │
//! │  remove (unknown id)        none                                     │
//! │  update_quantity (> 0)      none                                     │
//! │  update_quantity (<= 0)     same as remove                           │
//! │  clear                      "Cart cleared", even when already empty  │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Notification Payload
// =============================================================================

/// The `{ title, description }` pair handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Short headline ("Added to cart").
    pub title: String,

    /// One-line detail naming the affected item.
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
        }
    }

    pub(crate) fn added(name: &str) -> Self {
        Notification::new("Added to cart", format!("{} has been added to your cart", name))
    }

    pub(crate) fn updated(name: &str, quantity: i64) -> Self {
        Notification::new(
            "Cart updated",
            format!("{} quantity increased to {}", name, quantity),
        )
    }

    pub(crate) fn removed(name: &str) -> Self {
        Notification::new(
            "Removed from cart",
            format!("{} has been removed from your cart", name),
        )
    }

    pub(crate) fn cleared() -> Self {
        Notification::new("Cart cleared", "All items have been removed from your cart")
    }
}

// =============================================================================
// Sink Trait
// =============================================================================

/// Destination for cart notifications.
///
/// Implementations must not fail: delivery is fire-and-forget and the store
/// never inspects an outcome.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Shared handles forward to the inner sink, so callers can keep a handle
/// for assertions while the store owns another.
impl<S: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<S> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

// =============================================================================
// Log Sink (default)
// =============================================================================

/// Presentation-free sink that emits notifications as structured log events.
///
/// The default wiring when no UI toast layer is attached.
#[derive(Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        info!(
            title = %notification.title,
            description = %notification.description,
            "cart notification"
        );
    }
}

// =============================================================================
// Memory Sink (tests)
// =============================================================================

/// Collecting sink for assertions in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    sent: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Everything notified so far, in dispatch order.
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().expect("notification sink mutex poisoned").clone()
    }

    /// Titles only, for terser assertions.
    pub fn titles(&self) -> Vec<String> {
        self.sent().into_iter().map(|n| n.title).collect()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        self.sent
            .lock()
            .expect("notification sink mutex poisoned")
            .push(notification);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
