//! # Domain Types
//!
//! Core domain types for the Oja cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                                │
//! │                                                                      │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐ │
//! │  │  LineItemDraft   │   │   CartLineItem   │   │   VendorInfo     │ │
//! │  │  ──────────────  │   │  ──────────────  │   │  ──────────────  │ │
//! │  │  caller-supplied │──►│  id (generated)  │   │  name            │ │
//! │  │  snapshot, no id │   │  + full snapshot │   │  location        │ │
//! │  └──────────────────┘   └──────────────────┘   └──────────────────┘ │
//! │                                                                      │
//! │                          ┌──────────────────┐                        │
//! │                          │   ShippingInfo   │                        │
//! │                          │  ──────────────  │                        │
//! │                          │  cost (per line) │                        │
//! │                          │  estimated_days  │                        │
//! │                          └──────────────────┘                        │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! Everything except `quantity` is a frozen copy of catalog data taken at
//! add time. If the vendor later changes a price or relocates, existing
//! cart entries keep displaying what the shopper agreed to.
//!
//! ## Merge Identity
//! The `(product_id, vendor_id)` pair is the merge key: the same product
//! sold by two vendors is two distinct line items.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Vendor Snapshot
// =============================================================================

/// Vendor display snapshot frozen into a line item at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorInfo {
    /// Vendor display name.
    pub name: String,

    /// Vendor location (city/state), shown next to shipping estimates.
    pub location: String,
}

// =============================================================================
// Shipping Snapshot
// =============================================================================

/// Shipping terms frozen into a line item at add time.
///
/// ## Per-Line Charge
/// `cost` is charged once per distinct line item, NOT per unit. Raising the
/// quantity of a line never raises its shipping charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    /// Flat shipping charge for this line item.
    pub cost: Money,

    /// Estimated delivery window in days.
    pub estimated_days: u32,
}

// =============================================================================
// Line Item Draft
// =============================================================================

/// Caller-supplied snapshot for an add operation.
///
/// Identical to [`CartLineItem`] minus the `id`: identifiers are assigned by
/// the store's injected generator, never by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemDraft {
    /// Catalog entry being purchased.
    pub product_id: String,

    /// Vendor selling the entry.
    pub vendor_id: String,

    /// Display name snapshot.
    pub name: String,

    /// Regular unit price.
    pub price: Money,

    /// Discounted unit price; effective when present and lower than `price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Money>,

    /// Units requested.
    pub quantity: i64,

    /// Display image URL snapshot.
    pub image: String,

    /// Vendor snapshot.
    pub vendor: VendorInfo,

    /// Shipping snapshot.
    pub shipping: ShippingInfo,
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One entry in the cart: a `(product_id, vendor_id)` pair and its
/// aggregate quantity, plus the frozen catalog snapshot.
///
/// ## Storage Shape
/// Serializes to the fixed camelCase slot shape:
/// ```json
/// { "id": "...", "productId": "p1", "vendorId": "v1", "name": "...",
///   "price": 1000, "discountPrice": 800, "quantity": 2, "image": "...",
///   "vendor": { "name": "...", "location": "..." },
///   "shipping": { "cost": 500, "estimatedDays": 3 } }
/// ```
/// `discountPrice` is omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Unique identifier, assigned once at insertion and never recycled.
    pub id: String,

    /// Catalog entry being purchased.
    pub product_id: String,

    /// Vendor selling the entry.
    pub vendor_id: String,

    /// Display name at time of adding (frozen).
    pub name: String,

    /// Regular unit price at time of adding (frozen).
    pub price: Money,

    /// Discounted unit price at time of adding (frozen).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Money>,

    /// Units in the cart. Positive while the item exists.
    pub quantity: i64,

    /// Display image URL at time of adding (frozen).
    pub image: String,

    /// Vendor snapshot at time of adding (frozen).
    pub vendor: VendorInfo,

    /// Shipping snapshot at time of adding (frozen).
    pub shipping: ShippingInfo,
}

impl CartLineItem {
    /// Creates a line item from a draft and a freshly assigned id.
    pub fn from_draft(id: String, draft: LineItemDraft) -> Self {
        CartLineItem {
            id,
            product_id: draft.product_id,
            vendor_id: draft.vendor_id,
            name: draft.name,
            price: draft.price,
            discount_price: draft.discount_price,
            quantity: draft.quantity,
            image: draft.image,
            vendor: draft.vendor,
            shipping: draft.shipping,
        }
    }

    /// The unit price that actually counts toward totals:
    /// `discount_price` when present, the regular `price` otherwise.
    #[inline]
    pub fn effective_unit_price(&self) -> Money {
        self.discount_price.unwrap_or(self.price)
    }

    /// Calculates the line total (effective unit price × quantity).
    ///
    /// Shipping is deliberately excluded: it is a per-line charge summed
    /// separately by the cart.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.effective_unit_price().multiply_quantity(self.quantity)
    }

    /// Checks whether this item and a draft refer to the same
    /// `(product_id, vendor_id)` pair.
    #[inline]
    pub fn same_listing(&self, draft: &LineItemDraft) -> bool {
        self.product_id == draft.product_id && self.vendor_id == draft.vendor_id
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
