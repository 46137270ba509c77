//! # oja-core: Pure Business Logic for the Oja Cart
//!
//! This crate is the **heart** of the Oja marketplace cart. It contains all
//! cart business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                       Oja Cart Architecture                          │
//! │                                                                      │
//! │  ┌────────────────────────────────────────────────────────────────┐ │
//! │  │              UI Consumers (cart panel, checkout)               │ │
//! │  │        may only call the store's public operations             │ │
//! │  └───────────────────────────┬────────────────────────────────────┘ │
//! │                              │                                       │
//! │  ┌───────────────────────────▼────────────────────────────────────┐ │
//! │  │                  oja-store (CartStore)                          │ │
//! │  │     id generation • storage slot • notification sink           │ │
//! │  └───────────────────────────┬────────────────────────────────────┘ │
//! │                              │                                       │
//! │  ┌───────────────────────────▼────────────────────────────────────┐ │
//! │  │               ★ oja-core (THIS CRATE) ★                         │ │
//! │  │                                                                 │ │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌────────────┐        │ │
//! │  │   │  types   │ │  money   │ │   cart   │ │ validation │        │ │
//! │  │   │ LineItem │ │  Money   │ │   Cart   │ │   policy   │        │ │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └────────────┘        │ │
//! │  │                                                                 │ │
//! │  │   NO I/O • NO STORAGE • NO NOTIFICATIONS • PURE FUNCTIONS       │ │
//! │  └────────────────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartLineItem, LineItemDraft, snapshots)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart collection: merging, quantities, totals
//! - [`error`] - Domain error types
//! - [`validation`] - Add-time validation policy
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, logging, and notification delivery are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole naira (i64), no floats
//! 4. **No-op over error**: removing or updating an absent id is defined
//!    behavior, not a failure

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use oja_core::Money` instead of
// `use oja_core::money::Money`

pub use cart::{AddOutcome, Cart, CartSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{CartLineItem, LineItemDraft, ShippingInfo, VendorInfo};
