//! # Validation Module
//!
//! Add-time validation policy for the Oja cart.
//!
//! ## Policy
//! The original storefront accepted any input on add — negative quantities
//! and negative prices flowed straight into totals. This crate adopts an
//! explicit policy instead (recorded in DESIGN.md):
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  Add-Time Validation Policy                                          │
//! │                                                                      │
//! │  draft.quantity          must be >= 1                                │
//! │  draft.price             must be >= 0 (zero = free item)             │
//! │  draft.discount_price    must be >= 0 when present                   │
//! │  draft.shipping.cost     must be >= 0                                │
//! │  draft.product_id        must be non-empty                           │
//! │  draft.vendor_id         must be non-empty                           │
//! │                                                                      │
//! │  Everything else (names, image URLs, locations) is display-only      │
//! │  snapshot data and is accepted verbatim.                             │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `add` validates. `update_quantity` keeps its defined semantics
//! (<= 0 removes) and `remove`/`clear` are unconditional.

use crate::error::ValidationError;
use crate::types::LineItemDraft;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a quantity passed to an add operation.
///
/// ## Example
/// ```rust
/// use oja_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-3).is_err());
/// ```
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
            value: quantity,
        });
    }

    Ok(())
}

/// Validates a monetary amount in whole naira.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, free shipping)
pub fn validate_amount(field: &str, naira: i64) -> ValidationResult<()> {
    if naira < 0 {
        return Err(ValidationError::NegativeAmount {
            field: field.to_string(),
            value: naira,
        });
    }

    Ok(())
}

/// Validates an opaque identifier field (product/vendor id).
pub fn validate_identifier(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validator
// =============================================================================

/// Validates a whole [`LineItemDraft`] against the add-time policy.
///
/// The first violated rule wins; callers get one error at a time, matching
/// how the notification surface reports problems.
pub fn validate_draft(draft: &LineItemDraft) -> ValidationResult<()> {
    validate_identifier("productId", &draft.product_id)?;
    validate_identifier("vendorId", &draft.vendor_id)?;
    validate_quantity(draft.quantity)?;
    validate_amount("price", draft.price.naira())?;
    if let Some(discount) = draft.discount_price {
        validate_amount("discountPrice", discount.naira())?;
    }
    validate_amount("shipping.cost", draft.shipping.cost.naira())?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{ShippingInfo, VendorInfo};

    fn draft() -> LineItemDraft {
        LineItemDraft {
            product_id: "p1".to_string(),
            vendor_id: "v1".to_string(),
            name: "Ankara Tote".to_string(),
            price: Money::from_naira(1000),
            discount_price: None,
            quantity: 1,
            image: "https://cdn.oja.test/p1.png".to_string(),
            vendor: VendorInfo {
                name: "Ada Crafts".to_string(),
                location: "Enugu".to_string(),
            },
            shipping: ShippingInfo {
                cost: Money::from_naira(500),
                estimated_days: 3,
            },
        }
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("price", 0).is_ok());
        assert!(validate_amount("price", 1099).is_ok());
        assert!(validate_amount("price", -100).is_err());
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("productId", "p1").is_ok());
        assert!(validate_identifier("productId", "").is_err());
        assert!(validate_identifier("productId", "   ").is_err());
    }

    #[test]
    fn test_validate_draft_accepts_free_items() {
        let mut d = draft();
        d.price = Money::zero();
        d.shipping.cost = Money::zero();
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn test_validate_draft_rejects_bad_fields() {
        let mut d = draft();
        d.quantity = 0;
        assert!(validate_draft(&d).is_err());

        let mut d = draft();
        d.discount_price = Some(Money::from_naira(-1));
        assert!(validate_draft(&d).is_err());

        let mut d = draft();
        d.vendor_id = String::new();
        assert!(validate_draft(&d).is_err());
    }
}
